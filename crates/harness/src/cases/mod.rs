//! The benchmark case roster.
//!
//! Each case wraps one workload with an iteration plan, a wall-clock
//! measurement, and correctness assertions. Every case ships a `Default`
//! canonical plan; scale lives in the plan, not in parallel case variants.

mod async_ops;
mod factorial;
mod fibonacci;
mod math;
mod memory;
mod prime;
mod sorting;
mod strings;

pub use async_ops::{AsyncCase, AsyncPlan};
pub use factorial::{FactorialCase, FactorialPlan};
pub use fibonacci::{FibonacciCase, FibonacciPlan};
pub use math::{DatasetStats, MathCase, MathPlan};
pub use memory::{MemoryCase, MemoryPlan};
pub use prime::{PrimeCase, PrimePlan};
pub use sorting::{SortingCase, SortingPlan};
pub use strings::{StringCase, StringPlan};
