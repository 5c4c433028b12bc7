//! Benchlab CLI entry point.

fn main() {
    if let Err(e) = benchlab_cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
