//! Binary entry point for `sync-version`.

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = sync_version::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
