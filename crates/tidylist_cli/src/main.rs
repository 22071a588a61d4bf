//! CLI smoke entry point.
//!
//! # Responsibility
//! - Boot the store the same way the app does and print its screens.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `tidylist_cli [seed.json]`. Without an argument the seed comes from
//! `TIDYLIST_SEED_PATH`, or the bundled dataset.

use std::path::PathBuf;
use std::process::ExitCode;
use tidylist_core::{store_from_config, CoreConfig, TaskStore};

fn main() -> ExitCode {
    let mut config = CoreConfig::from_env();
    if let Some(path) = std::env::args_os().nth(1) {
        config.seed_path = Some(PathBuf::from(path));
    }

    let store = match store_from_config(&config) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("tidylist_cli: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("tidylist_core ping={}", tidylist_core::ping());
    println!("tidylist_core version={}", tidylist_core::core_version());
    print_store(&store);
    ExitCode::SUCCESS
}

fn print_store(store: &TaskStore) {
    println!("lists={}", store.len());
    for list in store.lists() {
        let date = match list.date() {
            "" => "select date",
            date => date,
        };
        println!(
            "[{}] {} ({}) tasks={}",
            list.key(),
            list.title(),
            date,
            list.task_count()
        );
        for task in list.tasks().unwrap_or_default() {
            let mark = if task.completed() { "x" } else { " " };
            println!("    [{mark}] {} {}", task.key(), task.text());
        }
    }
}
