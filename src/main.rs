//! simfs - Entry Point
//!
//! Thin shell over the filesystem table: loads the configured layout and
//! prints a df-style report of the simulated machine.

use log::{error, info};

use simfs::{Filesystem, Settings};

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Building filesystem table from {} (content root: {})",
        settings.layout_path, settings.files_root
    );

    let table = match Filesystem::new(&settings) {
        Ok(table) => table,
        Err(e) => {
            error!("Failed to build filesystem table: {}", e);
            std::process::exit(1);
        }
    };
    info!("Table ready with {} entries", table.entry_count());

    println!("{:<12} {:<10} {:>14} MOUNTED ON", "PARTITION", "DISK", "USED");
    let mut names: Vec<&String> = table.partitions().keys().collect();
    names.sort();
    for name in names {
        let part = &table.partitions()[name];
        println!(
            "{:<12} {:<10} {:>14} {}",
            name,
            part.disk.as_deref().unwrap_or("-"),
            part.used,
            part.mount.as_deref().unwrap_or("-")
        );
    }
}
