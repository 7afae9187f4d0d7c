use std::path::Path;

use anyhow::Context;
use sheetloc::Config;

pub fn run(config_path: &Path) -> anyhow::Result<()> {
    let config = Config::from_file(config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    if config.books.is_empty() {
        println!("no books configured");
        return Ok(());
    }

    for (index, (name, book)) in config.books.iter().enumerate() {
        let default_marker = if index == 0 { " (default)" } else { "" };
        println!(
            "{name}{default_marker}: provider={} format={} -> {}",
            book.provider.name, book.exporter.format, book.exporter.destination_folder
        );
    }
    Ok(())
}
