use anyhow::Result;
use colored::Colorize;

use super::TableOptions;

pub fn execute(options: &TableOptions) -> Result<()> {
    println!("{}", "Checking route table...".green().bold());

    if !options.config.exists() {
        println!(
            "{} {} not found, checking built-in routes",
            "⚠".yellow(),
            options.config.display()
        );
    }

    let table = options.load_table()?;

    println!(
        "{} {} routes, names and paths unique, all params consumable",
        "✓".green().bold(),
        table.len()
    );

    Ok(())
}
