use anyhow::Result;
use colored::Colorize;

use super::TableOptions;

pub fn execute(options: &TableOptions) -> Result<()> {
    let table = options.load_table()?;
    let history = table.history();

    println!(
        "{} {} history, base {}",
        "Routes".green().bold(),
        format!("{:?}", history.mode()).to_lowercase().cyan(),
        history.base().cyan()
    );
    println!();

    for route in table.routes() {
        let props = if route.props_from_params {
            " (props)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {:<16} {:<18} {}{}",
            route.pattern.bold(),
            route.name,
            route.view.to_string().cyan(),
            props
        );
    }

    Ok(())
}
