use anyhow::Result;
use colored::Colorize;

use super::TableOptions;

pub fn execute(options: &TableOptions, location: &str) -> Result<()> {
    let table = options.load_table()?;

    // a miss surfaces once, through main's error report
    let m = table.resolve_location(location)?;

    println!("{} {}", "✓".green().bold(), m.name().bold());
    println!("  pattern: {}", m.route.pattern);
    println!("  view:    {}", m.view().to_string().cyan());

    let mut params: Vec<_> = m.params.iter().collect();
    params.sort();
    for (key, value) in params {
        println!("  param:   {} = {}", key, value);
    }

    let mut props: Vec<_> = m.props().into_iter().collect();
    props.sort();
    for (key, value) in props {
        println!("  prop:    {} = {}", key.yellow(), value);
    }

    for (key, value) in &m.query {
        println!("  query:   {} = {}", key, value);
    }
    if let Some(fragment) = &m.fragment {
        println!("  hash:    #{}", fragment);
    }

    Ok(())
}
