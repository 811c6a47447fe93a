use anyhow::Result;
use colored::Colorize;
use kanban_router::Params;

use super::TableOptions;

pub fn execute(options: &TableOptions, name: &str, params: Vec<(String, String)>) -> Result<()> {
    let table = options.load_table()?;
    let params: Params = params.into_iter().collect();

    let path = table.resolve_by_name(name, &params)?;
    let href = table.history().href(&path);

    println!("{} {}", "path:".green().bold(), path);
    println!("{} {}", "href:".green().bold(), href);

    Ok(())
}

/// Parses a `key=value` argument
pub fn parse_param(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", arg)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(parse_param("id=7"), Ok(("id".to_string(), "7".to_string())));
        assert_eq!(parse_param("q=a=b"), Ok(("q".to_string(), "a=b".to_string())));
        assert!(parse_param("id").is_err());
        assert!(parse_param("=7").is_err());
    }
}
