//! Output formatting for different formats.

use clap::ValueEnum;
use colored::Colorize;
use serde_json::Value;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented key/value listing with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Print an API result in the chosen format.
pub fn print_value(format: OutputFormat, value: &Value) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        OutputFormat::Pretty => {
            let mut out = String::new();
            render(value, 0, &mut out);
            print!("{out}");
        }
    }
    Ok(())
}

/// Render a JSON value as an indented listing.
pub fn render(value: &Value, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, item) in map {
                if is_scalar(item) {
                    out.push_str(&format!("{indent}{} {}\n", format!("{key}:").bold(), scalar(item)));
                } else {
                    out.push_str(&format!("{indent}{}\n", format!("{key}:").bold().underline()));
                    render(item, depth + 1, out);
                }
            }
        }
        Value::Array(items) if items.is_empty() => {
            out.push_str(&format!("{indent}{}\n", "(none)".dimmed()));
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if is_scalar(item) {
                    out.push_str(&format!("{indent}- {}\n", scalar(item)));
                } else {
                    out.push_str(&format!("{indent}{}\n", format!("[{i}]").cyan()));
                    render(item, depth + 1, out);
                }
            }
        }
        other => out.push_str(&format!("{indent}{}\n", scalar(other))),
    }
}

const fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".dimmed().to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::from_str("json", true).unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("YAML", true).unwrap(), OutputFormat::Yaml);
        assert!(OutputFormat::from_str("csv", true).is_err());
    }

    #[test]
    fn test_render_nested() {
        colored::control::set_override(false);
        let mut out = String::new();
        render(
            &json!({"records": [{"name": "example.com", "ttl": 300}], "total": 1}),
            0,
            &mut out,
        );
        assert_eq!(out, "records:\n  [0]\n    name: example.com\n    ttl: 300\ntotal: 1\n");
    }
}
