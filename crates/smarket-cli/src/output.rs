use std::io::Write;

use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

pub fn render<W: Write>(
    result: &CommandResult,
    format: OutputFormat,
    pretty: bool,
    out: &mut W,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = match &result.message {
                Some(message) => json!({ "message": message, "data": result.data }),
                None => json!({ "data": result.data }),
            };
            let rendered = if pretty {
                serde_json::to_string_pretty(&payload)?
            } else {
                serde_json::to_string(&payload)?
            };
            writeln!(out, "{rendered}")?;
        }
        OutputFormat::Table => render_table(result, out)?,
    }

    Ok(())
}

fn render_table<W: Write>(result: &CommandResult, out: &mut W) -> Result<(), CliError> {
    if let Some(message) = &result.message {
        writeln!(out, "{message}")?;
    }

    let Value::Object(fields) = &result.data else {
        writeln!(out, "{}", scalar(&result.data))?;
        return Ok(());
    };

    let width = fields.keys().map(String::len).max().unwrap_or(0);
    for (key, value) in fields {
        match value {
            Value::Array(_) | Value::Object(_) => {
                writeln!(out, "{key}:")?;
                for line in serde_json::to_string_pretty(value)?.lines() {
                    writeln!(out, "  {line}")?;
                }
            }
            _ => writeln!(out, "{key:<width$} : {}", scalar(value))?,
        }
    }

    Ok(())
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
