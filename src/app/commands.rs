use crate::config::Command;
use crate::core::catalog;
use crate::core::codec::InputFormat;
use crate::core::table::{write_table, OutputFormat};
use crate::utils::error::{ModelError, Result};
use std::io::Write;
use std::path::Path;

/// Runs one inspector command, writing its report to `out`.
pub fn execute<W: Write>(command: &Command, out: &mut W) -> Result<()> {
    match command {
        Command::Enums { name: None, format } => list_enums(*format, out),
        Command::Enums {
            name: Some(name),
            format,
        } => list_enum_values(name, *format, out),
        Command::ParseEnum { name, value } => {
            let canonical = catalog::parse_enum(name, value)?;
            writeln!(out, "{}", canonical)?;
            Ok(())
        }
        Command::Shapes => {
            for entry in catalog::shapes() {
                writeln!(out, "{}", entry.name)?;
            }
            Ok(())
        }
        Command::Operations { format } => list_operations(*format, out),
        Command::Render {
            shape,
            file,
            input_format,
            json,
        } => render(shape, file, *input_format, *json, out),
    }
}

fn list_enums<W: Write>(format: OutputFormat, out: &mut W) -> Result<()> {
    let rows: Vec<Vec<String>> = catalog::enums()
        .iter()
        .map(|entry| vec![entry.name.to_string(), entry.values.len().to_string()])
        .collect();
    write_table(format, &["enum", "values"], &rows, out)
}

fn list_enum_values<W: Write>(name: &str, format: OutputFormat, out: &mut W) -> Result<()> {
    let entry = catalog::find_enum(name)?;
    let rows: Vec<Vec<String>> = entry
        .values
        .iter()
        .map(|value| vec![value.to_string()])
        .collect();
    write_table(format, &[entry.name], &rows, out)
}

fn list_operations<W: Write>(format: OutputFormat, out: &mut W) -> Result<()> {
    let rows: Vec<Vec<String>> = catalog::operations()
        .iter()
        .map(|entry| {
            vec![
                entry.action.to_string(),
                entry.request.to_string(),
                entry.result.to_string(),
            ]
        })
        .collect();
    write_table(format, &["action", "request", "result"], &rows, out)
}

fn render<W: Write>(
    shape: &str,
    file: &Path,
    input_format: Option<InputFormat>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let format = match input_format.or_else(|| InputFormat::from_path(file)) {
        Some(format) => format,
        None => {
            return Err(ModelError::invalid_argument(
                "file",
                file.display().to_string(),
                "Cannot infer input format; use a .json or .toml file or pass --input-format",
            ))
        }
    };

    // Shape lookup happens before the file is read.
    let entry = catalog::find_shape(shape)?;
    let text = std::fs::read_to_string(file)?;
    tracing::debug!(shape, file = %file.display(), ?format, "rendering shape");

    let decoded = entry.decode(format, &text)?;
    if json {
        writeln!(out, "{}", decoded.to_json_pretty()?)?;
    } else {
        writeln!(out, "{}", decoded)?;
    }
    Ok(())
}
