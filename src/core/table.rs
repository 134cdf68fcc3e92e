use crate::utils::error::Result;
use std::io::Write;

/// Output layouts for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Space-padded columns for terminals.
    #[default]
    Text,
    Csv,
    Tsv,
}

pub fn write_table<W: Write>(
    format: OutputFormat,
    headers: &[&str],
    rows: &[Vec<String>],
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(headers, rows, out),
        OutputFormat::Csv => write_delimited(b',', headers, rows, out),
        OutputFormat::Tsv => write_delimited(b'\t', headers, rows, out),
    }
}

fn write_delimited<W: Write>(
    delimiter: u8,
    headers: &[&str],
    rows: &[Vec<String>],
    out: &mut W,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_text<W: Write>(headers: &[&str], rows: &[Vec<String>], out: &mut W) -> Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    write_text_row(&header_cells, &widths, out)?;
    for row in rows {
        write_text_row(row, &widths, out)?;
    }
    Ok(())
}

fn write_text_row<W: Write>(cells: &[String], widths: &[usize], out: &mut W) -> Result<()> {
    let mut line = String::new();
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            line.push_str("  ");
        }
        let width = widths.get(index).copied().unwrap_or(0);
        line.push_str(&format!("{:<width$}", cell, width = width));
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["VolumeType".to_string(), "7".to_string()],
            vec!["Tenancy".to_string(), "3".to_string()],
        ]
    }

    #[test]
    fn test_csv() {
        let mut out = Vec::new();
        write_table(OutputFormat::Csv, &["name", "values"], &rows(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name,values\nVolumeType,7\nTenancy,3\n"
        );
    }

    #[test]
    fn test_tsv() {
        let mut out = Vec::new();
        write_table(OutputFormat::Tsv, &["name", "values"], &rows(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name\tvalues\nVolumeType\t7\nTenancy\t3\n"
        );
    }

    #[test]
    fn test_text_alignment() {
        let mut out = Vec::new();
        write_table(OutputFormat::Text, &["name", "values"], &rows(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name        values\nVolumeType  7\nTenancy     3\n"
        );
    }

    #[test]
    fn test_text_alignment_counts_chars() {
        let rows = vec![
            vec!["Größe".to_string(), "1".to_string()],
            vec!["Tag".to_string(), "2".to_string()],
        ];
        let mut out = Vec::new();
        write_table(OutputFormat::Text, &["name", "n"], &rows, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name   n\nGröße  1\nTag    2\n"
        );
    }
}
