use crate::core::{HolidayRecord, Selection};
use crate::presentation::months::month_name;
use crate::utils::error::{HolidayError, Result};
use serde::{Deserialize, Serialize};

pub const TITLE: &str = "BankWala - Bank Holidays in India";
const DATE_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
}

pub fn render_heading(selection: &Selection) -> String {
    let month = month_name(&selection.month).unwrap_or(selection.month.as_str());
    format!("{}\n{} {}", TITLE, month, selection.year)
}

pub fn render(records: &[HolidayRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(records)),
        OutputFormat::Csv => render_delimited(records, b','),
        OutputFormat::Tsv => render_delimited(records, b'\t'),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
    }
}

fn render_table(records: &[HolidayRecord]) -> String {
    let name_width = records
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Holiday Name".len());

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(format!("{:<DATE_WIDTH$} {}", "Date", "Holiday Name"));
    lines.push(format!("{} {}", "-".repeat(DATE_WIDTH), "-".repeat(name_width)));
    for record in records {
        lines.push(format!("{:<DATE_WIDTH$} {}", record.date, record.name));
    }
    lines.join("\n")
}

fn render_delimited(records: &[HolidayRecord], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(["date", "name"])?;
    for record in records {
        writer.write_record([record.date.as_str(), record.name.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| HolidayError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| HolidayError::ConfigError {
        message: format!("rendered output is not UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<HolidayRecord> {
        vec![
            HolidayRecord::new("2024-01-01", "New Year's Day"),
            HolidayRecord::new("2024-01-26", "Republic Day"),
        ]
    }

    #[test]
    fn test_table_has_two_columns() {
        let output = render(&sample(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("Date"));
        assert!(lines[0].ends_with("Holiday Name"));
        assert_eq!(lines[2], "2024-01-01   New Year's Day");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let output = render(&[], OutputFormat::Table).unwrap();
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_csv_quotes_when_needed() {
        let records = vec![HolidayRecord::new("2024-10-12", "Dussehra, Vijayadashami")];
        let output = render(&records, OutputFormat::Csv).unwrap();
        assert_eq!(output, "date,name\n2024-10-12,\"Dussehra, Vijayadashami\"\n");
    }

    #[test]
    fn test_tsv_output() {
        let output = render(&sample(), OutputFormat::Tsv).unwrap();
        assert!(output.starts_with("date\tname\n2024-01-01\tNew Year's Day\n"));
    }

    #[test]
    fn test_json_output() {
        let output = render(&sample(), OutputFormat::Json).unwrap();
        let parsed: Vec<HolidayRecord> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_heading_uses_month_name() {
        let heading = render_heading(&Selection::new("2025", "08"));
        assert_eq!(heading, "BankWala - Bank Holidays in India\nAugust 2025");
    }
}
