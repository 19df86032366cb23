use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Read, Write};

use crate::application::{AppError, AppResult};
use crate::domain::convert_amount_to_words;

/// Amounts read from an input source, plus the records that could not be read.
#[derive(Debug, Clone, Default)]
pub struct BatchInput {
    pub amounts: Vec<String>,
    pub errors: Vec<BatchError>,
}

/// A record that was skipped while reading a batch
#[derive(Debug, Clone)]
pub struct BatchError {
    pub line: usize,
    pub error: String,
}

/// One converted amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub amount: String,
    pub words: String,
    pub valid: bool,
}

impl Conversion {
    pub fn from_amount(amount: &str) -> Self {
        let words = convert_amount_to_words(amount);
        Self {
            amount: amount.to_string(),
            valid: !words.is_empty(),
            words,
        }
    }
}

/// Read amounts from a headered CSV. `column` selects the amount column by
/// header name; the first column is used when it is `None`.
pub fn read_amounts_csv<R: Read>(reader: R, column: Option<&str>) -> AppResult<BatchInput> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?;
    let index = match column {
        Some(name) => headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| AppError::ColumnNotFound(name.to_string()))?,
        None => 0,
    };

    let mut input = BatchInput::default();
    let mut record = csv::StringRecord::new();
    loop {
        // Records may span several lines, so take line numbers from the reader
        let start_line = csv_reader.position().line();

        match csv_reader.read_record(&mut record) {
            Ok(true) => {
                let amount = record.get(index).unwrap_or("").trim();
                input.amounts.push(amount.to_string());
            }
            Ok(false) => break,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                let line = e.position().map_or(start_line, |p| p.line()) as usize;
                tracing::warn!(line, error = %e, "skipping unreadable CSV record");
                input.errors.push(BatchError {
                    line,
                    error: format!("CSV parse error: {}", e),
                });
            }
        }
    }

    Ok(input)
}

/// Read one amount per line, skipping blank lines.
pub fn read_amounts_lines<R: Read>(reader: R) -> AppResult<BatchInput> {
    let mut input = BatchInput::default();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let amount = line.trim();
        if !amount.is_empty() {
            input.amounts.push(amount.to_string());
        }
    }
    Ok(input)
}

pub fn convert_all<S: AsRef<str>>(amounts: &[S]) -> Vec<Conversion> {
    amounts
        .iter()
        .map(|a| Conversion::from_amount(a.as_ref()))
        .collect()
}

/// Write conversions as CSV with an `amount,words` header.
pub fn write_csv<W: Write>(writer: W, conversions: &[Conversion]) -> AppResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["amount", "words"])?;

    for conversion in conversions {
        csv_writer.write_record([conversion.amount.as_str(), conversion.words.as_str()])?;
    }

    csv_writer.flush()?;
    Ok(conversions.len())
}

/// Write conversions as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, conversions: &[Conversion]) -> AppResult<usize> {
    serde_json::to_writer_pretty(&mut writer, conversions)?;
    writeln!(writer)?;
    Ok(conversions.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_amounts_csv_first_column() {
        let data = "amount,note\n12.50,lunch\n100,rent\n";
        let input = read_amounts_csv(data.as_bytes(), None).unwrap();
        assert_eq!(input.amounts, vec!["12.50", "100"]);
        assert!(input.errors.is_empty());
    }

    #[test]
    fn test_read_amounts_csv_named_column() {
        let data = "payee,total\nAlice,1.05\nBob,abc\n";
        let input = read_amounts_csv(data.as_bytes(), Some("total")).unwrap();
        assert_eq!(input.amounts, vec!["1.05", "abc"]);
    }

    #[test]
    fn test_read_amounts_csv_missing_column() {
        let data = "payee,total\nAlice,1.05\n";
        let err = read_amounts_csv(data.as_bytes(), Some("amount")).unwrap_err();
        assert!(matches!(err, AppError::ColumnNotFound(ref c) if c == "amount"));
    }

    #[test]
    fn test_read_amounts_lines() {
        let data = "1\n\n  2.5  \n\nfoo\n";
        let input = read_amounts_lines(data.as_bytes()).unwrap();
        assert_eq!(input.amounts, vec!["1", "2.5", "foo"]);
    }

    #[test]
    fn test_conversion_marks_invalid_amounts() {
        let conversions = convert_all(&["10", "", "x"]);
        assert_eq!(conversions[0].words, "ten and 00/100");
        assert!(conversions[0].valid);
        assert_eq!(conversions[1].words, "");
        assert!(!conversions[1].valid);
        assert!(!conversions[2].valid);
    }
}
