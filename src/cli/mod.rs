use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Read, Write};
use tracing::debug;

use crate::application::AppError;
use crate::domain::{Check, convert_amount_to_words};
use crate::io::{
    BatchInput, convert_all, read_amounts_csv, read_amounts_lines, write_csv, write_json,
};

/// Chequer - write check amounts in words
#[derive(Parser)]
#[command(name = "chequer")]
#[command(about = "Convert amounts to the words written on a paper check")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a single amount in words
    Words {
        /// Amount to convert (e.g., "123.45")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Text to print instead of failing when the amount is invalid
        #[arg(long)]
        placeholder: Option<String>,
    },

    /// Fill in a check and print it
    Check {
        /// Amount (e.g., "50.00" or "50")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,

        /// Payee name
        #[arg(short, long)]
        payee: Option<String>,

        /// Date of the check (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Memo line
        #[arg(short, long)]
        memo: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Convert many amounts from CSV or a plain list
    Batch {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// CSV column holding the amounts (default: first column)
        #[arg(short, long, conflicts_with = "lines")]
        column: Option<String>,

        /// Read one amount per line instead of CSV
        #[arg(long)]
        lines: bool,

        /// Format: csv, json
        #[arg(short, long, default_value = "csv")]
        format: String,
    },
}

#[derive(Serialize)]
struct WordsOutput<'a> {
    amount: &'a str,
    words: &'a str,
}

impl Cli {
    /// Set up the tracing subscriber. `RUST_LOG` wins over `--verbose`.
    pub fn init_tracing(&self) {
        let default = if self.verbose { "debug" } else { "warn" };
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| default.into()),
            )
            .init();
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Words {
                amount,
                format,
                placeholder,
            } => run_words_command(&amount, &format, placeholder.as_deref()),

            Commands::Check {
                amount,
                payee,
                date,
                memo,
                format,
            } => {
                let mut check = Check::new().with_amount(&amount);
                if let Some(payee) = payee {
                    check = check.with_payee(payee);
                }
                if let Some(date_str) = date {
                    check = check.with_date(parse_date(&date_str)?);
                }
                if let Some(memo) = memo {
                    check = check.with_memo(memo);
                }
                if !check.has_valid_amount() {
                    debug!(amount = %amount, "amount could not be written in words");
                }

                match format.as_str() {
                    "json" => println!("{}", serde_json::to_string_pretty(&check)?),
                    "text" => println!("{}", check.render_preview()),
                    other => return Err(AppError::UnknownFormat(other.to_string()).into()),
                }
                Ok(())
            }

            Commands::Batch {
                input,
                output,
                column,
                lines,
                format,
            } => run_batch_command(input, output, column, lines, &format),
        }
    }
}

fn run_words_command(amount: &str, format: &str, placeholder: Option<&str>) -> Result<()> {
    println!("{}", format_words(amount, format, placeholder)?);
    Ok(())
}

/// Render the words for `amount` in the requested format. An invalid amount
/// falls back to `placeholder`, or fails when none is given.
fn format_words(amount: &str, format: &str, placeholder: Option<&str>) -> Result<String> {
    let words = convert_amount_to_words(amount);
    debug!(amount, words = %words, "converted amount");

    let words = match (words.is_empty(), placeholder) {
        (false, _) => words,
        (true, Some(placeholder)) => placeholder.to_string(),
        (true, None) => return Err(AppError::InvalidAmount(amount.to_string()).into()),
    };

    match format {
        "json" => {
            let output = WordsOutput {
                amount,
                words: &words,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        "text" => Ok(words),
        other => Err(AppError::UnknownFormat(other.to_string()).into()),
    }
}

fn run_batch_command(
    input: Option<String>,
    output: Option<String>,
    column: Option<String>,
    lines: bool,
    format: &str,
) -> Result<()> {
    if !matches!(format, "csv" | "json") {
        return Err(AppError::UnknownFormat(format.to_string()).into());
    }

    let reader: Box<dyn Read> = match &input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("Failed to open input file '{}'", path))?,
        ),
        None => Box::new(io::stdin()),
    };

    let batch: BatchInput = if lines {
        read_amounts_lines(reader)?
    } else {
        read_amounts_csv(reader, column.as_deref())?
    };

    let conversions = convert_all(&batch.amounts);
    let invalid = conversions.iter().filter(|c| !c.valid).count();

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path))?,
        ),
        None => Box::new(io::stdout()),
    };

    let count = match format {
        "json" => write_json(writer, &conversions)?,
        _ => write_csv(writer, &conversions)?,
    };

    if output.is_some() {
        eprintln!("Converted {} amount(s)", count);
    }
    if invalid > 0 {
        eprintln!("{} amount(s) could not be written in words", invalid);
    }
    if !batch.errors.is_empty() {
        eprintln!("Skipped {} unreadable record(s):", batch.errors.len());
        for error in batch.errors.iter().take(10) {
            eprintln!("  Line {}: {}", error.line, error.error);
        }
        if batch.errors.len() > 10 {
            eprintln!("  ... and {} more errors", batch.errors.len() - 10);
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(parse_date("01/15/2024").is_err());
    }

    #[test]
    fn test_cli_parses_negative_amount() {
        let cli = Cli::try_parse_from(["chequer", "words", "-12.5"]).unwrap();
        match cli.command {
            Commands::Words { amount, format, .. } => {
                assert_eq!(amount, "-12.5");
                assert_eq!(format, "text");
            }
            _ => panic!("expected words command"),
        }
    }

    #[test]
    fn test_format_words_text() {
        assert_eq!(
            format_words("123.45", "text", None).unwrap(),
            "one hundred twenty-three and 45/100"
        );
        assert_eq!(
            format_words("7", "text", Some("Amount in words")).unwrap(),
            "seven and 00/100"
        );
    }

    #[test]
    fn test_format_words_json() {
        let output = format_words("-2", "json", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "amount": "-2", "words": "minus two and 00/100" })
        );
    }

    #[test]
    fn test_format_words_invalid_amount() {
        assert_eq!(
            format_words("abc", "text", Some("Amount in words")).unwrap(),
            "Amount in words"
        );

        let output = format_words("", "json", Some("n/a")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, serde_json::json!({ "amount": "", "words": "n/a" }));

        let err = format_words("abc", "text", None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid amount: abc");
    }

    #[test]
    fn test_format_words_unknown_format() {
        let err = format_words("12", "yaml", None).unwrap_err();
        assert_eq!(err.to_string(), "Unknown output format: yaml");
    }

    #[test]
    fn test_batch_column_conflicts_with_lines() {
        let result = Cli::try_parse_from(["chequer", "batch", "--lines", "--column", "amount"]);
        assert!(result.is_err());

        assert!(Cli::try_parse_from(["chequer", "batch", "--column", "amount"]).is_ok());
    }
}
