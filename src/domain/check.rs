use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::convert_amount_to_words;

pub const DATE_PLACEHOLDER: &str = "MM/DD/YYYY";
pub const PAYEE_PLACEHOLDER: &str = "Payee name";
pub const AMOUNT_PLACEHOLDER: &str = "0.00";
pub const AMOUNT_WORDS_PLACEHOLDER: &str = "Amount in words";
pub const MEMO_PLACEHOLDER: &str = "Memo";

const PREVIEW_WIDTH: usize = 72;
const INNER_WIDTH: usize = PREVIEW_WIDTH - 2;
const AMOUNT_WIDTH: usize = 20;
const SIGNATURE_WIDTH: usize = 24;

/// The fields written on a paper check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CheckFields")]
pub struct Check {
    pub date: Option<NaiveDate>,
    pub payee: String,
    pub amount_number: String,
    pub amount_words: String,
    pub memo: String,
}

/// Deserialized form of a check. The words line is never read back; it is
/// always derived from the amount.
#[derive(Deserialize)]
struct CheckFields {
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    payee: String,
    #[serde(default)]
    amount_number: String,
    #[serde(default)]
    memo: String,
}

impl From<CheckFields> for Check {
    fn from(fields: CheckFields) -> Self {
        Check {
            date: fields.date,
            payee: fields.payee,
            memo: fields.memo,
            ..Check::default()
        }
        .with_amount(&fields.amount_number)
    }
}

impl Check {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the amount as typed and recompute the words line from it.
    pub fn set_amount(&mut self, raw: &str) {
        self.amount_number = raw.trim().to_string();
        self.amount_words = convert_amount_to_words(self.amount_number.as_str());
    }

    pub fn with_amount(mut self, raw: &str) -> Self {
        self.set_amount(raw);
        self
    }

    pub fn with_payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = payee.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    /// True when the amount typed in could be written out in words.
    pub fn has_valid_amount(&self) -> bool {
        !self.amount_words.is_empty()
    }

    /// Words line for display, falling back to a placeholder when the
    /// amount is empty or could not be read.
    pub fn amount_words_or_placeholder(&self) -> &str {
        or_placeholder(&self.amount_words, AMOUNT_WORDS_PLACEHOLDER)
    }

    /// Date as printed on the check (MM/DD/YYYY), empty when unset.
    pub fn formatted_date(&self) -> String {
        self.date
            .map(|d| d.format("%m/%d/%Y").to_string())
            .unwrap_or_default()
    }

    /// Plain-text rendering of the check.
    pub fn render_preview(&self) -> String {
        let date = self.formatted_date();
        let date = or_placeholder(&date, DATE_PLACEHOLDER);
        let payee = or_placeholder(&self.payee, PAYEE_PLACEHOLDER);
        let amount = or_placeholder(&self.amount_number, AMOUNT_PLACEHOLDER);
        let memo = or_placeholder(&self.memo, MEMO_PLACEHOLDER);

        let border = format!("+{}+", "-".repeat(PREVIEW_WIDTH));
        let mut lines = vec![border.clone()];
        let date_line = format!("Date: {}", date);
        lines.push(row(&format!("{:>width$}", date_line, width = INNER_WIDTH)));
        lines.push(row(""));

        let label = "Pay to the order of: ";
        let amount_box = format!("$ {}", truncate(amount, AMOUNT_WIDTH));
        let payee_width = INNER_WIDTH - label.len() - amount_box.chars().count() - 1;
        let payee = truncate(payee, payee_width);
        lines.push(row(&format!("{label}{payee:<payee_width$} {amount_box}")));
        lines.push(row(""));

        let words_line = format!("{} DOLLARS", self.amount_words_or_placeholder());
        lines.extend(wrap(&words_line, INNER_WIDTH).iter().map(|l| row(l)));
        lines.push(row(""));
        let signature = format!("Signature: {}", "_".repeat(SIGNATURE_WIDTH));
        let memo_width = INNER_WIDTH - signature.len() - 1;
        let memo = truncate(&format!("Memo: {}", memo), memo_width);
        lines.push(row(&format!("{memo:<memo_width$} {signature}")));
        lines.push(border);

        lines.join("\n")
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

fn truncate(value: &str, width: usize) -> String {
    value.chars().take(width).collect()
}

/// Greedy word wrap; words longer than `width` are cut.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, width);
        let needed = current.chars().count() + word.chars().count() + 1;
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn row(content: &str) -> String {
    format!("| {} |", pad(&truncate(content, INNER_WIDTH)))
}

fn pad(content: &str) -> String {
    let fill = INNER_WIDTH.saturating_sub(content.chars().count());
    format!("{}{}", content, " ".repeat(fill))
}
