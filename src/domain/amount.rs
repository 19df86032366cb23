/// A monetary amount as handed over by a caller: a number, raw text typed
/// into a field, or nothing at all.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountInput {
    Number(f64),
    Text(String),
    Absent,
}

impl AmountInput {
    /// Resolve the input to a number. Absent, empty and unparseable input
    /// all resolve to `None`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            AmountInput::Number(n) => Some(*n),
            AmountInput::Text(s) => parse_leading_decimal(s),
            AmountInput::Absent => None,
        }
    }
}

impl From<f64> for AmountInput {
    fn from(n: f64) -> Self {
        AmountInput::Number(n)
    }
}

impl From<i64> for AmountInput {
    fn from(n: i64) -> Self {
        AmountInput::Number(n as f64)
    }
}

impl From<u64> for AmountInput {
    fn from(n: u64) -> Self {
        AmountInput::Number(n as f64)
    }
}

impl From<i32> for AmountInput {
    fn from(n: i32) -> Self {
        AmountInput::Number(f64::from(n))
    }
}

impl From<&str> for AmountInput {
    fn from(s: &str) -> Self {
        AmountInput::Text(s.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(s: String) -> Self {
        AmountInput::Text(s)
    }
}

impl From<&String> for AmountInput {
    fn from(s: &String) -> Self {
        AmountInput::Text(s.clone())
    }
}

impl<T: Into<AmountInput>> From<Option<T>> for AmountInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AmountInput::Absent)
    }
}

/// Parse the longest decimal literal at the start of `input`, after leading
/// whitespace. Trailing garbage is ignored, so `"12.50 USD"` reads as 12.5.
/// Returns `None` when no digits are found.
pub fn parse_leading_decimal(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
