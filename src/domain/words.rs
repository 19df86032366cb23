use crate::domain::AmountInput;

const UNITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 5] = ["", "thousand", "million", "billion", "trillion"];

/// Largest whole amount the scale vocabulary can name.
pub const MAX_WHOLE_AMOUNT: u64 = 999_999_999_999_999;

/// A three-digit chunk of a whole number together with its scale name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleGroup {
    pub value: u16,
    pub scale: &'static str,
}

impl ScaleGroup {
    /// Words for this group, e.g. `"two hundred thirty-four thousand"`.
    pub fn to_words(&self) -> String {
        let words = below_thousand_to_words(self.value);
        if self.scale.is_empty() {
            words
        } else {
            format!("{} {}", words, self.scale)
        }
    }
}

/// Split `n` into its non-zero three-digit groups, most significant first.
/// Returns `None` when `n` exceeds [`MAX_WHOLE_AMOUNT`].
pub fn scale_groups(n: u64) -> Option<Vec<ScaleGroup>> {
    if n > MAX_WHOLE_AMOUNT {
        return None;
    }

    let mut groups: Vec<ScaleGroup> = SCALES
        .iter()
        .scan(n, |rest, &scale| {
            if *rest == 0 {
                return None;
            }
            let value = (*rest % 1000) as u16;
            *rest /= 1000;
            Some(ScaleGroup { value, scale })
        })
        .filter(|group| group.value > 0)
        .collect();

    groups.reverse();
    Some(groups)
}

/// Convert a whole number to words: `1234` -> `"one thousand two hundred thirty-four"`.
/// Returns `None` above the trillions.
pub fn whole_number_to_words(n: u64) -> Option<String> {
    if n == 0 {
        return Some(UNITS[0].to_string());
    }

    let words: Vec<String> = scale_groups(n)?.iter().map(ScaleGroup::to_words).collect();
    Some(words.join(" "))
}

fn below_thousand_to_words(n: u16) -> String {
    let hundreds = usize::from(n / 100);
    let remainder = usize::from(n % 100);

    let remainder_words = match remainder {
        0 => String::new(),
        10..=19 => TEENS[remainder - 10].to_string(),
        _ => {
            let tens = remainder / 10;
            let units = remainder % 10;
            match (tens, units) {
                (0, u) => UNITS[u].to_string(),
                (t, 0) => TENS[t].to_string(),
                (t, u) => format!("{}-{}", TENS[t], UNITS[u]),
            }
        }
    };

    match (hundreds, remainder_words.is_empty()) {
        (0, _) => remainder_words,
        (h, true) => format!("{} hundred", UNITS[h]),
        (h, false) => format!("{} hundred {}", UNITS[h], remainder_words),
    }
}

/// Convert a monetary amount into the words written on a check.
///
/// The result reads `"<whole words> and <cents>/100"`, prefixed with
/// `"minus "` for negative amounts:
///
/// ```
/// use chequer::domain::convert_amount_to_words;
///
/// assert_eq!(convert_amount_to_words(123.45), "one hundred twenty-three and 45/100");
/// assert_eq!(convert_amount_to_words("-1"), "minus one and 00/100");
/// assert_eq!(convert_amount_to_words("abc"), "");
/// ```
///
/// Absent, empty, unparseable and non-finite input yields an empty string,
/// as do amounts beyond the trillions. Cents that round up to 100 carry
/// into the whole part.
pub fn convert_amount_to_words(value: impl Into<AmountInput>) -> String {
    let Some(number) = value.into().to_number() else {
        return String::new();
    };
    if !number.is_finite() {
        return String::new();
    }

    let is_negative = number < 0.0;
    let abs_number = number.abs();

    let mut whole = abs_number.floor();
    let mut cents = ((abs_number - whole) * 100.0).round();
    if cents >= 100.0 {
        whole += 1.0;
        cents = 0.0;
    }

    if whole > MAX_WHOLE_AMOUNT as f64 {
        return String::new();
    }

    let Some(whole_words) = whole_number_to_words(whole as u64) else {
        return String::new();
    };

    let words = format!("{} and {:02}/100", whole_words, cents as u8);
    if is_negative {
        format!("minus {}", words)
    } else {
        words
    }
}
