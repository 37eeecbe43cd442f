use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

const FIELD_SEPARATOR: char = ';';
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    #[error("expected 3 fields separated by ';', found {0}")]
    FieldCount(usize),
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// A single donation. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    category: String,
    amount: Decimal,
    date: NaiveDate,
}

impl Record {
    pub fn new(category: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            category: category.into(),
            amount,
            date,
        }
    }

    /// Builds a record from the raw text a user typed in for each field.
    pub fn from_fields(category: &str, amount: &str, date: &str) -> Result<Self, ParseError> {
        Ok(Self::new(category, parse_amount(amount)?, parse_date(date)?))
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Renders the record as one `category;amount;date` line, without line terminator.
    ///
    /// A category containing `;` or a line break is written as-is and won't decode back.
    pub fn encode(&self) -> String {
        format!(
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            self.category,
            self.amount,
            self.date.format(DATE_FORMAT),
        )
    }

    pub fn decode(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let [category, amount, date] = fields.as_slice() else {
            return Err(ParseError::FieldCount(fields.len()));
        };
        Self::from_fields(category, amount, date)
    }
}

pub fn parse_amount(content: &str) -> Result<Decimal, ParseError> {
    let content = content.trim();
    if !is_plain_number(content) {
        return Err(ParseError::InvalidAmount(content.to_string()));
    }
    let parsed = if content.contains(['e', 'E']) {
        // Floating point formatters write large values like 1.0E7
        Decimal::from_scientific(content)
    } else {
        Decimal::from_str_exact(content)
    };
    parsed.map_err(|_| ParseError::InvalidAmount(content.to_string()))
}

/// `[+-]digits[.digits]`, optionally followed by `e[+-]digits`
fn is_plain_number(content: &str) -> bool {
    fn unsigned(content: &str) -> &str {
        content.strip_prefix(['+', '-']).unwrap_or(content)
    }
    fn digits(content: &str) -> bool {
        !content.is_empty() && content.bytes().all(|b| b.is_ascii_digit())
    }

    let (mantissa, exponent) = match content.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (content, None),
    };
    let mantissa = match unsigned(mantissa).split_once('.') {
        Some((integral, fractional)) => digits(integral) && digits(fractional),
        None => digits(unsigned(mantissa)),
    };
    mantissa && exponent.map_or(true, |exponent| digits(unsigned(exponent)))
}

pub fn parse_date(content: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(content, DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDate(content.to_string()))
}
