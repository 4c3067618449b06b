//! Ranked items and their canonical order.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// An opaque, ranked identifier.
///
/// Equality is exact: `Int(3)`, `Number(3.0)` and `Text("3")` are distinct
/// items. They only meet in [`Ord`], where every item with an integer
/// reading joins the numeric group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Int(i64),
    /// A JSON number outside `i64`: a large unsigned integer or a float.
    Number(Number),
    Text(String),
}

/// An integer of any magnitude: sign plus decimal digits with no leading
/// zeros. Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Integer<'a> {
    negative: bool,
    digits: Cow<'a, str>,
}

impl<'a> Integer<'a> {
    fn new(negative: bool, digits: Cow<'a, str>) -> Self {
        let digits = match digits {
            Cow::Borrowed(d) => Cow::Borrowed(d.trim_start_matches('0')),
            Cow::Owned(d) => Cow::Owned(d.trim_start_matches('0').to_owned()),
        };
        if digits.is_empty() {
            return Self {
                negative: false,
                digits: Cow::Borrowed("0"),
            };
        }
        Self { negative, digits }
    }

    /// Trimmed text with an optional leading sign and ASCII digits only.
    fn parse(text: &'a str) -> Option<Self> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self::new(negative, Cow::Borrowed(digits)))
    }

    fn from_i64(value: i64) -> Self {
        Self::new(value < 0, Cow::Owned(value.unsigned_abs().to_string()))
    }

    /// Floats truncate toward zero.
    fn from_number(number: &Number) -> Option<Self> {
        if let Some(value) = number.as_i64() {
            return Some(Self::from_i64(value));
        }
        if let Some(value) = number.as_u64() {
            return Some(Self::new(false, Cow::Owned(value.to_string())));
        }
        let truncated = number.as_f64()?.trunc();
        Some(Self::new(
            truncated < 0.0,
            Cow::Owned(truncated.abs().to_string()),
        ))
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl Ord for Integer<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Integer<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Position of an item in the canonical order: numeric group first, then
/// the lexicographic group.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum CanonicalKey<'a> {
    Numeric(Integer<'a>),
    Lexical(&'a str),
}

impl Item {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The integer reading of this item, if any.
    ///
    /// Numbers read as themselves, floats truncated toward zero. Text is
    /// read after trimming surrounding whitespace, with an optional leading
    /// sign; any magnitude is accepted.
    fn as_integer(&self) -> Option<Integer<'_>> {
        match self {
            Self::Int(value) => Some(Integer::from_i64(*value)),
            Self::Number(number) => Integer::from_number(number),
            Self::Text(text) => Integer::parse(text),
        }
    }

    fn canonical_key(&self) -> CanonicalKey<'_> {
        match (self.as_integer(), self) {
            (Some(integer), _) => CanonicalKey::Numeric(integer),
            (None, Self::Text(text)) => CanonicalKey::Lexical(text),
            (None, Self::Int(_) | Self::Number(_)) => CanonicalKey::Lexical(""),
        }
    }

    fn variant_rank(&self) -> u8 {
        match self {
            Self::Int(_) => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }

    /// Tie-break between items sharing a canonical key: `Int`, then
    /// `Number`, then `Text`, so the order stays consistent with `Eq`.
    fn tie_break(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a
                .as_f64()
                .zip(b.as_f64())
                .map_or(Ordering::Equal, |(x, y)| x.total_cmp(&y))
                .then_with(|| a.to_string().cmp(&b.to_string())),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.variant_rank().cmp(&other.variant_rank()),
        }
    }
}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_key()
            .cmp(&other.canonical_key())
            .then_with(|| self.tie_break(other))
    }
}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for Item {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Item {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<Number> for Item {
    /// Numbers that fit in `i64` become [`Item::Int`].
    fn from(number: Number) -> Self {
        number.as_i64().map_or(Self::Number(number), Self::Int)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
