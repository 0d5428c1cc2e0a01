//! `YearMonthFactory`: immutable parser/formatter pair that mints `YearMonth` values.

use crate::date::YearMonth;
use crate::error::{Result, YearMonthError};
use crate::format::{default_formatter, default_parser};
use serde_json::Value;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Year at offset 0 (January 1970).
pub(crate) const EPOCH_YEAR: i64 = 1970;

pub type ParseFn = dyn Fn(&str) -> Vec<String> + Send + Sync;
pub type FormatFn = dyn Fn(i64, u8) -> String + Send + Sync;

/// Parser + formatter config with `with_*` builder chaining.
/// Builders return a new factory; the receiver is never modified.
#[derive(Clone)]
pub struct YearMonthFactory {
    parser: Arc<ParseFn>,
    formatter: Arc<FormatFn>,
}

impl YearMonthFactory {
    pub fn new<P, F>(parser: P, formatter: F) -> Self
    where
        P: Fn(&str) -> Vec<String> + Send + Sync + 'static,
        F: Fn(i64, u8) -> String + Send + Sync + 'static,
    {
        Self { parser: Arc::new(parser), formatter: Arc::new(formatter) }
    }

    /// Process-wide default factory (`YYYY-MM` both ways).
    pub fn global() -> &'static YearMonthFactory {
        static DEFAULT: OnceLock<YearMonthFactory> = OnceLock::new();
        DEFAULT.get_or_init(|| YearMonthFactory::new(default_parser, default_formatter))
    }

    pub fn with_parser<P>(&self, parser: P) -> Self
    where
        P: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        Self { parser: Arc::new(parser), formatter: Arc::clone(&self.formatter) }
    }

    pub fn with_formatter<F>(&self, formatter: F) -> Self
    where
        F: Fn(i64, u8) -> String + Send + Sync + 'static,
    {
        Self { parser: Arc::clone(&self.parser), formatter: Arc::new(formatter) }
    }

    /// Build from a year/month pair. Both must be integer-like; the month is not
    /// range-checked, so `(2020, 13)` lands on January 2021.
    pub fn from_numbers<Y, M>(&self, year: Y, month: M) -> Result<YearMonth>
    where
        Y: Component,
        M: Component,
    {
        let y = year.to_integer().ok_or_else(|| {
            let raw = year.raw();
            tracing::debug!(%raw, "rejected year token");
            YearMonthError::InvalidYear { raw }
        })?;
        let m = month.to_integer().ok_or_else(|| {
            let raw = month.raw();
            tracing::debug!(%raw, "rejected month token");
            YearMonthError::InvalidMonth { raw }
        })?;

        let offset = y
            .checked_sub(EPOCH_YEAR)
            .and_then(|v| v.checked_mul(12))
            .and_then(|v| v.checked_add(m.checked_sub(1)?))
            .ok_or_else(|| YearMonthError::InvalidYear { raw: year.raw() })?;

        Ok(YearMonth::from_offset(offset, self.clone()))
    }

    pub fn parse(&self, text: &str) -> Result<YearMonth> {
        let tokens = (self.parser)(text);
        let ym = self.from_numbers(
            tokens.first().map(String::as_str),
            tokens.get(1).map(String::as_str),
        )?;
        tracing::trace!(input = text, offset = ym.value_of(), "parsed year-month");
        Ok(ym)
    }

    /// Pass through values that are already a `YearMonth`, parse text otherwise.
    pub fn safe_parse<'a>(&self, input: impl Into<YearMonthInput<'a>>) -> Result<YearMonth> {
        match input.into() {
            YearMonthInput::YearMonth(ym) => Ok(ym),
            YearMonthInput::Text(text) => self.parse(text),
        }
    }

    /// Interpret a JSON operand as a range bound: `null` is unbounded (`None`),
    /// a string is parsed, any other JSON type is a `TypeMismatch`.
    pub fn bound_from_value(&self, value: &Value) -> Result<Option<YearMonth>> {
        match value {
            Value::Null => Ok(None),
            Value::String(s) => self.parse(s).map(Some),
            other => {
                let found = json_kind(other).to_string();
                tracing::debug!(%found, "bound is not a year-month");
                Err(YearMonthError::TypeMismatch { found })
            }
        }
    }

    pub(crate) fn render(&self, year: i64, month: u8) -> String {
        (self.formatter)(year, month)
    }
}

impl Default for YearMonthFactory {
    fn default() -> Self {
        Self::global().clone()
    }
}

impl fmt::Debug for YearMonthFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YearMonthFactory").finish_non_exhaustive()
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Input accepted by [`YearMonthFactory::safe_parse`].
#[derive(Clone, Debug)]
pub enum YearMonthInput<'a> {
    YearMonth(YearMonth),
    Text(&'a str),
}

impl From<YearMonth> for YearMonthInput<'_> {
    fn from(ym: YearMonth) -> Self {
        YearMonthInput::YearMonth(ym)
    }
}

impl From<&YearMonth> for YearMonthInput<'_> {
    fn from(ym: &YearMonth) -> Self {
        YearMonthInput::YearMonth(ym.clone())
    }
}

impl<'a> From<&'a str> for YearMonthInput<'a> {
    fn from(text: &'a str) -> Self {
        YearMonthInput::Text(text)
    }
}

impl<'a> From<&'a String> for YearMonthInput<'a> {
    fn from(text: &'a String) -> Self {
        YearMonthInput::Text(text.as_str())
    }
}

/// A year or month token that may or may not hold an integer.
/// `raw()` is what error messages show for a rejected token.
pub trait Component {
    fn to_integer(&self) -> Option<i64>;
    fn raw(&self) -> String;
}

macro_rules! int_component {
    ($($t:ty),*) => {
        $(
            impl Component for $t {
                fn to_integer(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
                fn raw(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

int_component!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Component for f64 {
    fn to_integer(&self) -> Option<i64> {
        // 2^63 is exactly representable; anything at or above it does not fit.
        let fits = *self >= i64::MIN as f64 && *self < 9_223_372_036_854_775_808.0;
        if self.is_finite() && self.fract() == 0.0 && fits {
            Some(*self as i64)
        } else {
            None
        }
    }
    fn raw(&self) -> String {
        self.to_string()
    }
}

impl Component for str {
    fn to_integer(&self) -> Option<i64> {
        let s = self.trim();
        if s.is_empty() {
            return None;
        }
        match s.parse::<i64>() {
            Ok(n) => Some(n),
            Err(_) => s.parse::<f64>().ok()?.to_integer(),
        }
    }
    fn raw(&self) -> String {
        self.to_string()
    }
}

impl Component for String {
    fn to_integer(&self) -> Option<i64> {
        self.as_str().to_integer()
    }
    fn raw(&self) -> String {
        self.clone()
    }
}

impl<T: Component + ?Sized> Component for &T {
    fn to_integer(&self) -> Option<i64> {
        (**self).to_integer()
    }
    fn raw(&self) -> String {
        (**self).raw()
    }
}

impl<T: Component> Component for Option<T> {
    fn to_integer(&self) -> Option<i64> {
        self.as_ref().and_then(|v| v.to_integer())
    }
    fn raw(&self) -> String {
        match self {
            Some(v) => v.raw(),
            None => "<missing>".to_string(),
        }
    }
}
