//! Calendar year-month values (`YYYY-MM`) with month arithmetic, open-ended
//! range comparisons and pluggable parsing/formatting.
//!
//! The crate-root functions go through the default factory; build a custom one
//! with [`with_parser`] / [`with_formatter`].

mod date;
mod error;
mod factory;
mod format;
mod util;

pub use crate::date::{iter_year_months, YearMonth};
pub use crate::error::{Result, YearMonthError};
pub use crate::factory::{Component, FormatFn, ParseFn, YearMonthFactory, YearMonthInput};
pub use crate::format::{default_formatter, default_parser, strict_parser};

// Expose tracing setup for binaries and tests.
pub use crate::util::init_tracing_once;

use std::any::Any;

/// True only for `YearMonth` values.
pub fn is_year_month(value: &dyn Any) -> bool {
    value.is::<YearMonth>()
}

pub fn with_parser<P>(parser: P) -> YearMonthFactory
where
    P: Fn(&str) -> Vec<String> + Send + Sync + 'static,
{
    YearMonthFactory::global().with_parser(parser)
}

pub fn with_formatter<F>(formatter: F) -> YearMonthFactory
where
    F: Fn(i64, u8) -> String + Send + Sync + 'static,
{
    YearMonthFactory::global().with_formatter(formatter)
}

pub fn from_numbers<Y: Component, M: Component>(year: Y, month: M) -> Result<YearMonth> {
    YearMonthFactory::global().from_numbers(year, month)
}

pub fn parse(text: &str) -> Result<YearMonth> {
    YearMonthFactory::global().parse(text)
}

pub fn safe_parse<'a>(input: impl Into<YearMonthInput<'a>>) -> Result<YearMonth> {
    YearMonthFactory::global().safe_parse(input)
}
