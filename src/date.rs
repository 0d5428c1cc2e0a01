use crate::error::YearMonthError;
use crate::factory::{YearMonthFactory, EPOCH_YEAR};
use crate::format::default_formatter;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Sub;
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// One calendar month, stored as months elapsed since 1970-01 (offset 0).
/// Keeps a handle to the factory that produced it so `Display` uses that
/// factory's formatter. Identity, ordering and hashing use the offset only.
#[derive(Clone)]
pub struct YearMonth {
    offset: i64,
    factory: YearMonthFactory,
}

impl YearMonth {
    pub(crate) fn from_offset(offset: i64, factory: YearMonthFactory) -> Self {
        Self { offset, factory }
    }

    pub fn year(&self) -> i64 {
        self.offset.div_euclid(12) + EPOCH_YEAR
    }

    /// 1..=12, also for offsets before 1970.
    pub fn month(&self) -> u8 {
        (self.offset.rem_euclid(12) + 1) as u8
    }

    /// Raw month offset; the canonical numeric representation.
    pub fn value_of(&self) -> i64 {
        self.offset
    }

    pub fn factory(&self) -> &YearMonthFactory {
        &self.factory
    }

    /// Same month, formatted by another factory.
    pub fn with_factory(&self, factory: &YearMonthFactory) -> Self {
        Self::from_offset(self.offset, factory.clone())
    }

    pub fn add_months(&self, months: i64) -> Self {
        Self::from_offset(self.offset + months, self.factory.clone())
    }

    pub fn checked_add_months(&self, months: i64) -> Option<Self> {
        let offset = self.offset.checked_add(months)?;
        Some(Self::from_offset(offset, self.factory.clone()))
    }

    pub fn add_years(&self, years: i64) -> Self {
        self.add_months(years * 12)
    }

    pub fn next(&self) -> Self {
        self.add_months(1)
    }

    pub fn prev(&self) -> Self {
        self.add_months(-1)
    }

    /// True only when `that` is a `YearMonth` for the same month.
    /// Anything else (including `()` or `None`) is simply unequal.
    pub fn equals(&self, that: &dyn Any) -> bool {
        that.downcast_ref::<YearMonth>()
            .is_some_and(|other| other.offset == self.offset)
    }

    /// `self - that` in months.
    pub fn diff(&self, that: &YearMonth) -> i64 {
        self.offset - that.offset
    }

    // Open-ended comparisons: a `None` bound is unbounded and always satisfied.

    pub fn gt(&self, that: Option<&YearMonth>) -> bool {
        that.map_or(true, |t| self.offset > t.offset)
    }

    pub fn lt(&self, that: Option<&YearMonth>) -> bool {
        that.map_or(true, |t| self.offset < t.offset)
    }

    pub fn gte(&self, that: Option<&YearMonth>) -> bool {
        that.map_or(true, |t| self.offset >= t.offset)
    }

    pub fn lte(&self, that: Option<&YearMonth>) -> bool {
        that.map_or(true, |t| self.offset <= t.offset)
    }

    /// Inclusive on both ends; `None` leaves that side open.
    pub fn is_within(&self, start: Option<&YearMonth>, end: Option<&YearMonth>) -> bool {
        self.gte(start) && self.lte(end)
    }

    /// Latest occurrence of calendar `month` at or before `self`.
    pub fn prev_month_of(&self, month: i64) -> Self {
        let candidate = self.same_year_month(month);
        if candidate.lte(Some(self)) {
            candidate
        } else {
            candidate.add_months(-12)
        }
    }

    /// Earliest occurrence of calendar `month` at or after `self`.
    pub fn next_month_of(&self, month: i64) -> Self {
        let candidate = self.same_year_month(month);
        if candidate.gte(Some(self)) {
            candidate
        } else {
            candidate.add_months(12)
        }
    }

    fn same_year_month(&self, month: i64) -> Self {
        self.add_months(month - i64::from(self.month()))
    }

    /// Inclusive ascending range up to `end`.
    pub fn iter_to(&self, end: &YearMonth) -> impl Iterator<Item = YearMonth> {
        iter_year_months(self.clone(), end.clone())
    }

    /// Calendar month (UTC) of a unix timestamp, on the default factory.
    pub fn from_unix_timestamp(ts: i64) -> Option<Self> {
        let dt = OffsetDateTime::from_unix_timestamp(ts).ok()?;
        Some(Self::from_date(dt.date()))
    }

    pub fn from_date(date: Date) -> Self {
        let offset = (i64::from(date.year()) - EPOCH_YEAR) * 12 + i64::from(u8::from(date.month())) - 1;
        Self::from_offset(offset, YearMonthFactory::global().clone())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.factory.render(self.year(), self.month()))
    }
}

impl fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "YearMonth({}, offset={})", default_formatter(self.year(), self.month()), self.offset)
    }
}

impl PartialEq for YearMonth {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for YearMonth {}

impl PartialOrd for YearMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for YearMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl Hash for YearMonth {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset.hash(state);
    }
}

impl Sub for &YearMonth {
    type Output = i64;
    fn sub(self, rhs: Self) -> i64 {
        self.diff(rhs)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        YearMonthFactory::global().parse(s)
    }
}

/// Serializes as the formatted string, never as a structure.
impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        YearMonthFactory::global().parse(&s).map_err(de::Error::custom)
    }
}

/// Inclusive iteration from `start` to `end` (if `start` <= `end`), else empty.
pub fn iter_year_months(start: YearMonth, end: YearMonth) -> impl Iterator<Item = YearMonth> {
    let mut curr = if start <= end { Some(start) } else { None };
    std::iter::from_fn(move || {
        let ret = curr.take()?;
        curr = ret.checked_add_months(1).filter(|n| *n <= end);
        Some(ret)
    })
}
