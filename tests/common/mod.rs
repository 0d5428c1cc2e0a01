#![allow(dead_code)]

use yearmonth::{init_tracing_once, YearMonth};

/// Parse a `YYYY-MM` fixture with the default factory (test input is always valid).
pub fn ym(s: &str) -> YearMonth {
    init_tracing_once();
    yearmonth::parse(s).unwrap()
}

/// Optional bound fixture: `None` stands for an open end.
pub fn bound(s: Option<&str>) -> Option<YearMonth> {
    s.map(ym)
}

/// A spread of values on both sides of the 1970 epoch and across year edges.
pub fn sample_months() -> Vec<YearMonth> {
    [
        "0001-01", "1899-12", "1960-02", "1969-12", "1970-01", "1970-12",
        "1971-01", "2000-02", "2020-04", "2020-12", "2021-01", "9999-12",
    ]
    .iter()
    .map(|s| ym(s))
    .collect()
}
