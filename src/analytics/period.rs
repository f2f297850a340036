use crate::models::{DateRange, Reservation, Sale};

/// Entities carrying an ISO `YYYY-MM-DD` date.
pub trait Dated {
    fn date(&self) -> &str;
}

impl Dated for Reservation {
    fn date(&self) -> &str {
        &self.date
    }
}

impl Dated for Sale {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Entities dated within `range`, both bounds inclusive.
///
/// Dates are compared as plain strings; ISO dates sort lexicographically, and
/// no timezone conversion takes place.
pub fn filter_by_date<'a, T: Dated>(items: &'a [T], range: &DateRange) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| {
            let date = item.date();
            range.start.as_str() <= date && date <= range.end.as_str()
        })
        .collect()
}
