use chrono::{Duration, Months, NaiveDate};

/// Add a (possibly fractional, possibly negative) number of months to a date
///
/// Whole months use calendar arithmetic with the day-of-month clamped at the
/// end of the target month (Mar 31 - 1 month = Feb 28). The fractional
/// remainder is applied as `round(fraction * 30)` days, so an offset of -1.5
/// lands one month and fifteen days earlier.
pub fn add_months(date: NaiveDate, months: f64) -> NaiveDate {
    let whole = months.trunc() as i64;
    let fraction = months - whole as f64;

    let shifted = if whole >= 0 {
        date.checked_add_months(Months::new(whole as u32))
    } else {
        date.checked_sub_months(Months::new(whole.unsigned_abs() as u32))
    }
    .unwrap_or(date);

    let extra_days = (fraction * 30.0).round() as i64;
    shifted
        .checked_add_signed(Duration::days(extra_days))
        .unwrap_or(shifted)
}

/// Days from `from` until `target` (negative if `target` is in the past)
pub fn days_until(target: NaiveDate, from: NaiveDate) -> i64 {
    (target - from).num_days()
}

/// Whether `target` falls within the next `days` days of `from`, inclusive
pub fn is_within_days(target: NaiveDate, from: NaiveDate, days: i64) -> bool {
    let diff = days_until(target, from);
    diff >= 0 && diff <= days
}

/// Whether `target` is strictly before `from`
pub fn is_overdue(target: NaiveDate, from: NaiveDate) -> bool {
    days_until(target, from) < 0
}
