//! Calendar month arithmetic for the invoice lookup window.

use chrono::{Datelike, Local};

/// Number of past months tracked besides the current one.
pub const TRACKED_PAST_MONTHS: u32 = 3;

/// Map any integer onto a calendar month in `1..=12`, wrapping around.
///
/// `0` is December, `13` is January and `-1` is November, so
/// `month_from_any_number(current - k)` walks back `k` months.
pub fn month_from_any_number(number: i64) -> u32 {
    match number.rem_euclid(12) {
        0 => 12,
        month => month as u32,
    }
}

/// The tracked window ending at `current`, oldest first.
pub fn tracked_months(current: u32) -> [u32; 4] {
    let current = i64::from(current);
    [
        month_from_any_number(current - 3),
        month_from_any_number(current - 2),
        month_from_any_number(current - 1),
        month_from_any_number(current),
    ]
}

/// Current month from the local clock
pub fn current_month() -> u32 {
    Local::now().month()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_to_december() {
        assert_eq!(month_from_any_number(0), 12);
        assert_eq!(month_from_any_number(12), 12);
        assert_eq!(month_from_any_number(-12), 12);
    }

    #[test]
    fn test_wraps_forward_and_back() {
        assert_eq!(month_from_any_number(13), 1);
        assert_eq!(month_from_any_number(-1), 11);
        assert_eq!(month_from_any_number(-2), 10);
        assert_eq!(month_from_any_number(7), 7);
    }

    #[test]
    fn test_always_in_range() {
        for n in -100..=100 {
            let month = month_from_any_number(n);
            assert!((1..=12).contains(&month), "{n} -> {month}");
        }
        assert!((1..=12).contains(&month_from_any_number(i64::MIN)));
        assert!((1..=12).contains(&month_from_any_number(i64::MAX)));
    }

    #[test]
    fn test_tracked_months_across_year_boundary() {
        assert_eq!(tracked_months(2), [11, 12, 1, 2]);
        assert_eq!(tracked_months(7), [4, 5, 6, 7]);
        assert_eq!(tracked_months(12), [9, 10, 11, 12]);
    }
}
