//! Leap-year and month-length rules for the Jalali calendar.

use crate::consts::{
    CYCLE_EPOCH_YEAR, DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, MAX_MONTH, YEARS_PER_CYCLE,
};

/// Returns `true` if `year` is a leap year in the Jalali calendar.
///
/// Closed-form test over the 2820-year grand cycle: the year is leap exactly
/// when the intercalation accumulator `(epyear * 682 - 110) / 2816` gains a
/// day, i.e. when its residue is within 682 of the next multiple of 2816.
/// This keeps the rule numerically identical to the leap placement implied by
/// [`crate::jdn::jalali_to_jdn`].
pub const fn is_leap_year(year: i32) -> bool {
    let epbase = year as i64 - CYCLE_EPOCH_YEAR;
    let epyear = CYCLE_EPOCH_YEAR + epbase % YEARS_PER_CYCLE;
    (epyear * 682 - 110).rem_euclid(2816) >= 2816 - 682
}

/// Returns the number of days in a Jalali month: 31 for months 1-6, 30 for
/// months 7-11, and 29 or 30 for Esfand depending on [`is_leap_year`].
///
/// Returns the sentinel `0` for a month outside `1..=12`; callers must treat
/// that as "no such month", not as a valid day count.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    if month < 1 || month > MAX_MONTH {
        return 0;
    }
    if month == ESFAND && is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Returns the number of days in a Jalali year (365 or 366).
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jdn::jalali_to_jdn;

    // Leap years of the current era under the 2820-year arithmetic rule.
    const LEAP_YEARS: [i32; 10] = [1370, 1375, 1379, 1383, 1387, 1391, 1395, 1399, 1404, 1408];

    #[test]
    fn known_leap_years() {
        for y in LEAP_YEARS {
            assert!(is_leap_year(y), "{y} should be a leap year");
        }
        for y in [1396, 1400, 1401, 1402, 1403, 1405, 1406, 1407] {
            assert!(!is_leap_year(y), "{y} should not be a leap year");
        }
    }

    #[test]
    fn leap_rule_matches_jdn_year_lengths_over_full_cycle() {
        // One full grand cycle, plus the wrap into the next one.
        for y in 474..=(474 + 2820) {
            let len = jalali_to_jdn(i64::from(y) + 1, 1, 1) - jalali_to_jdn(i64::from(y), 1, 1);
            let expected = if is_leap_year(y) { 366 } else { 365 };
            assert_eq!(len, expected, "year {y}");
        }
    }

    #[test]
    fn cycle_boundary_years() {
        // Anchor year of the grand cycle and its image one cycle earlier
        assert!(is_leap_year(474));
        assert!(is_leap_year(474 - 2820));
        // Last year of the cycle beginning at 475 is leap, the one before is not
        assert!(is_leap_year(3294));
        assert!(!is_leap_year(3293));
    }

    #[test]
    fn days_in_month_table() {
        for m in 1..=6 {
            assert_eq!(days_in_month(1404, m), 31, "month {m}");
        }
        for m in 7..=11 {
            assert_eq!(days_in_month(1404, m), 30, "month {m}");
        }
    }

    #[test]
    fn esfand_follows_leap_rule() {
        assert_eq!(days_in_month(1404, 12), 30);
        assert_eq!(days_in_month(1403, 12), 29);
        for y in 1300..1500 {
            assert_eq!(
                is_leap_year(y),
                days_in_month(y, 12) == 30,
                "year {y}: leap rule and Esfand length disagree"
            );
        }
    }

    #[test]
    fn out_of_range_month_is_sentinel_zero() {
        assert_eq!(days_in_month(1404, 0), 0);
        assert_eq!(days_in_month(1404, 13), 0);
        assert_eq!(days_in_month(1404, 255), 0);
    }

    #[test]
    fn year_lengths() {
        assert_eq!(days_in_year(1404), 366);
        assert_eq!(days_in_year(1403), 365);
    }
}
