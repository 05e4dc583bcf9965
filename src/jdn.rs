//! Julian day number conversions for the Gregorian and Jalali calendars.
//!
//! The JDN is the neutral interchange point between the two calendars: every
//! conversion goes `calendar -> JDN -> calendar`. These are pure integer
//! functions with no range validation; out-of-range month/day inputs produce
//! mathematically defined but calendrically meaningless output. Range checks
//! belong to [`crate::JalaliDate`].

use crate::consts::{CYCLE_EPOCH_YEAR, DAYS_PER_CYCLE, JALALI_EPOCH_JDN, YEARS_PER_CYCLE};

/// Converts a proleptic Gregorian date to a Julian day number.
///
/// January and February are treated as months 13 and 14 of the preceding
/// year, which keeps the century correction term (`2 - a + a/4`) out of the
/// month/day accumulation.
pub const fn gregorian_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let (y, m) = if month < 3 { (year - 1, month + 12) } else { (year, month) };

    let a = y / 100;
    let b = 2 - a + a / 4;

    (1461 * (y + 4716)) / 4 + (153 * (m + 1)) / 5 + day + b - 1524
}

/// Converts a Julian day number to a proleptic Gregorian date.
///
/// Exact inverse of [`gregorian_to_jdn`] for every JDN the forward function
/// produces over the supported range.
pub const fn jdn_to_gregorian(jdn: i64) -> (i64, i64, i64) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - (146_097 * b) / 4;

    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    (year, month, day)
}

/// Converts a Jalali date to a Julian day number using the 2820-year grand
/// cycle: the year splits into a cycle index and an offset within the cycle,
/// and [`leap_days_before`] supplies the accumulated intercalation days.
pub const fn jalali_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let epbase = year - CYCLE_EPOCH_YEAR;
    let epyear = CYCLE_EPOCH_YEAR + epbase % YEARS_PER_CYCLE;

    // Months 1-7 have 31 days, months 8-12 have 30 (plus the leap day
    // handled by the accumulator), hence the constant +6 offset.
    let mdays = if month <= 7 {
        (month - 1) * 31
    } else {
        (month - 1) * 30 + 6
    };

    day + mdays
        + leap_days_before(epyear)
        + (epyear - 1) * 365
        + (epbase / YEARS_PER_CYCLE) * DAYS_PER_CYCLE
        + JALALI_EPOCH_JDN
        - 1
}

/// Converts a Julian day number to a Jalali date.
///
/// Locates the 2820-year cycle containing the day, recovers the year within
/// the cycle through an integer approximation, then splits the remaining
/// day-of-year over the 31-then-30-day month pattern.
pub const fn jdn_to_jalali(jdn: i64) -> (i64, i64, i64) {
    let depoch = jdn - jalali_to_jdn(CYCLE_EPOCH_YEAR + 1, 1, 1);
    let cycle = depoch.div_euclid(DAYS_PER_CYCLE);
    let cyear = depoch.rem_euclid(DAYS_PER_CYCLE);

    // The year approximation below is off by one on the very last day of the
    // 1,029,983-day cycle, which always falls on 30 Esfand of the cycle's
    // final year. Resolve it directly.
    if cyear == DAYS_PER_CYCLE - 1 {
        let mut year = YEARS_PER_CYCLE + YEARS_PER_CYCLE * cycle + CYCLE_EPOCH_YEAR;
        if year <= 0 {
            year -= 1;
        }
        return (year, 12, 30);
    }

    let aux1 = cyear / 366;
    let aux2 = cyear % 366;
    let ycycle = (2816 * aux2 + 2134 * aux1 + 2815) / 1_028_522 + aux1 + 1;

    let mut year = ycycle + YEARS_PER_CYCLE * cycle + CYCLE_EPOCH_YEAR;
    if year <= 0 {
        // There is no Jalali year zero.
        year -= 1;
    }

    let yday = jdn - jalali_to_jdn(year, 1, 1) + 1;

    let (month, day) = if yday <= 186 {
        // First 6 months, 31 days each
        (1 + (yday - 1) / 31, (yday - 1) % 31 + 1)
    } else {
        (7 + (yday - 187) / 30, (yday - 187) % 30 + 1)
    };

    (year, month, day)
}

/// Accumulated intercalation days at the start of a cycle-relative year.
///
/// This accumulator is the single source of truth for leap placement; the
/// closed-form leap test in [`crate::rules`] is its per-year difference and
/// the two are cross-checked over a full cycle by tests.
pub(crate) const fn leap_days_before(epyear: i64) -> i64 {
    (epyear * 682 - 110) / 2816
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::days_in_month;

    #[test]
    fn gregorian_anchors() {
        // J2000 and the Unix epoch
        assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
        assert_eq!(gregorian_to_jdn(1970, 1, 1), 2_440_588);
        // Nowruz 1404
        assert_eq!(gregorian_to_jdn(2025, 3, 20), 2_460_755);
    }

    #[test]
    fn gregorian_inverse_anchors() {
        assert_eq!(jdn_to_gregorian(2_451_545), (2000, 1, 1));
        assert_eq!(jdn_to_gregorian(2_440_588), (1970, 1, 1));
        assert_eq!(jdn_to_gregorian(2_460_755), (2025, 3, 20));
    }

    #[test]
    fn jalali_anchors() {
        // Jalali epoch
        assert_eq!(jalali_to_jdn(1, 1, 1), 1_948_321);
        // Nowruz 1404 = 2025-03-20
        assert_eq!(jalali_to_jdn(1404, 1, 1), 2_460_755);
        assert_eq!(jdn_to_jalali(2_460_755), (1404, 1, 1));
        assert_eq!(jdn_to_jalali(1_948_321), (1, 1, 1));
    }

    #[test]
    fn gregorian_round_trip_by_jdn() {
        // Years 1..=3000 of the proleptic Gregorian calendar
        let start = gregorian_to_jdn(1, 1, 1);
        let end = gregorian_to_jdn(3000, 12, 31);
        for jdn in start..=end {
            let (y, m, d) = jdn_to_gregorian(jdn);
            assert_eq!(gregorian_to_jdn(y, m, d), jdn, "jdn {jdn} -> {y}-{m}-{d}");
        }
    }

    #[test]
    fn jalali_round_trip_by_jdn() {
        let start = jalali_to_jdn(1, 1, 1);
        let end = jalali_to_jdn(3000, 12, 29);
        for jdn in start..=end {
            let (y, m, d) = jdn_to_jalali(jdn);
            assert_eq!(jalali_to_jdn(y, m, d), jdn, "jdn {jdn} -> {y}-{m}-{d}");
        }
    }

    #[test]
    fn jalali_round_trip_by_date() {
        for y in 1..=3000_i64 {
            for m in 1..=12_i64 {
                #[allow(clippy::cast_possible_truncation)]
                let last = days_in_month(y as i32, m as u8);
                for d in 1..=i64::from(last) {
                    let jdn = jalali_to_jdn(y, m, d);
                    assert_eq!(jdn_to_jalali(jdn), (y, m, d), "{y:04}-{m:02}-{d:02}");
                }
            }
        }
    }

    #[test]
    fn jdn_is_monotonic_in_jalali_dates() {
        let mut prev = jalali_to_jdn(1404, 1, 1) - 1;
        for m in 1..=12_i64 {
            let last = i64::from(days_in_month(1404, m as u8));
            for d in 1..=last {
                let jdn = jalali_to_jdn(1404, m, d);
                assert_eq!(jdn, prev + 1);
                prev = jdn;
            }
        }
    }

    #[test]
    fn cycle_boundary_special_case() {
        // The final day of the grand cycle starting at year 475 is 30 Esfand
        // of year 3294, guarded by a dedicated branch in jdn_to_jalali.
        let last = jalali_to_jdn(CYCLE_EPOCH_YEAR + 1, 1, 1) + DAYS_PER_CYCLE - 1;
        assert_eq!(jdn_to_jalali(last), (3294, 12, 30));
        assert_eq!(jalali_to_jdn(3294, 12, 30), last);
        assert_eq!(jdn_to_jalali(last + 1), (3295, 1, 1));
    }

    #[test]
    fn year_labels_before_the_epoch_skip_zero() {
        // The year labeled right before 1 Farvardin 1 is -1; no day ever
        // resolves to year zero. Month/day normalization and round-trips are
        // only guaranteed from year 1 onward.
        let epoch = jalali_to_jdn(1, 1, 1);
        for jdn in (epoch - 366)..epoch {
            let (y, _, _) = jdn_to_jalali(jdn);
            assert_eq!(y, -1, "jdn {jdn}");
        }
        assert_eq!(jdn_to_jalali(epoch).0, 1);
        // No month/day normalization below year 1: the relabeled year -1
        // yields a month index past Esfand instead of a valid date.
        let (_, m, _) = jdn_to_jalali(epoch - 1);
        assert!(m > 12, "month {m}");
    }

    #[test]
    fn gregorian_month_boundaries() {
        // 2024 is a Gregorian leap year
        assert_eq!(
            gregorian_to_jdn(2024, 3, 1) - gregorian_to_jdn(2024, 2, 29),
            1
        );
        assert_eq!(
            gregorian_to_jdn(2024, 2, 29) - gregorian_to_jdn(2024, 2, 28),
            1
        );
        // 2023 is not: Feb 28 is followed by Mar 1
        assert_eq!(
            gregorian_to_jdn(2023, 3, 1) - gregorian_to_jdn(2023, 2, 28),
            1
        );
    }
}
