//! Julian Day Number ↔ proleptic Gregorian calendar conversions.
//!
//! Integer-only Fliegel–Van Flandern formulas. A Julian Day Number here
//! labels a whole civil day (JDN 2451545 = 2000-01-01), not a fractional
//! Julian Date.

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Julian Day Number of a Gregorian date. No validation is performed.
pub const fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
        - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
        + d
        - 32075
}

/// Gregorian `(year, month, day)` of a Julian Day Number.
pub const fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year as i32, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day() {
        assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
        assert_eq!(jdn_to_gregorian(2_451_545), (2000, 1, 1));
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(gregorian_to_jdn(1970, 1, 1), 2_440_588);
        assert_eq!(jdn_to_gregorian(2_440_588), (1970, 1, 1));
    }

    #[test]
    fn year_1900_start() {
        assert_eq!(gregorian_to_jdn(1900, 1, 1), 2_415_021);
        assert_eq!(gregorian_to_jdn(1900, 1, 31), 2_415_051);
    }

    #[test]
    fn leap_rules() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn round_trip_across_century_boundaries() {
        for jdn in gregorian_to_jdn(1899, 12, 1)..gregorian_to_jdn(1901, 3, 1) {
            let (y, m, d) = jdn_to_gregorian(jdn);
            assert_eq!(gregorian_to_jdn(y, m, d), jdn);
        }
    }
}
