//! Wall-clock helpers that work in both the browser and native builds.

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Current calendar year in local time (UTC off-browser).
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_wrap)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(feature = "hydrate"))]
    {
        year_from_ms(now_ms())
    }
}

/// Gregorian year containing the UTC instant `ms`.
pub fn year_from_ms(ms: i64) -> i32 {
    // Civil-from-days, Howard Hinnant's algorithm.
    let days = ms.div_euclid(86_400_000);
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    i32::try_from(year).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_from_ms_epoch_is_1970() {
        assert_eq!(year_from_ms(0), 1970);
    }

    #[test]
    fn year_from_ms_handles_year_boundaries() {
        // 2024-12-31T23:59:59Z and 2025-01-01T00:00:00Z
        assert_eq!(year_from_ms(1_735_689_599_000), 2024);
        assert_eq!(year_from_ms(1_735_689_600_000), 2025);
    }

    #[test]
    fn year_from_ms_handles_leap_day() {
        // 2024-02-29T12:00:00Z
        assert_eq!(year_from_ms(1_709_208_000_000), 2024);
    }

    #[test]
    fn now_ms_is_after_2020() {
        assert!(now_ms() > 1_577_836_800_000);
    }
}
