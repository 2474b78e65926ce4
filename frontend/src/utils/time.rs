use chrono::NaiveDate;

/// Milliseconds since the epoch, with sub-millisecond precision in the browser.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

/// Uniform sample in `[0, 1)`.
#[cfg(target_arch = "wasm32")]
pub fn random_unit() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn random_unit() -> f64 {
    let nanos = chrono::Utc::now().timestamp_subsec_nanos();
    f64::from(nanos % 1_000_000) / 1_000_000.0
}

/// Formats the server's birth date (`YYYY-MM-DD`, optionally followed by a
/// time part) as `DD/MM/YYYY`. Anything else is shown as received.
pub fn format_birth_date(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .get(..10)
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn birth_dates_are_shown_day_first() {
        assert_eq!(format_birth_date("2002-05-17"), "17/05/2002");
        assert_eq!(format_birth_date("2002-05-17T00:00:00.000Z"), "17/05/2002");
    }

    #[test]
    fn unparsable_birth_dates_are_kept() {
        assert_eq!(format_birth_date("mayo 2002"), "mayo 2002");
        assert_eq!(format_birth_date(""), "");
    }

    #[test]
    fn random_unit_stays_in_range() {
        for _ in 0..32 {
            let sample = random_unit();
            assert!((0.0..1.0).contains(&sample));
        }
    }
}
