//! Rendering of batch sealing times in the viewer's time zone and locale.
//!
//! The service emits ISO-8601 strings, with or without an offset. Strings
//! without one are read as local wall-clock time, the same way a browser's
//! `Date` constructor treats them.
//!
//! In the browser the final formatting is delegated to `toLocaleString()`.
//! Natively the system locale is looked up once and fed to chrono's localized
//! formatter.

use chrono::{DateTime, Local, Locale, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt::Display;

/// The locale's own date and time forms: `01/01/2024, 12:00:00 AM` for en_US,
/// `15.03.2024, 13:05:09` for de_DE.
pub const DISPLAY_FORMAT: &str = "%x, %X";

/// Used when the system locale is unknown or not in chrono's tables.
pub const FALLBACK_LOCALE: Locale = Locale::en_US;

/// Parses a sealing time and converts it into `tz`.
pub fn parse_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok();
    if let Some(naive) = naive {
        return tz.from_local_datetime(&naive).earliest();
    }

    // Date-only values are midnight UTC
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().with_timezone(tz))
}

/// Formats a sealing time in `tz` using `locale`. Unparseable input is
/// returned unchanged.
pub fn format_in<Tz>(raw: &str, tz: &Tz, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_in(raw, tz) {
        Some(dt) => dt.format_localized(DISPLAY_FORMAT, locale).to_string(),
        None => raw.to_string(),
    }
}

/// Maps a BCP 47 (`de-DE`) or POSIX (`de_DE.UTF-8@euro`) tag to a chrono locale.
pub fn locale_from_tag(tag: &str) -> Option<Locale> {
    let base = tag.split(['.', '@']).next()?.trim().replace('-', "_");
    Locale::try_from(base.as_str()).ok()
}

/// Locale of this machine, resolved once.
#[cfg(not(target_arch = "wasm32"))]
pub fn system_locale() -> Locale {
    use std::sync::OnceLock;

    static SYSTEM_LOCALE: OnceLock<Locale> = OnceLock::new();
    *SYSTEM_LOCALE.get_or_init(|| {
        sys_locale::get_locale()
            .and_then(|tag| locale_from_tag(&tag))
            .unwrap_or(FALLBACK_LOCALE)
    })
}

/// Formats a sealing time the way the viewer's platform would.
pub fn format_local(raw: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;

        match parse_in(raw, &Local) {
            Some(dt) => {
                let date = js_sys::Date::new(&JsValue::from_f64(dt.timestamp_millis() as f64));
                String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
            }
            None => raw.to_string(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        format_in(raw, &Local, system_locale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_rfc3339_utc() {
        assert_eq!(
            format_in("2024-01-01T00:00:00Z", &Utc, Locale::en_US),
            "01/01/2024, 12:00:00 AM"
        );
    }

    #[test]
    fn test_locale_drives_layout() {
        assert_eq!(
            format_in("2024-03-15T13:05:09Z", &Utc, Locale::de_DE),
            "15.03.2024, 13:05:09"
        );
        assert_eq!(
            format_in("2024-03-15T13:05:09Z", &Utc, Locale::en_US),
            "03/15/2024, 01:05:09 PM"
        );
    }

    #[test]
    fn test_offset_is_converted_into_viewer_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_in("2024-03-15T13:05:09Z", &plus_two, Locale::de_DE),
            "15.03.2024, 15:05:09"
        );
    }

    #[test]
    fn test_naive_timestamp_is_local_wall_clock() {
        let minus_five = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            format_in("2025-11-02T18:30:00.123456", &minus_five, Locale::de_DE),
            "02.11.2025, 18:30:00"
        );
    }

    #[test]
    fn test_space_separated_naive_timestamp() {
        assert_eq!(
            format_in("2024-07-04 09:00:00", &Utc, Locale::de_DE),
            "04.07.2024, 09:00:00"
        );
    }

    #[test]
    fn test_date_only_is_midnight_utc() {
        assert_eq!(
            format_in("2024-02-29", &Utc, Locale::de_DE),
            "29.02.2024, 00:00:00"
        );
    }

    #[test]
    fn test_garbage_passes_through() {
        assert_eq!(format_in("yesterday-ish", &Utc, Locale::en_US), "yesterday-ish");
    }

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(locale_from_tag("de-DE"), Some(Locale::de_DE));
        assert_eq!(locale_from_tag("de_DE.UTF-8@euro"), Some(Locale::de_DE));
        assert_eq!(locale_from_tag("en_US"), Some(Locale::en_US));
        assert_eq!(locale_from_tag("not-a-locale"), None);
    }

    #[test]
    fn test_local_formatting_is_stable() {
        let raw = "2024-01-01T00:00:00Z";
        assert_eq!(format_local(raw), format_local(raw));
        assert_ne!(format_local(raw), raw);
    }
}
