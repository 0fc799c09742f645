//! Text rendering for the status-bar label and its tooltip.

use chrono::{DateTime, Local};
use chrono_tz::Tz;

use crate::error::{Result, WeatherError};

const TIME_FORMAT: &str = "%H:%M %Z";

/// Label shown in the bar: icon, temperature and unit.
pub fn format_text(icon: &str, temperature: &str) -> String {
    format!("{icon} {temperature} °C")
}

/// Multi-line hover text. All values arrive pre-rendered.
pub fn format_tooltip(
    description: &str,
    feels_like: &str,
    pressure: &str,
    humidity: &str,
    sunrise: &str,
    sunset: &str,
    wind_speed: &str,
) -> String {
    let lines = [
        title_case(description),
        format!("Feels like {feels_like} °C"),
        format!("Pressure {pressure} hPa"),
        format!("Humidity {humidity}%"),
        format!("Sunrise {sunrise}"),
        format!("Sunset {sunset}"),
        format!("Wind speed {wind_speed} m/sec"),
    ];

    // An unknown condition leaves the first line empty; drop it together
    // with any other leading whitespace.
    lines.join("\n").trim_start().to_string()
}

/// One fractional digit, e.g. `21.34` -> `"21.3"`.
pub fn temperature(value: f64) -> String {
    format!("{value:.1}")
}

/// Integer part, truncated toward zero.
pub fn truncated(value: f64) -> String {
    (value.trunc() as i64).to_string()
}

/// No fractional digits, rounded to the nearest integer.
pub fn rounded(value: f64) -> String {
    format!("{value:.0}")
}

/// Upper-cases the first letter of every word and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }

    out
}

/// Timezone used to render sunrise and sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    Named(Tz),
    Local,
}

impl Clock {
    /// Pick a timezone: explicit setting first, then `TZ`, then the system
    /// zone, then the bare local offset.
    ///
    /// A bad explicit setting is an error. A `TZ` value chrono-tz does not
    /// know (e.g. `:/etc/localtime`) is ignored.
    pub fn resolve(configured: Option<&str>, env_tz: Option<&str>) -> Result<Self> {
        if let Some(name) = configured {
            let tz = name
                .parse::<Tz>()
                .map_err(|_| WeatherError::Config(format!("unknown timezone '{name}'")))?;
            return Ok(Clock::Named(tz));
        }

        if let Some(name) = env_tz {
            match name.trim_start_matches(':').parse::<Tz>() {
                Ok(tz) => return Ok(Clock::Named(tz)),
                Err(_) => log::debug!("ignoring TZ={name}: not an IANA timezone name"),
            }
        }

        Ok(system_zone().map_or(Clock::Local, Clock::Named))
    }

    /// `HH:MM` plus zone abbreviation for a unix timestamp.
    pub fn format(&self, epoch: i64) -> String {
        let Some(utc) = DateTime::from_timestamp(epoch, 0) else {
            log::warn!("timestamp {epoch} is out of range");
            return "--:--".to_string();
        };

        match self {
            Clock::Named(tz) => utc.with_timezone(tz).format(TIME_FORMAT).to_string(),
            Clock::Local => utc.with_timezone(&Local).format(TIME_FORMAT).to_string(),
        }
    }
}

/// The host's configured IANA zone, if it can be read and chrono-tz knows it.
pub fn system_zone() -> Option<Tz> {
    let name = iana_time_zone::get_timezone()
        .map_err(|e| log::debug!("cannot determine system timezone: {e}"))
        .ok()?;

    name.parse::<Tz>()
        .map_err(|_| log::debug!("system timezone '{name}' is unknown to chrono-tz"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_joins_icon_temperature_and_unit() {
        assert_eq!(format_text("☀️", "21.3"), "☀️ 21.3 °C");
    }

    #[test]
    fn text_without_icon_keeps_separator() {
        assert_eq!(format_text("", "-4.0"), " -4.0 °C");
    }

    #[test]
    fn tooltip_lines_in_order() {
        let tooltip = format_tooltip("clear sky", "20", "1013", "55", "06:30 CET", "18:45 CET", "3");
        let lines: Vec<&str> = tooltip.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Clear Sky",
                "Feels like 20 °C",
                "Pressure 1013 hPa",
                "Humidity 55%",
                "Sunrise 06:30 CET",
                "Sunset 18:45 CET",
                "Wind speed 3 m/sec",
            ]
        );
        assert!(!tooltip.starts_with(char::is_whitespace));
    }

    #[test]
    fn tooltip_without_description_starts_with_feels_like() {
        let tooltip = format_tooltip("", "1", "1000", "90", "07:00 UTC", "17:00 UTC", "0");
        assert!(tooltip.starts_with("Feels like 1 °C\n"));
    }

    #[test]
    fn numeric_helpers() {
        assert_eq!(temperature(21.34), "21.3");
        assert_eq!(temperature(-3.0), "-3.0");
        assert_eq!(truncated(19.9), "19");
        assert_eq!(truncated(-2.7), "-2");
        assert_eq!(truncated(1013.0), "1013");
        assert_eq!(rounded(3.6), "4");
        assert_eq!(rounded(3.2), "3");
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("clear sky"), "Clear Sky");
        assert_eq!(title_case("sand, dust whirls"), "Sand, Dust Whirls");
        assert_eq!(title_case("HEAVY snow"), "Heavy Snow");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn clock_named_zone_uses_abbreviation() {
        // 2023-11-14T22:13:20Z
        let berlin = Clock::Named(chrono_tz::Europe::Berlin);
        assert_eq!(berlin.format(1_700_000_000), "23:13 CET");

        let utc = Clock::Named(chrono_tz::UTC);
        assert_eq!(utc.format(1_700_000_000), "22:13 UTC");
    }

    #[test]
    fn clock_out_of_range_epoch() {
        assert_eq!(Clock::Named(chrono_tz::UTC).format(i64::MAX), "--:--");
    }

    #[test]
    fn resolve_prefers_configured_zone() {
        let clock = Clock::resolve(Some("Europe/Berlin"), Some("America/New_York")).unwrap();
        assert_eq!(clock, Clock::Named(chrono_tz::Europe::Berlin));
    }

    #[test]
    fn resolve_falls_back_to_env_then_local() {
        let clock = Clock::resolve(None, Some("America/New_York")).unwrap();
        assert_eq!(clock, Clock::Named(chrono_tz::America::New_York));

        let colon_form = Clock::resolve(None, Some(":Europe/Berlin")).unwrap();
        assert_eq!(colon_form, Clock::Named(chrono_tz::Europe::Berlin));

        let fallback = Clock::resolve(None, None).unwrap();
        assert_eq!(Clock::resolve(None, Some(":/etc/localtime")).unwrap(), fallback);
    }

    #[test]
    fn default_clock_uses_system_zone_abbreviation() {
        let Some(system) = system_zone() else {
            return;
        };

        let clock = Clock::resolve(None, None).unwrap();
        assert_eq!(clock, Clock::Named(system));

        let rendered = clock.format(1_700_000_000);
        let (_, zone) = rendered.split_once(' ').expect("time and zone");
        assert!(!zone.is_empty());
        assert!(!zone.contains(':'), "zone part {zone:?} is a numeric offset");
    }

    #[test]
    fn resolve_rejects_unknown_configured_zone() {
        let err = Clock::resolve(Some("Mars/Olympus"), None).unwrap_err();
        assert!(err.to_string().contains("unknown timezone 'Mars/Olympus'"));
    }
}
