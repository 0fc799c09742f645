//! Query → extract → format: turns a provider answer into a [`WeatherReport`].

use crate::{
    catalog,
    error::Result,
    format::{self, Clock},
    model::{Coordinates, WeatherReport, WeatherSnapshot},
    provider::WeatherProvider,
};

/// Run one query and build the report. Any failure aborts the whole run.
pub async fn fetch_report(
    provider: &dyn WeatherProvider,
    coords: Coordinates,
    clock: &Clock,
) -> Result<WeatherReport> {
    let current = provider.current(coords).await?;
    let snapshot = WeatherSnapshot::try_from(current)?;
    Ok(build_report(&snapshot, clock))
}

/// Format a snapshot. Unknown icon codes or condition ids degrade to blanks.
pub fn build_report(snapshot: &WeatherSnapshot, clock: &Clock) -> WeatherReport {
    let icon = catalog::icon(&snapshot.icon_code).unwrap_or_else(|| {
        log::warn!("unknown icon code '{}'", snapshot.icon_code);
        ""
    });

    let description = catalog::describe(snapshot.condition_id);
    if description.is_empty() {
        log::warn!("unknown condition id {}", snapshot.condition_id);
    }

    let text = format::format_text(icon, &format::temperature(snapshot.temperature));
    let tooltip = format::format_tooltip(
        description,
        &format::truncated(snapshot.feels_like),
        &format::truncated(snapshot.pressure),
        &format::truncated(snapshot.humidity),
        &clock.format(snapshot.sunrise),
        &clock.format(snapshot.sunset),
        &format::rounded(snapshot.wind_speed),
    );

    WeatherReport::new(text, tooltip)
}
