/// Pictograms for every icon code the provider documents.
///
/// Night codes reuse the day pictograms.
static ICONS: &[(&str, &str)] = &[
    ("01d", "☀️"),
    ("02d", "⛅️"),
    ("03d", "☁️"),
    ("04d", "☁️"),
    ("09d", "🌧️"),
    ("10d", "🌦️"),
    ("11d", "⛈️"),
    ("13d", "🌨️"),
    ("50d", "🌫"),
    ("01n", "☀️"),
    ("02n", "⛅️"),
    ("03n", "☁️"),
    ("04n", "☁️"),
    ("09n", "🌧️"),
    ("10n", "🌦️"),
    ("11n", "⛈️"),
    ("13n", "🌨️"),
    ("50n", "🌫"),
];

/// Pictogram for an icon code such as `"10d"`, or `None` if the code is not
/// part of the documented set.
pub fn icon(code: &str) -> Option<&'static str> {
    ICONS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, pictogram)| *pictogram)
}
