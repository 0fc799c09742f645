/// One entry of the provider's condition taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub id: u32,
    pub meaning: &'static str,
    /// Day icon code the provider documents for this condition.
    pub icon: &'static str,
}

const fn c(id: u32, meaning: &'static str, icon: &'static str) -> Condition {
    Condition { id, meaning, icon }
}

pub static THUNDERSTORM: &[Condition] = &[
    c(200, "thunderstorm with light rain", "11d"),
    c(201, "thunderstorm with rain", "11d"),
    c(202, "thunderstorm with heavy rain", "11d"),
    c(210, "light thunderstorm", "11d"),
    c(211, "thunderstorm", "11d"),
    c(212, "heavy thunderstorm", "11d"),
    c(221, "ragged thunderstorm", "11d"),
    c(230, "thunderstorm with light drizzle", "11d"),
    c(231, "thunderstorm with drizzle", "11d"),
    c(232, "thunderstorm with heavy drizzle", "11d"),
];

pub static DRIZZLE: &[Condition] = &[
    c(300, "light intensity drizzle", "09d"),
    c(301, "drizzle", "09d"),
    c(302, "heavy intensity drizzle", "09d"),
    c(310, "light intensity drizzle rain", "09d"),
    c(311, "drizzle rain", "09d"),
    c(312, "heavy intensity drizzle rain", "09d"),
    c(313, "shower rain and drizzle", "09d"),
    c(314, "heavy shower rain and drizzle", "09d"),
    c(321, "shower drizzle", "09d"),
];

pub static RAIN: &[Condition] = &[
    c(500, "light rain", "10d"),
    c(501, "moderate rain", "10d"),
    c(502, "heavy intensity rain", "10d"),
    c(503, "very heavy rain", "10d"),
    c(504, "extreme rain", "10d"),
    c(511, "freezing rain", "13d"),
    c(520, "light intensity shower rain", "09d"),
    c(521, "shower rain", "09d"),
    c(522, "heavy intensity shower rain", "09d"),
    c(531, "ragged shower rain", "09d"),
];

pub static SNOW: &[Condition] = &[
    c(600, "light snow", "13d"),
    c(601, "snow", "13d"),
    c(602, "heavy snow", "13d"),
    c(611, "sleet", "13d"),
    c(612, "shower sleet", "13d"),
    c(615, "light rain and snow", "13d"),
    c(616, "rain and snow", "13d"),
    c(620, "light shower snow", "13d"),
    c(621, "shower snow", "13d"),
    c(622, "heavy shower snow", "13d"),
];

pub static ATMOSPHERE: &[Condition] = &[
    c(701, "mist", "50d"),
    c(711, "smoke", "50d"),
    c(721, "haze", "50d"),
    c(731, "sand, dust whirls", "50d"),
    c(741, "fog", "50d"),
    c(751, "sand", "50d"),
    c(761, "dust", "50d"),
    c(762, "volcanic ash", "50d"),
    c(771, "squalls", "50d"),
    c(781, "tornado", "50d"),
];

pub static CLOUDS: &[Condition] = &[
    c(800, "clear sky", "01d"),
    c(801, "few clouds", "02d"),
    c(802, "scattered clouds", "03d"),
    c(803, "broken clouds", "04d"),
    c(804, "overcast clouds", "04d"),
];

pub static ADDITIONAL: &[Condition] = &[
    c(951, "calm", ""),
    c(952, "light breeze", ""),
    c(953, "gentle breeze", ""),
    c(954, "moderate breeze", ""),
    c(955, "fresh breeze", ""),
    c(956, "strong breeze", ""),
    c(957, "high wind, near gale", ""),
    c(958, "gale", ""),
    c(959, "severe gale", ""),
    c(960, "storm", ""),
    c(961, "violent storm", ""),
    c(962, "hurricane", ""),
];

/// Groups in lookup order. A duplicated id resolves to the earliest group.
pub fn groups() -> [&'static [Condition]; 7] {
    [THUNDERSTORM, DRIZZLE, RAIN, SNOW, ATMOSPHERE, CLOUDS, ADDITIONAL]
}

/// Full catalog entry for `id`, if the provider documents it.
pub fn condition(id: u32) -> Option<&'static Condition> {
    groups()
        .into_iter()
        .flat_map(|group| group.iter())
        .find(|cond| cond.id == id)
}

/// Human-readable description for a condition id.
///
/// Unknown ids yield an empty string rather than an error; callers treat
/// that as "no description available".
pub fn describe(id: u32) -> &'static str {
    condition(id).map(|cond| cond.meaning).unwrap_or("")
}
