use std::fmt;

/// Display value for a time the provider did not send.
const UNAVAILABLE: &str = "N/A";

/// The five daily prayers plus sunrise, in the order they are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyPrayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl DailyPrayer {
    pub const ALL: [DailyPrayer; 6] = [
        DailyPrayer::Fajr,
        DailyPrayer::Sunrise,
        DailyPrayer::Dhuhr,
        DailyPrayer::Asr,
        DailyPrayer::Maghrib,
        DailyPrayer::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DailyPrayer::Fajr => "Fajr",
            DailyPrayer::Sunrise => "Sunrise",
            DailyPrayer::Dhuhr => "Dhuhr",
            DailyPrayer::Asr => "Asr",
            DailyPrayer::Maghrib => "Maghrib",
            DailyPrayer::Isha => "Isha",
        }
    }

    /// Sunrise marks the end of Fajr; nobody congregates for it.
    pub fn has_iqama(&self) -> bool {
        !matches!(self, DailyPrayer::Sunrise)
    }
}

impl fmt::Display for DailyPrayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Friday congregations. Times are fixed by the masjid, not taken from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JummahShift {
    First,
    Second,
}

impl JummahShift {
    pub const ALL: [JummahShift; 2] = [JummahShift::First, JummahShift::Second];

    pub fn as_str(&self) -> &'static str {
        match self {
            JummahShift::First => "Jummah 1",
            JummahShift::Second => "Jummah 2",
        }
    }

    pub fn adhan(&self) -> &'static str {
        "1:00 PM"
    }

    // NOTE: overrides whatever iqamah the provider reports for the shift.
    pub fn iqama(&self) -> &'static str {
        match self {
            JummahShift::First => "1:30 PM",
            JummahShift::Second => "2:30 PM",
        }
    }

    fn index(&self) -> usize {
        match self {
            JummahShift::First => 0,
            JummahShift::Second => 1,
        }
    }
}

/// A provider time such as `"5:42 AM"`, or the `N/A` sentinel when it was missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrayerTime {
    At(String),
    Unavailable,
}

impl PrayerTime {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => PrayerTime::At(s.to_owned()),
            _ => PrayerTime::Unavailable,
        }
    }

    /// The page gives enough context to tell morning from evening, so the
    /// meridiem suffix is dropped.
    pub fn display(&self) -> String {
        match self {
            PrayerTime::At(s) => s.replace(" AM", "").replace(" PM", ""),
            PrayerTime::Unavailable => UNAVAILABLE.to_owned(),
        }
    }
}

/// One day of raw times as reported by the provider, keyed by prayer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyTimes {
    pub fajr: Option<String>,
    pub sunrise: Option<String>,
    pub dhuhr: Option<String>,
    pub asr: Option<String>,
    pub maghrib: Option<String>,
    pub isha: Option<String>,
    pub jummah: [Option<String>; 2],
}

impl DailyTimes {
    pub fn get(&self, prayer: DailyPrayer) -> Option<&str> {
        let value = match prayer {
            DailyPrayer::Fajr => &self.fajr,
            DailyPrayer::Sunrise => &self.sunrise,
            DailyPrayer::Dhuhr => &self.dhuhr,
            DailyPrayer::Asr => &self.asr,
            DailyPrayer::Maghrib => &self.maghrib,
            DailyPrayer::Isha => &self.isha,
        };
        value.as_deref()
    }

    /// Whether the provider scheduled this Jummah shift at all.
    pub fn offers(&self, shift: JummahShift) -> bool {
        self.jummah[shift.index()]
            .as_deref()
            .is_some_and(|s| !is_placeholder(s))
    }
}

fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == "-" || value.eq_ignore_ascii_case(UNAVAILABLE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerRow {
    pub name: &'static str,
    pub adhan: PrayerTime,
    pub iqama: Option<PrayerTime>,
}

/// Rows of the prayer table: six daily entries in fixed order, then any Jummah shifts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerDay {
    rows: Vec<PrayerRow>,
}

impl PrayerDay {
    pub fn new(adhan: &DailyTimes, iqama: &DailyTimes) -> Self {
        let daily = DailyPrayer::ALL.into_iter().map(|prayer| PrayerRow {
            name: prayer.as_str(),
            adhan: PrayerTime::parse(adhan.get(prayer)),
            iqama: prayer
                .has_iqama()
                .then(|| PrayerTime::parse(iqama.get(prayer))),
        });

        let jummah = JummahShift::ALL
            .into_iter()
            .filter(|shift| adhan.offers(*shift) || iqama.offers(*shift))
            .map(|shift| PrayerRow {
                name: shift.as_str(),
                adhan: PrayerTime::At(shift.adhan().to_owned()),
                iqama: Some(PrayerTime::At(shift.iqama().to_owned())),
            });

        Self {
            rows: daily.chain(jummah).collect(),
        }
    }

    pub fn rows(&self) -> &[PrayerRow] {
        &self.rows
    }
}
