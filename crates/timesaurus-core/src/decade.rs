use std::fmt;

/// One of the ten calendar-decade buckets covered by the datasets
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Decade {
    D1920,
    D1930,
    D1940,
    D1950,
    D1960,
    D1970,
    D1980,
    D1990,
    D2000,
    #[default]
    D2010,
}

impl Decade {
    /// All decades in chronological order
    pub const ALL: [Decade; 10] = [
        Decade::D1920,
        Decade::D1930,
        Decade::D1940,
        Decade::D1950,
        Decade::D1960,
        Decade::D1970,
        Decade::D1980,
        Decade::D1990,
        Decade::D2000,
        Decade::D2010,
    ];

    /// First year of the decade
    pub fn year(&self) -> u16 {
        1920 + 10 * self.index() as u16
    }

    /// Position in [`Decade::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse the first year of a decade, e.g. `1950`
    pub fn from_year(year: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.year() == year)
    }

    /// Parse a dataset key such as `"1950"`
    pub fn from_key(key: &str) -> Option<Self> {
        key.trim().parse().ok().and_then(Self::from_year)
    }

    /// Drop-down label, e.g. `"1950 - 1959"`
    pub fn range_label(&self) -> String {
        format!("{} - {}", self.year(), self.year() + 9)
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}
