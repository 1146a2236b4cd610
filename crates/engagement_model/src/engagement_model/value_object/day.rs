#[derive(Debug, thiserror::Error)]
#[error("invalid day {0}")]
pub struct Error(String);

/// Calendar date without a time component (`YYYY-MM-DD`)
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Day(chrono::NaiveDate);

impl Day {
    /// Truncates an ISO-8601 timestamp to its date part.
    ///
    /// The truncation is lexical: everything from the first `T` is discarded,
    /// so the offset is never applied.
    pub fn from_timestamp(timestamp: &str) -> Result<Self, Error> {
        let date = timestamp.split('T').next().unwrap_or_default();
        std::str::FromStr::from_str(date)
    }
}

impl std::str::FromStr for Day {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 10 {
            return Err(Error(s.to_owned()));
        }
        chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| Error(s.to_owned()))
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
