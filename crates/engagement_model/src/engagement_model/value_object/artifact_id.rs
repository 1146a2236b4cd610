#[derive(Debug, thiserror::Error)]
#[error("invalid artifact id {0}")]
pub struct Error(String);

/// Identifies the chart files produced by one request
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ArtifactId(uuid::Uuid);

impl ArtifactId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl std::str::FromStr for ArtifactId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = uuid::Uuid::parse_str(s).map_err(|_| Error(s.to_owned()))?;
        if uuid.get_version_num() != 4 {
            return Err(Error(s.to_owned()));
        }
        Ok(Self(uuid))
    }
}

impl std::fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
