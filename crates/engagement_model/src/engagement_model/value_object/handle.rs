#[derive(Debug, thiserror::Error)]
#[error("invalid handle")]
pub struct Error;

/// Human-readable account name (e.g. `alice.bsky.social`)
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Handle(String);

impl std::str::FromStr for Handle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty()
            || s.starts_with("did:")
            || s.chars().any(|c| c == '/' || c.is_whitespace())
        {
            return Err(Error);
        }
        Ok(Self(s.to_owned()))
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_string_conversion() -> anyhow::Result<()> {
        assert_eq!(
            Handle::from_str("alice.bsky.social")?.to_string(),
            "alice.bsky.social"
        );
        assert!(Handle::from_str("").is_err());
        assert!(Handle::from_str("did:plc:abc").is_err());
        assert!(Handle::from_str("alice/bob").is_err());
        assert!(Handle::from_str("alice bob").is_err());
        Ok(())
    }
}
