#[derive(Debug, thiserror::Error)]
#[error("invalid post id")]
pub struct Error;

/// Record key of a post within its author's repository
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PostId(String);

impl std::str::FromStr for PostId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.chars().any(|c| c == '/' || c.is_whitespace()) {
            return Err(Error);
        }
        Ok(Self(s.to_owned()))
    }
}

impl std::fmt::Display for PostId {
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
        assert_eq!(PostId::from_str("3kgbz6sdvsq2c")?.to_string(), "3kgbz6sdvsq2c");
        assert!(PostId::from_str("").is_err());
        assert!(PostId::from_str("a/b").is_err());
        Ok(())
    }
}
