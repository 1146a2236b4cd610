#[derive(Debug, thiserror::Error)]
#[error("invalid actor id")]
pub struct Error;

/// Stable account identifier (`did:<method>:<id>`)
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ActorId(String);

impl std::str::FromStr for ActorId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix("did:").ok_or(Error)?;
        let (method, id) = rest.split_once(':').ok_or(Error)?;
        if method.is_empty()
            || !method
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(Error);
        }
        if id.is_empty() || id.chars().any(|c| c == '/' || c.is_whitespace()) {
            return Err(Error);
        }
        Ok(Self(s.to_owned()))
    }
}

impl std::fmt::Display for ActorId {
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
        for s in [
            "did:plc:z72i7hdynmk6r22z27h6tvur",
            "did:web:example.com",
            "did:web:example.com:user:alice",
        ] {
            assert_eq!(ActorId::from_str(s)?.to_string(), s);
        }
        for s in [
            "",
            "did:",
            "did:plc",
            "did:plc:",
            "did::abc",
            "did:PLC:abc",
            "plc:abc",
            "did:plc:abc/def",
            "did:plc:a b",
            "alice.bsky.social",
        ] {
            assert!(ActorId::from_str(s).is_err(), "{s}");
        }
        Ok(())
    }
}
