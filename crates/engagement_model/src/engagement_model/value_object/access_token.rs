#[derive(Debug, thiserror::Error)]
#[error("empty access token")]
pub struct Error;

/// Bearer credential issued by session creation
#[derive(Clone, Eq, PartialEq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

impl TryFrom<String> for AccessToken {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.trim().is_empty() {
            return Err(Error);
        }
        Ok(Self(s))
    }
}
