use std::fmt;

use reqwest::header::HeaderValue;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("GitHub token is empty")]
    Blank,

    #[error("GitHub token contains characters not allowed in an HTTP header")]
    InvalidCharacters,
}

/// A GitHub personal access token.
///
/// Construction rejects blank input and anything that cannot be sent as an
/// `Authorization` header, so holding an `AuthToken` always means a usable
/// credential is configured. Absence is modelled as `Option<AuthToken>`.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    raw: String,
    bearer: HeaderValue,
}

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Result<Self, TokenError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TokenError::Blank);
        }

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", trimmed))
            .map_err(|_| TokenError::InvalidCharacters)?;
        bearer.set_sensitive(true);

        Ok(Self {
            raw: trimmed.to_string(),
            bearer,
        })
    }

    /// Normalize an optional raw token from configuration.
    /// Missing and blank values both mean "unauthenticated".
    pub fn from_optional(raw: Option<&str>) -> Result<Option<Self>, TokenError> {
        match raw.map(Self::new) {
            None | Some(Err(TokenError::Blank)) => Ok(None),
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(err)) => Err(err),
        }
    }

    pub fn expose(&self) -> &str {
        &self.raw
    }

    /// Ready-made `Authorization: Bearer ...` header value
    pub fn bearer_header(&self) -> &HeaderValue {
        &self.bearer
    }
}

// Never print the credential itself
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}
