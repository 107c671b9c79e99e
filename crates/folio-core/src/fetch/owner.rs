use thiserror::Error;

/// Marker identifying a full GitHub profile URL.
const PROFILE_URL_MARKER: &str = "github.com/";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OwnerError {
    #[error("Invalid GitHub URL format: {0}")]
    InvalidOwnerFormat(String),
}

/// Resolve a profile URL or bare account name to the owner identifier.
///
/// `https://github.com/alice/anything` resolves to `alice`; a bare name has
/// one trailing `/` stripped.
pub fn resolve_owner(input: &str) -> Result<String, OwnerError> {
    let owner = match input.find(PROFILE_URL_MARKER) {
        Some(pos) => {
            let rest = &input[pos + PROFILE_URL_MARKER.len()..];
            rest.split('/').next().unwrap_or_default()
        }
        None => input.strip_suffix('/').unwrap_or(input),
    };

    if owner.is_empty() {
        return Err(OwnerError::InvalidOwnerFormat(input.to_string()));
    }
    Ok(owner.to_string())
}
