use serde::{Deserialize, Serialize};

/// Claims carried in the bearer credential's payload.
///
/// `sub` is kept untyped: tokens in the wild carry anything there, and the
/// subject accessor decides what counts as usable.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<serde_json::Value>,
}

impl Claims {
    /// The subject claim, if it is a non-empty string.
    pub fn subject(&self) -> Option<&str> {
        self.sub
            .as_ref()
            .and_then(|value| value.as_str())
            .filter(|subject| !subject.is_empty())
    }
}

/// Parse JWT claims from a token.
///
/// WARNING: the signature is not verified and no expiration check is made;
/// claims are trusted as given. Do not reuse outside a mock backend.
pub fn parse_claims(token: &str) -> Result<Claims, String> {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    // JWT format: header.payload.signature
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err("Invalid JWT format: expected 3 parts (header.payload.signature)".to_string());
    }

    let payload = parts[1];

    // Decode base64url payload
    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| format!("Failed to decode JWT payload: {}", e))?;

    let claims: Claims = serde_json::from_slice(&decoded)
        .map_err(|e| format!("Failed to parse JWT claims: {}", e))?;

    Ok(claims)
}

/// Extract Bearer token from Authorization header
pub fn extract_bearer_token(authorization: &str) -> Result<&str, String> {
    let parts: Vec<&str> = authorization.split_whitespace().collect();
    if parts.len() != 2 {
        return Err("Invalid Authorization header format".to_string());
    }
    if parts[0] != "Bearer" {
        return Err("Expected Bearer scheme in Authorization header".to_string());
    }
    Ok(parts[1])
}
