//! Bearer Credential Handling
//!
//! Parsing of `Authorization: Bearer <token>` (RFC 6750) and the matching
//! `WWW-Authenticate` challenge values.

use axum::http::{HeaderMap, HeaderValue, header};

/// Extract the bearer token from the `Authorization` header.
///
/// Returns `None` when the header is absent, not valid UTF-8, uses another
/// scheme, or carries an empty credential. The scheme name is matched
/// case-insensitively.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, credential) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let credential = credential.trim();
    if credential.is_empty() {
        None
    } else {
        Some(credential)
    }
}

/// `WWW-Authenticate` value for a request that carried no credential
pub fn bearer_challenge() -> HeaderValue {
    HeaderValue::from_static("Bearer")
}

/// `WWW-Authenticate` value for a rejected credential
pub fn invalid_token_challenge() -> HeaderValue {
    HeaderValue::from_static(r#"Bearer error="invalid_token""#)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_auth(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = with_auth("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = with_auth("bearer abc");
        assert_eq!(extract_bearer_token(&headers), Some("abc"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_other_scheme() {
        let headers = with_auth("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_empty_credential() {
        assert_eq!(extract_bearer_token(&with_auth("Bearer ")), None);
        assert_eq!(extract_bearer_token(&with_auth("Bearer")), None);
    }

    #[test]
    fn test_challenge_values() {
        assert_eq!(bearer_challenge(), "Bearer");
        assert!(
            invalid_token_challenge()
                .to_str()
                .unwrap()
                .contains("invalid_token")
        );
    }
}
