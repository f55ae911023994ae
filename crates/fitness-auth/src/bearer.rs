use crate::errors::AuthError;

/// Pulls the token out of an `Authorization` header value.
///
/// The value must be exactly `Bearer <token>`: one space, case-sensitive
/// scheme, and a non-empty token.
pub fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::MissingToken),
    };

    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(""), None) => Err(AuthError::MissingToken),
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_token() {
        assert_eq!(extract_bearer(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_absent_or_empty_header() {
        assert_eq!(extract_bearer(None), Err(AuthError::MissingToken));
        assert_eq!(extract_bearer(Some("")), Err(AuthError::MissingToken));
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(extract_bearer(Some("Bearer ")), Err(AuthError::MissingToken));
    }

    #[test]
    fn test_wrong_shape() {
        assert_eq!(extract_bearer(Some("Bearer")), Err(AuthError::MalformedHeader));
        assert_eq!(extract_bearer(Some("bearer abc")), Err(AuthError::MalformedHeader));
        assert_eq!(extract_bearer(Some("Basic abc")), Err(AuthError::MalformedHeader));
        assert_eq!(extract_bearer(Some("Bearer a b")), Err(AuthError::MalformedHeader));
        assert_eq!(extract_bearer(Some("abc")), Err(AuthError::MalformedHeader));
    }
}
