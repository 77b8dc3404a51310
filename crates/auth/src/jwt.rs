//! JWT validation and token extraction helpers

use axum::http::HeaderValue;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Validate a bearer JWT against the configured secret
pub(crate) fn validate_jwt_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);

    if let Some(aud) = &config.audience {
        validation.set_audience(&[aud]);
    } else {
        validation.validate_aud = false;
    }

    if let Some(iss) = &config.issuer {
        validation.set_issuer(&[iss]);
    }

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer_token() {
        // Valid bearer token
        let header = HeaderValue::from_static("Bearer abc123");
        let result = extract_bearer_token(&header);
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "abc123");

        // Invalid format
        let header = HeaderValue::from_static("abc123");
        let result = extract_bearer_token(&header);
        assert!(result.is_err());

        // Basic auth (wrong type)
        let header = HeaderValue::from_static("Basic abc123");
        let result = extract_bearer_token(&header);
        assert!(result.is_err());
    }

    #[test]
    fn test_jwt_validation_rejects_garbage() {
        let config = AuthConfig {
            jwt_secret: "test_secret".to_string(),
            issuer: Some("https://example.edu".to_string()),
            audience: Some("campus-events".to_string()),
        };

        let result = validate_jwt_token("invalid_token", &config);
        assert!(result.is_err());
    }

    #[test]
    fn test_jwt_roundtrip_no_issuer_no_audience() {
        let config = AuthConfig {
            jwt_secret: "test-secret-key".to_string(),
            issuer: None,
            audience: None,
        };

        let test_user_id = uuid::Uuid::new_v4().to_string();
        let claims = Claims {
            sub: test_user_id.clone(),
            email: Some("student@campus.test".to_string()),
            name: Some("Test Student".to_string()),
            role: Some("STUDENT".to_string()),
            iat: chrono::Utc::now().timestamp() as u64,
            exp: (chrono::Utc::now().timestamp() + 3600) as u64,
            aud: None,
        };

        let header = jsonwebtoken::Header::new(Algorithm::HS256);
        let encoding_key = jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_ref());
        let token =
            jsonwebtoken::encode(&header, &claims, &encoding_key).expect("Failed to encode JWT");

        let result = validate_jwt_token(&token, &config);
        assert!(result.is_ok(), "JWT validation failed: {:?}", result.err());

        let decoded = result.unwrap();
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.email, claims.email);
        assert_eq!(decoded.role, Some("STUDENT".to_string()));
    }

    #[test]
    fn test_jwt_expired_token_rejected() {
        let config = AuthConfig {
            jwt_secret: "test-secret-key".to_string(),
            issuer: None,
            audience: None,
        };

        let claims = Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            email: None,
            name: None,
            role: None,
            iat: (chrono::Utc::now().timestamp() - 7200) as u64,
            exp: (chrono::Utc::now().timestamp() - 3600) as u64,
            aud: None,
        };

        let header = jsonwebtoken::Header::new(Algorithm::HS256);
        let encoding_key = jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_ref());
        let token =
            jsonwebtoken::encode(&header, &claims, &encoding_key).expect("Failed to encode JWT");

        let result = validate_jwt_token(&token, &config);
        assert!(result.is_err());
    }
}
