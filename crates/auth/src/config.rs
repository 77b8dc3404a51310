//! Authentication configuration

/// Configuration for JWT validation
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret shared with the identity provider
    pub jwt_secret: String,
    /// Expected issuer, if any
    pub issuer: Option<String>,
    /// Expected audience, if any
    pub audience: Option<String>,
}
