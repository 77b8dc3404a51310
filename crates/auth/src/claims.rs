//! JWT claims types

use serde::{Deserialize, Serialize};

/// JWT claims issued by the identity provider
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Email (present on first-login tokens; required for provisioning)
    pub email: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// Requested role (STUDENT or ORGANIZER); only honored at provisioning
    pub role: Option<String>,
    /// Issued at
    pub iat: u64,
    /// Expires at
    pub exp: u64,
    /// Audience
    pub aud: Option<String>,
}
