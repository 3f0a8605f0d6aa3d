//! Shared wire DTOs for the auth REST boundary.
//!
//! DESIGN
//! ======
//! `Role` deserializes from any string (`from = "String"`), so a new or
//! misconfigured server-side role can never fail a `User` parse; the role
//! router decides what an unrecognized value means. Profile fields are all
//! optional with defaults because the backend omits what a user never set.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Staff role tag carried on every user record.
///
/// The wire form is the lowercase module name (`"npd"`, `"quality"`, ...).
/// Unrecognized values are preserved in [`Role::Unknown`] rather than
/// rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Npd,
    Purchase,
    Sales,
    Stores,
    Planning,
    Production,
    Quality,
    Engineer,
    Material,
    User,
    /// Any role string this client does not recognize, kept verbatim.
    Unknown(String),
}

impl Role {
    /// Wire string for this role.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Npd => "npd",
            Self::Purchase => "purchase",
            Self::Sales => "sales",
            Self::Stores => "stores",
            Self::Planning => "planning",
            Self::Production => "production",
            Self::Quality => "quality",
            Self::Engineer => "engineer",
            Self::Material => "material",
            Self::User => "user",
            Self::Unknown(raw) => raw,
        }
    }
}

impl Default for Role {
    /// A record with no role at all behaves like an unrecognized one.
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "admin" => Self::Admin,
            "npd" => Self::Npd,
            "purchase" => Self::Purchase,
            "sales" => Self::Sales,
            "stores" => Self::Stores,
            "planning" => Self::Planning,
            "production" => Self::Production,
            "quality" => Self::Quality,
            "engineer" => Self::Engineer,
            "material" => Self::Material,
            "user" => Self::User,
            _ => Self::Unknown(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// An authenticated staff member as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role tag deciding the landing module and admin access.
    #[serde(default)]
    pub role: Role,
    /// Contact phone number, if set.
    #[serde(default)]
    pub phone: Option<String>,
    /// Company label, if set.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Department label, if set.
    #[serde(default)]
    pub department: Option<String>,
    /// Site/location label, if set.
    #[serde(default)]
    pub location: Option<String>,
    /// Free-form bio, if set.
    #[serde(default)]
    pub bio: Option<String>,
    /// Avatar image URL, if set.
    #[serde(default)]
    pub profile_image: Option<String>,
    /// ISO 8601 creation timestamp, if the server includes it.
    #[serde(default)]
    pub created_at: Option<String>,
    /// ISO 8601 last-update timestamp, if the server includes it.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Response envelope shared by all four auth endpoints.
///
/// Success responses carry `user`; error responses carry `message`. Both are
/// optional so one parse covers every shape the backend produces, including
/// the valid "no session" check-auth answer that has neither.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthEnvelope {
    /// The signed-in user, when the operation established or found a session.
    #[serde(default)]
    pub user: Option<User>,
    /// Human-readable server message, mostly on failures.
    #[serde(default)]
    pub message: Option<String>,
}
