//! Wire DTOs for the remote auth API.
//!
//! DESIGN
//! ======
//! `SessionUser` keeps the backend's user record as an opaque JSON object so
//! profile fields we do not model survive a storage round-trip unchanged.
//! Request payloads are typed and serialize with the backend's camelCase keys.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account role. The backend may send roles outside this list; those are
/// kept in the raw record and reported as `None` by `SessionUser::role`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    BranchManager,
    Postmaster,
    SubdivisionalManager,
    DivisionalManager,
    Employee,
    Admin,
    ForestRanger,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::BranchManager,
        Role::Postmaster,
        Role::SubdivisionalManager,
        Role::DivisionalManager,
        Role::Employee,
        Role::Admin,
        Role::ForestRanger,
    ];

    /// Roles a visitor may pick on the sign-up form.
    pub const REGISTRABLE: [Role; 5] = [
        Role::BranchManager,
        Role::Postmaster,
        Role::SubdivisionalManager,
        Role::DivisionalManager,
        Role::Employee,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::BranchManager => "branch_manager",
            Role::Postmaster => "postmaster",
            Role::SubdivisionalManager => "subdivisional_manager",
            Role::DivisionalManager => "divisional_manager",
            Role::Employee => "employee",
            Role::Admin => "admin",
            Role::ForestRanger => "forest_ranger",
        }
    }

    /// Human label, e.g. `"branch manager"`.
    #[must_use]
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }

    #[must_use]
    pub fn is_registrable(self) -> bool {
        Self::REGISTRABLE.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

/// Identity document kind collected at sign-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GovernmentIdType {
    Aadhar,
    Pan,
    VoterId,
    DrivingLicense,
    Passport,
}

impl GovernmentIdType {
    pub const ALL: [GovernmentIdType; 5] = [
        GovernmentIdType::Aadhar,
        GovernmentIdType::Pan,
        GovernmentIdType::VoterId,
        GovernmentIdType::DrivingLicense,
        GovernmentIdType::Passport,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GovernmentIdType::Aadhar => "aadhar",
            GovernmentIdType::Pan => "pan",
            GovernmentIdType::VoterId => "voter_id",
            GovernmentIdType::DrivingLicense => "driving_license",
            GovernmentIdType::Passport => "passport",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GovernmentIdType::Aadhar => "Aadhar Card",
            GovernmentIdType::Pan => "PAN Card",
            GovernmentIdType::VoterId => "Voter ID",
            GovernmentIdType::DrivingLicense => "Driving License",
            GovernmentIdType::Passport => "Passport",
        }
    }
}

impl FromStr for GovernmentIdType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

/// The authenticated principal, exactly as the backend returned it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionUser(Map<String, Value>);

impl SessionUser {
    /// Wrap a JSON value. Only objects are accepted.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.str_field("email")
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.str_field("role").and_then(|r| r.parse().ok())
    }

    /// First whitespace-separated part of the display name.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.name().and_then(|n| n.split_whitespace().next())
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub user: SessionUser,
}

/// `POST /api/v1/users/register` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub government_id_type: GovernmentIdType,
    pub government_id: String,
    pub mobile_no: String,
}

/// Error body shape used by the backend for rejected requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
