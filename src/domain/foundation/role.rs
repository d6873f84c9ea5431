//! Portal roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{UserId, ValidationError};

/// The role a signed-in user acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Compliance,
    Strategist,
    Client,
}

impl Role {
    /// Returns true if this role may read every client's record.
    pub fn sees_all_clients(&self) -> bool {
        matches!(self, Role::Admin | Role::Compliance)
    }

    /// Returns true if this role may list clients at all.
    pub fn can_list_clients(&self) -> bool {
        !matches!(self, Role::Client)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Compliance => "compliance",
            Role::Strategist => "strategist",
            Role::Client => "client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "compliance" => Ok(Role::Compliance),
            "strategist" => Ok(Role::Strategist),
            "client" => Ok(Role::Client),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

/// The signed-in user a query runs on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: UserId,
    pub role: Role,
}

impl Viewer {
    pub fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }
}
