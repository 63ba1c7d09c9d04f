use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Counselor,
    Admin,
}

impl Role {
    /// Convert enum → stored string
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Counselor => "counselor",
            Role::Admin => "admin",
        }
    }

    /// Convert stored string → enum
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "client" => Some(Role::Client),
            "counselor" => Some(Role::Counselor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn is_counselor(&self) -> bool {
        matches!(self, Role::Counselor)
    }
}
