use super::role::Role;
use serde::{Deserialize, Serialize};

/// The credential-free session record, stored under the `user` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// A registered account as kept in the `registeredUsers` list.
/// Carries the plaintext password; it must never be written to the
/// session key. Use [`StoredUser::sanitized`] when establishing a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl StoredUser {
    /// Strip the password for session storage.
    pub fn sanitized(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}
