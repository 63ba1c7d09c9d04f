//! The credential checker.
//!
//! Mock authentication: submitted credentials are compared against three
//! fixed demo accounts and the locally stored list of registered
//! accounts. There is no hashing and no rate limiting; this is demo
//! machinery, not security.
//!
//! A successful check establishes a session by writing the credential-free
//! user record under the `user` key. Unknown email and wrong password
//! deliberately collapse into the same failed outcome, so the caller
//! cannot distinguish them (and neither can anyone probing for accounts).

use uuid::Uuid;

use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::role::Role;
use crate::models::user::{StoredUser, User};

/// The three fixed demo accounts, checked before the registered list.
fn demo_users() -> [(&'static str, &'static str, User); 3] {
    [
        (
            "counselor@example.com",
            "password",
            User {
                id: "c1".to_string(),
                name: "Dr. Sarah Johnson".to_string(),
                email: "counselor@example.com".to_string(),
                role: Role::Counselor,
            },
        ),
        (
            "admin@example.com",
            "password",
            User {
                id: "a1".to_string(),
                name: "Admin User".to_string(),
                email: "admin@example.com".to_string(),
                role: Role::Admin,
            },
        ),
        (
            "client@example.com",
            "password",
            User {
                id: "cl1".to_string(),
                name: "John Client".to_string(),
                email: "client@example.com".to_string(),
                role: Role::Client,
            },
        ),
    ]
}

fn registered_users(pool: &DbPool) -> AppResult<Vec<StoredUser>> {
    Ok(kv::load_json(&pool.conn, kv::KEY_REGISTERED_USERS)?.unwrap_or_default())
}

fn establish_session(pool: &DbPool, user: &User) -> AppResult<()> {
    kv::store_json(&pool.conn, kv::KEY_USER, user)
}

/// Check `email`/`password` and establish a session on match.
///
/// Returns the session user on success, `None` on any failure. "Unknown
/// email" and "wrong password" are not distinguishable from the outside.
pub fn login(pool: &DbPool, email: &str, password: &str) -> AppResult<Option<User>> {
    // 1. Fixed demo accounts, exact string match
    for (demo_email, demo_password, user) in demo_users() {
        if email == demo_email && password == demo_password {
            establish_session(pool, &user)?;
            return Ok(Some(user));
        }
    }

    // 2. Registered accounts, exact email+password pair
    let registered = registered_users(pool)?;
    if let Some(found) = registered
        .iter()
        .find(|u| u.email == email && u.password == password)
    {
        let user = found.sanitized();
        establish_session(pool, &user)?;
        return Ok(Some(user));
    }

    Ok(None)
}

/// Create a new account with role fixed to `client` and log it in.
///
/// Fails (returns `None`) when the email already exists in the registered
/// list; the match is case-sensitive and exact, and the list is left
/// untouched. Demo accounts are not consulted here.
pub fn register(pool: &DbPool, name: &str, email: &str, password: &str) -> AppResult<Option<User>> {
    let mut registered = registered_users(pool)?;

    if registered.iter().any(|u| u.email == email) {
        return Ok(None);
    }

    let stored = StoredUser {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: Role::Client,
    };

    let user = stored.sanitized();
    registered.push(stored);
    kv::store_json(&pool.conn, kv::KEY_REGISTERED_USERS, &registered)?;

    // Log in the new account exactly as login does
    establish_session(pool, &user)?;

    Ok(Some(user))
}

/// Clear the session record. Idempotent: logging out twice is fine.
pub fn logout(pool: &DbPool) -> AppResult<()> {
    kv::delete(&pool.conn, kv::KEY_USER)
}

/// The current session's user record, if any.
pub fn current_user(pool: &DbPool) -> AppResult<Option<User>> {
    kv::load_json(&pool.conn, kv::KEY_USER)
}

/// Remember where the user was headed before being bounced to login.
/// A single slot; a later stash overwrites an earlier one.
pub fn stash_intended_path(pool: &DbPool, path: &str) -> AppResult<()> {
    kv::store_json(&pool.conn, kv::KEY_INTENDED_PATH, &path.to_string())
}

/// Consume the deferred-navigation string: read it and delete it, so it
/// is honored exactly once.
pub fn take_intended_path(pool: &DbPool) -> AppResult<Option<String>> {
    let path: Option<String> = kv::load_json(&pool.conn, kv::KEY_INTENDED_PATH)?;
    if path.is_some() {
        kv::delete(&pool.conn, kv::KEY_INTENDED_PATH)?;
    }
    Ok(path)
}
