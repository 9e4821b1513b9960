// src/auth/sessions.rs
use crate::auth::token::SecretToken;
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

pub const SESSION_COOKIE: &str = "session";

/// The signed-in user for one request. Handlers receive it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub display_name: String,
}

pub fn create_session(
    conn: &Connection,
    user_id: i64,
    now: i64,
    ttl_secs: i64,
) -> Result<SecretToken, ServerError> {
    let token = SecretToken::generate();

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, token.digest().as_slice(), now, now + ttl_secs],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    debug!(user_id, "session created");
    Ok(token)
}

pub fn load_session(
    conn: &Connection,
    token: &SecretToken,
    now: i64,
) -> Result<Option<Session>, ServerError> {
    conn.query_row(
        r#"
        select u.id, u.display_name
        from sessions s
        join users u on u.id = s.user_id
        where s.token_hash = ?
          and s.expires_at > ?
          and s.revoked_at is null
        "#,
        params![token.digest().as_slice(), now],
        |row| {
            Ok(Session {
                user_id: row.get(0)?,
                display_name: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

/// Ends a session. Returns false when it was unknown or already ended.
pub fn revoke_session(
    conn: &Connection,
    token: &SecretToken,
    now: i64,
) -> Result<bool, ServerError> {
    let changed = conn
        .execute(
            "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
            params![now, token.digest().as_slice()],
        )
        .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(changed > 0)
}

pub fn session_cookie(token: &SecretToken, ttl_secs: i64) -> String {
    format!(
        "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_secs}",
        token.as_str()
    )
}

pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
