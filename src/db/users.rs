// src/db/users.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::ServerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    pub created_at: i64,
}

/// Insert a user if they don't exist, refresh the display name and login
/// time, then return the user id. Email should already be normalized.
pub fn upsert_login(
    conn: &Connection,
    email: &str,
    display_name: &str,
    now: i64,
) -> Result<i64, ServerError> {
    conn.execute(
        r#"
        insert into users (email, display_name, created_at, last_login_at)
        values (?1, ?2, ?3, ?3)
        on conflict(email) do update set
            display_name = excluded.display_name,
            last_login_at = excluded.last_login_at
        "#,
        params![email, display_name, now],
    )
    .map_err(|e| ServerError::DbError(format!("upsert user failed: {e}")))?;

    conn.query_row(
        "select id from users where email = ?",
        params![email],
        |row| row.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))
}

fn user_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        display_name: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn find_user(conn: &Connection, user_id: i64) -> Result<Option<User>, ServerError> {
    conn.query_row(
        "select id, email, display_name, created_at from users where id = ?",
        params![user_id],
        user_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user failed: {e}")))
}

/// Email should already be normalized.
pub fn find_user_by_email(conn: &Connection, email: &str) -> Result<Option<User>, ServerError> {
    conn.query_row(
        "select id, email, display_name, created_at from users where email = ?",
        params![email],
        user_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select user by email failed: {e}")))
}
