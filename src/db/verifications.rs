// src/db/verifications.rs
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use crate::domain::upload::Attachment;
use crate::domain::verification::{VerificationEvent, VerificationStatus};
use crate::errors::ServerError;

/// A user's current ID card record, without the file bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdVerification {
    pub status: VerificationStatus,
    pub file: Option<Attachment>,
}

pub fn current_verification(
    conn: &Connection,
    user_id: i64,
) -> Result<Option<IdVerification>, ServerError> {
    let row = conn
        .query_row(
            r#"
            select status, file_name, content_type, size_bytes, sha256
            from id_verifications
            where user_id = ?
            "#,
            params![user_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<i64>>(3)?,
                    row.get::<_, Option<String>>(4)?,
                ))
            },
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select verification failed: {e}")))?;

    let Some((status, file_name, content_type, size_bytes, sha256)) = row else {
        return Ok(None);
    };

    let status: VerificationStatus = status.parse().map_err(ServerError::DbError)?;
    let file = match (file_name, content_type, size_bytes, sha256) {
        (Some(file_name), Some(content_type), Some(size_bytes), Some(sha256)) => Some(Attachment {
            file_name,
            content_type,
            size_bytes: usize::try_from(size_bytes).unwrap_or_default(),
            sha256,
        }),
        _ => None,
    };

    Ok(Some(IdVerification { status, file }))
}

fn status_of(conn: &Connection, user_id: i64) -> Result<VerificationStatus, ServerError> {
    Ok(current_verification(conn, user_id)?
        .map(|v| v.status)
        .unwrap_or_default())
}

/// Stores (or replaces) the user's ID card and marks it uploaded.
pub fn record_upload(
    conn: &Connection,
    user_id: i64,
    file: &Attachment,
    bytes: &[u8],
    now: i64,
) -> Result<VerificationStatus, ServerError> {
    let status = status_of(conn, user_id)?.apply(VerificationEvent::Upload)?;

    conn.execute(
        r#"
        insert into id_verifications
            (user_id, status, file_name, content_type, size_bytes, sha256, data, updated_at)
        values (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        on conflict(user_id) do update set
            status = excluded.status,
            file_name = excluded.file_name,
            content_type = excluded.content_type,
            size_bytes = excluded.size_bytes,
            sha256 = excluded.sha256,
            data = excluded.data,
            updated_at = excluded.updated_at
        "#,
        params![
            user_id,
            status.as_str(),
            file.file_name,
            file.content_type,
            file.size_bytes as i64,
            file.sha256,
            bytes,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("save id upload failed: {e}")))?;

    info!(user_id, size = file.size_bytes, "id card uploaded");
    Ok(status)
}

/// Withdraws an upload that has not been reviewed yet.
pub fn remove_upload(
    conn: &Connection,
    user_id: i64,
    now: i64,
) -> Result<VerificationStatus, ServerError> {
    let status = status_of(conn, user_id)?.apply(VerificationEvent::Remove)?;

    conn.execute(
        r#"
        update id_verifications
        set status = ?2, file_name = null, content_type = null, size_bytes = null,
            sha256 = null, data = null, updated_at = ?3
        where user_id = ?1
        "#,
        params![user_id, status.as_str(), now],
    )
    .map_err(|e| ServerError::DbError(format!("remove id upload failed: {e}")))?;

    Ok(status)
}

/// Operator decision on an uploaded ID card.
pub fn review_upload(
    conn: &Connection,
    user_id: i64,
    approve: bool,
    now: i64,
) -> Result<VerificationStatus, ServerError> {
    let event = if approve {
        VerificationEvent::Approve
    } else {
        VerificationEvent::Reject
    };
    let status = status_of(conn, user_id)?.apply(event)?;

    conn.execute(
        "update id_verifications set status = ?2, updated_at = ?3 where user_id = ?1",
        params![user_id, status.as_str(), now],
    )
    .map_err(|e| ServerError::DbError(format!("review id upload failed: {e}")))?;

    info!(user_id, status = %status, "id card reviewed");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::users::upsert_login;
    use crate::domain::upload::{validate_upload, UploadKind};

    fn setup() -> (Connection, i64) {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(include_str!("../../sql/schema.sql")).unwrap();
        let user_id = upsert_login(&conn, "t@example.com", "T", 1).unwrap();
        (conn, user_id)
    }

    fn png() -> (Attachment, Vec<u8>) {
        let bytes = b"\x89PNG fake".to_vec();
        let file = validate_upload(UploadKind::IdCard, Some("image/png"), Some("id.png"), &bytes).unwrap();
        (file, bytes)
    }

    #[test]
    fn no_record_until_upload() {
        let (conn, user_id) = setup();
        assert_eq!(current_verification(&conn, user_id).unwrap(), None);
    }

    #[test]
    fn upload_stores_metadata_and_bytes() {
        let (conn, user_id) = setup();
        let (file, bytes) = png();

        let status = record_upload(&conn, user_id, &file, &bytes, 10).unwrap();
        assert_eq!(status, VerificationStatus::Uploaded);

        let current = current_verification(&conn, user_id).unwrap().unwrap();
        assert_eq!(current.file, Some(file));
        let updated_at: i64 = conn
            .query_row("select updated_at from id_verifications where user_id = ?", [user_id], |r| r.get(0))
            .unwrap();
        assert_eq!(updated_at, 10);

        let stored: Vec<u8> = conn
            .query_row("select data from id_verifications where user_id = ?", [user_id], |r| r.get(0))
            .unwrap();
        assert_eq!(stored, bytes);
    }

    #[test]
    fn remove_clears_file() {
        let (conn, user_id) = setup();
        let (file, bytes) = png();
        record_upload(&conn, user_id, &file, &bytes, 10).unwrap();

        assert_eq!(remove_upload(&conn, user_id, 11).unwrap(), VerificationStatus::Pending);
        let current = current_verification(&conn, user_id).unwrap().unwrap();
        assert_eq!(current.status, VerificationStatus::Pending);
        assert_eq!(current.file, None);
    }

    #[test]
    fn approved_card_is_locked() {
        let (conn, user_id) = setup();
        let (file, bytes) = png();
        record_upload(&conn, user_id, &file, &bytes, 10).unwrap();

        assert_eq!(review_upload(&conn, user_id, true, 12).unwrap(), VerificationStatus::Verified);
        assert!(remove_upload(&conn, user_id, 13).is_err());
        assert!(record_upload(&conn, user_id, &file, &bytes, 14).is_err());
    }

    #[test]
    fn review_without_upload_fails() {
        let (conn, user_id) = setup();
        assert!(matches!(
            review_upload(&conn, user_id, false, 5),
            Err(ServerError::BadRequest(_))
        ));
    }
}
