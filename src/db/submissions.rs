// src/db/submissions.rs
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use crate::auth::token::SecretToken;
use crate::domain::submission::{ListingDraft, ListingSubmission};
use crate::domain::upload::{Attachment, UploadKind};
use crate::errors::ServerError;

#[derive(Debug, Clone, PartialEq)]
pub struct StoredDraft {
    pub id: String,
    pub owner_user_id: Option<i64>,
    pub draft: ListingDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionSummary {
    pub title: String,
    pub status: String,
    pub created_at: i64,
}

fn db_err(what: &str) -> impl Fn(rusqlite::Error) -> ServerError + '_ {
    move |e| ServerError::DbError(format!("{what} failed: {e}"))
}

fn encode(draft: &ListingDraft) -> Result<String, ServerError> {
    serde_json::to_string(draft).map_err(|e| ServerError::DbError(format!("encode draft failed: {e}")))
}

/// Starts an empty draft and returns its id.
pub fn create_draft(
    conn: &Connection,
    owner_user_id: Option<i64>,
    now: i64,
) -> Result<String, ServerError> {
    let id = SecretToken::generate().as_str().to_string();

    conn.execute(
        r#"
        insert into listing_drafts (id, owner_user_id, data, created_at, updated_at)
        values (?1, ?2, ?3, ?4, ?4)
        "#,
        params![id, owner_user_id, encode(&ListingDraft::default())?, now],
    )
    .map_err(db_err("insert draft"))?;

    Ok(id)
}

pub fn load_draft(conn: &Connection, id: &str) -> Result<Option<StoredDraft>, ServerError> {
    let row = conn
        .query_row(
            "select owner_user_id, data from listing_drafts where id = ?",
            params![id],
            |row| Ok((row.get::<_, Option<i64>>(0)?, row.get::<_, String>(1)?)),
        )
        .optional()
        .map_err(db_err("select draft"))?;

    let Some((owner_user_id, data)) = row else {
        return Ok(None);
    };
    let mut draft: ListingDraft = serde_json::from_str(&data)
        .map_err(|e| ServerError::DbError(format!("decode draft failed: {e}")))?;

    for (kind, file) in draft_attachments(conn, id)? {
        match kind.as_str() {
            "utility_bill" => draft.utility_bill = Some(file),
            _ => draft.photos.push(file),
        }
    }

    Ok(Some(StoredDraft {
        id: id.to_string(),
        owner_user_id,
        draft,
    }))
}

fn draft_attachments(
    conn: &Connection,
    draft_id: &str,
) -> Result<Vec<(String, Attachment)>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select kind, file_name, content_type, size_bytes, sha256
            from listing_attachments
            where draft_id = ?
            order by id
            "#,
        )
        .map_err(db_err("prepare attachments"))?;

    let rows = stmt
        .query_map(params![draft_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                Attachment {
                    file_name: row.get(1)?,
                    content_type: row.get(2)?,
                    size_bytes: row.get::<_, i64>(3)? as usize,
                    sha256: row.get(4)?,
                },
            ))
        })
        .map_err(db_err("select attachments"))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(db_err("read attachment row"))
}

pub fn save_draft(conn: &Connection, stored: &StoredDraft, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update listing_drafts set data = ?2, updated_at = ?3 where id = ?1",
        params![stored.id, encode(&stored.draft)?, now],
    )
    .map_err(db_err("update draft"))?;
    Ok(())
}

/// Stores a photo or utility bill for a draft. A new utility bill replaces the old one.
pub fn attach_file(
    conn: &mut Connection,
    stored: &mut StoredDraft,
    kind: UploadKind,
    file: Attachment,
    bytes: &[u8],
    now: i64,
) -> Result<(), ServerError> {
    let tx = conn.transaction().map_err(db_err("begin transaction"))?;

    if kind == UploadKind::UtilityBill {
        tx.execute(
            "delete from listing_attachments where draft_id = ? and kind = ?",
            params![stored.id, kind.as_str()],
        )
        .map_err(db_err("replace utility bill"))?;
    }

    tx.execute(
        r#"
        insert into listing_attachments
            (draft_id, kind, file_name, content_type, size_bytes, sha256, data, created_at)
        values (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            stored.id,
            kind.as_str(),
            file.file_name,
            file.content_type,
            file.size_bytes as i64,
            file.sha256,
            bytes,
            now
        ],
    )
    .map_err(db_err("insert attachment"))?;

    match kind {
        UploadKind::UtilityBill => stored.draft.utility_bill = Some(file),
        UploadKind::Photo | UploadKind::IdCard => stored.draft.photos.push(file),
    }

    tx.execute(
        "update listing_drafts set updated_at = ?2 where id = ?1",
        params![stored.id, now],
    )
    .map_err(db_err("touch draft"))?;

    tx.commit().map_err(db_err("commit attachment"))
}

/// Turns a completed draft into a submission awaiting review and drops the draft.
pub fn submit_draft(
    conn: &mut Connection,
    stored: &StoredDraft,
    submission: &ListingSubmission,
    now: i64,
) -> Result<i64, ServerError> {
    let rent_kes = i64::try_from(submission.rent_kes)
        .map_err(|_| ServerError::BadRequest("rent is too large".into()))?;

    let tx = conn.transaction().map_err(db_err("begin transaction"))?;

    tx.execute(
        r#"
        insert into listing_submissions
            (owner_user_id, title, property_type, rent_kes, location, water,
             electricity, parking, pets_allowed, phone, created_at)
        values (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        params![
            stored.owner_user_id,
            submission.title,
            submission.listing_type.as_str(),
            rent_kes,
            submission.location,
            submission.water.as_str(),
            submission.electricity.as_str(),
            submission.parking,
            submission.pets_allowed,
            submission.phone,
            now
        ],
    )
    .map_err(db_err("insert submission"))?;
    let submission_id = tx.last_insert_rowid();

    tx.execute(
        "update listing_attachments set submission_id = ? where draft_id = ?",
        params![submission_id, stored.id],
    )
    .map_err(db_err("link attachments"))?;

    tx.execute("delete from listing_drafts where id = ?", params![stored.id])
        .map_err(db_err("delete draft"))?;

    tx.commit().map_err(db_err("commit submission"))?;

    info!(
        submission_id,
        title = %submission.title,
        photos = stored.draft.photos.len(),
        "listing submitted for review"
    );
    Ok(submission_id)
}

pub fn submissions_for_user(
    conn: &Connection,
    user_id: i64,
) -> Result<Vec<SubmissionSummary>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select title, status, created_at
            from listing_submissions
            where owner_user_id = ?
            order by created_at desc, id desc
            "#,
        )
        .map_err(db_err("prepare submissions"))?;

    let rows = stmt
        .query_map(params![user_id], |row| {
            Ok(SubmissionSummary {
                title: row.get(0)?,
                status: row.get(1)?,
                created_at: row.get(2)?,
            })
        })
        .map_err(db_err("query submissions"))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(db_err("read submission"))?);
    }
    Ok(out)
}
