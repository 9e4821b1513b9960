// src/handlers/verification.rs
use crate::db::verifications::{record_upload, remove_upload};
use crate::domain::upload::{validate_upload, UploadKind, MAX_UPLOAD_BYTES};
use crate::errors::ResultResp;
use crate::handlers::{to_login, Ctx};
use crate::requests::{header, read_body, upload_file_name};
use crate::responses::redirect;
use crate::state::App;
use astra::Request;

/// The ID card arrives as the raw request body.
pub fn upload_id(req: &mut Request, app: &App, ctx: &Ctx) -> ResultResp {
    let Some(session) = &ctx.session else {
        return to_login();
    };

    let content_type = header(req, "content-type").map(str::to_string);
    let file_name = upload_file_name(req);
    let bytes = read_body(req, MAX_UPLOAD_BYTES)?;
    let file = validate_upload(
        UploadKind::IdCard,
        content_type.as_deref(),
        file_name.as_deref(),
        &bytes,
    )?;

    app.db
        .with_conn(|conn| record_upload(conn, session.user_id, &file, &bytes, ctx.now))?;
    redirect(303, "/dashboard")
}

pub fn remove_id(app: &App, ctx: &Ctx) -> ResultResp {
    let Some(session) = &ctx.session else {
        return to_login();
    };
    app.db
        .with_conn(|conn| remove_upload(conn, session.user_id, ctx.now))?;
    redirect(303, "/dashboard")
}
