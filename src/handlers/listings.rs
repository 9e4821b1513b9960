// src/handlers/listings.rs
use crate::db::submissions::{
    attach_file, create_draft, load_draft, save_draft, submit_draft, StoredDraft,
};
use crate::domain::upload::{validate_upload, UploadKind, MAX_UPLOAD_BYTES};
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{to_login, Ctx};
use crate::requests::{form_params, header, read_body, upload_file_name};
use crate::responses::{html_response, redirect};
use crate::state::App;
use crate::templates::pages::{submitted_page, wizard_page};
use astra::Request;

fn signed_out(app: &App, ctx: &Ctx) -> bool {
    app.config.auth_enabled && ctx.session.is_none()
}

fn draft_url(id: &str) -> String {
    format!("/listings/new/{id}")
}

/// Drafts are only visible to whoever started them.
fn load_owned(app: &App, ctx: &Ctx, id: &str) -> Result<StoredDraft, ServerError> {
    let stored = app
        .db
        .with_conn(|conn| load_draft(conn, id))?
        .ok_or(ServerError::NotFound)?;
    if stored.owner_user_id != ctx.user_id() {
        return Err(ServerError::NotFound);
    }
    Ok(stored)
}

pub fn start(app: &App, ctx: &Ctx) -> ResultResp {
    if signed_out(app, ctx) {
        return to_login();
    }
    let id = app
        .db
        .with_conn(|conn| create_draft(conn, ctx.user_id(), ctx.now))?;
    redirect(302, &draft_url(&id))
}

pub fn show(app: &App, ctx: &Ctx, id: &str) -> ResultResp {
    if signed_out(app, ctx) {
        return to_login();
    }
    let stored = load_owned(app, ctx, id)?;
    html_response(wizard_page(ctx.viewer(app), &stored, None))
}

/// Saves the current step's fields, then moves by `action`.
pub fn save_step(req: &mut Request, app: &App, ctx: &Ctx, id: &str) -> ResultResp {
    if signed_out(app, ctx) {
        return to_login();
    }
    let form = form_params(req)?;
    let mut stored = load_owned(app, ctx, id)?;

    let step = stored.draft.step;
    stored
        .draft
        .apply_form(step, &form)
        .map_err(ServerError::BadRequest)?;

    let action = form.get("action").map(String::as_str).unwrap_or("next");
    let outcome = match action {
        "previous" => {
            stored.draft.go_back();
            Ok(())
        }
        "next" => stored.draft.advance(),
        "submit" => {
            let submission = match stored.draft.finalize() {
                Ok(s) => s,
                Err(ServerError::BadRequest(msg)) => {
                    app.db.with_conn(|conn| save_draft(conn, &stored, ctx.now))?;
                    return html_response(wizard_page(ctx.viewer(app), &stored, Some(&msg)));
                }
                Err(e) => return Err(e),
            };
            app.db
                .with_conn(|conn| submit_draft(conn, &stored, &submission, ctx.now))?;
            return html_response(submitted_page(ctx.viewer(app)));
        }
        other => return Err(ServerError::BadRequest(format!("unknown action: {other}"))),
    };

    app.db.with_conn(|conn| save_draft(conn, &stored, ctx.now))?;
    match outcome {
        Ok(()) => redirect(303, &draft_url(id)),
        Err(ServerError::BadRequest(msg)) => {
            html_response(wizard_page(ctx.viewer(app), &stored, Some(&msg)))
        }
        Err(e) => Err(e),
    }
}

/// Photos and the utility bill arrive as raw request bodies.
pub fn attach(
    req: &mut Request,
    app: &App,
    ctx: &Ctx,
    id: &str,
    kind: UploadKind,
) -> ResultResp {
    if signed_out(app, ctx) {
        return to_login();
    }
    let mut stored = load_owned(app, ctx, id)?;

    let content_type = header(req, "content-type").map(str::to_string);
    let file_name = upload_file_name(req);
    let bytes = read_body(req, MAX_UPLOAD_BYTES)?;
    let file = validate_upload(kind, content_type.as_deref(), file_name.as_deref(), &bytes)?;

    app.db
        .with_conn(|conn| attach_file(conn, &mut stored, kind, file, &bytes, ctx.now))?;
    redirect(303, &draft_url(id))
}
