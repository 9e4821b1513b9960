// src/handlers/auth.rs
use crate::auth::sessions::{
    clear_session_cookie, create_session, revoke_session, session_cookie, SESSION_COOKIE,
};
use crate::auth::token::SecretToken;
use crate::db::submissions::submissions_for_user;
use crate::db::users::{find_user, upsert_login};
use crate::db::verifications::current_verification;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{to_login, Ctx};
use crate::requests::{cookie, form_params, query_params};
use crate::responses::{html_response, redirect, redirect_with_cookie};
use crate::state::App;
use crate::templates::pages::{dashboard_page, login_page, DashboardVm};
use astra::Request;
use tracing::{info, warn};
use url::form_urlencoded;

/// Google's double-submit cookie; the same value comes back in the form.
const GIS_CSRF: &str = "g_csrf_token";

pub fn login_form(req: &Request, app: &App, ctx: &Ctx) -> ResultResp {
    if ctx.session.is_some() {
        return redirect(302, "/dashboard");
    }
    let params = query_params(req);
    let error = params.get("error").map(String::as_str);
    html_response(login_page(
        ctx.viewer(app),
        &app.config.google_client_id,
        error,
    ))
}

/// Receives the sign-in credential, checks it with the verifier and opens a session.
pub fn callback(req: &mut Request, app: &App, ctx: &Ctx) -> ResultResp {
    let csrf_cookie = cookie(req, GIS_CSRF);
    let form = form_params(req)?;

    if let Some(field) = form.get(GIS_CSRF) {
        if csrf_cookie.as_deref() != Some(field.as_str()) {
            return Err(ServerError::BadRequest(
                "Failed to verify double submit cookie".into(),
            ));
        }
    }

    let credential = form.get("credential").map(String::as_str).unwrap_or_default();
    let identity = match app.verifier.verify(credential) {
        Ok(identity) => identity,
        Err(
            ServerError::Unauthorized(msg)
            | ServerError::BadRequest(msg)
            | ServerError::Upstream(msg),
        ) => {
            warn!("sign-in failed: {msg}");
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair("error", &msg)
                .finish();
            return redirect(303, &format!("/login?{query}"));
        }
        Err(e) => return Err(e),
    };

    let ttl = app.config.session_ttl_secs;
    let token = app.db.with_conn(|conn| {
        let user_id = upsert_login(conn, &identity.email, &identity.display_name, ctx.now)?;
        create_session(conn, user_id, ctx.now, ttl)
    })?;

    info!(email = %identity.email, "signed in");
    redirect_with_cookie(303, "/dashboard", &session_cookie(&token, ttl))
}

pub fn logout(req: &Request, app: &App, ctx: &Ctx) -> ResultResp {
    if let Some(token) = cookie(req, SESSION_COOKIE).and_then(|raw| SecretToken::from_raw(&raw)) {
        let revoked = app
            .db
            .with_conn(|conn| revoke_session(conn, &token, ctx.now))?;
        if revoked {
            info!(user_id = ctx.user_id(), "signed out");
        }
    }
    redirect_with_cookie(303, "/", &clear_session_cookie())
}

pub fn dashboard(app: &App, ctx: &Ctx) -> ResultResp {
    let Some(session) = &ctx.session else {
        return to_login();
    };

    let (user, verification, submissions) = app.db.with_conn(|conn| {
        Ok((
            find_user(conn, session.user_id)?,
            current_verification(conn, session.user_id)?,
            submissions_for_user(conn, session.user_id)?,
        ))
    })?;
    let user = user.ok_or(ServerError::NotFound)?;

    let vm = DashboardVm {
        display_name: user.display_name,
        email: user.email,
        member_since: user.created_at,
        verification,
        submissions,
    };
    html_response(dashboard_page(ctx.viewer(app), &vm))
}
