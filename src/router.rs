use crate::domain::upload::UploadKind;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{auth, browse, listings, verification, Ctx};
use crate::state::{now_unix, App};
use astra::Request;
use tracing::warn;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let now = now_unix();
    // A broken session store must not take browsing down with it.
    let session = app.current_session(&req, now).unwrap_or_else(|e| {
        warn!("session lookup failed, treating request as signed out: {e}");
        None
    });
    let ctx = Ctx { now, session };

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    // Sign-in routes only exist when sign-in is configured.
    let auth_on = app.config.auth_enabled;

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => browse::home(&req, app, &ctx),
        ("GET", ["listings"]) => browse::results(&req, app),
        ("GET", ["static", "main.css"]) => browse::stylesheet(),

        ("GET", ["login"]) if auth_on => auth::login_form(&req, app, &ctx),
        ("POST", ["auth", "callback"]) if auth_on => auth::callback(&mut req, app, &ctx),
        ("POST", ["logout"]) if auth_on => auth::logout(&req, app, &ctx),
        ("GET", ["dashboard"]) if auth_on => auth::dashboard(app, &ctx),

        ("POST", ["verification", "id"]) if auth_on => {
            verification::upload_id(&mut req, app, &ctx)
        }
        ("POST", ["verification", "id", "remove"]) if auth_on => {
            verification::remove_id(app, &ctx)
        }

        ("GET", ["listings", "new"]) => listings::start(app, &ctx),
        ("GET", ["listings", "new", draft]) => listings::show(app, &ctx, draft),
        ("POST", ["listings", "new", draft]) => listings::save_step(&mut req, app, &ctx, draft),
        ("POST", ["listings", "new", draft, "photos"]) => {
            listings::attach(&mut req, app, &ctx, draft, UploadKind::Photo)
        }
        ("POST", ["listings", "new", draft, "utility-bill"]) => {
            listings::attach(&mut req, app, &ctx, draft, UploadKind::UtilityBill)
        }

        _ => Err(ServerError::NotFound),
    }
}
