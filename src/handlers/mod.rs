pub mod auth;
pub mod browse;
pub mod listings;
pub mod verification;

use crate::auth::Session;
use crate::errors::ResultResp;
use crate::responses::redirect;
use crate::state::App;
use crate::templates::Viewer;

/// Per-request facts resolved once by the router.
#[derive(Debug, Clone)]
pub struct Ctx {
    pub now: i64,
    pub session: Option<Session>,
}

impl Ctx {
    pub fn viewer<'a>(&'a self, app: &App) -> Viewer<'a> {
        Viewer {
            auth_enabled: app.config.auth_enabled,
            session: self.session.as_ref(),
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.user_id)
    }
}

pub(crate) fn to_login() -> ResultResp {
    redirect(302, "/login")
}
