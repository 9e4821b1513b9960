// src/state.rs
use crate::auth::sessions::{load_session, SESSION_COOKIE};
use crate::auth::token::SecretToken;
use crate::auth::{AuthVerifier, RemoteVerifier, Session};
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::domain::map::MarkerPlacer;
use crate::domain::Catalog;
use crate::errors::ServerError;
use crate::requests::cookie;
use astra::Request;

/// Everything a request handler needs. Shared read-only across workers.
pub struct App {
    pub config: AppConfig,
    pub db: Database,
    pub catalog: Catalog,
    pub markers: MarkerPlacer,
    pub verifier: Box<dyn AuthVerifier>,
}

impl App {
    pub fn new(
        config: AppConfig,
        db: Database,
        catalog: Catalog,
        verifier: Box<dyn AuthVerifier>,
    ) -> Self {
        let markers = MarkerPlacer::new(config.map_seed);
        Self {
            config,
            db,
            catalog,
            markers,
            verifier,
        }
    }

    /// Loads listings, prepares the database and the sign-in client.
    pub fn from_config(config: AppConfig) -> Result<Self, ServerError> {
        let catalog = Catalog::load(config.listings_path.as_deref())?;

        let db = Database::new(config.db_path.clone());
        init_db(&db)?;

        let verifier = RemoteVerifier::new(config.auth_endpoint.clone())?;
        Ok(Self::new(config, db, catalog, Box::new(verifier)))
    }

    /// The signed-in user, if sign-in is enabled and the cookie names a live session.
    pub fn current_session(&self, req: &Request, now: i64) -> Result<Option<Session>, ServerError> {
        if !self.config.auth_enabled {
            return Ok(None);
        }
        let Some(token) = cookie(req, SESSION_COOKIE).and_then(|raw| SecretToken::from_raw(&raw))
        else {
            return Ok(None);
        };
        self.db.with_conn(|conn| load_session(conn, &token, now))
    }
}

pub fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}
