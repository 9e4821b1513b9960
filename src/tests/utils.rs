// src/tests/utils.rs
use crate::auth::verifier::Identity;
use crate::auth::AuthVerifier;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::domain::Catalog;
use crate::errors::{ResultResp, ServerError};
use crate::router::handle;
use crate::state::App;
use astra::{Body, Request, Response};
use std::io::Read;
use tempfile::TempDir;

/// Accepts two fixed credentials instead of calling out to the network.
pub struct StubVerifier;

impl AuthVerifier for StubVerifier {
    fn verify(&self, credential: &str) -> Result<Identity, ServerError> {
        match credential {
            "good-token" => Identity::new("Tenant@Example.com", Some("Test Tenant")),
            "landlord-token" => Identity::new("landlord@example.com", Some("Lena Landlord")),
            "" => Err(ServerError::BadRequest("missing credential".into())),
            _ => Err(ServerError::Unauthorized("Token expired".into())),
        }
    }
}

/// A fresh database file inside `dir`.
pub fn init_test_db(dir: &TempDir) -> Database {
    let path = dir.path().join("homefinder.sqlite3");
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

/// The directory holds the database file; keep it alive for the whole test.
pub fn test_app(auth_enabled: bool) -> (TempDir, App) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db = init_test_db(&dir);
    let config = AppConfig {
        db_path: db.path().to_string(),
        auth_enabled,
        ..AppConfig::default()
    };
    let catalog = Catalog::embedded().expect("embedded listings parse");
    (dir, App::new(config, db, catalog, Box::new(StubVerifier)))
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request {
    let mut req = get(uri);
    req.headers_mut().insert("Cookie", cookie.parse().unwrap());
    req
}

pub fn post_form(uri: &str, form: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(c) = cookie {
        builder = builder.header("Cookie", c);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub fn post_file(
    uri: &str,
    content_type: &str,
    file_name: &str,
    bytes: Vec<u8>,
    cookie: Option<&str>,
) -> Request {
    let mut builder = http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", content_type)
        .header("X-File-Name", file_name);
    if let Some(c) = cookie {
        builder = builder.header("Cookie", c);
    }
    builder.body(Body::from(bytes)).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = resp.into_body();
    let mut out = String::new();
    body.reader().read_to_string(&mut out).unwrap();
    out
}

pub fn header_value<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

pub fn send(app: &App, req: Request) -> ResultResp {
    handle(req, app)
}

/// Signs in through the callback and returns the `Cookie` header value.
pub fn sign_in(app: &App, credential: &str) -> String {
    let resp = send(
        app,
        post_form("/auth/callback", &format!("credential={credential}"), None),
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let set_cookie = header_value(&resp, "Set-Cookie");
    set_cookie
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}
