// src/tests/router_tests/auth_tests.rs
use crate::errors::ServerError;
use crate::tests::utils::{
    body_string, get, get_with_cookie, header_value, post_form, send, sign_in, test_app,
};

#[test]
fn callback_sets_cookie_and_redirects() -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, app) = test_app(true);

    let resp = send(&app, post_form("/auth/callback", "credential=good-token", None))?;
    assert_eq!(resp.status(), 303);
    assert_eq!(header_value(&resp, "Location"), "/dashboard");

    let cookie = header_value(&resp, "Set-Cookie");
    assert!(cookie.starts_with("session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));

    // Only the digest is stored.
    let raw = cookie.split(';').next().unwrap().trim_start_matches("session=");
    app.db.with_conn(|conn| {
        let n: i64 = conn
            .query_row("select count(*) from sessions", [], |r| r.get(0))
            .map_err(|e| ServerError::DbError(format!("count sessions failed: {e}")))?;
        assert_eq!(n, 1);
        let hash: Vec<u8> = conn
            .query_row("select token_hash from sessions", [], |r| r.get(0))
            .map_err(|e| ServerError::DbError(format!("read session failed: {e}")))?;
        assert_ne!(hash.as_slice(), raw.as_bytes());
        Ok(())
    })?;

    Ok(())
}

#[test]
fn rejected_credential_returns_to_login_with_message() {
    let (_dir, app) = test_app(true);
    let resp = send(&app, post_form("/auth/callback", "credential=stale", None)).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header_value(&resp, "Location"), "/login?error=Token+expired");
    assert_eq!(header_value(&resp, "Set-Cookie"), "");

    let body = body_string(send(&app, get("/login?error=Token+expired")).unwrap());
    assert!(body.contains("Login failed: Token expired"));
}

#[test]
fn mismatched_csrf_cookie_is_rejected() {
    let (_dir, app) = test_app(true);
    let mut req = post_form(
        "/auth/callback",
        "credential=good-token&g_csrf_token=abc",
        Some("g_csrf_token=xyz"),
    );
    assert!(matches!(send(&app, req), Err(ServerError::BadRequest(_))));

    req = post_form(
        "/auth/callback",
        "credential=good-token&g_csrf_token=abc",
        Some("g_csrf_token=abc"),
    );
    assert_eq!(send(&app, req).unwrap().status(), 303);
}

#[test]
fn login_page_offers_google_sign_in() {
    let (_dir, app) = test_app(true);
    let body = body_string(send(&app, get("/login")).unwrap());
    assert!(body.contains("Welcome Back"));
    assert!(body.contains(r#"data-login_uri="/auth/callback""#));
}

#[test]
fn dashboard_requires_session() {
    let (_dir, app) = test_app(true);
    let resp = send(&app, get("/dashboard")).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header_value(&resp, "Location"), "/login");

    let resp = send(&app, get_with_cookie("/dashboard", "session=forged")).unwrap();
    assert_eq!(resp.status(), 302);
}

#[test]
fn dashboard_greets_signed_in_user() {
    let (_dir, app) = test_app(true);
    let cookie = sign_in(&app, "good-token");

    let resp = send(&app, get_with_cookie("/dashboard", &cookie)).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Welcome, Test Tenant!"));
    assert!(body.contains("tenant@example.com"));
    assert!(body.contains("ID Verification"));
    assert!(body.contains("You haven't submitted any properties yet."));
}

#[test]
fn signed_in_login_goes_to_dashboard() {
    let (_dir, app) = test_app(true);
    let cookie = sign_in(&app, "good-token");
    let resp = send(&app, get_with_cookie("/login", &cookie)).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header_value(&resp, "Location"), "/dashboard");
}

#[test]
fn logout_ends_the_session() {
    let (_dir, app) = test_app(true);
    let cookie = sign_in(&app, "good-token");

    let resp = send(&app, post_form("/logout", "", Some(&cookie))).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header_value(&resp, "Location"), "/");
    assert!(header_value(&resp, "Set-Cookie").contains("Max-Age=0"));

    let resp = send(&app, get_with_cookie("/dashboard", &cookie)).unwrap();
    assert_eq!(resp.status(), 302);
}

#[test]
fn disabled_auth_hides_sign_in_routes() {
    let (_dir, app) = test_app(false);
    for req in [
        get("/login"),
        get("/dashboard"),
        post_form("/auth/callback", "credential=good-token", None),
        post_form("/logout", "", None),
        post_form("/verification/id/remove", "", None),
    ] {
        assert!(matches!(send(&app, req), Err(ServerError::NotFound)));
    }

    let body = body_string(send(&app, get("/")).unwrap());
    assert!(!body.contains("Sign In"));
}

#[test]
fn session_store_failure_falls_back_to_signed_out() {
    let (_dir, app) = test_app(true);
    let cookie = sign_in(&app, "good-token");
    app.db
        .with_conn(|conn| {
            conn.execute_batch("drop table sessions")
                .map_err(|e| ServerError::DbError(e.to_string()))
        })
        .unwrap();

    let resp = send(&app, get_with_cookie("/static/main.css", &cookie)).unwrap();
    assert_eq!(resp.status(), 200);

    let resp = send(&app, get_with_cookie("/", &cookie)).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(r#"href="/login""#));
}
