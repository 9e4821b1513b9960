// src/tests/router_tests/verification_tests.rs
use crate::domain::upload::MAX_UPLOAD_BYTES;
use crate::errors::ServerError;
use crate::tests::utils::{
    body_string, get_with_cookie, header_value, post_file, post_form, send, sign_in, test_app,
};

const PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake";

#[test]
fn uploaded_id_card_shows_as_ready() {
    let (_dir, app) = test_app(true);
    let cookie = sign_in(&app, "good-token");

    let resp = send(
        &app,
        post_file("/verification/id", "image/png", "my%20id.png", PNG.to_vec(), Some(&cookie)),
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header_value(&resp, "Location"), "/dashboard");

    let body = body_string(send(&app, get_with_cookie("/dashboard", &cookie)).unwrap());
    assert!(body.contains("Ready to Submit"));
    assert!(body.contains("my id.png"));
    assert!(body.contains(r#"action="/verification/id/remove""#));
}

#[test]
fn removing_the_upload_starts_over() {
    let (_dir, app) = test_app(true);
    let cookie = sign_in(&app, "good-token");
    send(
        &app,
        post_file("/verification/id", "image/jpeg", "id.jpg", PNG.to_vec(), Some(&cookie)),
    )
    .unwrap();

    let resp = send(&app, post_form("/verification/id/remove", "", Some(&cookie))).unwrap();
    assert_eq!(resp.status(), 303);

    let body = body_string(send(&app, get_with_cookie("/dashboard", &cookie)).unwrap());
    assert!(!body.contains("Ready to Submit"));
    assert!(body.contains("Click to upload ID card"));
}

#[test]
fn non_images_are_rejected() {
    let (_dir, app) = test_app(true);
    let cookie = sign_in(&app, "good-token");
    let result = send(
        &app,
        post_file("/verification/id", "application/pdf", "id.pdf", b"%PDF".to_vec(), Some(&cookie)),
    );
    assert!(matches!(result, Err(ServerError::UnsupportedMedia(_))));
}

#[test]
fn oversized_uploads_are_rejected() {
    let (_dir, app) = test_app(true);
    let cookie = sign_in(&app, "good-token");
    let result = send(
        &app,
        post_file(
            "/verification/id",
            "image/png",
            "big.png",
            vec![0u8; MAX_UPLOAD_BYTES + 1],
            Some(&cookie),
        ),
    );
    assert!(matches!(result, Err(ServerError::PayloadTooLarge(_))));
}

#[test]
fn upload_without_session_goes_to_login() {
    let (_dir, app) = test_app(true);
    let resp = send(
        &app,
        post_file("/verification/id", "image/png", "id.png", PNG.to_vec(), None),
    )
    .unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(header_value(&resp, "Location"), "/login");
}
