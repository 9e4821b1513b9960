// src/tests/router_tests/listing_tests.rs
use crate::errors::ServerError;
use crate::state::App;
use crate::tests::utils::{
    body_string, get, get_with_cookie, header_value, post_file, post_form, send, sign_in, test_app,
};

const BASICS: &str = "title=Spacious+1BR+in+Roysambu&type=apartment&rent=15000&location=Roysambu&action=next";
const DETAILS: &str = "water=borehole&electricity=tokens&parking=on&action=next";

/// Starts a draft and returns its URL.
fn start_draft(app: &App, cookie: Option<&str>) -> String {
    let req = match cookie {
        Some(c) => get_with_cookie("/listings/new", c),
        None => get("/listings/new"),
    };
    let resp = send(app, req).unwrap();
    assert_eq!(resp.status(), 302);
    let location = header_value(&resp, "Location").to_string();
    assert!(location.starts_with("/listings/new/"));
    location
}

fn count(app: &App, sql: &str) -> i64 {
    app.db
        .with_conn(|conn| {
            conn.query_row(sql, [], |r| r.get(0))
                .map_err(|e| ServerError::DbError(format!("count failed: {e}")))
        })
        .unwrap()
}

#[test]
fn wizard_walks_through_all_steps_and_submits() {
    let (_dir, app) = test_app(false);
    let url = start_draft(&app, None);

    let body = body_string(send(&app, get(&url)).unwrap());
    assert!(body.contains("Property Basics"));

    let resp = send(&app, post_form(&url, BASICS, None)).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header_value(&resp, "Location"), url);
    let body = body_string(send(&app, get(&url)).unwrap());
    assert!(body.contains("Property Details"));

    send(&app, post_form(&url, DETAILS, None)).unwrap();
    let body = body_string(send(&app, get(&url)).unwrap());
    assert!(body.contains("Verification &amp; Photos"));

    let resp = send(
        &app,
        post_file(&format!("{url}/photos"), "image/jpeg", "front.jpg", b"jpeg".to_vec(), None),
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    let body = body_string(send(&app, get(&url)).unwrap());
    assert!(body.contains("front.jpg"));

    let resp = send(&app, post_form(&url, "phone=0712345678&action=submit", None)).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Listing submitted!"));
    assert!(body.contains("Your property has been submitted for review."));

    assert_eq!(count(&app, "select count(*) from listing_submissions where status = 'pending_review'"), 1);
    assert_eq!(count(&app, "select count(*) from listing_attachments where submission_id is not null"), 1);
    assert_eq!(count(&app, "select count(*) from listing_drafts"), 0);

    // The draft is gone once submitted.
    assert!(matches!(send(&app, get(&url)), Err(ServerError::NotFound)));
}

#[test]
fn incomplete_step_stays_put_with_a_message() {
    let (_dir, app) = test_app(false);
    let url = start_draft(&app, None);

    let resp = send(&app, post_form(&url, "title=&type=apartment&rent=abc&action=next", None)).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("please complete"));
    assert!(body.contains("Property Basics"));
}

#[test]
fn back_keeps_entered_values() {
    let (_dir, app) = test_app(false);
    let url = start_draft(&app, None);
    send(&app, post_form(&url, BASICS, None)).unwrap();

    send(&app, post_form(&url, "water=rationed&action=previous", None)).unwrap();
    let body = body_string(send(&app, get(&url)).unwrap());
    assert!(body.contains("Property Basics"));
    assert!(body.contains(r#"value="Spacious 1BR in Roysambu""#));
}

#[test]
fn submit_before_the_last_step_is_refused() {
    let (_dir, app) = test_app(false);
    let url = start_draft(&app, None);
    let resp = send(&app, post_form(&url, "title=x&action=submit", None)).unwrap();
    assert!(body_string(resp).contains("please complete"));
    assert_eq!(count(&app, "select count(*) from listing_submissions"), 0);
}

#[test]
fn utility_bill_is_replaced_not_added() {
    let (_dir, app) = test_app(false);
    let url = start_draft(&app, None);
    let bill = format!("{url}/utility-bill");

    send(&app, post_file(&bill, "application/pdf", "march.pdf", b"%PDF-1".to_vec(), None)).unwrap();
    send(&app, post_file(&bill, "application/pdf", "april.pdf", b"%PDF-2".to_vec(), None)).unwrap();

    assert_eq!(count(&app, "select count(*) from listing_attachments where kind = 'utility_bill'"), 1);
}

#[test]
fn photo_must_be_an_image() {
    let (_dir, app) = test_app(false);
    let url = start_draft(&app, None);
    let result = send(
        &app,
        post_file(&format!("{url}/photos"), "text/plain", "notes.txt", b"hi".to_vec(), None),
    );
    assert!(matches!(result, Err(ServerError::UnsupportedMedia(_))));
}

#[test]
fn unknown_draft_is_not_found() {
    let (_dir, app) = test_app(false);
    assert!(matches!(send(&app, get("/listings/new/missing")), Err(ServerError::NotFound)));
}

#[test]
fn unknown_action_is_bad_request() {
    let (_dir, app) = test_app(false);
    let url = start_draft(&app, None);
    let result = send(&app, post_form(&url, "action=jump", None));
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn signed_in_submission_shows_on_dashboard() {
    let (_dir, app) = test_app(true);
    assert_eq!(header_value(&send(&app, get("/listings/new")).unwrap(), "Location"), "/login");

    let cookie = sign_in(&app, "good-token");
    let url = start_draft(&app, Some(&cookie));
    send(&app, post_form(&url, BASICS, Some(&cookie))).unwrap();
    send(&app, post_form(&url, DETAILS, Some(&cookie))).unwrap();
    send(&app, post_form(&url, "phone=0712345678&action=submit", Some(&cookie))).unwrap();

    let body = body_string(send(&app, get_with_cookie("/dashboard", &cookie)).unwrap());
    assert!(body.contains("Spacious 1BR in Roysambu"));
    assert!(body.contains("Pending review"));
}

#[test]
fn drafts_are_private_to_their_owner() {
    let (_dir, app) = test_app(true);
    let owner = sign_in(&app, "good-token");
    let other = sign_in(&app, "landlord-token");
    let url = start_draft(&app, Some(&owner));

    assert_eq!(send(&app, get_with_cookie(&url, &owner)).unwrap().status(), 200);
    assert!(matches!(
        send(&app, get_with_cookie(&url, &other)),
        Err(ServerError::NotFound)
    ));
}
