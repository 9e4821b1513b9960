// src/tests/router_tests/browse_tests.rs
use crate::errors::ServerError;
use crate::tests::utils::{body_string, get, header_value, send, test_app};

#[test]
fn home_renders_featured_and_all_sections() {
    let (_dir, app) = test_app(false);
    let resp = send(&app, get("/")).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Featured Properties"));
    assert!(body.contains("All Properties"));
    assert!(body.contains("6 properties found"));
    assert!(body.contains("How HomeFinder Works"));
    // Featured first, in catalog order.
    let first = body.find("Modern 2BR Apartment in Westlands").unwrap();
    let second = body.find("Spacious 3BR House in Karen").unwrap();
    assert!(first < second);
}

#[test]
fn home_keeps_filters_in_the_form() {
    let (_dir, app) = test_app(false);
    let body = body_string(send(&app, get("/?location=Karen&price=luxury")).unwrap());
    assert!(body.contains(r#"<option value="Karen" selected>Karen</option>"#));
    assert!(body.contains(r#"<option value="luxury" selected>100K+</option>"#));
    assert!(body.contains("1 properties found"));
}

#[test]
fn listings_partial_has_no_layout() {
    let (_dir, app) = test_app(false);
    let resp = send(&app, get("/listings?q=karen")).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(!body.contains("<html"));
    assert!(body.starts_with(r#"<div id="results">"#));
    assert!(body.contains("Spacious 3BR House in Karen"));
    assert!(!body.contains("Cozy Studio in Kilimani"));
    assert!(body.contains("1 properties found"));
}

#[test]
fn empty_results_show_the_empty_state() {
    let (_dir, app) = test_app(false);
    let body = body_string(send(&app, get("/listings?q=zzz-no-match")).unwrap());
    assert!(body.contains("0 properties found"));
    assert!(body.contains("No properties found"));
    assert!(body.contains("Try adjusting your search filters"));
    assert!(!body.contains("Featured Properties"));
}

#[test]
fn budget_bucket_finds_the_bedsitter() {
    let (_dir, app) = test_app(false);
    let body = body_string(send(&app, get("/listings?price=budget")).unwrap());
    assert!(body.contains("Affordable Bedsitter in Roysambu"));
    assert!(body.contains("KES 8,000"));
    assert!(!body.contains("Featured Properties"));
}

#[test]
fn cards_link_to_call_and_whatsapp() {
    let (_dir, app) = test_app(false);
    let body = body_string(send(&app, get("/listings?q=westlands")).unwrap());
    assert!(body.contains(r#"href="tel:"#));
    assert!(body.contains("https://wa.me/"));
    assert!(body.contains("interested+in+your+property"));
}

#[test]
fn map_view_embeds_marker_data() {
    let (_dir, app) = test_app(false);
    let body = body_string(send(&app, get("/listings?view=map")).unwrap());
    assert!(body.contains(r#"id="property-map-data""#));
    assert!(body.contains(r#""lat":"#));
    assert!(body.contains(r#"class="active">Map</a>"#));
}

#[test]
fn map_view_is_stable_between_requests() {
    let (_dir, app) = test_app(false);
    let a = body_string(send(&app, get("/listings?view=map")).unwrap());
    let b = body_string(send(&app, get("/listings?view=map")).unwrap());
    assert_eq!(a, b);
}

#[test]
fn search_form_stays_in_map_view() {
    let (_dir, app) = test_app(false);
    let body = body_string(send(&app, get("/?view=map&location=Karen")).unwrap());

    let form_start = body.find(r#"<form class="search-box""#).unwrap();
    let form = &body[form_start..body[form_start..].find("</form>").unwrap() + form_start];
    assert!(form.contains(r#"<input type="hidden" id="view-mode" name="view" value="map">"#));
}

#[test]
fn listings_partial_updates_the_form_view_out_of_band() {
    let (_dir, app) = test_app(false);
    let body = body_string(send(&app, get("/listings?view=map")).unwrap());
    assert!(body.contains(
        r#"<input type="hidden" id="view-mode" name="view" value="map" hx-swap-oob="true">"#
    ));

    let body = body_string(send(&app, get("/listings")).unwrap());
    assert!(body.contains(r#"name="view" value="grid" hx-swap-oob="true">"#));
}

#[test]
fn unknown_filter_values_are_rejected() {
    let (_dir, app) = test_app(false);
    for uri in [
        "/listings?price=cheap",
        "/listings?type=castle",
        "/listings?location=Mombasa",
        "/?view=table",
    ] {
        match send(&app, get(uri)) {
            Err(ServerError::BadRequest(_)) => {}
            other => panic!("{uri}: expected BadRequest, got {:?}", other.map(|r| r.status())),
        }
    }
}

#[test]
fn stylesheet_is_served() {
    let (_dir, app) = test_app(false);
    let resp = send(&app, get("/static/main.css")).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header_value(&resp, "Content-Type").starts_with("text/css"));
}

#[test]
fn unknown_route_is_not_found() {
    let (_dir, app) = test_app(false);
    assert!(matches!(send(&app, get("/nope")), Err(ServerError::NotFound)));
}
