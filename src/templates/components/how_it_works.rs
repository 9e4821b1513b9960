use maud::{html, Markup};

const TENANT_STEPS: [(&str, &str); 3] = [
    (
        "Search Properties",
        "Browse our extensive listings with filters for location, price, and amenities.",
    ),
    (
        "Contact Directly",
        "Call or WhatsApp landlords and caretakers instantly for inquiries.",
    ),
    (
        "Move In",
        "Finalize the deal, sign your lease, and get your keys. Welcome home!",
    ),
];

const LANDLORD_STEPS: [(&str, &str); 3] = [
    (
        "List For Free",
        "Create your property listing in minutes. Upload photos and details.",
    ),
    (
        "Get Inquiries",
        "Receive direct calls and messages from verified interested tenants.",
    ),
    (
        "Earn Commission",
        "Only pay a small commission when you successfully find a tenant.",
    ),
];

fn steps(items: &[(&str, &str)]) -> Markup {
    html! {
        @for (title, text) in items {
            div class="step" {
                h4 { (title) }
                p { (text) }
            }
        }
    }
}

pub fn how_it_works() -> Markup {
    html! {
        section id="how-it-works" class="section soft how-it-works" {
            div class="container" {
                div class="section-header" {
                    span class="pill" { "Simple Process" }
                    h2 { "How HomeFinder Works" }
                    p { "Whether you're looking for a home or listing your property, we've made it simple." }
                }
                div class="columns" {
                    div {
                        h3 { "For House Hunters" }
                        (steps(&TENANT_STEPS))
                    }
                    div id="for-landlords" {
                        h3 { "For Landlords & Caretakers" }
                        (steps(&LANDLORD_STEPS))
                    }
                }
            }
        }
    }
}
