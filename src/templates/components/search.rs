use crate::domain::listing::PropertyCategory;
use crate::domain::query::{PriceBucket, QueryState, ALL_CATEGORIES, ALL_LOCATIONS, LOCATIONS};
use maud::{html, Markup};

const STATS: [(&str, &str); 3] = [
    ("1,200+", "Properties Listed"),
    ("500+", "Happy Tenants"),
    ("300+", "Verified Landlords"),
];

/// Carries grid/map choice with every search. Results partials send an
/// out-of-band copy so the form follows the view toggle.
pub fn view_mode_field(view: &str, out_of_band: bool) -> Markup {
    html! {
        input
            type="hidden"
            id="view-mode"
            name="view"
            value=(view)
            hx-swap-oob=[out_of_band.then_some("true")];
    }
}

/// Every control change re-renders `#results` through `/listings`.
/// Without JavaScript the form still submits to `/`.
pub fn hero_section(query: &QueryState, view: &str) -> Markup {
    let location = query.location.as_str();
    let category = query.category.as_str();

    html! {
        section class="hero" {
            div class="container" {
                span class="pill" { "Find Your Perfect Home" }
                h1 { "Discover Your Dream House Without Leaving Home" }
                p class="lead" {
                    "Browse thousands of verified properties, connect directly with landlords "
                    "and caretakers, and find your next home with ease. "
                    "Free listings for property owners."
                }

                form
                    class="search-box"
                    method="get"
                    action="/"
                    hx-get="/listings"
                    hx-target="#results"
                    hx-swap="outerHTML"
                    hx-trigger="input changed delay:300ms from:input, change from:select, submit"
                {
                    label class="sr-only" for="q" { "Search" }
                    input
                        type="search"
                        id="q"
                        name="q"
                        value=(query.term)
                        placeholder="Search by property name or keyword...";

                    label class="sr-only" for="location" { "Location" }
                    select id="location" name="location" {
                        option value=(ALL_LOCATIONS) selected[location == ALL_LOCATIONS] { (ALL_LOCATIONS) }
                        @for area in LOCATIONS {
                            option value=(area) selected[location == area] { (area) }
                        }
                    }

                    label class="sr-only" for="type" { "Property Type" }
                    select id="type" name="type" {
                        option value=(ALL_CATEGORIES) selected[category == ALL_CATEGORIES] { "All Types" }
                        @for c in PropertyCategory::ALL {
                            option value=(c.as_str()) selected[category == c.as_str()] { (c.label()) }
                        }
                    }

                    label class="sr-only" for="price" { "Price Range" }
                    select id="price" name="price" {
                        @for bucket in PriceBucket::ALL {
                            option value=(bucket.as_str()) selected[query.price == bucket] { (bucket.label()) }
                        }
                    }

                    (view_mode_field(view, false))
                    button class="btn primary" type="submit" { "Search" }
                }

                div class="stats" {
                    @for (value, label) in STATS {
                        div {
                            strong { (value) }
                            span { (label) }
                        }
                    }
                }
            }
        }
    }
}
