// templates/pages/home.rs

use crate::domain::query::QueryState;
use crate::domain::SearchResults;
use crate::templates::components::{
    hero_section, how_it_works, property_card, property_map, view_mode_field,
};
use crate::templates::layouts::desktop::{desktop_layout, Viewer};
use maud::{html, Markup};
use std::str::FromStr;

/// How the "All Properties" section shows its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    Map,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::Map => "map",
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "grid" => Ok(ViewMode::Grid),
            "map" => Ok(ViewMode::Map),
            other => Err(format!("unknown view: {other}")),
        }
    }
}

pub struct BrowseVm<'a> {
    pub query: &'a QueryState,
    pub results: &'a SearchResults<'a>,
    pub view: ViewMode,
    /// Serialized markers; only present for the map view.
    pub markers_json: Option<String>,
}

pub fn home_page(viewer: Viewer<'_>, vm: &BrowseVm<'_>) -> Markup {
    desktop_layout(
        "Find Your Perfect Home",
        viewer,
        html! {
            main {
                (hero_section(vm.query, vm.view.as_str()))
                (results_section(vm))
                (how_it_works())
            }
        },
    )
}

fn view_links(query: &QueryState, view: ViewMode) -> (String, String) {
    let mut qs = query.to_query_string();
    if view != ViewMode::Grid {
        if !qs.is_empty() {
            qs.push('&');
        }
        qs.push_str("view=");
        qs.push_str(view.as_str());
    }
    if qs.is_empty() {
        ("/".to_string(), "/listings".to_string())
    } else {
        (format!("/?{qs}"), format!("/listings?{qs}"))
    }
}

/// The htmx response: results plus the form's view field, swapped out of band.
pub fn results_partial(vm: &BrowseVm<'_>) -> Markup {
    html! {
        (results_section(vm))
        (view_mode_field(vm.view.as_str(), true))
    }
}

/// Featured and "All Properties" sections.
fn results_section(vm: &BrowseVm<'_>) -> Markup {
    let results = vm.results;
    // Regular listings, or everything matched when none are regular.
    let grid = if results.regular.is_empty() {
        results.matched()
    } else {
        results.regular.as_slice()
    };

    html! {
        div id="results" {
            @if !results.featured.is_empty() {
                section id="properties" class="section" {
                    div class="container" {
                        div class="section-header" {
                            span class="pill accent" { "⭐ Featured" }
                            h2 { "Featured Properties" }
                        }
                        div class="grid" {
                            @for record in &results.featured {
                                (property_card(record))
                            }
                        }
                    }
                }
            }

            section id="all-properties" class="section soft" {
                div class="container" {
                    div class="section-header" {
                        span class="pill" { "Available Now" }
                        h2 { "All Properties" }
                        p class="result-count" { (results.total()) " properties found" }

                        div class="view-toggle" {
                            @for mode in [ViewMode::Grid, ViewMode::Map] {
                                @let (href, partial) = view_links(vm.query, mode);
                                a
                                    href=(href)
                                    hx-get=(partial)
                                    hx-target="#results"
                                    hx-swap="outerHTML"
                                    class=[(vm.view == mode).then_some("active")]
                                {
                                    @match mode {
                                        ViewMode::Grid => "Grid",
                                        ViewMode::Map => "Map",
                                    }
                                }
                            }
                        }
                    }

                    @if results.is_empty() {
                        div class="empty-state" {
                            h3 { "No properties found" }
                            p { "Try adjusting your search filters" }
                        }
                    } @else if let (ViewMode::Map, Some(json)) = (vm.view, &vm.markers_json) {
                        (property_map(json))
                    } @else {
                        div class="grid" {
                            @for record in grid {
                                (property_card(record))
                            }
                        }
                    }
                }
            }
        }
    }
}
