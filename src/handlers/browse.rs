// src/handlers/browse.rs
use crate::domain::query::QueryState;
use crate::domain::SearchResults;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::Ctx;
use crate::requests::query_params;
use crate::responses::{css_response, html_response};
use crate::state::App;
use crate::templates::pages::{home_page, results_partial, BrowseVm, ViewMode};
use astra::Request;
use maud::Markup;
use tracing::debug;

const STYLESHEET: &str = include_str!("../../static/main.css");

fn markers_json(
    app: &App,
    results: &SearchResults<'_>,
    view: ViewMode,
) -> Result<Option<String>, ServerError> {
    if view != ViewMode::Map || results.is_empty() {
        return Ok(None);
    }
    let markers = app.markers.markers(results.matched());
    serde_json::to_string(&markers)
        .map(Some)
        .map_err(|_| ServerError::InternalError)
}

/// Parses the filters, runs the search and renders with `render`.
fn browse(req: &Request, app: &App, render: impl FnOnce(&BrowseVm<'_>) -> Markup) -> ResultResp {
    let params = query_params(req);
    let query = QueryState::from_params(&params).map_err(ServerError::BadRequest)?;
    let view: ViewMode = params
        .get("view")
        .map(String::as_str)
        .unwrap_or_default()
        .parse()
        .map_err(ServerError::BadRequest)?;

    let results = app.catalog.search(&query);
    debug!(
        term = %query.term,
        location = query.location.as_str(),
        category = query.category.as_str(),
        price = query.price.as_str(),
        featured = results.featured.len(),
        regular = results.regular.len(),
        "search"
    );

    let vm = BrowseVm {
        query: &query,
        results: &results,
        view,
        markers_json: markers_json(app, &results, view)?,
    };
    html_response(render(&vm))
}

pub fn home(req: &Request, app: &App, ctx: &Ctx) -> ResultResp {
    browse(req, app, |vm| home_page(ctx.viewer(app), vm))
}

/// htmx partial: only the results block.
pub fn results(req: &Request, app: &App) -> ResultResp {
    browse(req, app, results_partial)
}

pub fn stylesheet() -> ResultResp {
    css_response(STYLESHEET)
}
