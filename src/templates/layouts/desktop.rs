use crate::auth::Session;
use crate::templates::components::{footer, navbar};
use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Who is looking at the page, as far as the navbar cares.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewer<'a> {
    pub auth_enabled: bool,
    pub session: Option<&'a Session>,
}

pub fn desktop_layout(title: &str, viewer: Viewer<'_>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | HomeFinder" }
                link rel="stylesheet" href="/static/main.css";
                link rel="stylesheet" href=(LEAFLET_CSS);
                script src=(HTMX_SRC) defer {}
                script src=(LEAFLET_JS) defer {}
            }
            body {
                (navbar(viewer))
                (content)
                (footer())
            }
        }
    }
}
