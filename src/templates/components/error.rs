use maud::{html, Markup, DOCTYPE};

/// Standalone page: errors can happen before we know who the viewer is.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                main class="container narrow section" {
                    h1 { "Error " (status) }
                    p { (message) }
                    p { a href="/" { "← Back to home" } }
                }
            }
        }
    }
}
