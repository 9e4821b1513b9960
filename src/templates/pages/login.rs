use crate::templates::layouts::desktop::{desktop_layout, Viewer};
use maud::{html, Markup};

const GIS_CLIENT: &str = "https://accounts.google.com/gsi/client";

/// Google posts the signed credential straight to `/auth/callback`.
pub fn login_page(viewer: Viewer<'_>, google_client_id: &str, error: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        viewer,
        html! {
            main class="container narrow section" {
                div class="card" {
                    h1 { "Welcome Back" }
                    p class="lead" { "Sign in to continue to your house hunting journey" }

                    @if let Some(message) = error {
                        p class="alert error" role="alert" { "Login failed: " (message) }
                    }

                    script src=(GIS_CLIENT) async {}
                    div
                        id="g_id_onload"
                        data-client_id=(google_client_id)
                        data-login_uri="/auth/callback"
                        data-ux_mode="redirect"
                        data-auto_prompt="true"
                    {}
                    div
                        class="g_id_signin"
                        data-type="standard"
                        data-theme="outline"
                        data-size="large"
                        data-text="signin_with"
                        data-shape="rectangular"
                    {}
                }
            }
        },
    )
}
