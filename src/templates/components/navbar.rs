use crate::templates::layouts::desktop::Viewer;
use maud::{html, Markup};

pub fn navbar(viewer: Viewer<'_>) -> Markup {
    html! {
        header class="navbar" {
            div class="container" {
                a class="brand" href="/" { "Home" span { "Finder" } }
                nav {
                    ul {
                        li { a href="/#properties" { "Properties" } }
                        li { a href="/#how-it-works" { "How It Works" } }
                        li { a href="/#for-landlords" { "For Landlords" } }
                    }
                }
                div class="actions" {
                    @if viewer.auth_enabled {
                        @match viewer.session {
                            Some(session) => {
                                a class="btn" href="/dashboard" { (session.display_name) }
                                form method="post" action="/logout" {
                                    button class="btn" type="submit" { "Sign Out" }
                                }
                            }
                            None => a class="btn" href="/login" { "Sign In" },
                        }
                    }
                    a class="btn primary" href="/listings/new" { "+ List Property Free" }
                }
            }
        }
    }
}
