use maud::{html, Markup};

pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="container" {
                div class="columns" {
                    div {
                        a class="brand" href="/" { "HomeFinder" }
                        p {
                            "Find your perfect home without leaving your house. "
                            "Direct contact with landlords and caretakers."
                        }
                    }
                    div {
                        h4 { "For Landlords" }
                        ul {
                            li { a href="/listings/new" { "List Your Property" } }
                            li { a href="/#how-it-works" { "How It Works" } }
                        }
                    }
                    div {
                        h4 { "Support" }
                        ul {
                            li { "Help Center" }
                            li { "Terms of Service" }
                            li { "Privacy Policy" }
                        }
                    }
                    div {
                        h4 { "Contact Us" }
                        ul {
                            li { "Nairobi, Kenya" }
                            li { a href="tel:+254700123456" { "+254 700 123 456" } }
                            li { a href="mailto:hello@homefinder.co.ke" { "hello@homefinder.co.ke" } }
                        }
                    }
                }
                p class="legal" { "© 2024 HomeFinder. All rights reserved." }
            }
        }
    }
}
