use crate::db::submissions::SubmissionSummary;
use crate::db::verifications::IdVerification;
use crate::templates::components::id_upload_card;
use crate::templates::layouts::desktop::{desktop_layout, Viewer};
use chrono::DateTime;
use maud::{html, Markup};

pub struct DashboardVm {
    pub display_name: String,
    pub email: String,
    pub member_since: i64,
    pub verification: Option<IdVerification>,
    pub submissions: Vec<SubmissionSummary>,
}

fn format_day(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|d| d.format("%-d %b %Y").to_string())
        .unwrap_or_default()
}

fn status_label(status: &str) -> &str {
    match status {
        "pending_review" => "Pending review",
        "approved" => "Live",
        "rejected" => "Rejected",
        other => other,
    }
}

pub fn dashboard_page(viewer: Viewer<'_>, vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Dashboard",
        viewer,
        html! {
            main class="container section" {
                div class="section-header" {
                    h1 { "Dashboard" }
                    form method="post" action="/logout" {
                        button class="btn" type="submit" { "Logout" }
                    }
                }

                section class="card" {
                    h2 { "Welcome, " (vm.display_name) "!" }
                    p { "You're now logged in to your house hunting dashboard." }
                    p {
                        small { (vm.email) " · member since " (format_day(vm.member_since)) }
                    }
                }

                (id_upload_card(vm.verification.as_ref()))

                section class="card" {
                    div class="section-header" {
                        h3 { "Your Listings" }
                        a class="btn primary" href="/listings/new" { "+ List Property Free" }
                    }
                    @if vm.submissions.is_empty() {
                        p { "You haven't submitted any properties yet." }
                    } @else {
                        table {
                            thead {
                                tr { th { "Title" } th { "Status" } th { "Submitted" } }
                            }
                            tbody {
                                @for s in &vm.submissions {
                                    tr {
                                        td { (s.title) }
                                        td { (status_label(&s.status)) }
                                        td { (format_day(s.created_at)) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
