use crate::db::verifications::IdVerification;
use crate::domain::listing::group_thousands;
use crate::domain::verification::VerificationStatus;
use crate::templates::components::file_upload::file_upload_field;
use maud::{html, Markup};

pub fn id_upload_card(verification: Option<&IdVerification>) -> Markup {
    let status = verification.map(|v| v.status).unwrap_or_default();
    let file = verification.and_then(|v| v.file.as_ref());

    html! {
        section class="card" id="id-verification" {
            div class="section-header" {
                h3 { "ID Verification" }
                @if let Some(label) = status.badge_label() {
                    span class=(format!("status-badge {}", status.as_str())) { (label) }
                }
            }
            p { "Upload your ID card for landlord verification" }

            @match file {
                Some(file) => {
                    p {
                        strong { (file.file_name) }
                        " (" (group_thousands(file.size_bytes as u64)) " bytes)"
                    }
                    @if status.removable() {
                        form method="post" action="/verification/id/remove" {
                            button class="btn" type="submit" { "Remove" }
                        }
                    }
                }
                None => {
                    (file_upload_field(
                        "id-card-input",
                        "/verification/id",
                        "image/*",
                        "Click to upload ID card",
                        "JPG, PNG up to 5MB",
                    ))
                }
            }

            @if status == VerificationStatus::Rejected {
                p class="alert error" { "Your ID card was rejected. Please contact support." }
            }

            p {
                small {
                    "Your ID card will be securely uploaded and reviewed by our team. "
                    "This typically takes 1-2 business days."
                }
            }
        }
    }
}
