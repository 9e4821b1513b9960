use crate::db::submissions::StoredDraft;
use crate::domain::submission::{
    ListingDraft, WizardStep, ELECTRICITY, LISTING_TYPES, WATER_SOURCES,
};
use crate::templates::components::file_upload_field;
use crate::templates::layouts::desktop::{desktop_layout, Viewer};
use maud::{html, Markup};

fn step_indicator(current: WizardStep) -> Markup {
    html! {
        ol class="wizard-steps" {
            @for (i, step) in WizardStep::ALL.into_iter().enumerate() {
                @if i > 0 {
                    li class=(if step.number() <= current.number() { "bar done" } else { "bar" }) aria-hidden="true" {}
                }
                @let state = if step == current {
                    "step active"
                } else if step.number() < current.number() {
                    "step done"
                } else {
                    "step"
                };
                li class=(state) {
                    span class="dot" { (step.number()) }
                    span { (step.title()) }
                }
            }
        }
    }
}

fn choice_select<T: Copy + PartialEq>(
    id: &str,
    placeholder: &str,
    options: &[(T, &str, &str)],
    current: Option<T>,
) -> Markup {
    html! {
        select id=(id) name=(id) required {
            option value="" selected[current.is_none()] { (placeholder) }
            @for (value, key, label) in options {
                option value=(key) selected[current == Some(*value)] { (label) }
            }
        }
    }
}

fn basics(draft: &ListingDraft) -> Markup {
    html! {
        h2 { "Property Basics" }
        p { "Tell us about your property" }
        div class="form-field" {
            label for="title" { "Property Title" }
            input type="text" id="title" name="title" value=(draft.title)
                placeholder="e.g., Spacious 1BR in Roysambu" required;
        }
        div class="form-field" {
            label for="type" { "Property Type" }
            (choice_select("type", "Select property type", &LISTING_TYPES, draft.listing_type))
        }
        div class="form-field" {
            label for="rent" { "Monthly Rent (KES)" }
            input type="number" id="rent" name="rent" min="0" value=(draft.rent)
                placeholder="e.g., 15000" required;
        }
        div class="form-field" {
            label for="location" { "Location / Estate" }
            input type="text" id="location" name="location" value=(draft.location)
                placeholder="e.g., Roysambu, Nairobi" required;
        }
    }
}

fn details(draft: &ListingDraft) -> Markup {
    html! {
        h2 { "Property Details" }
        p { "Crucial info for tenants" }
        div class="form-field" {
            label for="water" { "Water Source" }
            (choice_select("water", "Select water source", &WATER_SOURCES, draft.water))
        }
        div class="form-field" {
            label for="electricity" { "Electricity" }
            (choice_select("electricity", "Select electricity type", &ELECTRICITY, draft.electricity))
        }
        div class="form-field" {
            label {
                input type="checkbox" name="parking" checked[draft.parking];
                " Parking Available"
            }
            label {
                input type="checkbox" name="pets_allowed" checked[draft.pets_allowed];
                " Pets Allowed"
            }
        }
    }
}

fn verification(draft: &ListingDraft) -> Markup {
    html! {
        h2 { "Verification & Photos" }
        p { "Almost done! Just a few more details" }
        div class="form-field" {
            label for="phone" { "Landlord Phone Number *" }
            input type="tel" id="phone" name="phone" value=(draft.phone)
                placeholder="e.g., 0712345678" required;
            small { "Required for verification purposes" }
        }
    }
}

fn attachments(stored: &StoredDraft) -> Markup {
    let draft = &stored.draft;
    html! {
        section class="card" {
            (file_upload_field(
                "photos",
                &format!("/listings/new/{}/photos", stored.id),
                "image/*",
                "Click to upload photos",
                "PNG, JPG up to 5MB each",
            ))
            @if !draft.photos.is_empty() {
                ul class="uploaded-files" {
                    @for photo in &draft.photos {
                        li { (photo.file_name) }
                    }
                }
            }

            (file_upload_field(
                "utility-bill",
                &format!("/listings/new/{}/utility-bill", stored.id),
                "application/pdf,image/jpeg,image/png",
                "Upload a recent water/power bill",
                "Increases trust score ⭐",
            ))
            @if let Some(bill) = &draft.utility_bill {
                p { "✓ " (bill.file_name) }
            }
        }
    }
}

pub fn wizard_page(viewer: Viewer<'_>, stored: &StoredDraft, error: Option<&str>) -> Markup {
    let draft = &stored.draft;
    let step = draft.step;

    desktop_layout(
        "List Your Property",
        viewer,
        html! {
            main class="container narrow section" {
                a href="/" { "← Back to Home" }
                h1 { "List Your Property" }
                (step_indicator(step))

                @if let Some(message) = error {
                    p class="alert error" role="alert" { (message) }
                }

                form class="card" method="post" action=(format!("/listings/new/{}", stored.id)) {
                    @match step {
                        WizardStep::Basics => (basics(draft)),
                        WizardStep::Details => (details(draft)),
                        WizardStep::Verification => (verification(draft)),
                    }

                    div class="form-actions" {
                        @if step.previous().is_some() {
                            button class="btn" type="submit" name="action" value="previous" formnovalidate { "Back" }
                        }
                        @if step.next().is_some() {
                            button class="btn primary" type="submit" name="action" value="next" { "Next" }
                        } @else {
                            button class="btn primary" type="submit" name="action" value="submit" { "Submit Listing" }
                        }
                    }
                }

                @if step == WizardStep::Verification {
                    (attachments(stored))
                }
            }
        },
    )
}

pub fn submitted_page(viewer: Viewer<'_>) -> Markup {
    desktop_layout(
        "Listing submitted",
        viewer,
        html! {
            main class="container narrow section" {
                div class="alert success" role="status" {
                    h1 { "Listing submitted!" }
                    p { "Your property has been submitted for review." }
                }
                p {
                    a class="btn" href="/" { "Back to Home" }
                    @if viewer.session.is_some() {
                        " "
                        a class="btn primary" href="/dashboard" { "Go to Dashboard" }
                    }
                }
            }
        },
    )
}
