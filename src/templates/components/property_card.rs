use crate::domain::contact::{tel_href, whatsapp_href};
use crate::domain::listing::{count_label, ListingRecord};
use maud::{html, Markup};

const SHOWN_AMENITIES: usize = 3;

pub fn property_card(record: &ListingRecord) -> Markup {
    let hidden = record.amenities.len().saturating_sub(SHOWN_AMENITIES);

    html! {
        article class="property-card" data-listing-id=(record.id) {
            div class="media" {
                img src=(record.image_url) alt=(record.title) loading="lazy";
                div class="badges" {
                    @if record.featured {
                        span class="badge featured" { "Featured" }
                    }
                    span class="badge" { (record.category.label()) }
                }
                p class="price" {
                    (record.price_label())
                    span { "/" (record.price_period.suffix()) }
                }
            }
            div class="body" {
                h3 { (record.title) }
                p class="location" { (record.location) }
                div class="facts" {
                    span { (count_label(record.bedrooms, "Bed")) }
                    span { (count_label(record.bathrooms, "Bath")) }
                    span { (record.size_sqm) " m²" }
                }
                div class="amenities" {
                    @for amenity in record.amenities.iter().take(SHOWN_AMENITIES) {
                        span class="badge" { (amenity) }
                    }
                    @if hidden > 0 {
                        span class="badge" { "+" (hidden) " more" }
                    }
                }
                div class="contact" {
                    p {
                        strong { (record.contact.name) }
                        br;
                        small { (record.contact.role_label()) }
                    }
                    div class="buttons" {
                        a class="btn" href=(tel_href(&record.contact.phone)) { "Call" }
                        a
                            class="btn whatsapp"
                            href=(whatsapp_href(&record.contact.phone, &record.title))
                            target="_blank"
                            rel="noopener"
                        { "WhatsApp" }
                    }
                }
            }
        }
    }
}
