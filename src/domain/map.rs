// src/domain/map.rs

use crate::domain::contact;
use crate::domain::listing::ListingRecord;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

/// Fallback when a location matches no known area.
pub const NAIROBI_CENTER: (f64, f64) = (-1.2864, 36.8172);

/// Total width of the jitter box, in degrees, on each axis.
pub const JITTER_DEGREES: f64 = 0.01;

/// Approximate centre of each area, checked in order by substring.
const AREA_COORDS: [(&str, (f64, f64)); 10] = [
    ("Westlands", (-1.2673, 36.8111)),
    ("Karen", (-1.3188, 36.7098)),
    ("Kilimani", (-1.2905, 36.7864)),
    ("Kileleshwa", (-1.2781, 36.7789)),
    ("Lavington", (-1.2747, 36.7678)),
    ("South B", (-1.3106, 36.8350)),
    ("South C", (-1.3183, 36.8250)),
    ("Roysambu", (-1.2178, 36.8878)),
    ("Kasarani", (-1.2213, 36.9008)),
    ("Embakasi", (-1.3197, 36.9018)),
];

/// What the map script needs to draw one marker and its popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub title: String,
    pub location: String,
    pub price: String,
    pub period: &'static str,
    pub image_url: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size_sqm: u32,
    pub contact_name: String,
    pub tel_href: String,
    pub mailto_href: String,
}

/// Places listing markers. Jitter keeps markers in the same area from
/// stacking and is derived from `seed` and the listing id, so a listing
/// always lands on the same spot.
#[derive(Debug, Clone, Copy)]
pub struct MarkerPlacer {
    seed: u64,
}

impl MarkerPlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn coordinates(&self, record: &ListingRecord) -> (f64, f64) {
        let Some((lat, lng)) = area_coordinates(&record.location) else {
            return NAIROBI_CENTER;
        };

        let mut rng = StdRng::seed_from_u64(self.seed ^ fnv1a(record.id.as_bytes()));
        let dlat = (rng.gen::<f64>() - 0.5) * JITTER_DEGREES;
        let dlng = (rng.gen::<f64>() - 0.5) * JITTER_DEGREES;
        (lat + dlat, lng + dlng)
    }

    pub fn markers(&self, records: &[&ListingRecord]) -> Vec<MapMarker> {
        records
            .iter()
            .map(|record| {
                let (lat, lng) = self.coordinates(record);
                MapMarker {
                    id: record.id.clone(),
                    lat,
                    lng,
                    title: record.title.clone(),
                    location: record.location.clone(),
                    price: record.price_label(),
                    period: record.price_period.suffix(),
                    image_url: record.image_url.clone(),
                    bedrooms: record.bedrooms,
                    bathrooms: record.bathrooms,
                    size_sqm: record.size_sqm,
                    contact_name: record.contact.name.clone(),
                    tel_href: contact::tel_href(&record.contact.phone),
                    mailto_href: contact::mailto_href(&record.contact.email),
                }
            })
            .collect()
    }
}

/// First known area contained in `location`.
pub fn area_coordinates(location: &str) -> Option<(f64, f64)> {
    AREA_COORDS
        .iter()
        .find(|(area, _)| location.contains(area))
        .map(|(_, coords)| *coords)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
