// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of rentable unit a listing describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyCategory {
    Apartment,
    House,
    Studio,
    Bedsitter,
}

impl PropertyCategory {
    pub const ALL: [PropertyCategory; 4] = [
        PropertyCategory::Apartment,
        PropertyCategory::House,
        PropertyCategory::Studio,
        PropertyCategory::Bedsitter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyCategory::Apartment => "apartment",
            PropertyCategory::House => "house",
            PropertyCategory::Studio => "studio",
            PropertyCategory::Bedsitter => "bedsitter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyCategory::Apartment => "Apartment",
            PropertyCategory::House => "House",
            PropertyCategory::Studio => "Studio",
            PropertyCategory::Bedsitter => "Bedsitter",
        }
    }
}

impl FromStr for PropertyCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown property type: {s}"))
    }
}

impl fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricePeriod {
    #[serde(rename = "month")]
    Monthly,
    #[serde(rename = "year")]
    Yearly,
}

impl PricePeriod {
    /// Unit shown after the amount, e.g. "month".
    pub fn suffix(self) -> &'static str {
        match self {
            PricePeriod::Monthly => "month",
            PricePeriod::Yearly => "year",
        }
    }
}

/// Who to call about a listing. Not used for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub is_caretaker: bool,
}

impl Contact {
    pub fn role_label(&self) -> &'static str {
        if self.is_caretaker {
            "Caretaker"
        } else {
            "Landlord"
        }
    }
}

/// One rentable property. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: u64,
    pub price_period: PricePeriod,
    pub category: PropertyCategory,
    #[serde(default)]
    pub featured: bool,
    pub contact: Contact,

    // Display-only details
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default)]
    pub size_sqm: u32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl ListingRecord {
    /// "KES 45,000"
    pub fn price_label(&self) -> String {
        format!("KES {}", group_thousands(self.price))
    }

    /// "KES 45,000/month"
    pub fn price_with_period(&self) -> String {
        format!("{}/{}", self.price_label(), self.price_period.suffix())
    }
}

/// Formats an amount with comma thousands separators.
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Singular/plural label, e.g. "1 Bed" / "3 Beds".
pub fn count_label(n: u32, unit: &str) -> String {
    if n > 1 {
        format!("{n} {unit}s")
    } else {
        format!("{n} {unit}")
    }
}
