// src/domain/submission.rs

use crate::domain::upload::Attachment;
use crate::errors::ServerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rents are stored as SQLite integers.
pub const MAX_RENT_KES: u64 = i64::MAX as u64;

/// The three pages of the "list your property" form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Basics,
    Details,
    Verification,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::Basics,
        WizardStep::Details,
        WizardStep::Verification,
    ];

    pub fn number(self) -> u8 {
        match self {
            WizardStep::Basics => 1,
            WizardStep::Details => 2,
            WizardStep::Verification => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Basics => "The Basics",
            WizardStep::Details => "The Details",
            WizardStep::Verification => "Verification",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::Basics => Some(WizardStep::Details),
            WizardStep::Details => Some(WizardStep::Verification),
            WizardStep::Verification => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Basics => None,
            WizardStep::Details => Some(WizardStep::Basics),
            WizardStep::Verification => Some(WizardStep::Details),
        }
    }
}

/// Property types a landlord can pick when listing. Wider than the browse
/// categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Apartment,
    Bedsitter,
    Bungalow,
    Maisonette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaterSource {
    CityCouncil,
    Borehole,
    Rationed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Electricity {
    Tokens,
    Postpaid,
}

/// (form value, label) pairs for the select boxes.
pub const LISTING_TYPES: [(ListingType, &str, &str); 4] = [
    (ListingType::Apartment, "apartment", "Apartment"),
    (ListingType::Bedsitter, "bedsitter", "Bedsitter"),
    (ListingType::Bungalow, "bungalow", "Bungalow"),
    (ListingType::Maisonette, "maisonette", "Maisonette"),
];

pub const WATER_SOURCES: [(WaterSource, &str, &str); 3] = [
    (WaterSource::CityCouncil, "city-council", "City Council"),
    (WaterSource::Borehole, "borehole", "Borehole"),
    (WaterSource::Rationed, "rationed", "Rationed"),
];

pub const ELECTRICITY: [(Electricity, &str, &str); 2] = [
    (Electricity::Tokens, "tokens", "Tokens (Prepaid)"),
    (Electricity::Postpaid, "postpaid", "Postpaid"),
];

fn lookup<T: Copy>(table: &[(T, &str, &str)], value: &str, what: &str) -> Result<T, String> {
    table
        .iter()
        .find(|(_, v, _)| *v == value)
        .map(|(t, _, _)| *t)
        .ok_or_else(|| format!("unknown {what}: {value}"))
}

fn value_of<T: Copy + PartialEq>(table: &[(T, &'static str, &'static str)], item: T) -> &'static str {
    table
        .iter()
        .find(|(t, _, _)| *t == item)
        .map(|(_, v, _)| *v)
        .unwrap_or_default()
}

impl ListingType {
    pub fn as_str(self) -> &'static str {
        value_of(&LISTING_TYPES, self)
    }
}

impl WaterSource {
    pub fn as_str(self) -> &'static str {
        value_of(&WATER_SOURCES, self)
    }
}

impl Electricity {
    pub fn as_str(self) -> &'static str {
        value_of(&ELECTRICITY, self)
    }
}

/// A listing being filled in. Persisted between requests as JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingDraft {
    pub step: WizardStep,

    // The Basics
    pub title: String,
    pub listing_type: Option<ListingType>,
    pub rent: String,
    pub location: String,

    // The Details
    pub water: Option<WaterSource>,
    pub electricity: Option<Electricity>,
    pub parking: bool,
    pub pets_allowed: bool,

    // Verification
    pub phone: String,
    // Filled from listing_attachments on load, never stored in the JSON.
    #[serde(skip)]
    pub photos: Vec<Attachment>,
    #[serde(skip)]
    pub utility_bill: Option<Attachment>,
}

/// A complete draft, ready to be stored for review.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSubmission {
    pub title: String,
    pub listing_type: ListingType,
    pub rent_kes: u64,
    pub location: String,
    pub water: WaterSource,
    pub electricity: Electricity,
    pub parking: bool,
    pub pets_allowed: bool,
    pub phone: String,
}

impl ListingDraft {
    /// Whole shillings, no larger than the store can hold.
    pub fn rent_kes(&self) -> Option<u64> {
        self.rent
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|rent| *rent <= MAX_RENT_KES)
    }

    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Basics => {
                !self.title.trim().is_empty()
                    && self.listing_type.is_some()
                    && self.rent_kes().is_some()
                    && !self.location.trim().is_empty()
            }
            WizardStep::Details => self.water.is_some() && self.electricity.is_some(),
            WizardStep::Verification => !self.phone.trim().is_empty(),
        }
    }

    /// Copies the fields that belong to `step` from a posted form. Checkboxes
    /// are unchecked when absent.
    pub fn apply_form(
        &mut self,
        step: WizardStep,
        form: &HashMap<String, String>,
    ) -> Result<(), String> {
        let text = |key: &str| form.get(key).map(|v| v.trim().to_string()).unwrap_or_default();
        let choice = |key: &str| form.get(key).map(String::as_str).filter(|v| !v.is_empty());

        match step {
            WizardStep::Basics => {
                self.title = text("title");
                self.listing_type = choice("type")
                    .map(|v| lookup(&LISTING_TYPES, v, "property type"))
                    .transpose()?;
                self.rent = text("rent");
                self.location = text("location");
            }
            WizardStep::Details => {
                self.water = choice("water")
                    .map(|v| lookup(&WATER_SOURCES, v, "water source"))
                    .transpose()?;
                self.electricity = choice("electricity")
                    .map(|v| lookup(&ELECTRICITY, v, "electricity option"))
                    .transpose()?;
                self.parking = form.contains_key("parking");
                self.pets_allowed = form.contains_key("pets_allowed");
            }
            WizardStep::Verification => {
                self.phone = text("phone");
            }
        }
        Ok(())
    }

    /// Moves forward one step if the current one is complete.
    pub fn advance(&mut self) -> Result<(), ServerError> {
        if !self.is_step_valid(self.step) {
            return Err(ServerError::BadRequest(format!(
                "please complete \"{}\" first",
                self.step.title()
            )));
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(())
    }

    pub fn go_back(&mut self) {
        if let Some(prev) = self.step.previous() {
            self.step = prev;
        }
    }

    pub fn finalize(&self) -> Result<ListingSubmission, ServerError> {
        if let Some(step) = WizardStep::ALL.into_iter().find(|s| !self.is_step_valid(*s)) {
            return Err(ServerError::BadRequest(format!(
                "please complete \"{}\" first",
                step.title()
            )));
        }

        // Validity above guarantees these are present.
        match (self.listing_type, self.rent_kes(), self.water, self.electricity) {
            (Some(listing_type), Some(rent_kes), Some(water), Some(electricity)) => {
                Ok(ListingSubmission {
                    title: self.title.trim().to_string(),
                    listing_type,
                    rent_kes,
                    location: self.location.trim().to_string(),
                    water,
                    electricity,
                    parking: self.parking,
                    pets_allowed: self.pets_allowed,
                    phone: self.phone.trim().to_string(),
                })
            }
            _ => Err(ServerError::InternalError),
        }
    }
}
