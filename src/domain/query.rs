// src/domain/query.rs

use crate::domain::listing::PropertyCategory;
use std::collections::HashMap;
use std::str::FromStr;

/// Sentinel meaning "do not filter by location".
pub const ALL_LOCATIONS: &str = "All Locations";

/// Areas offered by the location picker.
pub const LOCATIONS: [&str; 10] = [
    "Westlands",
    "Karen",
    "Kilimani",
    "Kileleshwa",
    "Lavington",
    "South B",
    "South C",
    "Roysambu",
    "Kasarani",
    "Embakasi",
];

/// Sentinel meaning "any property type".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationFilter {
    #[default]
    All,
    Area(String),
}

impl LocationFilter {
    pub fn as_str(&self) -> &str {
        match self {
            LocationFilter::All => ALL_LOCATIONS,
            LocationFilter::Area(area) => area,
        }
    }
}

impl FromStr for LocationFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_LOCATIONS {
            return Ok(LocationFilter::All);
        }
        LOCATIONS
            .iter()
            .find(|area| **area == s)
            .map(|area| LocationFilter::Area(area.to_string()))
            .ok_or_else(|| format!("unknown location: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PropertyCategory),
}

impl CategoryFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Coarse rent ranges. Each covers `[min, max)`; `All` and `Luxury` are open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceBucket {
    #[default]
    All,
    Budget,
    Mid,
    High,
    Luxury,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 5] = [
        PriceBucket::All,
        PriceBucket::Budget,
        PriceBucket::Mid,
        PriceBucket::High,
        PriceBucket::Luxury,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PriceBucket::All => "all",
            PriceBucket::Budget => "budget",
            PriceBucket::Mid => "mid",
            PriceBucket::High => "high",
            PriceBucket::Luxury => "luxury",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceBucket::All => "Any Price",
            PriceBucket::Budget => "Under 15K",
            PriceBucket::Mid => "15K - 50K",
            PriceBucket::High => "50K - 100K",
            PriceBucket::Luxury => "100K+",
        }
    }

    /// Inclusive lower bound and exclusive upper bound (`None` = unbounded).
    pub fn range(self) -> (u64, Option<u64>) {
        match self {
            PriceBucket::All => (0, None),
            PriceBucket::Budget => (0, Some(15_000)),
            PriceBucket::Mid => (15_000, Some(50_000)),
            PriceBucket::High => (50_000, Some(100_000)),
            PriceBucket::Luxury => (100_000, None),
        }
    }

    pub fn contains(self, price: u64) -> bool {
        let (min, max) = self.range();
        price >= min && max.map_or(true, |max| price < max)
    }
}

impl FromStr for PriceBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceBucket::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| format!("unknown price range: {s}"))
    }
}

/// The browsing filters for one request. Built fresh from the query string
/// every time, so results are always recomputed from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub term: String,
    pub location: LocationFilter,
    pub category: CategoryFilter,
    pub price: PriceBucket,
}

impl QueryState {
    /// Reads `q`, `location`, `type` and `price`. Missing or empty values keep
    /// their defaults; values outside the fixed enumerations are rejected.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, String> {
        fn parse<T: FromStr<Err = String> + Default>(
            params: &HashMap<String, String>,
            key: &str,
        ) -> Result<T, String> {
            match params.get(key).map(String::as_str) {
                None | Some("") => Ok(T::default()),
                Some(raw) => raw.parse(),
            }
        }

        Ok(QueryState {
            term: params.get("q").cloned().unwrap_or_default(),
            location: parse(params, "location")?,
            category: parse(params, "type")?,
            price: parse(params, "price")?,
        })
    }

    /// Encodes the non-default filters back into a query string.
    pub fn to_query_string(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        if !self.term.is_empty() {
            ser.append_pair("q", &self.term);
        }
        if self.location != LocationFilter::All {
            ser.append_pair("location", self.location.as_str());
        }
        if self.category != CategoryFilter::All {
            ser.append_pair("type", self.category.as_str());
        }
        if self.price != PriceBucket::All {
            ser.append_pair("price", self.price.as_str());
        }
        ser.finish()
    }
}
