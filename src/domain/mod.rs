pub mod catalog;
pub mod contact;
pub mod filter;
pub mod listing;
pub mod map;
pub mod query;
pub mod submission;
pub mod upload;
pub mod verification;

pub use catalog::Catalog;
pub use filter::SearchResults;
