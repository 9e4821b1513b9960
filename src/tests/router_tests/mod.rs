mod auth_tests;
mod browse_tests;
mod listing_tests;
mod verification_tests;
