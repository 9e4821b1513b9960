pub mod add_listing;
pub mod dashboard;
pub mod home;
pub mod login;

pub use add_listing::{submitted_page, wizard_page};
pub use dashboard::{dashboard_page, DashboardVm};
pub use home::{home_page, results_partial, BrowseVm, ViewMode};
pub use login::login_page;
