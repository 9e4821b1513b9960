pub mod error;
pub mod file_upload;
pub mod footer;
pub mod how_it_works;
pub mod id_upload;
pub mod navbar;
pub mod property_card;
pub mod property_map;
pub mod search;

pub use file_upload::file_upload_field;
pub use footer::footer;
pub use how_it_works::how_it_works;
pub use id_upload::id_upload_card;
pub use navbar::navbar;
pub use property_card::property_card;
pub use property_map::property_map;
pub use search::{hero_section, view_mode_field};
