//! Domain records: flat documents owned by the hosted store, held in
//! memory only transiently for rendering and API responses.

pub mod lead;
pub mod mask;
pub mod photo;
pub mod settings;
pub mod stats;

pub use lead::{Lead, NewLead};
pub use photo::Photo;
pub use settings::{SettingsPatch, SiteSettings};
pub use stats::AdminStats;
