pub mod atlas;
pub mod facts;
pub mod mentor;
pub mod newspaper;
pub mod timeline;
pub mod types;

pub use atlas::{historical_photos, location_trivia, vintage_map, TRIVIA_FALLBACK};
pub use facts::extract_facts;
pub use mentor::{mentor_reply, NO_CREDENTIAL_REPLY, REQUEST_FAILED_REPLY};
pub use newspaper::{daily_edition, DEFAULT_FRONT_PAGE_IMAGE};
pub use timeline::{simulate, TIME_BANDS};
pub use types::{AlternateHistory, NewspaperEdition, TimelineStep};
