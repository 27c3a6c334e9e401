pub mod annotation;
pub mod error;
pub mod extract;
pub mod input;
pub mod logging;

pub use annotation::{write_set_output, SetOutput, DRAFT_URL_OUTPUT_NAME};
pub use error::ExtractError;
pub use extract::{extract_draft_url, DraftUrl, DRAFT_URL_PATTERN};
pub use input::read_log_text;
