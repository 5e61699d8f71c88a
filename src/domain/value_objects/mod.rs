mod bed;
mod home_id;
mod photo_key;

pub use bed::Bed;
pub use home_id::HomeId;
pub use photo_key::{PhotoKey, KEY_SEPARATOR};
