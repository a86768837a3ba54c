mod photo_file;

pub use photo_file::{PhotoLoadError, load_photo, load_photos, mime_type_for};
