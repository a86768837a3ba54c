use std::fmt;

/// Opaque reference to an image held by an [`crate::wizard::ImageHost`].
///
/// Handles are neither `Clone` nor `Copy`: releasing one consumes it, so
/// each handle can be given back to its host at most once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ImageHandle(u64);

impl ImageHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "image#{}", self.0)
    }
}

/// A file the user selected, before it is accepted by the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoFile {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn byte_size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Returns `true` if the MIME type is in the `image/` family.
    pub fn is_image(&self) -> bool {
        self.mime_type
            .to_ascii_lowercase()
            .starts_with("image/")
    }
}

/// A tree photo accepted by the wizard.
///
/// Owned exclusively by the wizard, which releases `handle` on reset or drop.
#[derive(Debug, PartialEq, Eq)]
pub struct PhotoRecord {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
    pub handle: ImageHandle,
}
