use std::collections::HashMap;

use tracing::{trace, warn};

use crate::{ImageHandle, PhotoFile};

/// Turns uploaded files into displayable handles and takes them back.
///
/// The wizard calls [`ImageHost::acquire`] once per accepted photo and
/// [`ImageHost::release`] once per handle, on reset or when it is dropped.
pub trait ImageHost: Send {
    fn acquire(
        &mut self,
        file: &PhotoFile,
    ) -> ImageHandle;

    fn release(
        &mut self,
        handle: ImageHandle,
    );
}

/// Keeps image bytes in memory, keyed by handle id.
#[derive(Debug, Default)]
pub struct MemoryImageHost {
    images: HashMap<u64, Vec<u8>>,
    next_id: u64,
    acquired: usize,
    released: usize,
}

impl MemoryImageHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles acquired and not yet released.
    pub fn live_handles(&self) -> usize {
        self.images.len()
    }

    pub fn total_acquired(&self) -> usize {
        self.acquired
    }

    pub fn total_released(&self) -> usize {
        self.released
    }

    pub fn image(
        &self,
        handle: &ImageHandle,
    ) -> Option<&[u8]> {
        self.images.get(&handle.id()).map(Vec::as_slice)
    }
}

impl ImageHost for MemoryImageHost {
    fn acquire(
        &mut self,
        file: &PhotoFile,
    ) -> ImageHandle {
        self.next_id += 1;
        self.acquired += 1;
        self.images.insert(self.next_id, file.bytes.clone());
        trace!(id = self.next_id, name = %file.name, "Acquired image handle");
        ImageHandle::new(self.next_id)
    }

    fn release(
        &mut self,
        handle: ImageHandle,
    ) {
        if self.images.remove(&handle.id()).is_some() {
            self.released += 1;
            trace!(%handle, "Released image handle");
        } else {
            warn!(%handle, "Release of unknown image handle");
        }
    }
}
