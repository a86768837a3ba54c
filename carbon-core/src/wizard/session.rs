//! Async session around a [`Wizard`].
//!
//! The session serializes every operation through one lock and runs the
//! synthetic "3D model" delay on a background task, so callers stay
//! responsive while a generation is pending. A reset during the delay aborts
//! the task and bumps the wizard's epoch, so no late result can land.

use std::sync::Arc;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use super::controller::{TreePhotoUpload, Wizard, WizardError};
use super::image_host::ImageHost;
use super::snapshot::WizardSnapshot;
use crate::PhotoFile;
use crate::estimation::EstimationGenerator;

/// How long a simulated model generation takes.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(3000);

/// Runtime settings for a [`GenerationSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub processing_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }
}

struct Inner<H: ImageHost> {
    wizard: Wizard<H>,
    rng: StdRng,
}

/// Shared, lock-protected wizard plus the generation driver.
pub struct GenerationSession<H: ImageHost + 'static> {
    inner: Arc<Mutex<Inner<H>>>,
    generator: Arc<EstimationGenerator>,
    config: SessionConfig,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<H: ImageHost + 'static> GenerationSession<H> {
    /// Creates a session with an entropy-seeded random source.
    pub fn new(
        host: H,
        config: SessionConfig,
    ) -> Self {
        Self::with_rng(host, config, StdRng::from_entropy())
    }

    /// Creates a session that draws estimates from `rng`.
    pub fn with_rng(
        host: H,
        config: SessionConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                wizard: Wizard::new(host),
                rng,
            })),
            generator: Arc::new(EstimationGenerator::default()),
            config,
            pending: Mutex::new(None),
        }
    }

    pub async fn advance(&self) -> bool {
        self.inner.lock().await.wizard.advance()
    }

    pub async fn retreat(&self) -> bool {
        self.inner.lock().await.wizard.retreat()
    }

    /// Resets the wizard and cancels any pending generation, so a later
    /// `wait_for_generation` returns at once.
    pub async fn reset(&self) {
        let mut guard = self.inner.lock().await;
        guard.wizard.reset();
        if let Some(handle) = self.pending.lock().await.take() {
            handle.abort();
            debug!("Pending generation task aborted");
        }
    }

    pub async fn submit_reference_photo(
        &self,
        file: &PhotoFile,
    ) -> Result<(), WizardError> {
        self.inner.lock().await.wizard.submit_reference_photo(file)
    }

    pub async fn submit_tree_photos(
        &self,
        files: &[PhotoFile],
    ) -> TreePhotoUpload {
        self.inner.lock().await.wizard.submit_tree_photos(files)
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        self.inner.lock().await.wizard.snapshot()
    }

    /// Runs `f` against the wizard while holding the lock.
    pub async fn inspect<T>(
        &self,
        f: impl FnOnce(&Wizard<H>) -> T,
    ) -> T {
        f(&self.inner.lock().await.wizard)
    }

    /// Starts a generation in the background.
    ///
    /// Returns `false` without spawning anything when the wizard refuses to
    /// start (no photos, already pending, or already created).
    pub async fn begin_generation(&self) -> bool {
        // Held until the handle is stored, so a concurrent reset cannot
        // slip between starting the generation and recording its task.
        let mut guard = self.inner.lock().await;
        let Some(ticket) = guard.wizard.begin_generation() else {
            return false;
        };

        let inner = Arc::clone(&self.inner);
        let generator = Arc::clone(&self.generator);
        let delay = self.config.processing_delay;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut guard = inner.lock().await;
            let Inner { wizard, rng } = &mut *guard;
            match generator.generate(rng) {
                Ok(estimate) => {
                    wizard.complete_generation(ticket, estimate);
                }
                Err(error) => {
                    error!(%error, "Estimate generation failed");
                    wizard.abandon_generation(ticket);
                }
            }
        });

        debug!(delay_ms = delay.as_millis() as u64, "Generation task spawned");
        *self.pending.lock().await = Some(handle);
        drop(guard);
        true
    }

    /// Waits for the most recently started generation task to finish.
    pub async fn wait_for_generation(&self) {
        let handle = self.pending.lock().await.take();
        if let Some(handle) = handle {
            if let Err(error) = handle.await {
                error!(%error, "Generation task did not finish");
            }
        }
    }
}
