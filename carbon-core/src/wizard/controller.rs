//! Wizard controller.
//!
//! [`Wizard`] owns the current step and everything the user has supplied or
//! generated, and enforces the order of the five steps:
//!
//! | From            | `advance` requires      |
//! |-----------------|-------------------------|
//! | Welcome         | nothing                 |
//! | Reference Photo | a reference photo       |
//! | Tree Photos     | a generated model       |
//! | Tree Analysis   | nothing                 |
//! | Carbon Credits  | never advances          |
//!
//! `retreat` is always allowed above Welcome. Carbon Credits is left only
//! through [`Wizard::reset`].
//!
//! Generation is split into [`Wizard::begin_generation`], which hands out a
//! [`GenerationTicket`], and [`Wizard::complete_generation`], which applies a
//! result only if the ticket still belongs to the current epoch. Every reset
//! starts a new epoch, so a generation that finishes after a reset is
//! discarded.

use thiserror::Error;
use tracing::{debug, info, warn};

use super::image_host::ImageHost;
use super::snapshot::{PhotoSummary, WizardSnapshot};
use super::step::WizardStep;
use crate::{PhotoFile, PhotoRecord, TreeEstimate};

/// Errors for input the wizard refuses.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    /// The selected file is not an image.
    #[error("'{name}' is not an image (type '{mime_type}')")]
    NotAnImage { name: String, mime_type: String },
}

/// Outcome of adding a batch of tree photos.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TreePhotoUpload {
    /// Number of photos appended.
    pub accepted: usize,
    /// Files that were skipped, in input order.
    pub rejected: Vec<WizardError>,
}

/// Proof that a generation was started in a given epoch.
#[derive(Debug, PartialEq, Eq)]
pub struct GenerationTicket {
    epoch: u64,
}

impl GenerationTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Data the user has supplied or generated in the current epoch.
#[derive(Debug, Default)]
struct WizardState {
    current_step: WizardStep,
    reference_uploaded: bool,
    reference_photo: Option<PhotoRecord>,
    tree_photos: Vec<PhotoRecord>,
    is_processing: bool,
    model_created: bool,
    estimate: Option<TreeEstimate>,
}

/// The step wizard state machine.
#[derive(Debug)]
pub struct Wizard<H: ImageHost> {
    host: H,
    state: WizardState,
    epoch: u64,
}

impl<H: ImageHost> Wizard<H> {
    /// Creates a wizard at the Welcome step that displays images via `host`.
    pub fn new(host: H) -> Self {
        Self {
            host,
            state: WizardState::default(),
            epoch: 0,
        }
    }

    // ─── accessors ───────────────────────────────────────────────────────

    pub fn current_step(&self) -> WizardStep {
        self.state.current_step
    }

    pub fn reference_uploaded(&self) -> bool {
        self.state.reference_uploaded
    }

    pub fn reference_photo(&self) -> Option<&PhotoRecord> {
        self.state.reference_photo.as_ref()
    }

    pub fn tree_photos(&self) -> &[PhotoRecord] {
        &self.state.tree_photos
    }

    pub fn is_processing(&self) -> bool {
        self.state.is_processing
    }

    pub fn model_created(&self) -> bool {
        self.state.model_created
    }

    pub fn estimate(&self) -> Option<&TreeEstimate> {
        self.state.estimate.as_ref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn image_host(&self) -> &H {
        &self.host
    }

    /// Returns `true` if `advance` would move off the current step.
    pub fn can_advance(&self) -> bool {
        self.state.current_step.next().is_some() && self.step_complete(self.state.current_step)
    }

    /// Returns `true` if `begin_generation` would start a generation.
    pub fn can_generate(&self) -> bool {
        !self.state.tree_photos.is_empty() && !self.state.is_processing && !self.state.model_created
    }

    /// Copies out everything a view needs to render the current step.
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            current_step: self.state.current_step,
            reference_uploaded: self.state.reference_uploaded,
            reference_photo: self.state.reference_photo.as_ref().map(PhotoSummary::from),
            tree_photos: self.state.tree_photos.iter().map(PhotoSummary::from).collect(),
            is_processing: self.state.is_processing,
            model_created: self.state.model_created,
            estimate: self.state.estimate.clone(),
            can_advance: self.can_advance(),
            can_generate: self.can_generate(),
        }
    }

    // ─── transitions ─────────────────────────────────────────────────────

    /// Moves to the next step if the current step is complete.
    ///
    /// A no-op at Carbon Credits or when the current step's guard fails.
    /// Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        let from = self.state.current_step;
        let Some(to) = from.next() else {
            debug!(step = %from, "Advance ignored at final step");
            return false;
        };
        if !self.step_complete(from) {
            debug!(step = %from, "Advance blocked; step incomplete");
            return false;
        }

        self.state.current_step = to;
        debug!(%from, %to, "Advanced");
        true
    }

    /// Moves to the previous step. A no-op at Welcome.
    ///
    /// Allowed while a generation is pending. Returns whether the step
    /// changed.
    pub fn retreat(&mut self) -> bool {
        let from = self.state.current_step;
        let Some(to) = from.previous() else {
            debug!("Retreat ignored at first step");
            return false;
        };

        self.state.current_step = to;
        debug!(%from, %to, "Retreated");
        true
    }

    /// Returns every field to its initial value and releases all images.
    ///
    /// Starts a new epoch, so any generation still pending is discarded
    /// when it completes.
    pub fn reset(&mut self) {
        let released = self.release_images();
        self.state = WizardState::default();
        self.epoch += 1;
        info!(epoch = self.epoch, released, "Wizard reset");
    }

    // ─── uploads ─────────────────────────────────────────────────────────

    /// Stores the reference photo and marks the reference step complete.
    ///
    /// Replacing an earlier reference photo releases its handle.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotAnImage`] for non-image files; state is
    /// left unchanged.
    pub fn submit_reference_photo(
        &mut self,
        file: &PhotoFile,
    ) -> Result<(), WizardError> {
        check_image(file)?;

        let record = self.accept(file);
        if let Some(previous) = self.state.reference_photo.replace(record) {
            debug!(name = %previous.name, "Replacing reference photo");
            self.host.release(previous.handle);
        }
        self.state.reference_uploaded = true;

        info!(name = %file.name, bytes = file.byte_size(), "Reference photo uploaded");
        Ok(())
    }

    /// Appends one record per image file, preserving input order.
    ///
    /// Re-selecting a file adds another entry. Non-image files are skipped
    /// and reported in [`TreePhotoUpload::rejected`].
    pub fn submit_tree_photos(
        &mut self,
        files: &[PhotoFile],
    ) -> TreePhotoUpload {
        let mut upload = TreePhotoUpload::default();

        for file in files {
            if let Err(error) = check_image(file) {
                warn!(%error, "Skipping tree photo");
                upload.rejected.push(error);
                continue;
            }
            let record = self.accept(file);
            self.state.tree_photos.push(record);
            upload.accepted += 1;
        }

        info!(
            accepted = upload.accepted,
            rejected = upload.rejected.len(),
            total = self.state.tree_photos.len(),
            "Tree photos uploaded"
        );
        upload
    }

    // ─── generation ──────────────────────────────────────────────────────

    /// Marks a generation as pending and returns its ticket.
    ///
    /// Returns `None` without changing state when there are no tree
    /// photos, a generation is already pending, or a model already exists.
    pub fn begin_generation(&mut self) -> Option<GenerationTicket> {
        if self.state.tree_photos.is_empty() {
            warn!("Cannot generate a model without tree photos");
            return None;
        }
        if self.state.is_processing || self.state.model_created {
            debug!(
                is_processing = self.state.is_processing,
                model_created = self.state.model_created,
                "Generation already started"
            );
            return None;
        }

        self.state.is_processing = true;
        info!(epoch = self.epoch, photos = self.state.tree_photos.len(), "Generation started");
        Some(GenerationTicket { epoch: self.epoch })
    }

    /// Stores a generated estimate and marks the model as created.
    ///
    /// Discards the estimate and returns `false` if the ticket is from an
    /// earlier epoch or no generation is pending.
    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        estimate: TreeEstimate,
    ) -> bool {
        if !self.ticket_is_current(&ticket) {
            return false;
        }

        self.state.is_processing = false;
        self.state.model_created = true;
        info!(
            species = %estimate.metrics.species,
            credits = %estimate.carbon.credits,
            "Model created"
        );
        self.state.estimate = Some(estimate);
        true
    }

    /// Clears a pending generation that could not produce an estimate.
    ///
    /// The model stays uncreated, so `begin_generation` may be retried.
    pub fn abandon_generation(
        &mut self,
        ticket: GenerationTicket,
    ) -> bool {
        if !self.ticket_is_current(&ticket) {
            return false;
        }

        self.state.is_processing = false;
        warn!(epoch = ticket.epoch, "Generation abandoned");
        true
    }

    // ─── internals ───────────────────────────────────────────────────────

    fn step_complete(
        &self,
        step: WizardStep,
    ) -> bool {
        match step {
            WizardStep::ReferencePhoto => self.state.reference_uploaded,
            WizardStep::TreePhotos => self.state.model_created,
            WizardStep::Welcome | WizardStep::TreeAnalysis | WizardStep::CarbonCredits => true,
        }
    }

    fn ticket_is_current(
        &self,
        ticket: &GenerationTicket,
    ) -> bool {
        if ticket.epoch != self.epoch {
            warn!(
                ticket_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "Discarding stale generation result"
            );
            return false;
        }
        if !self.state.is_processing {
            warn!("Discarding generation result; none pending");
            return false;
        }
        true
    }

    fn accept(
        &mut self,
        file: &PhotoFile,
    ) -> PhotoRecord {
        PhotoRecord {
            name: file.name.clone(),
            byte_size: file.byte_size(),
            mime_type: file.mime_type.clone(),
            handle: self.host.acquire(file),
        }
    }

    /// Gives every held handle back to the host. Returns how many.
    fn release_images(&mut self) -> usize {
        let mut released = 0;
        if let Some(reference) = self.state.reference_photo.take() {
            self.host.release(reference.handle);
            released += 1;
        }
        for photo in self.state.tree_photos.drain(..) {
            self.host.release(photo.handle);
            released += 1;
        }
        released
    }
}

impl<H: ImageHost> Drop for Wizard<H> {
    fn drop(&mut self) {
        let released = self.release_images();
        debug!(released, "Wizard dropped");
    }
}

fn check_image(file: &PhotoFile) -> Result<(), WizardError> {
    if file.is_image() {
        Ok(())
    } else {
        Err(WizardError::NotAnImage {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::estimation::EstimationGenerator;
    use crate::wizard::MemoryImageHost;
    use crate::{CarbonResults, ImageHandle, TreeMetrics};

    fn jpeg(name: &str) -> PhotoFile {
        PhotoFile::new(name, "image/jpeg", vec![0xFF, 0xD8, 0xFF])
    }

    fn text(name: &str) -> PhotoFile {
        PhotoFile::new(name, "text/plain", b"not a tree".to_vec())
    }

    fn wizard() -> Wizard<MemoryImageHost> {
        Wizard::new(MemoryImageHost::new())
    }

    fn reference_estimate() -> TreeEstimate {
        TreeEstimate {
            metrics: TreeMetrics {
                species: "English Oak".to_string(),
                height_m: dec!(12.3),
                dbh_cm: dec!(38),
                volume_m3: dec!(1.25),
                age_years: 18,
            },
            carbon: CarbonResults {
                biomass_kg: dec!(875),
                carbon_kg: dec!(437.5),
                co2e_tonnes: dec!(1.605625),
                credits: dec!(1.605625),
            },
        }
    }

    /// A wizard on the Tree Photos step with one photo uploaded.
    fn wizard_at_tree_photos() -> Wizard<MemoryImageHost> {
        let mut wizard = wizard();
        wizard.advance();
        wizard.submit_reference_photo(&jpeg("ref.jpg")).unwrap();
        wizard.advance();
        wizard.submit_tree_photos(&[jpeg("tree.jpg")]);
        wizard
    }

    /// A wizard with a generated model, on the Tree Photos step.
    fn wizard_with_model() -> Wizard<MemoryImageHost> {
        let mut wizard = wizard_at_tree_photos();
        let ticket = wizard.begin_generation().unwrap();
        assert!(wizard.complete_generation(ticket, reference_estimate()));
        wizard
    }

    /// Image host that records every call, shared with the test.
    #[derive(Clone, Default)]
    struct RecordingHost {
        log: Arc<Mutex<Vec<String>>>,
        next_id: u64,
    }

    impl ImageHost for RecordingHost {
        fn acquire(
            &mut self,
            file: &PhotoFile,
        ) -> ImageHandle {
            self.next_id += 1;
            self.log
                .lock()
                .unwrap()
                .push(format!("acquire {} {}", self.next_id, file.name));
            ImageHandle::new(self.next_id)
        }

        fn release(
            &mut self,
            handle: ImageHandle,
        ) {
            self.log
                .lock()
                .unwrap()
                .push(format!("release {}", handle.id()));
        }
    }

    // =========================================================================
    // initial state tests
    // =========================================================================

    #[test]
    fn new_wizard_starts_at_welcome_with_nothing_uploaded() {
        let wizard = wizard();

        assert_eq!(wizard.current_step(), WizardStep::Welcome);
        assert!(!wizard.reference_uploaded());
        assert!(wizard.reference_photo().is_none());
        assert!(wizard.tree_photos().is_empty());
        assert!(!wizard.is_processing());
        assert!(!wizard.model_created());
        assert!(wizard.estimate().is_none());
        assert_eq!(wizard.epoch(), 0);
    }

    // =========================================================================
    // advance / retreat tests
    // =========================================================================

    #[test]
    fn advance_from_welcome_is_unguarded() {
        let mut wizard = wizard();

        assert!(wizard.advance());

        assert_eq!(wizard.current_step(), WizardStep::ReferencePhoto);
    }

    #[test]
    fn advance_from_reference_step_requires_reference_photo() {
        let mut wizard = wizard();
        wizard.advance();

        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::ReferencePhoto);

        wizard.submit_reference_photo(&jpeg("ref.jpg")).unwrap();

        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::TreePhotos);
    }

    #[test]
    fn advance_moves_exactly_one_step_per_call() {
        let mut wizard = wizard();
        wizard.advance();
        wizard.submit_reference_photo(&jpeg("ref.jpg")).unwrap();

        wizard.advance();

        assert_eq!(wizard.current_step(), WizardStep::TreePhotos);
    }

    #[test]
    fn advance_from_tree_photos_requires_model() {
        let mut wizard = wizard_at_tree_photos();

        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::TreePhotos);
    }

    #[test]
    fn advance_from_tree_photos_blocked_while_processing() {
        let mut wizard = wizard_at_tree_photos();
        let _ticket = wizard.begin_generation().unwrap();

        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::TreePhotos);
    }

    #[test]
    fn advance_from_tree_photos_succeeds_once_model_created() {
        let mut wizard = wizard_with_model();

        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::TreeAnalysis);
        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::CarbonCredits);
    }

    #[test]
    fn advance_is_a_no_op_at_carbon_credits() {
        let mut wizard = wizard_with_model();
        wizard.advance();
        wizard.advance();

        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), WizardStep::CarbonCredits);
        assert!(!wizard.can_advance());
    }

    #[test]
    fn retreat_is_a_no_op_at_welcome() {
        let mut wizard = wizard();

        assert!(!wizard.retreat());
        assert_eq!(wizard.current_step(), WizardStep::Welcome);
    }

    #[test]
    fn retreat_allowed_while_processing() {
        let mut wizard = wizard_at_tree_photos();
        let _ticket = wizard.begin_generation().unwrap();

        assert!(wizard.retreat());

        assert_eq!(wizard.current_step(), WizardStep::ReferencePhoto);
        assert!(wizard.is_processing());
    }

    #[test]
    fn step_stays_in_range_for_any_sequence() {
        let mut wizard = wizard_with_model();
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..1000 {
            if rand::Rng::gen_bool(&mut rng, 0.5) {
                wizard.advance();
            } else {
                wizard.retreat();
            }
            assert!(wizard.current_step().index() <= 4);
        }
    }

    #[test]
    fn can_advance_tracks_guards() {
        let mut wizard = wizard();
        assert!(wizard.can_advance());

        wizard.advance();
        assert!(!wizard.can_advance());

        wizard.submit_reference_photo(&jpeg("ref.jpg")).unwrap();
        assert!(wizard.can_advance());
    }

    // =========================================================================
    // upload tests
    // =========================================================================

    #[test]
    fn submit_reference_photo_records_file() {
        let mut wizard = wizard();

        wizard.submit_reference_photo(&jpeg("ref.jpg")).unwrap();

        let reference = wizard.reference_photo().unwrap();
        assert_eq!(reference.name, "ref.jpg");
        assert_eq!(reference.byte_size, 3);
        assert_eq!(reference.mime_type, "image/jpeg");
        assert!(wizard.reference_uploaded());
        assert_eq!(wizard.image_host().live_handles(), 1);
    }

    #[test]
    fn submit_reference_photo_rejects_non_image() {
        let mut wizard = wizard();
        wizard.advance();

        let result = wizard.submit_reference_photo(&text("notes.txt"));

        assert_eq!(
            result,
            Err(WizardError::NotAnImage {
                name: "notes.txt".to_string(),
                mime_type: "text/plain".to_string(),
            })
        );
        assert!(!wizard.reference_uploaded());
        assert!(wizard.reference_photo().is_none());
        assert_eq!(wizard.image_host().total_acquired(), 0);
        assert!(!wizard.advance());
    }

    #[test]
    fn replacing_reference_photo_releases_previous_handle() {
        let mut wizard = wizard();

        wizard.submit_reference_photo(&jpeg("first.jpg")).unwrap();
        wizard.submit_reference_photo(&jpeg("second.jpg")).unwrap();

        assert_eq!(wizard.reference_photo().unwrap().name, "second.jpg");
        assert_eq!(wizard.image_host().live_handles(), 1);
        assert_eq!(wizard.image_host().total_released(), 1);
    }

    #[test]
    fn submit_tree_photos_appends_in_order() {
        let mut wizard = wizard();

        wizard.submit_tree_photos(&[jpeg("a.jpg"), jpeg("b.jpg")]);
        wizard.submit_tree_photos(&[jpeg("c.jpg")]);

        let names: Vec<_> = wizard.tree_photos().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn submit_tree_photos_keeps_duplicates() {
        let mut wizard = wizard();

        wizard.submit_tree_photos(&[jpeg("a.jpg")]);
        wizard.submit_tree_photos(&[jpeg("a.jpg"), jpeg("a.jpg")]);

        assert_eq!(wizard.tree_photos().len(), 3);
        assert_eq!(wizard.image_host().live_handles(), 3);
    }

    #[test]
    fn submit_tree_photos_skips_non_images() {
        let mut wizard = wizard();

        let upload = wizard.submit_tree_photos(&[jpeg("a.jpg"), text("b.txt"), jpeg("c.jpg")]);

        assert_eq!(upload.accepted, 2);
        assert_eq!(
            upload.rejected,
            vec![WizardError::NotAnImage {
                name: "b.txt".to_string(),
                mime_type: "text/plain".to_string(),
            }]
        );
        let names: Vec<_> = wizard.tree_photos().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "c.jpg"]);
    }

    #[test]
    fn submit_empty_batch_changes_nothing() {
        let mut wizard = wizard();

        let upload = wizard.submit_tree_photos(&[]);

        assert_eq!(upload, TreePhotoUpload::default());
        assert!(wizard.tree_photos().is_empty());
    }

    // =========================================================================
    // generation tests
    // =========================================================================

    #[test]
    fn begin_generation_requires_tree_photos() {
        let mut wizard = wizard();

        assert_eq!(wizard.begin_generation(), None);
        assert!(!wizard.is_processing());
        assert!(!wizard.can_generate());
    }

    #[test]
    fn begin_generation_marks_processing() {
        let mut wizard = wizard_at_tree_photos();

        let ticket = wizard.begin_generation();

        assert_eq!(ticket, Some(GenerationTicket { epoch: 0 }));
        assert!(wizard.is_processing());
        assert!(!wizard.model_created());
    }

    #[test]
    fn begin_generation_is_idempotent_while_pending() {
        let mut wizard = wizard_at_tree_photos();
        let _ticket = wizard.begin_generation().unwrap();

        assert_eq!(wizard.begin_generation(), None);
        assert!(wizard.is_processing());
    }

    #[test]
    fn begin_generation_is_a_no_op_once_model_created() {
        let mut wizard = wizard_with_model();

        assert_eq!(wizard.begin_generation(), None);
        assert!(!wizard.is_processing());
        assert_eq!(wizard.estimate(), Some(&reference_estimate()));
    }

    #[test]
    fn complete_generation_stores_estimate() {
        let mut wizard = wizard_at_tree_photos();
        let ticket = wizard.begin_generation().unwrap();

        assert!(wizard.complete_generation(ticket, reference_estimate()));

        assert!(!wizard.is_processing());
        assert!(wizard.model_created());
        assert_eq!(wizard.estimate(), Some(&reference_estimate()));
    }

    #[test]
    fn processing_and_model_created_never_both_true() {
        let mut wizard = wizard_at_tree_photos();
        assert!(!(wizard.is_processing() && wizard.model_created()));

        let ticket = wizard.begin_generation().unwrap();
        assert!(!(wizard.is_processing() && wizard.model_created()));

        wizard.complete_generation(ticket, reference_estimate());
        assert!(!(wizard.is_processing() && wizard.model_created()));
    }

    #[test]
    fn complete_generation_after_reset_is_discarded() {
        let mut wizard = wizard_at_tree_photos();
        let ticket = wizard.begin_generation().unwrap();

        wizard.reset();
        let applied = wizard.complete_generation(ticket, reference_estimate());

        assert!(!applied);
        assert_eq!(wizard.current_step(), WizardStep::Welcome);
        assert!(!wizard.model_created());
        assert!(!wizard.is_processing());
        assert!(wizard.estimate().is_none());
    }

    #[test]
    fn stale_ticket_cannot_complete_a_newer_generation() {
        let mut wizard = wizard_at_tree_photos();
        let stale = wizard.begin_generation().unwrap();
        wizard.reset();
        wizard.submit_tree_photos(&[jpeg("tree.jpg")]);
        let fresh = wizard.begin_generation().unwrap();

        assert_eq!(stale.epoch(), 0);
        assert_eq!(fresh.epoch(), wizard.epoch());
        assert!(!wizard.complete_generation(stale, reference_estimate()));
        assert!(wizard.is_processing());

        assert!(wizard.complete_generation(fresh, reference_estimate()));
        assert!(wizard.model_created());
    }

    #[test]
    fn abandon_generation_allows_retry() {
        let mut wizard = wizard_at_tree_photos();
        let ticket = wizard.begin_generation().unwrap();

        assert!(wizard.abandon_generation(ticket));

        assert!(!wizard.is_processing());
        assert!(!wizard.model_created());
        assert!(wizard.begin_generation().is_some());
    }

    #[test]
    fn generated_estimate_fits_the_wizard() {
        let mut wizard = wizard_at_tree_photos();
        let ticket = wizard.begin_generation().unwrap();
        let estimate = EstimationGenerator::default()
            .generate(&mut StdRng::seed_from_u64(2))
            .unwrap();

        assert!(wizard.complete_generation(ticket, estimate.clone()));
        assert_eq!(wizard.estimate(), Some(&estimate));
    }

    // =========================================================================
    // reset tests
    // =========================================================================

    #[test]
    fn reset_restores_initial_state() {
        let mut wizard = wizard_with_model();
        wizard.advance();
        wizard.advance();

        wizard.reset();

        assert_eq!(wizard.current_step(), WizardStep::Welcome);
        assert!(!wizard.reference_uploaded());
        assert!(wizard.reference_photo().is_none());
        assert!(wizard.tree_photos().is_empty());
        assert!(!wizard.is_processing());
        assert!(!wizard.model_created());
        assert!(wizard.estimate().is_none());
        assert_eq!(wizard.epoch(), 1);
    }

    #[test]
    fn reset_releases_every_handle() {
        let mut wizard = wizard();
        wizard.submit_reference_photo(&jpeg("ref.jpg")).unwrap();
        wizard.submit_tree_photos(&[jpeg("a.jpg"), jpeg("b.jpg"), jpeg("c.jpg")]);
        assert_eq!(wizard.image_host().live_handles(), 4);

        wizard.reset();

        assert_eq!(wizard.image_host().live_handles(), 0);
        assert_eq!(wizard.image_host().total_released(), 4);
    }

    #[test]
    fn reset_on_fresh_wizard_is_harmless() {
        let mut wizard = wizard();

        wizard.reset();

        assert_eq!(wizard.current_step(), WizardStep::Welcome);
        assert_eq!(wizard.image_host().total_released(), 0);
    }

    #[test]
    fn drop_releases_each_handle_exactly_once() {
        let host = RecordingHost::default();
        let log = host.log.clone();

        {
            let mut wizard = Wizard::new(host);
            wizard.submit_reference_photo(&jpeg("ref.jpg")).unwrap();
            wizard.submit_tree_photos(&[jpeg("a.jpg")]);
            wizard.reset();
            wizard.submit_tree_photos(&[jpeg("b.jpg")]);
        }

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "acquire 1 ref.jpg",
                "acquire 2 a.jpg",
                "release 1",
                "release 2",
                "acquire 3 b.jpg",
                "release 3",
            ]
        );
    }

    // =========================================================================
    // snapshot tests
    // =========================================================================

    #[test]
    fn snapshot_reflects_state() {
        let mut wizard = wizard_at_tree_photos();
        let _ticket = wizard.begin_generation().unwrap();

        let snapshot = wizard.snapshot();

        assert_eq!(snapshot.current_step, WizardStep::TreePhotos);
        assert!(snapshot.reference_uploaded);
        assert_eq!(snapshot.reference_photo.unwrap().name, "ref.jpg");
        assert_eq!(snapshot.tree_photos.len(), 1);
        assert!(snapshot.is_processing);
        assert!(!snapshot.model_created);
        assert!(!snapshot.can_advance);
        assert!(!snapshot.can_generate);
    }
}
