/// Image intake pipeline for the disease detection screen
///
/// Collects one candidate photo (from the native file picker or a window
/// drop), validates it by extension, and drives the submission lifecycle:
///
///   Empty -> Selected -> Submitting -> Idle
///
/// `Submitting` is entered only from `Selected`. Every submission carries a
/// generation token; a completion with a stale token (the selection was
/// cleared or superseded while the task ran) is discarded.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extensions accepted as photos, lowercase
pub const IMAGE_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff",
];

/// Why the pipeline refused an operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// The candidate file is not a supported image format
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    /// A submission is already running
    #[error("an analysis is already in progress")]
    Busy,
    /// Submit was requested without a fresh selection
    #[error("no photo is ready to submit")]
    NotReady,
}

/// A file offered to the pipeline, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub path: PathBuf,
    pub size_bytes: u64,
}

impl ImageCandidate {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            size_bytes,
        }
    }

    /// Build a candidate from a path on disk, reading its size
    pub fn from_path(path: PathBuf) -> std::io::Result<Self> {
        let size_bytes = std::fs::metadata(&path)?.len();
        Ok(Self { path, size_bytes })
    }
}

/// The accepted photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
}

impl SelectedImage {
    /// File size rendered in mebibytes, e.g. "2.00 MB"
    pub fn size_display(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

/// Where the submission lifecycle currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeStatus {
    /// Nothing selected yet
    #[default]
    Empty,
    /// A photo is selected and ready to submit
    Selected,
    /// The analysis task is running
    Submitting,
    /// The analysis finished; the photo stays selected
    Idle,
}

/// State for the image intake pipeline
#[derive(Debug, Default)]
pub struct ImageIntake {
    status: IntakeStatus,
    image: Option<SelectedImage>,
    /// Cancellation token: completions carrying an older value are stale
    generation: u64,
    /// A file drag is hovering over the window
    drag_active: bool,
}

impl ImageIntake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> IntakeStatus {
        self.status
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Validate a candidate and make it the current selection.
    ///
    /// Accepts only supported image extensions; rejection leaves the
    /// current state untouched. A new selection replaces any prior one and
    /// moves the pipeline (back) to `Selected`.
    pub fn select_file(&mut self, candidate: ImageCandidate) -> Result<(), IntakeError> {
        if self.status == IntakeStatus::Submitting {
            return Err(IntakeError::Busy);
        }
        let name = file_name_of(&candidate.path);
        if !is_supported_image(&candidate.path) {
            return Err(IntakeError::UnsupportedFileType(name));
        }

        self.image = Some(SelectedImage {
            name,
            size_bytes: candidate.size_bytes,
            path: candidate.path,
        });
        self.status = IntakeStatus::Selected;
        Ok(())
    }

    /// A file drag entered the window
    pub fn drag_entered(&mut self) {
        self.drag_active = true;
    }

    /// The drag left without dropping
    pub fn drag_left(&mut self) {
        self.drag_active = false;
    }

    /// Handle one path from a window drop.
    ///
    /// Only the first file of a multi-file drop is taken: the hover flag is
    /// consumed by the first path, and the remaining paths of the same
    /// gesture arrive with it unset and are ignored.
    pub fn drop_file(&mut self, candidate: ImageCandidate) -> Result<bool, IntakeError> {
        if !self.drag_active {
            return Ok(false);
        }
        self.drag_active = false;
        self.select_file(candidate).map(|()| true)
    }

    /// Drop the selection and return to `Empty`, from any status.
    /// An in-flight submission keeps running but its completion is stale.
    pub fn clear(&mut self) {
        self.image = None;
        self.status = IntakeStatus::Empty;
        self.drag_active = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Start a submission.
    ///
    /// Guarded: only a `Selected` photo can be submitted. Returns the
    /// generation token and the photo path for the analysis task.
    pub fn begin_submit(&mut self) -> Result<(u64, PathBuf), IntakeError> {
        match self.status {
            IntakeStatus::Submitting => Err(IntakeError::Busy),
            IntakeStatus::Selected => {
                let image = self.image.as_ref().ok_or(IntakeError::NotReady)?;
                let path = image.path.clone();
                self.generation = self.generation.wrapping_add(1);
                self.status = IntakeStatus::Submitting;
                Ok((self.generation, path))
            }
            IntakeStatus::Empty | IntakeStatus::Idle => Err(IntakeError::NotReady),
        }
    }

    /// Apply a successful completion for the given token.
    /// Returns false (and changes nothing) when the token is stale.
    pub fn finish_submit(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.status != IntakeStatus::Submitting {
            return false;
        }
        self.status = IntakeStatus::Idle;
        true
    }

    /// Apply a failed completion: the photo goes back to `Selected` so the
    /// user can retry without re-picking it.
    pub fn fail_submit(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.status != IntakeStatus::Submitting {
            return false;
        }
        self.status = IntakeStatus::Selected;
        true
    }
}

/// Check a path against the supported image extensions
fn is_supported_image(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// File name portion of a path, for display
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_photo() -> ImageCandidate {
        ImageCandidate::new("/photos/leaf.jpg", 2_097_152)
    }

    #[test]
    fn test_non_image_is_rejected_and_state_unchanged() {
        let mut intake = ImageIntake::new();
        let result = intake.select_file(ImageCandidate::new("/docs/doc.pdf", 1024));

        assert_eq!(
            result,
            Err(IntakeError::UnsupportedFileType("doc.pdf".to_string()))
        );
        assert_eq!(intake.status(), IntakeStatus::Empty);
        assert!(intake.image().is_none());
    }

    #[test]
    fn test_selecting_an_image_records_name_and_size() {
        let mut intake = ImageIntake::new();
        intake.select_file(leaf_photo()).unwrap();

        assert_eq!(intake.status(), IntakeStatus::Selected);
        let image = intake.image().unwrap();
        assert_eq!(image.name, "leaf.jpg");
        assert_eq!(image.size_bytes, 2_097_152);
        assert_eq!(image.size_display(), "2.00 MB");
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let mut intake = ImageIntake::new();
        intake
            .select_file(ImageCandidate::new("/photos/LEAF.JPG", 10))
            .unwrap();
        assert_eq!(intake.status(), IntakeStatus::Selected);
    }

    #[test]
    fn test_file_without_extension_is_rejected() {
        let mut intake = ImageIntake::new();
        let result = intake.select_file(ImageCandidate::new("/photos/leaf", 10));
        assert!(matches!(result, Err(IntakeError::UnsupportedFileType(_))));
    }

    #[test]
    fn test_new_selection_replaces_prior_one() {
        let mut intake = ImageIntake::new();
        intake.select_file(leaf_photo()).unwrap();
        intake
            .select_file(ImageCandidate::new("/photos/stem.png", 512))
            .unwrap();

        let image = intake.image().unwrap();
        assert_eq!(image.name, "stem.png");
        assert_eq!(image.size_bytes, 512);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut intake = ImageIntake::new();
        intake.select_file(leaf_photo()).unwrap();

        intake.clear();
        assert_eq!(intake.status(), IntakeStatus::Empty);
        assert!(intake.image().is_none());

        intake.clear();
        assert_eq!(intake.status(), IntakeStatus::Empty);
        assert!(intake.image().is_none());
    }

    #[test]
    fn test_submit_requires_a_selection() {
        let mut intake = ImageIntake::new();
        assert_eq!(intake.begin_submit().unwrap_err(), IntakeError::NotReady);
    }

    #[test]
    fn test_submit_lifecycle_runs_selected_to_idle() {
        let mut intake = ImageIntake::new();
        intake.select_file(leaf_photo()).unwrap();

        let (generation, path) = intake.begin_submit().unwrap();
        assert_eq!(intake.status(), IntakeStatus::Submitting);
        assert_eq!(path, PathBuf::from("/photos/leaf.jpg"));

        assert!(intake.finish_submit(generation));
        assert_eq!(intake.status(), IntakeStatus::Idle);
        // The photo is still there after completion
        assert!(intake.image().is_some());
    }

    #[test]
    fn test_submit_is_not_reentrant() {
        let mut intake = ImageIntake::new();
        intake.select_file(leaf_photo()).unwrap();
        intake.begin_submit().unwrap();

        assert_eq!(intake.begin_submit().unwrap_err(), IntakeError::Busy);
        assert_eq!(intake.select_file(leaf_photo()).unwrap_err(), IntakeError::Busy);
    }

    #[test]
    fn test_submit_from_idle_is_refused() {
        let mut intake = ImageIntake::new();
        intake.select_file(leaf_photo()).unwrap();
        let (generation, _) = intake.begin_submit().unwrap();
        intake.finish_submit(generation);

        assert_eq!(intake.begin_submit().unwrap_err(), IntakeError::NotReady);
    }

    #[test]
    fn test_stale_completion_after_clear_is_discarded() {
        let mut intake = ImageIntake::new();
        intake.select_file(leaf_photo()).unwrap();
        let (generation, _) = intake.begin_submit().unwrap();

        // User clears while the task is still running
        intake.clear();
        assert!(!intake.finish_submit(generation));
        assert_eq!(intake.status(), IntakeStatus::Empty);
        assert!(intake.image().is_none());
    }

    #[test]
    fn test_failed_submission_returns_to_selected() {
        let mut intake = ImageIntake::new();
        intake.select_file(leaf_photo()).unwrap();
        let (generation, _) = intake.begin_submit().unwrap();

        assert!(intake.fail_submit(generation));
        assert_eq!(intake.status(), IntakeStatus::Selected);
        assert!(intake.image().is_some());
    }

    #[test]
    fn test_multi_file_drop_takes_first_file_only() {
        let mut intake = ImageIntake::new();
        intake.drag_entered();
        assert!(intake.drag_active());

        let taken = intake.drop_file(leaf_photo()).unwrap();
        assert!(taken);
        assert!(!intake.drag_active());

        // Second path of the same gesture arrives with the flag unset
        let taken = intake
            .drop_file(ImageCandidate::new("/photos/second.png", 64))
            .unwrap();
        assert!(!taken);
        assert_eq!(intake.image().unwrap().name, "leaf.jpg");
    }

    #[test]
    fn test_drag_leave_clears_the_hover_flag() {
        let mut intake = ImageIntake::new();
        intake.drag_entered();
        intake.drag_left();
        assert!(!intake.drag_active());
    }

    #[test]
    fn test_size_display_boundaries() {
        let image = SelectedImage {
            path: PathBuf::from("/p/a.jpg"),
            name: "a.jpg".to_string(),
            size_bytes: 1_048_576,
        };
        assert_eq!(image.size_display(), "1.00 MB");

        let small = SelectedImage {
            size_bytes: 51_200,
            ..image
        };
        assert_eq!(small.size_display(), "0.05 MB");
    }
}
