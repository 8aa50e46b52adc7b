//! Upload session state.
//!
//! All domain state of the page lives in [`UploadState`] and is mutated only
//! through the transition functions below. The two suspending operations
//! (preview decode, submission) are issued with a generation ticket;
//! completions carry their ticket back and are dropped if a newer operation
//! of the same class has started since, so the last-issued operation always
//! wins regardless of completion order.

use shared::UploadResponse;

/// Displayed when the request never produced a usable response body.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Error uploading file";

const GRADCAM_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Monotonic ticket source for one class of asynchronous operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Starts a new operation, invalidating all earlier tickets.
    pub fn advance(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether `ticket` belongs to the most recently started operation.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// The currently chosen file: handle plus display name.
#[derive(Debug, Clone)]
pub struct SelectedFile<F> {
    pub handle: F,
    pub name: String,
}

/// Outcome of the most recently completed submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The endpoint returned a classification. `gradcam_uri` is a complete
    /// data URI, usable directly as an image source.
    Success {
        label: String,
        confidence: f64,
        gradcam_uri: String,
    },
    /// Transport or application failure, already worded for display.
    Failed { message: String },
}

impl Outcome {
    /// The human-readable result line.
    pub fn display_line(&self) -> String {
        match self {
            Outcome::Success {
                label, confidence, ..
            } => format!(
                "Prediction: {}, Confidence: {:.2}%",
                label,
                confidence * 100.0
            ),
            Outcome::Failed { message } => message.clone(),
        }
    }

    pub fn gradcam_uri(&self) -> Option<&str> {
        match self {
            Outcome::Success { gradcam_uri, .. } => Some(gradcam_uri),
            Outcome::Failed { .. } => None,
        }
    }
}

/// Builds a displayable data URI from the endpoint's bare base64 payload.
pub fn gradcam_data_uri(base64: &str) -> String {
    format!("{GRADCAM_URI_PREFIX}{base64}")
}

/// Maps a decoded endpoint response onto a display outcome.
pub fn interpret_response(response: UploadResponse) -> Outcome {
    match response {
        UploadResponse::Failure(failure) => Outcome::Failed {
            message: format!("Error: {}", failure.error),
        },
        UploadResponse::Success(prediction) => Outcome::Success {
            gradcam_uri: gradcam_data_uri(&prediction.gradcam),
            label: prediction.label,
            confidence: prediction.confidence,
        },
    }
}

/// Selection, preview and submission state for the single upload slot.
///
/// Generic over the file handle so the transitions stay testable off the
/// browser; the component instantiates it with `gloo_file::File`.
#[derive(Debug)]
pub struct UploadState<F> {
    selected: Option<SelectedFile<F>>,
    preview: Option<String>,
    outcome: Option<Outcome>,
    submitting: bool,
    preview_gen: Generation,
    submit_gen: Generation,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            preview: None,
            outcome: None,
            submitting: false,
            preview_gen: Generation::default(),
            submit_gen: Generation::default(),
        }
    }
}

impl<F> UploadState<F> {
    /// Replaces the current selection and issues a preview ticket for it.
    /// A prior outcome no longer matches the file on screen, so it is
    /// cleared here as well.
    pub fn select(&mut self, handle: F, name: String) -> u64 {
        self.selected = Some(SelectedFile { handle, name });
        self.outcome = None;
        self.preview_gen.advance()
    }

    /// Applies a finished preview decode. Returns false, changing nothing,
    /// when a newer selection has superseded the ticket. The previous
    /// preview stays on screen until a current decode lands.
    pub fn apply_preview(&mut self, ticket: u64, data_uri: String) -> bool {
        if !self.preview_gen.is_current(ticket) {
            return false;
        }
        self.preview = Some(data_uri);
        true
    }

    /// Starts a submission for the current selection, clearing any stale
    /// outcome. Returns the ticket and the file to send, or `None` when no
    /// file is selected, in which case no request must be issued.
    pub fn begin_submission(&mut self) -> Option<(u64, F)>
    where
        F: Clone,
    {
        let file = self.selected.as_ref()?.handle.clone();
        self.outcome = None;
        self.submitting = true;
        Some((self.submit_gen.advance(), file))
    }

    /// Applies a finished submission. Stale tickets are dropped.
    pub fn finish_submission(&mut self, ticket: u64, outcome: Outcome) -> bool {
        if !self.submit_gen.is_current(ticket) {
            return false;
        }
        self.submitting = false;
        self.outcome = Some(outcome);
        true
    }

    pub fn has_file(&self) -> bool {
        self.selected.is_some()
    }

    pub fn file_name(&self) -> &str {
        self.selected.as_ref().map(|f| f.name.as_str()).unwrap_or("")
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn gradcam(&self) -> Option<&str> {
        self.outcome.as_ref().and_then(Outcome::gradcam_uri)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Prediction, PredictionError};

    fn success_response() -> UploadResponse {
        UploadResponse::Success(Prediction {
            label: "PCOS".to_string(),
            confidence: 0.8734,
            gradcam: "aGVhdG1hcA==".to_string(),
        })
    }

    #[test]
    fn selecting_issues_preview_ticket_and_applies() {
        let mut state = UploadState::default();
        let ticket = state.select("scan.png", "scan.png".to_string());

        assert_eq!(state.file_name(), "scan.png");
        assert!(state.preview().is_none());

        assert!(state.apply_preview(ticket, "data:image/png;base64,AAAA".to_string()));
        assert_eq!(state.preview(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn stale_preview_is_discarded() {
        let mut state = UploadState::default();
        let first = state.select("a.png", "a.png".to_string());
        let second = state.select("b.png", "b.png".to_string());

        assert!(!state.apply_preview(first, "data:a".to_string()));
        assert!(state.preview().is_none());

        assert!(state.apply_preview(second, "data:b".to_string()));
        assert_eq!(state.preview(), Some("data:b"));
    }

    #[test]
    fn previous_preview_survives_a_superseded_decode() {
        let mut state = UploadState::default();
        let first = state.select("a.png", "a.png".to_string());
        assert!(state.apply_preview(first, "data:a".to_string()));

        let _second = state.select("b.png", "b.png".to_string());
        // The decode for b has not landed; a's preview is still shown.
        assert_eq!(state.preview(), Some("data:a"));
    }

    #[test]
    fn submission_without_file_is_a_no_op() {
        let mut state: UploadState<&str> = UploadState::default();
        assert!(state.begin_submission().is_none());
        assert!(!state.is_submitting());
        assert!(state.outcome().is_none());
    }

    #[test]
    fn success_formats_label_and_confidence() {
        let outcome = interpret_response(success_response());
        assert_eq!(outcome.display_line(), "Prediction: PCOS, Confidence: 87.34%");
        assert_eq!(
            outcome.gradcam_uri(),
            Some("data:image/jpeg;base64,aGVhdG1hcA==")
        );
    }

    #[test]
    fn application_error_is_prefixed_and_has_no_gradcam() {
        let outcome = interpret_response(UploadResponse::Failure(PredictionError {
            error: "invalid image".to_string(),
        }));
        assert_eq!(outcome.display_line(), "Error: invalid image");
        assert_eq!(outcome.gradcam_uri(), None);

        let mut state = UploadState::default();
        state.select("scan.png", "scan.png".to_string());
        let (ticket, _) = state.begin_submission().unwrap();
        assert!(state.finish_submission(ticket, outcome));
        assert!(state.gradcam().is_none());
    }

    #[test]
    fn transport_failure_message() {
        let outcome = Outcome::Failed {
            message: TRANSPORT_ERROR_MESSAGE.to_string(),
        };
        assert_eq!(outcome.display_line(), "Error uploading file");
    }

    #[test]
    fn later_submission_wins_regardless_of_completion_order() {
        let mut state = UploadState::default();
        state.select("scan.png", "scan.png".to_string());

        let (first, _) = state.begin_submission().unwrap();
        let (second, _) = state.begin_submission().unwrap();

        // Second response arrives first and is applied.
        assert!(state.finish_submission(second, interpret_response(success_response())));
        // The earlier request resolves late and is dropped.
        assert!(!state.finish_submission(
            first,
            Outcome::Failed {
                message: TRANSPORT_ERROR_MESSAGE.to_string(),
            }
        ));

        assert_eq!(
            state.outcome().unwrap().display_line(),
            "Prediction: PCOS, Confidence: 87.34%"
        );
        assert!(!state.is_submitting());
    }

    #[test]
    fn new_submission_clears_previous_outcome() {
        let mut state = UploadState::default();
        state.select("scan.png", "scan.png".to_string());

        let (ticket, _) = state.begin_submission().unwrap();
        state.finish_submission(ticket, interpret_response(success_response()));
        assert!(state.outcome().is_some());

        state.begin_submission().unwrap();
        assert!(state.outcome().is_none());
        assert!(state.gradcam().is_none());
        assert!(state.is_submitting());
    }

    #[test]
    fn reselecting_clears_previous_outcome() {
        let mut state = UploadState::default();
        state.select("a.png", "a.png".to_string());

        let (ticket, _) = state.begin_submission().unwrap();
        state.finish_submission(ticket, interpret_response(success_response()));
        assert!(state.gradcam().is_some());

        state.select("b.png", "b.png".to_string());
        assert!(state.outcome().is_none());
        assert!(state.gradcam().is_none());
    }
}
