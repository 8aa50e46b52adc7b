use serde::{Deserialize, Serialize};

/// Body of a successful classification from the inference endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// Probability in [0, 1].
    pub confidence: f64,
    /// Grad-CAM overlay as bare base64, no data-URI prefix.
    pub gradcam: String,
}

/// Application-level failure reported by the endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionError {
    pub error: String,
}

/// The two mutually exclusive response shapes of `POST /upload`.
///
/// A body carrying an `error` field decodes as `Failure` even when other
/// fields are present alongside it; everything else must carry the full
/// success shape.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum UploadResponse {
    Failure(PredictionError),
    Success(Prediction),
}
