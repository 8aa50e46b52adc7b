//! Client for the inference endpoint.

use gloo_net::http::Request;
use shared::UploadResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request could not be built, never completed, or the body did
    /// not decode as either response shape.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    /// The endpoint answered outside the 2xx range.
    #[error("server returned status {0}")]
    Status(u16),
}

/// Sends the selected file as the `file` multipart field and decodes the
/// endpoint's verdict. Exactly one request per call, no retries.
pub async fn submit_image(file: &gloo_file::File) -> Result<UploadResponse, SubmitError> {
    let form_data = web_sys::FormData::new().unwrap();
    form_data.append_with_blob("file", file.as_ref()).unwrap();

    let response = Request::post(&crate::config::upload_url())
        .body(form_data)?
        .send()
        .await?;

    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }

    Ok(response.json::<UploadResponse>().await?)
}
