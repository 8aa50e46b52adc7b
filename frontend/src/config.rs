//! Inference endpoint configuration.

/// Base URL of the inference service. Overridable at build time so a
/// deployed bundle can point elsewhere than the development server.
pub fn api_base() -> &'static str {
    option_env!("INFERENCE_API_BASE").unwrap_or("http://127.0.0.1:5008")
}

/// Full URL of the classification endpoint.
pub fn upload_url() -> String {
    format!("{}/upload", api_base())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_url_appends_fixed_path() {
        assert!(upload_url().ends_with("/upload"));
        assert!(upload_url().starts_with(api_base()));
    }
}
