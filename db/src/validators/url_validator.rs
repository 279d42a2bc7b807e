use validator::{validate_url, ValidationError};
use validators::create_validation_error;

/// Link fields are optional on the listing forms, so a blank value passes;
/// anything else must be a well-formed URL.
pub fn validate_url_unless_blank(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() || validate_url(url) {
        return Ok(());
    }
    let mut validation_error = create_validation_error("url", "URL is invalid");
    validation_error.add_param("value".into(), &url);
    Err(validation_error)
}
