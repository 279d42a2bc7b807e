use regex::Regex;
use validator::ValidationError;
use validators::create_validation_error;

lazy_static! {
    static ref PHONE_NUMBER: Regex = Regex::new(r"^\d{3}-\d{3}-\d{4}$").unwrap();
}

/// Accepts phone numbers in the `123-456-7890` form the listing forms
/// collect. A blank value is allowed; the field is optional everywhere it
/// appears.
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() || PHONE_NUMBER.is_match(phone) {
        return Ok(());
    }
    Err(create_validation_error(
        "phone",
        "Phone number must use the 123-456-7890 format",
    ))
}
