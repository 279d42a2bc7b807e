pub use self::genre_list_validator::*;
pub use self::phone_number_validator::*;
pub use self::url_validator::*;

pub mod genre_list_validator;
pub mod phone_number_validator;
pub mod url_validator;

use std::borrow::Cow;
use validator::ValidationError;

pub fn create_validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut validation_error = ValidationError::new(code);
    validation_error.message = Some(Cow::from(message));
    validation_error
}
