use models::GenreList;
use validator::ValidationError;
use validators::create_validation_error;

/// Venues and artists must list at least one genre.
pub fn validate_genres_present(genres: &GenreList) -> Result<(), ValidationError> {
    if genres.is_empty() {
        return Err(create_validation_error(
            "length",
            "At least one genre is required",
        ));
    }
    Ok(())
}
