pub use self::artists::*;
pub use self::enums::*;
pub use self::genres::*;
pub use self::search_results::*;
pub use self::shows::*;
pub use self::venues::*;

pub mod artists;
pub mod enums;
pub mod genres;
pub mod search_results;
pub mod shows;
pub mod venues;

use serde::{Deserialize, Deserializer};

/// Form submissions post empty strings for optional fields the user left
/// untouched. Those normalize to `None` rather than being stored as blank
/// text.
pub fn deserialize_unless_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// As `deserialize_unless_blank`, for patch payloads where the outer
/// `Option` distinguishes "not submitted" from "submitted as blank".
pub fn double_option_deserialize_unless_blank<'de, D>(
    deserializer: D,
) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(Some(value.filter(|s| !s.is_empty())))
}
