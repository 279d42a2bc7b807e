pub use self::artist_builder::ArtistBuilder;
pub use self::show_builder::ShowBuilder;
pub use self::venue_builder::VenueBuilder;

pub mod artist_builder;
pub mod show_builder;
pub mod venue_builder;
