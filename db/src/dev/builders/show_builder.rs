use chrono::NaiveDateTime;
use dev::builders::*;
use dev::times;
use diesel::prelude::*;
use models::*;

pub struct ShowBuilder<'a> {
    artist_id: Option<i32>,
    venue_id: Option<i32>,
    start_time: NaiveDateTime,
    connection: &'a PgConnection,
}

impl<'a> ShowBuilder<'a> {
    pub fn new(connection: &'a PgConnection) -> ShowBuilder<'a> {
        ShowBuilder {
            artist_id: None,
            venue_id: None,
            start_time: times::distant_future(),
            connection,
        }
    }

    pub fn with_artist(mut self, artist: &Artist) -> ShowBuilder<'a> {
        self.artist_id = Some(artist.id);
        self
    }

    pub fn with_venue(mut self, venue: &Venue) -> ShowBuilder<'a> {
        self.venue_id = Some(venue.id);
        self
    }

    pub fn starting_at(mut self, start_time: NaiveDateTime) -> ShowBuilder<'a> {
        self.start_time = start_time;
        self
    }

    pub fn finish(self) -> Show {
        let artist_id = match self.artist_id {
            Some(id) => id,
            None => ArtistBuilder::new(self.connection).finish().id,
        };
        let venue_id = match self.venue_id {
            Some(id) => id,
            None => VenueBuilder::new(self.connection).finish().id,
        };
        Show::create(artist_id, venue_id, self.start_time)
            .commit(self.connection)
            .unwrap()
    }
}
