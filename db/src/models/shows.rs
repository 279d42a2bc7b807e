use chrono::NaiveDateTime;
use diesel;
use diesel::prelude::*;
use diesel::sql_types::{Array, BigInt, Integer, Timestamp};
use models::*;
use schema::{artists, shows, venues};
use std::collections::HashMap;
use utils::errors::ConvertToDatabaseError;
use utils::errors::DatabaseError;
use utils::errors::ErrorCode;

/// A booked appearance of one artist at one venue. A show never changes
/// hands after creation; it is only removed as a side effect of its venue
/// or artist being deleted.
#[derive(
    Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize,
)]
#[belongs_to(Artist)]
#[belongs_to(Venue)]
#[table_name = "shows"]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize, Insertable, PartialEq, Serialize)]
#[table_name = "shows"]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

impl NewShow {
    /// Inserts the show exactly as submitted. The artist and venue ids are
    /// not looked up beforehand; a dangling reference is rejected by the
    /// foreign key constraint when the transaction commits and surfaces as
    /// a `ForeignKeyError`.
    pub fn commit(&self, conn: &PgConnection) -> Result<Show, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new show",
            conn.transaction(|| {
                diesel::insert_into(shows::table)
                    .values(self)
                    .get_result(conn)
            }),
        )
    }
}

/// The two cut-offs in use when counting a profile's upcoming shows. The
/// city listing counts only shows starting strictly after `now`; profile
/// and search views also count a show starting at that exact instant. The
/// two counts can differ for the same venue and both are intentional.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UpcomingBoundary {
    AfterNow,
    NowOrLater,
}

impl UpcomingBoundary {
    fn sql_operator(self) -> &'static str {
        match self {
            UpcomingBoundary::AfterNow => ">",
            UpcomingBoundary::NowOrLater => ">=",
        }
    }
}

impl Show {
    pub fn create(artist_id: i32, venue_id: i32, start_time: NaiveDateTime) -> NewShow {
        NewShow {
            artist_id,
            venue_id,
            start_time,
        }
    }

    pub fn find(id: i32, conn: &PgConnection) -> Result<Show, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading show",
            shows::table.find(id).first::<Show>(conn),
        )
    }

    /// Every show joined with its venue and artist, earliest first.
    pub fn all(conn: &PgConnection) -> Result<Vec<DisplayShow>, DatabaseError> {
        let rows: Vec<(Show, Artist, Venue)> = shows::table
            .inner_join(artists::table)
            .inner_join(venues::table)
            .order_by(shows::start_time.asc())
            .select((
                shows::all_columns,
                artists::all_columns,
                venues::all_columns,
            ))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all shows")?;

        let mut display_shows = Vec::new();
        for (show, artist, venue) in rows {
            display_shows.push(DisplayShow {
                venue_id: venue.id,
                venue_name: venue.name,
                artist_id: artist.id,
                artist_name: artist.name,
                artist_image_link: artist.image_link,
                start_time: show.start_time.to_string(),
            });
        }
        Ok(display_shows)
    }

    pub fn for_venue(
        venue_id: i32,
        conn: &PgConnection,
    ) -> Result<Vec<(Show, Artist)>, DatabaseError> {
        shows::table
            .inner_join(artists::table)
            .filter(shows::venue_id.eq(venue_id))
            .order_by(shows::start_time.asc())
            .select((shows::all_columns, artists::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load shows for venue")
    }

    pub fn for_artist(
        artist_id: i32,
        conn: &PgConnection,
    ) -> Result<Vec<(Show, Venue)>, DatabaseError> {
        shows::table
            .inner_join(venues::table)
            .filter(shows::artist_id.eq(artist_id))
            .order_by(shows::start_time.asc())
            .select((shows::all_columns, venues::all_columns))
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Could not load shows for artist")
    }

    pub fn upcoming_counts_for_venues(
        venue_ids: &[i32],
        now: NaiveDateTime,
        boundary: UpcomingBoundary,
        conn: &PgConnection,
    ) -> Result<HashMap<i32, i64>, DatabaseError> {
        Show::upcoming_counts("venue_id", venue_ids, now, boundary, conn)
    }

    pub fn upcoming_counts_for_artists(
        artist_ids: &[i32],
        now: NaiveDateTime,
        boundary: UpcomingBoundary,
        conn: &PgConnection,
    ) -> Result<HashMap<i32, i64>, DatabaseError> {
        Show::upcoming_counts("artist_id", artist_ids, now, boundary, conn)
    }

    fn upcoming_counts(
        id_column: &str,
        ids: &[i32],
        now: NaiveDateTime,
        boundary: UpcomingBoundary,
        conn: &PgConnection,
    ) -> Result<HashMap<i32, i64>, DatabaseError> {
        #[derive(QueryableByName)]
        struct ShowCount {
            #[sql_type = "Integer"]
            profile_id: i32,
            #[sql_type = "BigInt"]
            upcoming_shows: i64,
        }

        let query = format!(
            "SELECT {id_column} AS profile_id, COUNT(*) AS upcoming_shows \
             FROM shows \
             WHERE {id_column} = ANY($1) AND start_time {operator} $2 \
             GROUP BY {id_column}",
            id_column = id_column,
            operator = boundary.sql_operator()
        );

        let counts: Vec<ShowCount> = diesel::sql_query(query)
            .bind::<Array<Integer>, _>(ids.to_vec())
            .bind::<Timestamp, _>(now)
            .get_results(conn)
            .to_db_error(ErrorCode::QueryError, "Could not count upcoming shows")?;

        Ok(counts
            .into_iter()
            .map(|c| (c.profile_id, c.upcoming_shows))
            .collect())
    }
}

/// Splits show summaries around `now` into `(past, upcoming)`. A show
/// starting exactly at `now` is upcoming, not past.
pub fn partition_by_start_time<T>(
    entries: Vec<(NaiveDateTime, T)>,
    now: NaiveDateTime,
) -> (Vec<T>, Vec<T>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();
    for (start_time, entry) in entries {
        if start_time < now {
            past.push(entry);
        } else {
            upcoming.push(entry);
        }
    }
    (past, upcoming)
}

/// Row on the full show listing.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DisplayShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Entry on a venue's profile: the booked artist and when they play.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueShowEntry {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Entry on an artist's profile: the venue they appear at and when.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArtistShowEntry {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}
