use chrono::NaiveDateTime;
use diesel;
use diesel::prelude::*;
use models::*;
use schema::artists;
use utils::errors::ConvertToDatabaseError;
use utils::errors::DatabaseError;
use utils::errors::ErrorCode;
use validator::Validate;
use validators;

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[table_name = "artists"]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: GenreList,
    pub image_link: Option<String>,
    pub facebook_link: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub website: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, Deserialize, Insertable, PartialEq, Serialize, Validate)]
#[table_name = "artists"]
pub struct NewArtist {
    #[validate(length(min = "1", message = "Name is required"))]
    pub name: String,
    #[validate(length(min = "1", message = "City is required"))]
    pub city: String,
    #[validate(length(min = "1", message = "State is required"))]
    pub state: String,
    #[validate(custom = "validators::validate_phone_number")]
    pub phone: String,
    #[validate(custom = "validators::validate_genres_present")]
    pub genres: GenreList,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub image_link: Option<String>,
    #[validate(custom = "validators::validate_url_unless_blank")]
    pub facebook_link: String,
    pub seeking_venue: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
    #[validate(custom = "validators::validate_url_unless_blank")]
    pub website: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
}

impl NewArtist {
    pub fn commit(&self, conn: &PgConnection) -> Result<Artist, DatabaseError> {
        self.validate()?;
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new artist",
            conn.transaction(|| {
                diesel::insert_into(artists::table)
                    .values(self)
                    .get_result(conn)
            }),
        )
    }
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[table_name = "artists"]
pub struct ArtistEditableAttributes {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[validate(custom = "validators::validate_phone_number")]
    pub phone: Option<String>,
    #[validate(custom = "validators::validate_genres_present")]
    pub genres: Option<GenreList>,
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub image_link: Option<Option<String>>,
    #[validate(custom = "validators::validate_url_unless_blank")]
    pub facebook_link: Option<String>,
    pub seeking_venue: Option<bool>,
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub seeking_description: Option<Option<String>>,
    #[validate(custom = "validators::validate_url_unless_blank")]
    pub website: Option<String>,
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
}

impl ArtistEditableAttributes {
    pub fn new() -> ArtistEditableAttributes {
        Default::default()
    }
}

impl Artist {
    pub fn create(name: &str, city: &str, state: &str, email: &str) -> NewArtist {
        NewArtist {
            name: String::from(name),
            city: String::from(city),
            state: String::from(state),
            email: String::from(email),
            ..Default::default()
        }
    }

    pub fn find(id: i32, conn: &PgConnection) -> Result<Artist, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading artist",
            artists::table.find(id).first::<Artist>(conn),
        )
    }

    pub fn all(conn: &PgConnection) -> Result<Vec<Artist>, DatabaseError> {
        artists::table
            .order_by(artists::id.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all artists")
    }

    /// Case-insensitive substring search on artist names. A `None` or
    /// empty filter matches every artist. Counts include shows starting at
    /// `now` itself.
    pub fn search(
        query_filter: Option<String>,
        now: NaiveDateTime,
        conn: &PgConnection,
    ) -> Result<SearchResults<ArtistSummary>, DatabaseError> {
        let query_like = match query_filter {
            Some(term) => format!("%{}%", term),
            None => "%".to_string(),
        };
        let artists: Vec<Artist> = artists::table
            .filter(artists::name.ilike(query_like))
            .order_by(artists::id.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to search artists")?;

        let artist_ids: Vec<i32> = artists.iter().map(|a| a.id).collect();
        let counts = Show::upcoming_counts_for_artists(
            &artist_ids,
            now,
            UpcomingBoundary::NowOrLater,
            conn,
        )?;

        let data = artists
            .into_iter()
            .map(|artist| ArtistSummary {
                num_upcoming_shows: counts.get(&artist.id).cloned().unwrap_or(0),
                id: artist.id,
                name: artist.name,
            })
            .collect();
        Ok(SearchResults::from_data(data))
    }

    /// The full profile view for one artist: every stored attribute plus
    /// their shows split into past and upcoming around `now`.
    pub fn for_display(
        id: i32,
        now: NaiveDateTime,
        conn: &PgConnection,
    ) -> Result<DisplayArtist, DatabaseError> {
        let artist = Artist::find(id, conn)?;
        let shows = Show::for_artist(id, conn)?;

        let entries = shows
            .into_iter()
            .map(|(show, venue)| {
                (
                    show.start_time,
                    ArtistShowEntry {
                        venue_id: venue.id,
                        venue_name: venue.name,
                        venue_image_link: venue.image_link,
                        start_time: show.start_time.to_string(),
                    },
                )
            })
            .collect();
        let (past_shows, upcoming_shows) = partition_by_start_time(entries, now);

        Ok(DisplayArtist {
            id: artist.id,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            website: artist.website,
            email: artist.email,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }

    pub fn update(
        &self,
        attributes: ArtistEditableAttributes,
        conn: &PgConnection,
    ) -> Result<Artist, DatabaseError> {
        attributes.validate()?;
        DatabaseError::wrap(
            ErrorCode::UpdateError,
            "Could not update artist",
            conn.transaction(|| diesel::update(self).set(attributes).get_result(conn)),
        )
    }

    /// Deletes the artist together with their shows (cascading foreign
    /// key).
    pub fn destroy(&self, conn: &PgConnection) -> Result<usize, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::DeleteError,
            "Failed to destroy artist record",
            conn.transaction(|| diesel::delete(self).execute(conn)),
        )
    }
}

/// Artist line in search results.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DisplayArtist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: GenreList,
    pub image_link: Option<String>,
    pub facebook_link: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub website: String,
    pub email: String,
    pub past_shows: Vec<ArtistShowEntry>,
    pub upcoming_shows: Vec<ArtistShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
