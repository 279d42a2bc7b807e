use chrono::NaiveDateTime;
use diesel;
use diesel::prelude::*;
use models::*;
use schema::venues;
use utils::errors::ConvertToDatabaseError;
use utils::errors::DatabaseError;
use utils::errors::ErrorCode;
use validator::Validate;
use validators;

#[derive(Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[table_name = "venues"]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub genres: GenreList,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: String,
    pub email: String,
}

#[derive(Clone, Debug, Default, Deserialize, Insertable, PartialEq, Serialize, Validate)]
#[table_name = "venues"]
pub struct NewVenue {
    #[validate(length(min = "1", message = "Name is required"))]
    pub name: String,
    #[validate(custom = "validators::validate_genres_present")]
    pub genres: GenreList,
    #[validate(length(min = "1", message = "City is required"))]
    pub city: String,
    #[validate(length(min = "1", message = "State is required"))]
    pub state: String,
    #[validate(length(min = "1", message = "Address is required"))]
    pub address: String,
    #[validate(custom = "validators::validate_phone_number")]
    pub phone: String,
    #[validate(custom = "validators::validate_url_unless_blank")]
    pub website: String,
    pub seeking_talent: bool,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub seeking_description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_unless_blank")]
    pub image_link: Option<String>,
    #[validate(custom = "validators::validate_url_unless_blank")]
    pub facebook_link: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
}

impl NewVenue {
    pub fn commit(&self, conn: &PgConnection) -> Result<Venue, DatabaseError> {
        self.validate()?;
        DatabaseError::wrap(
            ErrorCode::InsertError,
            "Could not create new venue",
            conn.transaction(|| {
                diesel::insert_into(venues::table)
                    .values(self)
                    .get_result(conn)
            }),
        )
    }
}

#[derive(AsChangeset, Default, Deserialize, Validate)]
#[table_name = "venues"]
pub struct VenueEditableAttributes {
    pub name: Option<String>,
    #[validate(custom = "validators::validate_genres_present")]
    pub genres: Option<GenreList>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    #[validate(custom = "validators::validate_phone_number")]
    pub phone: Option<String>,
    #[validate(custom = "validators::validate_url_unless_blank")]
    pub website: Option<String>,
    pub seeking_talent: Option<bool>,
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub seeking_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option_deserialize_unless_blank")]
    pub image_link: Option<Option<String>>,
    #[validate(custom = "validators::validate_url_unless_blank")]
    pub facebook_link: Option<String>,
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
}

impl Venue {
    pub fn create(name: &str, city: &str, state: &str, address: &str, email: &str) -> NewVenue {
        NewVenue {
            name: String::from(name),
            city: String::from(city),
            state: String::from(state),
            address: String::from(address),
            email: String::from(email),
            ..Default::default()
        }
    }

    pub fn find(id: i32, conn: &PgConnection) -> Result<Venue, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::QueryError,
            "Error loading venue",
            venues::table.find(id).first::<Venue>(conn),
        )
    }

    pub fn all(conn: &PgConnection) -> Result<Vec<Venue>, DatabaseError> {
        venues::table
            .order_by(venues::id.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to load all venues")
    }

    /// The landing page grouping: every venue bucketed by (city, state) in
    /// order of first appearance, with its count of shows starting strictly
    /// after `now`.
    pub fn all_grouped_by_location(
        now: NaiveDateTime,
        conn: &PgConnection,
    ) -> Result<Vec<VenueLocationGroup>, DatabaseError> {
        let venues = Venue::all(conn)?;
        let venue_ids: Vec<i32> = venues.iter().map(|v| v.id).collect();
        let counts = Show::upcoming_counts_for_venues(
            &venue_ids,
            now,
            UpcomingBoundary::AfterNow,
            conn,
        )?;

        let mut groups: Vec<VenueLocationGroup> = Vec::new();
        for venue in venues {
            let summary = VenueSummary {
                id: venue.id,
                name: venue.name.clone(),
                num_upcoming_shows: counts.get(&venue.id).cloned().unwrap_or(0),
            };
            match groups
                .iter()
                .position(|g| g.city == venue.city && g.state == venue.state)
            {
                Some(index) => groups[index].venues.push(summary),
                None => groups.push(VenueLocationGroup {
                    city: venue.city.clone(),
                    state: venue.state.clone(),
                    venues: vec![summary],
                }),
            }
        }
        Ok(groups)
    }

    /// Case-insensitive substring search on venue names. A `None` or empty
    /// filter matches every venue. Unlike the landing page grouping, the
    /// upcoming counts here include shows starting at `now` itself.
    pub fn search(
        query_filter: Option<String>,
        now: NaiveDateTime,
        conn: &PgConnection,
    ) -> Result<SearchResults<VenueSummary>, DatabaseError> {
        let query_like = match query_filter {
            Some(term) => format!("%{}%", term),
            None => "%".to_string(),
        };
        let venues: Vec<Venue> = venues::table
            .filter(venues::name.ilike(query_like))
            .order_by(venues::id.asc())
            .load(conn)
            .to_db_error(ErrorCode::QueryError, "Unable to search venues")?;

        let venue_ids: Vec<i32> = venues.iter().map(|v| v.id).collect();
        let counts = Show::upcoming_counts_for_venues(
            &venue_ids,
            now,
            UpcomingBoundary::NowOrLater,
            conn,
        )?;

        let data = venues
            .into_iter()
            .map(|venue| VenueSummary {
                num_upcoming_shows: counts.get(&venue.id).cloned().unwrap_or(0),
                id: venue.id,
                name: venue.name,
            })
            .collect();
        Ok(SearchResults::from_data(data))
    }

    /// The full profile view for one venue: every stored attribute plus its
    /// shows split into past and upcoming around `now`.
    pub fn for_display(
        id: i32,
        now: NaiveDateTime,
        conn: &PgConnection,
    ) -> Result<DisplayVenue, DatabaseError> {
        let venue = Venue::find(id, conn)?;
        let shows = Show::for_venue(id, conn)?;

        let entries = shows
            .into_iter()
            .map(|(show, artist)| {
                (
                    show.start_time,
                    VenueShowEntry {
                        artist_id: artist.id,
                        artist_name: artist.name,
                        artist_image_link: artist.image_link,
                        start_time: show.start_time.to_string(),
                    },
                )
            })
            .collect();
        let (past_shows, upcoming_shows) = partition_by_start_time(entries, now);

        Ok(DisplayVenue {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            website: venue.website,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            email: venue.email,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        })
    }

    pub fn update(
        &self,
        attributes: VenueEditableAttributes,
        conn: &PgConnection,
    ) -> Result<Venue, DatabaseError> {
        attributes.validate()?;
        DatabaseError::wrap(
            ErrorCode::UpdateError,
            "Could not update venue",
            conn.transaction(|| diesel::update(self).set(attributes).get_result(conn)),
        )
    }

    /// Deletes the venue. Its shows go with it via the cascading foreign
    /// key on the shows table.
    pub fn destroy(&self, conn: &PgConnection) -> Result<usize, DatabaseError> {
        DatabaseError::wrap(
            ErrorCode::DeleteError,
            "Failed to destroy venue record",
            conn.transaction(|| diesel::delete(self).execute(conn)),
        )
    }
}

/// Venue line in the city listing and in search results.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// One (city, state) bucket on the landing page.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct VenueLocationGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DisplayVenue {
    pub id: i32,
    pub name: String,
    pub genres: GenreList,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: String,
    pub email: String,
    pub past_shows: Vec<VenueShowEntry>,
    pub upcoming_shows: Vec<VenueShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
