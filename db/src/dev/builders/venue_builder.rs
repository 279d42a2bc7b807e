use diesel::prelude::*;
use models::*;
use rand::prelude::*;

pub struct VenueBuilder<'a> {
    name: String,
    city: String,
    state: String,
    address: String,
    phone: String,
    genres: GenreList,
    website: String,
    seeking_talent: bool,
    seeking_description: Option<String>,
    image_link: Option<String>,
    facebook_link: String,
    email: String,
    connection: &'a PgConnection,
}

impl<'a> VenueBuilder<'a> {
    pub fn new(connection: &'a PgConnection) -> VenueBuilder<'a> {
        let x: u32 = random();
        VenueBuilder {
            name: format!("Venue {}", x),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: format!("{} Market Street", x % 1000),
            phone: "415-555-0100".to_string(),
            genres: GenreList::new(vec![Genre::Jazz, Genre::Blues]),
            website: "https://www.example.com".to_string(),
            seeking_talent: false,
            seeking_description: None,
            image_link: None,
            facebook_link: "https://www.facebook.com/example".to_string(),
            email: format!("venue{}@example.com", x),
            connection,
        }
    }

    pub fn with_name(mut self, name: &str) -> VenueBuilder<'a> {
        self.name = name.to_string();
        self
    }

    pub fn with_location(mut self, city: &str, state: &str) -> VenueBuilder<'a> {
        self.city = city.to_string();
        self.state = state.to_string();
        self
    }

    pub fn with_genres(mut self, genres: Vec<Genre>) -> VenueBuilder<'a> {
        self.genres = GenreList::new(genres);
        self
    }

    pub fn seeking_talent(mut self, description: &str) -> VenueBuilder<'a> {
        self.seeking_talent = true;
        self.seeking_description = Some(description.to_string());
        self
    }

    pub fn with_image_link(mut self, image_link: &str) -> VenueBuilder<'a> {
        self.image_link = Some(image_link.to_string());
        self
    }

    pub fn finish(self) -> Venue {
        NewVenue {
            name: self.name,
            genres: self.genres,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            website: self.website,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            email: self.email,
        }
        .commit(self.connection)
        .unwrap()
    }
}
