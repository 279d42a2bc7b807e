use diesel::prelude::*;
use models::*;
use rand::prelude::*;

pub struct ArtistBuilder<'a> {
    name: String,
    city: String,
    state: String,
    phone: String,
    genres: GenreList,
    image_link: Option<String>,
    facebook_link: String,
    seeking_venue: bool,
    seeking_description: Option<String>,
    website: String,
    email: String,
    connection: &'a PgConnection,
}

impl<'a> ArtistBuilder<'a> {
    pub fn new(connection: &'a PgConnection) -> ArtistBuilder<'a> {
        let x: u32 = random();
        ArtistBuilder {
            name: format!("Artist {}", x),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "415-555-0101".to_string(),
            genres: GenreList::new(vec![Genre::RockNRoll]),
            image_link: None,
            facebook_link: "https://www.facebook.com/example".to_string(),
            seeking_venue: false,
            seeking_description: None,
            website: "https://www.example.com".to_string(),
            email: format!("artist{}@example.com", x),
            connection,
        }
    }

    pub fn with_name(mut self, name: &str) -> ArtistBuilder<'a> {
        self.name = name.to_string();
        self
    }

    pub fn with_location(mut self, city: &str, state: &str) -> ArtistBuilder<'a> {
        self.city = city.to_string();
        self.state = state.to_string();
        self
    }

    pub fn with_genres(mut self, genres: Vec<Genre>) -> ArtistBuilder<'a> {
        self.genres = GenreList::new(genres);
        self
    }

    pub fn seeking_venue(mut self, description: &str) -> ArtistBuilder<'a> {
        self.seeking_venue = true;
        self.seeking_description = Some(description.to_string());
        self
    }

    pub fn with_image_link(mut self, image_link: &str) -> ArtistBuilder<'a> {
        self.image_link = Some(image_link.to_string());
        self
    }

    pub fn finish(self) -> Artist {
        NewArtist {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: self.genres,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
            website: self.website,
            email: self.email,
        }
        .commit(self.connection)
        .unwrap()
    }
}
