use chrono::prelude::*;
use chrono::Duration;
use stagebill_db::dev::TestProject;
use stagebill_db::models::*;
use stagebill_db::utils::errors::ErrorCode;

fn pinned_now() -> NaiveDateTime {
    NaiveDate::from_ymd(2019, 6, 1).and_hms(20, 0, 0)
}

#[test]
fn commit() {
    let project = TestProject::new();
    let connection = project.get_connection();

    let mut new_artist = Artist::create("Guns N Petals", "San Francisco", "CA", "gnp@example.com");
    new_artist.genres = GenreList::new(vec![Genre::RockNRoll]);
    new_artist.seeking_venue = true;
    new_artist.seeking_description = Some("Looking for shows downtown".to_string());
    let artist = new_artist.commit(connection).unwrap();

    assert_eq!(artist.name, "Guns N Petals");
    assert_eq!(artist.genres, GenreList::new(vec![Genre::RockNRoll]));
    assert_eq!(artist.seeking_venue, true);
    assert_eq!(
        artist.seeking_description,
        Some("Looking for shows downtown".to_string())
    );
    assert_eq!(artist, Artist::find(artist.id, connection).unwrap());
}

#[test]
fn commit_with_validation_errors() {
    let project = TestProject::new();
    let mut new_artist = Artist::create("", "", "CA", "not-an-email");
    new_artist.phone = "123456".to_string();

    let result = new_artist.commit(project.get_connection());
    match result.unwrap_err().error_code {
        ErrorCode::ValidationError { errors } => {
            assert!(errors.contains_key("name"));
            assert!(errors.contains_key("city"));
            assert!(errors.contains_key("email"));
            assert!(errors.contains_key("phone"));
            assert!(errors.contains_key("genres"));
        }
        _ => panic!("Expected validation error"),
    }
}

#[test]
fn find_missing_artist_returns_no_results() {
    let project = TestProject::new();
    let error = Artist::find(-1, project.get_connection()).unwrap_err();
    assert_eq!(error.code, 2000);
    assert_eq!(error.error_code, ErrorCode::NoResults);
}

#[test]
fn all_returns_artists_in_id_order() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let first = project.create_artist().finish();
    let second = project.create_artist().finish();

    let artists = Artist::all(connection).unwrap();
    assert_eq!(artists, vec![first, second]);
}

#[test]
fn update() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let artist = project
        .create_artist()
        .seeking_venue("Available on weekends")
        .finish();

    let mut attributes = ArtistEditableAttributes::new();
    attributes.name = Some("The Wild Sax Band".to_string());
    attributes.genres = Some(GenreList::new(vec![Genre::Jazz, Genre::Classical]));
    attributes.seeking_venue = Some(false);
    attributes.seeking_description = Some(None);

    let updated = artist.update(attributes, connection).unwrap();
    assert_eq!(updated.id, artist.id);
    assert_eq!(updated.name, "The Wild Sax Band");
    assert_eq!(
        updated.genres,
        GenreList::new(vec![Genre::Jazz, Genre::Classical])
    );
    assert_eq!(updated.seeking_venue, false);
    assert_eq!(updated.seeking_description, None);
    assert_eq!(updated.city, artist.city);
}

#[test]
fn update_with_validation_errors() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let artist = project.create_artist().finish();

    let mut attributes = ArtistEditableAttributes::new();
    attributes.website = Some("not a url".to_string());

    let result = artist.update(attributes, connection);
    match result.unwrap_err().error_code {
        ErrorCode::ValidationError { errors } => {
            assert!(errors.contains_key("website"));
        }
        _ => panic!("Expected validation error"),
    }
    assert_eq!(Artist::find(artist.id, connection).unwrap(), artist);
}

#[test]
fn destroy_cascades_to_shows() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let artist = project.create_artist().finish();
    let venue = project.create_venue().finish();
    let show = project
        .create_show()
        .with_artist(&artist)
        .with_venue(&venue)
        .finish();

    artist.destroy(connection).unwrap();

    assert_eq!(Artist::find(artist.id, connection).unwrap_err().code, 2000);
    assert_eq!(Show::find(show.id, connection).unwrap_err().code, 2000);
    assert!(Venue::find(venue.id, connection).is_ok());
}

#[test]
fn search() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let now = pinned_now();

    let band = project.create_artist().with_name("The Wild Sax Band").finish();
    project.create_artist().with_name("Guns N Petals").finish();

    let results = Artist::search(Some("band".to_string()), now, connection).unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].id, band.id);

    let results = Artist::search(Some("xyz".to_string()), now, connection).unwrap();
    assert_eq!(results.count, 0);

    let results = Artist::search(None, now, connection).unwrap();
    assert_eq!(results.count, 2);
}

#[test]
fn search_counts_include_shows_starting_now() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let now = pinned_now();

    let artist = project.create_artist().with_name("The Wild Sax Band").finish();
    project
        .create_show()
        .with_artist(&artist)
        .starting_at(now)
        .finish();
    project
        .create_show()
        .with_artist(&artist)
        .starting_at(now - Duration::days(1))
        .finish();

    let results = Artist::search(Some("sax".to_string()), now, connection).unwrap();
    assert_eq!(results.data[0].num_upcoming_shows, 1);
}

#[test]
fn for_display() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let now = pinned_now();

    let artist = project.create_artist().with_name("Guns N Petals").finish();
    let venue = project
        .create_venue()
        .with_name("The Dueling Pianos Bar")
        .with_image_link("https://images.example.com/pianos.jpg")
        .finish();

    project
        .create_show()
        .with_artist(&artist)
        .with_venue(&venue)
        .starting_at(now - Duration::days(30))
        .finish();
    project
        .create_show()
        .with_artist(&artist)
        .with_venue(&venue)
        .starting_at(now + Duration::days(30))
        .finish();

    let display = Artist::for_display(artist.id, now, connection).unwrap();
    assert_eq!(display.id, artist.id);
    assert_eq!(display.name, "Guns N Petals");
    assert_eq!(display.past_shows_count, 1);
    assert_eq!(display.upcoming_shows_count, 1);

    let entry = &display.upcoming_shows[0];
    assert_eq!(entry.venue_id, venue.id);
    assert_eq!(entry.venue_name, "The Dueling Pianos Bar");
    assert_eq!(
        entry.venue_image_link,
        Some("https://images.example.com/pianos.jpg".to_string())
    );
    assert_eq!(entry.start_time, (now + Duration::days(30)).to_string());
}

#[test]
fn for_display_missing_artist_returns_no_results() {
    let project = TestProject::new();
    let error = Artist::for_display(-1, pinned_now(), project.get_connection()).unwrap_err();
    assert_eq!(error.code, 2000);
}
