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
    let artist = project.create_artist().finish();
    let venue = project.create_venue().finish();
    let start_time = pinned_now() + Duration::days(3);

    let show = Show::create(artist.id, venue.id, start_time)
        .commit(connection)
        .unwrap();

    assert_eq!(show.artist_id, artist.id);
    assert_eq!(show.venue_id, venue.id);
    assert_eq!(show.start_time, start_time);
    assert_eq!(show, Show::find(show.id, connection).unwrap());
}

#[test]
fn commit_with_dangling_references_fails() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let artist = project.create_artist().finish();

    let result = Show::create(artist.id, -1, pinned_now()).commit(connection);
    let error = result.unwrap_err();
    assert_eq!(error.code, 7300);
    assert_eq!(error.error_code, ErrorCode::ForeignKeyError);

    // The failed insert left nothing behind
    assert!(Show::all(connection).unwrap().is_empty());
}

#[test]
fn find_missing_show_returns_no_results() {
    let project = TestProject::new();
    let error = Show::find(-1, project.get_connection()).unwrap_err();
    assert_eq!(error.code, 2000);
    assert_eq!(error.error_code, ErrorCode::NoResults);
}

#[test]
fn all_joins_venue_and_artist_names() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let now = pinned_now();

    let artist = project
        .create_artist()
        .with_name("The Wild Sax Band")
        .with_image_link("https://images.example.com/sax.jpg")
        .finish();
    let venue = project.create_venue().with_name("The Musical Hop").finish();

    let later = project
        .create_show()
        .with_artist(&artist)
        .with_venue(&venue)
        .starting_at(now + Duration::days(2))
        .finish();
    let earlier = project
        .create_show()
        .with_artist(&artist)
        .with_venue(&venue)
        .starting_at(now + Duration::days(1))
        .finish();

    let shows = Show::all(connection).unwrap();
    assert_eq!(shows.len(), 2);

    // Earliest first, regardless of insertion order
    assert_eq!(shows[0].start_time, earlier.start_time.to_string());
    assert_eq!(shows[1].start_time, later.start_time.to_string());

    assert_eq!(shows[0].venue_id, venue.id);
    assert_eq!(shows[0].venue_name, "The Musical Hop");
    assert_eq!(shows[0].artist_id, artist.id);
    assert_eq!(shows[0].artist_name, "The Wild Sax Band");
    assert_eq!(
        shows[0].artist_image_link,
        Some("https://images.example.com/sax.jpg".to_string())
    );
}

#[test]
fn for_venue_and_for_artist() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let now = pinned_now();

    let artist = project.create_artist().finish();
    let other_artist = project.create_artist().finish();
    let venue = project.create_venue().finish();
    let other_venue = project.create_venue().finish();

    let show = project
        .create_show()
        .with_artist(&artist)
        .with_venue(&venue)
        .starting_at(now)
        .finish();
    project
        .create_show()
        .with_artist(&other_artist)
        .with_venue(&other_venue)
        .starting_at(now)
        .finish();

    let venue_shows = Show::for_venue(venue.id, connection).unwrap();
    assert_eq!(venue_shows.len(), 1);
    assert_eq!(venue_shows[0].0, show);
    assert_eq!(venue_shows[0].1, artist);

    let artist_shows = Show::for_artist(artist.id, connection).unwrap();
    assert_eq!(artist_shows.len(), 1);
    assert_eq!(artist_shows[0].0, show);
    assert_eq!(artist_shows[0].1, venue);
}

#[test]
fn upcoming_counts_boundaries_differ_at_now() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let now = pinned_now();

    let venue = project.create_venue().finish();
    project.create_show().with_venue(&venue).starting_at(now).finish();

    let counts =
        Show::upcoming_counts_for_venues(&[venue.id], now, UpcomingBoundary::AfterNow, connection)
            .unwrap();
    assert_eq!(counts.get(&venue.id).cloned().unwrap_or(0), 0);

    let counts = Show::upcoming_counts_for_venues(
        &[venue.id],
        now,
        UpcomingBoundary::NowOrLater,
        connection,
    )
    .unwrap();
    assert_eq!(counts.get(&venue.id).cloned(), Some(1));
}

#[test]
fn upcoming_counts_group_per_profile() {
    let project = TestProject::new();
    let connection = project.get_connection();
    let now = pinned_now();

    let busy = project.create_artist().finish();
    let idle = project.create_artist().finish();
    let venue = project.create_venue().finish();

    for days in 1..4 {
        project
            .create_show()
            .with_artist(&busy)
            .with_venue(&venue)
            .starting_at(now + Duration::days(days))
            .finish();
    }
    project
        .create_show()
        .with_artist(&busy)
        .with_venue(&venue)
        .starting_at(now - Duration::days(1))
        .finish();

    let counts = Show::upcoming_counts_for_artists(
        &[busy.id, idle.id],
        now,
        UpcomingBoundary::AfterNow,
        connection,
    )
    .unwrap();
    assert_eq!(counts.get(&busy.id).cloned(), Some(3));
    assert_eq!(counts.get(&idle.id).cloned(), None);
}
