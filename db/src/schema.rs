table! {
    artists (id) {
        id -> Int4,
        name -> Text,
        city -> Text,
        state -> Text,
        phone -> Text,
        genres -> Text,
        image_link -> Nullable<Text>,
        facebook_link -> Text,
        seeking_venue -> Bool,
        seeking_description -> Nullable<Text>,
        website -> Text,
        email -> Text,
    }
}

table! {
    shows (id) {
        id -> Int4,
        artist_id -> Int4,
        venue_id -> Int4,
        start_time -> Timestamp,
    }
}

table! {
    venues (id) {
        id -> Int4,
        name -> Text,
        genres -> Text,
        city -> Text,
        state -> Text,
        address -> Text,
        phone -> Text,
        website -> Text,
        seeking_talent -> Bool,
        seeking_description -> Nullable<Text>,
        image_link -> Nullable<Text>,
        facebook_link -> Text,
        email -> Text,
    }
}

joinable!(shows -> artists (artist_id));
joinable!(shows -> venues (venue_id));

allow_tables_to_appear_in_same_query!(artists, shows, venues);
