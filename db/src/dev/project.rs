use dev::builders::*;
use diesel::prelude::*;
use dotenv::dotenv;
use std::env;

/// Test harness owning a database connection that rolls back everything at
/// the end of the test.
pub struct TestProject {
    pub connection: PgConnection,
}

impl TestProject {
    pub fn new() -> TestProject {
        dotenv().ok();
        let database_url =
            env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be defined");
        let connection = PgConnection::establish(&database_url)
            .unwrap_or_else(|_| panic!("Could not connect to {}", database_url));
        connection
            .begin_test_transaction()
            .expect("Could not start test transaction");
        TestProject { connection }
    }

    pub fn get_connection(&self) -> &PgConnection {
        &self.connection
    }

    pub fn create_venue(&self) -> VenueBuilder {
        VenueBuilder::new(&self.connection)
    }

    pub fn create_artist(&self) -> ArtistBuilder {
        ArtistBuilder::new(&self.connection)
    }

    pub fn create_show(&self) -> ShowBuilder {
        ShowBuilder::new(&self.connection)
    }
}

impl Default for TestProject {
    fn default() -> Self {
        TestProject::new()
    }
}
