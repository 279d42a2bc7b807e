use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use models::enums::Genre;
use serde_json;
use std::io::Write;

/// The ordered list of genre tags stored on both venues and artists. It is
/// persisted as a JSON array of genre labels in a text column; both tables
/// use the identical encoding. Decoding rejects labels outside the genre
/// vocabulary.
#[derive(AsExpression, Clone, Debug, Default, Deserialize, FromSqlRow, PartialEq, Serialize)]
#[sql_type = "Text"]
pub struct GenreList(pub Vec<Genre>);

impl GenreList {
    pub fn new(genres: Vec<Genre>) -> GenreList {
        GenreList(genres)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The text form written to the genres column.
    pub fn to_stored(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }

    /// Parses the stored text form, failing on labels that are not part of
    /// the genre vocabulary.
    pub fn from_stored(raw: &str) -> serde_json::Result<GenreList> {
        Ok(GenreList(serde_json::from_str(raw)?))
    }
}

impl From<Vec<Genre>> for GenreList {
    fn from(genres: Vec<Genre>) -> Self {
        GenreList(genres)
    }
}

impl ToSql<Text, Pg> for GenreList {
    fn to_sql<W: Write>(&self, out: &mut Output<W, Pg>) -> serialize::Result {
        let encoded = self.to_stored()?;
        out.write_all(encoded.as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Text, Pg> for GenreList {
    fn from_sql(bytes: Option<&[u8]>) -> deserialize::Result<GenreList> {
        let raw = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        Ok(GenreList::from_stored(&raw)?)
    }
}
