/// Envelope returned by the name searches: the matching summaries plus the
/// total number of matches.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn from_data(data: Vec<T>) -> SearchResults<T> {
        SearchResults {
            count: data.len(),
            data,
        }
    }
}

#[test]
fn from_data_counts_matches() {
    let results = SearchResults::from_data(vec!["a", "b", "c"]);
    assert_eq!(results.count, 3);

    let empty: SearchResults<&str> = SearchResults::from_data(vec![]);
    assert_eq!(empty.count, 0);
}
