use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MovieEntry {
    pub title: String,
    #[serde(alias = "release_year")]
    pub year: i32,
    #[serde(alias = "imdb_rating")]
    pub rating: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DirectorRecord {
    #[serde(alias = "director")]
    pub name: String,
    pub movies: Vec<MovieEntry>,
}

impl DirectorRecord {
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Mean rating over all movies, `None` for a director without movies.
    pub fn average_rating(&self) -> Option<f64> {
        crate::analysis::mean(self.movies.iter().map(|m| m.rating))
    }
}

/// Value of an entry in the name-keyed layout; the name comes from the key.
/// Precomputed summary keys next to `movies` are ignored.
#[derive(Debug, Deserialize)]
pub(super) struct KeyedDirector {
    pub movies: Vec<MovieEntry>,
}
