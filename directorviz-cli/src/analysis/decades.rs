use std::collections::BTreeMap;

use crate::dataset::DirectorRecord;

/// Movies of one director released within one decade.
#[derive(Debug, Clone, PartialEq)]
pub struct DecadeBucket {
    /// First year of the decade, e.g. 1990.
    pub decade: i32,
    pub movie_count: usize,
    pub avg_rating: f64,
}

impl DecadeBucket {
    pub fn label(&self) -> String {
        format!("{}s", self.decade)
    }
}

pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Group a director's movies by decade, oldest decade first.
///
/// Only decades that contain at least one movie are returned. Movies with a
/// non-positive year carry no release date and are skipped.
pub fn decade_breakdown(record: &DirectorRecord) -> Vec<DecadeBucket> {
    let mut totals: BTreeMap<i32, (usize, f64)> = BTreeMap::new();

    for movie in record.movies.iter().filter(|m| m.year > 0) {
        let entry = totals.entry(decade_of(movie.year)).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += movie.rating;
    }

    totals
        .into_iter()
        .map(|(decade, (movie_count, rating_sum))| DecadeBucket {
            decade,
            movie_count,
            avg_rating: rating_sum / movie_count as f64,
        })
        .collect()
}
