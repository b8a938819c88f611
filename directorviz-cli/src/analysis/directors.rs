use std::cmp::Ordering;

use crate::dataset::DirectorRecord;

/// One row of the overview ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorSummary {
    pub name: String,
    pub movie_count: usize,
    pub avg_rating: f64,
}

/// Rank directors by movie count and keep the first `n`.
///
/// Ties on count are broken by average rating (higher first), then by name so
/// the ranking is fully deterministic. Directors without movies have no
/// average and are left out.
pub fn top_directors(records: &[DirectorRecord], n: usize) -> Vec<DirectorSummary> {
    if n == 0 {
        return Vec::new();
    }

    let mut summaries: Vec<DirectorSummary> = records
        .iter()
        .filter_map(|record| {
            let avg_rating = record.average_rating()?;
            Some(DirectorSummary {
                name: record.name.clone(),
                movie_count: record.movie_count(),
                avg_rating,
            })
        })
        .collect();

    summaries.sort_by(ranking);
    summaries.truncate(n);
    summaries
}

fn ranking(a: &DirectorSummary, b: &DirectorSummary) -> Ordering {
    b.movie_count
        .cmp(&a.movie_count)
        .then_with(|| b.avg_rating.total_cmp(&a.avg_rating))
        .then_with(|| a.name.cmp(&b.name))
}
