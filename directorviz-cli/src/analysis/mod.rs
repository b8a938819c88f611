pub mod decades;
pub mod directors;

pub use decades::{DecadeBucket, decade_breakdown, decade_of};
pub use directors::{DirectorSummary, top_directors};

/// Arithmetic mean, `None` for an empty input.
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}
