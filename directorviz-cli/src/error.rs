//! Error types shared by every stage of the pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run. None of these are retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The data file is missing, unreadable, or not valid JSON.
    #[error("cannot load data file {}: {source}", .path.display())]
    DataFormat {
        path: PathBuf,
        #[source]
        source: FormatCause,
    },

    /// The data file is valid JSON but does not describe directors and movies.
    #[error("data file {} does not match the director schema: {detail}", .path.display())]
    Schema { path: PathBuf, detail: String },

    /// The requested director has no record in the dataset.
    #[error("director \"{name}\" was not found in the dataset{}", suggestion_hint(.suggestions))]
    NotFound {
        name: String,
        suggestions: Vec<String>,
    },

    /// The chart could not be written.
    #[error("cannot write chart to {}: {detail}", .path.display())]
    Render { path: PathBuf, detail: String },
}

#[derive(Debug, Error)]
pub enum FormatCause {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn suggestion_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}
