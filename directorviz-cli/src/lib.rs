//! Bar charts of film directors from an integrated IMDB Top 1000 dataset.
//!
//! The pipeline is linear: [`dataset::load`] reads the JSON file, then either
//! [`analysis::top_directors`] ranks everyone or [`analysis::decade_breakdown`]
//! splits one director's career by decade, and [`chart::render`] draws the
//! result to an image file or the terminal.

pub mod analysis;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;

use std::path::PathBuf;
use tracing::{info, warn};

use crate::chart::Chart;

pub use config::Config;
pub use error::Error;

/// Run one invocation. Returns the written image path when an output
/// directory was configured and there was something to draw.
pub fn run(config: &Config) -> Result<Option<PathBuf>, Error> {
    info!(path = %config.data.display(), "loading director data");
    let dataset = dataset::load(&config.data)?;
    info!(
        directors = dataset.len(),
        movies = dataset.movie_count(),
        "data loaded"
    );

    let chart = match &config.director {
        Some(name) => {
            let record = dataset.find(name)?;
            info!(director = %record.name, "analyzing career by decade");
            let buckets = analysis::decade_breakdown(record);
            if buckets.is_empty() {
                warn!(director = %record.name, "no dated movies, nothing to plot");
                return Ok(None);
            }
            Chart::decades(&record.name, &buckets)
        }
        None => {
            info!(top_n = config.top_n, "ranking directors by movie count");
            let top = analysis::top_directors(&dataset.directors, config.top_n as usize);
            if top.is_empty() {
                warn!("no director has any movies, nothing to plot");
                return Ok(None);
            }
            Chart::overview(&top)
        }
    };

    let written = chart::render(&chart, config.output_dir.as_deref(), config.format)?;
    if let Some(path) = &written {
        info!(path = %path.display(), "visualization saved");
    }
    Ok(written)
}
