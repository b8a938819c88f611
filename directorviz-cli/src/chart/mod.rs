pub mod image;
pub mod terminal;
pub mod writer;

use clap::ValueEnum;
use std::io;
use std::path::{Path, PathBuf};

use crate::analysis::{DecadeBucket, DirectorSummary};
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Directors ranked by movie count, rating written above each bar.
    Overview,
    /// One director's decades, rating drawn as a line on a second axis.
    Decades,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: usize,
    pub avg_rating: f64,
}

/// Everything a backend needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub x_desc: &'static str,
    pub bars: Vec<Bar>,
    file_stem: String,
}

impl Chart {
    pub fn overview(directors: &[DirectorSummary]) -> Self {
        Chart {
            kind: ChartKind::Overview,
            title: "Top Directors by Number of Movies in IMDB Top 1000".to_string(),
            x_desc: "Director",
            bars: directors
                .iter()
                .map(|d| Bar {
                    label: d.name.clone(),
                    count: d.movie_count,
                    avg_rating: d.avg_rating,
                })
                .collect(),
            file_stem: "top_directors".to_string(),
        }
    }

    pub fn decades(director: &str, buckets: &[DecadeBucket]) -> Self {
        Chart {
            kind: ChartKind::Decades,
            title: format!("{director}: Movies and Ratings by Decade"),
            x_desc: "Decade",
            bars: buckets
                .iter()
                .map(|b| Bar {
                    label: b.label(),
                    count: b.movie_count,
                    avg_rating: b.avg_rating,
                })
                .collect(),
            file_stem: format!("{}_decades", writer::slugify(director)),
        }
    }

    pub fn file_name(&self, format: ImageFormat) -> String {
        format!("{}.{}", self.file_stem, format.extension())
    }

    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|b| b.count).max().unwrap_or(0)
    }
}

/// Draw `chart` into `output_dir` as an image, or show it on stdout when no
/// directory is given. Returns the path of the written file, if any.
pub fn render(
    chart: &Chart,
    output_dir: Option<&Path>,
    format: ImageFormat,
) -> Result<Option<PathBuf>, Error> {
    match output_dir {
        Some(dir) => {
            let path = writer::prepare_output_path(dir, &chart.file_name(format))?;
            image::save(chart, &path, format).map_err(|e| Error::Render {
                path: path.clone(),
                detail: e.to_string(),
            })?;
            Ok(Some(path))
        }
        None => {
            let stdout = io::stdout();
            terminal::display(chart, &mut stdout.lock()).map_err(|e| Error::Render {
                path: PathBuf::from("<stdout>"),
                detail: e.to_string(),
            })?;
            Ok(None)
        }
    }
}
