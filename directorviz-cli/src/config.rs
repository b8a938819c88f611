use clap::Parser;
use std::path::PathBuf;

use crate::chart::ImageFormat;

pub const DEFAULT_DATA_PATH: &str = "data/integrated_directors.json";
pub const DEFAULT_TOP_N: u32 = 15;

/// Command line options. Running without flags draws the overview chart.
#[derive(Debug, Clone, Parser)]
#[command(name = "directorviz", version, about = "Visualize directors of the IMDB Top 1000")]
pub struct Config {
    /// Director to break down by decade (case-insensitive); omit for the overview
    #[arg(long)]
    pub director: Option<String>,

    /// Number of directors shown in the overview
    #[arg(
        long = "top_n",
        visible_alias = "top-n",
        default_value_t = DEFAULT_TOP_N,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub top_n: u32,

    /// Path to the integrated directors JSON file
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Directory for chart images; charts are printed to the terminal when omitted
    #[arg(long = "output_dir", visible_alias = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Image format used with --output_dir
    #[arg(long, value_enum, default_value_t = ImageFormat::Png)]
    pub format: ImageFormat,
}
