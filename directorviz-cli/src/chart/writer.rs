use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::Error;

// Anything that is not a letter, digit, underscore or hyphen
static UNSAFE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w-]+").unwrap());

/// File-name-safe form of a director name: "Bong Joon Ho" -> "Bong_Joon_Ho".
pub fn slugify(name: &str) -> String {
    let slug = UNSAFE_RUN.replace_all(name.trim(), "_");
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "director".to_string()
    } else {
        slug.to_string()
    }
}

/// Make sure `dir` exists and return the full path for `file_name` inside it.
pub fn prepare_output_path(dir: &Path, file_name: &str) -> Result<PathBuf, Error> {
    fs::create_dir_all(dir).map_err(|e| Error::Render {
        path: dir.to_path_buf(),
        detail: e.to_string(),
    })?;
    Ok(dir.join(file_name))
}
