pub mod schema;

use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, FormatCause};

pub use schema::{DirectorRecord, MovieEntry};

use schema::KeyedDirector;

const MAX_SUGGESTIONS: usize = 3;

/// All director records from one data file, in file order for both layouts.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub directors: Vec<DirectorRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.directors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directors.is_empty()
    }

    pub fn movie_count(&self) -> usize {
        self.directors.iter().map(DirectorRecord::movie_count).sum()
    }

    /// Case-insensitive exact match on the director name.
    pub fn find(&self, name: &str) -> Result<&DirectorRecord, Error> {
        let wanted = name.trim().to_lowercase();
        if let Some(record) = self
            .directors
            .iter()
            .find(|d| d.name.to_lowercase() == wanted)
        {
            return Ok(record);
        }

        let mut suggestions: Vec<String> = self
            .directors
            .iter()
            .filter(|d| !wanted.is_empty() && d.name.to_lowercase().contains(&wanted))
            .map(|d| d.name.clone())
            .collect();
        suggestions.sort();
        suggestions.truncate(MAX_SUGGESTIONS);

        Err(Error::NotFound {
            name: name.to_string(),
            suggestions,
        })
    }
}

/// Read and validate a director data file.
pub fn load(path: &Path) -> Result<Dataset, Error> {
    let bytes = fs::read(path).map_err(|e| Error::DataFormat {
        path: path.to_path_buf(),
        source: FormatCause::Io(e),
    })?;
    parse(&bytes, path)
}

/// Parse already-read file contents; `path` is only used in error messages.
pub fn parse(bytes: &[u8], path: &Path) -> Result<Dataset, Error> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| Error::DataFormat {
        path: path.to_path_buf(),
        source: FormatCause::Json(e),
    })?;

    let schema_error = |detail: String| Error::Schema {
        path: path.to_path_buf(),
        detail,
    };

    let directors = match value {
        Value::Array(entries) => entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                serde_json::from_value::<DirectorRecord>(entry)
                    .map_err(|e| schema_error(format!("entry {i}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?,
        Value::Object(map) => map
            .into_iter()
            .map(|(name, entry)| {
                serde_json::from_value::<KeyedDirector>(entry)
                    .map(|keyed| DirectorRecord {
                        name: name.clone(),
                        movies: keyed.movies,
                    })
                    .map_err(|e| schema_error(format!("director \"{name}\": {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            return Err(schema_error(format!(
                "expected an array or object of directors, found {}",
                json_kind(&other)
            )));
        }
    };

    validate(&directors).map_err(schema_error)?;

    Ok(Dataset { directors })
}

fn validate(directors: &[DirectorRecord]) -> Result<(), String> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (i, director) in directors.iter().enumerate() {
        if director.name.trim().is_empty() {
            return Err(format!("entry {i}: director name is empty"));
        }

        if let Some(first) = seen.insert(director.name.to_lowercase(), &director.name) {
            return Err(format!(
                "director \"{}\" appears more than once (also as \"{first}\")",
                director.name
            ));
        }

        for movie in &director.movies {
            if !movie.rating.is_finite() || !(0.0..=10.0).contains(&movie.rating) {
                return Err(format!(
                    "director \"{}\": movie \"{}\" has rating {} outside 0-10",
                    director.name, movie.title, movie.rating
                ));
            }
        }
    }

    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(json: &str) -> Result<Dataset, Error> {
        parse(json.as_bytes(), Path::new("test.json"))
    }

    const LIST: &str = r#"[
        {"name": "Christopher Nolan", "movies": [
            {"title": "Inception", "year": 2010, "rating": 8.8},
            {"title": "Memento", "year": 2000, "rating": 8.4}
        ]},
        {"director": "Akira Kurosawa", "movies": [
            {"title": "Seven Samurai", "release_year": 1954, "imdb_rating": 8.6}
        ]}
    ]"#;

    #[test]
    fn parses_array_layout_with_aliases() {
        let dataset = parse_str(LIST).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.movie_count(), 3);
        assert_eq!(dataset.directors[0].name, "Christopher Nolan");
        assert_eq!(dataset.directors[1].name, "Akira Kurosawa");
        assert_eq!(dataset.directors[1].movies[0].year, 1954);
        assert_eq!(dataset.directors[1].movies[0].rating, 8.6);
    }

    #[test]
    fn parses_keyed_layout_and_ignores_summary_fields() {
        let json = r#"{
            "Sergio Leone": {
                "count_in_top1000": 2,
                "avg_rating_top1000": 8.55,
                "decades": {"1960": {"count": 2, "avg_rating": 8.55}},
                "movies": [
                    {"title": "Il buono, il brutto, il cattivo", "year": 1966, "rating": 8.8},
                    {"title": "C'era una volta il West", "year": 1968, "rating": 8.5}
                ]
            }
        }"#;
        let dataset = parse_str(json).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.directors[0].name, "Sergio Leone");
        assert_eq!(dataset.directors[0].movie_count(), 2);
    }

    #[test]
    fn keyed_layout_keeps_file_order() {
        let json = r#"{
            "Wong Kar-wai": {"movies": []},
            "Andrei Tarkovsky": {"movies": []},
            "Fritz Lang": {"movies": []}
        }"#;
        let dataset = parse_str(json).unwrap();
        let names: Vec<&str> = dataset.directors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Wong Kar-wai", "Andrei Tarkovsky", "Fritz Lang"]);
    }

    #[test]
    fn invalid_json_is_a_data_format_error() {
        let err = parse_str("[{\"name\": ").unwrap_err();
        assert!(matches!(err, Error::DataFormat { .. }));
        assert!(err.to_string().contains("test.json"));
    }

    #[test]
    fn missing_file_is_a_data_format_error() {
        let err = load(Path::new("/definitely/not/here/directors.json")).unwrap_err();
        match err {
            Error::DataFormat { path, source: FormatCause::Io(_) } => {
                assert_eq!(path, Path::new("/definitely/not/here/directors.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_a_schema_error() {
        let json = r#"[{"name": "Sofia Coppola", "movies": [{"title": "Lost in Translation", "rating": 7.7}]}]"#;
        let err = parse_str(json).unwrap_err();
        match err {
            Error::Schema { detail, .. } => {
                assert!(detail.contains("entry 0"));
                assert!(detail.contains("year"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn scalar_top_level_is_a_schema_error() {
        let err = parse_str("42").unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
        assert!(err.to_string().contains("found a number"));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let json = r#"[{"name": "Ed Wood", "movies": [{"title": "Plan 9", "year": 1957, "rating": 11.0}]}]"#;
        let err = parse_str(json).unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
    }

    #[test]
    fn blank_name_is_rejected() {
        let json = r#"[{"name": "  ", "movies": []}]"#;
        assert!(matches!(parse_str(json).unwrap_err(), Error::Schema { .. }));
    }

    #[test]
    fn case_insensitive_duplicates_are_rejected() {
        let json = r#"[{"name": "Wong Kar-wai", "movies": []}, {"name": "wong kar-wai", "movies": []}]"#;
        let err = parse_str(json).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn find_ignores_case() {
        let dataset = parse_str(LIST).unwrap();
        let record = dataset.find("christopher NOLAN").unwrap();
        assert_eq!(record.name, "Christopher Nolan");
    }

    #[test]
    fn find_requires_whole_name() {
        let dataset = parse_str(LIST).unwrap();
        match dataset.find("nolan").unwrap_err() {
            Error::NotFound { name, suggestions } => {
                assert_eq!(name, "nolan");
                assert_eq!(suggestions, vec!["Christopher Nolan".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn find_unknown_has_no_suggestions() {
        let dataset = parse_str(LIST).unwrap();
        match dataset.find("Agnès Varda").unwrap_err() {
            Error::NotFound { suggestions, .. } => assert!(suggestions.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn average_rating_is_the_mean() {
        let dataset = parse_str(LIST).unwrap();
        let avg = dataset.directors[0].average_rating().unwrap();
        assert!((avg - 8.6).abs() < 1e-9);
    }

    #[test]
    fn average_rating_of_empty_director_is_none() {
        let record = DirectorRecord {
            name: "Nobody".to_string(),
            movies: Vec::new(),
        };
        assert_eq!(record.average_rating(), None);
    }
}
