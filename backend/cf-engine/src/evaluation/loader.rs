use crate::config::DataConfig;
use crate::error::{EvaluationError, Result};
use crate::models::{PreferenceStore, Rating};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Read a delimited `user, item, rating[, ...]` file.
pub fn load_ratings(path: impl AsRef<Path>, options: &DataConfig) -> Result<Vec<Rating>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let ratings = parse_ratings(file, options)?;

    info!(
        path = %path.display(),
        ratings = ratings.len(),
        binarize = options.binarize,
        "Ratings loaded"
    );

    Ok(ratings)
}

/// Parse ratings from any reader.
///
/// Fields may be quoted, blank lines are skipped and columns past the third
/// are ignored. Raw ratings below `binarize_threshold` become `0.0`, the rest
/// `1.0`, unless binarization is disabled. Non-finite ratings are rejected.
pub fn parse_ratings<R: Read>(reader: R, options: &DataConfig) -> Result<Vec<Rating>> {
    let delimiter = options.delimiter_char()?;
    if !delimiter.is_ascii() {
        return Err(EvaluationError::Configuration(format!(
            "delimiter must be a single ASCII character, got '{}'",
            delimiter
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(options.has_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut ratings = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line_number = record.position().map_or(0, |p| p.line() as usize);

        if record.iter().all(str::is_empty) {
            continue;
        }

        let (Some(user), Some(item), Some(raw)) = (record.get(0), record.get(1), record.get(2))
        else {
            return Err(EvaluationError::Parse {
                line: line_number,
                message: "expected at least 3 fields (user, item, rating)".to_string(),
            });
        };

        if user.is_empty() || item.is_empty() {
            return Err(EvaluationError::Parse {
                line: line_number,
                message: "user and item must not be empty".to_string(),
            });
        }

        let raw: f64 = raw.parse().map_err(|e| EvaluationError::Parse {
            line: line_number,
            message: format!("invalid rating '{}': {}", raw, e),
        })?;

        if !raw.is_finite() {
            return Err(EvaluationError::Parse {
                line: line_number,
                message: format!("rating must be finite, got '{}'", raw),
            });
        }

        let score = if options.binarize {
            if raw < options.binarize_threshold {
                0.0
            } else {
                1.0
            }
        } else {
            raw
        };

        ratings.push(Rating::new(user, item, score));
    }

    debug!(ratings = ratings.len(), "Ratings parsed");

    Ok(ratings)
}

/// Build the preference store; a later duplicate pair overwrites an earlier one.
pub fn to_store(ratings: &[Rating]) -> PreferenceStore<String, String> {
    ratings
        .iter()
        .map(|r| (r.user.clone(), r.item.clone(), r.score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const SAMPLE: &str = "userId\tmovieId\trating\ttimestamp\n\
                          1\t31\t2.5\t1260759144\n\
                          1\t1029\t3.0\t1260759179\n\
                          \n\
                          2\t31\t4.5\t1260759182\n";

    #[test]
    fn test_parse_binarized() {
        let ratings = parse_ratings(Cursor::new(SAMPLE), &DataConfig::default()).unwrap();

        assert_eq!(
            ratings,
            vec![
                Rating::new("1", "31", 0.0),
                Rating::new("1", "1029", 1.0),
                Rating::new("2", "31", 1.0),
            ]
        );
    }

    #[test]
    fn test_parse_raw_scores() {
        let options = DataConfig {
            binarize: false,
            ..DataConfig::default()
        };

        let ratings = parse_ratings(Cursor::new(SAMPLE), &options).unwrap();
        let scores: Vec<f64> = ratings.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![2.5, 3.0, 4.5]);
    }

    #[test]
    fn test_parse_comma_without_header() {
        let options = DataConfig {
            delimiter: "comma".to_string(),
            has_header: false,
            binarize: false,
            ..DataConfig::default()
        };

        let ratings = parse_ratings(Cursor::new("a, x, 1\nb,y,0\n"), &options).unwrap();
        assert_eq!(
            ratings,
            vec![Rating::new("a", "x", 1.0), Rating::new("b", "y", 0.0)]
        );
    }

    #[test]
    fn test_parse_errors_carry_line_number() {
        let err = parse_ratings(
            Cursor::new("user\titem\trating\n1\t2\n"),
            &DataConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EvaluationError::Parse { line: 2, .. }));

        let err = parse_ratings(
            Cursor::new("user\titem\trating\n1\t2\t3\n1\t2\tgood\n"),
            &DataConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EvaluationError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_parse_quoted_fields() {
        let options = DataConfig {
            delimiter: "comma".to_string(),
            binarize: false,
            ..DataConfig::default()
        };

        let ratings = parse_ratings(
            Cursor::new("userId,movieId,rating\n\"u1\",\"m1\",4\n\"u2\",\"m,1\",\"2.5\"\n"),
            &options,
        )
        .unwrap();

        assert_eq!(
            ratings,
            vec![Rating::new("u1", "m1", 4.0), Rating::new("u2", "m,1", 2.5)]
        );
    }

    #[test]
    fn test_non_finite_ratings_rejected() {
        for raw in ["NaN", "inf", "-inf"] {
            let input = format!("user\titem\trating\na\tx\t4\nb\tx\t{}\n", raw);

            let err = parse_ratings(Cursor::new(input.as_str()), &DataConfig::default()).unwrap_err();
            assert!(matches!(err, EvaluationError::Parse { line: 3, .. }), "{}", raw);

            let raw_scores = DataConfig {
                binarize: false,
                ..DataConfig::default()
            };
            let err = parse_ratings(Cursor::new(input.as_str()), &raw_scores).unwrap_err();
            assert!(matches!(err, EvaluationError::Parse { line: 3, .. }), "{}", raw);
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let ratings = load_ratings(file.path(), &DataConfig::default()).unwrap();
        assert_eq!(ratings.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let err = load_ratings("/definitely/not/here.tsv", &DataConfig::default()).unwrap_err();
        assert!(matches!(err, EvaluationError::Io(_)));
    }

    #[test]
    fn test_to_store_last_duplicate_wins() {
        let ratings = vec![
            Rating::new("u", "i", 0.0),
            Rating::new("u", "j", 1.0),
            Rating::new("u", "i", 1.0),
        ];

        let store = to_store(&ratings);
        assert_eq!(store.user_count(), 1);
        assert_eq!(store.rating_count(), 2);
        assert_eq!(store.score(&"u".to_string(), &"i".to_string()), Some(1.0));
    }
}
