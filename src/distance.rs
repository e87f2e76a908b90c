use crate::Error;
use finl_unicode::categories::{CharacterCategories, MinorCategory};

/// Cost added when the source position runs ahead of the target position.
const SOURCE_AHEAD: f64 = 2.0;
/// Cost added when the target position runs ahead of the source position.
const TARGET_AHEAD: f64 = 3.0;
/// Substitution between two all-digit tokens.
const DIGIT_SUBSTITUTION: f64 = 0.5;
/// Substitution between two single punctuation tokens.
const PUNCTUATION_SUBSTITUTION: f64 = 0.1;
/// Substitution involving a token with non-ASCII content.
const NON_ASCII_SUBSTITUTION: f64 = 4.0;
/// Substitution between ordinary tokens.
const DEFAULT_SUBSTITUTION: f64 = 1.3;

/// Scores the dissimilarity of two token sequences, rounded to one decimal
/// place. Lower is more similar; identical sequences of two or more tokens
/// score `0.0`.
///
/// This is a weighted edit distance over a cost table whose first row and
/// column are real token positions rather than a sentinel border: base costs
/// grow as `3.0 * i` along the target axis and `2.0 * j` along the source
/// axis. Away from the final cell, mismatches cost `2.0` when the source
/// position is ahead of the target position and `3.0` when it is behind; on
/// the diagonal and at the final cell the cost depends on the character class
/// of the two tokens. The result is **not** symmetric and is not a metric;
/// treat it as a similarity heuristic.
///
/// Both sequences must be non-empty or `Error::InvalidInput` is returned.
/// Single-token sequences are accepted and resolve entirely within the base
/// row or column.
pub fn edit_distance<S: AsRef<str>>(target: &[S], source: &[S]) -> Result<f64, Error> {
    if target.is_empty() || source.is_empty() {
        return Err(Error::InvalidInput);
    }

    let m = target.len();
    let n = source.len();
    let mut grid = vec![0.0f64; n * m];
    for i in 1..m {
        grid[i] = 3.0 * i as f64;
    }
    for j in 1..n {
        grid[j * m] = 2.0 * j as f64;
    }

    for j in 1..n {
        for i in 1..m {
            let left = grid[j * m + i - 1];
            let upper = grid[(j - 1) * m + i];
            let diagonal = grid[(j - 1) * m + i - 1];
            let minimum = left.min(upper).min(diagonal);

            let source_token = source[j].as_ref();
            let target_token = target[i].as_ref();
            grid[j * m + i] = if source_token == target_token {
                minimum
            } else if j < n - 1 || i < m - 1 {
                if j > i {
                    minimum + SOURCE_AHEAD
                } else if j < i {
                    minimum + TARGET_AHEAD
                } else {
                    minimum + substitution_cost(source_token, target_token)
                }
            } else {
                minimum + substitution_cost(source_token, target_token)
            };
        }
    }

    Ok(round_tenth(grid[(n - 1) * m + m - 1]))
}

fn substitution_cost(source_token: &str, target_token: &str) -> f64 {
    if is_digits(source_token) && is_digits(target_token) {
        DIGIT_SUBSTITUTION
    } else if is_punctuation(source_token) && is_punctuation(target_token) {
        PUNCTUATION_SUBSTITUTION
    } else if !source_token.is_ascii() || !target_token.is_ascii() {
        NON_ASCII_SUBSTITUTION
    } else {
        DEFAULT_SUBSTITUTION
    }
}

fn is_digits(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| matches!(c.get_minor_category(), MinorCategory::Nd))
}

fn is_punctuation(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_ascii_punctuation()
    )
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
