//! Word list loading utilities
//!
//! Secrets come either from the embedded list or from a newline-delimited
//! file. Lines that are not valid words of the requested length are skipped.

use crate::core::Word;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Load words of exactly `length` letters from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/secrets.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;

    let words = words_from_lines(content.lines(), length);
    debug!(
        "Loaded {} words of length {length} from {}",
        words.len(),
        path.display()
    );
    Ok(words)
}

/// Convert a string slice to words of exactly `length` letters
///
/// # Examples
/// ```
/// use word_game::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"], 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    words_from_lines(slice.iter().copied(), length)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, length: usize) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::with_length(line, length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"], 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", " plate "], 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "PLATE");
    }

    #[test]
    fn words_from_slice_other_length() {
        let words = words_from_slice(&["crane", "moon", "star"], 4);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("word_game_loader_{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "crane\n\nslate\nnope!\nwords").unwrap();
        }

        let words = load_from_file(&path, 5).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "SLATE", "WORDS"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let err = load_from_file("/definitely/not/here.txt", 5).unwrap_err();
        assert!(err.to_string().contains("Failed to read word list"));
    }
}
