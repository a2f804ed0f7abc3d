//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Load words from a file, one word per line
///
/// Blank lines and lines starting with `#` are skipped. Invalid entries are
/// skipped with a warning rather than failing the whole list; an empty result
/// is rejected later when the [`WordList`](super::WordList) is built.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use sutom_daily::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert string slices to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use sutom_daily::wordlists::loader::words_from_slice;
/// use sutom_daily::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<Word> {
    words_from_lines(slice.iter().map(AsRef::as_ref))
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!(entry = line, %err, "skipping invalid word list entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["python", "LIMACE", " piment "]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "PYTHON");
        assert_eq!(words[1].text(), "LIMACE");
        assert_eq!(words[2].text(), "PIMENT");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["PYTHON", "ÉCOLE", "", "C4MION", "ORANGE"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "PYTHON");
        assert_eq!(words[1].text(), "ORANGE");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_comments_and_blanks() {
        let path = std::env::temp_dir().join(format!("sutom-words-{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "# daily words\nTIGRES\n\n  camion\n").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["TIGRES", "CAMION"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }
}
