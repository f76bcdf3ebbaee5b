//! Word-list parsing.
//!
//! Lines are `word[<sep>frequency]` with tab, space, and comma as equivalent
//! separators. Blank lines and `#` comments are skipped. A frequency token is
//! honored only if it is purely numeric; otherwise one is synthesized from the
//! line's processing-order index. All frequencies clamp to [0,255].

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Read and parse a word-list file into a word -> frequency table.
pub fn parse_words_file(path: &Path, max_words: usize) -> Result<FxHashMap<String, u8>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parse_words(&text, max_words))
}

/// Parse word-list text. Accepts at most `max_words` entries; lines past the
/// cap are ignored. Later occurrences of a word overwrite earlier ones.
pub fn parse_words(text: &str, max_words: usize) -> FxHashMap<String, u8> {
    let mut words = FxHashMap::default();
    let mut count = 0usize;

    for raw in text.lines() {
        if count >= max_words {
            break;
        }
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split(is_separator).filter(|f| !f.is_empty());
        let Some(word) = fields.next() else {
            continue;
        };
        let freq = match fields.next() {
            Some(tok) if is_numeric(tok) => parse_saturating(tok),
            // Missing or non-numeric frequency: synthesize from the entry's
            // processing order (always clamps to 255 below).
            _ => 1000 + count as u64,
        };

        words.insert(word.to_string(), clamp_freq(freq));
        count += 1;
    }

    words
}

fn is_separator(c: char) -> bool {
    matches!(c, '\t' | ' ' | ',')
}

/// A frequency token counts as numeric only if every character is an ASCII digit.
fn is_numeric(tok: &str) -> bool {
    !tok.is_empty() && tok.chars().all(|c| c.is_ascii_digit())
}

/// All-digit tokens too large for u64 still clamp to 255, so they saturate
/// rather than fall back to a synthesized frequency.
fn parse_saturating(tok: &str) -> u64 {
    tok.parse().unwrap_or(u64::MAX)
}

fn clamp_freq(freq: u64) -> u8 {
    freq.min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let words = parse_words("# header\n\n   \ncat 50\n# trailing\n", 100);
        assert_eq!(words.len(), 1);
        assert_eq!(words["cat"], 50);
    }

    #[test]
    fn test_separator_variants() {
        let words = parse_words("tabbed\t12\nspaced 34\ncomma,56\nmixed,\t 78\n", 100);
        assert_eq!(words["tabbed"], 12);
        assert_eq!(words["spaced"], 34);
        assert_eq!(words["comma"], 56);
        assert_eq!(words["mixed"], 78);
    }

    #[test]
    fn test_synthesized_frequency_clamps_to_255() {
        // Synthesized frequencies start at 1000 and always clamp.
        let words = parse_words("noweight\nnonnumeric 12a\n", 100);
        assert_eq!(words["noweight"], 255);
        assert_eq!(words["nonnumeric"], 255);
    }

    #[test]
    fn test_numeric_frequency_clamps() {
        let words = parse_words("foo, 9999\nbar 255\nbaz 0\nhuge 99999999999999999999999\n", 100);
        assert_eq!(words["foo"], 255);
        assert_eq!(words["bar"], 255);
        assert_eq!(words["baz"], 0);
        assert_eq!(words["huge"], 255);
    }

    #[test]
    fn test_entry_cap_counts_accepted_lines_only() {
        let words = parse_words("# comment\na 1\nb 2\nc 3\n", 2);
        assert_eq!(words.len(), 2);
        assert!(words.contains_key("a"));
        assert!(words.contains_key("b"));
        assert!(!words.contains_key("c"));
    }

    #[test]
    fn test_last_write_wins() {
        let words = parse_words("dup 1\ndup 2\n", 100);
        assert_eq!(words.len(), 1);
        assert_eq!(words["dup"], 2);
    }
}
