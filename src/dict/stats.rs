use crate::dict::reader::TrieReader;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Print a summary of a compiled dictionary file.
pub fn show_stats(path: &Path) -> Result<()> {
    let buf = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let reader = TrieReader::new(&buf)?;
    let mut words = reader.words()?;
    let longest = words.iter().map(|(w, _)| w.chars().count()).max().unwrap_or(0);

    println!("Dictionary Statistics");
    println!("=====================");
    println!();
    println!("File:             {}", path.display());
    println!("File size:        {}", format_size(buf.len() as u64));
    println!("Node records:     {}", reader.node_count());
    println!("Stored words:     {}", words.len());
    println!("Longest word:     {} chars", longest);

    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    println!();
    println!("Top entries by frequency:");
    for (word, freq) in words.iter().take(10) {
        println!("  {:20} {}", word, freq);
    }
    if words.len() > 10 {
        println!("  ... and {} more", words.len() - 10);
    }

    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
