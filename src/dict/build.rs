//! Compile driver: language resolution and whole-run orchestration.

use crate::dict::builder::TrieBuilder;
use crate::dict::encoder::write_bin;
use crate::dict::parser::parse_words_file;
use crate::dict::types::{CompileError, CompileStats, CompilerConfig};
use anyhow::{Context, Result, bail};
use globset::Glob;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const WORD_LIST_PATTERN: &str = "*_words.txt";
const WORD_LIST_SUFFIX: &str = "_words.txt";

/// Options for a whole compile run
pub struct CompileOptions {
    /// Directory holding `<language>_words.txt` files
    pub assets_dir: PathBuf,
    /// Directory `.bin` files are written to
    pub out_dir: PathBuf,
    /// Languages to compile; empty means auto-discover
    pub languages: Vec<String>,
    pub config: CompilerConfig,
    /// Write a manifest.json summarizing the run
    pub manifest: bool,
    pub silent: bool,
}

/// Discover languages from `<language>_words.txt` files in `assets_dir`,
/// sorted and deduplicated.
pub fn discover_languages(assets_dir: &Path) -> Result<Vec<String>> {
    let matcher = Glob::new(WORD_LIST_PATTERN)?.compile_matcher();
    let entries = fs::read_dir(assets_dir)
        .with_context(|| format!("Failed to read {}", assets_dir.display()))?;

    let mut langs = Vec::new();
    for entry in entries {
        let name = entry?.file_name();
        let name = name.to_string_lossy();
        if matcher.is_match(name.as_ref()) {
            if let Some(lang) = name.strip_suffix(WORD_LIST_SUFFIX) {
                if !lang.is_empty() {
                    langs.push(lang.to_string());
                }
            }
        }
    }
    langs.sort();
    langs.dedup();
    Ok(langs)
}

/// Compile one language's word list into `<language>.bin` under `out_dir`.
pub fn compile_language(
    lang: &str,
    assets_dir: &Path,
    out_dir: &Path,
    config: &CompilerConfig,
) -> Result<CompileStats> {
    let words_path = word_list_path(assets_dir, lang);
    if !words_path.exists() {
        return Err(CompileError::MissingInput(words_path).into());
    }

    let words = parse_words_file(&words_path, config.max_words)?;
    let word_count = words.len();
    let layout = TrieBuilder::from_words(&words)?;

    let out_file = out_dir.join(format!("{lang}.bin"));
    let bytes_written = write_bin(&layout, &out_file)?;

    Ok(CompileStats {
        language: lang.to_string(),
        word_count,
        node_count: layout.node_count(),
        bytes_written,
        out_file,
    })
}

/// Compile every resolved language. Word lists are checked up front so a
/// missing file aborts the run before any `.bin` is written; any per-language
/// failure afterwards still fails the whole run. Independent languages
/// compile in parallel (each compilation itself is single-threaded).
pub fn compile_all(opts: &CompileOptions) -> Result<Vec<CompileStats>> {
    if !opts.assets_dir.exists() {
        bail!("Assets directory not found: {}", opts.assets_dir.display());
    }

    let langs = if opts.languages.is_empty() {
        discover_languages(&opts.assets_dir)?
    } else {
        opts.languages.clone()
    };
    if langs.is_empty() {
        bail!(
            "No {} files found in {}",
            WORD_LIST_PATTERN,
            opts.assets_dir.display()
        );
    }

    for lang in &langs {
        let words_path = word_list_path(&opts.assets_dir, lang);
        if !words_path.exists() {
            return Err(CompileError::MissingInput(words_path).into());
        }
    }

    if !opts.silent {
        println!("Compiling languages: {}", langs.join(", "));
    }

    let progress = (!opts.silent && langs.len() > 1).then(|| {
        let pb = ProgressBar::new(langs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap(),
        );
        pb.set_message("Compiling...");
        pb
    });

    let stats = langs
        .par_iter()
        .map(|lang| {
            let result = compile_language(lang, &opts.assets_dir, &opts.out_dir, &opts.config)
                .with_context(|| format!("Failed to compile '{lang}'"));
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            result
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if opts.manifest {
        write_manifest(&opts.out_dir, &stats)?;
    }

    Ok(stats)
}

fn word_list_path(assets_dir: &Path, lang: &str) -> PathBuf {
    assets_dir.join(format!("{lang}{WORD_LIST_SUFFIX}"))
}

/// Write manifest.json describing every compiled language.
fn write_manifest(out_dir: &Path, stats: &[CompileStats]) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let path = out_dir.join("manifest.json");
    let file = fs::File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, stats)?;
    Ok(())
}
