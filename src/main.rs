mod dict;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dict::build::{CompileOptions, compile_all, discover_languages};
use dict::types::CompilerConfig;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "dictc")]
#[command(about = "Compile word lists into binary trie dictionaries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile <language>_words.txt files into <language>.bin dictionaries
    Compile {
        /// Directory containing <language>_words.txt files
        #[arg(long, default_value = ".")]
        assets: PathBuf,

        /// Output directory for .bin files (defaults to the assets dir)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Languages to compile (default: all *_words.txt in the assets dir)
        #[arg(long, num_args = 1..)]
        languages: Vec<String>,

        /// Maximum accepted entries per word list
        #[arg(long, default_value_t = 50_000)]
        max_words: usize,

        /// Write manifest.json alongside the .bin files
        #[arg(long)]
        manifest: bool,
    },
    /// List languages discoverable in an assets directory
    List {
        /// Directory containing <language>_words.txt files
        #[arg(default_value = ".")]
        assets: PathBuf,
    },
    /// Show statistics for a compiled .bin dictionary
    Inspect {
        /// Path to a .bin dictionary file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = output::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Compile {
            assets,
            out,
            languages,
            max_words,
            manifest,
        } => {
            let out_dir = out.unwrap_or_else(|| assets.clone());
            let opts = CompileOptions {
                assets_dir: assets,
                out_dir,
                languages,
                config: CompilerConfig { max_words },
                manifest,
                silent: false,
            };
            let stats = compile_all(&opts)?;
            output::print_compile_report(&stats)?;
        }
        Commands::List { assets } => {
            let langs = discover_languages(&assets)?;
            if langs.is_empty() {
                println!("No *_words.txt files found in {}", assets.display());
            } else {
                for lang in langs {
                    println!("{lang}");
                }
            }
        }
        Commands::Inspect { file } => {
            dict::stats::show_stats(&file)?;
        }
    }
    Ok(())
}
