//! Colored console reporting for compile results

use crate::dict::types::CompileStats;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print one line per compiled language with its output path and size.
pub fn print_compile_report(stats: &[CompileStats]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    for s in stats {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "  \u{2713} ")?;
        stdout.reset()?;
        writeln!(
            stdout,
            "{}.bin -> {} ({:.1} KB, {} words, {} nodes)",
            s.language,
            s.out_file.display(),
            s.bytes_written as f64 / 1024.0,
            s.word_count,
            s.node_count
        )?;
    }

    Ok(())
}

/// Print a fatal error to stderr.
pub fn print_error(err: &anyhow::Error) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stderr, "error: ")?;
    stderr.reset()?;
    writeln!(stderr, "{err:#}")?;
    Ok(())
}
