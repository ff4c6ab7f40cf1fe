//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum as _;
use console::{Term, measure_text_width};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins; `output.format` from config fills in for `auto`.
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };
        let resolved_format = requested.resolve(io::stdout().is_terminal());

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }
    // ── Public write methods ───────────────────────────────────────────────

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Note block: `! [NOTE] <msg>`.
    pub fn note(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!(" ! [NOTE] {msg}")
        } else {
            format!(" {} {}", "! [NOTE]".yellow(), msg)
        };
        self.term.write_line(&line)
    }

    /// Payload output (rendered sources, listings).  Never suppressed:
    /// `--quiet` silences chatter, not the thing the user asked for.
    pub fn emit(&self, text: &str) -> io::Result<()> {
        self.term.write_str(text)?;
        if !text.ends_with('\n') {
            self.term.write_line("")?;
        }
        Ok(())
    }

    /// Pretty-printed JSON document on stdout.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// Boxed table with a header row.
    pub fn table(&self, headers: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        for line in render_table(headers, rows, !self.no_color) {
            self.term.write_line(&line)?;
        }
        Ok(())
    }

    /// Progress bar for `len` steps; hidden unless a human is watching.
    pub fn progress_bar(&self, len: u64) -> ProgressBar {
        if self.quiet || self.resolved_format != OutputFormat::Human || !self.term.is_term() {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}") {
            bar.set_style(style.progress_chars("=> "));
        }
        bar
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// Lay out a `+---+` boxed table.  Widths are measured without ANSI codes.
fn render_table(headers: &[&str], rows: &[Vec<String>], color: bool) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(measure_text_width(cell));
            }
        }
    }

    let border = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );
    let line = |cells: Vec<String>| {
        let padded: Vec<String> = cells
            .into_iter()
            .zip(&widths)
            .map(|(cell, w)| {
                let pad = w.saturating_sub(measure_text_width(&cell));
                format!(" {cell}{} ", " ".repeat(pad))
            })
            .collect();
        format!("|{}|", padded.join("|"))
    };

    let header_cells = headers
        .iter()
        .map(|h| {
            if color {
                h.green().to_string()
            } else {
                (*h).to_owned()
            }
        })
        .collect();

    let mut out = vec![border.clone(), line(header_cells), border.clone()];
    out.extend(rows.iter().map(|row| line(row.clone())));
    out.push(border);
    out
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: OutputFormat::Plain, // avoid TTY detection in tests
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn table_pads_columns_to_widest_cell() {
        let rows = vec![
            vec!["src/A.php".to_string(), "\\App\\A".to_string()],
            vec!["src/Longer.php".to_string(), "\\App\\Longer".to_string()],
        ];
        let lines = render_table(&["path", "class"], &rows, false);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "+----------------+-------------+");
        assert_eq!(lines[1], "| path           | class       |");
        assert_eq!(lines[3], "| src/A.php      | \\App\\A      |");
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn colored_header_keeps_alignment() {
        let rows = vec![vec!["x".to_string()]];
        let lines = render_table(&["path"], &rows, true);
        assert_eq!(measure_text_width(&lines[1]), measure_text_width(&lines[0]));
    }

    #[test]
    fn progress_bar_hidden_when_not_human() {
        let out = make_manager(false, true);
        assert!(out.progress_bar(13).is_hidden());
    }

    #[test]
    fn config_format_fills_in_for_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        };
        let mut config = AppConfig::default();
        config.output.format = "json".into();
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Json);
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(false, false);
        assert_eq!(out.format(), OutputFormat::Plain);
    }
}
