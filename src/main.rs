//! vellum - Markdown rendering and version diffing for document workspaces

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use vellum::export::{self, html_document, print_document};
use vellum::{DiffStats, ExportFormat, Result, diff, format_diff_report, render};

#[derive(Parser)]
#[command(name = "vellum")]
#[command(version, about = "Markdown rendering and version diffing", long_about = None)]
#[command(after_help = "EXAMPLES:
    vellum render notes.md -o notes.html      Render to a standalone HTML document
    vellum render notes.md --fragment         Print the bare HTML fragment
    vellum diff draft-v1.md draft-v2.md       Annotated line diff to stdout
    vellum diff a.md b.md --json              Diff records as JSON
    vellum export notes.md notes.txt          Convert by output extension")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Suppress non-essential messages
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render a Markdown file to HTML
    Render {
        /// Input Markdown file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Document title (defaults to the input file stem)
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        /// Emit the bare HTML fragment instead of a complete document
        #[arg(long, conflicts_with = "print")]
        fragment: bool,

        /// Emit the print-formatted view used for PDF export
        #[arg(long)]
        print: bool,
    },

    /// Compare two files line by line
    Diff {
        /// The older version
        #[arg(value_name = "OLD")]
        old: PathBuf,

        /// The newer version
        #[arg(value_name = "NEW")]
        new: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Emit diff records as JSON instead of the annotated report
        #[arg(long)]
        json: bool,
    },

    /// Convert a Markdown file by output extension (.md, .html, .txt)
    Export {
        /// Input Markdown file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file; its extension selects the format
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render {
            input,
            output,
            title,
            fragment,
            print,
        } => run_render(&input, output.as_deref(), title, fragment, print, cli.quiet),
        Command::Diff {
            old,
            new,
            output,
            json,
        } => run_diff(&old, &new, output.as_deref(), json, cli.quiet),
        Command::Export { input, output } => run_export(&input, &output, cli.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_render(
    input: &Path,
    output: Option<&Path>,
    title: Option<String>,
    fragment: bool,
    print: bool,
    quiet: bool,
) -> Result<()> {
    let source = fs::read_to_string(input)?;
    let title = title.unwrap_or_else(|| title_from_path(input));

    let html = if fragment {
        render(&source)
    } else if print {
        print_document(&title, &source)
    } else {
        html_document(&title, &source)
    };

    write_or_print(output, html.as_bytes(), quiet)
}

fn run_diff(
    old: &Path,
    new: &Path,
    output: Option<&Path>,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let old_text = fs::read_to_string(old)?;
    let new_text = fs::read_to_string(new)?;

    let lines = diff(&old_text, &new_text);
    let body = if json {
        let mut body = serde_json::to_string_pretty(&lines)?;
        body.push('\n');
        body
    } else {
        format_diff_report(&lines)
    };

    write_or_print(output, body.as_bytes(), quiet)?;

    if !quiet {
        let stats = DiffStats::from_lines(&lines);
        eprintln!(
            "{} lines: +{} -{} ~{} ={}",
            stats.total, stats.added, stats.removed, stats.modified, stats.unchanged
        );
    }

    Ok(())
}

fn run_export(input: &Path, output: &Path, quiet: bool) -> Result<()> {
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let format = ExportFormat::from_extension(ext)?;

    let source = fs::read_to_string(input)?;
    let title = title_from_path(input);
    let file = export::export_source(format, &title, &source);

    fs::write(output, &file.bytes)?;
    if !quiet {
        println!(
            "{} -> {} ({})",
            input.display(),
            output.display(),
            file.mime
        );
    }

    Ok(())
}

/// Title for documents rendered without an explicit `--title`.
fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string()
}

fn write_or_print(output: Option<&Path>, bytes: &[u8], quiet: bool) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, bytes)?;
            if !quiet {
                println!("Wrote {}", path.display());
            }
        }
        None => {
            use std::io::Write;
            std::io::stdout().write_all(bytes)?;
        }
    }
    Ok(())
}
