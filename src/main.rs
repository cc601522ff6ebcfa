//! mdcanvas - Entry Point

use clap::{Parser, ValueEnum};
use mdcanvas::config::{self, CliOverrides};
use mdcanvas::model::error::AppError;
use mdcanvas::page::{Page, PageEvent};
use mdcanvas::render::{render_layout, CommandRecorder};
use mdcanvas::source::FileSource;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable command per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// mdcanvas - lay out a markdown document for a zoomable, scrollable canvas
#[derive(Parser, Debug)]
#[command(name = "mdcanvas")]
#[command(version)]
#[command(about = "Lay out a markdown document and print the draw commands for one viewport")]
pub struct Args {
    /// Markdown file to load (defaults to README.md)
    pub file: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Zoom wheel delta; repeatable, negative zooms in
    #[arg(long = "zoom-delta", allow_negative_numbers = true)]
    pub zoom_delta: Vec<f64>,

    /// Scroll wheel delta in pixels; repeatable, negative scrolls up
    #[arg(long = "scroll-delta", allow_negative_numbers = true)]
    pub scroll_delta: Vec<f64>,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the full layout instead of the visible frame
    #[arg(long)]
    pub layout: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            document: self.file.clone(),
            width: self.width,
            height: self.height,
        }
    }

    /// Zoom signals first, then scroll signals, each in command-line order.
    fn signals(&self) -> Vec<PageEvent> {
        let zooms = self
            .zoom_delta
            .iter()
            .map(|&delta| PageEvent::Zoom { delta });
        let scrolls = self
            .scroll_delta
            .iter()
            .map(|&delta| PageEvent::Scroll { delta });
        zooms.chain(scrolls).collect()
    }
}

/// Print the frame (or whole layout) of a settled page.
fn write_output<W: Write>(
    page: &Page,
    format: OutputFormat,
    full_layout: bool,
    out: &mut W,
) -> Result<(), AppError> {
    let mut recorder = CommandRecorder::new(page.viewport().dimensions());
    if full_layout {
        render_layout(page.layout(), &mut recorder);
    } else {
        page.render(&mut recorder);
    }

    match (format, full_layout) {
        (OutputFormat::Text, _) => {
            for command in recorder.commands() {
                writeln!(out, "{command}")?;
            }
        }
        (OutputFormat::Json, true) => {
            for element in &page.layout().elements {
                serde_json::to_writer(&mut *out, element)?;
                writeln!(out)?;
            }
        }
        (OutputFormat::Json, false) => {
            for command in recorder.commands() {
                serde_json::to_writer(&mut *out, command)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = config::resolve(args.config.clone(), args.overrides())?;

    let _log_guard = mdcanvas::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");

    let page = mdcanvas::integration::run(&config, FileSource::new(), args.signals())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_output(&page, args.format, args.layout, &mut out)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mdcanvas: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdcanvas::config::ResolvedConfig;
    use mdcanvas::model::error::FetchError;
    use mdcanvas::view_state::ViewportDimensions;
    use std::path::Path;

    fn settled(document: &'static str, signals: Vec<PageEvent>) -> Page {
        let config = ResolvedConfig {
            viewport: ViewportDimensions::new(1000, 800),
            ..ResolvedConfig::default()
        };
        let source = move |_: &Path| -> Result<String, FetchError> { Ok(document.to_string()) };
        mdcanvas::integration::run(&config, source, signals).unwrap()
    }

    fn output(page: &Page, format: OutputFormat, full_layout: bool) -> String {
        let mut buffer = Vec::new();
        write_output(page, format, full_layout, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["mdcanvas", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["mdcanvas", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["mdcanvas"]);
        assert_eq!(args.file, None);
        assert_eq!(args.width, None);
        assert_eq!(args.height, None);
        assert!(args.zoom_delta.is_empty());
        assert!(args.scroll_delta.is_empty());
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.layout);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_file_path_populates_file_field() {
        let args = Args::parse_from(["mdcanvas", "guide.md"]);
        assert_eq!(args.file, Some(PathBuf::from("guide.md")));
        assert_eq!(args.overrides().document, Some(PathBuf::from("guide.md")));
    }

    #[test]
    fn test_width_rejects_zero() {
        let err = Args::try_parse_from(["mdcanvas", "--width", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_negative_deltas_are_values() {
        let args = Args::parse_from([
            "mdcanvas",
            "--zoom-delta",
            "-500",
            "--scroll-delta",
            "120",
            "--scroll-delta",
            "-20",
        ]);
        assert_eq!(args.zoom_delta, vec![-500.0]);
        assert_eq!(args.scroll_delta, vec![120.0, -20.0]);
    }

    #[test]
    fn test_signals_replay_zoom_before_scroll() {
        let args = Args::parse_from([
            "mdcanvas",
            "--scroll-delta",
            "10",
            "--zoom-delta",
            "-1",
        ]);
        let signals = args.signals();
        assert!(matches!(signals[0], PageEvent::Zoom { delta } if delta == -1.0));
        assert!(matches!(signals[1], PageEvent::Scroll { delta } if delta == 10.0));
    }

    #[test]
    fn test_format_rejects_unknown_value() {
        let result = Args::try_parse_from(["mdcanvas", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "mdcanvas",
            "doc.md",
            "--width",
            "600",
            "--height",
            "400",
            "--format",
            "json",
            "--layout",
            "--config",
            "/tmp/mdcanvas.toml",
        ]);
        assert_eq!(args.width, Some(600));
        assert_eq!(args.height, Some(400));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.layout);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/mdcanvas.toml")));
    }

    #[test]
    fn text_frame_output_starts_with_clear() {
        let page = settled("---", Vec::new());
        assert_eq!(
            output(&page, OutputFormat::Text, false),
            "clear 1000x800 dpr=1\ndivider x=150 y=100 width=700\n"
        );
    }

    #[test]
    fn json_layout_output_is_one_element_per_line() {
        let page = settled("---\n---", Vec::new());
        let text = output(&page, OutputFormat::Json, true);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["kind"], "divider");
        assert_eq!(value["y"], 100);
    }

    #[test]
    fn json_frame_output_tags_operations() {
        let page = settled("---", Vec::new());
        let text = output(&page, OutputFormat::Json, false);
        let first: serde_json::Value = serde_json::from_str(text.lines().next().unwrap()).unwrap();
        assert_eq!(first["op"], "clear");
    }
}
