mod terminal;
mod viewer;

use anyhow::{Context, Result};
use chatmark_config::Config;
use chatmark_engine::{OverlapPolicy, Parser, Segment, render};
use clap::{Parser as ClapParser, ValueEnum};
use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use crate::terminal::{TerminalRenderer, TerminalStyles};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One segment per line in debug form
    Segments,
    /// Segments as a JSON array
    Json,
    Html,
    Plain,
    /// Interactive terminal viewer
    Tui,
}

/// Formats written to stdout as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextFormat {
    Segments,
    Json,
    Html,
    Plain,
}

impl OutputFormat {
    /// `None` for the interactive viewer.
    fn text_format(self) -> Option<TextFormat> {
        match self {
            OutputFormat::Segments => Some(TextFormat::Segments),
            OutputFormat::Json => Some(TextFormat::Json),
            OutputFormat::Html => Some(TextFormat::Html),
            OutputFormat::Plain => Some(TextFormat::Plain),
            OutputFormat::Tui => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OverlapArg {
    Strict,
    Compatible,
}

impl From<OverlapArg> for OverlapPolicy {
    fn from(arg: OverlapArg) -> Self {
        match arg {
            OverlapArg::Strict => OverlapPolicy::Strict,
            OverlapArg::Compatible => OverlapPolicy::Compatible,
        }
    }
}

/// Parse chat-style markdown and print it in another form.
#[derive(Debug, ClapParser)]
#[command(name = "chatmark", version, about)]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Segments)]
    format: OutputFormat,

    /// Overrides `parser.overlap` from the config file
    #[arg(long, value_enum)]
    overlap: Option<OverlapArg>,

    /// Config file to use instead of ~/.config/chatmark/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective config to the config path and exit
    #[arg(long)]
    init_config: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let config = load_config(&cli)?;
    if cli.init_config {
        let path = cli.config.clone().unwrap_or_else(Config::config_path);
        config
            .save_to_path(&path)
            .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
        log::info!("Wrote config to {}", path.display());
        return Ok(());
    }

    let parser = Parser::new(config.parse_options());
    log::debug!("Parsing with {:?}", parser.options());

    let input = read_input(cli.input.as_deref())?;
    let segments = parser.parse(&input);
    log::debug!("Parsed {} segments", segments.len());

    let Some(format) = cli.format.text_format() else {
        let renderer = TerminalRenderer {
            parser,
            styles: TerminalStyles::default(),
            bullet: &config.render.bullet,
        };
        let title = match cli.input.as_deref() {
            Some(path) if path != Path::new("-") => path.display().to_string(),
            _ => "stdin".to_string(),
        };
        return viewer::run(viewer::Viewer::new(title, renderer.render(&segments)));
    };

    let output = format_segments(format, &parser, &config, &segments)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let loaded = match &cli.config {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => config,
            // Nothing to read yet when writing a fresh config.
            None if cli.init_config => Config::default(),
            None => anyhow::bail!("Config file '{}' not found", path.display()),
        },
        None => Config::load()?.unwrap_or_default(),
    };

    let mut config = loaded;
    if let Some(overlap) = cli.overlap {
        config.parser.overlap = overlap.into();
    }
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn format_segments(
    format: TextFormat,
    parser: &Parser,
    config: &Config,
    segments: &[Segment],
) -> Result<String> {
    Ok(match format {
        TextFormat::Segments => segments
            .iter()
            .map(|s| format!("{s:?}"))
            .collect::<Vec<_>>()
            .join("\n"),
        TextFormat::Json => serde_json::to_string_pretty(segments)?,
        TextFormat::Html => {
            render::HtmlRenderer::new(*parser, config.html_options()).render(segments)
        }
        TextFormat::Plain => render::render_plain(parser, segments, &config.render.bullet),
    })
}
