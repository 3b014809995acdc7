use anyhow::{Context, Result, bail};
use chatmark_config::Config;
use chatmark_engine::{
    MessageSink, OutgoingMessage, PLATFORM_MAX_MESSAGE_UTF16, deliver, prepare_messages,
};
use clap::{Parser, ValueEnum};
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

/// Render model markup into chat messages with formatting entities.
#[derive(Debug, Parser)]
#[command(name = "chatmark", version)]
struct Cli {
    /// Markup file to render; reads stdin when omitted
    file: Option<PathBuf>,

    /// Target fragment size in bytes (overrides the config file)
    #[arg(long)]
    max_len: Option<usize>,

    /// Reject fragments longer than this many UTF-16 units, as the platform would
    #[arg(long, default_value_t = PLATFORM_MAX_MESSAGE_UTF16)]
    hard_limit: usize,

    /// Config file to load instead of ~/.config/chatmark/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Human-readable fragments with their entity lists
    Text,
    /// One JSON message object per line
    Json,
}

/// Prints each message as a header, the text, and one line per entity.
struct TextSink<W> {
    out: W,
    total: usize,
}

impl<W: Write> MessageSink for TextSink<W> {
    type Error = anyhow::Error;

    fn send(&mut self, index: usize, message: &OutgoingMessage) -> Result<()> {
        writeln!(
            self.out,
            "--- message {}/{} ({} UTF-16 units) ---",
            index + 1,
            self.total,
            message.utf16_len()
        )?;
        write!(self.out, "{}", message.text)?;
        if !message.text.ends_with('\n') {
            writeln!(self.out)?;
        }
        for entity in &message.entities {
            writeln!(
                self.out,
                "  [{} offset={} length={}]",
                entity.kind, entity.offset, entity.length
            )?;
        }
        Ok(())
    }
}

/// Writes each message as a single JSON line.
struct JsonLinesSink<W> {
    out: W,
}

impl<W: Write> MessageSink for JsonLinesSink<W> {
    type Error = anyhow::Error;

    fn send(&mut self, _index: usize, message: &OutgoingMessage) -> Result<()> {
        let line = serde_json::to_string(message)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

/// Refuses messages the platform would reject for length before passing the
/// rest to the inner sink.
struct LimitedSink<S> {
    inner: S,
    hard_limit: usize,
}

impl<S: MessageSink<Error = anyhow::Error>> MessageSink for LimitedSink<S> {
    type Error = anyhow::Error;

    fn send(&mut self, index: usize, message: &OutgoingMessage) -> Result<()> {
        let len = message.utf16_len();
        if len > self.hard_limit {
            bail!(
                "message is {len} UTF-16 units, over the {} unit limit",
                self.hard_limit
            );
        }
        self.inner.send(index, message)
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read markup from stdin")?;
            Ok(input)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    let max_len = cli.max_len.unwrap_or(config.max_fragment_len);
    log::debug!("using max fragment length {max_len}");

    let input = read_input(cli.file.as_deref())?;
    let messages = prepare_messages(&input, max_len);
    log::info!("{} input bytes -> {} message(s)", input.len(), messages.len());

    let out = io::stdout().lock();
    let report = match cli.format {
        Format::Text => {
            let inner = TextSink {
                out,
                total: messages.len(),
            };
            deliver(
                &mut LimitedSink {
                    inner,
                    hard_limit: cli.hard_limit,
                },
                &messages,
            )
        }
        Format::Json => deliver(
            &mut LimitedSink {
                inner: JsonLinesSink { out },
                hard_limit: cli.hard_limit,
            },
            &messages,
        ),
    };

    for failure in report.failed() {
        eprintln!("Error: message {} not sent: {:#}", failure.index + 1, failure.error);
    }
    report.into_result()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
