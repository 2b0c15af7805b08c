use brolly::{
    DEFAULT_HEADER_SUFFIX, DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_DIR, GeneratorConfig, Result,
    collect_headers, derive_include_prefix, generate, render_aggregate, render_include_line,
};
use clap::{Parser, ValueEnum};
use globset::{Glob, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const LONG_HELP: &str = r#"
Defaults reproduce the original si2-lef build helper: scan
./third_party/si2-lef/clef/ and overwrite ./third_party/si2-lef/lef.h with
one include directive per header, e.g.

  #include "./clef/lefiLayer.h"

Unless --include-prefix is given, the prefix is derived from the source
directory's basename, so the directives resolve relative to an output file
sitting next to the scanned directory.

Examples:
  # Regenerate the aggregator with the built-in defaults
  brolly
  # Point at a different vendored library
  brolly vendor/zlib -o vendor/zlib.h
  # Stable ordering across platforms
  brolly --sort
  # Skip generated headers
  brolly -x "*.tab.h"
  # Check what would be written (dry run)
  brolly --dry-run
  # List matched headers, with details or as JSON
  brolly --list=detailed
  brolly --list=json
  # Print the aggregator to stdout instead of writing it
  brolly -o -
"#;

/// Aggregator (umbrella) header generation for vendored C libraries.
#[derive(Parser, Debug)]
#[command(
    name = "brolly",
    version,
    about = "Generate aggregator (umbrella) headers for vendored C libraries.",
    after_long_help = LONG_HELP
)]
struct Cli {
    /// Directory scanned for header files
    #[arg(
        value_name = "SOURCE_DIR",
        env = "BROLLY_SOURCE_DIR",
        default_value = DEFAULT_SOURCE_DIR
    )]
    source_dir: PathBuf,

    /// Output file for the generated aggregator header. Use '-' for stdout.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Prefix prepended to each filename in the include directives
    #[arg(short = 'p', long, value_name = "PREFIX")]
    include_prefix: Option<String>,

    /// Filename suffix that marks an entry as a header
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_HEADER_SUFFIX)]
    suffix: String,

    /// Sort header names lexicographically for deterministic output
    #[arg(long)]
    sort: bool,

    /// Exclude glob patterns matched against bare filenames (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "GLOB", action = clap::ArgAction::Append)]
    exclude: Vec<String>,

    /// Perform a dry run - scan and validate without writing
    #[arg(long, conflicts_with = "list")]
    dry_run: bool,

    /// List matching headers (optionally with format: plain, detailed, json)
    #[arg(long, value_name = "FORMAT", num_args = 0..=1, default_missing_value = "plain", conflicts_with = "dry_run")]
    list: Option<ListFormat>,

    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq)]
enum ListFormat {
    /// Simple list of header names
    Plain,
    /// Detailed information about each header
    Detailed,
    /// JSON output for scripting
    Json,
}

#[derive(Serialize, Deserialize)]
struct HeaderInfo {
    name: String,
    path: String,
    include: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_type: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => LogLevel::Error,
        (false, 0) => LogLevel::Warn,
        (false, 1) => LogLevel::Info,
        (false, 2) => LogLevel::Debug,
        (false, _) => LogLevel::Trace,
    };

    // Build GeneratorConfig from CLI options
    let mut config = GeneratorConfig {
        source_dir: cli.source_dir.clone(),
        output_file: cli.output.clone(),
        include_prefix: cli
            .include_prefix
            .clone()
            .unwrap_or_else(|| derive_include_prefix(&cli.source_dir)),
        header_suffix: cli.suffix.clone(),
        sort: cli.sort,
        exclude: None,
    };
    if !cli.exclude.is_empty() {
        let mut builder = GlobSetBuilder::new();
        for pat in &cli.exclude {
            match Glob::new(pat) {
                Ok(g) => {
                    builder.add(g);
                }
                Err(e) => {
                    eprintln!("[ERROR] Invalid exclude pattern '{pat}': {e}");
                    std::process::exit(2);
                }
            }
        }
        match builder.build() {
            Ok(set) => {
                config.exclude = Some(set);
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to build exclude set: {e}");
                std::process::exit(2);
            }
        }
    }

    let result = if cli.dry_run {
        dry_run(&config, log_level)
    } else if let Some(list_format) = cli.list {
        list_headers(&config, list_format, log_level)
    } else {
        run_generate(&config, log_level)
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_generate(config: &GeneratorConfig, log_level: LogLevel) -> Result<()> {
    log(
        log_level,
        LogLevel::Debug,
        &format!("Scanning {}", config.source_dir.display()),
    );

    if config.output_file.as_path() == Path::new("-") {
        let headers = collect_headers(config)?;
        let content = render_aggregate(&config.include_prefix, &headers);
        print!("{content}");
        io::stdout().flush()?;
        return Ok(());
    }

    let headers = generate(config)?;
    if headers.is_empty() {
        log(
            log_level,
            LogLevel::Warn,
            &format!(
                "No entries matching '{}' under {}",
                config.header_suffix,
                config.source_dir.display()
            ),
        );
    }
    log(
        log_level,
        LogLevel::Info,
        &format!(
            "Wrote {} include directives to {}",
            headers.len(),
            config.output_file.display()
        ),
    );
    Ok(())
}

fn dry_run(config: &GeneratorConfig, log_level: LogLevel) -> Result<()> {
    log(
        log_level,
        LogLevel::Info,
        "Performing dry run - nothing will be written...",
    );

    let headers = collect_headers(config)?;
    for name in &headers {
        log(
            log_level,
            LogLevel::Info,
            &format!(
                "✓ {} -> {}",
                name,
                render_include_line(&config.include_prefix, name)
            ),
        );
    }

    // The real run never creates missing parents, so report that upfront
    let mut writable = true;
    if config.output_file.as_path() != Path::new("-") {
        let parent = parent_dir(&config.output_file);
        if !parent.is_dir() {
            log(
                log_level,
                LogLevel::Warn,
                &format!("✗ output directory missing: {}", parent.display()),
            );
            writable = false;
        }
    }

    println!("\nSummary: {} headers matched", headers.len());
    println!("  target: {}", config.output_file.display());

    if !writable {
        std::process::exit(1);
    }

    Ok(())
}

fn list_headers(config: &GeneratorConfig, format: ListFormat, log_level: LogLevel) -> Result<()> {
    log(log_level, LogLevel::Debug, "Listing matching headers...");

    let headers = collect_headers(config)?;

    match format {
        ListFormat::Plain => {
            for name in &headers {
                println!("{name}");
            }
        }
        ListFormat::Detailed => {
            for name in &headers {
                let path = config.source_dir.join(name);
                println!("Header: {name}");
                println!("  Path: {}", path.display());
                println!(
                    "  Include: {}",
                    render_include_line(&config.include_prefix, name)
                );
                if path.is_dir() {
                    println!("  Type: Directory");
                } else if let Ok(metadata) = std::fs::metadata(&path) {
                    println!("  Type: File ({} bytes)", metadata.len());
                }
                println!();
            }
        }
        ListFormat::Json => {
            let mut infos = Vec::new();

            for name in &headers {
                let path = config.source_dir.join(name);
                let mut info = HeaderInfo {
                    name: name.clone(),
                    path: path.display().to_string(),
                    include: render_include_line(&config.include_prefix, name),
                    size: None,
                    file_type: None,
                };

                if path.is_dir() {
                    info.file_type = Some("directory".to_string());
                } else if let Ok(metadata) = std::fs::metadata(&path) {
                    info.size = Some(metadata.len());
                    info.file_type = Some("file".to_string());
                }

                infos.push(info);
            }

            let json = serde_json::to_string_pretty(&infos)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

fn log(current_level: LogLevel, message_level: LogLevel, message: &str) {
    if message_level >= current_level {
        eprintln!(
            "[{}] {}",
            match message_level {
                LogLevel::Trace => "TRACE",
                LogLevel::Debug => "DEBUG",
                LogLevel::Info => "INFO",
                LogLevel::Warn => "WARN",
                LogLevel::Error => "ERROR",
            },
            message
        );
    }
}
