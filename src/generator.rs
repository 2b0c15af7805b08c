use crate::error::Result;
use crate::fs_utils::{list_entries, write_output};
use globset::GlobSet;
use std::path::{Path, PathBuf};

/// Source directory the original build helper was written against
pub const DEFAULT_SOURCE_DIR: &str = "./third_party/si2-lef/clef/";

/// Aggregator header the original build helper regenerates
pub const DEFAULT_OUTPUT_FILE: &str = "./third_party/si2-lef/lef.h";

/// Include prefix matching `DEFAULT_SOURCE_DIR`, as seen from the output file
pub const DEFAULT_INCLUDE_PREFIX: &str = "./clef/";

/// Filename suffix that marks an entry as a header
pub const DEFAULT_HEADER_SUFFIX: &str = ".h";

/// Configuration for aggregator-header generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory whose entries are scanned for headers
    pub source_dir: PathBuf,
    /// Path of the generated aggregator header, fully overwritten on each run
    pub output_file: PathBuf,
    /// Path segment prepended to each filename inside the include directive
    pub include_prefix: String,
    /// Entries are retained when their name ends with this suffix
    pub header_suffix: String,
    /// Sort retained names lexicographically instead of keeping enumeration order
    pub sort: bool,
    /// Names matching any of these globs are dropped after the suffix filter
    pub exclude: Option<GlobSet>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            include_prefix: DEFAULT_INCLUDE_PREFIX.to_string(),
            header_suffix: DEFAULT_HEADER_SUFFIX.to_string(),
            sort: false,
            exclude: None,
        }
    }
}

/// Derives the include prefix from the source directory's basename.
///
/// `third_party/si2-lef/clef/` becomes `./clef/`, matching how the generated
/// directives are resolved relative to an output file sitting next to the
/// source directory. Paths without a usable basename (`.`, `/`) fall back
/// to `./`.
pub fn derive_include_prefix(source_dir: &Path) -> String {
    source_dir
        .file_name()
        .and_then(|name| name.to_str())
        .map_or_else(|| "./".to_string(), |name| format!("./{name}/"))
}

/// Collects the names of all matching entries in the configured source directory.
///
/// Filtering is purely name-based: an entry whose name ends with the header
/// suffix is retained regardless of whether it is a file or a directory. The
/// exclusion globs, if any, are matched against the bare filename. Order is
/// enumeration order unless `config.sort` is set.
///
/// # Errors
///
/// - `BrollyError::DirectoryNotFound` if the source directory is missing or
///   not listable.
pub fn collect_headers(config: &GeneratorConfig) -> Result<Vec<String>> {
    let mut names: Vec<String> = list_entries(&config.source_dir)?
        .into_iter()
        .filter(|name| name.ends_with(&config.header_suffix))
        .filter(|name| {
            config
                .exclude
                .as_ref()
                .is_none_or(|set| !set.is_match(name.as_str()))
        })
        .collect();

    if config.sort {
        names.sort();
    }

    Ok(names)
}

/// Renders a single include directive: `#include "<prefix><name>"`.
pub fn render_include_line(prefix: &str, name: &str) -> String {
    format!("#include \"{prefix}{name}\"")
}

/// Renders the full aggregator content, one newline-terminated directive per
/// name. An empty slice renders the empty string, so a source directory with
/// zero matches produces a zero-byte output file.
pub fn render_aggregate(prefix: &str, names: &[String]) -> String {
    let mut content = String::new();
    for name in names {
        content.push_str(&render_include_line(prefix, name));
        content.push('\n');
    }
    content
}

/// Runs the whole pipeline: scan, render, overwrite the output file.
///
/// Collection strictly precedes writing, so a missing source directory leaves
/// any existing output file untouched. Returns the included names for
/// reporting.
///
/// # Errors
///
/// - `BrollyError::DirectoryNotFound` from the scan.
/// - `BrollyError::WriteError` if the output can't be created or written.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<String>> {
    let headers = collect_headers(config)?;
    let content = render_aggregate(&config.include_prefix, &headers);
    write_output(&config.output_file, &content)?;
    Ok(headers)
}
