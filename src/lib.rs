//! # brolly
//!
//! A library and CLI tool for generating aggregator (umbrella) headers: single
//! header files whose content is one include directive per header of a vendored
//! third-party library. Lets downstream C/C++ code pull in "everything" via one
//! include without hand-maintaining the list.
//!
//! ## Features
//!
//! - Scan a source directory and filter entries by filename suffix
//! - Emit `#include "<prefix><filename>"` directives, one per match
//! - Fully overwrite the output on every run - no stale entries
//! - Optional lexicographic sorting for deterministic output
//! - Exclusion globs for generated or private headers
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```no_run
//! use brolly::{GeneratorConfig, generate};
//!
//! let config = GeneratorConfig {
//!     source_dir: "vendor/zlib".into(),
//!     output_file: "vendor/zlib.h".into(),
//!     include_prefix: "./zlib/".into(),
//!     ..GeneratorConfig::default()
//! };
//!
//! match generate(&config) {
//!     Ok(headers) => println!("wrote {} include directives", headers.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! ### As a CLI Tool
//!
//! ```bash
//! # Regenerate the aggregator with the built-in defaults
//! brolly
//!
//! # Point at a different vendored library
//! brolly vendor/zlib -o vendor/zlib.h
//!
//! # Deterministic ordering, excluding generated headers
//! brolly --sort -x "*.tab.h"
//! ```

pub mod error;
pub mod fs_utils;
pub mod generator;

// Re-export main types and functions for convenience
pub use error::{BrollyError, Result};
pub use generator::{
    DEFAULT_HEADER_SUFFIX, DEFAULT_INCLUDE_PREFIX, DEFAULT_OUTPUT_FILE, DEFAULT_SOURCE_DIR,
    GeneratorConfig, collect_headers, derive_include_prefix, generate, render_aggregate,
    render_include_line,
};
