//! Core command-line rewriting for ccpatch.
//!
//! This crate holds the pure string transformations applied to the `command`
//! field of each compilation-database record:
//!
//! - [`tokenize`] - Split a command line into raw shell words
//! - [`normalize_compiler`] - Reduce the compiler path to a bare `gcc` / `g++`
//! - [`strip_flags`] - Remove denylisted vendor flags
//! - [`RewriteConfig`] - The denylist, compiler candidates and strip mode
//!
//! Nothing here touches the filesystem; see `ccpatch-loader` for that.
//!
//! # Example
//!
//! ```
//! use ccpatch_core::RewriteConfig;
//!
//! let config = RewriteConfig::default();
//! let rewritten = config.rewrite_command("/opt/toolchain/bin/xtensa-gcc -mlongcalls -O2 -c a.c");
//! assert_eq!(rewritten, "gcc -O2 -c a.c");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod rewrite;
mod tokenize;

pub use config::{DEFAULT_COMPILERS, DEFAULT_DENYLIST, RewriteConfig, StripMode};
pub use rewrite::{normalize_compiler, strip_flags, strip_flags_substring};
pub use tokenize::tokenize;
