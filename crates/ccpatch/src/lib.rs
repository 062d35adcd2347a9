//! Compilation database patching CLI.
//!
//! This crate provides the command-line front end for rewriting a
//! `compile_commands.json` produced by a vendor cross-compiler so that
//! generic tooling (clangd, static analyzers) can consume it:
//!
//! - `ccpatch`: Rewrite the database in place
//! - `patch-cc`: Same command under the name of the script it replaces
//!
//! # Example Usage
//!
//! ```bash
//! ccpatch                                # ./compile_commands.json, in place
//! ccpatch build/compile_commands.json --check
//! ccpatch --strip=-mtext-section-literals -o patched.json
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
