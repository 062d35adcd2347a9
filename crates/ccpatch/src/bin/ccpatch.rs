//! ccpatch - Rewrite a compilation database for generic tooling.
//!
//! Primary binary for stripping vendor flags and normalizing compiler paths.

fn main() -> std::process::ExitCode {
    ccpatch::cmd::patch::main()
}
