//! patch-cc - Rewrite a compilation database for generic tooling.
//!
//! Compatibility binary for users of the original patch script.

fn main() -> std::process::ExitCode {
    ccpatch::cmd::patch::main_with_name("patch-cc")
}
