//! Rewrite configuration.

use crate::rewrite::{
    normalize_compiler, normalize_compiler_whitespace, strip_flags, strip_flags_substring,
};

/// Vendor flags removed by default.
///
/// These are Xtensa/ESP-IDF GCC options that clang-based tooling rejects.
pub const DEFAULT_DENYLIST: &[&str] = &[
    "-mlongcalls",
    "-mlong-calls",
    "-fno-shrink-wrap",
    "-fstrict-volatile-bitfields",
    "-fno-tree-switch-conversion",
    "-fzero-init-padding-bits=all",
    "-fno-malloc-dce",
];

/// Compiler names the executable path is truncated to, highest priority first.
pub const DEFAULT_COMPILERS: &[&str] = &["gcc", "g++"];

/// How denylisted flags are removed from a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StripMode {
    /// Drop whole shell words equal to a denylisted flag (default).
    #[default]
    Token,
    /// Delete literal substrings anywhere in the command, leaving the
    /// surrounding text in place, doubled spaces and spliced words included.
    Substring,
}

/// Settings for rewriting a single `command` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Flags to remove.
    pub denylist: Vec<String>,
    /// Compiler names to normalize to, in priority order.
    pub compilers: Vec<String>,
    /// Removal strategy.
    pub mode: StripMode,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            denylist: DEFAULT_DENYLIST.iter().map(ToString::to_string).collect(),
            compilers: DEFAULT_COMPILERS.iter().map(ToString::to_string).collect(),
            mode: StripMode::default(),
        }
    }
}

impl RewriteConfig {
    /// Create a configuration with the default denylist and compilers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append flags to the denylist, skipping ones already present.
    pub fn with_extra_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for flag in flags {
            let flag = flag.into();
            if !flag.is_empty() && !self.denylist.contains(&flag) {
                self.denylist.push(flag);
            }
        }
        self
    }

    /// Set the strip mode.
    pub fn with_strip_mode(mut self, mode: StripMode) -> Self {
        self.mode = mode;
        self
    }

    /// Rewrite one command: normalize the compiler path, then strip flags.
    ///
    /// In [`StripMode::Token`] a second call returns its input unchanged,
    /// except when the first word is itself a denylisted flag:
    /// `-mlongcalls /usr/bin/gcc -c` becomes `/usr/bin/gcc -c`, and only a
    /// second pass normalizes that to `gcc -c`. [`StripMode::Substring`] is
    /// not idempotent, since a second pass collapses the doubled spaces the
    /// first one leaves.
    #[must_use]
    pub fn rewrite_command(&self, command: &str) -> String {
        match self.mode {
            StripMode::Token => {
                let normalized = normalize_compiler(command, &self.compilers);
                strip_flags(&normalized, &self.denylist)
            }
            StripMode::Substring => {
                let normalized = normalize_compiler_whitespace(command, &self.compilers);
                strip_flags_substring(&normalized, &self.denylist)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RewriteConfig::new();
        assert_eq!(config.denylist.len(), 7);
        assert_eq!(config.compilers, vec!["gcc", "g++"]);
        assert_eq!(config.mode, StripMode::Token);
    }

    #[test]
    fn test_rewrite_cross_compiler_command() {
        let config = RewriteConfig::new();
        assert_eq!(
            config.rewrite_command("/opt/toolchain/bin/xtensa-gcc -mlongcalls -O2 -c a.c"),
            "gcc -O2 -c a.c"
        );
        assert_eq!(
            config.rewrite_command("/usr/bin/g++ -fno-shrink-wrap -Wall"),
            "g++ -Wall"
        );
    }

    #[test]
    fn test_rewrite_bare_command_unchanged() {
        let config = RewriteConfig::new();
        assert_eq!(config.rewrite_command("gcc -O2 -c a.c"), "gcc -O2 -c a.c");
    }

    #[test]
    fn test_extra_flags_deduplicated() {
        let config =
            RewriteConfig::new().with_extra_flags(["-mtext-section-literals", "-mlongcalls", ""]);
        assert_eq!(config.denylist.len(), 8);
        assert_eq!(
            config.rewrite_command("xtensa-esp32-elf-gcc -mtext-section-literals -c a.c"),
            "gcc -c a.c"
        );
    }

    #[test]
    fn test_substring_mode_matches_legacy_output() {
        let config = RewriteConfig::new().with_strip_mode(StripMode::Substring);
        assert_eq!(
            config.rewrite_command("/opt/toolchain/bin/xtensa-gcc  -mlongcalls -O2 -c a.c"),
            "gcc  -O2 -c a.c"
        );
        assert_eq!(
            config.rewrite_command("cc -fzero-init-padding-bits=all-Wall"),
            "cc -Wall"
        );
    }

    #[test]
    fn test_flag_as_first_word() {
        let config = RewriteConfig::new();
        assert_eq!(config.rewrite_command("-mlongcalls"), "");
    }

    #[test]
    fn test_leading_flag_needs_second_pass() {
        let config = RewriteConfig::new();
        let once = config.rewrite_command("-mlongcalls /usr/bin/gcc -c");
        assert_eq!(once, "/usr/bin/gcc -c");
        assert_eq!(config.rewrite_command(&once), "gcc -c");
    }
}
