//! Property-based tests for ccpatch-core.
//!
//! Run with: cargo test -p ccpatch-core --test `property_tests`

use ccpatch_core::{DEFAULT_DENYLIST, RewriteConfig, tokenize};
use proptest::prelude::*;

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_compiler_path() -> impl Strategy<Value = String> {
    let dir = prop_oneof![
        Just(String::new()),
        Just("/usr/bin/".to_string()),
        Just("/opt/toolchain/bin/".to_string()),
        Just("C:/esp/tools/bin/".to_string()),
    ];
    let name = prop_oneof![
        Just("gcc".to_string()),
        Just("g++".to_string()),
        Just("xtensa-esp32-elf-gcc".to_string()),
        Just("riscv32-esp-elf-g++".to_string()),
        Just("arm-none-eabi-gcc-13".to_string()),
        Just("clang".to_string()),
        Just("cc".to_string()),
    ];
    (dir, name).prop_map(|(d, n)| format!("{d}{n}"))
}

fn arb_argument() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(DEFAULT_DENYLIST).prop_map(ToString::to_string),
        Just("-O2".to_string()),
        Just("-Wall".to_string()),
        Just("-c".to_string()),
        Just("-I/opt/gcc/include".to_string()),
        Just(r#"-DNAME="a b""#.to_string()),
        Just("-fzero-init-padding-bits=all-Wall".to_string()),
        "[a-z]{1,8}\\.c",
    ]
}

fn arb_separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("  "), Just("\t"), Just(" \t ")]
}

fn arb_command() -> impl Strategy<Value = String> {
    (
        arb_compiler_path(),
        prop::collection::vec((arb_separator(), arb_argument()), 0..12),
    )
        .prop_map(|(compiler, args)| {
            let mut command = compiler;
            for (sep, arg) in args {
                command.push_str(sep);
                command.push_str(&arg);
            }
            command
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn rewrite_is_idempotent(command in arb_command()) {
        let config = RewriteConfig::new();
        let once = config.rewrite_command(&command);
        let twice = config.rewrite_command(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn rewrite_removes_every_denylisted_word(command in arb_command()) {
        let config = RewriteConfig::new();
        let rewritten = config.rewrite_command(&command);
        for word in tokenize(&rewritten) {
            prop_assert!(!DEFAULT_DENYLIST.contains(&word), "{} survived in {}", word, rewritten);
        }
    }

    #[test]
    fn rewrite_uses_single_spaces(command in arb_command()) {
        let rewritten = RewriteConfig::new().rewrite_command(&command);
        prop_assert!(!rewritten.contains("  "));
        prop_assert!(!rewritten.contains('\t'));
    }

    #[test]
    fn rewrite_keeps_other_words_in_order(command in arb_command()) {
        let rewritten = RewriteConfig::new().rewrite_command(&command);
        let expected: Vec<&str> = tokenize(&command)
            .into_iter()
            .skip(1)
            .filter(|w| !DEFAULT_DENYLIST.contains(w))
            .collect();
        let actual: Vec<&str> = tokenize(&rewritten).into_iter().skip(1).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn tokenize_words_have_no_bare_whitespace(command in arb_command()) {
        for word in tokenize(&command) {
            prop_assert!(!word.is_empty());
            prop_assert!(!word.starts_with(char::is_whitespace));
            prop_assert!(!word.ends_with(char::is_whitespace));
        }
    }
}
