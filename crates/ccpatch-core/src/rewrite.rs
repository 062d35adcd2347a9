//! Compiler-path normalization and flag stripping.

use crate::tokenize::tokenize;

/// Normalize the compiler executable (the first word) of a command line.
///
/// The first candidate, in priority order, that occurs anywhere in the first
/// word wins: the word is truncated to start at that occurrence, so
/// `/opt/bin/xtensa-esp32-elf-gcc` becomes `gcc` and `/usr/bin/g++-12`
/// becomes `g++-12`. At most one truncation is applied. If no candidate
/// matches the word is kept as is.
///
/// The words are rejoined with single spaces, so runs of whitespace between
/// arguments collapse. A blank command is returned unchanged.
#[must_use]
pub fn normalize_compiler<S: AsRef<str>>(command: &str, compilers: &[S]) -> String {
    normalize_words(command, tokenize(command), compilers)
}

/// Same as [`normalize_compiler`] but splitting on bare whitespace, ignoring quotes.
pub(crate) fn normalize_compiler_whitespace<S: AsRef<str>>(
    command: &str,
    compilers: &[S],
) -> String {
    normalize_words(command, command.split_whitespace().collect(), compilers)
}

fn normalize_words<S: AsRef<str>>(
    command: &str,
    mut words: Vec<&str>,
    compilers: &[S],
) -> String {
    let Some(first) = words.first_mut() else {
        return command.to_string();
    };

    let word = *first;
    if let Some(idx) = compilers
        .iter()
        .find_map(|compiler| word.find(compiler.as_ref()))
    {
        *first = &word[idx..];
    }

    words.join(" ")
}

/// Remove every word that exactly equals a denylisted flag.
///
/// Matching is whole-word: `-fno-malloc-dce` is dropped but
/// `-fno-malloc-dce-extra` or `-fzero-init-padding-bits=all-Wall` are kept.
/// The remaining words are rejoined with single spaces.
#[must_use]
pub fn strip_flags<S: AsRef<str>>(command: &str, denylist: &[S]) -> String {
    tokenize(command)
        .into_iter()
        .filter(|word| !denylist.iter().any(|flag| flag.as_ref() == *word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Delete every literal occurrence of each denylisted flag.
///
/// No whitespace is inserted where a flag was removed, so the surrounding
/// separators are left behind (`gcc -mlongcalls -O2` becomes `gcc  -O2`) and
/// a flag embedded in a longer word splices the remainder onto its
/// neighbour.
#[must_use]
pub fn strip_flags_substring<S: AsRef<str>>(command: &str, denylist: &[S]) -> String {
    denylist
        .iter()
        .fold(command.to_string(), |acc, flag| acc.replace(flag.as_ref(), ""))
}
