// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Legend label formatting.
//!
//! Raw method names are machine identifiers (`js_base`,
//! `cpp_accelerate-async`); legend entries carry a human-readable
//! transform: separators become spaces, words are capitalized, then a
//! fixed abbreviation table is applied.

/// Abbreviation expansions applied after capitalization, in order.
///
/// Order matters: `Worker` must expand before `Async` so the
/// `AsyncWorker` expansion is not rewritten.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("Js", "JavaScript"),
    ("Cpp", "C++"),
    ("Wasm", "WebAssembly"),
    ("Simd", "SIMD"),
    ("Rps", "RPS"),
    ("Worker", "Worker Threads"),
    ("Async", "AsyncWorker"),
];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Format a raw method name for display in the legend.
///
/// `js_base` becomes `JavaScript Base`, `cpp_simd_async` becomes
/// `C++ SIMD AsyncWorker`.
pub fn legend_label(method_name: &str) -> String {
    let spaced = method_name.replace(['_', '-'], " ");
    let mut formatted = spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    for (abbrev, expansion) in REPLACEMENTS {
        formatted = formatted.replace(abbrev, expansion);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        assert_eq!(legend_label("js_base"), "JavaScript Base");
        assert_eq!(legend_label("rust_base"), "Rust Base");
    }

    #[test]
    fn test_hyphens_and_underscores_both_split() {
        assert_eq!(legend_label("cpp_accelerate-async"), "C++ Accelerate AsyncWorker");
    }

    #[test]
    fn test_abbreviation_expansions() {
        assert_eq!(legend_label("cpp_simd_async"), "C++ SIMD AsyncWorker");
        assert_eq!(legend_label("wasm_simd"), "WebAssembly SIMD");
        assert_eq!(legend_label("js_optimized_worker"), "JavaScript Optimized Worker Threads");
    }

    #[test]
    fn test_worker_expands_before_async() {
        assert_eq!(legend_label("worker_async"), "Worker Threads AsyncWorker");
    }
}
