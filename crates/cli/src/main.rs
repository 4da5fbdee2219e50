// Copyright 2025 Matrix Charts Contributors
// SPDX-License-Identifier: Apache-2.0

//! Matrix charts CLI entry point.

use colored::Colorize;

fn main() {
    if let Err(e) = matrix_charts_cli::run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
