// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Mode summary shown before options in main help.
pub fn modes() -> String {
    format!(
        "\
{header}
  {output}   Print the comment for an output
  {hash}     Find the output by commit hash and print its comment
  {branch}   Squash-merge a branch and commit it with the comment
",
        header = colors::header("Modes:"),
        output = colors::literal("-o <NUM>"),
        hash = colors::literal("-g <HASH>"),
        branch = colors::literal("-b <BRANCH>"),
    )
}

/// Examples shown after options in main help.
pub fn examples() -> String {
    colors::examples(
        "\
Examples:
  mksgit -o 123456              Print the comment for output 123456
  mksgit -o 123456 -f           Same, even if the inspection is open
  mksgit -g <hash>              Print the comment for the output at <hash>
  mksgit -b <branch>            Squash-merge <branch> and commit
  mksgit -b <branch> --dry-run  Show the commit comment only",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
