use anstyle::{AnsiColor, Color, Style};

use confpatch_core::FileOutcome;

pub const HEADER: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Green)))
    .bold();

pub const USAGE: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Green)))
    .bold();

pub const LITERAL: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

pub const OK: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Green)))
    .bold();

pub const NOTE: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

pub const ERROR: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Red)))
    .bold();

pub const DIM: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::White)))
    .dimmed();

pub fn get_clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(HEADER)
        .usage(USAGE)
        .literal(LITERAL)
        .placeholder(LITERAL)
}

/// Right-aligned, colored label for a per-file status line. Padding happens
/// before the escape codes so columns stay aligned.
pub fn outcome_label(outcome: &FileOutcome) -> String {
    let style = match outcome {
        FileOutcome::Updated => OK,
        FileOutcome::Current => DIM,
        FileOutcome::NoMatch | FileOutcome::Missing => NOTE,
        FileOutcome::Failed(_) => ERROR,
    };
    paint(style, &format!("{:>8}", outcome.label()))
}

pub fn paint(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}
