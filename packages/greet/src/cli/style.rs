//! Clap help styling for the greet CLI
//!
//! Conservative coloring so every subcommand's help output looks the same.

use clap::builder::styling::{AnsiColor, Color, Style, Styles};

/// Create consistent clap help styles
///
/// Add this to the clap Parser derive:
///
/// ```rust
/// use clap::Parser;
/// use greet::cli::style::help_styles;
///
/// #[derive(Parser)]
/// #[command(name = "my-tool", styles = help_styles())]
/// pub struct Cli {
///     // ... your fields
/// }
/// ```
pub fn help_styles() -> Styles {
    Styles::default()
        .header(Style::new().bold())
        .usage(Style::new().bold())
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
        .error(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}
