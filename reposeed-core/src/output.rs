//! # Output Formatting
//!
//! Severity-prefixed messages for the user. Everything is written to stderr;
//! stdout is left to clap's help and version text.

use owo_colors::{OwoColorize, Stream, Style};
use {clap, emojis};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode to the global color override
  pub fn apply(self) {
    match self {
      ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
      ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
      ColorMode::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Apply `style` when stderr supports color, honouring the `--colors` override
fn stderr_styled(text: &str, style: Style) -> String {
  text.if_supports_color(Stream::Stderr, |t| t.style(style)).to_string()
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  eprintln!("{} {}", stderr_styled(&check, Style::new().green().bold()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", stderr_styled(&cross, Style::new().red().bold()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  eprintln!("{} {}", stderr_styled(&warning, Style::new().yellow().bold()), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  eprintln!("{} {}", stderr_styled(&info, Style::new().blue().bold()), message);
}

/// Format a URL for display
pub fn format_url(url: &str) -> String {
  stderr_styled(url, Style::new().bright_green().underline())
}

/// Format a field label for display
pub fn format_label(label: &str) -> String {
  stderr_styled(label, Style::new().bold())
}

/// Format a project name for display
pub fn format_project_name(name: &str) -> String {
  stderr_styled(name, Style::new().bright_cyan().bold())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_emoji_or_default() {
    let result = get_emoji_or_default("check_mark", "✓");
    assert!(!result.is_empty());

    let result = get_emoji_or_default("nonexistent_emoji", "fallback");
    assert_eq!(result, "fallback");
  }

  // One test owns the global override so parallel tests cannot interleave
  #[test]
  fn test_color_mode_controls_styling() {
    ColorMode::Never.apply();
    assert_eq!(format_url("https://github.com/o/r"), "https://github.com/o/r");
    assert_eq!(format_project_name("my-test-repo"), "my-test-repo");

    ColorMode::No.apply();
    assert_eq!(format_project_name("my-test-repo"), "my-test-repo");

    ColorMode::Always.apply();
    let styled = format_url("https://github.com/o/r");
    assert!(styled.contains("\u{1b}["));
    assert!(styled.contains("https://github.com/o/r"));

    ColorMode::Yes.apply();
    assert!(format_project_name("my-test-repo").contains("\u{1b}["));

    owo_colors::unset_override();
  }
}
