//! CSS custom-property serialization.
//!
//! The presentation layer reads theme colors as `--color-<role>` variables:
//! light values on `:root`, dark values on `.dark`.

use crate::scheme::{GeneratedTheme, Mode, ThemeColors};

/// Format one mode's roles as `--color-<role>: <hex>;` lines, in role order.
///
/// No trailing newline and no indentation; callers embed the block.
#[must_use]
pub fn generate_css_variables(colors: &ThemeColors) -> String {
    colors
        .iter()
        .map(|(role, color)| format!("--color-{}: {color};", role.css_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format both modes as a stylesheet: a `:root` block for light and a
/// `.dark` block for dark, separated by a blank line.
#[must_use]
pub fn generate_stylesheet(theme: &GeneratedTheme) -> String {
    Mode::ALL
        .into_iter()
        .map(|mode| {
            let body = generate_css_variables(theme.get(mode))
                .lines()
                .map(|line| format!("  {line}\n"))
                .collect::<String>();
            format!("{} {{\n{body}}}\n", mode.selector())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
