//! Empty state component renderer.
//!
//! Shown in place of the list grid while the first page is loading, or when a
//! page came back with no entries.

use crate::ui::helpers::{fit, print_centered_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message and its dimmed subtitle on two centered lines.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));

    print_centered_line(row, &fit(&empty.message, cols), &Theme::fg(&theme.colors.empty_state_fg), cols);
    print_centered_line(row + 1, &fit(&empty.subtitle, cols), &subtitle_style, cols);

    row + 2
}
