//! Footer component renderer.

use crate::ui::helpers::{fit, print_centered_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Keybinding hints, dimmed and cut to the pane width.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let hints = fit(&footer.keybindings, cols);
    print_centered_line(row, &hints, &Theme::fg(&theme.colors.text_dim), cols);
    row + 1
}
