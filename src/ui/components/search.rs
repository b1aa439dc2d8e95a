//! Search bar component renderer.
//!
//! Renders the home screen's query box with a bordered frame. While the query
//! is being edited a block cursor follows the text.

use crate::ui::helpers::{fit, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Shown in the box while the query is empty and not being edited.
const PLACEHOLDER: &str = "Enter Pokemon name";

/// Renders the search input box at the specified row.
///
/// # Parameters
///
/// * `row` - Starting row position for the search box (1-indexed)
/// * `search` - Query text and editing state
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: pikachu█│ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let border = Theme::fg(&theme.colors.search_bar_border);
    let reset = Theme::reset();
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let rule = "─".repeat(inner_width);

    let (text, color) = match (search.editing, search.query.is_empty()) {
        (true, _) => (format!(" Search: {}█", search.query), &theme.colors.text_normal),
        (false, true) => (format!(" Search: {PLACEHOLDER}"), &theme.colors.text_dim),
        (false, false) => (format!(" Search: {}", search.query), &theme.colors.text_normal),
    };
    let text = fit(&text, inner_width);
    let padding = inner_width.saturating_sub(text_width(&text));

    position_cursor(row, 1);
    print!("{margin}{border}┌{rule}┐{reset}");

    position_cursor(row + 1, 1);
    print!("{margin}{border}│{}{text}{:padding$}{border}│{reset}", Theme::fg(color), "");

    position_cursor(row + 2, 1);
    print!("{margin}{border}└{rule}┘{reset}");

    row + 3
}
