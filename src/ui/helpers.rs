//! Shared rendering utilities.
//!
//! Widths here are counted in `char`s, not bytes: creature names and titles
//! carry accented characters ("Pokédex") and every component pads to the pane
//! width.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in terminal cells.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` cells, ending in `...` when shortened.
///
/// ```
/// use pokedex::ui::helpers::fit;
///
/// assert_eq!(fit("BULBASAUR", 20), "BULBASAUR");
/// assert_eq!(fit("FLETCHINDER", 8), "FLETC...");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut out: String = text.chars().take(width - 3).collect();
    out.push_str("...");
    out
}

/// Left and right padding that centers `len` cells in `cols`.
#[must_use]
pub const fn centered(len: usize, cols: usize) -> (usize, usize) {
    let left = cols.saturating_sub(len) / 2;
    (left, cols.saturating_sub(left + len))
}

/// Writes `text` centered on `row`, padded to the full width, wrapped in
/// `style` and a reset.
pub fn print_centered_line(row: usize, text: &str, style: &str, cols: usize) {
    let (left, right) = centered(text_width(text), cols);
    position_cursor(row, 1);
    print!("{style}{:left$}{text}{:right$}{}", "", "", Theme::reset());
}
