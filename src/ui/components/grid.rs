//! Card and card grid renderers.
//!
//! A card is two lines: `#id NAME` and the image URI beneath it. The list
//! screen lays cards out left to right, `columns` per row, with one blank line
//! between rows. The home screen draws its single result with the same card.

use crate::ui::helpers::{fit, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardView;

/// Lines used by one grid row, including the spacer.
const CARD_HEIGHT: usize = 3;

/// Renders one card at (`row`, `col`), `width` cells wide.
pub fn render_card(row: usize, col: usize, width: usize, card: &CardView, theme: &Theme) {
    let inner = width.saturating_sub(1);
    let (fg, bg) = if card.is_selected {
        (
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg),
        )
    } else {
        (Theme::fg(&theme.colors.text_normal), String::new())
    };

    let id_label = fit(&card.id_label, inner);
    let name = fit(&format!(" {}", card.name), inner.saturating_sub(text_width(&id_label)));
    position_cursor(row, col);
    print!("{fg}{bg}{}", Theme::bold());
    if !card.is_selected {
        print!("{}", Theme::fg(&theme.colors.accent_fg));
    }
    print!("{id_label}");
    print!("{}{fg}{bg}", Theme::reset());
    print!("{name}");
    print!("{}", " ".repeat(inner.saturating_sub(text_width(&id_label) + text_width(&name))));
    print!("{}", Theme::reset());

    let image = fit(card.image.as_deref().unwrap_or("(no image)"), inner);
    position_cursor(row + 1, col);
    print!("{}{}", Theme::fg(&theme.colors.text_dim), bg);
    print!("{image}");
    print!("{}", " ".repeat(inner.saturating_sub(text_width(&image))));
    print!("{}", Theme::reset());
}

/// Renders `cards` in rows of `columns`, stopping before `last_row`. When
/// the selected card's row would not fit, earlier rows are skipped so that it
/// is the last one drawn.
///
/// # Returns
///
/// The next available row position.
pub fn render_grid(row: usize, cards: &[CardView], columns: usize, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let columns = columns.max(1);
    let width = cols / columns;
    let selected_line = cards.iter().position(|c| c.is_selected).map_or(0, |idx| idx / columns);
    let skip = first_visible_line(selected_line, visible_lines(row, last_row));
    let mut current_row = row;

    for line in cards.chunks(columns).skip(skip) {
        if current_row + 1 >= last_row {
            break;
        }
        for (i, card) in line.iter().enumerate() {
            render_card(current_row, 1 + i * width, width, card, theme);
        }
        current_row += CARD_HEIGHT;
    }

    current_row
}

/// Grid rows that fit between `row` and `last_row`.
const fn visible_lines(row: usize, last_row: usize) -> usize {
    if row + 1 >= last_row {
        return 0;
    }
    (last_row - row - 2) / CARD_HEIGHT + 1
}

/// Index of the first grid row to draw so `selected_line` is on screen.
const fn first_visible_line(selected_line: usize, visible: usize) -> usize {
    if visible == 0 || selected_line < visible {
        0
    } else {
        selected_line + 1 - visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_lines_counts_whole_cards() {
        assert_eq!(visible_lines(10, 11), 0);
        assert_eq!(visible_lines(10, 12), 1);
        assert_eq!(visible_lines(10, 14), 1);
        assert_eq!(visible_lines(10, 15), 2);
    }

    #[test]
    fn selection_below_the_fold_scrolls_the_grid() {
        // One card per row, room for four rows, nine cards.
        assert_eq!(first_visible_line(0, 4), 0);
        assert_eq!(first_visible_line(3, 4), 0);
        assert_eq!(first_visible_line(4, 4), 1);
        assert_eq!(first_visible_line(8, 4), 5);
    }

    #[test]
    fn no_room_draws_from_the_top() {
        assert_eq!(first_visible_line(5, 0), 0);
    }
}
