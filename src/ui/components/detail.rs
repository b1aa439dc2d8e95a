//! Detail screen renderer.
//!
//! Renders every field of one creature: name and id, image URI, types,
//! weight, height, abilities, then the stat table with one bar per stat.

use crate::ui::helpers::{fit, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Left margin of the detail body.
const MARGIN: usize = 3;

/// Width of the stat name column.
const STAT_NAME_WIDTH: usize = 18;

/// Renders the detail body starting at `row`, stopping before `last_row`.
///
/// # Layout
///
/// ```text
///    #25 PIKACHU
///    https://.../25.png
///
///    electric
///    Weight: 6 kg
///    Height: 0.4 m
///    Moves: static, lightning-rod
///
///    hp                  35 ███████
///    attack              55 ███████████
/// ```
///
/// # Returns
///
/// The next available row position.
pub fn render_detail(row: usize, detail: &DetailView, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let width = cols.saturating_sub(MARGIN * 2);
    let mut current_row = row;

    position_cursor(current_row, MARGIN + 1);
    print!("{}{}{}", Theme::bold(), Theme::fg(&theme.colors.accent_fg), detail.id_label);
    print!("{} ", Theme::fg(&theme.colors.header_fg));
    print!("{}", fit(&detail.name, width.saturating_sub(text_width(&detail.id_label) + 1)));
    print!("{}", Theme::reset());
    current_row += 1;

    if let Some(image) = &detail.image {
        current_row = render_line(current_row, &fit(image, width), &theme.colors.text_dim);
    }
    current_row += 1;

    for line in [&detail.types, &detail.weight, &detail.height, &detail.moves] {
        if current_row >= last_row {
            return current_row;
        }
        current_row = render_line(current_row, &fit(line, width), &theme.colors.text_normal);
    }
    current_row += 1;

    for stat in &detail.stats {
        if current_row >= last_row {
            break;
        }
        position_cursor(current_row, MARGIN + 1);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{:<STAT_NAME_WIDTH$}", fit(&stat.name, STAT_NAME_WIDTH - 1));
        print!("{}{:>4} ", Theme::fg(&theme.colors.accent_fg), stat.value);
        print!("{}{}", Theme::fg(&theme.colors.stat_bar_fg), "█".repeat(stat.bar_width));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}

fn render_line(row: usize, text: &str, color: &str) -> usize {
    position_cursor(row, MARGIN + 1);
    print!("{}{text}{}", Theme::fg(color), Theme::reset());
    row + 1
}
