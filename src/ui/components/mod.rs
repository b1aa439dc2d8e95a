//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`footer`]: Keybinding hints
//! - [`search`]: Home query box
//! - [`grid`]: Creature cards and the list grid
//! - [`detail`]: Full creature record with stat bars
//! - [`empty`]: Empty state message
//!
//! # Layouts
//!
//! Every screen shares the same chrome: a blank first line, the header, a
//! border, the screen body, then a border and the footer on the last two
//! rows. [`render_home`], [`render_list`] and [`render_detail_screen`] fill
//! in the body.

mod detail;
mod empty;
mod footer;
mod grid;
mod header;
mod search;

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, FooterInfo, HeaderInfo, HomeView, ListView};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use grid::{render_card, render_grid};
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws header and footer chrome and returns `(first body row, footer border row)`.
fn render_chrome(header: &HeaderInfo, footer: &FooterInfo, theme: &Theme, cols: usize, rows: usize) -> (usize, usize) {
    let mut current_row = 2;
    current_row = render_header(current_row, header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, footer, theme, cols);

    (current_row, border_row)
}

/// Home layout: search box, then the message or the last result card.
///
/// ```text
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [blank]
/// [Message | Result card]
/// ...
/// [Border]
/// [Footer]
/// ```
pub fn render_home(header: &HeaderInfo, footer: &FooterInfo, home: &HomeView, theme: &Theme, cols: usize, rows: usize) {
    let (mut current_row, last_row) = render_chrome(header, footer, theme, cols, rows);

    current_row = render_search_bar(current_row, &home.search_bar, theme, cols);
    current_row += 1;
    if current_row + 1 >= last_row {
        return;
    }

    if let Some(message) = &home.message {
        position_cursor(current_row, 6);
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg));
        print!("{}", fit(message, cols.saturating_sub(10)));
        print!("{}", Theme::reset());
    } else if let Some(card) = &home.result {
        render_card(current_row, 6, cols.saturating_sub(10), card, theme);
    }
}

/// List layout: sort and page labels, then the card grid or an empty state.
pub fn render_list(header: &HeaderInfo, footer: &FooterInfo, list: &ListView, theme: &Theme, cols: usize, rows: usize) {
    let (mut current_row, last_row) = render_chrome(header, footer, theme, cols, rows);

    position_cursor(current_row, 2);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent_fg));
    print!("{}", list.sort_label);
    print!("{}{}", Theme::reset(), Theme::fg(&theme.colors.text_dim));
    print!("   {}", list.page_label);
    if list.loading {
        print!("   loading...");
    }
    print!("{}", Theme::reset());
    current_row += 2;

    if let Some(empty) = &list.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
        return;
    }

    render_grid(current_row, &list.cards, list.columns, theme, cols, last_row);
}

/// Detail layout: the whole record beneath the chrome.
pub fn render_detail_screen(header: &HeaderInfo, footer: &FooterInfo, detail: &DetailView, theme: &Theme, cols: usize, rows: usize) {
    let (current_row, last_row) = render_chrome(header, footer, theme, cols, rows);
    render_detail(current_row + 1, detail, theme, cols, last_row);
}
