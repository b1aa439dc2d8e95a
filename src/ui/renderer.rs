//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] for the visible screen,
//! then hand its body to the matching layout in [`components`].

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ScreenView, UIViewModel};

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    match &vm.body {
        ScreenView::Home(home) => components::render_home(&vm.header, &vm.footer, home, theme, cols, rows),
        ScreenView::List(list) => components::render_list(&vm.header, &vm.footer, list, theme, cols, rows),
        ScreenView::Detail(detail) => {
            components::render_detail_screen(&vm.header, &vm.footer, detail, theme, cols, rows);
        }
    }
}
