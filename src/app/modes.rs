//! Screen and input mode types.
//!
//! [`ScreenKind`] names the screen on top of the navigation stack; it decides
//! which keybindings the plugin shim maps. [`InputMode`] only exists on the
//! home screen, where keystrokes either drive commands or edit the query.

/// Which screen is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// Search box plus the last lookup result.
    Home,
    /// Paginated, sortable grid of creatures.
    List,
    /// Full record of one creature.
    Detail,
}

/// Keystroke interpretation on the home screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands: `/` edit, `Enter` open result, `l` list, `q` quit.
    #[default]
    Normal,

    /// Keys edit the query: characters append, `Enter` submits, `Esc` leaves.
    Editing,
}
