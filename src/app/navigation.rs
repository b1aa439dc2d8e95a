//! Navigation stack.
//!
//! The home screen is always mounted at the bottom. List and detail screens
//! are pushed on top of it and dropped, with everything they fetched, when
//! they are popped. Screens below the top stay mounted, so a list page that
//! completes while a detail screen is shown still lands in the list.

use super::modes::ScreenKind;
use super::screens::{DetailScreen, HomeScreen, ListScreen};

/// A screen pushed above home.
#[derive(Debug, Clone)]
pub enum Route {
    List(ListScreen),
    Detail(DetailScreen),
}

impl Route {
    const fn kind(&self) -> ScreenKind {
        match self {
            Self::List(_) => ScreenKind::List,
            Self::Detail(_) => ScreenKind::Detail,
        }
    }
}

/// Stack of mounted screens with home pinned at the bottom.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    pub home: HomeScreen,
    stack: Vec<Route>,
}

impl Navigator {
    pub fn push(&mut self, route: Route) {
        tracing::debug!(screen = ?route.kind(), depth = self.stack.len() + 1, "screen pushed");
        self.stack.push(route);
    }

    /// Pops the top screen. Returns `false` when only home is mounted.
    pub fn back(&mut self) -> bool {
        match self.stack.pop() {
            Some(route) => {
                tracing::debug!(screen = ?route.kind(), depth = self.stack.len(), "screen popped");
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn current(&self) -> ScreenKind {
        self.stack.last().map_or(ScreenKind::Home, Route::kind)
    }

    #[must_use]
    pub fn top(&self) -> Option<&Route> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Route> {
        self.stack.last_mut()
    }

    /// The mounted list screen, wherever it sits in the stack.
    pub fn list_mut(&mut self) -> Option<&mut ListScreen> {
        self.stack.iter_mut().rev().find_map(|route| match route {
            Route::List(list) => Some(list),
            Route::Detail(_) => None,
        })
    }

    /// The list screen if it is the visible one.
    pub fn visible_list_mut(&mut self) -> Option<&mut ListScreen> {
        match self.stack.last_mut() {
            Some(Route::List(list)) => Some(list),
            _ => None,
        }
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
