//! # Viewport Hook
//!
//! Tracks the logical width of the main window and models the top bar's
//! collapsible menu:
//! - `use_window_width` follows window resize events
//! - `MenuState` hides the menu whenever a narrow width is observed
//! - `NavLayout` picks the wide or narrow top bar for a width

use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::{use_wry_event_handler, window};
use dioxus::prelude::*;

// ============================================================================
// Constants
// ============================================================================

/// Width (logical px) below which the menu collapses
pub const MENU_BREAKPOINT: f64 = 540.0;

// ============================================================================
// Layout
// ============================================================================

/// Which top bar layout to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLayout {
    /// Navigation list and search always visible
    Wide,
    /// Toggle icon folding the navigation list away
    Narrow,
}

impl NavLayout {
    /// Layout for a window width; exactly the breakpoint is narrow
    pub fn for_width(width: f64) -> Self {
        if width > MENU_BREAKPOINT {
            NavLayout::Wide
        } else {
            NavLayout::Narrow
        }
    }
}

// ============================================================================
// Menu State
// ============================================================================

/// Icon shown by the narrow layout's toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    /// Menu is showing; clicking closes it
    Open,
    /// Menu is hidden; clicking opens it
    Closed,
}

impl MenuIcon {
    /// Glyph rendered for the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            MenuIcon::Open => "✕",
            MenuIcon::Closed => "☰",
        }
    }

    /// Accessible label for the toggle button
    pub fn label(&self) -> &'static str {
        match self {
            MenuIcon::Open => "Close menu",
            MenuIcon::Closed => "Open menu",
        }
    }
}

/// Tracked width and menu visibility for the top bar
///
/// The menu is only forced closed when a width change is observed, so the
/// user can reopen it while the window stays narrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuState {
    /// Last observed window width
    pub width: f64,
    /// Whether the foldable menu is showing
    pub menu_visible: bool,
}

impl MenuState {
    /// State on mount: visible unless the window already is narrow
    pub fn new(width: f64) -> Self {
        let mut state = Self {
            width,
            menu_visible: true,
        };
        state.collapse_if_narrow();
        state
    }

    /// Record a new window width
    pub fn resize(&mut self, width: f64) {
        if width == self.width {
            return;
        }
        self.width = width;
        self.collapse_if_narrow();
    }

    /// Flip the menu regardless of width
    pub fn toggle(&mut self) {
        self.menu_visible = !self.menu_visible;
    }

    /// Icon matching the current visibility
    pub fn icon(&self) -> MenuIcon {
        if self.menu_visible {
            MenuIcon::Open
        } else {
            MenuIcon::Closed
        }
    }

    fn collapse_if_narrow(&mut self) {
        if self.width < MENU_BREAKPOINT {
            self.menu_visible = false;
        }
    }
}

// ============================================================================
// Window Width
// ============================================================================

/// Current logical width of the main window
pub fn initial_window_width() -> f64 {
    let desktop = window();
    let scale = desktop.window.scale_factor();
    desktop.window.inner_size().to_logical::<f64>(scale).width
}

/// Signal holding the window width, updated on every resize
///
/// The resize listener is removed when the calling component unmounts.
pub fn use_window_width() -> Signal<f64> {
    let mut width = use_signal(initial_window_width);

    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            window_id,
            event: WindowEvent::Resized(size),
            ..
        } = event
        {
            let desktop = window();
            if *window_id != desktop.window.id() {
                return;
            }
            let logical = size.to_logical::<f64>(desktop.window.scale_factor());
            tracing::debug!("Window resized to {:.0}px", logical.width);
            width.set(logical.width);
        }
    });

    width
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_width() {
        assert_eq!(NavLayout::for_width(1280.0), NavLayout::Wide);
        assert_eq!(NavLayout::for_width(541.0), NavLayout::Wide);
        assert_eq!(NavLayout::for_width(540.0), NavLayout::Narrow);
        assert_eq!(NavLayout::for_width(320.0), NavLayout::Narrow);
    }

    #[test]
    fn test_menu_starts_visible_when_wide() {
        let state = MenuState::new(1024.0);
        assert!(state.menu_visible);
        assert_eq!(state.icon(), MenuIcon::Open);
    }

    #[test]
    fn test_menu_starts_hidden_when_narrow() {
        let state = MenuState::new(400.0);
        assert!(!state.menu_visible);
        assert_eq!(state.icon(), MenuIcon::Closed);
    }

    #[test]
    fn test_shrinking_below_breakpoint_hides_menu() {
        let mut state = MenuState::new(800.0);
        assert!(state.menu_visible);

        state.resize(500.0);
        assert!(!state.menu_visible);
        assert_eq!(state.width, 500.0);
    }

    #[test]
    fn test_manual_toggle_reopens_at_narrow_width() {
        let mut state = MenuState::new(800.0);
        state.resize(500.0);
        state.toggle();
        assert!(state.menu_visible);
        assert_eq!(state.width, 500.0);
    }

    #[test]
    fn test_same_width_does_not_collapse_reopened_menu() {
        let mut state = MenuState::new(500.0);
        state.toggle();
        state.resize(500.0);
        assert!(state.menu_visible);
    }

    #[test]
    fn test_further_narrow_resize_collapses_again() {
        let mut state = MenuState::new(500.0);
        state.toggle();
        state.resize(480.0);
        assert!(!state.menu_visible);
    }

    #[test]
    fn test_widening_keeps_visibility() {
        let mut state = MenuState::new(500.0);
        state.resize(900.0);
        assert!(!state.menu_visible);

        let mut state = MenuState::new(900.0);
        state.resize(1200.0);
        assert!(state.menu_visible);
    }

    #[test]
    fn test_breakpoint_itself_is_not_narrow_for_menu() {
        let mut state = MenuState::new(800.0);
        state.resize(MENU_BREAKPOINT);
        assert!(state.menu_visible);
    }

    #[test]
    fn test_menu_icon_labels() {
        assert_eq!(MenuIcon::Open.label(), "Close menu");
        assert_eq!(MenuIcon::Closed.glyph(), "☰");
    }
}
