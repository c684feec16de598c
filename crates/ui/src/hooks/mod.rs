//! # UI Hooks
//!
//! Custom Dioxus hooks for the CineHub UI.
//!
//! This module provides reusable hooks for:
//! - Viewport width tracking (window resize events)
//! - The top bar's collapsible menu state

// ============================================================================
// Module Declarations
// ============================================================================

pub mod use_viewport;

// ============================================================================
// Re-exports
// ============================================================================

pub use use_viewport::{
    MENU_BREAKPOINT, MenuIcon, MenuState, NavLayout, initial_window_width, use_window_width,
};
