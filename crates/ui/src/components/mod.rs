//! # UI Components
//!
//! Reusable Dioxus components for the CineHub interface.
//!
//! ## Component Hierarchy
//!
//! ```text
//! TopBar
//! ├── NavLinks
//! ├── SearchModule
//! └── UserMenu
//!
//! MovieInfo
//! └── RateMovie
//!
//! Listings
//! ├── MovieCard (multiple)
//! └── Pager
//!
//! Input (used by forms)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod input;
pub mod movie_card;
pub mod movie_info;
pub mod rate_movie;
pub mod search_module;
pub mod top_bar;
pub mod user_menu;

// ============================================================================
// Re-exports
// ============================================================================

// Navigation
pub use search_module::{SearchModule, search_route};
pub use top_bar::{NavItem, TopBar, nav_link_active, primary_nav};
pub use user_menu::UserMenu;

// Movie display
pub use movie_card::{MovieCard, Pager, pager_label, pager_targets};
pub use movie_info::{MovieInfo, MovieSummary};
pub use rate_movie::{RateMovie, star_filled};

// Form inputs
pub use input::{Input, input_class, shows_error_message};
