//! # Pages
//!
//! Routed page components for CineHub. Each one renders inside the shell
//! layout below the top bar.

pub mod home;
pub mod listing;
pub mod login;
pub mod movie_detail;
pub mod not_found;

pub use home::Home;
pub use listing::{Browse, Listing, MovieListing, Search, TopRated};
pub use login::Login;
pub use movie_detail::MovieDetail;
pub use not_found::{NotFound, NotFoundPanel};
