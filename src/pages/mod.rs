//! Content panels for the portfolio.
//!
//! Each panel is a pure function over the loaded content table.

mod experience;
mod gallery;
mod hobbies;
mod home;

pub use experience::ExperiencePage;
pub use gallery::Gallery;
pub use hobbies::HobbyPage;
pub use home::HomePage;
