//! Carousel navigation: index state plus the adapters that drive it.

mod controller;
pub use controller::Carousel;

pub mod input;
pub use input::{NavCommand, SwipeTracker};
