pub mod error;
pub mod kit;
pub mod package;
pub mod raster;
pub mod readme;

pub use error::{KitError, Result};
pub use kit::{generate, generate_with_progress, KitConfig, KitReport};
