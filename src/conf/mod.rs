//! Optional user configuration.

pub mod loader;
pub mod model;
pub mod paths;

pub use loader::load;
pub use model::{ConfigurationModel, PackConfigSection, UiConfigSection};
