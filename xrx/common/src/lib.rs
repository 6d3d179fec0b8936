mod logging;
mod version;

pub use logging::*;
pub use version::*;

pub use anyhow;
pub use log;
pub use once_cell;

pub use log::{debug, error, info, warn};
