pub mod crosshair;
pub mod types;

pub use crosshair::CrosshairConfig;
pub use types::*;
