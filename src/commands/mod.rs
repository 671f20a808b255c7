pub mod detect;
pub mod host;
pub mod launch;
pub mod menu;
pub mod status;

pub use detect::*;
pub use host::*;
pub use launch::*;
pub use menu::*;
pub use status::*;
