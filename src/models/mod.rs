pub mod background;
pub mod common;
pub mod generation;

pub use background::*;
pub use common::*;
pub use generation::*;
