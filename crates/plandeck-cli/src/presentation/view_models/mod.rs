pub mod common;
pub mod result;
pub mod task;

pub use common::*;
pub use result::*;
pub use task::*;
