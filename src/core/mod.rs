pub mod context;
pub mod registry;

pub use crate::domain::ports::Resource;
pub use crate::utils::error::{Result, WaitError};
