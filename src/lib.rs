pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::fs::{self, FileResource};
pub use crate::core::context::WaitContext;
pub use crate::core::registry::{Registry, ResourceFactory, ResourcePlugin};
pub use crate::domain::ports::Resource;
pub use crate::utils::error::{Result, WaitError};
