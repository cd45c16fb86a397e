pub mod client;
pub mod engine;
pub mod references;
pub mod render;

pub use crate::domain::model::{PassageMeta, PassageResult, Reference};
pub use crate::domain::ports::PassageSource;
pub use crate::utils::error::Result;
