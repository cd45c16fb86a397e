pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{
    client::EsvClient,
    engine::{Selection, VerseEngine},
    references::ReferenceStore,
    render::{render, BorderStyle},
};
pub use crate::domain::model::PassageResult;
pub use crate::utils::error::{Result, VerseError};
