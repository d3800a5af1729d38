//! Terminal presentation of the converter

pub mod convert;
pub mod interactive;
pub mod list;
pub mod setup;
pub mod ui;
