//! Terminal front end for MAC address normalization.

pub mod clipboard;
pub mod commands;
pub mod interactive;
pub mod logging;
pub mod settings;
pub mod summary;
