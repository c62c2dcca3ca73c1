// Crate root library declaration and module exports.
pub mod config;
pub mod layout;
pub mod model;
pub mod ocr;
pub mod store;

#[cfg(feature = "gui")]
pub mod gui;
