// File: ./src/gui/state.rs
// Manages the application state for the GUI (Iced).
use crate::config::{AppTheme, Config};
use crate::store::ScheduleStore;
use std::path::PathBuf;

#[derive(Default, PartialEq, Clone, Copy, Debug)]
pub enum AppState {
    #[default]
    Loading,
    /// Waiting for the user to pick image files.
    Picking,
    /// One title per picked image.
    Titling,
    /// OCR running in the background.
    Extracting,
    /// Interactive weekly grid.
    Active,
    Settings,
    /// Terminal input error; only exit remains.
    Fatal,
}

pub struct GuiApp {
    pub state: AppState,
    pub config: Config,
    pub store: ScheduleStore,

    // Image selection
    pub picked_images: Vec<PathBuf>,
    pub title_inputs: Vec<String>,

    // Settings inputs
    pub ocr_language_input: String,
    pub settings_return: AppState,

    // System
    pub current_theme: AppTheme,
    pub error_msg: Option<String>,
    pub fatal_msg: Option<String>,
}

impl Default for GuiApp {
    fn default() -> Self {
        Self {
            state: AppState::Loading,
            config: Config::default(),
            store: ScheduleStore::new(),
            picked_images: vec![],
            title_inputs: vec![],
            ocr_language_input: String::new(),
            settings_return: AppState::Picking,
            current_theme: AppTheme::default(),
            error_msg: None,
            fatal_msg: None,
        }
    }
}
