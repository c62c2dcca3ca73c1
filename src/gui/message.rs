// Defines all messages used for the Elm architecture in the GUI.

use crate::config::{AppTheme, Config};
use crate::store::EntryKey;
use std::path::PathBuf;

/// (title, raw OCR text) per image, in selection order.
pub type ExtractedSources = Vec<(String, String)>;

#[derive(Debug, Clone)]
pub enum Message {
    ConfigLoaded(Result<Config, String>),

    // Image selection + titling
    PickImages,
    ImagesPicked(Vec<PathBuf>),
    TitleChanged(usize, String),
    SubmitTitles,
    SourcesExtracted(Result<ExtractedSources, String>),

    // Interactive schedule
    ToggleEntry(EntryKey),

    // Settings
    OpenSettings,
    CloseSettings,
    ThemeChanged(AppTheme),
    OcrLanguageChanged(String),

    DismissError,
    Quit,
}
