// Central message handler for the GUI.
use crate::gui::message::{ExtractedSources, Message};
use crate::gui::state::{AppState, GuiApp};
use crate::model::parser;
use crate::ocr::{OcrConfig, OcrEngine};
use iced::Task;
use std::path::PathBuf;

pub fn update(app: &mut GuiApp, message: Message) -> Task<Message> {
    match message {
        Message::ConfigLoaded(result) => {
            match result {
                Ok(config) => {
                    app.current_theme = config.theme;
                    app.ocr_language_input = config.ocr_language.clone();
                    app.config = config;
                }
                Err(e) => {
                    log::warn!("could not load config, using defaults: {}", e);
                    app.error_msg = Some(e);
                    app.ocr_language_input = app.config.ocr_language.clone();
                }
            }
            app.state = AppState::Picking;
            Task::none()
        }

        Message::PickImages => Task::perform(pick_images(), Message::ImagesPicked),

        Message::ImagesPicked(paths) => {
            if paths.is_empty() {
                app.fatal_msg = Some("No images selected!".to_string());
                app.state = AppState::Fatal;
                return Task::none();
            }
            app.title_inputs = vec![String::new(); paths.len()];
            app.picked_images = paths;
            app.state = AppState::Titling;
            Task::none()
        }

        Message::TitleChanged(index, value) => {
            if let Some(slot) = app.title_inputs.get_mut(index) {
                *slot = value;
            }
            Task::none()
        }

        Message::SubmitTitles => handle_submit_titles(app),

        Message::SourcesExtracted(result) => {
            match result {
                Ok(sources) => {
                    for (title, text) in sources {
                        let entries = parser::parse_text(&text, &title);
                        log::info!("parsed {} entries from '{}'", entries.len(), title);
                        if let Err(e) = app.store.ingest(&title, entries) {
                            // Unique titles are enforced at the form, so this
                            // indicates a configuration error upstream.
                            app.error_msg = Some(e.to_string());
                        }
                    }
                    app.state = AppState::Active;
                }
                Err(e) => {
                    app.fatal_msg = Some(e);
                    app.state = AppState::Fatal;
                }
            }
            Task::none()
        }

        Message::ToggleEntry(key) => {
            // The grid recomputes its layout from the active set on redraw.
            app.store.toggle(key);
            Task::none()
        }

        Message::OpenSettings => {
            app.settings_return = app.state;
            app.state = AppState::Settings;
            Task::none()
        }

        Message::CloseSettings => {
            let language = app.ocr_language_input.trim();
            if !language.is_empty() && language != app.config.ocr_language {
                app.config.ocr_language = language.to_string();
            }
            save_config(app);
            app.state = app.settings_return;
            Task::none()
        }

        Message::ThemeChanged(theme) => {
            app.current_theme = theme;
            app.config.theme = theme;
            save_config(app);
            Task::none()
        }

        Message::OcrLanguageChanged(value) => {
            app.ocr_language_input = value;
            Task::none()
        }

        Message::DismissError => {
            app.error_msg = None;
            Task::none()
        }

        Message::Quit => iced::exit(),
    }
}

fn handle_submit_titles(app: &mut GuiApp) -> Task<Message> {
    let titles: Vec<String> = app
        .title_inputs
        .iter()
        .map(|t| t.trim().to_string())
        .collect();

    if titles.iter().any(|t| t.is_empty()) {
        app.fatal_msg = Some("All images must have titles!".to_string());
        app.state = AppState::Fatal;
        return Task::none();
    }

    // Titles become source labels, which the store requires to be unique.
    for (i, title) in titles.iter().enumerate() {
        if titles[..i].contains(title) {
            app.error_msg = Some(format!("Duplicate title '{}': titles must be unique", title));
            return Task::none();
        }
    }

    app.error_msg = None;
    app.state = AppState::Extracting;

    let jobs: Vec<(String, PathBuf)> = titles
        .into_iter()
        .zip(app.picked_images.iter().cloned())
        .collect();
    Task::perform(
        extract_all(app.config.ocr_config(), jobs),
        Message::SourcesExtracted,
    )
}

async fn pick_images() -> Vec<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Select images for processing")
        .add_filter("Image files", &["png", "jpg", "jpeg", "bmp"])
        .pick_files()
        .await
        .map(|files| {
            files
                .into_iter()
                .map(|f| f.path().to_path_buf())
                .collect()
        })
        .unwrap_or_default()
}

/// Runs OCR for every image off the UI thread, in selection order.
///
/// A failed image degrades to an empty text block (and therefore zero
/// entries); it never aborts the other images.
async fn extract_all(
    config: OcrConfig,
    jobs: Vec<(String, PathBuf)>,
) -> Result<ExtractedSources, String> {
    tokio::task::spawn_blocking(move || {
        let engine = OcrEngine::new(config);
        jobs.into_iter()
            .map(|(title, path)| {
                let text = match engine.extract_text(&path) {
                    Ok(text) => text,
                    Err(e) => {
                        log::error!("text extraction failed for {}: {:#}", path.display(), e);
                        String::new()
                    }
                };
                (title, text)
            })
            .collect()
    })
    .await
    .map_err(|e| format!("Extraction task failed: {}", e))
}

fn save_config(app: &mut GuiApp) {
    if let Err(e) = app.config.save() {
        log::error!("failed to save config: {:#}", e);
        app.error_msg = Some(e.to_string());
    }
}
