// Entry point and setup for the GUI application.

pub mod message;
pub mod state;
pub mod update;
pub mod view;

use crate::config::{AppTheme, Config};
use crate::gui::message::Message;
use crate::gui::state::GuiApp;
use iced::{Element, Task, Theme};

pub fn run() -> iced::Result {
    iced::application(GuiApp::new, GuiApp::update, GuiApp::view)
        .title(GuiApp::title)
        .theme(GuiApp::theme)
        .run()
}

impl GuiApp {
    fn new() -> (Self, Task<Message>) {
        let task = Task::perform(
            async { Config::load().map_err(|e| e.to_string()) },
            Message::ConfigLoaded,
        );
        (Self::default(), task)
    }

    fn title(&self) -> String {
        "Luach | Weekly course schedule from screenshots".to_string()
    }

    fn theme(&self) -> Theme {
        match self.current_theme {
            AppTheme::Dark => Theme::Dark,
            AppTheme::Light => Theme::Light,
            AppTheme::Dracula => Theme::Dracula,
            AppTheme::Nord => Theme::Nord,
            AppTheme::GruvboxDark => Theme::GruvboxDark,
            AppTheme::CatppuccinMocha => Theme::CatppuccinMocha,
            AppTheme::TokyoNight => Theme::TokyoNight,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::root_view(self)
    }
}
