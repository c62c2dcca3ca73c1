// File: src/gui/view/mod.rs
pub mod grid;
pub mod toggles;

use crate::config::AppTheme;
use crate::gui::message::Message;
use crate::gui::state::{AppState, GuiApp};
use crate::gui::view::grid::ScheduleGrid;
use crate::gui::view::toggles::view_toggle_panel;
use crate::layout;
use crate::model::SessionKind;
use strum::IntoEnumIterator;

use iced::widget::{
    Space, button, canvas, column, container, row, scrollable, text, text_input,
};
use iced::{Color, Element, Length, Theme};

/// Block fill colors, one per session kind (matching the classic
/// blue / green / orange course-type palette).
pub fn kind_color(kind: SessionKind) -> Color {
    match kind {
        SessionKind::Lecture => Color::from_rgb8(0x1f, 0x77, 0xb4),
        SessionKind::Exercise => Color::from_rgb8(0x2c, 0xa0, 0x2c),
        SessionKind::Lab => Color::from_rgb8(0xff, 0x7f, 0x0e),
    }
}

/// Lighter variants used for the toggle buttons.
pub fn kind_color_light(kind: SessionKind) -> Color {
    match kind {
        SessionKind::Lecture => Color::from_rgb8(0xad, 0xd8, 0xe6),
        SessionKind::Exercise => Color::from_rgb8(0x90, 0xee, 0x90),
        SessionKind::Lab => Color::from_rgb8(0xff, 0xa5, 0x00),
    }
}

pub fn root_view(app: &GuiApp) -> Element<'_, Message> {
    let body: Element<'_, Message> = match app.state {
        AppState::Loading => centered_message("Loading..."),
        AppState::Picking => view_picker(),
        AppState::Titling => view_title_form(app),
        AppState::Extracting => centered_message("Reading images, this can take a while..."),
        AppState::Active => view_schedule(app),
        AppState::Settings => view_settings(app),
        AppState::Fatal => view_fatal(app),
    };

    let mut root = column![];
    if let Some(err) = &app.error_msg
        && app.state != AppState::Fatal
    {
        root = root.push(error_banner(err));
    }
    root.push(body).into()
}

fn centered_message(msg: &str) -> Element<'_, Message> {
    container(text(msg).size(24))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn error_banner(err: &str) -> Element<'_, Message> {
    container(
        row![
            text(err).width(Length::Fill),
            button(text("Dismiss").size(14)).on_press(Message::DismissError),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center),
    )
    .padding(8)
    .width(Length::Fill)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.danger.weak.color.into()),
            text_color: Some(palette.danger.weak.text),
            ..container::Style::default()
        }
    })
    .into()
}

fn view_picker() -> Element<'static, Message> {
    container(
        column![
            text("Weekly Schedule Builder").size(32),
            text("Pick screenshots of your course registration pages.").size(16),
            Space::new().height(Length::Fixed(12.0)),
            row![
                button(text("Select images...").size(18)).on_press(Message::PickImages),
                button(text("Settings").size(18)).on_press(Message::OpenSettings),
            ]
            .spacing(12),
        ]
        .spacing(10)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn view_title_form(app: &GuiApp) -> Element<'_, Message> {
    let mut form = column![text("Enter a title for each image").size(24)].spacing(10);

    for (i, path) in app.picked_images.iter().enumerate() {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let value = app.title_inputs.get(i).map(String::as_str).unwrap_or("");

        form = form.push(
            row![
                text(file_name).width(Length::FillPortion(2)),
                text_input("Title", value)
                    .on_input(move |v| Message::TitleChanged(i, v))
                    .width(Length::FillPortion(3)),
            ]
            .spacing(12)
            .align_y(iced::Alignment::Center),
        );
    }

    form = form.push(
        container(button(text("Submit").size(18)).on_press(Message::SubmitTitles))
            .center_x(Length::Fill),
    );

    container(scrollable(form.padding(20)).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_schedule(app: &GuiApp) -> Element<'_, Message> {
    let active: Vec<_> = app.store.active_entries();
    let blocks = layout::layout(&active);
    let grid = canvas(ScheduleGrid::new(
        blocks,
        app.config.day_start_hour as f32,
        app.config.day_end_hour as f32,
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    let top_bar = row![
        text("Weekly Schedule").size(20),
        Space::new().width(Length::Fill),
        button(text("Settings").size(14)).on_press(Message::OpenSettings),
    ]
    .padding(6)
    .align_y(iced::Alignment::Center);

    column![
        top_bar,
        container(grid)
            .width(Length::Fill)
            .height(Length::FillPortion(3)),
        container(view_toggle_panel(app))
            .width(Length::Fill)
            .height(Length::FillPortion(2)),
    ]
    .into()
}

fn view_settings(app: &GuiApp) -> Element<'_, Message> {
    let theme_picker = iced::widget::pick_list(
        AppTheme::iter().collect::<Vec<_>>(),
        Some(app.current_theme),
        Message::ThemeChanged,
    );

    container(
        column![
            text("Settings").size(28),
            row![
                text("Theme").width(Length::Fixed(160.0)),
                theme_picker,
            ]
            .spacing(10)
            .align_y(iced::Alignment::Center),
            row![
                text("OCR language").width(Length::Fixed(160.0)),
                text_input("heb", &app.ocr_language_input)
                    .on_input(Message::OcrLanguageChanged)
                    .width(Length::Fixed(120.0)),
            ]
            .spacing(10)
            .align_y(iced::Alignment::Center),
            button(text("Done").size(16)).on_press(Message::CloseSettings),
        ]
        .spacing(16),
    )
    .padding(30)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn view_fatal(app: &GuiApp) -> Element<'_, Message> {
    let msg = app.fatal_msg.as_deref().unwrap_or("Unrecoverable error");
    container(
        column![
            text("Error").size(32),
            text(msg).size(18),
            button(text("Quit").size(16)).on_press(Message::Quit),
        ]
        .spacing(14)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
