// File: src/gui/view/toggles.rs
// One column of toggle buttons per source image, grouped by session kind.
use crate::gui::message::Message;
use crate::gui::state::GuiApp;
use crate::gui::view::kind_color_light;
use crate::model::SessionKind;
use crate::store::EntryKey;
use strum::IntoEnumIterator;

use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Border, Color, Element, Length, Theme};

pub fn view_toggle_panel(app: &GuiApp) -> Element<'_, Message> {
    let mut columns = row![].spacing(28).padding(10);

    for (source_index, source) in app.store.sources().iter().enumerate() {
        let mut col = column![
            text(&source.label)
                .size(18)
                .shaping(iced::widget::text::Shaping::Advanced)
        ]
        .spacing(6)
        .align_x(iced::Alignment::Center);

        if source.entries.is_empty() {
            col = col.push(text("(no sessions found)").size(13));
        }

        for kind in SessionKind::iter() {
            let of_kind: Vec<(usize, &crate::model::ScheduleEntry)> = source
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.kind == kind)
                .collect();
            if of_kind.is_empty() {
                continue;
            }

            col = col.push(text(kind.heading()).size(15));

            for (entry_index, entry) in of_kind {
                let key = EntryKey {
                    source: source_index,
                    entry: entry_index,
                };
                let active = entry.active;
                col = col.push(
                    button(
                        text(entry.short_label())
                            .size(14)
                            .shaping(iced::widget::text::Shaping::Advanced),
                    )
                    .width(Length::Fixed(190.0))
                    .on_press(Message::ToggleEntry(key))
                    .style(move |theme: &Theme, status: button::Status| {
                        toggle_style(kind, active, theme, status)
                    }),
                );
            }
        }

        columns = columns.push(col);
    }

    container(
        scrollable(columns).direction(Direction::Both {
            vertical: Scrollbar::default(),
            horizontal: Scrollbar::default(),
        }),
    )
    .width(Length::Fill)
    .into()
}

fn toggle_style(
    kind: SessionKind,
    active: bool,
    theme: &Theme,
    status: button::Status,
) -> button::Style {
    let palette = theme.extended_palette();
    let fill = kind_color_light(kind);

    let base = button::Style {
        background: Some(fill.into()),
        text_color: Color::BLACK,
        border: if active {
            Border {
                color: palette.primary.strong.color,
                width: 3.0,
                radius: 4.0.into(),
            }
        } else {
            Border {
                color: Color::TRANSPARENT,
                width: 1.0,
                radius: 4.0.into(),
            }
        },
        ..button::Style::default()
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(
                Color {
                    a: 0.8,
                    ..fill
                }
                .into(),
            ),
            ..base
        },
    }
}
