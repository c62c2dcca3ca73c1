// File: src/gui/view/grid.rs
//
// Canvas program for the weekly grid: six day columns, an hour ruler, and
// the layout engine's blocks. Hebrew block labels rely on iced's advanced
// text shaping for correct right-to-left rendering.
use crate::gui::message::Message;
use crate::gui::view::kind_color;
use crate::layout::{Block, DAY_COUNT};
use crate::model::Weekday;
use strum::IntoEnumIterator;

use iced::widget::canvas;
use iced::widget::canvas::{Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme, mouse};

/// Pixels reserved for the hour ruler on the left.
const RULER_WIDTH: f32 = 48.0;
/// Pixels reserved for the day labels on top.
const HEADER_HEIGHT: f32 = 26.0;

pub struct ScheduleGrid {
    blocks: Vec<Block>,
    day_start: f32,
    day_end: f32,
}

impl ScheduleGrid {
    pub fn new(blocks: Vec<Block>, day_start: f32, day_end: f32) -> Self {
        // A degenerate hour range would divide by zero below.
        let day_end = if day_end > day_start {
            day_end
        } else {
            day_start + 1.0
        };
        Self {
            blocks,
            day_start,
            day_end,
        }
    }

    fn x(&self, day_units: f32, px_per_day: f32) -> f32 {
        RULER_WIDTH + day_units * px_per_day
    }

    fn y(&self, hour: f32, px_per_hour: f32) -> f32 {
        HEADER_HEIGHT + (hour - self.day_start) * px_per_hour
    }
}

impl canvas::Program<Message> for ScheduleGrid {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();

        let px_per_day = (bounds.width - RULER_WIDTH) / DAY_COUNT as f32;
        let px_per_hour = (bounds.height - HEADER_HEIGHT) / (self.day_end - self.day_start);

        let line_color = palette.background.strong.color;
        let label_color = palette.background.base.text;

        // Hour ruler and horizontal lines
        let mut hour = self.day_start.ceil();
        while hour <= self.day_end {
            let y = self.y(hour, px_per_hour);
            frame.stroke(
                &Path::line(
                    Point::new(RULER_WIDTH, y),
                    Point::new(bounds.width, y),
                ),
                Stroke::default().with_color(line_color).with_width(1.0),
            );
            frame.fill_text(canvas::Text {
                content: format!("{:02}:00", hour as u32),
                position: Point::new(4.0, y - 7.0),
                color: label_color,
                size: 12.0.into(),
                ..canvas::Text::default()
            });
            hour += 1.0;
        }

        // Day columns and headers
        for (i, day) in Weekday::iter().enumerate() {
            let x = self.x(i as f32, px_per_day);
            frame.stroke(
                &Path::line(
                    Point::new(x, HEADER_HEIGHT),
                    Point::new(x, bounds.height),
                ),
                Stroke::default().with_color(line_color).with_width(1.0),
            );
            frame.fill_text(canvas::Text {
                content: day.to_string(),
                position: Point::new(x + px_per_day / 2.0, 4.0),
                color: label_color,
                size: 14.0.into(),
                align_x: iced::widget::text::Alignment::Center,
                ..canvas::Text::default()
            });
        }
        // Closing line on the right edge
        let right = self.x(DAY_COUNT as f32, px_per_day);
        frame.stroke(
            &Path::line(
                Point::new(right, HEADER_HEIGHT),
                Point::new(right, bounds.height),
            ),
            Stroke::default().with_color(line_color).with_width(1.0),
        );

        // Session blocks
        for block in &self.blocks {
            let x = self.x(block.x_offset, px_per_day);
            let y_top = self.y(block.y_start, px_per_hour);
            let y_bottom = self.y(block.y_end, px_per_hour);
            let size = Size::new(block.width * px_per_day, y_bottom - y_top);

            frame.fill_rectangle(Point::new(x, y_top), size, kind_color(block.kind));

            frame.fill_text(canvas::Text {
                content: block.label.clone(),
                position: Point::new(x + size.width / 2.0, y_top + size.height / 2.0),
                color: Color::WHITE,
                size: 12.0.into(),
                align_x: iced::widget::text::Alignment::Center,
                align_y: iced::alignment::Vertical::Center,
                shaping: iced::widget::text::Shaping::Advanced,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
