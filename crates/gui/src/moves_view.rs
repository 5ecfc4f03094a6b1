//! Last-moves strip: player on top, AI underneath

use crate::styles::rgb;
use iced::widget::{column, container, row, text};
use iced::{Alignment, Border, Color, Element};
use rps_core::Move;
use session::{move_rgb, LastMovesStrip};

pub fn moves_strip<'a, Message: 'a>(strip: &LastMovesStrip) -> Element<'a, Message> {
    let mut slots = row![].spacing(8);

    for slot in &strip.slots {
        slots = slots.push(
            column![
                text("P").size(10),
                move_badge(slot.player),
                move_badge(slot.opponent),
                text("A").size(10),
            ]
            .spacing(3)
            .align_x(Alignment::Center),
        );
    }

    column![text(strip.title.clone()).size(13), slots]
        .spacing(6)
        .align_x(Alignment::Center)
        .into()
}

/// Small coloured box holding a move letter, or a dash for an empty slot
fn move_badge<'a, Message: 'a>(mv: Option<Move>) -> Element<'a, Message> {
    let color = rgb(move_rgb(mv));
    let label = mv.map_or("-".to_string(), |m| m.to_string());

    container(text(label).size(14))
        .padding([2, 9])
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(color)),
            text_color: Some(Color::WHITE),
            border: Border {
                radius: 4.0.into(),
                ..Border::default()
            },
            ..Default::default()
        })
        .into()
}
