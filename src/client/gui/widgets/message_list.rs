// Widget per la lista dei messaggi
use iced::widget::{scrollable, Column, Container, Scrollable, Space, Text};
use iced::{Color, Element, Length};

use crate::client::models::app_state::ChatMessage;
use crate::client::models::messages::Message;

/// Id del pannello scrollabile, condiviso con il comando di snap in fondo.
pub const MESSAGE_SCROLL_ID: &str = "messages_scroll";

const TAG_BG: Color = Color::from_rgb(0.2, 0.4, 0.8);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

/// Riga renderizzata per un messaggio: canale e testo separati da ": ".
pub fn line_text(msg: &ChatMessage) -> String {
    format!("{}: {}", msg.channel, msg.message)
}

pub fn view<'a>(messages: &'a [ChatMessage]) -> Element<'a, Message> {
    let mut messages_column = Column::new().spacing(8).padding([12, 16]);

    if messages.is_empty() {
        messages_column = messages_column.push(
            Container::new(
                Text::new("In attesa di messaggi...")
                    .size(14)
                    .style(TEXT_SECONDARY),
            )
            .width(Length::Fill)
            .center_x()
            .padding(20),
        );
    } else {
        for msg in messages.iter() {
            messages_column = messages_column.push(message_tag(msg));
        }
    }

    // Spazio in fondo per staccare l'ultimo messaggio dal bordo
    messages_column =
        messages_column.push(Space::new(Length::Fixed(0.0), Length::Fixed(20.0)));

    Scrollable::new(messages_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .id(scrollable::Id::new(MESSAGE_SCROLL_ID))
        .into()
}

fn message_tag(msg: &ChatMessage) -> Element<'_, Message> {
    let tag = Container::new(Text::new(line_text(msg)).size(14).style(TEXT_PRIMARY))
        .padding([6, 10])
        .style(iced::theme::Container::Custom(Box::new(
            |_: &iced::Theme| iced::widget::container::Appearance {
                background: Some(iced::Background::Color(TAG_BG)),
                border: iced::Border {
                    radius: 10.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        )));

    Container::new(tag)
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right)
        .into()
}
