use iced::widget::{Column, Container, Row, Text};
use iced::{Color, Element, Font, Length};

use crate::client::gui::widgets::message_list;
use crate::client::models::app_state::ChatAppState;
use crate::client::models::messages::Message;

// Color palette per la chat
const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18); // Deep navy
const CHAT_BG: Color = Color::from_rgb(0.08, 0.09, 0.20); // Slightly lighter for chat area
const HEADER_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn view<'a>(state: &'a ChatAppState) -> Element<'a, Message> {
    // Header con il nome dell'app
    let header_info = Column::new()
        .push(
            Text::new("chatty")
                .font(BOLD_FONT)
                .size(20)
                .style(TEXT_PRIMARY),
        )
        .push(Text::new("Live feed").size(12).style(TEXT_SECONDARY))
        .spacing(2);

    let header = Container::new(Row::new().spacing(12).push(header_info))
        .padding([12, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            |_: &iced::Theme| iced::widget::container::Appearance {
                background: Some(iced::Background::Color(HEADER_BG)),
                ..Default::default()
            },
        )));

    // Area messaggi
    let messages_area = Container::new(message_list::view(&state.messages))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            |_: &iced::Theme| iced::widget::container::Appearance {
                background: Some(iced::Background::Color(CHAT_BG)),
                ..Default::default()
            },
        )));

    // Layout principale: niente input area, il feed è di sola lettura
    let content = Column::new()
        .push(header)
        .push(messages_area)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            |_: &iced::Theme| iced::widget::container::Appearance {
                background: Some(iced::Background::Color(BG_MAIN)),
                ..Default::default()
            },
        )))
        .into()
}
