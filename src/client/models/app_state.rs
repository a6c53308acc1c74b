use iced::widget::scrollable;
use iced::Command;
use serde::{Deserialize, Serialize};

use crate::client::gui::widgets::message_list::MESSAGE_SCROLL_ID;
use crate::client::models::messages::Message;
use crate::client::services::websocket_client::WebSocketMessage;

/// Una riga della chat: il canale di provenienza e il testo del messaggio.
/// Nessun id, nessun timestamp: conta solo l'ordine di arrivo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub channel: String,
    pub message: String,
}

/// Stato dell'applicazione: la sequenza ordinata dei messaggi decodificati.
#[derive(Debug, Default)]
pub struct ChatAppState {
    pub messages: Vec<ChatMessage>,
}

impl ChatAppState {
    pub fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::WebSocketMessageReceived(WebSocketMessage::NewMessage(chat_msg)) => {
                // Append in arrival order, nothing is ever reordered or dropped.
                self.messages.push(chat_msg);
                log::debug!("[APP] Message appended, total: {}", self.messages.len());

                // Auto-scroll to bottom after the next layout pass
                scrollable::snap_to(
                    scrollable::Id::new(MESSAGE_SCROLL_ID),
                    scrollable::RelativeOffset::END,
                )
            }
            Message::WebSocketMessageReceived(WebSocketMessage::Error(error)) => {
                // Nessun indicatore in UI: la lista smette solo di aggiornarsi.
                log::warn!("[APP] WebSocket error: {}", error);
                Command::none()
            }
            _ => Command::none(),
        }
    }
}
