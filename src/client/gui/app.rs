use iced::{Application, Command, Element, Theme};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::client::config::ClientConfig;
use crate::client::gui::views;
use crate::client::models::app_state::ChatAppState;
use crate::client::models::messages::Message;
use crate::client::services::websocket_client::WebSocketClient;

pub struct ChatApp {
    pub state: ChatAppState,
    pub socket: Arc<Mutex<WebSocketClient>>,
}

impl Application for ChatApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let cfg = ClientConfig::from_env();
        let socket = Arc::new(Mutex::new(WebSocketClient::new(cfg.websocket_url.clone())));
        let app = ChatApp {
            state: ChatAppState::default(),
            socket: socket.clone(),
        };

        // Apri la connessione al mount: un solo tentativo, niente retry.
        let cmd = Command::perform(
            async move {
                let mut guard = socket.lock().await;
                match guard.connect().await {
                    Ok(()) => Message::WebSocketConnected,
                    Err(e) => Message::WebSocketError {
                        error: e.to_string(),
                    },
                }
            },
            |m| m,
        );

        (app, cmd)
    }

    fn title(&self) -> String {
        "chatty".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::WebSocketConnected => {
                log::info!("[APP] WebSocket connesso, avviando controllo messaggi");
                Command::perform(async { Message::CheckWebSocketMessages }, |m| m)
            }
            Message::WebSocketError { error } => {
                // The display stays up, empty and silent; only the log says why.
                log::error!("[APP] Errore WebSocket: {}", error);
                Command::none()
            }
            Message::CheckWebSocketMessages => {
                let socket = self.socket.clone();
                Command::perform(
                    async move {
                        let mut guard = socket.lock().await;
                        if let Some(ws_message) = guard.try_receive() {
                            Message::WebSocketMessageReceived(ws_message)
                        } else {
                            drop(guard);
                            // Continua a controllare dopo un breve delay
                            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
                            Message::CheckWebSocketMessages
                        }
                    },
                    |m| m,
                )
            }
            Message::WebSocketMessageReceived(ws_msg) => {
                let state_update = self
                    .state
                    .update(Message::WebSocketMessageReceived(ws_msg));

                // Immediately restart the WebSocket message checking loop
                let restart_loop =
                    Command::perform(async { Message::CheckWebSocketMessages }, |m| m);

                Command::batch([state_update, restart_loop])
            }
        }
    }

    fn view(&self) -> Element<Message> {
        views::chat::view(&self.state)
    }
}
