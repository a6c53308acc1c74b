use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

use crate::client::models::app_state::ChatMessage;

/// Eventi che il WebSocket inoltra all'applicazione.
#[derive(Debug, Clone)]
pub enum WebSocketMessage {
    NewMessage(ChatMessage),
    Error(String),
}

#[derive(Debug, Clone)]
pub enum WebSocketError {
    ConnectionFailed(String),
}

impl std::fmt::Display for WebSocketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WebSocketError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
        }
    }
}

impl std::error::Error for WebSocketError {}

/// Client WebSocket di sola ricezione: una connessione, un task lettore,
/// eventi consegnati all'applicazione tramite canale mpsc.
pub struct WebSocketClient {
    url: String,
    /// Receiver per l'applicazione per ricevere i messaggi
    event_receiver: Option<mpsc::UnboundedReceiver<WebSocketMessage>>,
}

impl WebSocketClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            event_receiver: None,
        }
    }

    /// Prende il receiver per l'applicazione - può essere chiamato solo una volta
    pub fn take_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<WebSocketMessage>> {
        self.event_receiver.take()
    }

    /// Opens the connection and spawns the reader task. Exactly one attempt:
    /// if the endpoint is down the display simply stays empty.
    pub async fn connect(&mut self) -> Result<(), WebSocketError> {
        log::info!("[WS:CLIENT] Connecting to {}", self.url);
        let (ws_stream, _) = connect_async(&self.url)
            .await
            .map_err(|e| WebSocketError::ConnectionFailed(format!("Failed to connect: {}", e)))?;
        log::info!("[WS:CLIENT] Connected to {}", self.url);

        let (tx, rx) = mpsc::unbounded_channel();
        // Nessuna metà di scrittura: il client non invia mai nulla.
        tokio::spawn(async move {
            Self::handle_incoming_frames(ws_stream, tx).await;
        });
        self.event_receiver = Some(rx);
        Ok(())
    }

    /// Controlla senza bloccare se il lettore ha consegnato un evento.
    pub fn try_receive(&mut self) -> Option<WebSocketMessage> {
        match self.event_receiver.as_mut() {
            Some(rx) => rx.try_recv().ok(),
            None => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.event_receiver.is_some()
    }

    /// Gestisce i messaggi in arrivo dal WebSocket in background
    async fn handle_incoming_frames(
        mut ws_stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
        sender: mpsc::UnboundedSender<WebSocketMessage>,
    ) {
        log::debug!("[WS:CLIENT] Starting incoming frame handler");
        while let Some(message) = ws_stream.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    match decode_frame(&text) {
                        Ok(chat_msg) => {
                            if sender.send(WebSocketMessage::NewMessage(chat_msg)).is_err() {
                                log::debug!("[WS:CLIENT] Receiver dropped, stopping handler");
                                break;
                            }
                        }
                        Err(e) => {
                            // One bad frame never stops the following ones.
                            log::warn!("[WS:CLIENT] Dropping frame: {} - Raw: {}", e, text);
                        }
                    }
                }
                Ok(Message::Close(_)) => {
                    log::info!("[WS:CLIENT] WebSocket connection closed by server");
                    let _ = sender.send(WebSocketMessage::Error("Connection closed".to_string()));
                    break;
                }
                Ok(_) => {
                    // Ignora altri tipi di messaggio (binary, ping, pong)
                }
                Err(e) => {
                    log::warn!("[WS:CLIENT] WebSocket error: {}", e);
                    let _ = sender.send(WebSocketMessage::Error(format!("WebSocket error: {}", e)));
                    break;
                }
            }
        }
        log::debug!("[WS:CLIENT] Frame handling loop ended");
    }
}

/// Parsa un frame JSON dal WebSocket.
///
/// Any valid JSON counts as one chat entry; `channel` and `message` are read
/// as strings when present and left blank otherwise (the sender is trusted
/// for shape conformance).
pub fn decode_frame(text: &str) -> Result<ChatMessage, String> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| format!("Invalid JSON: {}", e))?;

    let channel = value
        .get("channel")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    let message = value
        .get("message")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    Ok(ChatMessage { channel, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_well_formed_frame() {
        let msg = decode_frame(r#"{"channel":"general","message":"hi"}"#).unwrap();
        assert_eq!(msg.channel, "general");
        assert_eq!(msg.message, "hi");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = decode_frame("{not json").unwrap_err();
        assert!(err.starts_with("Invalid JSON"));
    }

    #[test]
    fn missing_fields_render_blank() {
        let msg = decode_frame(r#"{"channel":"general"}"#).unwrap();
        assert_eq!(msg.channel, "general");
        assert_eq!(msg.message, "");
    }

    #[test]
    fn non_string_fields_render_blank() {
        let msg = decode_frame(r#"{"channel":42,"message":["x"]}"#).unwrap();
        assert_eq!(msg.channel, "");
        assert_eq!(msg.message, "");
    }

    #[test]
    fn non_object_json_still_counts_as_a_frame() {
        let msg = decode_frame("42").unwrap();
        assert_eq!(msg.channel, "");
        assert_eq!(msg.message, "");
    }
}
