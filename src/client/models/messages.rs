use crate::client::services::websocket_client::WebSocketMessage;

#[derive(Debug, Clone)]
pub enum Message {
    // WebSocket connection messages
    WebSocketConnected,
    WebSocketError { error: String },
    // Real-time WebSocket messages
    WebSocketMessageReceived(WebSocketMessage),
    CheckWebSocketMessages,
}
