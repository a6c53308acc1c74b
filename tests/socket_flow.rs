// End-to-end frame flow: a real WebSocket server in-process, the real client
// on the other end, asserting what the display would receive.
use std::time::Duration;

use anyhow::Result;
use futures_util::SinkExt;
use tokio::net::TcpListener;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_tungstenite::tungstenite::Message;

use chatty::client::services::websocket_client::{WebSocketClient, WebSocketMessage};

/// Serve una sola connessione: invia i frame dati e poi chiude.
async fn spawn_feed(frames: Vec<String>) -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Ok((stream, _)) = listener.accept().await {
            let mut websocket = tokio_tungstenite::accept_async(stream)
                .await
                .expect("handshake");
            for frame in frames {
                websocket
                    .send(Message::Text(frame))
                    .await
                    .expect("send frame");
            }
            websocket.close(None).await.ok();
        }
    });

    Ok(format!("ws://{}", addr))
}

async fn connect(url: String) -> Result<UnboundedReceiver<WebSocketMessage>> {
    let mut client = WebSocketClient::new(url);
    client.connect().await?;
    assert!(client.is_connected());
    Ok(client.take_receiver().expect("receiver available once"))
}

async fn next_event(rx: &mut UnboundedReceiver<WebSocketMessage>) -> WebSocketMessage {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("event within timeout")
        .expect("channel open")
}

#[tokio::test]
async fn delivers_frames_in_send_order() -> Result<()> {
    let frames: Vec<String> = (0..5)
        .map(|i| format!(r#"{{"channel":"general","message":"msg {}"}}"#, i))
        .collect();
    let url = spawn_feed(frames).await?;
    let mut rx = connect(url).await?;

    for i in 0..5 {
        match next_event(&mut rx).await {
            WebSocketMessage::NewMessage(msg) => {
                assert_eq!(msg.channel, "general");
                assert_eq!(msg.message, format!("msg {}", i));
            }
            other => panic!("expected NewMessage, got {:?}", other),
        }
    }

    // Dopo l'ultimo frame il server chiude: un solo evento di errore, poi nulla.
    match next_event(&mut rx).await {
        WebSocketMessage::Error(_) => {}
        other => panic!("expected Error after close, got {:?}", other),
    }
    assert!(rx.recv().await.is_none());
    Ok(())
}

#[tokio::test]
async fn malformed_frame_is_skipped_without_corrupting_the_rest() -> Result<()> {
    let url = spawn_feed(vec![
        "{this is not json".to_string(),
        r#"{"channel":"general","message":"hi"}"#.to_string(),
    ])
    .await?;
    let mut rx = connect(url).await?;

    // Il frame malformato non deve comparire: il primo evento è quello valido.
    match next_event(&mut rx).await {
        WebSocketMessage::NewMessage(msg) => {
            assert_eq!(msg.channel, "general");
            assert_eq!(msg.message, "hi");
        }
        other => panic!("expected the valid frame first, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn zero_frames_yield_an_empty_feed() -> Result<()> {
    let url = spawn_feed(vec![]).await?;
    let mut rx = connect(url).await?;

    // Nessun messaggio: solo la chiusura, senza entry fantasma.
    match next_event(&mut rx).await {
        WebSocketMessage::Error(_) => {}
        other => panic!("expected only the close event, got {:?}", other),
    }
    assert!(rx.recv().await.is_none());
    Ok(())
}

#[tokio::test]
async fn missing_fields_flow_through_blank() -> Result<()> {
    let url = spawn_feed(vec![r#"{"channel":"general"}"#.to_string()]).await?;
    let mut rx = connect(url).await?;

    match next_event(&mut rx).await {
        WebSocketMessage::NewMessage(msg) => {
            assert_eq!(msg.channel, "general");
            assert_eq!(msg.message, "");
        }
        other => panic!("expected NewMessage, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn connect_fails_cleanly_when_nobody_listens() {
    // Porta chiusa: bind e rilascio immediato per ottenere un indirizzo morto.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let mut client = WebSocketClient::new(format!("ws://{}", addr));
    assert!(client.connect().await.is_err());
    assert!(!client.is_connected());
}
