use tandem_core::{ClientMessage, ServerMessage};
use tandem_server::RouteOutcome;

use crate::integration::{create_test_service, init_tracing};
use crate::utils::pair_clients;

#[tokio::test]
async fn test_chat_message_filtered() {
    init_tracing();

    let service = create_test_service();
    let (mut a, mut b) = pair_clients(&service).await.expect("Pairing failed");

    let outcome = a
        .send(&ClientMessage::ChatMessage {
            message: "hello badword1".to_string(),
        })
        .await;
    assert_eq!(outcome, RouteOutcome::Relayed { to: b.id });

    let msg = b.recv().await.expect("Partner should get the chat");
    assert_eq!(
        msg,
        ServerMessage::ChatMessage {
            message: "hello ***".to_string()
        }
    );

    a.expect_silence().await.expect("Sender gets no echo");
}

#[tokio::test]
async fn test_chat_drops_extra_fields() {
    init_tracing();

    let service = create_test_service();
    let (a, mut b) = pair_clients(&service).await.expect("Pairing failed");

    a.send_text(r#"{"type":"chat_message","message":"BADWORD2 hi","nick":"x"}"#)
        .await;

    assert_eq!(
        b.recv_raw().await.unwrap(),
        r#"{"type":"chat_message","message":"*** hi"}"#
    );
}

#[tokio::test]
async fn test_chat_flows_both_ways() {
    init_tracing();

    let service = create_test_service();
    let (mut a, mut b) = pair_clients(&service).await.expect("Pairing failed");

    a.send(&ClientMessage::ChatMessage {
        message: "hi".into(),
    })
    .await;
    b.send(&ClientMessage::ChatMessage {
        message: "hey".into(),
    })
    .await;

    assert_eq!(
        b.recv().await.unwrap(),
        ServerMessage::ChatMessage {
            message: "hi".into()
        }
    );
    assert_eq!(
        a.recv().await.unwrap(),
        ServerMessage::ChatMessage {
            message: "hey".into()
        }
    );
}
