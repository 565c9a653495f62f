use tandem_core::{ProtocolError, ServerMessage};
use tandem_server::{ClientState, RouteOutcome};

use crate::integration::{create_test_service, init_tracing};
use crate::utils::{TestClient, pair_clients};

#[tokio::test]
async fn test_malformed_message_rejected() {
    init_tracing();

    let service = create_test_service();
    let (mut a, mut b) = pair_clients(&service).await.expect("Pairing failed");

    let outcome = a.send_text("this is not json").await;
    assert_eq!(outcome, RouteOutcome::Rejected(ProtocolError::Malformed));

    let msg = a.recv().await.expect("Sender should get an error");
    assert_eq!(
        msg,
        ServerMessage::Error {
            message: "Invalid message format".to_string()
        }
    );

    b.expect_silence().await.expect("Partner must receive nothing");
    assert_eq!(service.client_state(&a.id).await, ClientState::Paired(b.id));
}

#[tokio::test]
async fn test_unknown_type_rejected() {
    init_tracing();

    let service = create_test_service();
    let mut client = TestClient::connect(&service);

    let outcome = client.send_text(r#"{"type":"join_room","room":"x"}"#).await;
    assert_eq!(
        outcome,
        RouteOutcome::Rejected(ProtocolError::UnknownType("join_room".into()))
    );

    let msg = client.recv().await.unwrap();
    assert_eq!(
        msg,
        ServerMessage::Error {
            message: "Unknown message type: join_room".to_string()
        }
    );
    assert_eq!(service.client_state(&client.id).await, ClientState::Idle);
}

#[tokio::test]
async fn test_connection_survives_error() {
    init_tracing();

    let service = create_test_service();
    let mut client = TestClient::connect(&service);

    client.send_text("{").await;
    assert!(matches!(client.recv().await.unwrap(), ServerMessage::Error { .. }));

    client.find_partner().await;
    assert_eq!(client.recv().await.unwrap(), ServerMessage::Waiting);
}
