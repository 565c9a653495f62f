use tandem_core::ServerMessage;
use tandem_server::RouteOutcome;

use crate::integration::{create_test_service, init_tracing};
use crate::utils::pair_clients;

#[tokio::test]
async fn test_offer_and_answer_relayed_verbatim() {
    init_tracing();

    let service = create_test_service();
    let (mut a, mut b) = pair_clients(&service).await.expect("Pairing failed");

    let offer = r#"{"type":"video_offer", "sdp":{"type":"offer","sdp":"v=0\r\no=- 1 2 IN IP4 0.0.0.0\r\n"},"extra":[1,2]}"#;
    assert_eq!(a.send_text(offer).await, RouteOutcome::Relayed { to: b.id });
    assert_eq!(b.recv_raw().await.unwrap(), offer);

    let answer = r#"{"type":"video_answer","sdp":{"type":"answer","sdp":"v=0\r\n"}}"#;
    assert_eq!(b.send_text(answer).await, RouteOutcome::Relayed { to: a.id });
    assert_eq!(a.recv_raw().await.unwrap(), answer);
}

#[tokio::test]
async fn test_ice_candidate_relayed() {
    init_tracing();

    let service = create_test_service();
    let (a, mut b) = pair_clients(&service).await.expect("Pairing failed");

    let candidate = r#"{"type":"ice_candidate","candidate":{"candidate":"candidate:1 1 udp 2122260223 10.0.0.2 54400 typ host","sdpMid":"0","sdpMLineIndex":0}}"#;
    a.send_text(candidate).await;

    let msg = b.recv().await.expect("Partner should get the candidate");
    assert!(matches!(msg, ServerMessage::IceCandidate { .. }));
}
