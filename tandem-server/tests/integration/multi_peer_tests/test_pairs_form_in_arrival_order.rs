use tandem_core::ServerMessage;
use tandem_server::{PairingOutcome, RouteOutcome};

use crate::integration::{create_test_service, init_tracing};
use crate::utils::{TestClient, assert_invariants};

#[tokio::test]
async fn test_pairs_form_in_arrival_order() {
    init_tracing();

    let service = create_test_service();
    let clients: Vec<TestClient> = (0..4).map(|_| TestClient::connect(&service)).collect();

    let mut outcomes = Vec::new();
    for client in &clients {
        outcomes.push(client.find_partner().await);
    }

    assert_eq!(outcomes[0], RouteOutcome::Pairing(PairingOutcome::Enqueued));
    assert_eq!(
        outcomes[1],
        RouteOutcome::Pairing(PairingOutcome::Matched {
            partner: clients[0].id
        })
    );
    assert_eq!(outcomes[2], RouteOutcome::Pairing(PairingOutcome::Enqueued));
    assert_eq!(
        outcomes[3],
        RouteOutcome::Pairing(PairingOutcome::Matched {
            partner: clients[2].id
        })
    );
    assert_invariants(&service).await;
}

#[tokio::test]
async fn test_earliest_waiter_is_matched_first() {
    init_tracing();

    let service = create_test_service();
    let mut early = TestClient::connect(&service);
    let mut a = TestClient::connect(&service);
    let mut b = TestClient::connect(&service);
    let mut late = TestClient::connect(&service);

    // early waits, a takes early, b waits, late takes b
    early.find_partner().await;
    a.find_partner().await;
    b.find_partner().await;
    late.find_partner().await;

    assert_eq!(early.recv().await.unwrap(), ServerMessage::Waiting);
    assert_eq!(early.recv().await.unwrap(), ServerMessage::PartnerFound);
    assert_eq!(a.recv().await.unwrap(), ServerMessage::PartnerFound);
    assert_eq!(b.recv().await.unwrap(), ServerMessage::Waiting);
    assert_eq!(b.recv().await.unwrap(), ServerMessage::PartnerFound);
    assert_eq!(late.recv().await.unwrap(), ServerMessage::PartnerFound);

    let snapshot = service.matchmaker().snapshot().await;
    assert!(snapshot.is_paired(&early.id, &a.id));
    assert!(snapshot.is_paired(&b.id, &late.id));
    assert!(snapshot.waiting.is_empty());
}
