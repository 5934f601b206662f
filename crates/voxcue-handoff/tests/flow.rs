//! End-to-end tests for the login flow state machine

use std::time::Duration;

use voxcue_auth::{AuthClient, ClientSettings, Credentials, ReqwestTransport};
use voxcue_bridge::{BridgeDetector, BridgeError, HandoffPayload, PayloadShape};
use voxcue_handoff::{FlowState, HandoffController, HandoffError, HandoffSettings, SubmitOutcome};
use voxcue_test::{start_auth_mock, BridgeCall, RecordingBridge, ScriptedTransport};
use wiremock::{matchers, Mock, ResponseTemplate};

const INIT_DATA: &str = "query_id=AAH&user=%7B%22id%22%3A42%7D&auth_date=1700000000&hash=abc";

fn settings(payload_shape: PayloadShape) -> HandoffSettings {
    HandoffSettings {
        close_delay_ms: 10,
        payload_shape,
        alert_on_failure: false,
    }
}

fn make_controller(
    transport: ScriptedTransport,
    bridge: Option<RecordingBridge>,
    settings: HandoffSettings,
) -> HandoffController<ScriptedTransport, RecordingBridge> {
    HandoffController::new(
        AuthClient::new(transport, ClientSettings::default()),
        BridgeDetector::detect(bridge),
        settings,
    )
}

fn host_bridge() -> RecordingBridge {
    RecordingBridge::new()
        .with_color_scheme("dark")
        .with_init_data("abc")
}

mod validation {
    use super::*;

    #[tokio::test]
    async fn blank_fields_never_reach_the_network() {
        let cases = [("", "hunter2"), ("alice", ""), ("", ""), ("  ", "hunter2")];

        for (username, password) in cases {
            let transport = ScriptedTransport::new().respond(200, r#"{"token":"T"}"#);
            let bridge = host_bridge();
            let controller = make_controller(
                transport.clone(),
                Some(bridge.clone()),
                HandoffSettings::default(),
            );

            let outcome = controller
                .submit(Credentials::new(username, password))
                .await;

            assert!(matches!(
                outcome,
                SubmitOutcome::Failed(HandoffError::Validation(_))
            ));
            assert_eq!(transport.request_count(), 0);
            assert_eq!(controller.state(), FlowState::Idle);
            assert_eq!(
                controller.error().as_deref(),
                Some("Please enter both username and password")
            );
            assert!(bridge.sent_data().is_empty());
        }
    }

    #[tokio::test]
    async fn next_submission_replaces_the_previous_error() {
        let transport = ScriptedTransport::new().respond(401, r#"{"error":"bad password"}"#);
        let controller = make_controller(
            transport,
            Some(host_bridge()),
            settings(PayloadShape::TokenOnly),
        );

        controller.submit(Credentials::new("", "")).await;
        assert!(controller.error().is_some());

        controller.submit(Credentials::new("alice", "wrong")).await;
        assert_eq!(controller.error().as_deref(), Some("bad password"));
    }
}

mod authentication {
    use super::*;

    #[tokio::test]
    async fn rejected_login_returns_to_idle_with_server_message() {
        let transport = ScriptedTransport::new().respond(401, r#"{"error":"bad password"}"#);
        let bridge = host_bridge();
        let controller =
            make_controller(transport, Some(bridge.clone()), HandoffSettings::default());

        let outcome = controller.submit(Credentials::new("alice", "wrong")).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(HandoffError::AuthRejected { status: 401, .. })
        ));
        assert_eq!(controller.state(), FlowState::Idle);
        assert_eq!(controller.error().as_deref(), Some("bad password"));
        assert_eq!(bridge.calls(), vec![BridgeCall::Ready, BridgeCall::Expand]);
    }

    #[tokio::test]
    async fn login_request_carries_the_entered_credentials() {
        let transport = ScriptedTransport::new().respond(401, r#"{"error":"bad password"}"#);
        let controller =
            make_controller(transport.clone(), Some(host_bridge()), HandoffSettings::default());

        controller.submit(Credentials::new("alice", "hunter2")).await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);

        let (url, body) = &requests[0];
        assert_eq!(url, &ClientSettings::default().auth_url);
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(body).unwrap(),
            serde_json::json!({ "username": "alice", "password": "hunter2" })
        );
    }

    #[tokio::test]
    async fn ok_status_without_token_is_a_failure() {
        let transport = ScriptedTransport::new().respond(200, r#"{"status":"ok"}"#);
        let bridge = host_bridge();
        let controller =
            make_controller(transport, Some(bridge.clone()), HandoffSettings::default());

        controller.submit(Credentials::new("alice", "hunter2")).await;

        assert_eq!(controller.state(), FlowState::Idle);
        assert_eq!(
            controller.error().as_deref(),
            Some("Invalid login credentials!")
        );
        assert!(bridge.sent_data().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_is_a_network_error() {
        let transport = ScriptedTransport::new().fail("connection reset");
        let controller =
            make_controller(transport, Some(host_bridge()), HandoffSettings::default());

        let outcome = controller.submit(Credentials::new("alice", "hunter2")).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(HandoffError::Network(_))
        ));
        assert_eq!(
            controller.error().as_deref(),
            Some("Network error. Please try again.")
        );
    }

    #[tokio::test]
    async fn failure_is_recoverable_by_resubmitting() {
        let transport = ScriptedTransport::new()
            .fail("connection reset")
            .respond(200, r#"{"token":"T"}"#);
        let bridge = host_bridge();
        let controller = make_controller(
            transport.clone(),
            Some(bridge.clone()),
            settings(PayloadShape::TokenOnly),
        );

        controller.submit(Credentials::new("alice", "hunter2")).await;
        let outcome = controller.submit(Credentials::new("alice", "hunter2")).await;

        assert!(matches!(outcome, SubmitOutcome::Closed));
        assert_eq!(transport.request_count(), 2);
        assert_eq!(bridge.sent_data(), vec![r#"{"token":"T"}"#.to_owned()]);
    }

    #[tokio::test]
    async fn failure_alerts_through_host_when_enabled() {
        let transport = ScriptedTransport::new().respond(401, r#"{"error":"bad password"}"#);
        let bridge = host_bridge();
        let controller = make_controller(
            transport,
            Some(bridge.clone()),
            HandoffSettings {
                alert_on_failure: true,
                ..HandoffSettings::default()
            },
        );

        controller.submit(Credentials::new("alice", "wrong")).await;

        assert_eq!(
            bridge.calls().last(),
            Some(&BridgeCall::ShowAlert("bad password".to_owned()))
        );
    }
}

mod handoff {
    use super::*;

    #[tokio::test]
    async fn success_sends_payload_then_closes() {
        let transport = ScriptedTransport::new().respond(200, r#"{"token":"T"}"#);
        let bridge = RecordingBridge::new().with_init_data(INIT_DATA);
        let controller = make_controller(
            transport,
            Some(bridge.clone()),
            settings(PayloadShape::TokenWithIdentity),
        );

        let outcome = controller.submit(Credentials::new("alice", "hunter2")).await;

        assert!(matches!(outcome, SubmitOutcome::Closed));
        assert_eq!(controller.state(), FlowState::Closed);

        let calls = bridge.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0], BridgeCall::Ready);
        assert_eq!(calls[1], BridgeCall::Expand);
        assert!(matches!(calls[2], BridgeCall::SendData(_)));
        assert_eq!(calls[3], BridgeCall::Close);

        let payload: HandoffPayload = serde_json::from_str(&bridge.sent_data()[0]).unwrap();
        assert_eq!(
            payload,
            HandoffPayload {
                token: "T".to_owned(),
                telegram_user_id: Some(42),
                init_data: Some(INIT_DATA.to_owned()),
            }
        );
    }

    #[tokio::test]
    async fn payload_shape_is_configurable() {
        let expected = [
            (PayloadShape::TokenOnly, serde_json::json!({ "token": "T" })),
            (
                PayloadShape::TokenWithUserId,
                serde_json::json!({ "token": "T", "telegram_user_id": 42 }),
            ),
            (
                PayloadShape::TokenWithIdentity,
                serde_json::json!({ "token": "T", "telegram_user_id": 42, "initData": INIT_DATA }),
            ),
        ];

        for (shape, payload) in expected {
            let transport = ScriptedTransport::new().respond(200, r#"{"token":"T"}"#);
            let bridge = RecordingBridge::new().with_init_data(INIT_DATA);
            let controller = make_controller(transport, Some(bridge.clone()), settings(shape));

            controller.submit(Credentials::new("alice", "hunter2")).await;

            let sent: serde_json::Value = serde_json::from_str(&bridge.sent_data()[0]).unwrap();
            assert_eq!(sent, payload, "{shape:?}");
        }
    }

    #[tokio::test]
    async fn success_without_bridge_reports_unavailable() {
        let transport = ScriptedTransport::new().respond(200, r#"{"token":"T"}"#);
        let controller = make_controller(transport.clone(), None, HandoffSettings::default());

        let outcome = controller.submit(Credentials::new("alice", "hunter2")).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(HandoffError::BridgeUnavailable)
        ));
        let message = HandoffError::BridgeUnavailable.to_string();
        assert_eq!(controller.state(), FlowState::Failed(message.clone()));
        assert_eq!(controller.error(), Some(message));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn host_refusing_the_message_fails_without_closing() {
        let transport = ScriptedTransport::new().respond(200, r#"{"token":"T"}"#);
        let bridge = host_bridge().failing_send("WebAppDataInvalid");
        let controller = make_controller(
            transport,
            Some(bridge.clone()),
            settings(PayloadShape::TokenOnly),
        );

        let outcome = controller.submit(Credentials::new("alice", "hunter2")).await;

        match outcome {
            SubmitOutcome::Failed(HandoffError::HandoffRejected(BridgeError::Rejected(reason))) => {
                assert_eq!(reason, "WebAppDataInvalid")
            }
            other => panic!("expected the host to reject the handoff, got {other:?}"),
        }

        let message = controller.error().unwrap();
        assert_eq!(controller.state(), FlowState::Failed(message));
        assert_eq!(bridge.sent_data(), vec![r#"{"token":"T"}"#.to_owned()]);
        assert!(!bridge.was_closed());
        assert!(matches!(
            controller.submit(Credentials::new("alice", "hunter2")).await,
            SubmitOutcome::Ignored
        ));
    }

    #[tokio::test]
    async fn oversized_payload_is_never_sent() {
        let token = "t".repeat(2500);
        let init_data = format!("{INIT_DATA}&signature={}", "s".repeat(2000));
        let transport =
            ScriptedTransport::new().respond(200, &serde_json::json!({ "token": token }).to_string());
        let bridge = RecordingBridge::new().with_init_data(&init_data);
        let controller = make_controller(
            transport,
            Some(bridge.clone()),
            settings(PayloadShape::TokenWithIdentity),
        );

        let outcome = controller.submit(Credentials::new("alice", "hunter2")).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(HandoffError::HandoffRejected(
                BridgeError::PayloadTooLarge { limit: 4096, .. }
            ))
        ));
        assert!(controller.state().is_terminal());
        assert!(controller.error().is_some());
        assert_eq!(bridge.calls(), vec![BridgeCall::Ready, BridgeCall::Expand]);
    }

    #[tokio::test(start_paused = true)]
    async fn close_waits_for_the_delay_after_send() {
        let transport = ScriptedTransport::new().respond(200, r#"{"token":"T"}"#);
        let bridge = host_bridge();
        let controller = make_controller(
            transport,
            Some(bridge.clone()),
            HandoffSettings {
                close_delay_ms: 300,
                ..HandoffSettings::default()
            },
        );

        let submit = controller.submit(Credentials::new("alice", "hunter2"));
        tokio::pin!(submit);

        tokio::select! {
            biased;
            _ = &mut submit => panic!("view closed before the delay elapsed"),
            _ = tokio::time::sleep(Duration::from_millis(100)) => {}
        }

        assert_eq!(controller.state(), FlowState::HandoffPending);
        assert_eq!(bridge.sent_data().len(), 1);
        assert!(!bridge.was_closed());

        assert!(matches!(submit.await, SubmitOutcome::Closed));
        assert!(bridge.was_closed());
    }
}

mod reentrancy {
    use super::*;

    #[tokio::test]
    async fn submit_is_ignored_while_request_in_flight() {
        let transport = ScriptedTransport::new()
            .respond(200, r#"{"token":"T"}"#)
            .respond(200, r#"{"token":"U"}"#);
        let bridge = host_bridge();
        let controller = make_controller(
            transport.clone(),
            Some(bridge.clone()),
            settings(PayloadShape::TokenOnly),
        );

        let (first, second) = tokio::join!(
            controller.submit(Credentials::new("alice", "hunter2")),
            controller.submit(Credentials::new("alice", "hunter2")),
        );

        let outcomes = [first, second];
        let closed = outcomes
            .iter()
            .filter(|o| matches!(o, SubmitOutcome::Closed))
            .count();
        let ignored = outcomes
            .iter()
            .filter(|o| matches!(o, SubmitOutcome::Ignored))
            .count();

        assert_eq!((closed, ignored), (1, 1));
        assert_eq!(transport.request_count(), 1);
        assert_eq!(bridge.sent_data(), vec![r#"{"token":"T"}"#.to_owned()]);
    }

    #[tokio::test]
    async fn closed_view_ignores_submit() {
        let transport = ScriptedTransport::new()
            .respond(200, r#"{"token":"T"}"#)
            .respond(200, r#"{"token":"U"}"#);
        let controller = make_controller(
            transport.clone(),
            Some(host_bridge()),
            settings(PayloadShape::TokenOnly),
        );

        controller.submit(Credentials::new("alice", "hunter2")).await;
        let outcome = controller.submit(Credentials::new("alice", "hunter2")).await;

        assert!(matches!(outcome, SubmitOutcome::Ignored));
        assert_eq!(transport.request_count(), 1);
    }
}

mod http {
    use super::*;

    #[tokio::test]
    async fn full_flow_against_login_endpoint() {
        let mock = Mock::given(matchers::method("POST"))
            .and(matchers::path("/auth/login"))
            .and(matchers::body_json(serde_json::json!({
                "username": "alice",
                "password": "hunter2"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": "T" })),
            )
            .expect(1);
        let (_server, client_settings) = start_auth_mock(vec![mock]).await;

        let bridge = RecordingBridge::new().with_init_data(INIT_DATA);
        let controller = HandoffController::new(
            AuthClient::new(ReqwestTransport::default(), client_settings),
            BridgeDetector::detect(Some(bridge.clone())),
            settings(PayloadShape::TokenWithUserId),
        );

        let outcome = controller.submit(Credentials::new("alice", "hunter2")).await;

        assert!(matches!(outcome, SubmitOutcome::Closed));
        assert_eq!(
            bridge.sent_data(),
            vec![r#"{"token":"T","telegram_user_id":42}"#.to_owned()]
        );
    }
}
