//! Session over the real HTTP transport against a mock receiver

use std::sync::Arc;

use mockito::{Matcher, Server};
use yamaha_sdk::{Mixer, MixerEvent, ReceiverConfig, SessionError, SessionRegistry};

const CTRL: &str = "/YamahaRemoteControl/ctrl";
const ACK: &str = r#"<YAMAHA_AV rsp="PUT" RC="0"></YAMAHA_AV>"#;

fn mock_model(server: &mut Server) -> mockito::Mock {
    server
        .mock("POST", CTRL)
        .match_body(Matcher::Exact(
            r#"<YAMAHA_AV cmd="GET"><System><Config>GetParam</Config></System></YAMAHA_AV>"#.to_string(),
        ))
        .with_body(r#"<YAMAHA_AV rsp="GET" RC="0"><System><Config><Model_Name>RX-A1060</Model_Name></Config></System></YAMAHA_AV>"#)
        .create()
}

#[test]
fn test_start_and_set_volume_over_http() {
    let mut server = Server::new();
    let model = mock_model(&mut server);
    let volume = server
        .mock("POST", CTRL)
        .match_header("content-type", "text/xml")
        .match_body(Matcher::Exact(
            r#"<YAMAHA_AV cmd="PUT"><Main_Zone><Volume><Lvl><Val>-405</Val><Exp>1</Exp><Unit>dB</Unit></Lvl></Volume></Main_Zone></YAMAHA_AV>"#.to_string(),
        ))
        .with_body(ACK)
        .create();

    let registry = SessionRegistry::new();
    let session = registry
        .get_or_start(ReceiverConfig::new(server.host_with_port()))
        .unwrap();
    session.set_volume(50).unwrap();

    model.assert();
    volume.assert();
    assert_eq!(session.model().unwrap().as_deref(), Some("RX-A1060"));
}

#[test]
fn test_mixer_reports_device_levels_over_http() {
    let mut server = Server::new();
    let _model = mock_model(&mut server);
    let _status = server
        .mock("POST", CTRL)
        .match_body(Matcher::Regex("<Basic_Status>GetParam</Basic_Status>".to_string()))
        .with_body(r#"<YAMAHA_AV rsp="GET" RC="0"><Main_Zone><Basic_Status><Volume><Lvl><Val>-245</Val><Exp>1</Exp><Unit>dB</Unit></Lvl><Mute>On</Mute></Volume></Basic_Status></Main_Zone></YAMAHA_AV>"#)
        .create();

    let registry = SessionRegistry::new();
    let session = registry
        .get_or_start(ReceiverConfig::new(server.host_with_port()))
        .unwrap();
    let (mixer, events) = Mixer::new(Arc::clone(&session));

    assert_eq!(mixer.get_volume().unwrap(), 70);
    assert!(mixer.get_mute().unwrap());
    assert_eq!(
        events.try_iter().collect::<Vec<_>>(),
        vec![MixerEvent::VolumeChanged(70), MixerEvent::MuteChanged(true)]
    );
}

#[test]
fn test_server_error_is_device_unreachable() {
    let mut server = Server::new();
    let _failure = server.mock("POST", CTRL).with_status(503).create();

    let registry = SessionRegistry::new();
    let result = registry.get_or_start(ReceiverConfig::new(server.host_with_port()));

    assert!(matches!(result, Err(SessionError::DeviceUnreachable(_))));
}

#[test]
fn test_rejected_command_is_protocol_error() {
    let mut server = Server::new();
    let _model = mock_model(&mut server);
    let _rejected = server
        .mock("POST", CTRL)
        .match_body(Matcher::Regex("<Mute>".to_string()))
        .with_body(r#"<YAMAHA_AV rsp="PUT" RC="4"></YAMAHA_AV>"#)
        .create();

    let registry = SessionRegistry::new();
    let session = registry
        .get_or_start(ReceiverConfig::new(server.host_with_port()))
        .unwrap();

    match session.set_mute(true) {
        Err(SessionError::Protocol(error)) => assert_eq!(
            error.kind,
            yamaha_sdk::ProtocolErrorKind::Rejected { code: "4".to_string() }
        ),
        other => panic!("expected rejected command, got {:?}", other),
    }
    assert_eq!(session.state().unwrap().muted, None);
}

#[test]
fn test_non_utf8_status_reply_is_malformed() {
    let mut reply = br#"<YAMAHA_AV rsp="GET" RC="0"><Main_Zone><Basic_Status><Volume><Lvl><Val>-405</Val><Exp>1</Exp><Unit>dB</Unit></Lvl><Mute>O"#.to_vec();
    reply.extend_from_slice(&[0xFF, 0xFE]);
    reply.extend_from_slice(br#"n</Mute></Volume></Basic_Status></Main_Zone></YAMAHA_AV>"#);

    let mut server = Server::new();
    let _model = mock_model(&mut server);
    let _status = server
        .mock("POST", CTRL)
        .match_body(Matcher::Regex("<Basic_Status>GetParam</Basic_Status>".to_string()))
        .with_body(&reply)
        .create();

    let registry = SessionRegistry::new();
    let session = registry
        .get_or_start(ReceiverConfig::new(server.host_with_port()))
        .unwrap();

    match session.get_volume_mute() {
        Err(SessionError::Protocol(error)) => {
            assert_eq!(error.kind, yamaha_sdk::ProtocolErrorKind::Malformed)
        }
        other => panic!("expected malformed reply, got {:?}", other),
    }
    let state = session.state().unwrap();
    assert_eq!(state.native_volume, None);
    assert_eq!(state.muted, None);
}
