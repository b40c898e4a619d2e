//! Shared test helpers: a simulated receiver behind a MockTransport
//!
//! The simulator understands the handful of commands the SDK sends, keeps
//! the device-side state they change, and can be told to fail or garble
//! specific replies.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use control_client::{MockTransport, TransportError};
use yamaha_sdk::{DeviceSession, ReceiverConfig};

pub const MODEL: &str = "RX-V685";

pub const POWER_ON: &str =
    r#"<YAMAHA_AV cmd="PUT"><System><Power_Control><Power>On</Power></Power_Control></System></YAMAHA_AV>"#;
pub const POWER_STANDBY: &str =
    r#"<YAMAHA_AV cmd="PUT"><System><Power_Control><Power>Standby</Power></Power_Control></System></YAMAHA_AV>"#;
pub const MUTE_ON: &str =
    r#"<YAMAHA_AV cmd="PUT"><Main_Zone><Volume><Mute>On</Mute></Volume></Main_Zone></YAMAHA_AV>"#;
pub const MUTE_OFF: &str =
    r#"<YAMAHA_AV cmd="PUT"><Main_Zone><Volume><Mute>Off</Mute></Volume></Main_Zone></YAMAHA_AV>"#;
pub const MODEL_QUERY: &str =
    r#"<YAMAHA_AV cmd="GET"><System><Config>GetParam</Config></System></YAMAHA_AV>"#;
pub const STATUS_QUERY: &str =
    r#"<YAMAHA_AV cmd="GET"><Main_Zone><Basic_Status>GetParam</Basic_Status></Main_Zone></YAMAHA_AV>"#;

pub fn select_input(source: &str) -> String {
    format!(
        r#"<YAMAHA_AV cmd="PUT"><Main_Zone><Input><Input_Sel>{}</Input_Sel></Input></Main_Zone></YAMAHA_AV>"#,
        source
    )
}

pub fn party_mode(enabled: bool) -> String {
    format!(
        r#"<YAMAHA_AV cmd="PUT"><System><Party_Mode><Mode>{}</Mode></Party_Mode></System></YAMAHA_AV>"#,
        if enabled { "On" } else { "Off" }
    )
}

pub fn set_volume(native: i32) -> String {
    format!(
        r#"<YAMAHA_AV cmd="PUT"><Main_Zone><Volume><Lvl><Val>{}</Val><Exp>1</Exp><Unit>dB</Unit></Lvl></Volume></Main_Zone></YAMAHA_AV>"#,
        native
    )
}

/// Device-side state of the simulated receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSide {
    pub powered_on: bool,
    pub input: String,
    pub party_mode: bool,
    pub native_volume: i32,
    pub muted: bool,
    /// Requests whose body contains this text fail with a network error
    pub fail_on: Option<String>,
    /// Status replies are cut off mid-document
    pub truncate_status: bool,
}

impl Default for DeviceSide {
    fn default() -> Self {
        Self {
            powered_on: false,
            input: "TUNER".to_string(),
            party_mode: false,
            native_volume: -500,
            muted: false,
            fail_on: None,
            truncate_status: false,
        }
    }
}

#[derive(Clone)]
pub struct SimulatedReceiver {
    device: Arc<Mutex<DeviceSide>>,
    transport: MockTransport,
}

impl SimulatedReceiver {
    pub fn new() -> Self {
        let device = Arc::new(Mutex::new(DeviceSide::default()));
        let handler_device = Arc::clone(&device);
        let transport = MockTransport::new(move |body| respond(&handler_device, body));
        Self { device, transport }
    }

    pub fn transport(&self) -> MockTransport {
        self.transport.clone()
    }

    pub fn device(&self) -> DeviceSide {
        self.device.lock().unwrap().clone()
    }

    pub fn update(&self, f: impl FnOnce(&mut DeviceSide)) {
        f(&mut self.device.lock().unwrap());
    }

    pub fn bodies(&self) -> Vec<String> {
        self.transport.bodies()
    }

    pub fn clear(&self) {
        self.transport.clear();
    }

    /// A session over this receiver, not yet started
    pub fn session(&self, config: ReceiverConfig) -> DeviceSession {
        DeviceSession::with_transport(config, self.transport()).unwrap()
    }

    /// A started session with the request log cleared
    pub fn started_session(&self, config: ReceiverConfig) -> DeviceSession {
        let session = self.session(config);
        session.start().unwrap();
        self.clear();
        session
    }
}

fn between<'a>(body: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = body.find(open)? + open.len();
    let end = body[start..].find(close)? + start;
    Some(&body[start..end])
}

fn respond(device: &Mutex<DeviceSide>, body: &str) -> Result<String, TransportError> {
    let mut device = device.lock().unwrap();

    if let Some(pattern) = &device.fail_on {
        if body.contains(pattern.as_str()) {
            return Err(TransportError::Network("simulated connection reset".to_string()));
        }
    }

    let ack = r#"<YAMAHA_AV rsp="PUT" RC="0"></YAMAHA_AV>"#.to_string();

    if body.contains(r#"cmd="GET""#) {
        if body.contains("<Config>GetParam</Config>") {
            return Ok(format!(
                r#"<YAMAHA_AV rsp="GET" RC="0"><System><Config><Model_Name>{}</Model_Name></Config></System></YAMAHA_AV>"#,
                MODEL
            ));
        }
        if body.contains("<Power>GetParam</Power>") {
            return Ok(format!(
                r#"<YAMAHA_AV rsp="GET" RC="0"><System><Power_Control><Power>{}</Power></Power_Control></System></YAMAHA_AV>"#,
                if device.powered_on { "On" } else { "Standby" }
            ));
        }
        if body.contains("<Basic_Status>GetParam</Basic_Status>") {
            if device.truncate_status {
                return Ok(r#"<YAMAHA_AV rsp="GET" RC="0"><Main_Zone><Basic_Status><Volume><Lvl>"#.to_string());
            }
            return Ok(format!(
                r#"<YAMAHA_AV rsp="GET" RC="0"><Main_Zone><Basic_Status><Power_Control><Power>{}</Power></Power_Control><Volume><Lvl><Val>{}</Val><Exp>1</Exp><Unit>dB</Unit></Lvl><Mute>{}</Mute></Volume><Input><Input_Sel>{}</Input_Sel></Input></Basic_Status></Main_Zone></YAMAHA_AV>"#,
                if device.powered_on { "On" } else { "Standby" },
                device.native_volume,
                if device.muted { "On" } else { "Off" },
                device.input
            ));
        }
        return Ok(r#"<YAMAHA_AV rsp="GET" RC="1"></YAMAHA_AV>"#.to_string());
    }

    if let Some(power) = between(body, "<Power>", "</Power>") {
        device.powered_on = power == "On";
    } else if let Some(input) = between(body, "<Input_Sel>", "</Input_Sel>") {
        device.input = input.to_string();
    } else if let Some(mode) = between(body, "<Mode>", "</Mode>") {
        device.party_mode = mode == "On";
    } else if let Some(value) = between(body, "<Val>", "</Val>") {
        device.native_volume = value
            .parse()
            .map_err(|_| TransportError::Network("bad volume".to_string()))?;
    } else if let Some(mute) = between(body, "<Mute>", "</Mute>") {
        device.muted = mute == "On";
    }

    Ok(ack)
}
