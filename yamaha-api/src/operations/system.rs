//! System zone operations

use xmltree::Element;

use crate::operation::{on_off, ReceiverOperation};
use crate::reply::{required_text, ModelInfo, PowerState};
use crate::zone::{Method, Zone};
use crate::ApiError;

/// Query the receiver's model name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetModelOperation;

impl ReceiverOperation for GetModelOperation {
    type Response = ModelInfo;

    const NAME: &'static str = "GetModel";
    const METHOD: Method = Method::Get;
    const ZONE: Zone = Zone::System;

    fn fragment(&self) -> String {
        "<Config>GetParam</Config>".to_string()
    }

    fn parse_response(reply: &Element) -> Result<Self::Response, ApiError> {
        Ok(ModelInfo::from_zone(reply)?)
    }
}

/// Query whether the receiver is on or in standby
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetPowerOperation;

impl ReceiverOperation for GetPowerOperation {
    type Response = PowerState;

    const NAME: &'static str = "GetPower";
    const METHOD: Method = Method::Get;
    const ZONE: Zone = Zone::System;

    fn fragment(&self) -> String {
        "<Power_Control><Power>GetParam</Power></Power_Control>".to_string()
    }

    fn parse_response(reply: &Element) -> Result<Self::Response, ApiError> {
        let value = required_text(reply, &["Power_Control", "Power"])?;
        Ok(PowerState::from_wire(&value)?)
    }
}

/// Switch the receiver on or to standby
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPowerOperation {
    pub state: PowerState,
}

impl ReceiverOperation for SetPowerOperation {
    type Response = ();

    const NAME: &'static str = "SetPower";
    const METHOD: Method = Method::Put;
    const ZONE: Zone = Zone::System;

    fn fragment(&self) -> String {
        format!(
            "<Power_Control><Power>{}</Power></Power_Control>",
            self.state.as_str()
        )
    }

    fn parse_response(_reply: &Element) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}

/// Enable or disable party mode (playback mirrored to the other zones)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPartyModeOperation {
    pub enabled: bool,
}

impl ReceiverOperation for SetPartyModeOperation {
    type Response = ();

    const NAME: &'static str = "SetPartyMode";
    const METHOD: Method = Method::Put;
    const ZONE: Zone = Zone::System;

    fn fragment(&self) -> String {
        format!("<Party_Mode><Mode>{}</Mode></Party_Mode>", on_off(self.enabled))
    }

    fn parse_response(_reply: &Element) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}
