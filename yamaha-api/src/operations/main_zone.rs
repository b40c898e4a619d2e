//! Main zone operations

use xmltree::Element;

use crate::operation::{on_off, ReceiverOperation};
use crate::reply::BasicStatus;
use crate::zone::{Method, Zone};
use crate::ApiError;

/// Select the input source of the main zone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectInputOperation {
    /// Input identifier as the receiver names it, e.g. `HDMI1` or `AV4`
    pub source: String,
}

impl ReceiverOperation for SelectInputOperation {
    type Response = ();

    const NAME: &'static str = "SelectInput";
    const METHOD: Method = Method::Put;
    const ZONE: Zone = Zone::Main;

    fn fragment(&self) -> String {
        format!("<Input><Input_Sel>{}</Input_Sel></Input>", self.source)
    }

    fn parse_response(_reply: &Element) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetMuteOperation {
    pub muted: bool,
}

impl ReceiverOperation for SetMuteOperation {
    type Response = ();

    const NAME: &'static str = "SetMute";
    const METHOD: Method = Method::Put;
    const ZONE: Zone = Zone::Main;

    fn fragment(&self) -> String {
        format!("<Volume><Mute>{}</Mute></Volume>", on_off(self.muted))
    }

    fn parse_response(_reply: &Element) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}

/// Set the main zone volume to an absolute native value
///
/// The value is sent as-is; callers are expected to have quantized it to the
/// device step already (see [`crate::volume`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetVolumeOperation {
    pub native_volume: i32,
}

impl ReceiverOperation for SetVolumeOperation {
    type Response = ();

    const NAME: &'static str = "SetVolume";
    const METHOD: Method = Method::Put;
    const ZONE: Zone = Zone::Main;

    fn fragment(&self) -> String {
        format!(
            "<Volume><Lvl><Val>{}</Val><Exp>1</Exp><Unit>dB</Unit></Lvl></Volume>",
            self.native_volume
        )
    }

    fn parse_response(_reply: &Element) -> Result<Self::Response, ApiError> {
        Ok(())
    }
}

/// Read volume, mute, power and input of the main zone in one request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetBasicStatusOperation;

impl ReceiverOperation for GetBasicStatusOperation {
    type Response = BasicStatus;

    const NAME: &'static str = "GetBasicStatus";
    const METHOD: Method = Method::Get;
    const ZONE: Zone = Zone::Main;

    fn fragment(&self) -> String {
        "<Basic_Status>GetParam</Basic_Status>".to_string()
    }

    fn parse_response(reply: &Element) -> Result<Self::Response, ApiError> {
        Ok(BasicStatus::from_zone(reply)?)
    }
}
