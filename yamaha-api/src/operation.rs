//! Operation framework for receiver commands

use xmltree::Element;

use crate::codec;
use crate::error::ApiError;
use crate::zone::{Method, Zone};

/// Base trait for all receiver operations
///
/// An operation knows which envelope method and zone it uses, how to render
/// its command fragment, and how to turn the parsed reply into a typed
/// response. For `GET` operations `parse_response` receives the element of
/// the requested zone; for `PUT` operations it receives the envelope.
pub trait ReceiverOperation {
    /// The typed response for this operation
    type Response;

    /// Short name used in logs
    const NAME: &'static str;

    const METHOD: Method;

    const ZONE: Zone;

    /// Render the command fragment (without zone or envelope wrapping)
    fn fragment(&self) -> String;

    /// Extract the typed response from the parsed reply
    fn parse_response(reply: &Element) -> Result<Self::Response, ApiError>;

    /// Full request body for this operation
    fn request_body(&self) -> String {
        codec::build_request(Self::METHOD, Self::ZONE, &self.fragment())
    }
}

/// Wire spelling of a boolean switch
pub(crate) fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "On"
    } else {
        "Off"
    }
}
