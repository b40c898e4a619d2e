//! Command codec for the `YAMAHA_AV` envelope
//!
//! Requests wrap an operation fragment in a zone element and the zone element
//! in the `YAMAHA_AV` envelope:
//!
//! ```text
//! <YAMAHA_AV cmd="GET"><Main_Zone><Basic_Status>GetParam</Basic_Status></Main_Zone></YAMAHA_AV>
//! ```
//!
//! Replies share the same root. A `GET` reply carries its data under the zone
//! element that was asked for; a `PUT` reply is only an acknowledgement.
//! Nothing here performs I/O.

use xmltree::Element;

use crate::error::ProtocolError;
use crate::zone::{Method, Zone};

/// Root element of every request and reply
pub const ENVELOPE_TAG: &str = "YAMAHA_AV";

/// Reply attribute holding the receiver's response code; `"0"` means success
pub const RESPONSE_CODE_ATTR: &str = "RC";

/// Build a complete request body for `fragment` addressed to `zone`
///
/// The fragment is inserted verbatim. A malformed fragment is a programming
/// error of the caller and is not detected here.
pub fn build_request(method: Method, zone: Zone, fragment: &str) -> String {
    format!(
        r#"<{envelope} cmd="{method}"><{zone}>{fragment}</{zone}></{envelope}>"#,
        envelope = ENVELOPE_TAG,
        method = method.as_str(),
        zone = zone.tag(),
        fragment = fragment,
    )
}

/// Parse a reply body
///
/// For `GET` the element rooted at `zone` is returned, for `PUT` the whole
/// envelope.
pub fn parse_response(raw: &[u8], method: Method, zone: Zone) -> Result<Element, ProtocolError> {
    let envelope = Element::parse(raw).map_err(|e| ProtocolError::malformed(e.to_string()))?;

    if envelope.name != ENVELOPE_TAG {
        return Err(ProtocolError::unexpected_shape(format!(
            "expected <{}> root, found <{}>",
            ENVELOPE_TAG, envelope.name
        )));
    }

    if let Some(code) = envelope.attributes.get(RESPONSE_CODE_ATTR) {
        if code.trim() != "0" {
            return Err(ProtocolError::rejected(code.trim()));
        }
    }

    match method {
        Method::Put => Ok(envelope),
        Method::Get => {
            let tag = zone.tag();
            let mut envelope = envelope;
            envelope
                .take_child(tag)
                .ok_or_else(|| ProtocolError::unexpected_shape(format!("missing <{}> element", tag)))
        }
    }
}
