//! Parsers for the values of attributes the accessors of
//! [`SessionDescription`](crate::SessionDescription) interpret.

mod extmap;
mod framesize;
mod range;
mod rtpmap;

pub(crate) use extmap::cvo_ext_map_id;
pub(crate) use framesize::parse_frame_size;
pub use range::{NptRange, parse_ntp_range};
pub(crate) use rtpmap::parse_payload_type;
pub use rtpmap::{FormatDesc, parse_format_desc};
