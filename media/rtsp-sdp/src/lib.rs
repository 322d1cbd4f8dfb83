//! Session descriptions as exchanged by RTSP.
//!
//! [`SessionDescription`] keeps a parsed SDP blob as a list of sections (the implicit session level
//! section followed by one per `m=` line), each holding its attributes in the order they appeared.
//! [`TrackAnnouncement`] goes the opposite way and prints the SDP for a single RTP track.
#![warn(unreachable_pub)]

use nom::character::complete::{char, digit1};
use nom::combinator::map_res;
use nom::sequence::preceded;
use std::str::FromStr;

mod attributes;
mod builder;
mod parser;
mod section;
mod session_description;

pub use attributes::{FormatDesc, NptRange, parse_format_desc, parse_ntp_range};
pub use builder::{MediaType, TrackAnnouncement};
pub use parser::ParseSessionDescriptionError;
pub use section::{Attributes, Section};
pub use session_description::{FormatType, SessionDescription};

/// Application specific bandwidth (`b=AS`) in kbps announced when none is given
pub const DEFAULT_BANDWIDTH_KBPS: u32 = 960;

/// Clock rate announced for audio tracks
pub const AUDIO_CLOCK_RATE: u32 = 8000;

/// Clock rate announced for video tracks
pub const VIDEO_CLOCK_RATE: u32 = 90000;

/// RTP header extension URN of the coordination of video orientation (CVO)
pub const CVO_EXTENSION_URN: &str = "urn:3gpp:video-orientation";

/// Format of the session level section which precedes the first `m=` line
pub const ROOT_FORMAT: &str = "[root]";

type IResult<I, O> = nom::IResult<I, O, nom::error::VerboseError<I>>;

fn number(i: &str) -> IResult<&str, u32> {
    map_res(digit1, FromStr::from_str)(i)
}

fn slash_num(i: &str) -> IResult<&str, u32> {
    preceded(char('/'), number)(i)
}
