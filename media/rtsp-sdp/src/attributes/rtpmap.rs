//! Encoding description of a rtpmap attribute (`a=rtpmap:<pt> <encoding>/<clock rate>[/<channels>]`)

use crate::{IResult, number, slash_num};
use nom::Finish;
use nom::bytes::complete::take_while;
use nom::combinator::{all_consuming, map, opt};
use nom::error::context;
use nom::sequence::tuple;

/// Clock rate and channel count from the value of a rtpmap attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDesc {
    /// Clock rate of the encoding
    pub timescale: u32,

    /// Number of channels, 1 if not specified
    pub channels: u32,
}

impl FormatDesc {
    fn parse(i: &str) -> IResult<&str, Self> {
        context(
            "parsing format description",
            map(
                tuple((
                    // encoding name
                    take_while(|c: char| c != '/'),
                    slash_num,
                    opt(slash_num),
                )),
                |(_, timescale, channels)| FormatDesc {
                    timescale,
                    channels: channels.unwrap_or(1),
                },
            ),
        )(i)
    }
}

/// Parse the `<encoding>/<clock rate>[/<channels>]` value of a rtpmap attribute
///
/// # Panics
///
/// If `desc` is not a valid encoding description
pub fn parse_format_desc(desc: &str) -> FormatDesc {
    match all_consuming(FormatDesc::parse)(desc).finish() {
        Ok((_, format_desc)) => format_desc,
        Err(e) => panic!("malformed format description {desc:?}: {e:?}"),
    }
}

/// Payload type declared at the end of a media section's format (`video 0 RTP/AVP 96`)
///
/// # Panics
///
/// If the format does not end with a space separated numeric token
pub(crate) fn parse_payload_type(format: &str) -> u32 {
    let Some((_, payload_type)) = format.rsplit_once(' ') else {
        panic!("media format {format:?} does not declare a payload type");
    };

    match all_consuming(number)(payload_type).finish() {
        Ok((_, payload_type)) => payload_type,
        Err(e) => panic!("malformed payload type in media format {format:?}: {e:?}"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_desc() {
        let desc = parse_format_desc("mpeg4-generic/44100/2");

        assert_eq!(desc.timescale, 44100);
        assert_eq!(desc.channels, 2);
    }

    #[test]
    fn format_desc_default_channels() {
        let desc = parse_format_desc("mpeg4-generic/44100");

        assert_eq!(desc.timescale, 44100);
        assert_eq!(desc.channels, 1);
    }

    #[test]
    #[should_panic]
    fn format_desc_without_slash() {
        parse_format_desc("H264");
    }

    #[test]
    #[should_panic]
    fn format_desc_trailing_garbage() {
        parse_format_desc("H264/90000x");
    }

    #[test]
    #[should_panic]
    fn format_desc_missing_channels() {
        parse_format_desc("L16/44100/");
    }

    #[test]
    fn payload_type() {
        assert_eq!(parse_payload_type("video 0 RTP/AVP 96"), 96);
        assert_eq!(parse_payload_type("audio 5004 RTP/AVP 0"), 0);
    }

    #[test]
    #[should_panic]
    fn payload_type_missing() {
        parse_payload_type("video");
    }

    #[test]
    #[should_panic]
    fn payload_type_not_numeric() {
        parse_payload_type("application 0 RTP/AVP x");
    }
}
