//! Frame size attribute (`a=framesize:<pt> <width>-<height>`)

use crate::{IResult, number};
use nom::Finish;
use nom::character::complete::char;
use nom::combinator::all_consuming;
use nom::error::context;
use nom::sequence::separated_pair;

fn frame_size(i: &str) -> IResult<&str, (u32, u32)> {
    context(
        "parsing frame size",
        all_consuming(separated_pair(number, char('-'), number)),
    )(i)
}

/// # Panics
///
/// If `value` is not exactly `<width>-<height>`
pub(crate) fn parse_frame_size(value: &str) -> (u32, u32) {
    match frame_size(value).finish() {
        Ok((_, dimensions)) => dimensions,
        Err(e) => panic!("malformed framesize value {value:?}: {e:?}"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn framesize() {
        assert_eq!(parse_frame_size("320-240"), (320, 240));
        assert_eq!(parse_frame_size("1920-1080"), (1920, 1080));
    }

    #[test]
    #[should_panic]
    fn framesize_wrong_separator() {
        parse_frame_size("320x240");
    }

    #[test]
    #[should_panic]
    fn framesize_trailing_garbage() {
        parse_frame_size("320-240p");
    }

    #[test]
    #[should_panic]
    fn framesize_missing_height() {
        parse_frame_size("320-");
    }
}
