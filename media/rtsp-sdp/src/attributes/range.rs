//! Normal play time range as found in `a=range:npt=<start>-[<end>]`
//!
//! [RFC2326](https://www.rfc-editor.org/rfc/rfc2326.html#section-3.6)

use crate::IResult;
use nom::Finish;
use nom::character::complete::multispace0;
use nom::combinator::all_consuming;
use nom::error::context;
use nom::number::complete::float;
use nom::sequence::preceded;

/// Play range in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NptRange {
    pub start: f32,

    /// [`f32::MAX`] if the range is open ended
    pub end: f32,
}

impl NptRange {
    pub fn is_open_ended(&self) -> bool {
        self.end == f32::MAX
    }

    /// Length of the range in microseconds, `None` if the range is open ended
    pub fn duration_us(&self) -> Option<i64> {
        if self.is_open_ended() {
            return None;
        }

        Some((f64::from(self.end - self.start) * 1E6) as i64)
    }
}

fn npt_time(i: &str) -> IResult<&str, f32> {
    context("parsing npt time", preceded(multispace0, float))(i)
}

/// Parse a `<start>-[<end>]` normal play time range
///
/// Returns `None` if either boundary has no absolute value (`now`), the start is missing or the end
/// does not come after the start.
pub fn parse_ntp_range(s: &str) -> Option<NptRange> {
    if s.starts_with('-') {
        // no start time available
        return None;
    }

    if s.starts_with("now") {
        // no absolute start time available
        return None;
    }

    let (rem, start) = npt_time(s).finish().ok()?;
    let rem = rem.strip_prefix('-')?;

    if rem.is_empty() {
        return Some(NptRange {
            start,
            end: f32::MAX,
        });
    }

    if rem.starts_with("now") {
        // no absolute end time available
        return None;
    }

    let (_, end) = all_consuming(npt_time)(rem).finish().ok()?;

    (end > start).then_some(NptRange { start, end })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn range() {
        let range = parse_ntp_range("5.0-10.0").unwrap();

        assert_eq!(range.start, 5.0);
        assert_eq!(range.end, 10.0);
        assert!(!range.is_open_ended());
        assert_eq!(range.duration_us(), Some(5_000_000));
    }

    #[test]
    fn range_integers() {
        let range = parse_ntp_range("0-634").unwrap();

        assert_eq!(range.duration_us(), Some(634_000_000));
    }

    #[test]
    fn range_open_ended() {
        let range = parse_ntp_range("5.0-").unwrap();

        assert_eq!(range.start, 5.0);
        assert!(range.is_open_ended());
        assert_eq!(range.duration_us(), None);
    }

    #[test]
    fn range_now() {
        assert!(parse_ntp_range("now-").is_none());
        assert!(parse_ntp_range("now-10.0").is_none());
        assert!(parse_ntp_range("0-now").is_none());
    }

    #[test]
    fn range_without_start() {
        assert!(parse_ntp_range("-10.0").is_none());
    }

    #[test]
    fn range_end_before_start() {
        assert!(parse_ntp_range("10.0-5.0").is_none());
        assert!(parse_ntp_range("5.0-5.0").is_none());
    }

    #[test]
    fn range_leading_whitespace() {
        let range = parse_ntp_range(" 5-10").unwrap();
        assert_eq!(range.duration_us(), Some(5_000_000));

        let range = parse_ntp_range("5- 10").unwrap();
        assert_eq!(range.end, 10.0);

        // a blank end is neither open ended nor a number
        assert!(parse_ntp_range("5- ").is_none());
    }

    #[test]
    fn range_malformed() {
        assert!(parse_ntp_range("").is_none());
        assert!(parse_ntp_range("abc-10").is_none());
        assert!(parse_ntp_range("5.0").is_none());
        assert!(parse_ntp_range("5.0-10.0s").is_none());
    }
}
