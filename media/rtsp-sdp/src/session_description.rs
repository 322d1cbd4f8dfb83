use crate::attributes::{cvo_ext_map_id, parse_frame_size, parse_payload_type};
use crate::parser::{ParseSessionDescriptionError, Parser};
use crate::{FormatDesc, Section, parse_format_desc, parse_ntp_range};
use bytesstr::BytesStr;

/// A parsed session description.
///
/// Consists of the session level section at index 0 followed by a section for every `m=` line.
/// All track indices passed to the accessors refer to this order.
///
/// ```
/// # use bytesstr::BytesStr;
/// # use ezk_rtsp_sdp::SessionDescription;
/// let sdp = BytesStr::from_static("v=0\r\nm=video 0 RTP/AVP 96\r\na=rtpmap:96 H264/90000\r\n");
/// let description = SessionDescription::parse(&sdp).unwrap();
///
/// assert_eq!(description.count_tracks(), 2);
/// assert_eq!(description.format_type(1).payload_type, 96);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionDescription {
    sections: Vec<Section>,
    valid: bool,
}

/// Encoding of a track, see [`SessionDescription::format_type`]
#[derive(Debug, Clone)]
pub struct FormatType {
    /// Payload type declared by the track's `m=` line
    pub payload_type: u32,

    /// Value of the `a=rtpmap:<payload_type>` attribute
    pub desc: Option<BytesStr>,

    /// Value of the `a=fmtp:<payload_type>` attribute, only looked up if `desc` is present
    pub params: Option<BytesStr>,
}

impl FormatType {
    /// Clock rate and channel count of the encoding
    ///
    /// # Panics
    ///
    /// If the rtpmap value is not a valid encoding description
    pub fn format_desc(&self) -> Option<FormatDesc> {
        self.desc.as_deref().map(parse_format_desc)
    }
}

impl SessionDescription {
    pub fn parse(src: &BytesStr) -> Result<Self, ParseSessionDescriptionError> {
        let mut parser = Parser::default();

        for (i, chunk) in src.split_inclusive('\n').enumerate() {
            let Some(line) = chunk.strip_suffix('\n') else {
                if !chunk.is_empty() {
                    log::debug!("ignoring unterminated last line {chunk:?}");
                }

                break;
            };

            let line = line.strip_suffix('\r').unwrap_or(line);

            if line.is_empty() {
                continue;
            }

            parser.parse_line(src, i + 1, line)?;
        }

        Ok(Self {
            sections: parser.finish(),
            valid: true,
        })
    }

    /// Replace the contents with the parsed `src`.
    ///
    /// On error the description is left empty and invalid.
    pub fn set_to(&mut self, src: &BytesStr) -> Result<(), ParseSessionDescriptionError> {
        match Self::parse(src) {
            Ok(parsed) => {
                *self = parsed;
                Ok(())
            }
            Err(e) => {
                log::debug!("rejecting session description, {e}");

                self.sections.clear();
                self.valid = false;

                Err(e)
            }
        }
    }

    /// Returns if the last [`set_to`](Self::set_to) succeeded
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Number of sections including the session level section
    pub fn count_tracks(&self) -> usize {
        self.sections.len()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// # Panics
    ///
    /// If `index` is out of range
    pub fn section(&self, index: usize) -> &Section {
        assert!(
            index < self.sections.len(),
            "track index {index} out of range, description has {} tracks",
            self.sections.len()
        );

        &self.sections[index]
    }

    /// Content of the `m=` line which opened the section
    pub fn format(&self, index: usize) -> &BytesStr {
        &self.section(index).format
    }

    /// Value of the first attribute with the exact `key`, e.g. `a=control` or `a=rtpmap:96`
    pub fn find_attribute(&self, index: usize, key: &str) -> Option<&BytesStr> {
        self.section(index).attributes.get(key)
    }

    /// Id of the RTP header extension carrying the video orientation
    pub fn cvo_ext_map(&self, index: usize) -> Option<u32> {
        cvo_ext_map_id(&self.section(index).attributes)
    }

    /// # Panics
    ///
    /// If the track's format doesn't end with a numeric payload type
    pub fn format_type(&self, index: usize) -> FormatType {
        let payload_type = parse_payload_type(self.format(index));

        let desc = self
            .find_attribute(index, &format!("a=rtpmap:{payload_type}"))
            .cloned();

        let params = desc.as_ref().and_then(|_| {
            self.find_attribute(index, &format!("a=fmtp:{payload_type}"))
                .cloned()
        });

        FormatType {
            payload_type,
            desc,
            params,
        }
    }

    /// Width and height from the track's `a=framesize:<payload_type>` attribute
    ///
    /// # Panics
    ///
    /// If the attribute is present but not of the form `<width>-<height>`
    pub fn dimensions(&self, index: usize, payload_type: u32) -> Option<(u32, u32)> {
        let value = self.find_attribute(index, &format!("a=framesize:{payload_type}"))?;

        Some(parse_frame_size(value))
    }

    /// Duration of the session's `a=range:npt=` in microseconds
    ///
    /// # Panics
    ///
    /// If the description is not valid
    pub fn duration_us(&self) -> Option<i64> {
        assert!(
            self.valid,
            "duration requested from an invalid session description"
        );

        let value = self.find_attribute(0, "a=range")?;
        let range = value
            .strip_prefix("npt=")
            .or_else(|| value.strip_prefix("npt:"))?;

        parse_ntp_range(range)?.duration_us()
    }
}
