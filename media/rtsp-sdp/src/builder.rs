use crate::{AUDIO_CLOCK_RATE, CVO_EXTENSION_URN, DEFAULT_BANDWIDTH_KBPS, VIDEO_CLOCK_RATE};
use bytesstr::BytesStr;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Audio,
    Video,
}

impl MediaType {
    /// Clock rate announced in the rtpmap of a track of this type
    pub fn clock_rate(self) -> u32 {
        match self {
            MediaType::Audio => AUDIO_CLOCK_RATE,
            MediaType::Video => VIDEO_CLOCK_RATE,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MediaType::Audio => f.write_str("audio"),
            MediaType::Video => f.write_str("video"),
        }
    }
}

/// SDP announcing a single RTP track, printed using the [`fmt::Display`] implementation.
///
/// ```
/// # use ezk_rtsp_sdp::{MediaType, TrackAnnouncement};
/// let sdp = TrackAnnouncement {
///     ip: "10.0.0.1".into(),
///     media_type: MediaType::Audio,
///     port: 5004,
///     payload_type: 0,
///     codec: "PCMU".into(),
///     ..Default::default()
/// }
/// .to_sdp();
///
/// assert!(sdp.contains("a=rtpmap:0 PCMU/8000\r\n"));
/// ```
#[derive(Debug, Clone)]
pub struct TrackAnnouncement {
    /// Connection address, announced as IP6 if it contains `::`
    pub ip: BytesStr,

    pub media_type: MediaType,

    pub port: u16,

    pub payload_type: u32,

    /// Application specific bandwidth, [`DEFAULT_BANDWIDTH_KBPS`] if `None` or 0
    pub bandwidth_kbps: Option<u32>,

    /// Encoding name used in the rtpmap attribute
    pub codec: BytesStr,

    /// Format parameters (`a=fmtp`)
    pub fmtp: Option<BytesStr>,

    /// Width and height (`a=framesize`), only announced for video and if both are non-zero
    pub frame_size: Option<(u32, u32)>,

    /// Id of the CVO RTP header extension (`a=extmap`), not announced if 0
    pub cvo_ext_map: Option<u32>,
}

impl Default for TrackAnnouncement {
    fn default() -> Self {
        Self {
            ip: BytesStr::from_static("0.0.0.0"),
            media_type: MediaType::Video,
            port: 0,
            payload_type: 96,
            bandwidth_kbps: None,
            codec: BytesStr::from_static("H264"),
            fmtp: None,
            frame_size: None,
            cvo_ext_map: None,
        }
    }
}

impl TrackAnnouncement {
    pub fn to_sdp(&self) -> String {
        let sdp = self.to_string();

        log::trace!("announcing track => {sdp}");

        sdp
    }
}

impl fmt::Display for TrackAnnouncement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let address_type = if self.ip.contains("::") { "IP6" } else { "IP4" };

        let bandwidth = self
            .bandwidth_kbps
            .filter(|bandwidth| *bandwidth > 0)
            .unwrap_or(DEFAULT_BANDWIDTH_KBPS);

        write!(f, "v=0\r\n")?;
        write!(f, "a=range:npt=now-\r\n")?;
        write!(
            f,
            "m={} {} RTP/AVP {}\r\n",
            self.media_type, self.port, self.payload_type
        )?;
        write!(f, "c=IN {address_type} {}\r\n", self.ip)?;
        write!(f, "b=AS:{bandwidth}\r\n")?;
        write!(
            f,
            "a=rtpmap:{} {}/{}\r\n",
            self.payload_type,
            self.codec,
            self.media_type.clock_rate()
        )?;

        if let Some(fmtp) = &self.fmtp {
            write!(f, "a=fmtp:{} {fmtp}\r\n", self.payload_type)?;
        }

        let frame_size = self
            .frame_size
            .filter(|(w, h)| self.media_type == MediaType::Video && *w > 0 && *h > 0);

        if let Some((width, height)) = frame_size {
            write!(
                f,
                "a=framesize:{} {width}-{height}\r\n",
                self.payload_type
            )?;
        }

        if let Some(id) = self.cvo_ext_map.filter(|id| *id > 0) {
            write!(f, "a=extmap:{id} {CVO_EXTENSION_URN}\r\n")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn audio() {
        let announcement = TrackAnnouncement {
            ip: "192.168.0.2".into(),
            media_type: MediaType::Audio,
            port: 5004,
            payload_type: 97,
            bandwidth_kbps: Some(64),
            codec: "AMR".into(),
            fmtp: Some("octet-align=1".into()),
            frame_size: Some((640, 480)),
            cvo_ext_map: None,
        };

        assert_eq!(
            announcement.to_sdp(),
            "v=0\r\n\
             a=range:npt=now-\r\n\
             m=audio 5004 RTP/AVP 97\r\n\
             c=IN IP4 192.168.0.2\r\n\
             b=AS:64\r\n\
             a=rtpmap:97 AMR/8000\r\n\
             a=fmtp:97 octet-align=1\r\n"
        );
    }

    #[test]
    fn video() {
        let announcement = TrackAnnouncement {
            ip: "fe80::1".into(),
            port: 15000,
            codec: "H264".into(),
            frame_size: Some((1280, 720)),
            cvo_ext_map: Some(4),
            ..Default::default()
        };

        assert_eq!(
            announcement.to_string(),
            "v=0\r\n\
             a=range:npt=now-\r\n\
             m=video 15000 RTP/AVP 96\r\n\
             c=IN IP6 fe80::1\r\n\
             b=AS:960\r\n\
             a=rtpmap:96 H264/90000\r\n\
             a=framesize:96 1280-720\r\n\
             a=extmap:4 urn:3gpp:video-orientation\r\n"
        );
    }

    #[test]
    fn zero_values_are_omitted() {
        let announcement = TrackAnnouncement {
            bandwidth_kbps: Some(0),
            frame_size: Some((1280, 0)),
            cvo_ext_map: Some(0),
            ..Default::default()
        };

        let sdp = announcement.to_string();

        assert!(sdp.contains("b=AS:960\r\n"));
        assert!(!sdp.contains("a=framesize"));
        assert!(!sdp.contains("a=extmap"));
    }

    #[test]
    fn ip6_detection() {
        let announcement = TrackAnnouncement {
            ip: "2001:db8:0:0:0:0:0:1".into(),
            ..Default::default()
        };

        // only a `::` marks an address as IP6
        assert!(announcement.to_string().contains("c=IN IP4 2001:db8:0:0:0:0:0:1\r\n"));
    }
}
