//! Print the tracks of a session description.
//!
//! Reads the SDP from the file given as first argument, or announces a sample video track if none is given.
//!
//! `RUST_LOG=trace cargo run --example describe -- stream.sdp`

use bytesstr::BytesStr;
use rtsp_sdp::{MediaType, SessionDescription, TrackAnnouncement};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let sdp = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => TrackAnnouncement {
            ip: "127.0.0.1".into(),
            media_type: MediaType::Video,
            port: 5000,
            codec: "H264".into(),
            fmtp: Some("packetization-mode=1".into()),
            frame_size: Some((1280, 720)),
            cvo_ext_map: Some(1),
            ..Default::default()
        }
        .to_sdp(),
    };

    let description = SessionDescription::parse(&BytesStr::from(sdp))?;

    match description.duration_us() {
        Some(duration) => log::info!("duration: {duration}us"),
        None => log::info!("duration: unknown"),
    }

    for index in 1..description.count_tracks() {
        let format = description.format_type(index);

        log::info!(
            "track {index}: '{}' payload type {}",
            description.format(index),
            format.payload_type
        );

        if let Some(desc) = &format.desc {
            let format_desc = format.format_desc();
            log::info!("  encoding {desc} {format_desc:?}");
        }

        if let Some(params) = &format.params {
            log::info!("  params {params}");
        }

        if let Some((width, height)) = description.dimensions(index, format.payload_type) {
            log::info!("  frame size {width}x{height}");
        }

        if let Some(id) = description.cvo_ext_map(index) {
            log::info!("  video orientation extension id {id}");
        }
    }

    Ok(())
}
