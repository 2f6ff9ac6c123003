//! Simulated downlink: the payload packs a short flight, the ground station
//! decodes each buffer and logs it per sensor.
//!
//! Run with `RUST_LOG=hyperion=trace` to see the codec's own events.

use bytes::Bytes;
use hyperion::{
    AirQuality, Altitude, Axes, Environmental, Motion, Orientation, Packet, SecondaryAccel,
    decode, pack_air_quality, pack_altitude, pack_command, pack_environmental, pack_info,
    pack_motion, pack_orientation, pack_secondary_accel,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Phase codes carried in command flags
const PHASE_LAUNCH: u8 = 0b0001;
const PHASE_APOGEE: u8 = 0b0010;

fn downlink() -> Vec<Bytes> {
    let mut frames = vec![
        pack_command(PHASE_LAUNCH, 0),
        pack_motion(
            0,
            1,
            &Motion {
                accel: Axes::new(12, -4, 5_890),
                gyro: Axes::new(3, 1, -2),
                mag: Axes::new(220, -410, 38),
            },
        ),
        pack_secondary_accel(
            0,
            1,
            &SecondaryAccel {
                accel: Axes::new(40, -8, 11_760),
            },
        ),
        pack_environmental(
            0,
            2,
            &Environmental {
                temperature: 2_150,
                pressure: 98_100,
                humidity: 41,
                altitude: 312,
            },
        ),
        pack_air_quality(0, 2, &AirQuality { co2: 415, tvoc: 9 }),
        pack_orientation(
            0,
            3,
            &Orientation {
                pitch: 88,
                roll: -3,
                yaw: 12,
            },
        ),
        pack_altitude(0, 14, &Altitude { altitude: 3_048 }),
        pack_command(PHASE_APOGEE, 14),
    ];

    let report = pack_info(0, 15, "drogue deployed, descent nominal");
    if let Some(warning) = report.warning() {
        warn!(%warning, "info report cut down before transmit");
    }
    frames.push(report.into_bytes());

    // A corrupted buffer the radio might hand over.
    frames.push(Bytes::from_static(&[0xD0, 0x00, 0x0F]));
    frames
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    for bytes in downlink() {
        match decode(&bytes) {
            Ok(Packet::Command(header)) => info!(
                time = header.time(),
                phase = header.flags().as_u8(),
                "phase change"
            ),
            Ok(Packet::Info(header, message)) => {
                info!(time = header.time(), %message, "payload report");
            }
            Ok(packet) => info!(
                sensor = packet.frame_type().sensor(),
                "{packet}"
            ),
            Err(err) => error!(%err, len = bytes.len(), "dropped buffer"),
        }
    }
}
