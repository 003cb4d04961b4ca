use std::f64::consts::PI;

use anyhow::Result;
use channel_copy::buf::Planar;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let mut buf = Planar::with_topology(2, 8);

    let ramp = (0..8i16).map(|n| n * 1024);
    channel_copy::copy_audio_buffer(&mut buf, ramp, 0)?;

    let sine = (0..8).map(|n| (n as f64 * PI / 4.0).sin()).collect::<Vec<_>>();
    channel_copy::copy_audio_buffer(&mut buf, &sine, 1)?;

    for (n, chan) in buf.iter().enumerate() {
        tracing::info!(channel = n, samples = ?chan, "copied");
    }

    // The buffer only has two channels, the error is whatever the buffer says.
    if let Err(error) = channel_copy::copy_audio_buffer(&mut buf, &sine, 2) {
        tracing::warn!(%error, "write rejected");
    }

    Ok(())
}
