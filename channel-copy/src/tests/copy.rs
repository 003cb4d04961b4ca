use crate::buf::Planar;
use crate::{copy_audio_buffer, wrap, Error, WriteChannel};
use rand::Rng;

/// Destination which records every write it receives.
#[derive(Default)]
struct Recorder {
    writes: Vec<(Vec<f32>, usize)>,
}

impl WriteChannel for Recorder {
    type Error = Rejected;

    fn write_channel(&mut self, samples: &[f32], channel: usize) -> Result<(), Self::Error> {
        if channel == usize::MAX {
            return Err(Rejected { len: samples.len() });
        }

        self.writes.push((samples.to_vec(), channel));
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Rejected {
    len: usize,
}

#[test]
fn test_copy_narrows_in_order() {
    let mut buf = Planar::with_topology(2, 8);

    copy_audio_buffer(&mut buf, [3i32, -2, 1, 0], 1).unwrap();
    copy_audio_buffer(&mut buf, vec![0.1f64, 1.0000000000000002, -0.5], 0).unwrap();

    assert_eq!(&buf[0], &[0.1f32, 1.0, -0.5]);
    assert_eq!(&buf[1], &[3.0, -2.0, 1.0, 0.0]);
}

#[test]
fn test_copy_source_kinds() {
    let mut buf = Planar::with_topology(1, 4);

    let owned = vec![1u8, 2, 3];
    copy_audio_buffer(&mut buf, &owned, 0).unwrap();
    assert_eq!(&buf[0], &[1.0, 2.0, 3.0]);

    copy_audio_buffer(&mut buf, &owned[1..], 0).unwrap();
    assert_eq!(&buf[0], &[2.0, 3.0]);

    copy_audio_buffer(&mut buf, owned.iter().rev(), 0).unwrap();
    assert_eq!(&buf[0], &[3.0, 2.0, 1.0]);

    copy_audio_buffer(&mut buf, 10u64..14, 0).unwrap();
    assert_eq!(&buf[0], &[10.0, 11.0, 12.0, 13.0]);

    copy_audio_buffer(&mut buf, [0.25f32; 2], 0).unwrap();
    assert_eq!(&buf[0], &[0.25, 0.25]);
}

#[test]
fn test_copy_special_values() {
    let mut buf = Planar::with_topology(1, 5);

    copy_audio_buffer(
        &mut buf,
        [f64::MAX, f64::MIN, f64::INFINITY, f64::NAN, -1e-50],
        0,
    )
    .unwrap();

    let chan = &buf[0];
    assert_eq!(chan[0], f32::INFINITY);
    assert_eq!(chan[1], f32::NEG_INFINITY);
    assert_eq!(chan[2], f32::INFINITY);
    assert!(chan[3].is_nan());
    assert_eq!(chan[4].to_bits(), (-0.0f32).to_bits());
}

#[test]
fn test_copy_empty_source() {
    let mut recorder = Recorder::default();
    copy_audio_buffer(&mut recorder, Vec::<f64>::new(), 3).unwrap();
    assert_eq!(recorder.writes, [(vec![], 3)]);

    let mut buf = Planar::from_array([[1.0; 4]; 2]);
    copy_audio_buffer(&mut buf, core::iter::empty::<i16>(), 1).unwrap();
    assert_eq!(&buf[0], &[1.0; 4]);
    assert!(buf[1].is_empty());
}

#[test]
fn test_copy_is_idempotent() {
    let source = [0.5f64, -0.25, 0.125];

    let mut once = Planar::with_topology(2, 4);
    copy_audio_buffer(&mut once, &source, 1).unwrap();

    let mut twice = Planar::with_topology(2, 4);
    copy_audio_buffer(&mut twice, &source, 1).unwrap();
    copy_audio_buffer(&mut twice, &source, 1).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_copy_is_isolated_from_source() {
    let mut source = vec![1.0f64, 2.0, 3.0];
    let mut buf = Planar::with_topology(1, 3);

    copy_audio_buffer(&mut buf, &source, 0).unwrap();

    source[0] = 100.0;
    source.push(4.0);
    assert_eq!(&buf[0], &[1.0, 2.0, 3.0]);

    drop(source);
    assert_eq!(&buf[0], &[1.0, 2.0, 3.0]);
}

#[test]
fn test_copy_forwards_destination_errors() {
    let mut recorder = Recorder::default();

    assert_eq!(
        copy_audio_buffer(&mut recorder, [1.0f32, 2.0], usize::MAX),
        Err(Rejected { len: 2 })
    );
    assert!(recorder.writes.is_empty());

    let mut buf = Planar::from_array([[1.0, 2.0]; 2]);
    let expected = buf.clone();

    let direct = buf.clone().write_channel(&[0.0, 0.0], 2);
    assert_eq!(copy_audio_buffer(&mut buf, [0i8, 0], 2), direct);
    assert_eq!(
        direct,
        Err(Error::ChannelOutOfBounds {
            channel: 2,
            channels: 2
        })
    );

    let direct = buf.clone().write_channel(&[0.0; 3], 0);
    assert_eq!(copy_audio_buffer(&mut buf, [0i8; 3], 0), direct);
    assert_eq!(
        direct,
        Err(Error::CapacityExceeded {
            len: 3,
            capacity: 2
        })
    );

    assert_eq!(buf, expected);
}

#[test]
fn test_copy_by_value_destination() {
    let mut recorder = Recorder::default();

    {
        let by_ref = &mut recorder;
        copy_audio_buffer(by_ref, [1u16, 2], 0).unwrap();
    }

    copy_audio_buffer(wrap::dynamic(vec![Vec::<f32>::new()]), [1.0f32], 0).unwrap();
    assert_eq!(recorder.writes, [(vec![1.0, 2.0], 0)]);
}

#[test]
fn test_copy_random() {
    let mut rng = rand::thread_rng();

    for _ in 0..256 {
        let channels = rng.gen_range(1..8);
        let capacity = rng.gen_range(0..64);
        let channel = rng.gen_range(0..channels);
        let len = rng.gen_range(0..=capacity);

        let source = (0..len)
            .map(|_| rng.gen_range(-1e40f64..1e40))
            .collect::<Vec<_>>();

        let mut buf = Planar::with_topology(channels, capacity);
        copy_audio_buffer(&mut buf, &source, channel).unwrap();

        let chan = &buf[channel];
        assert_eq!(chan.len(), source.len());

        for (actual, expected) in chan.iter().zip(&source) {
            assert_eq!(actual.to_bits(), (*expected as f32).to_bits());
        }

        for (n, other) in buf.iter().enumerate() {
            if n != channel {
                assert!(other.is_empty());
            }
        }
    }
}
