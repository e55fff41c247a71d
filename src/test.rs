use crate::constants::{SYNC_MASK, SYNC_SHIFT};
use crate::error::ErrorKind;
use crate::*;

#[test]
fn standard_mp3_header() {
    let header = FrameHeader::from_bytes([0xFF, 0xFB, 0x90, 0x00]).unwrap();
    assert_eq!(header.version(), Version::Mpeg1);
    assert_eq!(header.layer(), Layer::Layer3);
    assert!(header.protection());
    assert!(!header.has_crc());
    assert_eq!(header.bitrate_index(), 9);
    assert_eq!(header.sample_rate_index(), 0);
    assert!(!header.padding());
    assert!(!header.private());
    assert_eq!(header.channel_mode(), ChannelMode::Stereo);
    assert_eq!(header.mode_extension(), 0);
    assert!(!header.copyright());
    assert!(!header.original());
    assert_eq!(header.emphasis(), Emphasis::None);
    assert_eq!(header.bitrate(), Bitrate::Bps(128_000));
    assert_eq!(header.sample_rate(), SampleRate::Hz(44_100));
}

#[test]
fn every_field_at_its_bit_position() {
    // sync 111, version 10, layer 10, protection 0 | 1110 01 1 1 | 01 10 1 1 11
    let header = FrameHeader::from_bytes([0xFF, 0xF4, 0xE7, 0x6F]).unwrap();
    assert_eq!(header.version(), Version::Mpeg2);
    assert_eq!(header.layer(), Layer::Layer2);
    assert!(!header.protection());
    assert!(header.has_crc());
    assert_eq!(header.bitrate_index(), 0b1110);
    assert_eq!(header.sample_rate_index(), 0b01);
    assert!(header.padding());
    assert!(header.private());
    assert_eq!(header.channel_mode(), ChannelMode::JointStereo);
    assert_eq!(header.mode_extension(), 0b10);
    assert!(header.copyright());
    assert!(header.original());
    assert_eq!(header.emphasis(), Emphasis::CcitJ17);
    assert_eq!(header.bitrate(), Bitrate::Bps(160_000));
    assert_eq!(header.sample_rate(), SampleRate::Hz(24_000));
}

#[test]
fn missing_sync() {
    let error = FrameHeader::from_bytes([0x00, 0x00, 0x00, 0x00]).unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidSync);
    assert_eq!(error.header, 0);
    assert!(!is_sync([0x00, 0x00, 0x00, 0x00]));
}

#[test]
fn partial_sync() {
    // Last sync bit cleared
    let error = FrameHeader::from_bytes([0xFF, 0xDB, 0x90, 0x00]).unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidSync);
    assert_eq!(error.header, 0xFFDB_9000);
    assert!(!is_sync([0xFF, 0xDB, 0x90, 0x00]));
    assert!(is_sync([0xFF, 0xE0, 0x00, 0x00]));
}

#[test]
fn error_display() {
    let error = FrameHeader::from_u32(0x1234_5678).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Missing frame sync pattern (0b11111111111), header 0x12345678"
    );
}

#[test]
fn decode_is_total_and_reencodes_exactly() {
    for rest in 0..(1u32 << SYNC_SHIFT) {
        let word = SYNC_MASK | rest;
        let header = FrameHeader::from_u32(word).unwrap();
        assert_eq!(header.to_u32(), word);
        assert_eq!(header.to_bytes(), word.to_be_bytes());
    }
}

#[test]
fn reserved_fields_decode() {
    // Reserved version, reserved layer, reserved emphasis
    let header = FrameHeader::from_bytes([0xFF, 0xE9, 0x90, 0x02]).unwrap();
    assert!(header.version().is_reserved());
    assert!(header.layer().is_reserved());
    assert!(header.emphasis().is_reserved());
    assert!(header.bitrate().is_invalid());
    assert!(header.sample_rate().is_reserved());
    assert_eq!(header.version_str(), "INVALID");
    assert_eq!(header.layer_str(), "INVALID");
    assert_eq!(header.bitrate_str(), "INVALID");
    assert_eq!(header.sample_rate_str(), "INVALID");
}

#[test]
fn mpeg1_layer3_bitrates() {
    assert_eq!(
        resolve_bitrate(Version::Mpeg1, Layer::Layer3, 9),
        Bitrate::Bps(128_000)
    );
    assert_eq!(
        resolve_bitrate(Version::Mpeg1, Layer::Layer3, 1),
        Bitrate::Bps(32_000)
    );
    assert_eq!(
        resolve_bitrate(Version::Mpeg1, Layer::Layer3, 14),
        Bitrate::Bps(320_000)
    );
}

#[test]
fn free_format_bitrate() {
    let bitrate = resolve_bitrate(Version::Mpeg1, Layer::Layer3, 0);
    assert!(bitrate.is_any());
    assert!(!bitrate.is_invalid());
    assert_eq!(bitrate.bits_per_second(), None);
    assert_eq!(bitrate.to_string(), "ANY");
}

#[test]
fn forbidden_bitrate() {
    let bitrate = resolve_bitrate(Version::Mpeg1, Layer::Layer3, 15);
    assert!(bitrate.is_invalid());
    assert!(!bitrate.is_any());
    assert_eq!(bitrate.bits_per_second(), None);
    assert_eq!(bitrate.to_string(), "INVALID");
}

#[test]
fn out_of_range_bitrate_index() {
    assert!(resolve_bitrate(Version::Mpeg1, Layer::Layer1, 16).is_invalid());
    assert!(resolve_sample_rate(Version::Mpeg1, 4).is_reserved());
}

#[test]
fn reserved_rows_are_invalid_at_every_index() {
    let versions = [
        Version::Mpeg1,
        Version::Mpeg2,
        Version::Mpeg25,
        Version::Reserved,
    ];
    let layers = [Layer::Layer1, Layer::Layer2, Layer::Layer3, Layer::Reserved];
    for &version in versions.iter() {
        for &layer in layers.iter() {
            for index in 0..16 {
                let bitrate = resolve_bitrate(version, layer, index);
                if version.is_reserved() || layer.is_reserved() || index == 15 {
                    assert!(bitrate.is_invalid());
                } else if index == 0 {
                    assert!(bitrate.is_any());
                } else {
                    assert!(bitrate.bits_per_second().unwrap() >= 8000);
                }
            }
        }
    }
}

#[test]
fn lower_sampling_frequency_bitrates() {
    assert_eq!(
        resolve_bitrate(Version::Mpeg2, Layer::Layer3, 1),
        Bitrate::Bps(8_000)
    );
    assert_eq!(
        resolve_bitrate(Version::Mpeg25, Layer::Layer2, 14),
        Bitrate::Bps(160_000)
    );
    assert_eq!(
        resolve_bitrate(Version::Mpeg2, Layer::Layer1, 14),
        Bitrate::Bps(256_000)
    );
    assert_eq!(
        resolve_bitrate(Version::Mpeg1, Layer::Layer2, 14),
        Bitrate::Bps(384_000)
    );
    assert_eq!(
        resolve_bitrate(Version::Mpeg1, Layer::Layer1, 14),
        Bitrate::Bps(448_000)
    );
}

#[test]
fn sample_rates() {
    assert_eq!(resolve_sample_rate(Version::Mpeg1, 0), SampleRate::Hz(44_100));
    assert_eq!(resolve_sample_rate(Version::Mpeg1, 1), SampleRate::Hz(48_000));
    assert_eq!(resolve_sample_rate(Version::Mpeg2, 2), SampleRate::Hz(16_000));
    assert_eq!(resolve_sample_rate(Version::Mpeg25, 2), SampleRate::Hz(8_000));
    assert_eq!(resolve_sample_rate(Version::Mpeg25, 0).hertz(), Some(11_025));
    for &version in [Version::Mpeg1, Version::Mpeg2, Version::Mpeg25].iter() {
        assert!(resolve_sample_rate(version, 3).is_reserved());
    }
    for index in 0..4 {
        assert!(resolve_sample_rate(Version::Reserved, index).is_reserved());
    }
}

#[test]
fn emphasis_reserved_and_ccit_j17_are_distinct_patterns() {
    // Some published tables list 0b10 for both; ISO/IEC 11172-3 reserves 0b10 and
    // assigns 0b11 to CCIT J.17.
    assert_eq!(Emphasis::from_bits(0b10), Emphasis::Reserved);
    assert_eq!(Emphasis::from_bits(0b11), Emphasis::CcitJ17);
    assert_ne!(Emphasis::Reserved.bits(), Emphasis::CcitJ17.bits());
    assert_eq!(Emphasis::Reserved.to_string(), "INVALID");
    assert_eq!(Emphasis::CcitJ17.to_string(), "CCIT_J17");
}

#[test]
fn renderers() {
    assert_eq!(Version::Mpeg1.to_string(), "1");
    assert_eq!(Version::Mpeg2.to_string(), "2");
    assert_eq!(Version::Mpeg25.to_string(), "2.5");
    assert_eq!(Layer::Layer1.to_string(), "1");
    assert_eq!(Layer::Layer2.to_string(), "2");
    assert_eq!(Layer::Layer3.to_string(), "3");
    assert_eq!(ChannelMode::Mono.to_string(), "SINGLE");
    assert_eq!(Emphasis::Ms50By15.to_string(), "MS_50_15");

    let header = FrameHeader::from_bytes([0xFF, 0xFB, 0x90, 0xC0]).unwrap();
    assert_eq!(header.version_str(), "1");
    assert_eq!(header.layer_str(), "3");
    assert_eq!(header.bitrate_str(), "128000");
    assert_eq!(header.sample_rate_str(), "44100");
    assert_eq!(
        header.to_string(),
        "MPEG 1 layer 3, bitrate 128000, sample rate 44100, SINGLE, emphasis NONE"
    );
}

#[test]
fn free_format_header_renders_any() {
    let header = FrameHeader::from_bytes([0xFF, 0xFB, 0x00, 0x00]).unwrap();
    assert!(header.bitrate().is_any());
    assert_eq!(header.bitrate_str(), "ANY");
}

#[test]
fn shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FrameHeader>();
    assert_send_sync::<FrameHeaderError>();
    assert_eq!(FrameHeader::SERIALIZED_SIZE, 4);
}
