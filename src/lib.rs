//! Decoding of the 4-byte header found in front of every MPEG audio (mp1/mp2/mp3) frame.
//!
//! The header is read from its fixed bit layout into a [`FrameHeader`](struct.FrameHeader.html),
//! whose bitrate and sample rate indices can then be resolved into physical values.
//! Locating the header within a stream is left to the caller.
//!
//! ```
//! use mpeg_frame_header::{Bitrate, FrameHeader, Layer, SampleRate, Version};
//!
//! let header = FrameHeader::from_bytes([0xFF, 0xFB, 0x90, 0x00]).unwrap();
//! assert_eq!(header.version(), Version::Mpeg1);
//! assert_eq!(header.layer(), Layer::Layer3);
//! assert_eq!(header.bitrate(), Bitrate::Bps(128_000));
//! assert_eq!(header.sample_rate(), SampleRate::Hz(44_100));
//! ```

extern crate failure;

use std::fmt;
use tracing::{debug, trace};

pub mod constants;
mod error;
#[cfg(test)]
mod test;

use crate::constants::*;

pub use crate::constants::{ChannelMode, Emphasis, Layer, Version};
pub use crate::error::{ErrorKind, FrameHeaderError};

/// Bit rate resolved from a header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bitrate {
    /// Bits per second.
    Bps(u32),
    /// Free format: the header does not constrain the bitrate.
    Any,
    /// Forbidden version/layer/index combination.
    Invalid,
}

impl Bitrate {
    pub fn is_any(self) -> bool {
        self == Bitrate::Any
    }

    pub fn is_invalid(self) -> bool {
        self == Bitrate::Invalid
    }

    pub fn bits_per_second(self) -> Option<u32> {
        match self {
            Bitrate::Bps(bps) => Some(bps),
            _ => None,
        }
    }
}

impl fmt::Display for Bitrate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Bitrate::Bps(bps) => write!(f, "{}", bps),
            Bitrate::Any => f.write_str("ANY"),
            Bitrate::Invalid => f.write_str("INVALID"),
        }
    }
}

/// Sample rate resolved from a header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleRate {
    /// Samples per second.
    Hz(u32),
    /// Reserved version/index combination.
    Reserved,
}

impl SampleRate {
    pub fn is_reserved(self) -> bool {
        self == SampleRate::Reserved
    }

    pub fn hertz(self) -> Option<u32> {
        match self {
            SampleRate::Hz(hz) => Some(hz),
            SampleRate::Reserved => None,
        }
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SampleRate::Hz(hz) => write!(f, "{}", hz),
            SampleRate::Reserved => f.write_str("INVALID"),
        }
    }
}

/// Resolves a bitrate index for the given version and layer.
///
/// Reserved versions and layers resolve to `Bitrate::Invalid` for every index.
///
/// ```
/// use mpeg_frame_header::{resolve_bitrate, Bitrate, Layer, Version};
///
/// assert_eq!(resolve_bitrate(Version::Mpeg1, Layer::Layer3, 9), Bitrate::Bps(128_000));
/// assert_eq!(resolve_bitrate(Version::Mpeg1, Layer::Layer3, 0), Bitrate::Any);
/// assert_eq!(resolve_bitrate(Version::Mpeg1, Layer::Layer3, 15), Bitrate::Invalid);
/// ```
pub fn resolve_bitrate(version: Version, layer: Layer, bitrate_index: u8) -> Bitrate {
    let entry = BIT_RATES[version as usize][layer as usize]
        .get(bitrate_index as usize)
        .copied()
        .unwrap_or(BIT_RATE_INVALID);
    match entry {
        BIT_RATE_ANY => Bitrate::Any,
        units if units > 0 => Bitrate::Bps(units as u32 * BIT_RATE_UNIT),
        _ => Bitrate::Invalid,
    }
}

/// Resolves a sample rate index for the given version.
///
/// ```
/// use mpeg_frame_header::{resolve_sample_rate, SampleRate, Version};
///
/// assert_eq!(resolve_sample_rate(Version::Mpeg25, 2), SampleRate::Hz(8000));
/// assert!(resolve_sample_rate(Version::Reserved, 0).is_reserved());
/// ```
pub fn resolve_sample_rate(version: Version, sample_rate_index: u8) -> SampleRate {
    let rate = SAMPLING_RATES[version as usize]
        .get(sample_rate_index as usize)
        .copied()
        .unwrap_or(SAMPLING_RATE_RESERVED);
    if rate == SAMPLING_RATE_RESERVED {
        SampleRate::Reserved
    } else {
        SampleRate::Hz(rate)
    }
}

/// Returns whether `bytes` start with the 11-bit frame sync pattern.
pub fn is_sync(bytes: [u8; 4]) -> bool {
    u32::from_be_bytes(bytes) & SYNC_MASK == SYNC_MASK
}

/// A decoded MPEG audio frame header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHeader {
    version: Version,
    layer: Layer,
    protection: bool,
    bitrate_index: u8,
    sample_rate_index: u8,
    padding: bool,
    private: bool,
    channel_mode: ChannelMode,
    mode_extension: u8,
    copyright: bool,
    original: bool,
    emphasis: Emphasis,
}

impl FrameHeader {
    pub const SERIALIZED_SIZE: usize = 4;

    /// Decodes a header from its 4 bytes as they appear in the stream.
    ///
    /// Fails only when the sync pattern is missing; reserved field values decode fine and
    /// surface through the resolved values instead.
    pub fn from_bytes(bytes: [u8; 4]) -> Result<FrameHeader, FrameHeaderError> {
        FrameHeader::from_u32(u32::from_be_bytes(bytes))
    }

    /// Decodes a header from its big-endian 32-bit word.
    pub fn from_u32(header: u32) -> Result<FrameHeader, FrameHeaderError> {
        if header >> SYNC_SHIFT != SYNC_PATTERN {
            trace!("rejected frame header 0x{:08X}: no sync pattern", header);
            return Err(ErrorKind::InvalidSync.at(header));
        }

        let field = |mask: u32, shift: u32| ((header & mask) >> shift) as u8;
        let flag = |mask: u32| header & mask != 0;

        let frame_header = FrameHeader {
            version: Version::from_bits(field(VERSION_MASK, VERSION_SHIFT)),
            layer: Layer::from_bits(field(LAYER_MASK, LAYER_SHIFT)),
            protection: flag(PROTECTION_MASK),
            bitrate_index: field(BITRATE_INDEX_MASK, BITRATE_INDEX_SHIFT),
            sample_rate_index: field(SAMPLE_RATE_INDEX_MASK, SAMPLE_RATE_INDEX_SHIFT),
            padding: flag(PADDING_MASK),
            private: flag(PRIVATE_MASK),
            channel_mode: ChannelMode::from_bits(field(CHANNEL_MODE_MASK, CHANNEL_MODE_SHIFT)),
            mode_extension: field(MODE_EXTENSION_MASK, MODE_EXTENSION_SHIFT),
            copyright: flag(COPYRIGHT_MASK),
            original: flag(ORIGINAL_MASK),
            emphasis: Emphasis::from_bits(field(EMPHASIS_MASK, EMPHASIS_SHIFT)),
        };

        let bitrate = frame_header.bitrate();
        let sample_rate = frame_header.sample_rate();
        if bitrate.is_invalid() || sample_rate.is_reserved() {
            debug!(
                "frame header 0x{:08X} resolves to bitrate {} and sample rate {}",
                header, bitrate, sample_rate
            );
        }

        Ok(frame_header)
    }

    /// Encodes the header back into its big-endian 32-bit word, sync pattern included.
    pub fn to_u32(&self) -> u32 {
        let field = |value: u8, shift: u32, mask: u32| ((value as u32) << shift) & mask;
        let flag = |value: bool, mask: u32| if value { mask } else { 0 };

        SYNC_MASK
            | field(self.version.bits(), VERSION_SHIFT, VERSION_MASK)
            | field(self.layer.bits(), LAYER_SHIFT, LAYER_MASK)
            | flag(self.protection, PROTECTION_MASK)
            | field(self.bitrate_index, BITRATE_INDEX_SHIFT, BITRATE_INDEX_MASK)
            | field(self.sample_rate_index, SAMPLE_RATE_INDEX_SHIFT, SAMPLE_RATE_INDEX_MASK)
            | flag(self.padding, PADDING_MASK)
            | flag(self.private, PRIVATE_MASK)
            | field(self.channel_mode.bits(), CHANNEL_MODE_SHIFT, CHANNEL_MODE_MASK)
            | field(self.mode_extension, MODE_EXTENSION_SHIFT, MODE_EXTENSION_MASK)
            | flag(self.copyright, COPYRIGHT_MASK)
            | flag(self.original, ORIGINAL_MASK)
            | field(self.emphasis.bits(), EMPHASIS_SHIFT, EMPHASIS_MASK)
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        self.to_u32().to_be_bytes()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Set when no 16-bit CRC follows the header.
    pub fn protection(&self) -> bool {
        self.protection
    }

    pub fn has_crc(&self) -> bool {
        !self.protection
    }

    pub fn bitrate_index(&self) -> u8 {
        self.bitrate_index
    }

    pub fn sample_rate_index(&self) -> u8 {
        self.sample_rate_index
    }

    /// Set when the frame carries one extra slot.
    pub fn padding(&self) -> bool {
        self.padding
    }

    pub fn private(&self) -> bool {
        self.private
    }

    pub fn channel_mode(&self) -> ChannelMode {
        self.channel_mode
    }

    /// Raw mode extension bits. Their meaning depends on the layer and is only relevant to
    /// joint stereo frames.
    pub fn mode_extension(&self) -> u8 {
        self.mode_extension
    }

    pub fn copyright(&self) -> bool {
        self.copyright
    }

    pub fn original(&self) -> bool {
        self.original
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    pub fn bitrate(&self) -> Bitrate {
        resolve_bitrate(self.version, self.layer, self.bitrate_index)
    }

    pub fn sample_rate(&self) -> SampleRate {
        resolve_sample_rate(self.version, self.sample_rate_index)
    }

    pub fn version_str(&self) -> String {
        self.version.to_string()
    }

    pub fn layer_str(&self) -> String {
        self.layer.to_string()
    }

    pub fn bitrate_str(&self) -> String {
        self.bitrate().to_string()
    }

    pub fn sample_rate_str(&self) -> String {
        self.sample_rate().to_string()
    }
}

impl fmt::Display for FrameHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "MPEG {} layer {}, bitrate {}, sample rate {}, {}, emphasis {}",
            self.version,
            self.layer,
            self.bitrate(),
            self.sample_rate(),
            self.channel_mode,
            self.emphasis
        )
    }
}
