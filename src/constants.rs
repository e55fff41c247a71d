use std::fmt;

pub const SYNC_PATTERN: u32 = 0x7FF;

// Shifts and masks of every field within the big-endian header word
pub const SYNC_SHIFT: u32 = 21;
pub const VERSION_SHIFT: u32 = 19;
pub const LAYER_SHIFT: u32 = 17;
pub const PROTECTION_SHIFT: u32 = 16;
pub const BITRATE_INDEX_SHIFT: u32 = 12;
pub const SAMPLE_RATE_INDEX_SHIFT: u32 = 10;
pub const PADDING_SHIFT: u32 = 9;
pub const PRIVATE_SHIFT: u32 = 8;
pub const CHANNEL_MODE_SHIFT: u32 = 6;
pub const MODE_EXTENSION_SHIFT: u32 = 4;
pub const COPYRIGHT_SHIFT: u32 = 3;
pub const ORIGINAL_SHIFT: u32 = 2;
pub const EMPHASIS_SHIFT: u32 = 0;

pub const SYNC_MASK: u32 = SYNC_PATTERN << SYNC_SHIFT;
pub const VERSION_MASK: u32 = 0b11 << VERSION_SHIFT;
pub const LAYER_MASK: u32 = 0b11 << LAYER_SHIFT;
pub const PROTECTION_MASK: u32 = 0b1 << PROTECTION_SHIFT;
pub const BITRATE_INDEX_MASK: u32 = 0b1111 << BITRATE_INDEX_SHIFT;
pub const SAMPLE_RATE_INDEX_MASK: u32 = 0b11 << SAMPLE_RATE_INDEX_SHIFT;
pub const PADDING_MASK: u32 = 0b1 << PADDING_SHIFT;
pub const PRIVATE_MASK: u32 = 0b1 << PRIVATE_SHIFT;
pub const CHANNEL_MODE_MASK: u32 = 0b11 << CHANNEL_MODE_SHIFT;
pub const MODE_EXTENSION_MASK: u32 = 0b11 << MODE_EXTENSION_SHIFT;
pub const COPYRIGHT_MASK: u32 = 0b1 << COPYRIGHT_SHIFT;
pub const ORIGINAL_MASK: u32 = 0b1 << ORIGINAL_SHIFT;
pub const EMPHASIS_MASK: u32 = 0b11 << EMPHASIS_SHIFT;

/// MPEG standard version. Discriminants are the encoded bit patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Version {
    Mpeg25 = 0b00,
    Reserved = 0b01,
    Mpeg2 = 0b10,
    Mpeg1 = 0b11,
}

impl Version {
    /// Decodes the low two bits of `bits`.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Version::Mpeg25,
            0b01 => Version::Reserved,
            0b10 => Version::Mpeg2,
            0b11 => Version::Mpeg1,
            _ => unreachable!(),
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn is_reserved(self) -> bool {
        self == Version::Reserved
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Version::Mpeg1 => "1",
            Version::Mpeg2 => "2",
            Version::Mpeg25 => "2.5",
            Version::Reserved => "INVALID",
        })
    }
}

/// Audio layer. Discriminants are the encoded bit patterns, which run backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Reserved = 0b00,
    Layer3 = 0b01,
    Layer2 = 0b10,
    Layer1 = 0b11,
}

impl Layer {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Layer::Reserved,
            0b01 => Layer::Layer3,
            0b10 => Layer::Layer2,
            0b11 => Layer::Layer1,
            _ => unreachable!(),
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn is_reserved(self) -> bool {
        self == Layer::Reserved
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Layer::Layer1 => "1",
            Layer::Layer2 => "2",
            Layer::Layer3 => "3",
            Layer::Reserved => "INVALID",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelMode {
    Stereo = 0b00,
    JointStereo = 0b01,
    DualChannel = 0b10,
    Mono = 0b11,
}

impl ChannelMode {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => ChannelMode::Stereo,
            0b01 => ChannelMode::JointStereo,
            0b10 => ChannelMode::DualChannel,
            0b11 => ChannelMode::Mono,
            _ => unreachable!(),
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ChannelMode::Stereo => "STEREO",
            ChannelMode::JointStereo => "JOINT",
            ChannelMode::DualChannel => "DUAL",
            ChannelMode::Mono => "SINGLE",
        })
    }
}

/// De-emphasis the decoder must apply after decoding.
///
/// `0b10` is reserved and `0b11` is CCIT J.17, as assigned by ISO/IEC 11172-3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Emphasis {
    None = 0b00,
    Ms50By15 = 0b01,
    Reserved = 0b10,
    CcitJ17 = 0b11,
}

impl Emphasis {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Emphasis::None,
            0b01 => Emphasis::Ms50By15,
            0b10 => Emphasis::Reserved,
            0b11 => Emphasis::CcitJ17,
            _ => unreachable!(),
        }
    }

    pub fn bits(self) -> u8 {
        self as u8
    }

    pub fn is_reserved(self) -> bool {
        self == Emphasis::Reserved
    }
}

impl fmt::Display for Emphasis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Emphasis::None => "NONE",
            Emphasis::Ms50By15 => "MS_50_15",
            Emphasis::Reserved => "INVALID",
            Emphasis::CcitJ17 => "CCIT_J17",
        })
    }
}

/// Multiplier turning a `BIT_RATES` entry into bits per second.
pub const BIT_RATE_UNIT: u32 = 8000;
/// `BIT_RATES` entry for a free format stream.
pub const BIT_RATE_ANY: i8 = 0;
/// `BIT_RATES` entry for a forbidden combination.
pub const BIT_RATE_INVALID: i8 = -1;

// Indexed by [version bits][layer bits][bitrate index], in units of 8 kbps
pub static BIT_RATES: [[[i8; 16]; 4]; 4] = [
    [
        // Mpeg25 Reserved
        [-1; 16],
        [
            // Mpeg25 Layer3
            0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 12, 14, 16, 18, 20, -1,
        ],
        [
            // Mpeg25 Layer2
            0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 12, 14, 16, 18, 20, -1,
        ],
        [
            // Mpeg25 Layer1
            0, 4, 6, 7, 8, 10, 12, 14, 16, 18, 20, 22, 24, 28, 32, -1,
        ],
    ],
    // Reserved version
    [[-1; 16], [-1; 16], [-1; 16], [-1; 16]],
    [
        // Mpeg2 Reserved
        [-1; 16],
        [
            // Mpeg2 Layer3
            0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 12, 14, 16, 18, 20, -1,
        ],
        [
            // Mpeg2 Layer2
            0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 12, 14, 16, 18, 20, -1,
        ],
        [
            // Mpeg2 Layer1
            0, 4, 6, 7, 8, 10, 12, 14, 16, 18, 20, 22, 24, 28, 32, -1,
        ],
    ],
    [
        // Mpeg1 Reserved
        [-1; 16],
        [
            // Mpeg1 Layer3
            0, 4, 5, 6, 7, 8, 10, 12, 14, 16, 20, 24, 28, 32, 40, -1,
        ],
        [
            // Mpeg1 Layer2
            0, 4, 6, 7, 8, 10, 12, 14, 16, 20, 24, 28, 32, 40, 48, -1,
        ],
        [
            // Mpeg1 Layer1
            0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48, 52, 56, -1,
        ],
    ],
];

/// `SAMPLING_RATES` entry for a reserved combination.
pub const SAMPLING_RATE_RESERVED: u32 = 0;

// Indexed by [version bits][sample rate index]
pub static SAMPLING_RATES: [[u32; 4]; 4] = [
    [11025, 12000, 8000, 0],  // Mpeg25
    [0, 0, 0, 0],             // Reserved
    [22050, 24000, 16000, 0], // Mpeg2
    [44100, 48000, 32000, 0], // Mpeg1
];
