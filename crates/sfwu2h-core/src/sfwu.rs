use crate::Sfwu2HError;
use std::fmt;

pub const SFWU_MAGIC0: u8 = 0x00;
pub const SFWU_MAGIC1: u8 = 0xC0;

const MAGIC0_OFFSET: usize = 0;
const MAGIC1_OFFSET: usize = 2;
const MINOR_OFFSET: usize = 4;
const MAJOR_OFFSET: usize = 5;

/// Smallest container that still holds the magic and version fields.
pub const SFWU_MIN_LEN: usize = 6;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FirmwareVersion {
    pub major: u8,
    pub minor: u8,
}

impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A validated view of a `.sfwu` firmware container.
#[derive(Debug)]
pub struct FirmwareImage<'a> {
    data: &'a [u8],
    version: FirmwareVersion,
}

impl<'a> FirmwareImage<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, Sfwu2HError> {
        if data.len() < SFWU_MIN_LEN {
            return Err(Sfwu2HError::ImageTooShort(data.len()));
        }

        for (offset, expected) in [(MAGIC0_OFFSET, SFWU_MAGIC0), (MAGIC1_OFFSET, SFWU_MAGIC1)] {
            if data[offset] != expected {
                return Err(Sfwu2HError::MagicMismatch {
                    offset,
                    expected,
                    found: data[offset],
                });
            }
        }

        // The container stores minor before major. Generated symbol names
        // depend on this order, so it must not be "corrected".
        let version = FirmwareVersion {
            major: data[MAJOR_OFFSET],
            minor: data[MINOR_OFFSET],
        };

        Ok(Self { data, version })
    }

    pub fn version(&self) -> FirmwareVersion {
        self.version
    }

    pub fn data(&self) -> &[u8] {
        self.data
    }
}
