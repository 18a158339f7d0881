use std::io::{Read, Write};
use thiserror::Error;

pub mod header;
pub mod sfwu;

pub use header::{header_file_name, write_header};
pub use sfwu::{FirmwareImage, FirmwareVersion};

/// Converts a .sfwu firmware container into a C header.
///
/// Returns the version extracted from the container so the caller can report
/// it or derive an output file name from it.
pub fn sfwu2h(mut input: impl Read, output: impl Write) -> Result<FirmwareVersion, Sfwu2HError> {
    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .map_err(Sfwu2HError::FailedToRead)?;

    let image = FirmwareImage::parse(&data)?;
    write_header(&image, output)?;

    Ok(image.version())
}

#[derive(Error, Debug)]
pub enum Sfwu2HError {
    #[error("Failed to read firmware image")]
    FailedToRead(std::io::Error),
    #[error("Firmware image too short to hold the magic and version fields ({0} bytes)")]
    ImageTooShort(usize),
    #[error("Magic number mismatch at offset {offset}: expected {expected:#04x}, found {found:#04x}")]
    MagicMismatch {
        offset: usize,
        expected: u8,
        found: u8,
    },
    #[error("Failed to write to output")]
    FailedToWrite(std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    pub fn six_byte_image() {
        let bytes_in = io::Cursor::new(&[0x00, 0xff, 0xc0, 0x00, 0x04, 0x01][..]);
        let mut bytes_out = Vec::new();
        let version = sfwu2h(bytes_in, &mut bytes_out).unwrap();

        assert_eq!(version, FirmwareVersion { major: 1, minor: 4 });
        assert_eq!(
            bytes_out,
            b"static const uint8_t gphDnldNfc_DlSequence1_4[] = {\n\
              0x00, 0xff, 0xc0, 0x00, 0x04, 0x01};\n\
              uint16_t gphDnldNfc_DlSeqSizeOf1_4 = 6;\n"
        );
    }

    #[test]
    pub fn magic_mismatch_writes_nothing() {
        let bytes_in = io::Cursor::new(&[0x01, 0x00, 0xc0, 0x00, 0x04, 0x01][..]);
        let mut bytes_out = Vec::new();

        let err = sfwu2h(bytes_in, &mut bytes_out).unwrap_err();

        assert!(matches!(err, Sfwu2HError::MagicMismatch { .. }));
        assert!(bytes_out.is_empty());
    }

    #[test]
    pub fn conversion_is_deterministic() {
        let data: Vec<u8> = (0..100)
            .map(|i| match i {
                0 => 0x00,
                2 => 0xc0,
                i => i as u8,
            })
            .collect();

        let mut first = Vec::new();
        let mut second = Vec::new();
        sfwu2h(io::Cursor::new(&data), &mut first).unwrap();
        sfwu2h(io::Cursor::new(&data), &mut second).unwrap();

        assert_eq!(first, second);
    }
}
