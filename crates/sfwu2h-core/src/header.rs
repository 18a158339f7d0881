use crate::{
    sfwu::{FirmwareImage, FirmwareVersion},
    Sfwu2HError,
};
use log::debug;
use std::io::{self, Write};

/// Default header file name for a firmware version. Existing downstream
/// build scripts look for this exact name, keep it stable.
pub fn header_file_name(version: FirmwareVersion) -> String {
    format!("PN5180Firmware_{}_{}.h", version.major, version.minor)
}

/// Writes the C header embedding the firmware image as a byte array.
pub fn write_header(image: &FirmwareImage, output: impl Write) -> Result<(), Sfwu2HError> {
    debug!("Embedding {} firmware bytes", image.data().len());

    render(image, output).map_err(Sfwu2HError::FailedToWrite)
}

fn render(image: &FirmwareImage, mut output: impl Write) -> io::Result<()> {
    let version = image.version();

    writeln!(
        output,
        "static const uint8_t gphDnldNfc_DlSequence{}_{}[] = {{",
        version.major, version.minor
    )?;

    for (i, byte) in image.data().iter().enumerate() {
        if i > 0 {
            output.write_all(b", ")?;

            // Wrapped lines keep the trailing separator, the original
            // generator formatted them this way.
            if i % 8 == 0 {
                output.write_all(b"\n")?;
            }
        }

        write!(output, "0x{:02x}", byte)?;
    }

    writeln!(output, "}};")?;
    writeln!(
        output,
        "uint16_t gphDnldNfc_DlSeqSizeOf{}_{} = {};",
        version.major,
        version.minor,
        image.data().len()
    )?;

    output.flush()
}
