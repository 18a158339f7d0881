use std::{
    fs,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use log::info;
use sfwu2h_core::{header_file_name, write_header, FirmwareImage, Sfwu2HError};

pub fn convert<P: AsRef<Path>>(
    input_path: &P,
    output_path: Option<&P>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input_path).map_err(Sfwu2HError::FailedToRead)?;
    let image = FirmwareImage::parse(&data)?;
    let version = image.version();

    info!("Firmware version: {}", version);

    let output_path = match output_path {
        Some(path) => path.as_ref().to_path_buf(),
        None => PathBuf::from(header_file_name(version)),
    };

    let output = create_output(&output_path).map_err(Sfwu2HError::FailedToWrite)?;

    if let Err(err) = write_header(&image, BufWriter::new(output)) {
        fs::remove_file(&output_path)?;
        return Err(Box::new(err));
    }

    Ok(())
}

// Generated headers are checked into firmware-update client trees, the build
// scripts there expect them world readable.
#[cfg(unix)]
fn create_output(path: &Path) -> io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

#[cfg(not(unix))]
fn create_output(path: &Path) -> io::Result<fs::File> {
    fs::File::create(path)
}
