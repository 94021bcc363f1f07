use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::{GenVersionError, Result};
use crate::library::template::{TemplateSettings, render};
use crate::VersionInfo;

// WRITING THE VERSION FILE //

/// Writes the rendered version file to `path`, replacing any previous content.
///
/// The file is created if missing and truncated if present. The handle is
/// dropped when this function returns, on success and on error alike.
pub fn write_version_file<P: AsRef<Path>>(
    info: &VersionInfo,
    settings: &TemplateSettings,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let contents = render(info, settings);

    let file_error = |source| GenVersionError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut output = options.open(path).map_err(file_error)?;
    output.write_all(contents.as_bytes()).map_err(file_error)?;
    output.flush().map_err(file_error)?;

    info!(
        "Wrote {} ({} bytes, {})",
        path.display(),
        contents.len(),
        settings.language
    );
    Ok(())
}
