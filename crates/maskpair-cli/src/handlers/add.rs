//! Add command handler.
//!
//! Describes the original and mask files from the file system and stores
//! them as a new pair.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use maskpair_core::{ImageFileInfo, NewImagePair};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Arguments for the add command.
#[derive(Debug, Clone)]
pub struct AddArgs<'a> {
    pub original: &'a Path,
    pub mask: &'a Path,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

/// Execute the add command, returning the new pair's ID.
pub async fn execute(ctx: &CliContext, args: AddArgs<'_>, json: bool) -> Result<i64, CliError> {
    let original = describe_original(args.original, args.width, args.height)?;
    let mask = describe_file(args.mask)?;

    let id = ctx.service().add(NewImagePair::new(original, mask)).await?;

    if json {
        println!("{}", serde_json::json!({ "id": id }));
    } else {
        println!("Stored image pair {id}");
    }
    Ok(id)
}

/// Build the info record for the original image.
///
/// File size comes from the file's metadata. Dimensions given on the command
/// line win; the rest are read from the image header when possible.
pub fn describe_original(
    path: &Path,
    width: Option<i64>,
    height: Option<i64>,
) -> Result<ImageFileInfo, CliError> {
    let mut info = describe_file(path)?;

    let len = fs::metadata(path)?.len();
    info.file_size = Some(
        i64::try_from(len)
            .map_err(|_| CliError::Io(format!("{} is too large", path.display())))?,
    );

    let probed = if width.is_some() && height.is_some() {
        None
    } else {
        probe_dimensions(path)
    };
    info.width = width.or_else(|| probed.map(|(w, _)| w));
    info.height = height.or_else(|| probed.map(|(_, h)| h));

    Ok(info)
}

/// Build an info record holding only the file's name and path.
pub fn describe_file(path: &Path) -> Result<ImageFileInfo, CliError> {
    if !path.is_file() {
        return Err(CliError::Io(format!("{} is not a file", path.display())));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| CliError::Arguments(format!("{} has no file name", path.display())))
        .and_then(utf8)?;

    Ok(ImageFileInfo::new(filename, normalized_path_string(path)?))
}

/// Normalizes a file path to a canonical string representation.
///
/// Stored paths must point back at the file, so non-UTF-8 paths are refused.
fn normalized_path_string(path: &Path) -> Result<String, CliError> {
    match fs::canonicalize(path) {
        Ok(canonical) => utf8(canonical.as_os_str()),
        Err(_) => utf8(path.as_os_str()),
    }
}

fn utf8(value: &OsStr) -> Result<String, CliError> {
    value.to_str().map(str::to_string).ok_or_else(|| {
        CliError::Arguments(format!("{} is not valid UTF-8", value.to_string_lossy()))
    })
}

fn probe_dimensions(path: &Path) -> Option<(i64, i64)> {
    match image::image_dimensions(path) {
        Ok((w, h)) => Some((i64::from(w), i64::from(h))),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not read image dimensions");
            None
        }
    }
}
