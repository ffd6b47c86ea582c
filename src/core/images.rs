//! Event thumbnails stored as loose files next to the database.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

pub fn ensure_images_dir(dir: &str) -> AppResult<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Copy a user-picked image into the images directory and return the stored
/// path. The original file is left untouched; the copy is what the event row
/// owns and what a later delete removes.
pub fn import_image(images_dir: &str, source: &Path) -> AppResult<PathBuf> {
    if !source.is_file() {
        return Err(AppError::Validation(format!(
            "image file not found: {}",
            source.display()
        )));
    }

    ensure_images_dir(images_dir)?;

    let file_name = source
        .file_name()
        .ok_or_else(|| AppError::Validation(format!("not a file path: {}", source.display())))?
        .to_string_lossy()
        .to_string();

    // Never clobber another event's thumbnail with the same source name.
    let mut dest = Path::new(images_dir).join(&file_name);
    let mut attempt = 1;
    while dest.exists() {
        dest = Path::new(images_dir).join(format!("{}_{}", attempt, file_name));
        attempt += 1;
    }

    fs::copy(source, &dest)?;
    Ok(dest)
}

/// Write the bundled placeholder thumbnail used by the seed data.
pub fn write_placeholder(images_dir: &str, index: usize, label: &str) -> AppResult<PathBuf> {
    ensure_images_dir(images_dir)?;

    let path = Path::new(images_dir).join(format!("seed_event_{}.svg", index));
    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"220\" height=\"120\">\
         <rect width=\"220\" height=\"120\" fill=\"#2b2d42\"/>\
         <text x=\"110\" y=\"65\" fill=\"#edf2f4\" font-size=\"14\" text-anchor=\"middle\">{}</text>\
         </svg>\n",
        label
    );
    fs::write(&path, svg)?;
    Ok(path)
}

/// Best-effort removal of a stored thumbnail. The row and the file can get
/// out of step (manual cleanup, moved store); a missing file is not an error.
pub fn remove_thumbnail(path: &str) {
    let _ = fs::remove_file(path);
}
