//! Image filename recognition.

#[cfg(test)]
#[path = "image_files_test.rs"]
mod image_files_test;

/// Extensions shown in the gallery, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp", "svg"];

/// True when `name` ends in `.<ext>` for a recognized image extension.
pub fn is_image_file(name: &str) -> bool {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    IMAGE_EXTENSIONS
        .iter()
        .any(|candidate| ext.eq_ignore_ascii_case(candidate))
}

/// Keep only image filenames, preserving order.
pub fn filter_image_files<I, S>(files: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    files
        .into_iter()
        .map(Into::into)
        .filter(|name| is_image_file(name))
        .collect()
}
