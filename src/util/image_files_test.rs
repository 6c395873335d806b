use super::*;

#[test]
fn recognizes_every_supported_extension() {
    for name in ["a.png", "a.jpg", "a.jpeg", "a.webp", "a.gif", "a.bmp", "a.svg"] {
        assert!(is_image_file(name), "{name} should be an image");
    }
}

#[test]
fn extension_match_is_case_insensitive() {
    assert!(is_image_file("c.JPG"));
    assert!(is_image_file("Photo.WebP"));
    assert!(is_image_file("icon.Svg"));
}

#[test]
fn rejects_other_extensions_and_bare_names() {
    assert!(!is_image_file("b.txt"));
    assert!(!is_image_file("manifest.json"));
    assert!(!is_image_file("png"));
    assert!(!is_image_file("archive.png.zip"));
    assert!(!is_image_file("a.png "));
    assert!(!is_image_file(""));
}

#[test]
fn only_last_extension_counts() {
    assert!(is_image_file("backup.tar.png"));
    assert!(is_image_file(".png"));
}

#[test]
fn filter_keeps_order_and_drops_non_images() {
    let files = filter_image_files(["z.gif", "notes.md", "a.png", "c.JPG", "b.txt"]);
    assert_eq!(files, vec!["z.gif", "a.png", "c.JPG"]);
}

#[test]
fn filter_of_empty_input_is_empty() {
    assert!(filter_image_files(Vec::<String>::new()).is_empty());
}
