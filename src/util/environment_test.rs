use super::*;

#[test]
fn file_protocol_detection_is_case_insensitive() {
    assert!(is_file_protocol("file:"));
    assert!(is_file_protocol("FILE:"));
    assert!(is_file_protocol("File:"));
}

#[test]
fn web_protocols_are_not_file_protocol() {
    assert!(!is_file_protocol("http:"));
    assert!(!is_file_protocol("https:"));
    assert!(!is_file_protocol("file"));
    assert!(!is_file_protocol(""));
}

#[cfg(not(feature = "csr"))]
#[test]
fn detect_outside_browser_reports_default_environment() {
    let env = PageEnvironment::detect(&GalleryConfig::default());
    assert_eq!(env, PageEnvironment::default());
    assert!(!env.using_file_protocol);
    assert!(env.inline_files.is_none());
}
