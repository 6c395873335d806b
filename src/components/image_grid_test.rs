use super::*;

#[test]
fn cards_follow_file_order_with_folder_urls() {
    let config = GalleryConfig::default();
    let cards = card_images(&config, &["b.png".to_owned(), "a b.jpg".to_owned()]);
    assert_eq!(
        cards,
        vec![
            ViewerImage { src: "./images/b.png".to_owned(), title: "b.png".to_owned() },
            ViewerImage { src: "./images/a%20b.jpg".to_owned(), title: "a b.jpg".to_owned() },
        ]
    );
}

#[test]
fn card_title_is_the_raw_file_name() {
    let config = GalleryConfig { image_folder: "/static/pics/".to_owned(), ..GalleryConfig::default() };
    let cards = card_images(&config, &["x.png".to_owned()]);
    assert_eq!(cards[0].title, "x.png");
    assert_eq!(cards[0].download_name(), "x.png");
    assert_eq!(cards[0].src, "/static/pics/x.png");
}

#[test]
fn no_files_means_no_cards() {
    assert!(card_images(&GalleryConfig::default(), &[]).is_empty());
}
