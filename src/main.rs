//! Trunk entry point. Builds with `--features csr`.

fn main() {
    #[cfg(feature = "csr")]
    image_gallery::app::mount();
}
