pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const PLACEHOLDER_ATTRIBUTE: &str = "data-src";

pub trait LazyImage {
    fn placeholder(&self) -> Option<String>;
    fn set_source(&self, src: &str);
    fn clear_placeholder(&self);
}

/// Moves the placeholder into the real source. Returns false when there was
/// nothing left to load.
pub fn load(image: &impl LazyImage) -> bool {
    let Some(src) = image.placeholder() else {
        return false;
    };
    image.set_source(&src);
    image.clear_placeholder();
    true
}
