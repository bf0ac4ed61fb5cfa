/// Gallery popup state
///
/// A gallery only exists while its popup is open. It owns the image list of
/// one project and the index of the image on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    folder: String,
    images: Vec<String>,
    index: usize,
}

impl Gallery {
    /// Open a gallery on its first image.
    ///
    /// Returns None for an empty image list, so there is never a popup
    /// without something to show.
    pub fn open(folder: impl Into<String>, images: Vec<String>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }

        Some(Self {
            folder: folder.into(),
            images,
            index: 0,
        })
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// URL of the image on screen
    pub fn current(&self) -> &str {
        &self.images[self.index]
    }

    /// Advance, wrapping past the last image to the first
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
    }

    /// Go back, wrapping before the first image to the last
    pub fn prev(&mut self) {
        self.index = (self.index + self.images.len() - 1) % self.images.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(len: usize) -> Gallery {
        let images = (0..len).map(|i| format!("/img/{}.png", i)).collect();
        Gallery::open("entry_demo", images).unwrap()
    }

    #[test]
    fn test_empty_gallery_does_not_open() {
        assert!(Gallery::open("entry_demo", Vec::new()).is_none());
    }

    #[test]
    fn test_opens_on_first_image() {
        let gallery = gallery(3);
        assert_eq!(gallery.index(), 0);
        assert_eq!(gallery.current(), "/img/0.png");
        assert_eq!(gallery.folder(), "entry_demo");
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut gallery = gallery(3);
        gallery.next();
        gallery.next();
        assert_eq!(gallery.index(), 2);
        gallery.next();
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut gallery = gallery(3);
        gallery.prev();
        assert_eq!(gallery.index(), 2);
        assert_eq!(gallery.current(), "/img/2.png");
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut gallery = gallery(1);
        gallery.next();
        assert_eq!(gallery.index(), 0);
        gallery.prev();
        assert_eq!(gallery.index(), 0);
    }

    #[test]
    fn test_full_cycle_returns_home() {
        for len in 1..6 {
            let mut gallery = gallery(len);
            for _ in 0..len {
                gallery.next();
            }
            assert_eq!(gallery.index(), 0);
            for _ in 0..len {
                gallery.prev();
            }
            assert_eq!(gallery.index(), 0);
        }
    }
}
