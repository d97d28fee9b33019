use super::*;
use crate::content::gallery::GALLERY_IMAGES;

#[test]
fn starts_closed() {
    let lightbox = Lightbox::new(GALLERY_IMAGES);
    assert!(!lightbox.is_open());
    assert!(lightbox.selected_item().is_none());
}

#[test]
fn select_shows_matching_catalog_entry() {
    for (i, image) in GALLERY_IMAGES.iter().enumerate() {
        let mut lightbox = Lightbox::new(GALLERY_IMAGES);
        assert!(lightbox.select(i));
        assert_eq!(lightbox.selected(), Some(i));
        assert_eq!(lightbox.selected_item(), Some(image));
    }
}

#[test]
fn select_out_of_range_is_ignored() {
    let mut lightbox = Lightbox::new(GALLERY_IMAGES);
    lightbox.select(1);
    assert!(!lightbox.select(GALLERY_IMAGES.len()));
    assert_eq!(lightbox.selected(), Some(1));
}

#[test]
fn close_clears_any_selection() {
    for i in 0..GALLERY_IMAGES.len() {
        let mut lightbox = Lightbox::new(GALLERY_IMAGES);
        lightbox.select(i);
        lightbox.close();
        assert!(!lightbox.is_open());
    }
}

#[test]
fn close_when_closed_is_noop() {
    let mut lightbox = Lightbox::new(GALLERY_IMAGES);
    lightbox.close();
    assert_eq!(lightbox.selected(), None);
}

#[test]
fn reselect_replaces_selection() {
    let mut lightbox = Lightbox::new(GALLERY_IMAGES);
    lightbox.select(0);
    lightbox.select(3);
    assert_eq!(lightbox.selected_item().map(|i| i.title), Some(GALLERY_IMAGES[3].title));
}
