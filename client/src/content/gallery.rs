//! Facility gallery images shown in the slider, grid and lightbox.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub url: &'static str,
    pub title: &'static str,
}

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage {
        url: "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=800&h=600&fit=crop",
        title: "Main Gym Floor",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1540497077202-7c8a3999166f?w=800&h=600&fit=crop",
        title: "Free Weights Area",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1571902943202-507ec2618e8f?w=800&h=600&fit=crop",
        title: "Cardio Zone",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1593079831268-3381b0db4a77?w=800&h=600&fit=crop",
        title: "CrossFit Box",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1518611012118-696072aa579a?w=800&h=600&fit=crop",
        title: "Yoga Studio",
    },
    GalleryImage {
        url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&h=600&fit=crop",
        title: "Boxing Ring",
    },
];
