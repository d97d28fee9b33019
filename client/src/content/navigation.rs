//! Navigation, footer, social and legal link catalogs.

use super::{IconName, Link, SocialLink};

/// Section anchors in page order. Each href must match a `section_id`.
pub const NAV_LINKS: &[Link] = &[
    Link { label: "Home", href: "#home" },
    Link { label: "Features", href: "#features" },
    Link { label: "Pricing", href: "#pricing" },
    Link { label: "Trainers", href: "#trainers" },
    Link { label: "Gallery", href: "#gallery" },
    Link { label: "Contact", href: "#contact" },
];

pub const QUICK_LINKS: &[Link] = &[
    Link { label: "About Us", href: "#" },
    Link { label: "Classes", href: "#features" },
    Link { label: "Trainers", href: "#trainers" },
    Link { label: "Pricing", href: "#pricing" },
    Link { label: "Gallery", href: "#gallery" },
    Link { label: "Contact", href: "#contact" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { icon: IconName::Instagram, label: "Instagram", href: "#" },
    SocialLink { icon: IconName::Twitter, label: "Twitter", href: "#" },
    SocialLink { icon: IconName::Facebook, label: "Facebook", href: "#" },
    SocialLink { icon: IconName::Youtube, label: "YouTube", href: "#" },
];

pub const LEGAL_LINKS: &[Link] = &[
    Link { label: "Privacy Policy", href: "#" },
    Link { label: "Terms of Service", href: "#" },
    Link { label: "Cookie Policy", href: "#" },
];

/// Element ids of the page sections. Each section component renders its id
/// from here.
pub mod section_id {
    pub const HOME: &str = "home";
    pub const FEATURES: &str = "features";
    pub const PRICING: &str = "pricing";
    pub const TRAINERS: &str = "trainers";
    pub const GALLERY: &str = "gallery";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const CONTACT: &str = "contact";
}

/// Section ids in page order.
pub const SECTION_IDS: &[&str] = &[
    section_id::HOME,
    section_id::FEATURES,
    section_id::PRICING,
    section_id::TRAINERS,
    section_id::GALLERY,
    section_id::TESTIMONIALS,
    section_id::CONTACT,
];
