//! Static content catalogs rendered by the page sections.
//!
//! DESIGN
//! ======
//! Every catalog is a `&'static [T]` of small `Copy` records fixed at build
//! time. Sections read them directly; nothing here is mutated at runtime.


pub mod brand;
pub mod contact;
pub mod features;
pub mod gallery;
pub mod hero;
pub mod navigation;
pub mod pricing;
pub mod testimonials;
pub mod trainers;

/// Glyphs used by catalog records and section chrome. Rendered by
/// `components::icon::Icon`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconName {
    Dumbbell,
    HeartPulse,
    Apple,
    Users,
    Clock,
    Waves,
    Zap,
    Star,
    Crown,
    MapPin,
    Phone,
    Mail,
    Instagram,
    Twitter,
    Linkedin,
    Facebook,
    Youtube,
    Menu,
    Close,
    ArrowRight,
    Play,
    Check,
    ChevronLeft,
    ChevronRight,
    Send,
    CheckCircle,
    Quote,
}

/// A label + href pair. Same-page links use `#anchor` hrefs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// A link to a social network profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: IconName,
    pub label: &'static str,
    pub href: &'static str,
}
