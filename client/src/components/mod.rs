//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component per page section, plus the shared pieces (icons, section
//! headers, carousel controls, lightbox) they are built from. Sections read
//! `content` catalogs and own any `state` model they need locally.

pub mod carousel_controls;
pub mod contact;
pub mod cta;
pub mod features;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod icon;
pub mod lightbox;
pub mod navbar;
pub mod pricing;
pub mod section_header;
pub mod testimonials;
pub mod trainers;
