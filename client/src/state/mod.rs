//! Local UI state models.
//!
//! DESIGN
//! ======
//! Each section owns exactly one of these models in a local `RwSignal`.
//! Nothing is provided through context; no two sections share state. The
//! models are plain structs so their transitions test without a browser.

pub mod carousel;
pub mod contact;
pub mod lightbox;
pub mod menu;
pub mod newsletter;
