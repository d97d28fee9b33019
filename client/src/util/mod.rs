//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and link building
//! from section components to improve reuse and testability.

pub mod email;
pub mod viewport;
pub mod whatsapp;
