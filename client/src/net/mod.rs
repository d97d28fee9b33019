//! Network boundary modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site makes no calls of its own; this is where outbound submissions
//! would cross from validated UI state to a backend.

pub mod contact;
