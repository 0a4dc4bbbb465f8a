//! Helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps browser entropy out of the components so they stay testable on
//! native targets.

pub mod seed;
