//! Utility helpers shared across the UI modules.
//!
//! These isolate browser concerns (localStorage, DOM geometry, drag payloads,
//! randomness, the inline config block) from the components so the
//! components read as plain event-to-engine wiring.

pub mod config;
pub mod dispatch;
pub mod dom;
pub mod rng;
pub mod storage;
