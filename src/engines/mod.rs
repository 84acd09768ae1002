//! Pronunciation engines.
//!
//! This module contains engines that prepare text in one language so that a
//! speech synthesizer built for another language reads it correctly.
//!
//! # Available Engines
//!
//! - `swahili` - Swahili read by an Indonesian (`id` / `id-ID`) voice

pub mod swahili;
