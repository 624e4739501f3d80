//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and the distance primitive
//! - Logging utilities

pub mod math;
pub mod logging;
