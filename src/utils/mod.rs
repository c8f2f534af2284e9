//! # Utility Modules
//!
//! This module contains shared configuration values used throughout the
//! demo service.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Application-wide configuration constants

pub mod constant;
