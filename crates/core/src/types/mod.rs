//! Core types for Festiva.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod hex_color;
pub mod id;
pub mod price;

pub use hex_color::{HexColor, HexColorError};
pub use id::*;
pub use price::{Price, PriceError};
