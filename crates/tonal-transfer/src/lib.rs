//! # tonal-transfer
//!
//! Piecewise transfer functions for tonal color conversions.
//!
//! Two function pairs live here:
//!
//! - [`srgb`] - the sRGB electro-optical transfer function and its inverse,
//!   quantized to 8-bit channels and scaled so linear light spans [0, 100]
//! - [`lab`] - the CIE L\*a\*b\* piecewise lightness functions and the CIE
//!   constants epsilon and kappa
//!
//! # Terminology
//!
//! - **Linearize**: Encoded 8-bit channel -> linear light (EOTF direction)
//! - **Delinearize**: Linear light -> encoded 8-bit channel (OETF direction)
//!
//! # Compatibility
//!
//! Both pairs reproduce Google's material-color-utilities bit for bit,
//! including its `0.040449936` sRGB linear-segment threshold (the
//! conventional IEC constant is `0.04045`). Do not "correct" the constants.
//!
//! # Usage
//!
//! ```rust
//! use tonal_transfer::srgb;
//!
//! let linear = srgb::linearized(128);
//! assert_eq!(srgb::delinearized(linear), 128);
//! ```
//!
//! # Dependencies
//!
//! - [`tonal-math`] - final channel clamp
//!
//! # Used By
//!
//! - `tonal-color` - ARGB/XYZ/Lab conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lab;
pub mod srgb;

// Re-export common functions
pub use lab::{lab_f, lab_invf, EPSILON, KAPPA};
pub use srgb::{delinearized, linearized};
