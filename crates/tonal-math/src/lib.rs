//! # tonal-math
//!
//! Math primitives for tonal color conversions.
//!
//! This crate provides the small numeric foundation the conversion crates
//! build on:
//!
//! - [`Vec3`] - 3D `f64` vectors for RGB/XYZ/Lab triplets
//! - [`Mat3`] - 3x3 `f64` matrices for color space transforms
//! - [`clamp_int`], [`clamp_double`] - saturating range clamps
//!
//! # Design
//!
//! Color appearance math is specified in double precision; every type here
//! is `f64` so conversions reproduce the reference values bit for bit.
//! All matrix operations assume **row-major** storage and **column
//! vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tonal_math::{Mat3, Vec3};
//!
//! let srgb_to_xyz = Mat3::from_rows([
//!     [0.41233895, 0.35762064, 0.18051042],
//!     [0.2126, 0.7152, 0.0722],
//!     [0.01932141, 0.11916382, 0.95034478],
//! ]);
//!
//! let linear_rgb = Vec3::new(100.0, 0.0, 0.0);
//! let xyz = srgb_to_xyz * linear_rgb;
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with SIMD-accelerated math
//!
//! # Used By
//!
//! - `tonal-color` - sRGB/XYZ matrix application

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod clamp;
mod mat3;
mod vec3;

pub use clamp::*;
pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3 as GlamMat3, DVec3 as GlamVec3};
}
