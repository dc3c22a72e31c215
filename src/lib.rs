#![forbid(unsafe_code)]

pub mod interpolate;

pub use interpolate::{clamp, lerp, normalize_clamped};
