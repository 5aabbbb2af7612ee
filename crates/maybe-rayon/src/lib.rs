//! A thin layer over `rayon` so that callers can write one iterator chain and get parallel
//! execution only when the `concurrent` feature is enabled.

#[cfg(feature = "concurrent")]
pub mod concurrent;
#[cfg(feature = "concurrent")]
pub use concurrent::*;

#[cfg(not(feature = "concurrent"))]
pub mod sequential;
#[cfg(not(feature = "concurrent"))]
pub use sequential::*;
