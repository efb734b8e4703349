#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod clk;
pub mod device;
pub mod error;
pub mod of;
pub mod phy;
pub mod regmap;
pub mod starfive;
pub mod stmmac;

#[cfg(test)]
mod mock;

pub use error::Error;
pub use starfive::{DwmacStarfiveDriver, StarfiveDwmac};
