//! Clock handles provided by the host clock framework.

use crate::error::Error;

/// A prepared and enabled clock, as returned by `devm_clk_get_enabled`.
///
/// Dropping the handle disables and releases the clock.
pub trait Clk {
    /// Request a new rate in Hz. The framework may round it.
    fn set_rate(&mut self, rate: u32) -> Result<(), Error>;

    /// Current rate in Hz.
    fn rate(&self) -> u32;
}
