//! Register map access to shared system-controller (syscon) blocks.

use crate::error::Error;

/// A register map over a syscon block.
pub trait Regmap {
    /// Read a register.
    fn read(&mut self, reg: u32) -> Result<u32, Error>;
    /// Write a register.
    fn write(&mut self, reg: u32, val: u32) -> Result<(), Error>;

    /// Read-modify-write the bits selected by `mask`.
    /// This is the default implementation.
    /// Implement this function when the host can update bits atomically.
    fn update_bits(&mut self, reg: u32, mask: u32, val: u32) -> Result<(), Error> {
        let orig = self.read(reg)?;
        let tmp = (orig & !mask) | (val & mask);
        if tmp != orig {
            self.write(reg, tmp)?;
        }
        Ok(())
    }
}

/// Shift `val` into the field described by `mask`, aligned to the lowest set bit.
///
/// Returns `None` for an empty mask.
pub fn field_prep(mask: u32, val: u32) -> Option<u32> {
    if mask == 0 {
        return None;
    }
    Some((val << mask.trailing_zeros()) & mask)
}

/// Register offset and mask of a syscon field, from `<&syscon REG MASK>`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SysconField {
    /// Register offset in the syscon block
    pub reg: u32,
    /// Bits owned by the field
    pub mask: u32,
}

impl SysconField {
    /// Write `val` into the field.
    pub fn update<R: Regmap + ?Sized>(&self, regmap: &mut R, val: u32) -> Result<(), Error> {
        let bits = field_prep(self.mask, val).ok_or(Error::InvalidArgument)?;
        regmap.update_bits(self.reg, self.mask, bits)
    }
}
