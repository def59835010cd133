//! Mapper trait: the CPU-side cartridge contract.

use core::fmt;

/// Trait for NES cartridge mappers. Every CPU access to cartridge space
/// ($4020-$FFFF) goes through one of these.
///
/// Addresses are absolute CPU addresses; each board carves the space into
/// its own PRG ROM, PRG RAM, and register windows. What happens at offsets a
/// board leaves unwired is board-specific, not uniform across mappers.
pub trait Mapper {
    /// iNES / NES 2.0 mapper number this implementation covers.
    fn id(&self) -> u16;
    /// Read from PRG ROM, PRG RAM, or a mapper register.
    fn read(&mut self, addr: u16) -> u8;
    /// Write to PRG RAM or a mapper control register (PRG ROM is read-only).
    fn write(&mut self, addr: u16, data: u8);
}

impl fmt::Debug for dyn Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mapper {}", self.id())
    }
}
