//! Memory bus and access dispatch for the NES.
//!
//! Routes CPU accesses to RAM, PPU registers, APU/IO registers, and the
//! cartridge per the [CPU memory map](https://www.nesdev.org/wiki/CPU_memory_map).
//! The bus guarantees which device sees an access and at what offset; what
//! the device does with it (scroll latches, DMA triggers, bank switches) is
//! the device's own business.

use std::ops;

use log::debug;

use crate::decode::{Region, decode};
use crate::device::Device;

/// Trait for memory-mapped bus access used by the CPU.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);

    /// Little-endian 16-bit read (reset/IRQ vectors, pointers).
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        hi << 8 | lo
    }

    /// Read a contiguous address range, one bus read per byte.
    ///
    /// Debugger and test support; register reads in the range still perform
    /// their side effects, exactly as if the CPU had walked the range.
    fn read_range<R: ops::RangeBounds<u16>>(&mut self, range: R) -> Vec<u8> {
        let start = match range.start_bound() {
            ops::Bound::Included(addr) => *addr,
            ops::Bound::Excluded(addr) => *addr + 1,
            ops::Bound::Unbounded => u16::MIN,
        };
        let end = match range.end_bound() {
            ops::Bound::Included(addr) => *addr,
            ops::Bound::Excluded(addr) => *addr - 1,
            ops::Bound::Unbounded => u16::MAX,
        };
        if start > end {
            return vec![];
        }
        let mut v = Vec::with_capacity(end as usize - start as usize + 1);
        for addr in start..=end {
            v.push(self.read(addr));
        }
        v
    }
}

/// Main NES bus: a device table keyed by decoded region.
///
/// Every region must have a device installed before its first access; an
/// access to an empty slot panics rather than fabricating a byte, since a
/// half-wired session would otherwise corrupt emulation silently. All four
/// slots are filled at session start (RAM and the register shims always,
/// the cartridge once a ROM is loaded).
pub struct NesBus {
    devices: [Option<Box<dyn Device>>; Region::COUNT],
}

impl NesBus {
    /// Create a bus with no devices installed.
    pub fn new() -> Self {
        Self {
            devices: [None, None, None, None],
        }
    }

    /// Bind a device to a region, returning the one it displaces (if any).
    ///
    /// Rebinding is how a cartridge swap installs the next mapper.
    pub fn install(
        &mut self,
        region: Region,
        device: Box<dyn Device>,
    ) -> Option<Box<dyn Device>> {
        debug!("install {:?} device", region);
        self.devices[region.index()].replace(device)
    }

    /// True once a device is bound to the region.
    pub fn is_installed(&self, region: Region) -> bool {
        self.devices[region.index()].is_some()
    }

    fn device_mut(&mut self, region: Region) -> &mut dyn Device {
        match self.devices[region.index()] {
            Some(ref mut device) => device.as_mut(),
            None => panic!("no device installed for {:?}", region),
        }
    }
}

impl Default for NesBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for NesBus {
    fn read(&mut self, addr: u16) -> u8 {
        let (region, offset) = decode(addr);
        self.device_mut(region).read(offset)
    }

    fn write(&mut self, addr: u16, data: u8) {
        let (region, offset) = decode(addr);
        self.device_mut(region).write(offset, data);
    }
}
