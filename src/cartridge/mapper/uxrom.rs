//! Mappers 2/94/180 (UxROM): 16 KiB switchable PRG bank.
//!
//! $8000-$BFFF selects among 16 KiB PRG banks; $C000-$FFFF is fixed to the
//! last bank (reset vectors live there). Any write to $8000-$FFFF loads the
//! bank select register.

use log::trace;

use crate::cartridge::mapper::mapper::Mapper;

/// UxROM mapper: switchable low bank, fixed last bank.
pub struct Uxrom {
    prg_rom: Vec<u8>,
    bank: usize,
}

impl Uxrom {
    const BANK_SIZE: usize = 16 * 1024; // 16 KiB

    /// Create UxROM with the given PRG ROM image (a multiple of 16 KiB).
    pub fn new(prg_rom: Vec<u8>) -> Self {
        Self { prg_rom, bank: 0 }
    }

    fn bank_count(&self) -> usize {
        self.prg_rom.len() / Self::BANK_SIZE
    }
}

impl Mapper for Uxrom {
    fn id(&self) -> u16 {
        2
    }

    fn read(&mut self, addr: u16) -> u8 {
        match addr {
            // Switchable bank
            0x8000..=0xBFFF => {
                let index = self.bank * Self::BANK_SIZE + (addr - 0x8000) as usize;
                self.prg_rom[index]
            }
            // Fixed last bank
            0xC000..=0xFFFF => {
                let last = self.prg_rom.len() - Self::BANK_SIZE;
                self.prg_rom[last + (addr - 0xC000) as usize]
            }
            // Nothing wired below $8000 on a UxROM board
            _ => 0,
        }
    }

    fn write(&mut self, addr: u16, data: u8) {
        match addr {
            0x8000..=0xFFFF => {
                // The board wires only as many bank lines as the ROM needs,
                // so oversized selects wrap.
                self.bank = data as usize % self.bank_count();
                trace!("UxROM: bank {}", self.bank);
            }
            _ => trace!("UxROM: ignoring write {:02X} to {:04X}", data, addr),
        }
    }
}
