//! Mapper selection at cartridge load time.
//!
//! The ROM loader (outside this crate) pulls the mapper number out of the
//! file header, asks the registry for a cartridge, and installs it on the
//! bus. New boards register here without touching the bus core.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use log::{debug, warn};

use crate::cartridge::cartridge::Cartridge;
use crate::cartridge::mapper::mapper::Mapper;
use crate::cartridge::mapper::nrom::Nrom;
use crate::cartridge::mapper::uxrom::Uxrom;

/// Constructor for one mapper family, fed the PRG ROM image.
pub type MapperFactory = fn(Vec<u8>) -> Box<dyn Mapper>;

/// Cartridge construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapperError {
    /// No registered factory covers this mapper number.
    Unsupported(u16),
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperError::Unsupported(id) => write!(f, "unsupported mapper {}", id),
        }
    }
}

impl Error for MapperError {}

/// Mapper number → factory table.
pub struct MapperRegistry {
    factories: HashMap<u16, MapperFactory>,
}

impl MapperRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry with the bundled mappers: NROM (0) and UxROM (2, 94, 180).
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(0, |prg_rom| Box::new(Nrom::new(prg_rom)));
        for id in [2, 94, 180] {
            registry.register(id, |prg_rom| Box::new(Uxrom::new(prg_rom)));
        }
        registry
    }

    /// Bind a factory to a mapper number, replacing any previous binding.
    pub fn register(&mut self, id: u16, factory: MapperFactory) {
        self.factories.insert(id, factory);
    }

    /// Build the cartridge for a mapper number.
    pub fn create(&self, id: u16, prg_rom: Vec<u8>) -> Result<Cartridge, MapperError> {
        match self.factories.get(&id) {
            Some(factory) => {
                debug!("mapper {}: {} KiB PRG ROM", id, prg_rom.len() / 1024);
                Ok(Cartridge::new(factory(prg_rom)))
            }
            None => {
                warn!("unsupported mapper {}", id);
                Err(MapperError::Unsupported(id))
            }
        }
    }
}

impl Default for MapperRegistry {
    fn default() -> Self {
        Self::new()
    }
}
