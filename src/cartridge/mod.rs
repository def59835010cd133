//! Cartridge space ($4020-$FFFF) and mapper support.
//!
//! - **cartridge**: bus-facing device adapter over a boxed mapper.
//! - **mapper**: [Mapper](https://www.nesdev.org/wiki/Mapper) trait plus NROM (0) and UxROM (2/94/180).
//! - **registry**: mapper number → constructor table, used at cartridge load time.

pub mod cartridge;
pub mod mapper;
pub mod registry;
