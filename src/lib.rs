//! Nesbus: the CPU-side memory bus core of an NES (Nintendo Entertainment
//! System) emulator.
//!
//! Implements the 64 KiB CPU address space as documented on the
//! [NESdev Wiki](https://www.nesdev.org/wiki/CPU_memory_map): 2 KiB internal
//! RAM with its mirrors, memory-mapped PPU and APU/IO registers, and
//! cartridge space behind a pluggable mapper. CPU, PPU, and APU emulation
//! live outside this crate and attach as devices; the bus only resolves
//! addresses and dispatches accesses, in issue order, on the caller's thread.
//!
//! ## Modules (NESdev references)
//!
//! - **bus** – [CPU memory map](https://www.nesdev.org/wiki/CPU_memory_map): device table, read/write dispatch
//! - **cartridge** – [Mapper](https://www.nesdev.org/wiki/Mapper) contract; NROM (0), UxROM (2/94/180); load-time registry
//! - **decode** – [Mirroring](https://www.nesdev.org/wiki/Mirroring): region classification, offset reduction
//! - **device** – read/write capability implemented by RAM, register shims, and mappers
//! - **ram** – 2 KiB internal work RAM

pub mod bus;
pub mod cartridge;
pub mod decode;
pub mod device;
pub mod ram;
