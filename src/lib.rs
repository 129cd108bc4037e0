//! A MOS 6510 CPU emulator with the banked memory layout of an early
//! 1980s home computer: BASIC, KERNAL, and Character ROM images can be
//! switched in and out of the 64 KiB address space through the
//! processor port at address 0x0001, the same mechanism the real
//! hardware used.
//!
//! Video, sound, and peripheral chips are out of scope; `memory::IoPort`
//! is the seam a host wires its own chipset into.

pub mod boot;
pub mod constants;
pub mod cpu;
pub mod disassembler;
pub mod error;
pub mod memory;
pub mod opcodes;
pub mod rom;
pub mod status;

pub use cpu::{Cpu6510, StepOutcome};
pub use memory::MemoryBus;
pub use status::StatusRegister;
