//! Power-on/reset sequencing: preparing a `MemoryBus` and `Cpu6510` the
//! way real hardware comes up, before a program image is placed and run.

use crate::constants::{InterruptVector, POWER_ON_DIRECTION_REGISTER, POWER_ON_PORT_REGISTER};
use crate::cpu::Cpu6510;
use crate::memory::MemoryBus;

/// KERNAL cold-start vector values, matching a stock C64 KERNAL: NMI
/// enters the RS-232 NMI handler, Reset enters the KERNAL cold-start
/// routine, and IRQ/BRK enters the standard interrupt handler.
const DEFAULT_NMI_VECTOR: u16 = 0xFE43;
const DEFAULT_RESET_VECTOR: u16 = 0xFCE2;
const DEFAULT_IRQ_BRK_VECTOR: u16 = 0xFF48;

/// Zeroes RAM, writes the power-on processor port state and the default
/// KERNAL vectors, and constructs a `Cpu6510` whose PC is loaded from the
/// reset vector. A host that has loaded its own KERNAL image and relies
/// on its own reset vector should call this before `load_*_rom`, since
/// `MemoryBus::new` already starts zeroed; this function exists for
/// hosts that want the documented C64 vector table without a KERNAL
/// image banked in.
pub fn power_on(mut bus: MemoryBus) -> Cpu6510 {
    bus.write(0x0000, POWER_ON_DIRECTION_REGISTER);
    bus.write(0x0001, POWER_ON_PORT_REGISTER);

    write_vector(&mut bus, InterruptVector::NonMaskableInterrupt, DEFAULT_NMI_VECTOR);
    write_vector(&mut bus, InterruptVector::Reset, DEFAULT_RESET_VECTOR);
    write_vector(&mut bus, InterruptVector::IrqBrk, DEFAULT_IRQ_BRK_VECTOR);

    Cpu6510::new(bus)
}

fn write_vector(bus: &mut MemoryBus, vector: InterruptVector, target: u16) {
    let [lo, hi] = target.to_le_bytes();
    bus.write(vector as u16, lo);
    bus.write(vector as u16 + 1, hi);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn power_on_loads_pc_from_default_reset_vector() {
        let cpu = power_on(MemoryBus::new());
        assert_eq!(cpu.pc, DEFAULT_RESET_VECTOR);
    }

    #[test]
    fn power_on_sets_basic_and_kernal_select_lines() {
        let cpu = power_on(MemoryBus::new());
        assert_eq!(cpu.bus.read(0x0001), POWER_ON_PORT_REGISTER);
    }
}
