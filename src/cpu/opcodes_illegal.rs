//! Undocumented opcodes.
//!
//! Only SLO, the combined ASL+ORA opcode, is implemented to match real
//! hardware; it is the one undocumented opcode that turns up in ordinary
//! KERNAL/BASIC disassembly. The rest are reported through the
//! unimplemented-opcode degradation path: PC advances by 1 (the opcode
//! byte only, operand bytes are never consumed) and no architectural
//! state is touched, per the degradation policy.

use super::Cpu6510;
use crate::opcodes::Mode;
use log::warn;

/// {adr} := {adr} << 1; A := A | {adr}
/// Flags: N Z C
pub fn slo(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    let (address, operand) = cpu.get_operand(mode, extra_cycle);
    let shifted = operand << 1;
    cpu.write_result(address, shifted);
    cpu.a |= shifted;
    cpu.update_zero_and_negative(cpu.a);
    cpu.status.carry = operand & 0b1000_0000 != 0;
}

/// Reports an opcode with no modeled execution semantics. Per the
/// degradation policy, PC is left pointing one byte past the opcode
/// (operand bytes are not consumed) and no register, flag, or memory
/// state is touched.
fn degraded(cpu: &mut Cpu6510, mnemonic: &str, _mode: Mode, _extra_cycle: u8) {
    warn!("executing unimplemented illegal opcode {}", mnemonic);
    cpu.mark_unimplemented();
}

pub fn rla(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "rla", mode, extra_cycle);
}

pub fn sre(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "sre", mode, extra_cycle);
}

pub fn rra(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "rra", mode, extra_cycle);
}

pub fn sax(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "sax", mode, extra_cycle);
}

pub fn lax(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "lax", mode, extra_cycle);
}

pub fn dcp(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "dcp", mode, extra_cycle);
}

pub fn isc(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "isc", mode, extra_cycle);
}

pub fn anc(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "anc", mode, extra_cycle);
}

pub fn alr(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "alr", mode, extra_cycle);
}

pub fn arr(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "arr", mode, extra_cycle);
}

pub fn xaa(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "xaa", mode, extra_cycle);
}

pub fn axs(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "axs", mode, extra_cycle);
}

pub fn ahx(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "ahx", mode, extra_cycle);
}

pub fn shy(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "shy", mode, extra_cycle);
}

pub fn shx(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "shx", mode, extra_cycle);
}

pub fn tas(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "tas", mode, extra_cycle);
}

pub fn las(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    degraded(cpu, "las", mode, extra_cycle);
}

#[cfg(test)]
mod test {
    use crate::cpu::Cpu6510;
    use crate::memory::MemoryBus;

    #[test]
    fn slo_shifts_memory_and_ors_into_accumulator() {
        let mut bus = MemoryBus::new();
        bus.write(0xFFFC, 0x00);
        bus.write(0xFFFD, 0x08);
        bus.write(0x0800, 0x07); // SLO $50, zero page
        bus.write(0x0801, 0x50);
        bus.write(0x0050, 0b1000_0001);
        let mut cpu = Cpu6510::new(bus);
        cpu.a = 0b0000_0010;
        cpu.tick();
        assert_eq!(cpu.bus.read(0x0050), 0b0000_0010);
        assert_eq!(cpu.a, 0b0000_0010);
        assert!(cpu.status.carry);
    }

    #[test]
    fn degraded_opcode_advances_pc_by_one_and_leaves_state_untouched() {
        use crate::cpu::StepOutcome;

        let mut bus = MemoryBus::new();
        bus.write(0xFFFC, 0x00);
        bus.write(0xFFFD, 0x08);
        bus.write(0x0800, 0x23); // RLA ($xx,X), a 2-byte illegal opcode
        bus.write(0x0801, 0x50);
        let mut cpu = Cpu6510::new(bus);
        cpu.a = 0x77;
        cpu.status.zero = true;
        cpu.status.negative = true;
        let outcome = cpu.tick();
        assert_eq!(outcome, StepOutcome::Unimplemented(0x23));
        assert_eq!(cpu.pc, 0x0801, "PC must advance by 1, not by the instruction length");
        assert_eq!(cpu.a, 0x77, "degradation must not touch the accumulator");
        assert!(cpu.status.zero, "degradation must not touch flags");
        assert!(cpu.status.negative, "degradation must not touch flags");
    }
}
