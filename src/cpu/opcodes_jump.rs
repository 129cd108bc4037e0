//! Branches, jumps, subroutine linkage, interrupts, and flag instructions.

use super::Cpu6510;
use crate::constants::InterruptVector;
use crate::opcodes::Mode;
use crate::status::StatusRegister;

fn branch(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8, condition: bool) {
    if condition {
        let address = cpu.get_operand_address(mode, extra_cycle);
        cpu.pc = address;
    } else {
        // Still consume the operand byte and advance the PC, but never
        // charge the page-boundary cycle for a branch that wasn't taken.
        cpu.get_operand_address(mode, 0);
    }
}

/// Branch if plus (N=0).
pub fn bpl(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    branch(cpu, mode, extra_cycle, !cpu.status.negative);
}

/// Branch if minus (N=1).
pub fn bmi(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    branch(cpu, mode, extra_cycle, cpu.status.negative);
}

/// Branch if overflow clear (V=0).
pub fn bvc(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    branch(cpu, mode, extra_cycle, !cpu.status.overflow);
}

/// Branch if overflow set (V=1).
pub fn bvs(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    branch(cpu, mode, extra_cycle, cpu.status.overflow);
}

/// Branch if carry clear (C=0).
pub fn bcc(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    branch(cpu, mode, extra_cycle, !cpu.status.carry);
}

/// Branch if carry set (C=1).
pub fn bcs(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    branch(cpu, mode, extra_cycle, cpu.status.carry);
}

/// Branch if not equal (Z=0).
pub fn bne(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    branch(cpu, mode, extra_cycle, !cpu.status.zero);
}

/// Branch if equal (Z=1).
pub fn beq(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    branch(cpu, mode, extra_cycle, cpu.status.zero);
}

/// Force break: pushes PC+2 and the status register with B=1, then loads
/// PC from the IRQ/BRK vector. An ordinary control transfer, not a halt;
/// KIL is the only opcode that stops the processor.
/// Flags: B I
pub fn brk(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push_u16(cpu.pc);
    cpu.push_u8(cpu.status.pack(true));
    cpu.status.interrupt_disable = true;
    cpu.pc = cpu.bus.read_word(InterruptVector::IrqBrk as u16);
}

/// Return from interrupt: pulls the status register then PC. B and U are
/// discarded from the pulled byte without affecting control flow; the
/// pre-existing in-memory B/U are kept, same as PLP.
/// Flags: N V D I Z C
pub fn rti(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    let byte = cpu.pull_u8();
    let break_flag = cpu.status.break_flag;
    let unused = cpu.status.unused;
    cpu.status = StatusRegister::unpack(byte);
    cpu.status.break_flag = break_flag;
    cpu.status.unused = unused;
    cpu.pc = cpu.pull_u16();
}

/// Jump to subroutine. Pushes the address of the last byte of the JSR
/// instruction (not the following instruction); RTS adds the 1 back.
pub fn jsr(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    let address = cpu.get_operand_address(mode, extra_cycle);
    cpu.push_u16(cpu.pc.wrapping_sub(1));
    cpu.pc = address;
}

/// Return from subroutine.
pub fn rts(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.pc = cpu.pull_u16().wrapping_add(1);
}

/// Jump.
pub fn jmp(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    cpu.pc = cpu.get_operand_address(mode, extra_cycle);
}

/// Bit test: ANDs A with the operand without storing the result, but N
/// and V are taken from the operand itself rather than the AND result.
/// Flags: N V Z
pub fn bit(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.status.zero = cpu.a & operand == 0;
    cpu.status.negative = operand & 0b1000_0000 != 0;
    cpu.status.overflow = operand & 0b0100_0000 != 0;
}

/// Clear carry. Flags: C
pub fn clc(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.status.carry = false;
}

/// Set carry. Flags: C
pub fn sec(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.status.carry = true;
}

/// Clear decimal mode. Flags: D
pub fn cld(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.status.decimal = false;
}

/// Set decimal mode. Flags: D
pub fn sed(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.status.decimal = true;
}

/// Clear interrupt disable. Flags: I
pub fn cli(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.status.interrupt_disable = false;
}

/// Set interrupt disable. Flags: I
pub fn sei(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.status.interrupt_disable = true;
}

/// Clear overflow. Flags: V
pub fn clv(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.status.overflow = false;
}

/// No operation; still spends the addressing mode's cycles and operand
/// bytes when given one (several undocumented opcodes reuse this table
/// slot with a non-Implied mode).
pub fn nop(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    if mode != Mode::Implied && mode != Mode::None {
        cpu.get_operand(mode, extra_cycle);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::memory::MemoryBus;

    fn cpu_with_program(program: &[u8]) -> Cpu6510 {
        let mut bus = MemoryBus::new();
        for (offset, byte) in program.iter().enumerate() {
            bus.write(0x0800 + offset as u16, *byte);
        }
        bus.write(0xFFFC, 0x00);
        bus.write(0xFFFD, 0x08);
        Cpu6510::new(bus)
    }

    #[test]
    fn jsr_then_rts_round_trips_pc() {
        // JSR $0810 ; at the subroutine: RTS
        let mut cpu = cpu_with_program(&[0x20, 0x10, 0x08]);
        cpu.bus.write(0x0810, 0x60); // RTS
        cpu.tick(); // JSR
        assert_eq!(cpu.pc, 0x0810);
        cpu.tick(); // RTS
        assert_eq!(cpu.pc, 0x0803);
    }

    #[test]
    fn jsr_pushes_return_address_minus_one() {
        let mut cpu = cpu_with_program(&[0x20, 0x10, 0x08]);
        cpu.tick();
        let lo = cpu.bus.read(0x01FF);
        let hi = cpu.bus.read(0x01FE);
        assert_eq!(u16::from_le_bytes([lo, hi]), 0x0802);
    }

    #[test]
    fn brk_loads_pc_from_irq_vector_and_sets_break_bit() {
        let mut cpu = cpu_with_program(&[0x00]); // BRK
        cpu.bus.write(0xFFFE, 0x00);
        cpu.bus.write(0xFFFF, 0x09);
        cpu.tick();
        assert_eq!(cpu.pc, 0x0900);
        assert!(cpu.status.interrupt_disable);
    }

    #[test]
    fn branch_not_taken_does_not_charge_page_cross_cycle() {
        let mut cpu = cpu_with_program(&[0xD0, 0x7F]); // BNE +127
        cpu.status.zero = true;
        cpu.tick();
        assert_eq!(cpu.cycles, 2);
    }
}
