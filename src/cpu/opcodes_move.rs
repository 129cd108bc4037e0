//! Load, store, register-transfer, and stack-transfer instructions.

use super::Cpu6510;
use crate::opcodes::Mode;

/// Load register A.
/// Flags: N Z
pub fn lda(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.a = operand;
    cpu.update_zero_and_negative(cpu.a);
}

/// Store register A.
pub fn sta(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    let (address, _) = cpu.get_operand(mode, extra_cycle);
    cpu.write_result(address, cpu.a);
}

/// Load register X.
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.x = operand;
    cpu.update_zero_and_negative(cpu.x);
}

/// Store register X.
pub fn stx(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    let (address, _) = cpu.get_operand(mode, extra_cycle);
    cpu.write_result(address, cpu.x);
}

/// Load register Y.
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    let (_, operand) = cpu.get_operand(mode, extra_cycle);
    cpu.y = operand;
    cpu.update_zero_and_negative(cpu.y);
}

/// Store register Y.
pub fn sty(cpu: &mut Cpu6510, mode: Mode, extra_cycle: u8) {
    let (address, _) = cpu.get_operand(mode, extra_cycle);
    cpu.write_result(address, cpu.y);
}

/// Transfer A to X. Flags: N Z
pub fn tax(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative(cpu.x);
}

/// Transfer X to A. Flags: N Z
pub fn txa(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative(cpu.a);
}

/// Transfer A to Y. Flags: N Z
pub fn tay(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative(cpu.y);
}

/// Transfer Y to A. Flags: N Z
pub fn tya(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative(cpu.a);
}

/// Transfer SP to X. Flags: N Z
pub fn tsx(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.x = cpu.sp;
    cpu.update_zero_and_negative(cpu.x);
}

/// Transfer X to SP. Does not affect any flag.
pub fn txs(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.sp = cpu.x;
}

/// Pull A from the stack. Flags: N Z
pub fn pla(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.a = cpu.pull_u8();
    cpu.update_zero_and_negative(cpu.a);
}

/// Push A to the stack.
pub fn pha(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    cpu.push_u8(cpu.a);
}

/// Pull the status register from the stack. All flags except B and U are
/// replaced from the popped byte; B and U keep their pre-existing values,
/// since neither is observable outside of a pushed byte image.
/// Flags: N V D I Z C
pub fn plp(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    let byte = cpu.pull_u8();
    let break_flag = cpu.status.break_flag;
    let unused = cpu.status.unused;
    cpu.status = crate::status::StatusRegister::unpack(byte);
    cpu.status.break_flag = break_flag;
    cpu.status.unused = unused;
}

/// Push the status register to the stack with B and U forced to 1.
pub fn php(cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    let byte = cpu.status.pack(true);
    cpu.push_u8(byte);
}
