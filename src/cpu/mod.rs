//! The MOS 6510 core: registers, addressing-mode resolution, the stack,
//! and the fetch/decode/execute loop.

use crate::constants::InterruptVector;
use crate::memory::MemoryBus;
use crate::opcodes::{self, Mode};
use crate::status::StatusRegister;
use log::trace;

pub mod opcodes_illegal;
pub mod opcodes_jump;
pub mod opcodes_logical;
pub mod opcodes_move;

#[cfg(test)]
mod test;

const STACK_PAGE: u16 = 0x0100;

/// This struct implements the MOS Technology 6510 central processing unit,
/// the 6502-derived part at the heart of the Commodore 64, extended with
/// the processor port used to bank RAM, ROM, and I/O over the same
/// address space.
///
/// http://www.6502.org/
/// https://en.wikipedia.org/wiki/MOS_Technology_6510
pub struct Cpu6510 {
    pub bus: MemoryBus,
    /// "A" register, the accumulator.
    pub a: u8,
    /// "X" index register.
    pub x: u8,
    /// "Y" index register.
    pub y: u8,
    /// "PC" program counter.
    pub pc: u16,
    /// "SP" stack pointer. The 6510 stack is a descending 256-byte array
    /// hardcoded to page 0x0100.
    pub sp: u8,
    /// "P" status register.
    pub status: StatusRegister,
    /// Cycles consumed by the instruction most recently executed.
    pub cycles: u8,
    pub tick_count: u64,
    /// Stop running after this many ticks. Useful for tests and fuzzing.
    pub max_ticks: Option<u64>,
    /// Set by the illegal-opcode degradation path during the operation
    /// call inside `tick()`, and read back immediately after. Not part of
    /// the CPU's architectural state.
    degraded: bool,
}

/// What happened during one `Cpu6510::tick()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The fetched opcode ran to completion.
    Continued,
    /// The fetched opcode has no implemented execution semantics and was
    /// handled by the degradation path instead (see `opcodes_illegal`).
    Unimplemented(u8),
    /// The fetched opcode was a JAM/KIL opcode; the processor is halted
    /// and PC has been backed up to point at it.
    Jammed(u8),
}

impl Cpu6510 {
    pub fn new(bus: MemoryBus) -> Cpu6510 {
        let mut cpu = Cpu6510 {
            bus,
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: 0xFF,
            status: StatusRegister::power_on(),
            cycles: 0,
            tick_count: 0,
            max_ticks: None,
            degraded: false,
        };
        cpu.reset();
        cpu
    }

    /// Reloads PC from the reset vector and restores the power-on register
    /// state, without touching RAM contents.
    pub fn reset(&mut self) {
        self.sp = 0xFF;
        self.status = StatusRegister::power_on();
        self.pc = self.bus.read_word(InterruptVector::Reset as u16);
    }

    fn peek_u8(&self) -> u8 {
        self.bus.read(self.pc)
    }

    fn next_u8(&mut self) -> u8 {
        let value = self.bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn next_u16(&mut self) -> u16 {
        let value = self.bus.read_word(self.pc);
        self.pc = self.pc.wrapping_add(2);
        value
    }

    fn carry_u8(&self) -> u8 {
        self.status.carry as u8
    }

    /// Resolves the effective address for every mode except `RegisterA`
    /// and `None`, which have no address and are handled by the caller.
    fn get_operand_address(&mut self, mode: Mode, page_boundary_cycle: u8) -> u16 {
        match mode {
            Mode::Absolute => self.next_u16(),
            Mode::AbsoluteIndexedX => {
                let base_address = self.next_u16();
                let offset_address = base_address.wrapping_add(self.x as u16);
                self.incur_extra_cycle_on_page_boundary(
                    base_address,
                    offset_address,
                    page_boundary_cycle,
                );
                offset_address
            }
            Mode::AbsoluteIndexedY => {
                let base_address = self.next_u16();
                let offset_address = base_address.wrapping_add(self.y as u16);
                self.incur_extra_cycle_on_page_boundary(
                    base_address,
                    offset_address,
                    page_boundary_cycle,
                );
                offset_address
            }
            Mode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                address
            }
            Mode::Implied | Mode::RegisterA | Mode::None => {
                panic!("{:?} has no effective address", mode)
            }
            // The indirect-JMP page-wrap bug: when the pointer's low byte
            // is 0xFF, the high byte is read from the start of the same
            // page instead of rolling into the next one.
            Mode::Indirect => {
                let pointer = self.next_u16();
                self.bus.read_word_page_wrapped(pointer)
            }
            Mode::IndirectX => {
                let zero_page_address = self.next_u8().wrapping_add(self.x);
                self.bus.read_zero_page_word(zero_page_address)
            }
            Mode::IndirectY => {
                let zero_page_address = self.next_u8();
                let base_address = self.bus.read_zero_page_word(zero_page_address);
                let offset_address = base_address.wrapping_add(self.y as u16);
                self.incur_extra_cycle_on_page_boundary(
                    base_address,
                    offset_address,
                    page_boundary_cycle,
                );
                offset_address
            }
            Mode::Relative => {
                let relative_offset = self.next_u8() as i8;
                let base_address = self.pc;
                let offset_address = base_address.wrapping_add(relative_offset as u16);
                self.incur_extra_cycle_on_page_boundary(
                    base_address,
                    offset_address,
                    page_boundary_cycle,
                );
                offset_address
            }
            Mode::ZeroPage => self.next_u8() as u16,
            // 6502 zero-page bug: indexing never leaves the zero page,
            // the index wraps rather than carrying into the high byte.
            Mode::ZeroPageX => self.next_u8().wrapping_add(self.x) as u16,
            Mode::ZeroPageY => self.next_u8().wrapping_add(self.y) as u16,
        }
    }

    /// Returns the effective address (when the mode has one) and the
    /// operand byte at that address, or the accumulator for `RegisterA`.
    fn get_operand(&mut self, mode: Mode, extra_cycle: u8) -> (Option<u16>, u8) {
        match mode {
            Mode::RegisterA => (None, self.a),
            Mode::Implied | Mode::None => (None, 0),
            _ => {
                let address = self.get_operand_address(mode, extra_cycle);
                (Some(address), self.bus.read(address))
            }
        }
    }

    fn write_result(&mut self, address: Option<u16>, value: u8) {
        match address {
            Some(address) => self.bus.write(address, value),
            None => self.a = value,
        }
    }

    fn incur_extra_cycle_on_page_boundary(
        &mut self,
        base_address: u16,
        offset_address: u16,
        extra_cycles: u8,
    ) {
        if base_address & 0xFF00 != offset_address & 0xFF00 {
            self.cycles += extra_cycles;
        }
    }

    fn push_u8(&mut self, value: u8) {
        let address = STACK_PAGE | self.sp as u16;
        self.bus.write(address, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    fn pull_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let address = STACK_PAGE | self.sp as u16;
        self.bus.read(address)
    }

    fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push_u8(hi);
        self.push_u8(lo);
    }

    fn pull_u16(&mut self) -> u16 {
        let lo = self.pull_u8();
        let hi = self.pull_u8();
        u16::from_le_bytes([lo, hi])
    }

    /// Runs one fetch/decode/execute cycle. Returns a `StepOutcome`
    /// reporting whether the opcode ran normally, fell through the
    /// illegal-opcode degradation path, or was a JAM opcode that halts
    /// the processor.
    pub fn tick(&mut self) -> StepOutcome {
        self.tick_count += 1;
        self.cycles = 0;
        self.degraded = false;
        let opcode = self.next_u8();

        if opcodes::is_jam(opcode) {
            trace!("halted on jam opcode {:#04x}", opcode);
            self.pc = self.pc.wrapping_sub(1);
            return StepOutcome::Jammed(opcode);
        }

        let index = opcode as usize;
        self.cycles += opcodes::CYCLES_TABLE[index];
        let mode = opcodes::ADDRESSING_MODE_TABLE[index];
        let extra_cycle = opcodes::EXTRA_CYCLES_TABLE[index];
        let operation = opcodes::OPERATION_FN_TABLE[index];
        operation(self, mode, extra_cycle);

        if self.degraded {
            StepOutcome::Unimplemented(opcode)
        } else {
            StepOutcome::Continued
        }
    }

    /// Runs until a JAM opcode is hit, or `max_ticks` is exceeded.
    /// Unimplemented opcodes are logged and do not stop the loop.
    pub fn run(&mut self) {
        loop {
            if let StepOutcome::Jammed(_) = self.tick() {
                break;
            }
            if let Some(max_ticks) = self.max_ticks {
                if self.tick_count > max_ticks {
                    break;
                }
            }
        }
    }

    /// Runs while `predicate` returns false. Handy for tests that want to
    /// stop at a specific PC or register state. Stops early on JAM.
    pub fn run_until<F>(&mut self, predicate: F)
    where
        F: Fn(&Cpu6510) -> bool,
    {
        while !predicate(self) {
            if let StepOutcome::Jammed(_) = self.tick() {
                break;
            }
        }
    }

    fn update_zero_and_negative(&mut self, value: u8) {
        self.status.update_zero_and_negative(value);
    }

    /// Called by the illegal-opcode degradation path to report that the
    /// opcode just dispatched has no real execution semantics.
    pub(crate) fn mark_unimplemented(&mut self) {
        self.degraded = true;
    }
}
