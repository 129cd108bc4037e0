//! The 256-entry opcode tables the fetch/decode/execute loop is driven
//! by: cycle counts, addressing modes, mnemonics for the disassembler,
//! and the function pointers that actually perform each operation.

use crate::cpu::opcodes_illegal::*;
use crate::cpu::opcodes_jump::*;
use crate::cpu::opcodes_logical::*;
use crate::cpu::opcodes_move::*;
use crate::cpu::Cpu6510;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Absolute,
    AbsoluteIndexedX,
    AbsoluteIndexedY,
    Immediate,
    Implied,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
    RegisterA,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    /// Used only by the JAM/KIL opcode slots, which are intercepted
    /// before a table lookup ever reaches this mode.
    None,
}

/// The byte length, opcode included, that an instruction in this mode
/// occupies in memory. Used by the disassembler to know how far to
/// advance between instructions.
pub fn mode_length(mode: Mode) -> u8 {
    match mode {
        Mode::Implied | Mode::RegisterA | Mode::None => 1,
        Mode::Immediate
        | Mode::ZeroPage
        | Mode::ZeroPageX
        | Mode::ZeroPageY
        | Mode::IndirectX
        | Mode::IndirectY
        | Mode::Relative => 2,
        Mode::Absolute | Mode::AbsoluteIndexedX | Mode::AbsoluteIndexedY | Mode::Indirect => 3,
    }
}

/// True for the NMOS 6502/6510 "JAM" opcodes, which lock up the
/// processor rather than perform any operation.
pub fn is_jam(opcode: u8) -> bool {
    matches!(
        opcode,
        0x02 | 0x12 | 0x22 | 0x32 | 0x42 | 0x52 | 0x62 | 0x72 | 0x92 | 0xB2 | 0xD2 | 0xF2
    )
}

/// Never actually dispatched through; `is_jam` is checked before a table
/// lookup happens. Present so the function table can be fully populated.
fn kil(_cpu: &mut Cpu6510, _mode: Mode, _extra_cycle: u8) {
    unreachable!("JAM opcodes are intercepted before dispatch")
}

type OperationFn = fn(&mut Cpu6510, Mode, u8);

#[rustfmt::skip]
pub const CYCLES_TABLE: [u8; 256] = [
    7, 6, 0, 8, 3, 3, 5, 5, 3, 2, 2, 2, 4, 4, 6, 6, 2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7,
    4, 4, 7, 7, 6, 6, 0, 8, 3, 3, 5, 5, 4, 2, 2, 2, 4, 4, 6, 6, 2, 5, 0, 8, 4, 4, 6, 6,
    2, 4, 2, 7, 4, 4, 7, 7, 6, 6, 0, 8, 3, 3, 5, 5, 3, 2, 2, 2, 3, 4, 6, 6, 2, 5, 0, 8,
    4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, 6, 6, 0, 8, 3, 3, 5, 5, 4, 2, 2, 2, 5, 4, 6, 6,
    2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7, 2, 6, 2, 6, 3, 3, 3, 3, 2, 2, 2, 2,
    4, 4, 4, 4, 2, 6, 0, 6, 4, 4, 4, 4, 2, 5, 2, 5, 5, 5, 5, 5, 2, 6, 2, 6, 3, 3, 3, 3,
    2, 2, 2, 2, 4, 4, 4, 4, 2, 5, 0, 5, 4, 4, 4, 4, 2, 4, 2, 4, 4, 4, 4, 4, 2, 6, 2, 8,
    3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, 2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7, 4, 4, 7, 7,
    2, 6, 2, 8, 3, 3, 5, 5, 2, 2, 2, 2, 4, 4, 6, 6, 2, 5, 0, 8, 4, 4, 6, 6, 2, 4, 2, 7,
    4, 4, 7, 7,
];

// Page-boundary-crossing cycle penalties are not modeled; cycle-accurate
// timing is out of scope, so this is left as an honest all-zero table
// rather than a guessed-at one.
#[rustfmt::skip]
pub const EXTRA_CYCLES_TABLE: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0,
];

#[rustfmt::skip]
pub const ADDRESSING_MODE_TABLE: [Mode; 256] = [
    Mode::None, Mode::IndirectX, Mode::None, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::RegisterA, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::Implied, Mode::AbsoluteIndexedY, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX,
    Mode::Absolute, Mode::IndirectX, Mode::None, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::RegisterA, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::Implied, Mode::AbsoluteIndexedY, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX,
    Mode::Implied, Mode::IndirectX, Mode::None, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::RegisterA, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::Implied, Mode::AbsoluteIndexedY, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX,
    Mode::Implied, Mode::IndirectX, Mode::None, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::RegisterA, Mode::Immediate, Mode::Indirect, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::Implied, Mode::AbsoluteIndexedY, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX,
    Mode::Immediate, Mode::IndirectX, Mode::Immediate, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageY, Mode::ZeroPageY,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::Implied, Mode::AbsoluteIndexedY, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedY, Mode::AbsoluteIndexedY,
    Mode::Immediate, Mode::IndirectX, Mode::Immediate, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageY, Mode::ZeroPageY,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::Implied, Mode::AbsoluteIndexedY, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedY, Mode::AbsoluteIndexedY,
    Mode::Immediate, Mode::IndirectX, Mode::Immediate, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::Implied, Mode::AbsoluteIndexedY, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX,
    Mode::Immediate, Mode::IndirectX, Mode::Immediate, Mode::IndirectX, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage, Mode::ZeroPage,
    Mode::Implied, Mode::Immediate, Mode::Implied, Mode::Immediate, Mode::Absolute, Mode::Absolute, Mode::Absolute, Mode::Absolute,
    Mode::Relative, Mode::IndirectY, Mode::None, Mode::IndirectY, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX, Mode::ZeroPageX,
    Mode::Implied, Mode::AbsoluteIndexedY, Mode::Implied, Mode::AbsoluteIndexedY, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX, Mode::AbsoluteIndexedX,
];

#[rustfmt::skip]
pub const OPCODE_STRING_TABLE: [&str; 256] = [
    "brk", "ora", "kil", "slo", "nop", "ora", "asl", "slo", "php", "ora", "asl", "anc",
    "nop", "ora", "asl", "slo", "bpl", "ora", "kil", "slo", "nop", "ora", "asl", "slo",
    "clc", "ora", "nop", "slo", "nop", "ora", "asl", "slo", "jsr", "and", "kil", "rla",
    "bit", "and", "rol", "rla", "plp", "and", "rol", "anc", "bit", "and", "rol", "rla",
    "bmi", "and", "kil", "rla", "nop", "and", "rol", "rla", "sec", "and", "nop", "rla",
    "nop", "and", "rol", "rla", "rti", "eor", "kil", "sre", "nop", "eor", "lsr", "sre",
    "pha", "eor", "lsr", "alr", "jmp", "eor", "lsr", "sre", "bvc", "eor", "kil", "sre",
    "nop", "eor", "lsr", "sre", "cli", "eor", "nop", "sre", "nop", "eor", "lsr", "sre",
    "rts", "adc", "kil", "rra", "nop", "adc", "ror", "rra", "pla", "adc", "ror", "arr",
    "jmp", "adc", "ror", "rra", "bvs", "adc", "kil", "rra", "nop", "adc", "ror", "rra",
    "sei", "adc", "nop", "rra", "nop", "adc", "ror", "rra", "nop", "sta", "nop", "sax",
    "sty", "sta", "stx", "sax", "dey", "nop", "txa", "xaa", "sty", "sta", "stx", "sax",
    "bcc", "sta", "kil", "ahx", "sty", "sta", "stx", "sax", "tya", "sta", "txs", "tas",
    "shy", "sta", "shx", "ahx", "ldy", "lda", "ldx", "lax", "ldy", "lda", "ldx", "lax",
    "tay", "lda", "tax", "lax", "ldy", "lda", "ldx", "lax", "bcs", "lda", "kil", "lax",
    "ldy", "lda", "ldx", "lax", "clv", "lda", "tsx", "las", "ldy", "lda", "ldx", "lax",
    "cpy", "cmp", "nop", "dcp", "cpy", "cmp", "dec", "dcp", "iny", "cmp", "dex", "axs",
    "cpy", "cmp", "dec", "dcp", "bne", "cmp", "kil", "dcp", "nop", "cmp", "dec", "dcp",
    "cld", "cmp", "nop", "dcp", "nop", "cmp", "dec", "dcp", "cpx", "sbc", "nop", "isc",
    "cpx", "sbc", "inc", "isc", "inx", "sbc", "nop", "sbc", "cpx", "sbc", "inc", "isc",
    "beq", "sbc", "kil", "isc", "nop", "sbc", "inc", "isc", "sed", "sbc", "nop", "isc",
    "nop", "sbc", "inc", "isc",
];

#[rustfmt::skip]
pub const OPERATION_FN_TABLE: [OperationFn; 256] = [
    brk, ora, kil, slo, nop, ora, asl, slo, php, ora, asl, anc, nop, ora, asl, slo, bpl,
    ora, kil, slo, nop, ora, asl, slo, clc, ora, nop, slo, nop, ora, asl, slo, jsr, and,
    kil, rla, bit, and, rol, rla, plp, and, rol, anc, bit, and, rol, rla, bmi, and, kil,
    rla, nop, and, rol, rla, sec, and, nop, rla, nop, and, rol, rla, rti, eor, kil, sre,
    nop, eor, lsr, sre, pha, eor, lsr, alr, jmp, eor, lsr, sre, bvc, eor, kil, sre, nop,
    eor, lsr, sre, cli, eor, nop, sre, nop, eor, lsr, sre, rts, adc, kil, rra, nop, adc,
    ror, rra, pla, adc, ror, arr, jmp, adc, ror, rra, bvs, adc, kil, rra, nop, adc, ror,
    rra, sei, adc, nop, rra, nop, adc, ror, rra, nop, sta, nop, sax, sty, sta, stx, sax,
    dey, nop, txa, xaa, sty, sta, stx, sax, bcc, sta, kil, ahx, sty, sta, stx, sax, tya,
    sta, txs, tas, shy, sta, shx, ahx, ldy, lda, ldx, lax, ldy, lda, ldx, lax, tay, lda,
    tax, lax, ldy, lda, ldx, lax, bcs, lda, kil, lax, ldy, lda, ldx, lax, clv, lda, tsx,
    las, ldy, lda, ldx, lax, cpy, cmp, nop, dcp, cpy, cmp, dec, dcp, iny, cmp, dex, axs,
    cpy, cmp, dec, dcp, bne, cmp, kil, dcp, nop, cmp, dec, dcp, cld, cmp, nop, dcp, nop,
    cmp, dec, dcp, cpx, sbc, nop, isc, cpx, sbc, inc, isc, inx, sbc, nop, sbc, cpx, sbc,
    inc, isc, beq, sbc, kil, isc, nop, sbc, inc, isc, sed, sbc, nop, isc, nop, sbc, inc,
    isc,
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tables_agree_on_mnemonic_for_jam_slots() {
        for (opcode, mnemonic) in OPCODE_STRING_TABLE.iter().enumerate() {
            if *mnemonic == "kil" {
                assert!(is_jam(opcode as u8), "opcode {:#04x} should be JAM", opcode);
            }
        }
    }

    #[test]
    fn mode_length_matches_addressing_mode_table_for_lda_immediate() {
        // LDA #imm is opcode 0xA9.
        assert_eq!(ADDRESSING_MODE_TABLE[0xA9], Mode::Immediate);
        assert_eq!(mode_length(ADDRESSING_MODE_TABLE[0xA9]), 2);
    }
}
