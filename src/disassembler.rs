//! Turns raw bytes back into 6510 mnemonics, independent of any running
//! CPU. Used for debugging tools and tests, not by the execution path.

use crate::opcodes::{self, Mode};
use colored::Colorize;

/// One decoded instruction: its mnemonic, an operand rendering, and the
/// total byte length (opcode included) so a caller can step to the next
/// instruction.
pub struct Disassembled {
    pub mnemonic: &'static str,
    pub operand: String,
    pub length: u8,
}

/// Decodes the instruction at `bytes[0]`, consulting `bytes[1]` and
/// `bytes[2]` only as far as the addressing mode requires. `bytes` must
/// have at least 3 entries; callers reading near the end of memory
/// should pad with zeroes.
pub fn disassemble(address: u16, bytes: [u8; 3]) -> Disassembled {
    let opcode = bytes[0] as usize;
    let mnemonic = opcodes::OPCODE_STRING_TABLE[opcode];
    let mode = opcodes::ADDRESSING_MODE_TABLE[opcode];
    let length = opcodes::mode_length(mode);

    let operand = match mode {
        Mode::Implied | Mode::None => String::new(),
        Mode::RegisterA => "A".to_string(),
        Mode::Immediate => format!("#${:02X}", bytes[1]),
        Mode::ZeroPage => format!("${:02X}", bytes[1]),
        Mode::ZeroPageX => format!("${:02X},X", bytes[1]),
        Mode::ZeroPageY => format!("${:02X},Y", bytes[1]),
        Mode::IndirectX => format!("(${:02X},X)", bytes[1]),
        Mode::IndirectY => format!("(${:02X}),Y", bytes[1]),
        Mode::Relative => {
            let offset = bytes[1] as i8;
            let target = (address.wrapping_add(2)).wrapping_add(offset as u16);
            format!("${:04X}", target)
        }
        Mode::Absolute => format!("${:02X}{:02X}", bytes[2], bytes[1]),
        Mode::AbsoluteIndexedX => format!("${:02X}{:02X},X", bytes[2], bytes[1]),
        Mode::AbsoluteIndexedY => format!("${:02X}{:02X},Y", bytes[2], bytes[1]),
        Mode::Indirect => format!("(${:02X}{:02X})", bytes[2], bytes[1]),
    };

    Disassembled {
        mnemonic,
        operand,
        length,
    }
}

/// Renders a decoded instruction the way an interactive disassembly
/// listing would: address, mnemonic in bold, operand dimmed.
pub fn format_colored(address: u16, decoded: &Disassembled) -> String {
    format!(
        "{:04X}  {}  {}",
        address,
        decoded.mnemonic.to_uppercase().bold(),
        decoded.operand.dimmed()
    )
}
