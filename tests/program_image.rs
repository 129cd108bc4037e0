//! Exercises the public API end-to-end: parse a PRG-style program image,
//! place it in RAM the way a host loader would, and drive the dispatch
//! loop to a sentinel value rather than poking opcode functions directly.

use cpu_6510::boot;
use cpu_6510::rom::ProgramImage;
use cpu_6510::{MemoryBus, StepOutcome};

/// LDA #$00 ; STA $02 ; loop: INC $02 ; LDA $02 ; CMP #$05 ; BNE loop ; KIL
const COUNT_TO_FIVE: &[u8] = &[
    0x00, 0x08, // load address 0x0800, little-endian
    0xA9, 0x00, // LDA #$00
    0x85, 0x02, // STA $02
    0xE6, 0x02, // loop: INC $02
    0xA5, 0x02, // LDA $02
    0xC9, 0x05, // CMP #$05
    0xD0, 0xF8, // BNE loop
    0x02, // KIL
];

#[test]
fn counts_up_in_ram_then_halts_on_jam() {
    env_logger::init();

    let image = ProgramImage::from_bytes(COUNT_TO_FIVE).unwrap();
    assert_eq!(image.load_address, 0x0800);

    let mut cpu = boot::power_on(MemoryBus::new());
    for (offset, byte) in image.data.iter().enumerate() {
        cpu.bus.write(image.load_address + offset as u16, *byte);
    }
    cpu.pc = image.load_address;
    cpu.max_ticks = Some(100);

    cpu.run();

    assert_eq!(cpu.bus.read(0x0002), 5);
    assert_eq!(cpu.a, 5);

    match cpu.tick() {
        StepOutcome::Jammed(opcode) => assert_eq!(opcode, 0x02),
        other => panic!("expected the loop to have already halted on JAM, got {:?}", other),
    }
}
