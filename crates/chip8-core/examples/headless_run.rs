//! Headless driver harness: load a built-in image, pace it at the historic
//! cadence, and print the disassembly plus an ASCII framebuffer.

use chip8_core::{
    disassemble_rom, run_steps, tick, Chip8Config, Machine, SeededRandom, DEFAULT_STEPS_PER_TICK,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};
use proptest as _;
use rand as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

/// Draws the digits 1, 2, 3 with the built-in font, starts the sound
/// timer, and spins.
const DEMO_IMAGE: &[u8] = &[
    0x60, 0x01, // V0 = 1
    0x61, 0x00, // V1 = 0
    0x62, 0x00, // V2 = 0
    0xF0, 0x29, // I = glyph for V0
    0xD1, 0x25, // draw at (V1, V2)
    0x60, 0x02, // V0 = 2
    0x61, 0x05, // V1 = 5
    0xF0, 0x29, //
    0xD1, 0x25, //
    0x60, 0x03, // V0 = 3
    0x61, 0x0A, // V1 = 10
    0xF0, 0x29, //
    0xD1, 0x25, //
    0x6E, 0x08, // VE = 8
    0xFE, 0x18, // sound = VE
    0x12, 0x1E, // spin
];

fn main() {
    let mut machine = Machine::new();
    machine
        .load_rom(DEMO_IMAGE)
        .expect("demo image fits in the program region");

    println!("disassembly:");
    for row in disassemble_rom(&machine.memory, DEMO_IMAGE.len()) {
        println!(
            "  0x{:04X}  {:04X}  {} {}",
            row.addr, row.raw_word, row.mnemonic, row.operands
        );
    }

    let mut rng = SeededRandom::from_seed(0xC8);
    let config = Chip8Config::default();
    for _ in 0..4 {
        run_steps(&mut machine, &mut rng, &config, DEFAULT_STEPS_PER_TICK);
        tick(&mut machine);
    }

    println!();
    println!("framebuffer after {} instructions:", machine.diag.instruction_count);
    for y in 0..SCREEN_HEIGHT {
        let line: String = (0..SCREEN_WIDTH)
            .map(|x| if machine.framebuffer.pixel(x, y) { '#' } else { '.' })
            .collect();
        println!("{line}");
    }

    if machine.sound_active() {
        println!();
        println!("sound timer running ({} ticks left)", machine.regs.sound());
    }
}
