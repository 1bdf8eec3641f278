//! Boot, ROM loading, and reset semantics integration coverage.

use chip8_core::{
    step_one, tick, Chip8Config, DataRegister, Machine, SeededRandom, StepOutcome, FONT_SPRITES,
    PROGRAM_START, ROM_CAPACITY,
};
use proptest as _;
use rand as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

#[test]
fn boot_state_has_font_zeroed_registers_and_program_entry() {
    let machine = Machine::new();

    assert_eq!(machine.regs.pc(), PROGRAM_START);
    assert_eq!(&machine.memory[..FONT_SPRITES.len()], &FONT_SPRITES);
    assert!(machine.memory[FONT_SPRITES.len()..].iter().all(|b| *b == 0));
    for reg in DataRegister::ALL {
        assert_eq!(machine.regs.v(reg), 0);
    }
    assert!(machine.stack.is_empty());
    assert!(machine.framebuffer.pixels().iter().all(|px| !px));
    assert_eq!(machine.keypad.first_held(), None);
}

#[test]
fn rom_images_load_at_the_program_region_start() {
    let mut machine = Machine::new();
    let image = [0x00, 0xE0, 0x12, 0x00];

    assert_eq!(machine.load_rom(&image), Ok(4));
    assert_eq!(&machine.memory[0x200..0x204], &image);
}

#[test]
fn exact_capacity_image_loads_and_one_more_byte_is_rejected() {
    let mut machine = Machine::new();
    assert_eq!(machine.load_rom(&[0x42; ROM_CAPACITY]), Ok(ROM_CAPACITY));
    assert_eq!(machine.memory[4095], 0x42);

    let mut fresh = Machine::new();
    assert!(fresh.load_rom(&[0x42; ROM_CAPACITY + 1]).is_err());
    assert!(
        fresh.memory[0x200..].iter().all(|b| *b == 0),
        "rejected load must not partially mutate memory"
    );
}

#[test]
fn reset_preserves_the_loaded_image_and_restarts_execution() {
    let mut machine = Machine::new();
    machine
        .load_rom(&[0x60, 0x05, 0x61, 0x03, 0x80, 0x14])
        .expect("image fits");

    let mut rng = SeededRandom::from_seed(7);
    let config = Chip8Config::default();
    for _ in 0..3 {
        step_one(&mut machine, &mut rng, &config);
    }
    assert_eq!(machine.regs.v(DataRegister::V0), 8);

    machine.reset();
    assert_eq!(machine.regs.pc(), PROGRAM_START);
    assert_eq!(machine.regs.v(DataRegister::V0), 0);

    for _ in 0..3 {
        assert_eq!(step_one(&mut machine, &mut rng, &config), StepOutcome::Retired);
    }
    assert_eq!(machine.regs.v(DataRegister::V0), 8, "program reruns cleanly");
}

#[test]
fn end_to_end_program_leaves_the_documented_state() {
    let mut machine = Machine::new();
    machine
        .load_rom(&[0x60, 0x05, 0x61, 0x03, 0x80, 0x14])
        .expect("image fits");

    let mut rng = SeededRandom::from_seed(0);
    for _ in 0..3 {
        assert_eq!(
            step_one(&mut machine, &mut rng, &Chip8Config::default()),
            StepOutcome::Retired
        );
    }

    assert_eq!(machine.regs.v(DataRegister::V0), 8);
    assert_eq!(machine.regs.v(DataRegister::VF), 0);
    assert_eq!(machine.regs.pc(), 0x206);
}

#[test]
fn ticking_a_fresh_machine_is_harmless() {
    let mut machine = Machine::new();
    let before = machine.clone();

    tick(&mut machine);
    assert_eq!(machine, before, "zero timers stay at zero");
}
