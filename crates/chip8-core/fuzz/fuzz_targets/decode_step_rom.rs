#![no_main]

use chip8_core::{
    decode_memory_region, step_one, validate_fetch, validate_span, Chip8Config, Decoder, Machine,
    RandomSource,
};
use libfuzzer_sys::fuzz_target;

struct StaticRandom;

impl RandomSource for StaticRandom {
    fn next_byte(&mut self) -> u8 {
        0xA5
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let word = u16::from_be_bytes([data[0], data[1]]);
    let addr = u16::from_be_bytes([data[2], data[3]]);

    let _ = Decoder::decode(word);
    let _ = validate_fetch(addr);
    let _ = validate_span(addr, usize::from(data[2]));
    let _ = decode_memory_region(addr);

    let mut machine = Machine::new();
    if machine.load_rom(&data[4..data.len().min(512)]).is_err() {
        return;
    }

    let mut rng = StaticRandom;
    let config = Chip8Config::default();
    for _ in 0..64 {
        let _ = step_one(&mut machine, &mut rng, &config);
    }
});
