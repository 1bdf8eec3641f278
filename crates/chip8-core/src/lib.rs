//! Core CHIP-8 virtual machine.
//!
//! The crate owns the machine state and its transition rules: opcode
//! decoding, register/memory mutation, the XOR drawing algorithm, stack
//! discipline, and timer decrement. Windowing, input polling, audio, frame
//! pacing, and ROM file reading are host collaborators layered on top of
//! this API.

/// Memory model primitives, glyph font, and ROM loading.
pub mod memory;
pub use memory::{
    decode_memory_region, load_rom, new_memory, read_word_be, validate_fetch, validate_span,
    LoadError, MemoryRegion, RegionDescriptor, FIXED_MEMORY_REGIONS, FONT_END, FONT_SPRITES,
    FONT_START, GLYPH_BYTES, GLYPH_COUNT, MEMORY_BYTES, PROGRAM_END, PROGRAM_START, RESERVED_END,
    RESERVED_START, ROM_CAPACITY,
};

/// Architectural CPU state model primitives.
pub mod state;
pub use state::{CallStack, DataRegister, RegisterFile, CALL_STACK_DEPTH, DATA_REGISTER_COUNT};

/// Monochrome framebuffer model with XOR sprite drawing.
pub mod display;
pub use display::{FrameBuffer, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Sixteen-key input state model.
pub mod keypad;
pub use keypad::{Key, Keypad, KEY_COUNT};

/// Instruction decode pipeline producing a closed set of variants.
pub mod decoder;
pub use decoder::{Decoded, Decoder, Instruction, INSTRUCTION_BYTES};

/// Fault taxonomy types for invariant violations.
pub mod fault;
pub use fault::{FaultClass, FaultCode};

/// Core-owned diagnostic counters.
pub mod diag;
pub use diag::DiagCounters;

/// Public host-facing API contract and integration types.
pub mod api;
pub use api::{
    Chip8Config, FontAddressing, Machine, MachineSnapshot, RandomSource, RunOutcome, SeededRandom,
    SnapshotVersion, StepOutcome, ThreadRandom, TraceEvent, TraceSink,
};

/// Instruction execution pipeline.
pub mod execute;
pub use execute::{run_steps, step_one, step_traced};

/// Timer cadence: the fixed-rate countdown tick.
pub mod timing;
pub use timing::{tick, DEFAULT_STEPS_PER_TICK, TIMER_RATE_HZ};

/// Read-only instruction disassembly.
pub mod disasm;
pub use disasm::{disassemble_at, disassemble_rom, DisassemblyRow};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
