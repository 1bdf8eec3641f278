//! Public host-facing API contracts for embedding the machine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::diag::DiagCounters;
use crate::display::FrameBuffer;
use crate::fault::FaultCode;
use crate::keypad::Keypad;
use crate::memory::{self, LoadError};
use crate::state::{CallStack, RegisterFile};

/// Glyph-addressing policy for the font-lookup instruction.
///
/// The historic interpreter this core reproduces computed the glyph address
/// by reading the *byte stored at* `5 * Vx` and loading that value into the
/// index register, instead of loading the address `5 * Vx` itself. Both
/// behaviors are selectable so well-formed programs get correct font
/// rendering by default while bit-for-bit reproduction stays available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum FontAddressing {
    /// Point the index register at the glyph's first byte (`5 * Vx`).
    #[default]
    Standard,
    /// Reproduce the historic RAM-value indirection (`memory[5 * Vx]`).
    LegacyIndirect,
}

/// Top-level immutable configuration for stepping a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Chip8Config {
    /// Glyph-addressing policy for the font-lookup instruction.
    pub font_addressing: FontAddressing,
}

/// Host-provided source of random bytes for the masked-random instruction.
pub trait RandomSource {
    /// Returns the next random byte.
    fn next_byte(&mut self) -> u8;
}

/// OS-seeded random source, the default for interactive hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_byte(&mut self) -> u8 {
        rand::random()
    }
}

/// Deterministic seeded random source for replay fixtures and tests.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Creates a source whose byte stream is fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_byte(&mut self) -> u8 {
        self.0.gen()
    }
}

/// Complete machine state mutated in place by the execution engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Machine {
    /// CPU register file, program counter, and timers.
    pub regs: RegisterFile,
    /// Checked call stack of return addresses.
    pub stack: CallStack,
    /// Flat 4096-byte memory image with the glyph font preloaded.
    pub memory: Box<[u8]>,
    /// Monochrome 64x32 framebuffer.
    pub framebuffer: FrameBuffer,
    /// Held-state of the sixteen logical keys.
    pub keypad: Keypad,
    /// Core-owned diagnostic counters.
    pub diag: DiagCounters,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// Creates a machine at boot state: zeroed registers, font preloaded,
    /// program counter at the program region start.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::default(),
            stack: CallStack::default(),
            memory: memory::new_memory(),
            framebuffer: FrameBuffer::default(),
            keypad: Keypad::default(),
            diag: DiagCounters::default(),
        }
    }

    /// Copies a program image into the program region.
    ///
    /// Returns the number of bytes loaded.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::TooLarge`] when the image exceeds
    /// [`memory::ROM_CAPACITY`]; memory is left untouched.
    pub fn load_rom(&mut self, image: &[u8]) -> Result<usize, LoadError> {
        memory::load_rom(&mut self.memory, image)
    }

    /// Restores boot state while preserving the loaded memory image.
    ///
    /// Registers, stack, framebuffer, keypad, and diagnostics return to
    /// their defaults; the program counter points back at the program
    /// region start.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::default();
        self.stack = CallStack::default();
        self.framebuffer.clear();
        self.keypad.release_all();
        self.diag.reset();
    }

    /// Returns `true` while the sound timer is nonzero; the audio
    /// collaborator decides whether to emit a tone.
    #[must_use]
    pub const fn sound_active(&self) -> bool {
        self.regs.sound() > 0
    }
}

/// Output status from one execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// Instruction retired and control flow advanced.
    Retired,
    /// Key-wait instruction found no held key; the program counter did not
    /// advance and the instruction re-executes on the next step.
    WaitingForKey,
    /// Word matched no architectural encoding; reported and skipped.
    UnknownOpcode {
        /// The raw unclassifiable word.
        word: u16,
    },
    /// Invariant violation; the step mutated nothing.
    Fault {
        /// Fault raised by fetch or execution.
        cause: FaultCode,
    },
}

/// Aggregated outcome from running a bounded batch of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunOutcome {
    /// Number of retired steps during this batch (unknown-opcode no-ops
    /// included).
    pub steps: u32,
    /// Last step-level status observed before returning.
    pub final_step: StepOutcome,
}

/// Deterministic trace events emitted at step boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceEvent {
    /// Pre-execute event for instruction fetch.
    InstructionStart {
        /// Program counter used for this fetch.
        pc: u16,
        /// Raw big-endian instruction word.
        raw_word: u16,
    },
    /// Post-retire event.
    InstructionRetired {
        /// Program counter of the retired instruction.
        pc: u16,
    },
    /// Unknown-opcode diagnostic event.
    UnknownOpcode {
        /// Program counter of the unknown word.
        pc: u16,
        /// The raw unclassifiable word.
        raw_word: u16,
    },
    /// Fault emission event.
    FaultRaised {
        /// Fault raised by fetch or execution.
        cause: FaultCode,
        /// Program counter active when the fault was observed.
        pc: u16,
    },
}

/// Sink trait for deterministic trace hooks.
pub trait TraceSink {
    /// Records an event in execution order.
    fn on_event(&mut self, event: TraceEvent);
}

/// Stable snapshot wire-version identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u16)]
pub enum SnapshotVersion {
    /// Initial schema revision for chip8-core v0.1.x.
    V1 = 1,
}

impl SnapshotVersion {
    /// Converts a wire value to a known snapshot version.
    #[must_use]
    pub const fn from_u16(version: u16) -> Option<Self> {
        match version {
            1 => Some(Self::V1),
            _ => None,
        }
    }
}

/// Serializable full-state snapshot for import/export and replay fixtures.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct MachineSnapshot {
    /// Snapshot schema version.
    pub version: SnapshotVersion,
    /// Full machine state.
    pub machine: Machine,
}

impl MachineSnapshot {
    /// Captures a snapshot of the given machine.
    #[must_use]
    pub fn from_machine(version: SnapshotVersion, machine: &Machine) -> Self {
        Self {
            version,
            machine: machine.clone(),
        }
    }

    /// Consumes the snapshot, yielding the captured machine state.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_machine(self) -> Machine {
        self.machine
    }
}
