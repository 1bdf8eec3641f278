//! Read-only instruction disassembly.
//!
//! Shares the execution decode table, so the listing and the engine can
//! never disagree about what a word means. Nothing here mutates state.

use crate::decoder::{Decoded, Decoder, Instruction, INSTRUCTION_BYTES};
use crate::memory::PROGRAM_START;
use crate::state::DataRegister;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single disassembled instruction row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisassemblyRow {
    /// Address of this instruction.
    pub addr: u16,
    /// Raw big-endian instruction word.
    pub raw_word: u16,
    /// Encoded length in bytes; always 2, there is no variable-length form.
    pub len_bytes: u8,
    /// Instruction mnemonic (e.g. `LD`, `DRW`), or `.word` for unknowns.
    pub mnemonic: String,
    /// Formatted operands (e.g. `V1, #0x42`).
    pub operands: String,
    /// Whether this word matched no architectural encoding.
    pub is_unknown: bool,
}

/// Disassembles the word at `addr`, if both of its bytes are in memory.
#[must_use]
pub fn disassemble_at(memory: &[u8], addr: u16) -> Option<DisassemblyRow> {
    let hi = *memory.get(usize::from(addr))?;
    let lo = *memory.get(usize::from(addr).checked_add(1)?)?;
    let raw_word = u16::from_be_bytes([hi, lo]);

    let row = match Decoder::decode(raw_word) {
        Decoded::Unknown(word) => DisassemblyRow {
            addr,
            raw_word: word,
            len_bytes: 2,
            mnemonic: ".word".to_string(),
            operands: format!("0x{word:04X} ; UNKNOWN"),
            is_unknown: true,
        },
        Decoded::Instruction(instruction) => {
            let (mnemonic, operands) = format_instruction(instruction);
            DisassemblyRow {
                addr,
                raw_word,
                len_bytes: 2,
                mnemonic,
                operands,
                is_unknown: false,
            }
        }
    };

    Some(row)
}

/// Statically walks a loaded program from the program region start.
///
/// Produces one row per instruction word over the first `rom_len` loaded
/// bytes without executing anything; a trailing odd byte is not listed.
#[must_use]
pub fn disassemble_rom(memory: &[u8], rom_len: usize) -> Vec<DisassemblyRow> {
    let mut rows = Vec::with_capacity(rom_len / usize::from(INSTRUCTION_BYTES));
    let mut addr = PROGRAM_START;
    let end = usize::from(PROGRAM_START) + rom_len;

    while usize::from(addr) + usize::from(INSTRUCTION_BYTES) <= end {
        match disassemble_at(memory, addr) {
            Some(row) => rows.push(row),
            None => break,
        }
        addr = addr.wrapping_add(INSTRUCTION_BYTES);
    }

    rows
}

fn format_register(reg: DataRegister) -> String {
    format!("V{:X}", reg.index())
}

#[allow(clippy::too_many_lines)]
fn format_instruction(instruction: Instruction) -> (String, String) {
    let (mnemonic, operands) = match instruction {
        Instruction::ClearScreen => ("CLS", String::new()),
        Instruction::Return => ("RET", String::new()),
        Instruction::Sys { addr } => ("SYS", format!("0x{addr:04X}")),
        Instruction::Jump { addr } => ("JP", format!("0x{addr:04X}")),
        Instruction::Call { addr } => ("CALL", format!("0x{addr:04X}")),
        Instruction::SkipIfEqual { x, value } => {
            ("SE", format!("{}, #0x{value:02X}", format_register(x)))
        }
        Instruction::SkipIfNotEqual { x, value } => {
            ("SNE", format!("{}, #0x{value:02X}", format_register(x)))
        }
        Instruction::SkipIfRegistersEqual { x, y } => {
            ("SE", format!("{}, {}", format_register(x), format_register(y)))
        }
        Instruction::LoadValue { x, value } => {
            ("LD", format!("{}, #0x{value:02X}", format_register(x)))
        }
        Instruction::AddValue { x, value } => {
            ("ADD", format!("{}, #0x{value:02X}", format_register(x)))
        }
        Instruction::Copy { x, y } => {
            ("LD", format!("{}, {}", format_register(x), format_register(y)))
        }
        Instruction::Or { x, y } => {
            ("OR", format!("{}, {}", format_register(x), format_register(y)))
        }
        Instruction::And { x, y } => {
            ("AND", format!("{}, {}", format_register(x), format_register(y)))
        }
        Instruction::Xor { x, y } => {
            ("XOR", format!("{}, {}", format_register(x), format_register(y)))
        }
        Instruction::Add { x, y } => {
            ("ADD", format!("{}, {}", format_register(x), format_register(y)))
        }
        Instruction::Sub { x, y } => {
            ("SUB", format!("{}, {}", format_register(x), format_register(y)))
        }
        Instruction::ShiftRight { x } => ("SHR", format_register(x)),
        Instruction::SubReversed { x, y } => (
            "SUBN",
            format!("{}, {}", format_register(x), format_register(y)),
        ),
        Instruction::ShiftLeft { x } => ("SHL", format_register(x)),
        Instruction::SkipIfRegistersNotEqual { x, y } => (
            "SNE",
            format!("{}, {}", format_register(x), format_register(y)),
        ),
        Instruction::LoadIndex { addr } => ("LD", format!("I, 0x{addr:04X}")),
        Instruction::JumpWithOffset { addr } => ("JP", format!("V0, 0x{addr:04X}")),
        Instruction::Random { x, mask } => {
            ("RND", format!("{}, #0x{mask:02X}", format_register(x)))
        }
        Instruction::Draw { x, y, rows } => (
            "DRW",
            format!(
                "{}, {}, {rows:X}",
                format_register(x),
                format_register(y)
            ),
        ),
        Instruction::SkipIfKeyHeld { x } => ("SKP", format_register(x)),
        Instruction::SkipIfKeyNotHeld { x } => ("SKNP", format_register(x)),
        Instruction::ReadDelay { x } => ("LD", format!("{}, DT", format_register(x))),
        Instruction::WaitForKey { x } => ("LD", format!("{}, K", format_register(x))),
        Instruction::SetDelay { x } => ("LD", format!("DT, {}", format_register(x))),
        Instruction::SetSound { x } => ("LD", format!("ST, {}", format_register(x))),
        Instruction::AddToIndex { x } => ("ADD", format!("I, {}", format_register(x))),
        Instruction::LoadGlyphAddress { x } => ("LD", format!("F, {}", format_register(x))),
        Instruction::StoreDigits { x } => ("LD", format!("B, {}", format_register(x))),
        Instruction::StoreRegisters { x } => ("LD", format!("[I], {}", format_register(x))),
        Instruction::LoadRegisters { x } => ("LD", format!("{}, [I]", format_register(x))),
    };

    (mnemonic.to_string(), operands)
}
