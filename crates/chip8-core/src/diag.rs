//! Core-owned diagnostic counters.

use crate::fault::{FaultClass, FaultCode};

/// Saturating diagnostic counters maintained by the execution engine.
///
/// These are observability data only: nothing architectural reads them, and
/// resetting them never changes machine behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DiagCounters {
    /// Saturating counter for retired instructions.
    pub instruction_count: u64,
    /// Saturating counter for unknown-opcode no-ops.
    pub unknown_opcode_count: u64,
    /// Saturating counter for memory-class faults.
    pub fault_count_memory: u64,
    /// Saturating counter for stack-class faults.
    pub fault_count_stack: u64,
    /// Program counter and raw word of the most recent unknown opcode.
    pub last_unknown: Option<(u16, u16)>,
    /// Most recent fault and the program counter it was raised at.
    pub last_fault: Option<(FaultCode, u16)>,
}

impl DiagCounters {
    /// Creates a zeroed set of counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one retired instruction.
    pub const fn record_retired(&mut self) {
        self.instruction_count = self.instruction_count.saturating_add(1);
    }

    /// Records an unknown-opcode no-op at `pc`.
    pub const fn record_unknown(&mut self, pc: u16, word: u16) {
        self.unknown_opcode_count = self.unknown_opcode_count.saturating_add(1);
        self.last_unknown = Some((pc, word));
    }

    /// Records a fault raised at `pc`, bumping its class counter.
    pub const fn record_fault(&mut self, cause: FaultCode, pc: u16) {
        self.last_fault = Some((cause, pc));
        match cause.class() {
            FaultClass::Memory => {
                self.fault_count_memory = self.fault_count_memory.saturating_add(1);
            }
            FaultClass::Stack => {
                self.fault_count_stack = self.fault_count_stack.saturating_add(1);
            }
        }
    }

    /// Resets every counter to its default value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::DiagCounters;
    use crate::fault::FaultCode;

    #[test]
    fn counters_default_to_zero() {
        let diag = DiagCounters::new();
        assert_eq!(diag.instruction_count, 0);
        assert_eq!(diag.unknown_opcode_count, 0);
        assert_eq!(diag.last_unknown, None);
        assert_eq!(diag.last_fault, None);
    }

    #[test]
    fn unknown_opcodes_update_count_and_last_seen() {
        let mut diag = DiagCounters::new();
        diag.record_unknown(0x0200, 0xFFFF);
        diag.record_unknown(0x0204, 0x5003);

        assert_eq!(diag.unknown_opcode_count, 2);
        assert_eq!(diag.last_unknown, Some((0x0204, 0x5003)));
    }

    #[test]
    fn faults_increment_their_class_counter() {
        let mut diag = DiagCounters::new();
        diag.record_fault(FaultCode::MemoryOutOfRange, 0x0200);
        diag.record_fault(FaultCode::StackUnderflow, 0x0202);
        diag.record_fault(FaultCode::FetchOutOfRange, 0x0204);

        assert_eq!(diag.fault_count_memory, 2);
        assert_eq!(diag.fault_count_stack, 1);
        assert_eq!(diag.last_fault, Some((FaultCode::FetchOutOfRange, 0x0204)));
    }

    #[test]
    fn reset_returns_counters_to_defaults() {
        let mut diag = DiagCounters::new();
        diag.record_retired();
        diag.record_unknown(0x0200, 0xFFFF);
        diag.reset();

        assert_eq!(diag, DiagCounters::default());
    }
}
