//! Execution statistics collection and reporting.
//!
//! This module tracks what a run retired:
//! 1. **Totals:** Retired instruction count.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, stack, control, trap).
//! 3. **Branches:** Taken and not-taken conditional branches.

use crate::isa::Opcode;

/// Counters updated by the control unit as instructions retire.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of instructions retired (a JMPL pair counts once).
    pub instructions_retired: u64,
    /// ALU instructions retired (`LI` through `SHR`).
    pub inst_alu: u64,
    /// `LOAD` instructions retired.
    pub inst_load: u64,
    /// `STORE` instructions retired.
    pub inst_store: u64,
    /// `PUSH` and `POP` instructions retired.
    pub inst_stack: u64,
    /// Unconditional transfers retired (`JMP`, `JMPL`, `RET`).
    pub inst_jump: u64,
    /// Conditional branches that were taken.
    pub branches_taken: u64,
    /// Conditional branches that fell through.
    pub branches_not_taken: u64,
    /// `ECALL` and `EBREAK` handoffs to the host.
    pub traps: u64,
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `op` - The opcode that retired.
    /// * `taken` - For conditional branches, whether the branch was taken.
    pub fn record(&mut self, op: Opcode, taken: bool) {
        self.instructions_retired += 1;
        match op {
            op if op.is_alu() => self.inst_alu += 1,
            op if op.is_branch() => {
                if taken {
                    self.branches_taken += 1;
                } else {
                    self.branches_not_taken += 1;
                }
            }
            Opcode::Load => self.inst_load += 1,
            Opcode::Store => self.inst_store += 1,
            Opcode::Push | Opcode::Pop => self.inst_stack += 1,
            Opcode::Jmp | Opcode::Jmpl | Opcode::Ret => self.inst_jump += 1,
            Opcode::Ecall | Opcode::Ebreak => self.traps += 1,
            _ => {}
        }
    }

    /// Logs a one-line summary at `info` level.
    pub fn print(&self) {
        tracing::info!(
            retired = self.instructions_retired,
            alu = self.inst_alu,
            load = self.inst_load,
            store = self.inst_store,
            stack = self.inst_stack,
            jump = self.inst_jump,
            taken = self.branches_taken,
            not_taken = self.branches_not_taken,
            traps = self.traps,
            "execution statistics"
        );
    }
}
