//! # Branch Instructions
//!
//! All eight branches share one shape: test a flag, and when the predicate
//! holds add one cycle, move PC by the sign-extended relative offset, and
//! add a second cycle when the target lands on a different page than the
//! instruction's fall-through address.

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// Applies a taken branch: +1 cycle, +1 more on page cross, PC to target.
fn branch<M: MemoryBus>(cpu: &mut CPU<M>, taken: bool) {
    if !taken {
        return;
    }

    cpu.cycles_remaining += 1;
    let target = cpu.pc.wrapping_add(cpu.relative_offset);

    if target & 0xFF00 != cpu.pc & 0xFF00 {
        cpu.cycles_remaining += 1;
    }

    cpu.pc = target;
}

/// BCC: branch when carry clear.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = !cpu.p.contains(Status::CARRY);
    branch(cpu, taken);
}

/// BCS: branch when carry set.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = cpu.p.contains(Status::CARRY);
    branch(cpu, taken);
}

/// BEQ: branch when zero set.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = cpu.p.contains(Status::ZERO);
    branch(cpu, taken);
}

/// BNE: branch when zero clear.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = !cpu.p.contains(Status::ZERO);
    branch(cpu, taken);
}

/// BMI: branch when negative set.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = cpu.p.contains(Status::NEGATIVE);
    branch(cpu, taken);
}

/// BPL: branch when negative clear.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = !cpu.p.contains(Status::NEGATIVE);
    branch(cpu, taken);
}

/// BVC: branch when overflow clear.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = !cpu.p.contains(Status::OVERFLOW);
    branch(cpu, taken);
}

/// BVS: branch when overflow set.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>) {
    let taken = cpu.p.contains(Status::OVERFLOW);
    branch(cpu, taken);
}
