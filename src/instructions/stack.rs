//! # Stack Instructions
//!
//! Pushes and pops of A and P. Software only ever sees the status byte
//! through PHP-style pushes, which force the B and U bits set in the
//! pushed copy without touching the live register.

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// PHA: push accumulator.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    let a = cpu.a;
    cpu.push(a);
}

/// PHP: push status with B and U forced set in the pushed copy.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let pushed = (cpu.p | Status::BREAK | Status::UNUSED).bits();
    cpu.push(pushed);
}

/// PLA: pop into the accumulator, updating Z/N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pop();
    let a = cpu.a;
    cpu.p.set_zn(a);
}

/// PLP: pop into the status register.
///
/// The live register has no storage for B, so the popped B bit is
/// discarded; U is forced set.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let mut popped = Status::from_bits_retain(cpu.pop());
    popped.remove(Status::BREAK);
    popped.insert(Status::UNUSED);
    cpu.p = popped;
}
