//! # Increment and Decrement Instructions
//!
//! Memory forms read-modify-write the effective address; register forms
//! touch X or Y directly. All six wrap mod 256 and update Z/N.

use crate::{MemoryBus, CPU};

/// INC: increment memory.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let result = cpu.read_operand().wrapping_add(1);
    cpu.memory.write(cpu.operand_address, result);
    cpu.p.set_zn(result);
}

/// DEC: decrement memory.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>) {
    let result = cpu.read_operand().wrapping_sub(1);
    cpu.memory.write(cpu.operand_address, result);
    cpu.p.set_zn(result);
}

/// INX: increment X.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    let x = cpu.x;
    cpu.p.set_zn(x);
}

/// INY: increment Y.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    let y = cpu.y;
    cpu.p.set_zn(y);
}

/// DEX: decrement X.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    let x = cpu.x;
    cpu.p.set_zn(x);
}

/// DEY: decrement Y.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    let y = cpu.y;
    cpu.p.set_zn(y);
}
