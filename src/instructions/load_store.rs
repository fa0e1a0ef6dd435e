//! # Load and Store Instructions
//!
//! Loads update Z/N from the loaded value; stores write a register to the
//! effective address and leave the flags untouched.

use crate::{MemoryBus, CPU};

/// LDA: load accumulator.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.read_operand();
    let a = cpu.a;
    cpu.p.set_zn(a);
}

/// LDX: load X register.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.read_operand();
    let x = cpu.x;
    cpu.p.set_zn(x);
}

/// LDY: load Y register.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.read_operand();
    let y = cpu.y;
    cpu.p.set_zn(y);
}

/// STA: store accumulator.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.memory.write(cpu.operand_address, cpu.a);
}

/// STX: store X register.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.memory.write(cpu.operand_address, cpu.x);
}

/// STY: store Y register.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.memory.write(cpu.operand_address, cpu.y);
}
