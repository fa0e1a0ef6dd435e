//! # Shift and Rotate Instructions
//!
//! These operate on the accumulator when the addressing mode is implied
//! (the accumulator form) and on memory otherwise; `read_operand` /
//! `write_operand` hide that dispatch behind the addressing-mode tag.

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// ASL: shift left, bit 7 into carry, bit 0 cleared.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.read_operand();
    let result = value << 1;

    cpu.p.set(Status::CARRY, value & 0x80 != 0);
    cpu.p.set_zn(result);
    cpu.write_operand(result);
}

/// LSR: shift right, bit 0 into carry, bit 7 cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.read_operand();
    let result = value >> 1;

    cpu.p.set(Status::CARRY, value & 0x01 != 0);
    cpu.p.set_zn(result);
    cpu.write_operand(result);
}

/// ROL: rotate left through carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.read_operand();
    let carry_in = cpu.p.contains(Status::CARRY) as u8;
    let result = (value << 1) | carry_in;

    cpu.p.set(Status::CARRY, value & 0x80 != 0);
    cpu.p.set_zn(result);
    cpu.write_operand(result);
}

/// ROR: rotate right through carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.read_operand();
    let carry_in = cpu.p.contains(Status::CARRY) as u8;
    let result = (value >> 1) | (carry_in << 7);

    cpu.p.set(Status::CARRY, value & 0x01 != 0);
    cpu.p.set_zn(result);
    cpu.write_operand(result);
}
