//! # Arithmetic and Logic Instructions
//!
//! Additions and subtractions widen to 16 bits for carry detection; the
//! decimal flag is stored but never consulted (NES-variant core).

use crate::status::Status;
use crate::{MemoryBus, CPU};

/// ADC: A + M + C, binary only.
///
/// C is the carry out of bit 7; V is set when both operands share a sign
/// and the result does not.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.read_operand();
    let carry = cpu.p.contains(Status::CARRY) as u16;
    let sum = cpu.a as u16 + value as u16 + carry;
    let result = sum as u8;

    cpu.p.set(Status::CARRY, sum > 0xFF);
    cpu.p
        .set(Status::OVERFLOW, (!(cpu.a ^ value) & (cpu.a ^ result)) & 0x80 != 0);
    cpu.p.set_zn(result);
    cpu.a = result;
}

/// SBC: A - M - (1 - C), implemented as ADC of the one's complement.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.read_operand() ^ 0xFF;
    let carry = cpu.p.contains(Status::CARRY) as u16;
    let sum = cpu.a as u16 + value as u16 + carry;
    let result = sum as u8;

    cpu.p.set(Status::CARRY, sum > 0xFF);
    cpu.p
        .set(Status::OVERFLOW, (!(cpu.a ^ value) & (cpu.a ^ result)) & 0x80 != 0);
    cpu.p.set_zn(result);
    cpu.a = result;
}

/// AND: bitwise A & M.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.read_operand();
    cpu.a &= value;
    let a = cpu.a;
    cpu.p.set_zn(a);
}

/// ORA: bitwise A | M.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.read_operand();
    cpu.a |= value;
    let a = cpu.a;
    cpu.p.set_zn(a);
}

/// EOR: bitwise A ^ M.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.read_operand();
    cpu.a ^= value;
    let a = cpu.a;
    cpu.p.set_zn(a);
}

/// Shared comparison: C when register >= M, Z/N from the 8-bit difference.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8) {
    let value = cpu.read_operand();
    let diff = register.wrapping_sub(value);

    cpu.p.set(Status::CARRY, register >= value);
    cpu.p.set_zn(diff);
}

/// CMP: compare accumulator.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let register = cpu.a;
    compare(cpu, register);
}

/// CPX: compare X register.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>) {
    let register = cpu.x;
    compare(cpu, register);
}

/// CPY: compare Y register.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>) {
    let register = cpu.y;
    compare(cpu, register);
}

/// BIT: Z from A & M, N and V copied from bits 7 and 6 of M.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.read_operand();

    cpu.p.set(Status::ZERO, cpu.a & value == 0);
    cpu.p.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.p.set(Status::OVERFLOW, value & 0x40 != 0);
}
