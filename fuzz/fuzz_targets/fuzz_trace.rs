//! Fuzz target for the trace formatter: every opcode byte and register
//! state must render without panicking, with the register block at a
//! stable position.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes6502::{trace_line, FlatMemory, MemoryBus, Status, CPU};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    pc: u16,
    instruction: [u8; 3],
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    cycles: u64,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    // Write byte-wise so a PC near 0xFFFF wraps instead of slicing out.
    for (i, &byte) in input.instruction.iter().enumerate() {
        memory.write(input.pc.wrapping_add(i as u16), byte);
    }

    let mut cpu = CPU::new(memory);
    cpu.set_pc(input.pc);
    cpu.set_a(input.a);
    cpu.set_x(input.x);
    cpu.set_y(input.y);
    cpu.set_sp(input.sp);
    cpu.set_status(Status::from_bits_retain(input.status));

    let line = trace_line(&cpu, input.cycles);

    // Fixed-position columns: PC, byte field, disassembly, registers.
    assert_eq!(&line[0..4], format!("{:04X}", input.pc).as_str());
    assert_eq!(line.find("A:"), Some(43));
    assert!(line.contains("CYC:"));
});
