//! Fuzz target for the clock-driven execution loop.
//!
//! Builds an arbitrary CPU state and memory contents, then clocks through
//! several instructions looking for panics and broken invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes6502::{FlatMemory, Status, CPU};

/// Arbitrary architectural state for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory regions an instruction can plausibly touch.
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Instruction stream at the PC location
    instructions: [u8; 16],
    /// Zero page, for indirect pointers and zero-page operands
    zero_page: [u8; 256],
    /// Stack page, for pops and returns
    stack_page: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x8000, &input.memory.instructions);

    let mut cpu = CPU::new(memory);
    cpu.set_pc(0x8000);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(Status::from_bits_retain(input.cpu_state.status));

    // A few instructions; no opcode may panic or wedge the cycle counter.
    for _ in 0..4 {
        let before = cpu.cycles();
        cpu.step();

        assert!(cpu.cycles() > before);
        assert!(cpu.cycles() - before <= 10);
        assert!(cpu.instruction_complete());
        assert!(cpu.status().contains(Status::UNUSED));
    }
});
