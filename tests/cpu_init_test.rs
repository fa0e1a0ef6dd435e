//! Tests for construction and the reset sequence.

use nes6502::{FlatMemory, MemoryBus, Status, CPU};

#[test]
fn test_new_does_not_touch_memory_or_pc() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);

    let cpu = CPU::new(memory);

    // Construction leaves the CPU unprimed; reset (or the host) sets PC.
    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.cycles(), 0);
    assert!(cpu.instruction_complete());
}

#[test]
fn test_reset_loads_vector_and_clears_registers() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);

    let mut cpu = CPU::new(memory);
    cpu.set_a(0xFF);
    cpu.set_x(0xFF);
    cpu.set_y(0xFF);
    cpu.set_sp(0x00);
    cpu.set_status(Status::all());

    cpu.reset();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.status(), Status::UNUSED);
}

#[test]
fn test_reset_charges_eight_cycles() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0x8000, 0xEA); // NOP

    let mut cpu = CPU::new(memory);
    cpu.reset();

    // The reset sequence occupies the next 8 ticks; no fetch happens yet.
    for _ in 0..7 {
        cpu.clock();
        assert!(!cpu.instruction_complete());
        assert_eq!(cpu.pc(), 0x8000);
    }
    cpu.clock();
    assert!(cpu.instruction_complete());
    assert_eq!(cpu.cycles(), 8);

    // The 9th tick fetches the first instruction.
    cpu.clock();
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_reset_mid_instruction_discards_remaining_cycles() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0x8000, 0x4E); // LSR $2000 (6 cycles)
    memory.write(0x8001, 0x00);
    memory.write(0x8002, 0x20);

    let mut cpu = CPU::new(memory);
    cpu.set_pc(0x8000);
    cpu.clock();
    assert!(!cpu.instruction_complete());

    cpu.reset();
    assert_eq!(cpu.pc(), 0x8000);

    // Fresh 8-cycle charge regardless of what was in flight.
    for _ in 0..8 {
        cpu.clock();
    }
    assert!(cpu.instruction_complete());
    assert_eq!(cpu.pc(), 0x8000);
}
