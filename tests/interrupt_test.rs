//! Tests for reset/IRQ/NMI sequencing and the BRK software interrupt.

use nes6502::{FlatMemory, MemoryBus, Status, CPU};

/// Builds memory with the reset vector at `start` and the IRQ/BRK vector
/// at 0x9000.
fn setup_cpu(start: u16, program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(start, program);
    memory.write(0xFFFC, start as u8);
    memory.write(0xFFFD, (start >> 8) as u8);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);

    let mut cpu = CPU::new(memory);
    cpu.set_pc(start);
    cpu
}

#[test]
fn test_lda_then_brk_reaches_vector() {
    let mut cpu = setup_cpu(0xC000, &[0xA9, 0x42, 0x00]);

    cpu.step(); // LDA #$42
    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.status().contains(Status::ZERO));
    assert!(!cpu.status().contains(Status::NEGATIVE));

    cpu.step(); // BRK

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFA);
    assert!(cpu.status().contains(Status::INTERRUPT_DISABLE));

    // BRK at 0xC002 pushes 0xC004 (opcode address + 2), then P with B|U.
    assert_eq!(cpu.memory().read(0x01FD), 0xC0);
    assert_eq!(cpu.memory().read(0x01FC), 0x04);
    assert_eq!(
        cpu.memory().read(0x01FB),
        (Status::BREAK | Status::UNUSED).bits()
    );
}

#[test]
fn test_brk_takes_seven_cycles() {
    let mut cpu = setup_cpu(0xC000, &[0x00]);

    cpu.step();

    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn test_brk_pushed_status_keeps_prior_interrupt_state() {
    // I is set after the push, so the pushed copy carries the old I.
    let mut cpu = setup_cpu(0xC000, &[0x00]);
    cpu.set_status(Status::CARRY);

    cpu.step();

    let pushed = cpu.memory().read(0x01FB);
    assert_eq!(pushed & 0x04, 0); // I clear in the pushed copy
    assert_ne!(pushed & 0x01, 0); // C carried through
    assert_ne!(pushed & 0x30, 0x00);
    assert!(cpu.status().contains(Status::INTERRUPT_DISABLE));
}

#[test]
fn test_irq_serviced_when_enabled() {
    let mut cpu = setup_cpu(0x8000, &[0xEA]);

    cpu.irq();

    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFA);
    assert!(cpu.status().contains(Status::INTERRUPT_DISABLE));

    // Pushed status has B clear, U set.
    let pushed = cpu.memory().read(0x01FB);
    assert_eq!(pushed & 0x10, 0x00);
    assert_ne!(pushed & 0x20, 0x00);

    // The service sequence occupies 7 ticks.
    assert!(!cpu.instruction_complete());
    for _ in 0..7 {
        cpu.clock();
    }
    assert!(cpu.instruction_complete());
    assert_eq!(cpu.cycles(), 7);
}

#[test]
fn test_irq_masked_by_interrupt_disable() {
    let mut cpu = setup_cpu(0x8000, &[0xEA]);
    cpu.set_status(Status::INTERRUPT_DISABLE);

    cpu.irq();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.instruction_complete());
}

#[test]
fn test_nmi_uses_its_own_vector_and_ignores_mask() {
    let mut cpu = setup_cpu(0x8000, &[0xEA]);
    cpu.memory_mut().write(0xFFFA, 0x00);
    cpu.memory_mut().write(0xFFFB, 0xA0);
    cpu.set_status(Status::INTERRUPT_DISABLE);

    cpu.nmi();

    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.sp(), 0xFA);

    // The sequence occupies 8 ticks.
    for _ in 0..8 {
        cpu.clock();
    }
    assert!(cpu.instruction_complete());
    assert_eq!(cpu.cycles(), 8);
}

#[test]
fn test_irq_then_rti_resumes() {
    // Handler at 0x9000 is a bare RTI.
    let mut cpu = setup_cpu(0x8000, &[0xEA, 0xEA]);
    cpu.memory_mut().write(0x9000, 0x40);
    cpu.set_status(Status::CARRY);

    cpu.step(); // NOP, PC now 0x8001
    cpu.irq();
    for _ in 0..7 {
        cpu.clock();
    }
    assert_eq!(cpu.pc(), 0x9000);

    cpu.step(); // RTI

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.status().contains(Status::CARRY));
    assert!(!cpu.status().contains(Status::INTERRUPT_DISABLE));
}

#[test]
fn test_brk_then_rti_skips_padding_byte() {
    // BRK at 0x8000; the handler returns past the padding byte to 0x8002.
    let mut cpu = setup_cpu(0x8000, &[0x00, 0xFF, 0xEA]);
    cpu.memory_mut().write(0x9000, 0x40);

    cpu.step(); // BRK
    cpu.step(); // RTI

    assert_eq!(cpu.pc(), 0x8002);
    assert!(!cpu.status().contains(Status::INTERRUPT_DISABLE));
}

#[test]
fn test_interrupt_stack_wraps() {
    let mut cpu = setup_cpu(0x8000, &[0xEA]);
    cpu.set_sp(0x01);

    cpu.irq();

    // Pushes land at 0x0101, 0x0100, then wrap to 0x01FF.
    assert_eq!(cpu.sp(), 0xFE);
    assert_eq!(cpu.memory().read(0x0101), 0x80);
    assert_eq!(cpu.memory().read(0x0100), 0x00);
    assert_ne!(cpu.memory().read(0x01FF) & 0x20, 0x00);
}
