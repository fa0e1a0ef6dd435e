//! # Execution Trace Formatting
//!
//! Renders the per-instruction log line consumed by conformance harnesses:
//!
//! ```text
//! C000  4C F5 C5 JMP $C5F5                   A:00 X:00 Y:00 P:24 SP:FD CYC:7
//! ```
//!
//! The line describes the *next* instruction: PC at fetch, the 1-3 raw
//! instruction bytes (missing bytes spaced out), the disassembled mnemonic
//! and operand padded to 28 columns, then the registers and the decimal
//! cycle total. Callers emit it at an instruction boundary, before
//! clocking the instruction it describes.
//!
//! Operand rendering is driven entirely by the addressing-mode tags in
//! [`OPCODE_TABLE`]; nothing here inspects CPU internals beyond the public
//! register accessors.

use crate::addressing::AddressingMode;
use crate::opcodes::OPCODE_TABLE;
use crate::{MemoryBus, CPU};

/// Width of the mnemonic + operand field.
const DISASSEMBLY_COLUMNS: usize = 28;

/// Formats one trace line for the instruction at the current PC.
///
/// `cycles` is printed as the CYC field; it is supplied by the caller so a
/// harness can account for cycles consumed before its own counting began
/// (the canonical conformance log starts at CYC:7, charging the power-on
/// sequence).
pub fn trace_line<M: MemoryBus>(cpu: &CPU<M>, cycles: u64) -> String {
    let pc = cpu.pc();
    let opcode = cpu.memory().read(pc);
    let entry = &OPCODE_TABLE[opcode as usize];

    let b1 = cpu.memory().read(pc.wrapping_add(1));
    let b2 = cpu.memory().read(pc.wrapping_add(2));
    let size = entry.size_bytes();

    let mut line = format!("{:04X}  {:02X} ", pc, opcode);

    if size >= 2 {
        line.push_str(&format!("{:02X} ", b1));
    } else {
        line.push_str("   ");
    }
    if size >= 3 {
        line.push_str(&format!("{:02X} ", b2));
    } else {
        line.push_str("   ");
    }

    let mut field = format!("{} {}", entry.mnemonic, operand_text(entry.addressing_mode, b1, b2, pc));
    while field.len() < DISASSEMBLY_COLUMNS {
        field.push(' ');
    }
    line.push_str(&field);

    line.push_str(&format!(
        "A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
        cpu.a(),
        cpu.x(),
        cpu.y(),
        cpu.status().bits(),
        cpu.sp(),
        cycles
    ));

    line
}

/// Renders the operand field for one instruction.
///
/// `pc` is the address of the opcode byte; relative targets are resolved
/// against the instruction's fall-through address `pc + 2`.
fn operand_text(mode: AddressingMode, b1: u8, b2: u8, pc: u16) -> String {
    let word = u16::from_le_bytes([b1, b2]);

    match mode {
        AddressingMode::Implied => String::new(),
        AddressingMode::Immediate => format!("#${:02X}", b1),
        AddressingMode::ZeroPage => format!("${:02X}", b1),
        AddressingMode::ZeroPageX => format!("${:02X},X", b1),
        AddressingMode::ZeroPageY => format!("${:02X},Y", b1),
        AddressingMode::Absolute => format!("${:04X}", word),
        AddressingMode::AbsoluteX => format!("${:04X},X", word),
        AddressingMode::AbsoluteY => format!("${:04X},Y", word),
        AddressingMode::Indirect => format!("(${:04X})", word),
        AddressingMode::IndirectX => format!("(${:02X},X)", b1),
        AddressingMode::IndirectY => format!("(${:02X}),Y", b1),
        AddressingMode::Relative => {
            let target = pc.wrapping_add(2).wrapping_add(b1 as i8 as u16);
            format!("${:04X}", target)
        }
    }
}
