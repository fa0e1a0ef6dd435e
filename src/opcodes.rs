//! # Opcode Dispatch Table
//!
//! The 256-entry immutable table is the single source of truth for
//! instruction metadata: mnemonic, operation tag, addressing-mode tag and
//! baseline cycle count. The execution engine indexes it with the fetched
//! opcode byte; the trace formatter and disassemblers consume the same
//! entries.
//!
//! The 105 undocumented opcodes all carry the `"???"` mnemonic, implied
//! addressing and the catch-all [`Operation::Xxx`] handler, but keep the
//! baseline cycle counts of the standard reference table so cycle
//! accounting stays correct when a program strays onto them.

use crate::addressing::AddressingMode;

/// Instruction operation tag, one per official mnemonic plus the
/// illegal-opcode catch-all.
///
/// Handlers are dispatched by matching this tag; the table deliberately
/// stores no function pointers so the same entries serve decoders that
/// only want metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
    /// Undocumented opcode: consumes its baseline cycles, no other effect.
    Xxx,
}

/// Static metadata for one opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Three-letter mnemonic, `"???"` for undocumented opcodes.
    pub mnemonic: &'static str,
    /// Operation tag dispatched by the execution engine.
    pub operation: Operation,
    /// Addressing mode evaluated before the operation runs.
    pub addressing_mode: AddressingMode,
    /// Baseline cycles before taken-branch and page-cross penalties.
    pub base_cycles: u8,
}

impl Opcode {
    /// Total encoded size, opcode byte plus operand bytes (1 to 3).
    pub fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }
}

const fn op(
    mnemonic: &'static str,
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> Opcode {
    Opcode {
        mnemonic,
        operation,
        addressing_mode,
        base_cycles,
    }
}

const fn illegal(base_cycles: u8) -> Opcode {
    op("???", Operation::Xxx, AddressingMode::Implied, base_cycles)
}

use AddressingMode::*;
use Operation::*;

/// Complete 256-entry opcode table indexed by opcode byte.
pub const OPCODE_TABLE: [Opcode; 256] = [
    // 0x00 - 0x0F
    op("BRK", Brk, Implied, 7),
    op("ORA", Ora, IndirectX, 6),
    illegal(2),
    illegal(8),
    illegal(3),
    op("ORA", Ora, ZeroPage, 3),
    op("ASL", Asl, ZeroPage, 5),
    illegal(5),
    op("PHP", Php, Implied, 3),
    op("ORA", Ora, Immediate, 2),
    op("ASL", Asl, Implied, 2),
    illegal(2),
    illegal(4),
    op("ORA", Ora, Absolute, 4),
    op("ASL", Asl, Absolute, 6),
    illegal(6),
    // 0x10 - 0x1F
    op("BPL", Bpl, Relative, 2),
    op("ORA", Ora, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("ORA", Ora, ZeroPageX, 4),
    op("ASL", Asl, ZeroPageX, 6),
    illegal(6),
    op("CLC", Clc, Implied, 2),
    op("ORA", Ora, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("ORA", Ora, AbsoluteX, 4),
    op("ASL", Asl, AbsoluteX, 7),
    illegal(7),
    // 0x20 - 0x2F
    op("JSR", Jsr, Absolute, 6),
    op("AND", And, IndirectX, 6),
    illegal(2),
    illegal(8),
    op("BIT", Bit, ZeroPage, 3),
    op("AND", And, ZeroPage, 3),
    op("ROL", Rol, ZeroPage, 5),
    illegal(5),
    op("PLP", Plp, Implied, 4),
    op("AND", And, Immediate, 2),
    op("ROL", Rol, Implied, 2),
    illegal(2),
    op("BIT", Bit, Absolute, 4),
    op("AND", And, Absolute, 4),
    op("ROL", Rol, Absolute, 6),
    illegal(6),
    // 0x30 - 0x3F
    op("BMI", Bmi, Relative, 2),
    op("AND", And, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("AND", And, ZeroPageX, 4),
    op("ROL", Rol, ZeroPageX, 6),
    illegal(6),
    op("SEC", Sec, Implied, 2),
    op("AND", And, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("AND", And, AbsoluteX, 4),
    op("ROL", Rol, AbsoluteX, 7),
    illegal(7),
    // 0x40 - 0x4F
    op("RTI", Rti, Implied, 6),
    op("EOR", Eor, IndirectX, 6),
    illegal(2),
    illegal(8),
    illegal(3),
    op("EOR", Eor, ZeroPage, 3),
    op("LSR", Lsr, ZeroPage, 5),
    illegal(5),
    op("PHA", Pha, Implied, 3),
    op("EOR", Eor, Immediate, 2),
    op("LSR", Lsr, Implied, 2),
    illegal(2),
    op("JMP", Jmp, Absolute, 3),
    op("EOR", Eor, Absolute, 4),
    op("LSR", Lsr, Absolute, 6),
    illegal(6),
    // 0x50 - 0x5F
    op("BVC", Bvc, Relative, 2),
    op("EOR", Eor, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("EOR", Eor, ZeroPageX, 4),
    op("LSR", Lsr, ZeroPageX, 6),
    illegal(6),
    op("CLI", Cli, Implied, 2),
    op("EOR", Eor, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("EOR", Eor, AbsoluteX, 4),
    op("LSR", Lsr, AbsoluteX, 7),
    illegal(7),
    // 0x60 - 0x6F
    op("RTS", Rts, Implied, 6),
    op("ADC", Adc, IndirectX, 6),
    illegal(2),
    illegal(8),
    illegal(3),
    op("ADC", Adc, ZeroPage, 3),
    op("ROR", Ror, ZeroPage, 5),
    illegal(5),
    op("PLA", Pla, Implied, 4),
    op("ADC", Adc, Immediate, 2),
    op("ROR", Ror, Implied, 2),
    illegal(2),
    op("JMP", Jmp, Indirect, 5),
    op("ADC", Adc, Absolute, 4),
    op("ROR", Ror, Absolute, 6),
    illegal(6),
    // 0x70 - 0x7F
    op("BVS", Bvs, Relative, 2),
    op("ADC", Adc, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("ADC", Adc, ZeroPageX, 4),
    op("ROR", Ror, ZeroPageX, 6),
    illegal(6),
    op("SEI", Sei, Implied, 2),
    op("ADC", Adc, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("ADC", Adc, AbsoluteX, 4),
    op("ROR", Ror, AbsoluteX, 7),
    illegal(7),
    // 0x80 - 0x8F
    illegal(2),
    op("STA", Sta, IndirectX, 6),
    illegal(2),
    illegal(6),
    op("STY", Sty, ZeroPage, 3),
    op("STA", Sta, ZeroPage, 3),
    op("STX", Stx, ZeroPage, 3),
    illegal(3),
    op("DEY", Dey, Implied, 2),
    illegal(2),
    op("TXA", Txa, Implied, 2),
    illegal(2),
    op("STY", Sty, Absolute, 4),
    op("STA", Sta, Absolute, 4),
    op("STX", Stx, Absolute, 4),
    illegal(4),
    // 0x90 - 0x9F
    op("BCC", Bcc, Relative, 2),
    op("STA", Sta, IndirectY, 6),
    illegal(2),
    illegal(6),
    op("STY", Sty, ZeroPageX, 4),
    op("STA", Sta, ZeroPageX, 4),
    op("STX", Stx, ZeroPageY, 4),
    illegal(4),
    op("TYA", Tya, Implied, 2),
    op("STA", Sta, AbsoluteY, 5),
    op("TXS", Txs, Implied, 2),
    illegal(5),
    illegal(5),
    op("STA", Sta, AbsoluteX, 5),
    illegal(5),
    illegal(5),
    // 0xA0 - 0xAF
    op("LDY", Ldy, Immediate, 2),
    op("LDA", Lda, IndirectX, 6),
    op("LDX", Ldx, Immediate, 2),
    illegal(6),
    op("LDY", Ldy, ZeroPage, 3),
    op("LDA", Lda, ZeroPage, 3),
    op("LDX", Ldx, ZeroPage, 3),
    illegal(3),
    op("TAY", Tay, Implied, 2),
    op("LDA", Lda, Immediate, 2),
    op("TAX", Tax, Implied, 2),
    illegal(2),
    op("LDY", Ldy, Absolute, 4),
    op("LDA", Lda, Absolute, 4),
    op("LDX", Ldx, Absolute, 4),
    illegal(4),
    // 0xB0 - 0xBF
    op("BCS", Bcs, Relative, 2),
    op("LDA", Lda, IndirectY, 5),
    illegal(2),
    illegal(5),
    op("LDY", Ldy, ZeroPageX, 4),
    op("LDA", Lda, ZeroPageX, 4),
    op("LDX", Ldx, ZeroPageY, 4),
    illegal(4),
    op("CLV", Clv, Implied, 2),
    op("LDA", Lda, AbsoluteY, 4),
    op("TSX", Tsx, Implied, 2),
    illegal(4),
    op("LDY", Ldy, AbsoluteX, 4),
    op("LDA", Lda, AbsoluteX, 4),
    op("LDX", Ldx, AbsoluteY, 4),
    illegal(4),
    // 0xC0 - 0xCF
    op("CPY", Cpy, Immediate, 2),
    op("CMP", Cmp, IndirectX, 6),
    illegal(2),
    illegal(8),
    op("CPY", Cpy, ZeroPage, 3),
    op("CMP", Cmp, ZeroPage, 3),
    op("DEC", Dec, ZeroPage, 5),
    illegal(5),
    op("INY", Iny, Implied, 2),
    op("CMP", Cmp, Immediate, 2),
    op("DEX", Dex, Implied, 2),
    illegal(2),
    op("CPY", Cpy, Absolute, 4),
    op("CMP", Cmp, Absolute, 4),
    op("DEC", Dec, Absolute, 6),
    illegal(6),
    // 0xD0 - 0xDF
    op("BNE", Bne, Relative, 2),
    op("CMP", Cmp, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("CMP", Cmp, ZeroPageX, 4),
    op("DEC", Dec, ZeroPageX, 6),
    illegal(6),
    op("CLD", Cld, Implied, 2),
    op("CMP", Cmp, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("CMP", Cmp, AbsoluteX, 4),
    op("DEC", Dec, AbsoluteX, 7),
    illegal(7),
    // 0xE0 - 0xEF
    op("CPX", Cpx, Immediate, 2),
    op("SBC", Sbc, IndirectX, 6),
    illegal(2),
    illegal(8),
    op("CPX", Cpx, ZeroPage, 3),
    op("SBC", Sbc, ZeroPage, 3),
    op("INC", Inc, ZeroPage, 5),
    illegal(5),
    op("INX", Inx, Implied, 2),
    op("SBC", Sbc, Immediate, 2),
    op("NOP", Nop, Implied, 2),
    illegal(2),
    op("CPX", Cpx, Absolute, 4),
    op("SBC", Sbc, Absolute, 4),
    op("INC", Inc, Absolute, 6),
    illegal(6),
    // 0xF0 - 0xFF
    op("BEQ", Beq, Relative, 2),
    op("SBC", Sbc, IndirectY, 5),
    illegal(2),
    illegal(8),
    illegal(4),
    op("SBC", Sbc, ZeroPageX, 4),
    op("INC", Inc, ZeroPageX, 6),
    illegal(6),
    op("SED", Sed, Implied, 2),
    op("SBC", Sbc, AbsoluteY, 4),
    illegal(2),
    illegal(7),
    illegal(4),
    op("SBC", Sbc, AbsoluteX, 4),
    op("INC", Inc, AbsoluteX, 7),
    illegal(7),
];
