//! # CPU State and Execution
//!
//! The CPU owns the architectural register file and is driven one master
//! clock tick at a time through [`CPU::clock`]. A tick either consumes one
//! cycle of the in-flight instruction or, at an instruction boundary,
//! fetches and dispatches the next opcode, charging its baseline cycle
//! count plus any taken-branch or page-cross penalty.
//!
//! The host constructs the CPU around a [`MemoryBus`], primes it with
//! [`CPU::reset`] (or by setting PC/SP/P directly, as conformance harnesses
//! do), and then clocks it. Register state is only meaningful to observers
//! between instructions, i.e. when [`CPU::instruction_complete`] is true.

use crate::addressing::{self, AddressingMode};
use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::opcodes::{Operation, OPCODE_TABLE};
use crate::status::Status;
use crate::MemoryBus;

/// NMI handler vector.
pub const NMI_VECTOR: u16 = 0xFFFA;
/// Power-on / reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ and BRK handler vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base of the fixed stack page; the effective stack address is
/// `0x0100 | SP`.
const STACK_BASE: u16 = 0x0100;

/// 6502 CPU core, generic over the memory bus implementation.
///
/// # Examples
///
/// ```
/// use nes6502::{FlatMemory, MemoryBus, CPU};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // reset vector -> 0x8000
/// memory.write(0xFFFD, 0x80);
/// memory.write(0x8000, 0xA9); // LDA #$42
/// memory.write(0x8001, 0x42);
///
/// let mut cpu = CPU::new(memory);
/// cpu.reset();
/// assert_eq!(cpu.pc(), 0x8000);
///
/// // The reset sequence consumes 8 cycles before the first fetch.
/// while !cpu.instruction_complete() {
///     cpu.clock();
/// }
/// cpu.step();
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator
    pub(crate) a: u8,
    /// X index register
    pub(crate) x: u8,
    /// Y index register
    pub(crate) y: u8,
    /// Stack pointer into page 1
    pub(crate) sp: u8,
    /// Program counter
    pub(crate) pc: u16,
    /// Packed status register
    pub(crate) p: Status,

    /// Opcode byte of the instruction in flight
    pub(crate) opcode: u8,
    /// Addressing mode of the instruction in flight
    pub(crate) mode: AddressingMode,
    /// Effective operand address computed by the addressing mode
    pub(crate) operand_address: u16,
    /// Accumulator snapshot for implied/accumulator operands
    pub(crate) operand_byte: u8,
    /// Sign-extended branch offset from relative addressing
    pub(crate) relative_offset: u16,
    /// Unconsumed cycles of the instruction in flight
    pub(crate) cycles_remaining: u8,

    /// Total master-clock ticks since construction
    pub(crate) cycles: u64,

    /// Memory bus
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU attached to `memory`.
    ///
    /// No reset is performed: PC is zero and no cycles are charged, so a
    /// host may either call [`reset`](CPU::reset) or prime PC/SP/P itself.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: 0xFD,
            pc: 0x0000,
            p: Status::reset_value(),
            opcode: 0x00,
            mode: AddressingMode::Implied,
            operand_address: 0x0000,
            operand_byte: 0x00,
            relative_offset: 0x0000,
            cycles_remaining: 0,
            cycles: 0,
            memory,
        }
    }

    /// Resets the CPU: PC from the reset vector, registers cleared,
    /// SP = 0xFD, status reduced to the U bit, transient state dropped.
    /// The sequence is charged 8 cycles.
    pub fn reset(&mut self) {
        self.pc = self.read_vector(RESET_VECTOR);

        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.p = Status::reset_value();

        self.opcode = 0x00;
        self.mode = AddressingMode::Implied;
        self.operand_address = 0x0000;
        self.operand_byte = 0x00;
        self.relative_offset = 0x0000;

        self.cycles_remaining = 8;
    }

    /// Maskable interrupt request. Ignored while the I flag is set.
    ///
    /// Interrupts are sampled between instructions; a host should raise
    /// them only at an instruction boundary.
    pub fn irq(&mut self) {
        if !self.p.contains(Status::INTERRUPT_DISABLE) {
            self.service_interrupt(IRQ_VECTOR);
            self.cycles_remaining = 7;
        }
    }

    /// Non-maskable interrupt.
    pub fn nmi(&mut self) {
        self.service_interrupt(NMI_VECTOR);
        self.cycles_remaining = 8;
    }

    /// Advances the CPU by one master-clock tick.
    ///
    /// At an instruction boundary this fetches, decodes and executes the
    /// next instruction in full, then spreads its cost over the following
    /// ticks; mid-instruction it only burns down the remaining cycles.
    pub fn clock(&mut self) {
        if self.cycles_remaining == 0 {
            self.opcode = self.memory.read(self.pc);
            self.pc = self.pc.wrapping_add(1);

            // The U bit is architecturally always set; re-force it at fetch.
            self.p.insert(Status::UNUSED);

            let entry = &OPCODE_TABLE[self.opcode as usize];
            self.cycles_remaining = entry.base_cycles;
            self.mode = entry.addressing_mode;

            let page_crossed = addressing::resolve(self, entry.addressing_mode);
            self.execute(entry.operation);

            // Stores always pay the full write regardless of indexing, so
            // they never take the page-cross penalty.
            let is_store = matches!(
                entry.operation,
                Operation::Sta | Operation::Stx | Operation::Sty
            );
            if page_crossed && !is_store {
                self.cycles_remaining += 1;
            }
        }

        self.cycles_remaining -= 1;
        self.cycles = self.cycles.wrapping_add(1);
    }

    /// True exactly when the previous instruction has fully settled and
    /// the next tick will fetch.
    pub fn instruction_complete(&self) -> bool {
        self.cycles_remaining == 0
    }

    /// Clocks until the instruction started by the next tick has fully
    /// settled. From a boundary this executes exactly one instruction.
    pub fn step(&mut self) {
        loop {
            self.clock();
            if self.instruction_complete() {
                break;
            }
        }
    }

    fn execute(&mut self, operation: Operation) {
        match operation {
            Operation::Adc => alu::execute_adc(self),
            Operation::And => alu::execute_and(self),
            Operation::Asl => shifts::execute_asl(self),
            Operation::Bcc => branches::execute_bcc(self),
            Operation::Bcs => branches::execute_bcs(self),
            Operation::Beq => branches::execute_beq(self),
            Operation::Bit => alu::execute_bit(self),
            Operation::Bmi => branches::execute_bmi(self),
            Operation::Bne => branches::execute_bne(self),
            Operation::Bpl => branches::execute_bpl(self),
            Operation::Brk => control::execute_brk(self),
            Operation::Bvc => branches::execute_bvc(self),
            Operation::Bvs => branches::execute_bvs(self),
            Operation::Clc => flags::execute_clc(self),
            Operation::Cld => flags::execute_cld(self),
            Operation::Cli => flags::execute_cli(self),
            Operation::Clv => flags::execute_clv(self),
            Operation::Cmp => alu::execute_cmp(self),
            Operation::Cpx => alu::execute_cpx(self),
            Operation::Cpy => alu::execute_cpy(self),
            Operation::Dec => inc_dec::execute_dec(self),
            Operation::Dex => inc_dec::execute_dex(self),
            Operation::Dey => inc_dec::execute_dey(self),
            Operation::Eor => alu::execute_eor(self),
            Operation::Inc => inc_dec::execute_inc(self),
            Operation::Inx => inc_dec::execute_inx(self),
            Operation::Iny => inc_dec::execute_iny(self),
            Operation::Jmp => control::execute_jmp(self),
            Operation::Jsr => control::execute_jsr(self),
            Operation::Lda => load_store::execute_lda(self),
            Operation::Ldx => load_store::execute_ldx(self),
            Operation::Ldy => load_store::execute_ldy(self),
            Operation::Lsr => shifts::execute_lsr(self),
            Operation::Nop => control::execute_nop(self),
            Operation::Ora => alu::execute_ora(self),
            Operation::Pha => stack::execute_pha(self),
            Operation::Php => stack::execute_php(self),
            Operation::Pla => stack::execute_pla(self),
            Operation::Plp => stack::execute_plp(self),
            Operation::Rol => shifts::execute_rol(self),
            Operation::Ror => shifts::execute_ror(self),
            Operation::Rti => control::execute_rti(self),
            Operation::Rts => control::execute_rts(self),
            Operation::Sbc => alu::execute_sbc(self),
            Operation::Sec => flags::execute_sec(self),
            Operation::Sed => flags::execute_sed(self),
            Operation::Sei => flags::execute_sei(self),
            Operation::Sta => load_store::execute_sta(self),
            Operation::Stx => load_store::execute_stx(self),
            Operation::Sty => load_store::execute_sty(self),
            Operation::Tax => transfer::execute_tax(self),
            Operation::Tay => transfer::execute_tay(self),
            Operation::Tsx => transfer::execute_tsx(self),
            Operation::Txa => transfer::execute_txa(self),
            Operation::Txs => transfer::execute_txs(self),
            Operation::Tya => transfer::execute_tya(self),
            Operation::Xxx => control::execute_xxx(self),
        }
    }

    /// Shared IRQ/NMI entry: pushes PC and status (B cleared, U set),
    /// sets I, and loads PC from `vector`.
    fn service_interrupt(&mut self, vector: u16) {
        self.push((self.pc >> 8) as u8);
        self.push(self.pc as u8);

        self.p.remove(Status::BREAK);
        self.p.insert(Status::UNUSED);
        self.push(self.p.bits());

        self.p.insert(Status::INTERRUPT_DISABLE);
        self.pc = self.read_vector(vector);
    }

    // ========== Helpers for addressing modes and instructions ==========

    /// Reads the operand of the instruction in flight: the latched
    /// accumulator for implied/accumulator forms, memory otherwise.
    pub(crate) fn read_operand(&self) -> u8 {
        if self.mode == AddressingMode::Implied {
            self.operand_byte
        } else {
            self.memory.read(self.operand_address)
        }
    }

    /// Writes a result back to the operand location: the accumulator for
    /// implied/accumulator forms, memory otherwise.
    pub(crate) fn write_operand(&mut self, value: u8) {
        if self.mode == AddressingMode::Implied {
            self.a = value;
        } else {
            self.memory.write(self.operand_address, value);
        }
    }

    /// Pushes a byte; SP wraps within the stack page.
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pops a byte; SP wraps within the stack page.
    pub(crate) fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    pub(crate) fn read_vector(&self, vector: u16) -> u16 {
        let lo = self.memory.read(vector) as u16;
        let hi = self.memory.read(vector.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    // ========== Register observation ==========

    /// Accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Stack pointer; the full stack address is `0x0100 | SP`.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Packed status register.
    pub fn status(&self) -> Status {
        self.p
    }

    /// Total master-clock ticks consumed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Register priming (tests and harnesses) ==========

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Replaces the status register. The U bit is forced set, matching
    /// every architectural path that loads P.
    pub fn set_status(&mut self, value: Status) {
        self.p = value | Status::UNUSED;
    }

    /// Shared view of the memory bus, for tracers and debuggers.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Mutable access to the memory bus, for hosts loading programs.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
