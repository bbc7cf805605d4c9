use std::fmt;

use crate::bus::Bus;
use crate::opcodes::{self, AddressingMode, Operation, flag};
use crate::status::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    /// Fetched a byte the opcode table has no entry for. With the full
    /// 256-entry table this cannot happen; it stays an error (not a panic)
    /// so the host owns the failure.
    UnknownOpcode { pc: u16, code: u8 },
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::UnknownOpcode { pc, code } => {
                write!(f, "unknown opcode {:02X} at {:04X}", code, pc)
            }
        }
    }
}

impl std::error::Error for CpuError {}

/// What the addressing mode of the current instruction resolved to.
/// Operations pull a value or an address out of this through
/// `read_operand`/`write_operand`, so accumulator and memory forms of the
/// same operation share one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    None,
    Accumulator,
    Immediate(u8),
    Address(u16),
}

pub struct Cpu {
    // More info about the 6502 registers can be found here:
    // https://www.nesdev.org/obelisk-6502-guide/registers.html
    pub program_counter: u16,
    // Low byte of the next free stack slot; the stack lives in
    // 0x0100-0x01FF and grows downward.
    pub stack_pointer: u8,
    pub accumulator: u8,
    pub x_register: u8,
    pub y_register: u8,
    pub status: Status,
    // Latched by the KIL opcodes; the run loop exits instead of spinning.
    pub halted: bool,
    pub bus: Bus,
}

impl Cpu {
    const STACK_BASE_ADDRESS: u16 = 0x0100;
    const STACK_POINTER_AFTER_RESET: u8 = 0xFD;
    const RESET_VECTOR_ADDRESS: u16 = 0xFFFC;
    pub(crate) const IRQ_VECTOR_ADDRESS: u16 = 0xFFFE;

    pub fn new(bus: Bus) -> Cpu {
        Cpu {
            program_counter: 0x0000,
            stack_pointer: Self::STACK_POINTER_AFTER_RESET,
            accumulator: 0x00,
            x_register: 0x00,
            y_register: 0x00,
            status: Status::power_on(),
            halted: false,
            bus,
        }
    }

    pub fn reset(&mut self) {
        self.accumulator = 0;
        self.x_register = 0;
        self.y_register = 0;
        self.stack_pointer = Self::STACK_POINTER_AFTER_RESET;
        self.status = Status::power_on();
        self.halted = false;
        self.program_counter = self.read_u16(Self::RESET_VECTOR_ADDRESS);
    }

    pub fn read_u8(&self, addr: u16) -> u8 {
        self.bus.read_u8(addr)
    }

    pub fn write_u8(&mut self, addr: u16, value: u8) {
        self.bus.write_u8(addr, value);
    }

    pub fn read_u16(&self, addr: u16) -> u16 {
        self.bus.read_u16(addr)
    }

    /// Executes exactly one instruction.
    pub fn step(&mut self) -> Result<(), CpuError> {
        let pc = self.program_counter;
        let code = self.read_u8(pc);
        let opcode = opcodes::decode(code).ok_or(CpuError::UnknownOpcode { pc, code })?;

        // The PC moves past the whole instruction before the operation runs,
        // so relative branches and JSR see the next-instruction address.
        self.program_counter = pc.wrapping_add(opcode.bytes as u16);

        let operand = self.resolve_operand(opcode.mode, pc.wrapping_add(1));
        let result = self.execute(opcode.op, operand);

        // Carry and overflow are operation-specific and were set by the
        // handler; zero and negative follow the result value when the table
        // says so.
        if opcode.flags & flag::Z != 0 {
            self.status.set(Status::ZERO, result == 0);
        }
        if opcode.flags & flag::N != 0 {
            self.status.set(Status::NEGATIVE, result & 0x80 != 0);
        }
        Ok(())
    }

    pub fn run(&mut self) -> Result<(), CpuError> {
        self.run_with_callback(|_| {})
    }

    /// Steps until the CPU halts, invoking `callback` before every
    /// instruction. The nestest harness uses this to print a trace line per
    /// step.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<(), CpuError>
    where
        F: FnMut(&mut Cpu),
    {
        while !self.halted {
            callback(self);
            self.step()?;
        }
        Ok(())
    }

    /// Computes the effective address (or carries the immediate value) for
    /// an instruction whose operand bytes start at `operand_addr`. Only the
    /// indirect family reads through memory here, to chase its pointer.
    pub(crate) fn resolve_operand(&self, mode: AddressingMode, operand_addr: u16) -> Operand {
        match mode {
            AddressingMode::Implied => Operand::None,

            AddressingMode::Accumulator => Operand::Accumulator,

            AddressingMode::Immediate => Operand::Immediate(self.read_u8(operand_addr)),

            AddressingMode::ZeroPage => Operand::Address(self.read_u8(operand_addr) as u16),

            // Indexed zero page wraps within the page; the high byte is
            // never carried.
            AddressingMode::ZeroPageX => {
                let base = self.read_u8(operand_addr);
                Operand::Address(base.wrapping_add(self.x_register) as u16)
            }

            AddressingMode::ZeroPageY => {
                let base = self.read_u8(operand_addr);
                Operand::Address(base.wrapping_add(self.y_register) as u16)
            }

            AddressingMode::Absolute => Operand::Address(self.read_u16(operand_addr)),

            AddressingMode::AbsoluteX => {
                let base = self.read_u16(operand_addr);
                Operand::Address(base.wrapping_add(self.x_register as u16))
            }

            AddressingMode::AbsoluteY => {
                let base = self.read_u16(operand_addr);
                Operand::Address(base.wrapping_add(self.y_register as u16))
            }

            AddressingMode::Indirect => {
                let ptr = self.read_u16(operand_addr);
                let low = self.read_u8(ptr);
                // 6502 hardware bug: incrementing the pointer's low byte
                // never carries into the high byte, so a pointer at $xxFF
                // fetches its high byte from $xx00.
                let high = if ptr & 0x00FF == 0x00FF {
                    self.read_u8(ptr & 0xFF00)
                } else {
                    self.read_u8(ptr.wrapping_add(1))
                };
                Operand::Address(u16::from_le_bytes([low, high]))
            }

            // Both pointer bytes come from the zero page, with wrap.
            AddressingMode::IndirectX => {
                let ptr = self.read_u8(operand_addr).wrapping_add(self.x_register);
                let low = self.read_u8(ptr as u16);
                let high = self.read_u8(ptr.wrapping_add(1) as u16);
                Operand::Address(u16::from_le_bytes([low, high]))
            }

            AddressingMode::IndirectY => {
                let ptr = self.read_u8(operand_addr);
                let low = self.read_u8(ptr as u16);
                let high = self.read_u8(ptr.wrapping_add(1) as u16);
                let base = u16::from_le_bytes([low, high]);
                Operand::Address(base.wrapping_add(self.y_register as u16))
            }

            // The displacement is signed and relative to the address of the
            // next instruction, which is operand_addr + 1.
            AddressingMode::Relative => {
                let offset = self.read_u8(operand_addr) as i8;
                Operand::Address(
                    operand_addr.wrapping_add(1).wrapping_add(offset as u16),
                )
            }
        }
    }

    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.accumulator,
            Operand::Immediate(value) => value,
            Operand::Address(addr) => self.read_u8(addr),
            Operand::None => unreachable!("operation requires an operand value"),
        }
    }

    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.accumulator = value,
            Operand::Address(addr) => self.write_u8(addr, value),
            Operand::None | Operand::Immediate(_) => {
                unreachable!("operation cannot write through this operand")
            }
        }
    }

    pub(crate) fn operand_address(&self, operand: Operand) -> u16 {
        match operand {
            Operand::Address(addr) => addr,
            _ => unreachable!("operation requires an effective address"),
        }
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.write_u8(Self::STACK_BASE_ADDRESS + self.stack_pointer as u16, value);
        self.stack_pointer = self.stack_pointer.wrapping_sub(1);
    }

    // High byte first, so the word sits on the stack in little-endian order.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push(high);
        self.push(low);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.stack_pointer = self.stack_pointer.wrapping_add(1);
        self.read_u8(Self::STACK_BASE_ADDRESS + self.stack_pointer as u16)
    }

    pub(crate) fn pull_word(&mut self) -> u16 {
        let low = self.pull();
        let high = self.pull();
        u16::from_le_bytes([low, high])
    }

    pub(crate) fn branch_if(&mut self, operand: Operand, condition: bool) -> u8 {
        if condition {
            self.program_counter = self.operand_address(operand);
        }
        0
    }

    fn execute(&mut self, op: Operation, operand: Operand) -> u8 {
        match op {
            Operation::Adc => self.adc(operand),
            Operation::Ahx => self.ahx(operand),
            Operation::Alr => self.alr(operand),
            Operation::Anc => self.anc(operand),
            Operation::And => self.and(operand),
            Operation::Arr => self.arr(operand),
            Operation::Asl => self.asl(operand),
            Operation::Axs => self.axs(operand),
            Operation::Bcc => self.bcc(operand),
            Operation::Bcs => self.bcs(operand),
            Operation::Beq => self.beq(operand),
            Operation::Bit => self.bit(operand),
            Operation::Bmi => self.bmi(operand),
            Operation::Bne => self.bne(operand),
            Operation::Bpl => self.bpl(operand),
            Operation::Brk => self.brk(),
            Operation::Bvc => self.bvc(operand),
            Operation::Bvs => self.bvs(operand),
            Operation::Clc => self.clc(),
            Operation::Cld => self.cld(),
            Operation::Cli => self.cli(),
            Operation::Clv => self.clv(),
            Operation::Cmp => self.cmp(operand),
            Operation::Cpx => self.cpx(operand),
            Operation::Cpy => self.cpy(operand),
            Operation::Dcp => self.dcp(operand),
            Operation::Dec => self.dec(operand),
            Operation::Dex => self.dex(),
            Operation::Dey => self.dey(),
            Operation::Eor => self.eor(operand),
            Operation::Inc => self.inc(operand),
            Operation::Inx => self.inx(),
            Operation::Iny => self.iny(),
            Operation::Isb => self.isb(operand),
            Operation::Jmp => self.jmp(operand),
            Operation::Jsr => self.jsr(operand),
            Operation::Kil => self.kil(),
            Operation::Las => self.las(operand),
            Operation::Lax => self.lax(operand),
            Operation::Lda => self.lda(operand),
            Operation::Ldx => self.ldx(operand),
            Operation::Ldy => self.ldy(operand),
            Operation::Lsr => self.lsr(operand),
            Operation::Lxa => self.lxa(operand),
            Operation::Nop => self.nop(),
            Operation::Ora => self.ora(operand),
            Operation::Pha => self.pha(),
            Operation::Php => self.php(),
            Operation::Pla => self.pla(),
            Operation::Plp => self.plp(),
            Operation::Rla => self.rla(operand),
            Operation::Rol => self.rol(operand),
            Operation::Ror => self.ror(operand),
            Operation::Rra => self.rra(operand),
            Operation::Rti => self.rti(),
            Operation::Rts => self.rts(),
            Operation::Sax => self.sax(operand),
            Operation::Sbc => self.sbc(operand),
            Operation::Sec => self.sec(),
            Operation::Sed => self.sed(),
            Operation::Sei => self.sei(),
            Operation::Shx => self.shx(operand),
            Operation::Shy => self.shy(operand),
            Operation::Slo => self.slo(operand),
            Operation::Sre => self.sre(operand),
            Operation::Sta => self.sta(operand),
            Operation::Stx => self.stx(operand),
            Operation::Sty => self.sty(operand),
            Operation::Tas => self.tas(operand),
            Operation::Tax => self.tax(),
            Operation::Tay => self.tay(),
            Operation::Tsx => self.tsx(),
            Operation::Txa => self.txa(),
            Operation::Txs => self.txs(),
            Operation::Tya => self.tya(),
            Operation::Xaa => self.xaa(operand),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::rom::Rom;

    /// A reset CPU pointed at `program`, which sits at 0xC000 in a
    /// synthetic NROM image.
    pub(crate) fn cpu_with_program(program: &[u8]) -> Cpu {
        let mut cpu = Cpu::new(Bus::new(Rom::with_program(program)));
        cpu.reset();
        cpu
    }
}
