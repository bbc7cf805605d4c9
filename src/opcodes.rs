use once_cell::sync::Lazy;
use phf::phf_map;

// More info about the 6502 addressing modes can be found here:
// https://www.nesdev.org/obelisk-6502-guide/addressing.html
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Absolute,    // e.g. LDA $1234
    AbsoluteX,   // e.g. LDA $1234,X
    AbsoluteY,   // e.g. LDA $1234,Y
    Accumulator, // e.g. ASL A
    Immediate,   // e.g. LDA #$10
    Implied,     // e.g. CLC, INX (no operand)
    Indirect,    // e.g. JMP ($1234)
    IndirectX,   // e.g. LDA ($10,X)
    IndirectY,   // e.g. LDA ($10),Y
    Relative,    // e.g. BEQ +5
    ZeroPage,    // e.g. LDA $10
    ZeroPageX,   // e.g. LDA $10,X
    ZeroPageY,   // e.g. LDX $10,Y
}

// One variant per mnemonic, official and unofficial. The addressing mode is
// deliberately not part of the variant; the pairing lives in the opcode
// table below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Adc, Ahx, Alr, Anc, And, Arr, Asl, Axs,
    Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy,
    Dcp, Dec, Dex, Dey,
    Eor,
    Inc, Inx, Iny, Isb,
    Jmp, Jsr,
    Kil,
    Las, Lax, Lda, Ldx, Ldy, Lsr, Lxa,
    Nop,
    Ora,
    Pha, Php, Pla, Plp,
    Rla, Rol, Ror, Rra, Rti, Rts,
    Sax, Sbc, Sec, Sed, Sei, Shx, Shy, Slo, Sre, Sta, Stx, Sty,
    Tas, Tax, Tay, Tsx, Txa, Txs, Tya,
    Xaa,
}

/// Flag-effect masks, using the P register bit positions. The dispatch loop
/// applies these to the result value an operation returns; carry and
/// overflow never follow a generic rule and are set inside the handlers.
pub mod flag {
    pub const NONE: u8 = 0;
    pub const Z: u8 = 0b0000_0010;
    pub const N: u8 = 0b1000_0000;
    pub const ZN: u8 = Z | N;
}

#[derive(Debug, Clone, Copy)]
pub struct OpCode {
    pub code: u8,
    pub name: &'static str,
    pub op: Operation,
    pub mode: AddressingMode,
    // Total instruction length, opcode byte included.
    pub bytes: u8,
    pub flags: u8,
    pub unofficial: bool,
}

use self::AddressingMode as Mode;
use self::Operation as Op;

// All 256 opcode bytes. Official opcodes first, sorted by mnemonic; the
// documented unofficial opcodes follow. Duplicate keys fail the phf build.
pub static OPCODE_MAP: phf::Map<u8, OpCode> = phf_map! {
    // ADC
    0x69u8 => OpCode { code: 0x69, name: "ADC", op: Op::Adc, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: false },
    0x65u8 => OpCode { code: 0x65, name: "ADC", op: Op::Adc, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0x75u8 => OpCode { code: 0x75, name: "ADC", op: Op::Adc, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x6Du8 => OpCode { code: 0x6D, name: "ADC", op: Op::Adc, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0x7Du8 => OpCode { code: 0x7D, name: "ADC", op: Op::Adc, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },
    0x79u8 => OpCode { code: 0x79, name: "ADC", op: Op::Adc, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: false },
    0x61u8 => OpCode { code: 0x61, name: "ADC", op: Op::Adc, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x71u8 => OpCode { code: 0x71, name: "ADC", op: Op::Adc, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: false },

    // AND
    0x29u8 => OpCode { code: 0x29, name: "AND", op: Op::And, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: false },
    0x25u8 => OpCode { code: 0x25, name: "AND", op: Op::And, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0x35u8 => OpCode { code: 0x35, name: "AND", op: Op::And, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x2Du8 => OpCode { code: 0x2D, name: "AND", op: Op::And, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0x3Du8 => OpCode { code: 0x3D, name: "AND", op: Op::And, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },
    0x39u8 => OpCode { code: 0x39, name: "AND", op: Op::And, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: false },
    0x21u8 => OpCode { code: 0x21, name: "AND", op: Op::And, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x31u8 => OpCode { code: 0x31, name: "AND", op: Op::And, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: false },

    // ASL
    0x0Au8 => OpCode { code: 0x0A, name: "ASL", op: Op::Asl, mode: Mode::Accumulator, bytes: 1, flags: flag::ZN, unofficial: false },
    0x06u8 => OpCode { code: 0x06, name: "ASL", op: Op::Asl, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0x16u8 => OpCode { code: 0x16, name: "ASL", op: Op::Asl, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x0Eu8 => OpCode { code: 0x0E, name: "ASL", op: Op::Asl, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0x1Eu8 => OpCode { code: 0x1E, name: "ASL", op: Op::Asl, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },

    // Branches
    0x90u8 => OpCode { code: 0x90, name: "BCC", op: Op::Bcc, mode: Mode::Relative, bytes: 2, flags: flag::NONE, unofficial: false },
    0xB0u8 => OpCode { code: 0xB0, name: "BCS", op: Op::Bcs, mode: Mode::Relative, bytes: 2, flags: flag::NONE, unofficial: false },
    0xF0u8 => OpCode { code: 0xF0, name: "BEQ", op: Op::Beq, mode: Mode::Relative, bytes: 2, flags: flag::NONE, unofficial: false },
    0x30u8 => OpCode { code: 0x30, name: "BMI", op: Op::Bmi, mode: Mode::Relative, bytes: 2, flags: flag::NONE, unofficial: false },
    0xD0u8 => OpCode { code: 0xD0, name: "BNE", op: Op::Bne, mode: Mode::Relative, bytes: 2, flags: flag::NONE, unofficial: false },
    0x10u8 => OpCode { code: 0x10, name: "BPL", op: Op::Bpl, mode: Mode::Relative, bytes: 2, flags: flag::NONE, unofficial: false },
    0x50u8 => OpCode { code: 0x50, name: "BVC", op: Op::Bvc, mode: Mode::Relative, bytes: 2, flags: flag::NONE, unofficial: false },
    0x70u8 => OpCode { code: 0x70, name: "BVS", op: Op::Bvs, mode: Mode::Relative, bytes: 2, flags: flag::NONE, unofficial: false },

    // BIT — only Z follows the result; N and V come from the operand.
    0x24u8 => OpCode { code: 0x24, name: "BIT", op: Op::Bit, mode: Mode::ZeroPage, bytes: 2, flags: flag::Z, unofficial: false },
    0x2Cu8 => OpCode { code: 0x2C, name: "BIT", op: Op::Bit, mode: Mode::Absolute, bytes: 3, flags: flag::Z, unofficial: false },

    // BRK
    0x00u8 => OpCode { code: 0x00, name: "BRK", op: Op::Brk, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },

    // Flag clears/sets
    0x18u8 => OpCode { code: 0x18, name: "CLC", op: Op::Clc, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },
    0xD8u8 => OpCode { code: 0xD8, name: "CLD", op: Op::Cld, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },
    0x58u8 => OpCode { code: 0x58, name: "CLI", op: Op::Cli, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },
    0xB8u8 => OpCode { code: 0xB8, name: "CLV", op: Op::Clv, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },
    0x38u8 => OpCode { code: 0x38, name: "SEC", op: Op::Sec, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },
    0xF8u8 => OpCode { code: 0xF8, name: "SED", op: Op::Sed, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },
    0x78u8 => OpCode { code: 0x78, name: "SEI", op: Op::Sei, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },

    // CMP
    0xC9u8 => OpCode { code: 0xC9, name: "CMP", op: Op::Cmp, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: false },
    0xC5u8 => OpCode { code: 0xC5, name: "CMP", op: Op::Cmp, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0xD5u8 => OpCode { code: 0xD5, name: "CMP", op: Op::Cmp, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0xCDu8 => OpCode { code: 0xCD, name: "CMP", op: Op::Cmp, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0xDDu8 => OpCode { code: 0xDD, name: "CMP", op: Op::Cmp, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },
    0xD9u8 => OpCode { code: 0xD9, name: "CMP", op: Op::Cmp, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: false },
    0xC1u8 => OpCode { code: 0xC1, name: "CMP", op: Op::Cmp, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: false },
    0xD1u8 => OpCode { code: 0xD1, name: "CMP", op: Op::Cmp, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: false },

    // CPX
    0xE0u8 => OpCode { code: 0xE0, name: "CPX", op: Op::Cpx, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: false },
    0xE4u8 => OpCode { code: 0xE4, name: "CPX", op: Op::Cpx, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0xECu8 => OpCode { code: 0xEC, name: "CPX", op: Op::Cpx, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },

    // CPY
    0xC0u8 => OpCode { code: 0xC0, name: "CPY", op: Op::Cpy, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: false },
    0xC4u8 => OpCode { code: 0xC4, name: "CPY", op: Op::Cpy, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0xCCu8 => OpCode { code: 0xCC, name: "CPY", op: Op::Cpy, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },

    // DEC / DEX / DEY
    0xC6u8 => OpCode { code: 0xC6, name: "DEC", op: Op::Dec, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0xD6u8 => OpCode { code: 0xD6, name: "DEC", op: Op::Dec, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0xCEu8 => OpCode { code: 0xCE, name: "DEC", op: Op::Dec, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0xDEu8 => OpCode { code: 0xDE, name: "DEC", op: Op::Dec, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },
    0xCAu8 => OpCode { code: 0xCA, name: "DEX", op: Op::Dex, mode: Mode::Implied, bytes: 1, flags: flag::ZN, unofficial: false },
    0x88u8 => OpCode { code: 0x88, name: "DEY", op: Op::Dey, mode: Mode::Implied, bytes: 1, flags: flag::ZN, unofficial: false },

    // EOR
    0x49u8 => OpCode { code: 0x49, name: "EOR", op: Op::Eor, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: false },
    0x45u8 => OpCode { code: 0x45, name: "EOR", op: Op::Eor, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0x55u8 => OpCode { code: 0x55, name: "EOR", op: Op::Eor, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x4Du8 => OpCode { code: 0x4D, name: "EOR", op: Op::Eor, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0x5Du8 => OpCode { code: 0x5D, name: "EOR", op: Op::Eor, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },
    0x59u8 => OpCode { code: 0x59, name: "EOR", op: Op::Eor, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: false },
    0x41u8 => OpCode { code: 0x41, name: "EOR", op: Op::Eor, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x51u8 => OpCode { code: 0x51, name: "EOR", op: Op::Eor, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: false },

    // INC / INX / INY
    0xE6u8 => OpCode { code: 0xE6, name: "INC", op: Op::Inc, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0xF6u8 => OpCode { code: 0xF6, name: "INC", op: Op::Inc, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0xEEu8 => OpCode { code: 0xEE, name: "INC", op: Op::Inc, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0xFEu8 => OpCode { code: 0xFE, name: "INC", op: Op::Inc, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },
    0xE8u8 => OpCode { code: 0xE8, name: "INX", op: Op::Inx, mode: Mode::Implied, bytes: 1, flags: flag::ZN, unofficial: false },
    0xC8u8 => OpCode { code: 0xC8, name: "INY", op: Op::Iny, mode: Mode::Implied, bytes: 1, flags: flag::ZN, unofficial: false },

    // JMP / JSR
    0x4Cu8 => OpCode { code: 0x4C, name: "JMP", op: Op::Jmp, mode: Mode::Absolute, bytes: 3, flags: flag::NONE, unofficial: false },
    0x6Cu8 => OpCode { code: 0x6C, name: "JMP", op: Op::Jmp, mode: Mode::Indirect, bytes: 3, flags: flag::NONE, unofficial: false },
    0x20u8 => OpCode { code: 0x20, name: "JSR", op: Op::Jsr, mode: Mode::Absolute, bytes: 3, flags: flag::NONE, unofficial: false },

    // LDA
    0xA9u8 => OpCode { code: 0xA9, name: "LDA", op: Op::Lda, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: false },
    0xA5u8 => OpCode { code: 0xA5, name: "LDA", op: Op::Lda, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0xB5u8 => OpCode { code: 0xB5, name: "LDA", op: Op::Lda, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0xADu8 => OpCode { code: 0xAD, name: "LDA", op: Op::Lda, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0xBDu8 => OpCode { code: 0xBD, name: "LDA", op: Op::Lda, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },
    0xB9u8 => OpCode { code: 0xB9, name: "LDA", op: Op::Lda, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: false },
    0xA1u8 => OpCode { code: 0xA1, name: "LDA", op: Op::Lda, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: false },
    0xB1u8 => OpCode { code: 0xB1, name: "LDA", op: Op::Lda, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: false },

    // LDX
    0xA2u8 => OpCode { code: 0xA2, name: "LDX", op: Op::Ldx, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: false },
    0xA6u8 => OpCode { code: 0xA6, name: "LDX", op: Op::Ldx, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0xB6u8 => OpCode { code: 0xB6, name: "LDX", op: Op::Ldx, mode: Mode::ZeroPageY, bytes: 2, flags: flag::ZN, unofficial: false },
    0xAEu8 => OpCode { code: 0xAE, name: "LDX", op: Op::Ldx, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0xBEu8 => OpCode { code: 0xBE, name: "LDX", op: Op::Ldx, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: false },

    // LDY
    0xA0u8 => OpCode { code: 0xA0, name: "LDY", op: Op::Ldy, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: false },
    0xA4u8 => OpCode { code: 0xA4, name: "LDY", op: Op::Ldy, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0xB4u8 => OpCode { code: 0xB4, name: "LDY", op: Op::Ldy, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0xACu8 => OpCode { code: 0xAC, name: "LDY", op: Op::Ldy, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0xBCu8 => OpCode { code: 0xBC, name: "LDY", op: Op::Ldy, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },

    // LSR
    0x4Au8 => OpCode { code: 0x4A, name: "LSR", op: Op::Lsr, mode: Mode::Accumulator, bytes: 1, flags: flag::ZN, unofficial: false },
    0x46u8 => OpCode { code: 0x46, name: "LSR", op: Op::Lsr, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0x56u8 => OpCode { code: 0x56, name: "LSR", op: Op::Lsr, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x4Eu8 => OpCode { code: 0x4E, name: "LSR", op: Op::Lsr, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0x5Eu8 => OpCode { code: 0x5E, name: "LSR", op: Op::Lsr, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },

    // NOP
    0xEAu8 => OpCode { code: 0xEA, name: "NOP", op: Op::Nop, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },

    // ORA
    0x09u8 => OpCode { code: 0x09, name: "ORA", op: Op::Ora, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: false },
    0x05u8 => OpCode { code: 0x05, name: "ORA", op: Op::Ora, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0x15u8 => OpCode { code: 0x15, name: "ORA", op: Op::Ora, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x0Du8 => OpCode { code: 0x0D, name: "ORA", op: Op::Ora, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0x1Du8 => OpCode { code: 0x1D, name: "ORA", op: Op::Ora, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },
    0x19u8 => OpCode { code: 0x19, name: "ORA", op: Op::Ora, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: false },
    0x01u8 => OpCode { code: 0x01, name: "ORA", op: Op::Ora, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x11u8 => OpCode { code: 0x11, name: "ORA", op: Op::Ora, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: false },

    // Stack
    0x48u8 => OpCode { code: 0x48, name: "PHA", op: Op::Pha, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },
    0x08u8 => OpCode { code: 0x08, name: "PHP", op: Op::Php, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },
    0x68u8 => OpCode { code: 0x68, name: "PLA", op: Op::Pla, mode: Mode::Implied, bytes: 1, flags: flag::ZN, unofficial: false },
    0x28u8 => OpCode { code: 0x28, name: "PLP", op: Op::Plp, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },

    // ROL
    0x2Au8 => OpCode { code: 0x2A, name: "ROL", op: Op::Rol, mode: Mode::Accumulator, bytes: 1, flags: flag::ZN, unofficial: false },
    0x26u8 => OpCode { code: 0x26, name: "ROL", op: Op::Rol, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0x36u8 => OpCode { code: 0x36, name: "ROL", op: Op::Rol, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x2Eu8 => OpCode { code: 0x2E, name: "ROL", op: Op::Rol, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0x3Eu8 => OpCode { code: 0x3E, name: "ROL", op: Op::Rol, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },

    // ROR
    0x6Au8 => OpCode { code: 0x6A, name: "ROR", op: Op::Ror, mode: Mode::Accumulator, bytes: 1, flags: flag::ZN, unofficial: false },
    0x66u8 => OpCode { code: 0x66, name: "ROR", op: Op::Ror, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0x76u8 => OpCode { code: 0x76, name: "ROR", op: Op::Ror, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0x6Eu8 => OpCode { code: 0x6E, name: "ROR", op: Op::Ror, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0x7Eu8 => OpCode { code: 0x7E, name: "ROR", op: Op::Ror, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },

    // RTI / RTS
    0x40u8 => OpCode { code: 0x40, name: "RTI", op: Op::Rti, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },
    0x60u8 => OpCode { code: 0x60, name: "RTS", op: Op::Rts, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },

    // SBC
    0xE9u8 => OpCode { code: 0xE9, name: "SBC", op: Op::Sbc, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: false },
    0xE5u8 => OpCode { code: 0xE5, name: "SBC", op: Op::Sbc, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: false },
    0xF5u8 => OpCode { code: 0xF5, name: "SBC", op: Op::Sbc, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: false },
    0xEDu8 => OpCode { code: 0xED, name: "SBC", op: Op::Sbc, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: false },
    0xFDu8 => OpCode { code: 0xFD, name: "SBC", op: Op::Sbc, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: false },
    0xF9u8 => OpCode { code: 0xF9, name: "SBC", op: Op::Sbc, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: false },
    0xE1u8 => OpCode { code: 0xE1, name: "SBC", op: Op::Sbc, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: false },
    0xF1u8 => OpCode { code: 0xF1, name: "SBC", op: Op::Sbc, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: false },

    // STA
    0x85u8 => OpCode { code: 0x85, name: "STA", op: Op::Sta, mode: Mode::ZeroPage, bytes: 2, flags: flag::NONE, unofficial: false },
    0x95u8 => OpCode { code: 0x95, name: "STA", op: Op::Sta, mode: Mode::ZeroPageX, bytes: 2, flags: flag::NONE, unofficial: false },
    0x8Du8 => OpCode { code: 0x8D, name: "STA", op: Op::Sta, mode: Mode::Absolute, bytes: 3, flags: flag::NONE, unofficial: false },
    0x9Du8 => OpCode { code: 0x9D, name: "STA", op: Op::Sta, mode: Mode::AbsoluteX, bytes: 3, flags: flag::NONE, unofficial: false },
    0x99u8 => OpCode { code: 0x99, name: "STA", op: Op::Sta, mode: Mode::AbsoluteY, bytes: 3, flags: flag::NONE, unofficial: false },
    0x81u8 => OpCode { code: 0x81, name: "STA", op: Op::Sta, mode: Mode::IndirectX, bytes: 2, flags: flag::NONE, unofficial: false },
    0x91u8 => OpCode { code: 0x91, name: "STA", op: Op::Sta, mode: Mode::IndirectY, bytes: 2, flags: flag::NONE, unofficial: false },

    // STX / STY
    0x86u8 => OpCode { code: 0x86, name: "STX", op: Op::Stx, mode: Mode::ZeroPage, bytes: 2, flags: flag::NONE, unofficial: false },
    0x96u8 => OpCode { code: 0x96, name: "STX", op: Op::Stx, mode: Mode::ZeroPageY, bytes: 2, flags: flag::NONE, unofficial: false },
    0x8Eu8 => OpCode { code: 0x8E, name: "STX", op: Op::Stx, mode: Mode::Absolute, bytes: 3, flags: flag::NONE, unofficial: false },
    0x84u8 => OpCode { code: 0x84, name: "STY", op: Op::Sty, mode: Mode::ZeroPage, bytes: 2, flags: flag::NONE, unofficial: false },
    0x94u8 => OpCode { code: 0x94, name: "STY", op: Op::Sty, mode: Mode::ZeroPageX, bytes: 2, flags: flag::NONE, unofficial: false },
    0x8Cu8 => OpCode { code: 0x8C, name: "STY", op: Op::Sty, mode: Mode::Absolute, bytes: 3, flags: flag::NONE, unofficial: false },

    // Transfers
    0xAAu8 => OpCode { code: 0xAA, name: "TAX", op: Op::Tax, mode: Mode::Implied, bytes: 1, flags: flag::ZN, unofficial: false },
    0xA8u8 => OpCode { code: 0xA8, name: "TAY", op: Op::Tay, mode: Mode::Implied, bytes: 1, flags: flag::ZN, unofficial: false },
    0xBAu8 => OpCode { code: 0xBA, name: "TSX", op: Op::Tsx, mode: Mode::Implied, bytes: 1, flags: flag::ZN, unofficial: false },
    0x8Au8 => OpCode { code: 0x8A, name: "TXA", op: Op::Txa, mode: Mode::Implied, bytes: 1, flags: flag::ZN, unofficial: false },
    0x9Au8 => OpCode { code: 0x9A, name: "TXS", op: Op::Txs, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: false },
    0x98u8 => OpCode { code: 0x98, name: "TYA", op: Op::Tya, mode: Mode::Implied, bytes: 1, flags: flag::ZN, unofficial: false },

    // Unofficial opcodes below. Assignments follow the nestest reference
    // table; every remaining byte is covered so decode can never miss.

    // NOP variants (one-byte, immediate "DOP", and absolute "TOP" forms)
    0x1Au8 => OpCode { code: 0x1A, name: "NOP", op: Op::Nop, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x3Au8 => OpCode { code: 0x3A, name: "NOP", op: Op::Nop, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x5Au8 => OpCode { code: 0x5A, name: "NOP", op: Op::Nop, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x7Au8 => OpCode { code: 0x7A, name: "NOP", op: Op::Nop, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0xDAu8 => OpCode { code: 0xDA, name: "NOP", op: Op::Nop, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0xFAu8 => OpCode { code: 0xFA, name: "NOP", op: Op::Nop, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x80u8 => OpCode { code: 0x80, name: "NOP", op: Op::Nop, mode: Mode::Immediate, bytes: 2, flags: flag::NONE, unofficial: true },
    0x82u8 => OpCode { code: 0x82, name: "NOP", op: Op::Nop, mode: Mode::Immediate, bytes: 2, flags: flag::NONE, unofficial: true },
    0x89u8 => OpCode { code: 0x89, name: "NOP", op: Op::Nop, mode: Mode::Immediate, bytes: 2, flags: flag::NONE, unofficial: true },
    0xC2u8 => OpCode { code: 0xC2, name: "NOP", op: Op::Nop, mode: Mode::Immediate, bytes: 2, flags: flag::NONE, unofficial: true },
    0xE2u8 => OpCode { code: 0xE2, name: "NOP", op: Op::Nop, mode: Mode::Immediate, bytes: 2, flags: flag::NONE, unofficial: true },
    0x04u8 => OpCode { code: 0x04, name: "NOP", op: Op::Nop, mode: Mode::ZeroPage, bytes: 2, flags: flag::NONE, unofficial: true },
    0x44u8 => OpCode { code: 0x44, name: "NOP", op: Op::Nop, mode: Mode::ZeroPage, bytes: 2, flags: flag::NONE, unofficial: true },
    0x64u8 => OpCode { code: 0x64, name: "NOP", op: Op::Nop, mode: Mode::ZeroPage, bytes: 2, flags: flag::NONE, unofficial: true },
    0x14u8 => OpCode { code: 0x14, name: "NOP", op: Op::Nop, mode: Mode::ZeroPageX, bytes: 2, flags: flag::NONE, unofficial: true },
    0x34u8 => OpCode { code: 0x34, name: "NOP", op: Op::Nop, mode: Mode::ZeroPageX, bytes: 2, flags: flag::NONE, unofficial: true },
    0x54u8 => OpCode { code: 0x54, name: "NOP", op: Op::Nop, mode: Mode::ZeroPageX, bytes: 2, flags: flag::NONE, unofficial: true },
    0x74u8 => OpCode { code: 0x74, name: "NOP", op: Op::Nop, mode: Mode::ZeroPageX, bytes: 2, flags: flag::NONE, unofficial: true },
    0xD4u8 => OpCode { code: 0xD4, name: "NOP", op: Op::Nop, mode: Mode::ZeroPageX, bytes: 2, flags: flag::NONE, unofficial: true },
    0xF4u8 => OpCode { code: 0xF4, name: "NOP", op: Op::Nop, mode: Mode::ZeroPageX, bytes: 2, flags: flag::NONE, unofficial: true },
    0x0Cu8 => OpCode { code: 0x0C, name: "NOP", op: Op::Nop, mode: Mode::Absolute, bytes: 3, flags: flag::NONE, unofficial: true },
    0x1Cu8 => OpCode { code: 0x1C, name: "NOP", op: Op::Nop, mode: Mode::AbsoluteX, bytes: 3, flags: flag::NONE, unofficial: true },
    0x3Cu8 => OpCode { code: 0x3C, name: "NOP", op: Op::Nop, mode: Mode::AbsoluteX, bytes: 3, flags: flag::NONE, unofficial: true },
    0x5Cu8 => OpCode { code: 0x5C, name: "NOP", op: Op::Nop, mode: Mode::AbsoluteX, bytes: 3, flags: flag::NONE, unofficial: true },
    0x7Cu8 => OpCode { code: 0x7C, name: "NOP", op: Op::Nop, mode: Mode::AbsoluteX, bytes: 3, flags: flag::NONE, unofficial: true },
    0xDCu8 => OpCode { code: 0xDC, name: "NOP", op: Op::Nop, mode: Mode::AbsoluteX, bytes: 3, flags: flag::NONE, unofficial: true },
    0xFCu8 => OpCode { code: 0xFC, name: "NOP", op: Op::Nop, mode: Mode::AbsoluteX, bytes: 3, flags: flag::NONE, unofficial: true },

    // LAX — load A and X together
    0xA3u8 => OpCode { code: 0xA3, name: "LAX", op: Op::Lax, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: true },
    0xA7u8 => OpCode { code: 0xA7, name: "LAX", op: Op::Lax, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: true },
    0xAFu8 => OpCode { code: 0xAF, name: "LAX", op: Op::Lax, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: true },
    0xB3u8 => OpCode { code: 0xB3, name: "LAX", op: Op::Lax, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: true },
    0xB7u8 => OpCode { code: 0xB7, name: "LAX", op: Op::Lax, mode: Mode::ZeroPageY, bytes: 2, flags: flag::ZN, unofficial: true },
    0xBFu8 => OpCode { code: 0xBF, name: "LAX", op: Op::Lax, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: true },

    // SAX — store A AND X
    0x83u8 => OpCode { code: 0x83, name: "SAX", op: Op::Sax, mode: Mode::IndirectX, bytes: 2, flags: flag::NONE, unofficial: true },
    0x87u8 => OpCode { code: 0x87, name: "SAX", op: Op::Sax, mode: Mode::ZeroPage, bytes: 2, flags: flag::NONE, unofficial: true },
    0x8Fu8 => OpCode { code: 0x8F, name: "SAX", op: Op::Sax, mode: Mode::Absolute, bytes: 3, flags: flag::NONE, unofficial: true },
    0x97u8 => OpCode { code: 0x97, name: "SAX", op: Op::Sax, mode: Mode::ZeroPageY, bytes: 2, flags: flag::NONE, unofficial: true },

    // SBC (0xEB behaves exactly like the official immediate SBC)
    0xEBu8 => OpCode { code: 0xEB, name: "SBC", op: Op::Sbc, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: true },

    // DCP — DEC memory then CMP
    0xC3u8 => OpCode { code: 0xC3, name: "DCP", op: Op::Dcp, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: true },
    0xC7u8 => OpCode { code: 0xC7, name: "DCP", op: Op::Dcp, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: true },
    0xCFu8 => OpCode { code: 0xCF, name: "DCP", op: Op::Dcp, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: true },
    0xD3u8 => OpCode { code: 0xD3, name: "DCP", op: Op::Dcp, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: true },
    0xD7u8 => OpCode { code: 0xD7, name: "DCP", op: Op::Dcp, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: true },
    0xDBu8 => OpCode { code: 0xDB, name: "DCP", op: Op::Dcp, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: true },
    0xDFu8 => OpCode { code: 0xDF, name: "DCP", op: Op::Dcp, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: true },

    // ISB — INC memory then SBC
    0xE3u8 => OpCode { code: 0xE3, name: "ISB", op: Op::Isb, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: true },
    0xE7u8 => OpCode { code: 0xE7, name: "ISB", op: Op::Isb, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: true },
    0xEFu8 => OpCode { code: 0xEF, name: "ISB", op: Op::Isb, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: true },
    0xF3u8 => OpCode { code: 0xF3, name: "ISB", op: Op::Isb, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: true },
    0xF7u8 => OpCode { code: 0xF7, name: "ISB", op: Op::Isb, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: true },
    0xFBu8 => OpCode { code: 0xFB, name: "ISB", op: Op::Isb, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: true },
    0xFFu8 => OpCode { code: 0xFF, name: "ISB", op: Op::Isb, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: true },

    // SLO — ASL memory then ORA
    0x03u8 => OpCode { code: 0x03, name: "SLO", op: Op::Slo, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: true },
    0x07u8 => OpCode { code: 0x07, name: "SLO", op: Op::Slo, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: true },
    0x0Fu8 => OpCode { code: 0x0F, name: "SLO", op: Op::Slo, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: true },
    0x13u8 => OpCode { code: 0x13, name: "SLO", op: Op::Slo, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: true },
    0x17u8 => OpCode { code: 0x17, name: "SLO", op: Op::Slo, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: true },
    0x1Bu8 => OpCode { code: 0x1B, name: "SLO", op: Op::Slo, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: true },
    0x1Fu8 => OpCode { code: 0x1F, name: "SLO", op: Op::Slo, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: true },

    // RLA — ROL memory then AND
    0x23u8 => OpCode { code: 0x23, name: "RLA", op: Op::Rla, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: true },
    0x27u8 => OpCode { code: 0x27, name: "RLA", op: Op::Rla, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: true },
    0x2Fu8 => OpCode { code: 0x2F, name: "RLA", op: Op::Rla, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: true },
    0x33u8 => OpCode { code: 0x33, name: "RLA", op: Op::Rla, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: true },
    0x37u8 => OpCode { code: 0x37, name: "RLA", op: Op::Rla, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: true },
    0x3Bu8 => OpCode { code: 0x3B, name: "RLA", op: Op::Rla, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: true },
    0x3Fu8 => OpCode { code: 0x3F, name: "RLA", op: Op::Rla, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: true },

    // SRE — LSR memory then EOR
    0x43u8 => OpCode { code: 0x43, name: "SRE", op: Op::Sre, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: true },
    0x47u8 => OpCode { code: 0x47, name: "SRE", op: Op::Sre, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: true },
    0x4Fu8 => OpCode { code: 0x4F, name: "SRE", op: Op::Sre, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: true },
    0x53u8 => OpCode { code: 0x53, name: "SRE", op: Op::Sre, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: true },
    0x57u8 => OpCode { code: 0x57, name: "SRE", op: Op::Sre, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: true },
    0x5Bu8 => OpCode { code: 0x5B, name: "SRE", op: Op::Sre, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: true },
    0x5Fu8 => OpCode { code: 0x5F, name: "SRE", op: Op::Sre, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: true },

    // RRA — ROR memory then ADC
    0x63u8 => OpCode { code: 0x63, name: "RRA", op: Op::Rra, mode: Mode::IndirectX, bytes: 2, flags: flag::ZN, unofficial: true },
    0x67u8 => OpCode { code: 0x67, name: "RRA", op: Op::Rra, mode: Mode::ZeroPage, bytes: 2, flags: flag::ZN, unofficial: true },
    0x6Fu8 => OpCode { code: 0x6F, name: "RRA", op: Op::Rra, mode: Mode::Absolute, bytes: 3, flags: flag::ZN, unofficial: true },
    0x73u8 => OpCode { code: 0x73, name: "RRA", op: Op::Rra, mode: Mode::IndirectY, bytes: 2, flags: flag::ZN, unofficial: true },
    0x77u8 => OpCode { code: 0x77, name: "RRA", op: Op::Rra, mode: Mode::ZeroPageX, bytes: 2, flags: flag::ZN, unofficial: true },
    0x7Bu8 => OpCode { code: 0x7B, name: "RRA", op: Op::Rra, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: true },
    0x7Fu8 => OpCode { code: 0x7F, name: "RRA", op: Op::Rra, mode: Mode::AbsoluteX, bytes: 3, flags: flag::ZN, unofficial: true },

    // Irregular immediate-mode unofficials
    0x0Bu8 => OpCode { code: 0x0B, name: "ANC", op: Op::Anc, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: true },
    0x2Bu8 => OpCode { code: 0x2B, name: "ANC", op: Op::Anc, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: true },
    0x4Bu8 => OpCode { code: 0x4B, name: "ALR", op: Op::Alr, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: true },
    0x6Bu8 => OpCode { code: 0x6B, name: "ARR", op: Op::Arr, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: true },
    0x8Bu8 => OpCode { code: 0x8B, name: "XAA", op: Op::Xaa, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: true },
    0xABu8 => OpCode { code: 0xAB, name: "LXA", op: Op::Lxa, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: true },
    0xCBu8 => OpCode { code: 0xCB, name: "AXS", op: Op::Axs, mode: Mode::Immediate, bytes: 2, flags: flag::ZN, unofficial: true },

    // High-byte-AND stores and friends
    0x93u8 => OpCode { code: 0x93, name: "AHX", op: Op::Ahx, mode: Mode::IndirectY, bytes: 2, flags: flag::NONE, unofficial: true },
    0x9Fu8 => OpCode { code: 0x9F, name: "AHX", op: Op::Ahx, mode: Mode::AbsoluteY, bytes: 3, flags: flag::NONE, unofficial: true },
    0x9Bu8 => OpCode { code: 0x9B, name: "TAS", op: Op::Tas, mode: Mode::AbsoluteY, bytes: 3, flags: flag::NONE, unofficial: true },
    0x9Cu8 => OpCode { code: 0x9C, name: "SHY", op: Op::Shy, mode: Mode::AbsoluteX, bytes: 3, flags: flag::NONE, unofficial: true },
    0x9Eu8 => OpCode { code: 0x9E, name: "SHX", op: Op::Shx, mode: Mode::AbsoluteY, bytes: 3, flags: flag::NONE, unofficial: true },
    0xBBu8 => OpCode { code: 0xBB, name: "LAS", op: Op::Las, mode: Mode::AbsoluteY, bytes: 3, flags: flag::ZN, unofficial: true },

    // KIL — jams the processor
    0x02u8 => OpCode { code: 0x02, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x12u8 => OpCode { code: 0x12, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x22u8 => OpCode { code: 0x22, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x32u8 => OpCode { code: 0x32, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x42u8 => OpCode { code: 0x42, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x52u8 => OpCode { code: 0x52, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x62u8 => OpCode { code: 0x62, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x72u8 => OpCode { code: 0x72, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0x92u8 => OpCode { code: 0x92, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0xB2u8 => OpCode { code: 0xB2, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0xD2u8 => OpCode { code: 0xD2, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
    0xF2u8 => OpCode { code: 0xF2, name: "KIL", op: Op::Kil, mode: Mode::Implied, bytes: 1, flags: flag::NONE, unofficial: true },
};

// Dense decode table, derived from the map once at startup. phf already
// rejects duplicate keys at compile time; the fill below re-checks while
// building so a registration bug can never decode silently.
static DECODE_TABLE: Lazy<[Option<&'static OpCode>; 256]> = Lazy::new(|| {
    let mut table: [Option<&'static OpCode>; 256] = [None; 256];
    for (code, opcode) in OPCODE_MAP.entries() {
        let slot = &mut table[*code as usize];
        if slot.is_some() {
            panic!("duplicate opcode registration: {:02X}", code);
        }
        *slot = Some(opcode);
    }
    table
});

pub fn decode(code: u8) -> Option<&'static OpCode> {
    DECODE_TABLE[code as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_opcode_byte_is_covered() {
        for code in 0..=0xFFu8 {
            assert!(decode(code).is_some(), "opcode {:02X} is unassigned", code);
        }
    }

    #[test]
    fn entry_codes_match_their_keys() {
        for (code, opcode) in OPCODE_MAP.entries() {
            assert_eq!(*code, opcode.code);
        }
    }

    #[test]
    fn byte_counts_are_consistent_with_modes() {
        for opcode in OPCODE_MAP.values() {
            let expected = match opcode.mode {
                Mode::Implied | Mode::Accumulator => 1,
                Mode::Immediate
                | Mode::ZeroPage
                | Mode::ZeroPageX
                | Mode::ZeroPageY
                | Mode::IndirectX
                | Mode::IndirectY
                | Mode::Relative => 2,
                Mode::Absolute | Mode::AbsoluteX | Mode::AbsoluteY | Mode::Indirect => 3,
            };
            assert_eq!(
                opcode.bytes, expected,
                "opcode {:02X} has byte count {} for {:?}",
                opcode.code, opcode.bytes, opcode.mode
            );
        }
    }

    #[test]
    fn official_count_matches_the_6502() {
        let official = OPCODE_MAP.values().filter(|op| !op.unofficial).count();
        assert_eq!(official, 151);
    }

    #[test]
    fn decode_finds_the_documented_entries() {
        let lda = decode(0xA9).unwrap();
        assert_eq!(lda.name, "LDA");
        assert_eq!(lda.mode, Mode::Immediate);

        let jmp = decode(0x6C).unwrap();
        assert_eq!(jmp.op, Op::Jmp);
        assert_eq!(jmp.mode, Mode::Indirect);

        let isb = decode(0xE7).unwrap();
        assert!(isb.unofficial);
        assert_eq!(isb.name, "ISB");
    }
}
