use crate::cpu::Cpu;
use crate::opcodes::{self, AddressingMode, OpCode, Operation};

/// Formats the instruction at the current PC in the nestest log layout:
///
/// ```text
/// C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD
/// ```
///
/// Columns: PC, the instruction bytes padded to width 8, the mnemonic
/// right-aligned in 4 (so the `*` marking unofficial opcodes sits in the
/// gap), the disassembled operand with nestest's memory annotations, the
/// whole left side padded to width 47, then the register tail. Emit this
/// before stepping to mirror the reference log.
pub fn trace(cpu: &Cpu) -> String {
    let pc = cpu.program_counter;
    let code = cpu.read_u8(pc);

    let left = match opcodes::decode(code) {
        Some(opcode) => {
            let mut bytes = vec![code];
            for offset in 1..opcode.bytes as u16 {
                bytes.push(cpu.read_u8(pc.wrapping_add(offset)));
            }
            let hex = bytes
                .iter()
                .map(|byte| format!("{:02X}", byte))
                .collect::<Vec<_>>()
                .join(" ");
            let mnemonic = if opcode.unofficial {
                format!("*{}", opcode.name)
            } else {
                opcode.name.to_string()
            };
            format!("{:04X}  {:8} {:>4} {}", pc, hex, mnemonic, disassemble(cpu, opcode, pc))
        }
        // Unreachable with the full table, but a diagnostic should degrade
        // to showing the raw byte rather than panicking.
        None => format!("{:04X}  {:02X}       ???", pc, code),
    };

    format!(
        "{:47} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
        left.trim_end(),
        cpu.accumulator,
        cpu.x_register,
        cpu.y_register,
        cpu.status.bits(),
        cpu.stack_pointer
    )
}

// The annotations show the memory the instruction will touch: intermediate
// pointers for the indirect modes, the effective address for the indexed
// ones, and the byte currently stored there. Bus reads here are free of
// side effects, so peeking ahead of execution is safe.
fn disassemble(cpu: &Cpu, opcode: &OpCode, pc: u16) -> String {
    let byte1 = cpu.read_u8(pc.wrapping_add(1));
    let byte2 = cpu.read_u8(pc.wrapping_add(2));

    match opcode.mode {
        AddressingMode::Implied => String::new(),

        AddressingMode::Accumulator => "A".to_string(),

        AddressingMode::Immediate => format!("#${:02X}", byte1),

        AddressingMode::ZeroPage => {
            format!("${:02X} = {:02X}", byte1, cpu.read_u8(byte1 as u16))
        }

        AddressingMode::ZeroPageX => {
            let addr = byte1.wrapping_add(cpu.x_register);
            format!("${:02X},X @ {:02X} = {:02X}", byte1, addr, cpu.read_u8(addr as u16))
        }

        AddressingMode::ZeroPageY => {
            let addr = byte1.wrapping_add(cpu.y_register);
            format!("${:02X},Y @ {:02X} = {:02X}", byte1, addr, cpu.read_u8(addr as u16))
        }

        AddressingMode::Absolute => {
            let addr = u16::from_le_bytes([byte1, byte2]);
            // Jumps show only the target; everything else also shows the
            // byte stored there.
            if matches!(opcode.op, Operation::Jmp | Operation::Jsr) {
                format!("${:04X}", addr)
            } else {
                format!("${:04X} = {:02X}", addr, cpu.read_u8(addr))
            }
        }

        AddressingMode::AbsoluteX => {
            let base = u16::from_le_bytes([byte1, byte2]);
            let addr = base.wrapping_add(cpu.x_register as u16);
            format!("${:04X},X @ {:04X} = {:02X}", base, addr, cpu.read_u8(addr))
        }

        AddressingMode::AbsoluteY => {
            let base = u16::from_le_bytes([byte1, byte2]);
            let addr = base.wrapping_add(cpu.y_register as u16);
            format!("${:04X},Y @ {:04X} = {:02X}", base, addr, cpu.read_u8(addr))
        }

        AddressingMode::Indirect => {
            let ptr = u16::from_le_bytes([byte1, byte2]);
            let low = cpu.read_u8(ptr);
            // Same page-boundary bug as execution, so the log shows the
            // address the jump will really take.
            let high = if ptr & 0x00FF == 0x00FF {
                cpu.read_u8(ptr & 0xFF00)
            } else {
                cpu.read_u8(ptr.wrapping_add(1))
            };
            format!("(${:04X}) = {:04X}", ptr, u16::from_le_bytes([low, high]))
        }

        AddressingMode::IndirectX => {
            let ptr = byte1.wrapping_add(cpu.x_register);
            let low = cpu.read_u8(ptr as u16);
            let high = cpu.read_u8(ptr.wrapping_add(1) as u16);
            let addr = u16::from_le_bytes([low, high]);
            format!(
                "(${:02X},X) @ {:02X} = {:04X} = {:02X}",
                byte1,
                ptr,
                addr,
                cpu.read_u8(addr)
            )
        }

        AddressingMode::IndirectY => {
            let low = cpu.read_u8(byte1 as u16);
            let high = cpu.read_u8(byte1.wrapping_add(1) as u16);
            let base = u16::from_le_bytes([low, high]);
            let addr = base.wrapping_add(cpu.y_register as u16);
            format!(
                "(${:02X}),Y = {:04X} @ {:04X} = {:02X}",
                byte1,
                base,
                addr,
                cpu.read_u8(addr)
            )
        }

        AddressingMode::Relative => {
            let target = pc.wrapping_add(2).wrapping_add(byte1 as i8 as u16);
            format!("${:04X}", target)
        }
    }
}
