use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    // RLA rotates memory left through the carry, then ANDs the rotated
    // value into A.
    pub(crate) fn rla(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand);
        let carry_in = self.status.contains(Status::CARRY) as u8;
        self.status.set(Status::CARRY, value & 0x80 != 0);
        let rotated = (value << 1) | carry_in;
        self.write_operand(operand, rotated);
        self.accumulator &= rotated;
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn rla_rotates_memory_and_ands_into_a() {
        let mut cpu = cpu_with_program(&[0x27, 0x10]); // RLA $10
        cpu.write_u8(0x0010, 0b0100_0001);
        cpu.accumulator = 0b1000_0011;
        cpu.status.insert(Status::CARRY);
        cpu.step().unwrap();
        assert_eq!(cpu.read_u8(0x0010), 0b1000_0011);
        assert_eq!(cpu.accumulator, 0b1000_0011);
        assert!(!cpu.status.contains(Status::CARRY));
        assert!(cpu.status.contains(Status::NEGATIVE));
    }

    #[test]
    fn rla_matches_rol_then_and() {
        let mut fused = cpu_with_program(&[0x27, 0x10]); // RLA $10
        fused.write_u8(0x0010, 0b1100_0101);
        fused.accumulator = 0xB7;
        fused.status.insert(Status::CARRY);
        fused.step().unwrap();

        let mut split = cpu_with_program(&[0x26, 0x10, 0x25, 0x10]); // ROL ; AND
        split.write_u8(0x0010, 0b1100_0101);
        split.accumulator = 0xB7;
        split.status.insert(Status::CARRY);
        split.step().unwrap();
        split.step().unwrap();

        assert_eq!(fused.read_u8(0x0010), split.read_u8(0x0010));
        assert_eq!(fused.accumulator, split.accumulator);
        assert_eq!(fused.status, split.status);
    }
}
