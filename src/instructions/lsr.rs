use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    pub(crate) fn lsr(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand);
        self.status.set(Status::CARRY, value & 0x01 != 0);
        let result = value >> 1;
        self.write_operand(operand, result);
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn lsr_shifts_bit_zero_into_carry() {
        let mut cpu = cpu_with_program(&[0x4A]); // LSR A
        cpu.accumulator = 0b0000_0011;
        cpu.step().unwrap();
        assert_eq!(cpu.accumulator, 0b0000_0001);
        assert!(cpu.status.contains(Status::CARRY));
        assert!(!cpu.status.contains(Status::NEGATIVE));
    }

    #[test]
    fn lsr_to_zero_sets_the_zero_flag() {
        let mut cpu = cpu_with_program(&[0x46, 0x20]); // LSR $20
        cpu.write_u8(0x0020, 0x01);
        cpu.step().unwrap();
        assert_eq!(cpu.read_u8(0x0020), 0x00);
        assert!(cpu.status.contains(Status::ZERO));
        assert!(cpu.status.contains(Status::CARRY));
    }
}
