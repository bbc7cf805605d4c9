use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn dec(&mut self, operand: Operand) -> u8 {
        let result = self.read_operand(operand).wrapping_sub(1);
        self.write_operand(operand, result);
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn dec_decrements_memory() {
        let mut cpu = cpu_with_program(&[0xC6, 0x10]); // DEC $10
        cpu.write_u8(0x0010, 0x01);
        cpu.step().unwrap();
        assert_eq!(cpu.read_u8(0x0010), 0x00);
        assert!(cpu.status.contains(Status::ZERO));
    }

    #[test]
    fn dec_wraps_below_zero() {
        let mut cpu = cpu_with_program(&[0xC6, 0x10]); // DEC $10
        cpu.write_u8(0x0010, 0x00);
        cpu.step().unwrap();
        assert_eq!(cpu.read_u8(0x0010), 0xFF);
        assert!(cpu.status.contains(Status::NEGATIVE));
    }
}
