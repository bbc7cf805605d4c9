use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    // Z follows A AND memory through the table mask; N and V are copied
    // straight from bits 7 and 6 of the memory value.
    pub(crate) fn bit(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand);
        self.status.set(Status::NEGATIVE, value & 0x80 != 0);
        self.status.set(Status::OVERFLOW, value & 0x40 != 0);
        self.accumulator & value
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn bit_copies_high_bits_and_tests_the_mask() {
        let mut cpu = cpu_with_program(&[0x24, 0x10]); // BIT $10
        cpu.write_u8(0x0010, 0xC0);
        cpu.accumulator = 0x0F;
        cpu.step().unwrap();
        assert!(cpu.status.contains(Status::NEGATIVE));
        assert!(cpu.status.contains(Status::OVERFLOW));
        // A AND $C0 is zero.
        assert!(cpu.status.contains(Status::ZERO));
        assert_eq!(cpu.accumulator, 0x0F);
    }

    #[test]
    fn bit_clears_zero_when_bits_overlap() {
        let mut cpu = cpu_with_program(&[0x2C, 0x00, 0x02]); // BIT $0200
        cpu.write_u8(0x0200, 0x01);
        cpu.accumulator = 0x01;
        cpu.step().unwrap();
        assert!(!cpu.status.contains(Status::ZERO));
        assert!(!cpu.status.contains(Status::NEGATIVE));
        assert!(!cpu.status.contains(Status::OVERFLOW));
    }
}
