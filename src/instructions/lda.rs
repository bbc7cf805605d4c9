use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn lda(&mut self, operand: Operand) -> u8 {
        self.accumulator = self.read_operand(operand);
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn lda_loads_the_accumulator() {
        let mut cpu = cpu_with_program(&[0xA9, 0x42]); // LDA #$42
        cpu.step().unwrap();
        assert_eq!(cpu.accumulator, 0x42);
        assert!(!cpu.status.contains(Status::ZERO));
        assert!(!cpu.status.contains(Status::NEGATIVE));
    }

    #[test]
    fn lda_sets_zero_on_zero() {
        let mut cpu = cpu_with_program(&[0xA9, 0x00]);
        cpu.step().unwrap();
        assert!(cpu.status.contains(Status::ZERO));
    }

    #[test]
    fn lda_sets_negative_on_bit_7() {
        let mut cpu = cpu_with_program(&[0xA9, 0x80]);
        cpu.step().unwrap();
        assert!(cpu.status.contains(Status::NEGATIVE));
    }

    #[test]
    fn lda_reads_through_memory_modes() {
        let mut cpu = cpu_with_program(&[0xAD, 0x10, 0x02]); // LDA $0210
        cpu.write_u8(0x0210, 0x5A);
        cpu.step().unwrap();
        assert_eq!(cpu.accumulator, 0x5A);
    }
}
