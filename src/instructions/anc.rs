use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    // ANC is AND with the carry mirroring the result's sign bit.
    pub(crate) fn anc(&mut self, operand: Operand) -> u8 {
        self.accumulator &= self.read_operand(operand);
        self.status.set(Status::CARRY, self.accumulator & 0x80 != 0);
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn anc_copies_the_sign_into_carry() {
        let mut cpu = cpu_with_program(&[0x0B, 0xFF]); // ANC #$FF
        cpu.accumulator = 0x80;
        cpu.step().unwrap();
        assert_eq!(cpu.accumulator, 0x80);
        assert!(cpu.status.contains(Status::CARRY));
        assert!(cpu.status.contains(Status::NEGATIVE));
    }

    #[test]
    fn anc_clears_carry_on_positive_results() {
        let mut cpu = cpu_with_program(&[0x2B, 0x7F]); // ANC #$7F
        cpu.accumulator = 0xFF;
        cpu.step().unwrap();
        assert_eq!(cpu.accumulator, 0x7F);
        assert!(!cpu.status.contains(Status::CARRY));
    }
}
