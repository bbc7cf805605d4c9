use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    // ALR is AND followed by a right shift of the accumulator.
    pub(crate) fn alr(&mut self, operand: Operand) -> u8 {
        let masked = self.accumulator & self.read_operand(operand);
        self.status.set(Status::CARRY, masked & 0x01 != 0);
        self.accumulator = masked >> 1;
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn alr_masks_then_shifts() {
        let mut cpu = cpu_with_program(&[0x4B, 0x03]); // ALR #$03
        cpu.accumulator = 0x03;
        cpu.step().unwrap();
        assert_eq!(cpu.accumulator, 0x01);
        assert!(cpu.status.contains(Status::CARRY));
    }
}
