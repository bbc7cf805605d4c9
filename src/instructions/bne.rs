use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    pub(crate) fn bne(&mut self, operand: Operand) -> u8 {
        self.branch_if(operand, !self.status.contains(Status::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;

    #[test]
    fn bne_counts_down_a_loop() {
        // LDX #$03 ; DEX ; BNE -3 — runs the DEX three times.
        let mut cpu = cpu_with_program(&[0xA2, 0x03, 0xCA, 0xD0, 0xFD]);
        for _ in 0..7 {
            cpu.step().unwrap();
        }
        assert_eq!(cpu.x_register, 0x00);
        assert_eq!(cpu.program_counter, 0xC005);
    }
}
