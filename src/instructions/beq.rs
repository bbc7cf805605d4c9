use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    pub(crate) fn beq(&mut self, operand: Operand) -> u8 {
        self.branch_if(operand, self.status.contains(Status::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn beq_minus_two_loops_on_itself() {
        // BEQ -2 with Z set branches back to its own first byte.
        let mut cpu = cpu_with_program(&[0xF0, 0xFE]);
        cpu.status.insert(Status::ZERO);
        cpu.step().unwrap();
        assert_eq!(cpu.program_counter, 0xC000);
    }

    #[test]
    fn beq_not_taken_with_zero_clear() {
        let mut cpu = cpu_with_program(&[0xF0, 0xFE]);
        cpu.step().unwrap();
        assert_eq!(cpu.program_counter, 0xC002);
    }
}
