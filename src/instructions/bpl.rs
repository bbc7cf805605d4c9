use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    pub(crate) fn bpl(&mut self, operand: Operand) -> u8 {
        self.branch_if(operand, !self.status.contains(Status::NEGATIVE))
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn bpl_branches_backwards_on_positive() {
        let mut cpu = cpu_with_program(&[0xEA, 0xEA, 0x10, 0xFC]); // ... BPL -4
        cpu.step().unwrap();
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.program_counter, 0xC000);
    }

    #[test]
    fn bpl_not_taken_on_negative() {
        let mut cpu = cpu_with_program(&[0x10, 0x05]);
        cpu.status.insert(Status::NEGATIVE);
        cpu.step().unwrap();
        assert_eq!(cpu.program_counter, 0xC002);
    }
}
