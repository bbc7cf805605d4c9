use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    pub(crate) fn bmi(&mut self, operand: Operand) -> u8 {
        self.branch_if(operand, self.status.contains(Status::NEGATIVE))
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn bmi_branches_on_negative() {
        let mut cpu = cpu_with_program(&[0x30, 0x02]); // BMI +2
        cpu.status.insert(Status::NEGATIVE);
        cpu.step().unwrap();
        assert_eq!(cpu.program_counter, 0xC004);
    }
}
