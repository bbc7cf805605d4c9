use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    pub(crate) fn bcs(&mut self, operand: Operand) -> u8 {
        self.branch_if(operand, self.status.contains(Status::CARRY))
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn bcs_branches_when_carry_is_set() {
        let mut cpu = cpu_with_program(&[0xB0, 0x04]); // BCS +4
        cpu.status.insert(Status::CARRY);
        cpu.step().unwrap();
        assert_eq!(cpu.program_counter, 0xC006);
    }
}
