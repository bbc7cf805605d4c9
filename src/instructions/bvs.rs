use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    pub(crate) fn bvs(&mut self, operand: Operand) -> u8 {
        self.branch_if(operand, self.status.contains(Status::OVERFLOW))
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn bvs_branches_with_overflow_set() {
        let mut cpu = cpu_with_program(&[0x70, 0x06]); // BVS +6
        cpu.status.insert(Status::OVERFLOW);
        cpu.step().unwrap();
        assert_eq!(cpu.program_counter, 0xC008);
    }
}
