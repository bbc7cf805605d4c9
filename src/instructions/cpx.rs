use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn cpx(&mut self, operand: Operand) -> u8 {
        self.compare(self.x_register, operand)
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn cpx_compares_against_x() {
        let mut cpu = cpu_with_program(&[0xE0, 0x05]); // CPX #$05
        cpu.x_register = 0x05;
        cpu.step().unwrap();
        assert!(cpu.status.contains(Status::CARRY));
        assert!(cpu.status.contains(Status::ZERO));
        assert_eq!(cpu.x_register, 0x05);
    }
}
