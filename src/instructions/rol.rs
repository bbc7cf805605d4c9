use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    pub(crate) fn rol(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand);
        let carry_in = self.status.contains(Status::CARRY) as u8;
        self.status.set(Status::CARRY, value & 0x80 != 0);
        let result = (value << 1) | carry_in;
        self.write_operand(operand, result);
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn rol_rotates_through_carry() {
        let mut cpu = cpu_with_program(&[0x2A]); // ROL A
        cpu.accumulator = 0b1000_0000;
        cpu.status.insert(Status::CARRY);
        cpu.step().unwrap();
        assert_eq!(cpu.accumulator, 0b0000_0001);
        assert!(cpu.status.contains(Status::CARRY));
    }

    #[test]
    fn rol_on_memory_writes_back() {
        let mut cpu = cpu_with_program(&[0x26, 0x30]); // ROL $30
        cpu.write_u8(0x0030, 0x40);
        cpu.step().unwrap();
        assert_eq!(cpu.read_u8(0x0030), 0x80);
        assert!(!cpu.status.contains(Status::CARRY));
        assert!(cpu.status.contains(Status::NEGATIVE));
    }
}
