use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    // SLO shifts memory left, then ORs the shifted value into A.
    pub(crate) fn slo(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand);
        self.status.set(Status::CARRY, value & 0x80 != 0);
        let shifted = value << 1;
        self.write_operand(operand, shifted);
        self.accumulator |= shifted;
        self.accumulator
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn slo_shifts_memory_and_ors_into_a() {
        let mut cpu = cpu_with_program(&[0x07, 0x10]); // SLO $10
        cpu.write_u8(0x0010, 0b1100_0000);
        cpu.accumulator = 0b0000_0001;
        cpu.step().unwrap();
        assert_eq!(cpu.read_u8(0x0010), 0b1000_0000);
        assert_eq!(cpu.accumulator, 0b1000_0001);
        assert!(cpu.status.contains(Status::CARRY));
        assert!(cpu.status.contains(Status::NEGATIVE));
    }
}
