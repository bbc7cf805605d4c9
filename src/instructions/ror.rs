use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    pub(crate) fn ror(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand);
        let carry_in = (self.status.contains(Status::CARRY) as u8) << 7;
        self.status.set(Status::CARRY, value & 0x01 != 0);
        let result = (value >> 1) | carry_in;
        self.write_operand(operand, result);
        result
    }
}
