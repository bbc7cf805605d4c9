use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    // DCP decrements memory, then compares A against the decremented value.
    pub(crate) fn dcp(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand).wrapping_sub(1);
        self.write_operand(operand, value);
        self.status.set(Status::CARRY, self.accumulator >= value);
        self.accumulator.wrapping_sub(value)
    }
}
