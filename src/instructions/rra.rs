use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    // RRA rotates memory right through the carry, then adds the rotated
    // value to A; the rotate's carry-out feeds the addition.
    pub(crate) fn rra(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand);
        let carry_in = (self.status.contains(Status::CARRY) as u8) << 7;
        self.status.set(Status::CARRY, value & 0x01 != 0);
        let rotated = (value >> 1) | carry_in;
        self.write_operand(operand, rotated);
        self.add_to_accumulator(rotated)
    }
}
