use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    // ARR is AND followed by a rotate right, with carry and overflow read
    // out of bits 6 and 5 of the rotated result.
    pub(crate) fn arr(&mut self, operand: Operand) -> u8 {
        let masked = self.accumulator & self.read_operand(operand);
        let carry_in = (self.status.contains(Status::CARRY) as u8) << 7;
        let result = (masked >> 1) | carry_in;
        self.accumulator = result;
        self.status.set(Status::CARRY, result & 0x40 != 0);
        self.status
            .set(Status::OVERFLOW, ((result >> 6) ^ (result >> 5)) & 0x01 != 0);
        result
    }
}
