use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    // Shifts operate on the accumulator or on memory depending on the
    // addressing mode; the operand abstraction covers both.
    pub(crate) fn asl(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand);
        self.status.set(Status::CARRY, value & 0x80 != 0);
        let result = value << 1;
        self.write_operand(operand, result);
        result
    }
}
