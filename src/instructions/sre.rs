use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    // SRE shifts memory right, then XORs the shifted value into A.
    pub(crate) fn sre(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand);
        self.status.set(Status::CARRY, value & 0x01 != 0);
        let shifted = value >> 1;
        self.write_operand(operand, shifted);
        self.accumulator ^= shifted;
        self.accumulator
    }
}
