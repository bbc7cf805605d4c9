use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    // AXS (SBX) subtracts the operand from A AND X, without borrow, and
    // leaves the result in X.
    pub(crate) fn axs(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand);
        let masked = self.accumulator & self.x_register;
        self.status.set(Status::CARRY, masked >= value);
        self.x_register = masked.wrapping_sub(value);
        self.x_register
    }
}
