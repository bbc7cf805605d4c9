use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    pub(crate) fn adc(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand);
        self.add_to_accumulator(value)
    }

    /// Binary-mode adder shared by ADC, SBC, RRA and ISB. The NES 6502
    /// ignores the decimal flag, so there is no BCD path.
    pub(crate) fn add_to_accumulator(&mut self, value: u8) -> u8 {
        let carry_in = self.status.contains(Status::CARRY) as u16;
        let sum = self.accumulator as u16 + value as u16 + carry_in;
        let result = sum as u8;

        self.status.set(Status::CARRY, sum > 0xFF);
        // Signed overflow: both operands agree on sign and the result
        // disagrees with them.
        let overflow = (self.accumulator ^ result) & (value ^ result) & 0x80 != 0;
        self.status.set(Status::OVERFLOW, overflow);

        self.accumulator = result;
        result
    }
}
