use crate::cpu::{Cpu, Operand};

impl Cpu {
    // ISB (also listed as ISC) increments memory, then subtracts the new
    // value from A. Flags follow the subtraction.
    pub(crate) fn isb(&mut self, operand: Operand) -> u8 {
        let value = self.read_operand(operand).wrapping_add(1);
        self.write_operand(operand, value);
        self.add_to_accumulator(value ^ 0xFF)
    }
}
