use crate::cpu::{Cpu, Operand};

impl Cpu {
    // XAA (ANE) is highly unstable on hardware; the conventional stable
    // model is A = A AND X AND the immediate.
    pub(crate) fn xaa(&mut self, operand: Operand) -> u8 {
        self.accumulator &= self.x_register & self.read_operand(operand);
        self.accumulator
    }
}
