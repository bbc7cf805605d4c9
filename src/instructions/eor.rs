use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn eor(&mut self, operand: Operand) -> u8 {
        self.accumulator ^= self.read_operand(operand);
        self.accumulator
    }
}
