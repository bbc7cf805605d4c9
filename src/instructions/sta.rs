use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn sta(&mut self, operand: Operand) -> u8 {
        self.write_operand(operand, self.accumulator);
        0
    }
}
