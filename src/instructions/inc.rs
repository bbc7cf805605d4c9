use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn inc(&mut self, operand: Operand) -> u8 {
        let result = self.read_operand(operand).wrapping_add(1);
        self.write_operand(operand, result);
        result
    }
}
