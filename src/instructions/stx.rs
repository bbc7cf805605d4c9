use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn stx(&mut self, operand: Operand) -> u8 {
        self.write_operand(operand, self.x_register);
        0
    }
}
