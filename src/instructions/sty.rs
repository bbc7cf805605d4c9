use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn sty(&mut self, operand: Operand) -> u8 {
        self.write_operand(operand, self.y_register);
        0
    }
}
