use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn cpy(&mut self, operand: Operand) -> u8 {
        self.compare(self.y_register, operand)
    }
}
