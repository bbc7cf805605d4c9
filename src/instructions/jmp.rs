use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(crate) fn jmp(&mut self, operand: Operand) -> u8 {
        self.program_counter = self.operand_address(operand);
        0
    }
}
