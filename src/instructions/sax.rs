use crate::cpu::{Cpu, Operand};

impl Cpu {
    // SAX stores A AND X without touching any flags.
    pub(crate) fn sax(&mut self, operand: Operand) -> u8 {
        self.write_operand(operand, self.accumulator & self.x_register);
        0
    }
}
