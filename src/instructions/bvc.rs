use crate::cpu::{Cpu, Operand};
use crate::status::Status;

impl Cpu {
    pub(crate) fn bvc(&mut self, operand: Operand) -> u8 {
        self.branch_if(operand, !self.status.contains(Status::OVERFLOW))
    }
}
