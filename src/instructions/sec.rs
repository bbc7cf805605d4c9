use crate::cpu::Cpu;
use crate::status::Status;

impl Cpu {
    pub(crate) fn sec(&mut self) -> u8 {
        self.status.insert(Status::CARRY);
        0
    }
}
