use crate::cpu::Cpu;
use crate::status::Status;

impl Cpu {
    // Every flag is overwritten from the stack except break and unused,
    // which keep their in-register values.
    pub(crate) fn plp(&mut self) -> u8 {
        let pulled = Status::from_bits_truncate(self.pull());
        let kept = self.status & (Status::BREAK | Status::UNUSED);
        self.status = (pulled - (Status::BREAK | Status::UNUSED)) | kept;
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;

    #[test]
    fn plp_restores_flags_but_not_b_and_u() {
        let mut cpu = cpu_with_program(&[0x28]); // PLP
        // Stack byte has every bit set, including B.
        cpu.push(0xFF);
        cpu.step().unwrap();
        // B stays clear and U stays set, as they were in the register.
        assert_eq!(cpu.status.bits(), 0xEF);
    }

    #[test]
    fn plp_round_trips_with_php_modulo_the_stack_bits() {
        let mut cpu = cpu_with_program(&[0x08, 0x28]); // PHP ; PLP
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(cpu.status.bits(), 0x24);
        assert_eq!(cpu.stack_pointer, 0xFD);
    }
}
