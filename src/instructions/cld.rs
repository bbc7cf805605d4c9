use crate::cpu::Cpu;
use crate::status::Status;

impl Cpu {
    // The decimal flag is stored and pushed even though the NES ALU never
    // consults it.
    pub(crate) fn cld(&mut self) -> u8 {
        self.status.remove(Status::DECIMAL);
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::test_support::cpu_with_program;
    use crate::status::Status;

    #[test]
    fn cld_clears_the_decimal_flag() {
        let mut cpu = cpu_with_program(&[0xD8]); // CLD
        cpu.status = Status::from_bits_truncate(0x2C);
        cpu.step().unwrap();
        assert_eq!(cpu.status.bits(), 0x24);
    }
}
