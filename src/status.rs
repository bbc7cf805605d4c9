use bitflags::bitflags;

bitflags! {
    // Status register P, one bit per flag:
    // 7  bit  0
    // ---- ----
    // NVUB DIZC
    // Bit 5 ("unused") reads as 1 whenever the register is pushed; bit 4
    // ("break") only ever exists on the stack copy, never in the register.
    pub struct Status: u8 {
        const CARRY             = 0b0000_0001;
        const ZERO              = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL           = 0b0000_1000;
        const BREAK             = 0b0001_0000;
        const UNUSED            = 0b0010_0000;
        const OVERFLOW          = 0b0100_0000;
        const NEGATIVE          = 0b1000_0000;
    }
}

impl Status {
    /// Register value after reset: interrupts disabled, unused bit high.
    pub fn power_on() -> Status {
        Status::INTERRUPT_DISABLE | Status::UNUSED
    }

    /// The "Z from zero, N from bit 7" convention shared by loads,
    /// transfers, arithmetic and shifts.
    pub fn set_zero_negative(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_on_value_is_0x24() {
        assert_eq!(Status::power_on().bits(), 0x24);
    }

    #[test]
    fn flag_bits_match_hardware_positions() {
        assert_eq!(Status::CARRY.bits(), 1 << 0);
        assert_eq!(Status::ZERO.bits(), 1 << 1);
        assert_eq!(Status::INTERRUPT_DISABLE.bits(), 1 << 2);
        assert_eq!(Status::DECIMAL.bits(), 1 << 3);
        assert_eq!(Status::BREAK.bits(), 1 << 4);
        assert_eq!(Status::UNUSED.bits(), 1 << 5);
        assert_eq!(Status::OVERFLOW.bits(), 1 << 6);
        assert_eq!(Status::NEGATIVE.bits(), 1 << 7);
    }

    #[test]
    fn set_zero_negative_tracks_the_value() {
        let mut status = Status::power_on();

        status.set_zero_negative(0x00);
        assert!(status.contains(Status::ZERO));
        assert!(!status.contains(Status::NEGATIVE));

        status.set_zero_negative(0x80);
        assert!(!status.contains(Status::ZERO));
        assert!(status.contains(Status::NEGATIVE));

        status.set_zero_negative(0x01);
        assert!(!status.contains(Status::ZERO));
        assert!(!status.contains(Status::NEGATIVE));
    }
}
