use core::ops::{BitAnd, BitOr};

use bitfield_struct::bitfield;

/// Lock keys defined in the HID spec 11.1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedIndicatorType {
    NumLock,
    CapsLock,
    ScrollLock,
    Compose,
    Kana,
}

/// Host reported lock state, one bit per lock key.
///
/// The bit order follows the HID LED usage page, so the raw byte from an
/// output report can be converted with [`LedIndicator::from_bits`].
#[bitfield(u8, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct LedIndicator {
    #[bits(1)]
    pub num_lock: bool,
    #[bits(1)]
    pub caps_lock: bool,
    #[bits(1)]
    pub scroll_lock: bool,
    #[bits(1)]
    pub compose: bool,
    #[bits(1)]
    pub kana: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for LedIndicator {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl BitAnd for LedIndicator {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}

impl LedIndicator {
    pub const NUM_LOCK: Self = Self::new().with_num_lock(true);
    pub const CAPS_LOCK: Self = Self::new().with_caps_lock(true);
    pub const SCROLL_LOCK: Self = Self::new().with_scroll_lock(true);
    pub const COMPOSE: Self = Self::new().with_compose(true);
    pub const KANA: Self = Self::new().with_kana(true);

    /// Check whether the given lock key is active
    pub const fn is_active(&self, indicator: LedIndicatorType) -> bool {
        match indicator {
            LedIndicatorType::NumLock => self.num_lock(),
            LedIndicatorType::CapsLock => self.caps_lock(),
            LedIndicatorType::ScrollLock => self.scroll_lock(),
            LedIndicatorType::Compose => self.compose(),
            LedIndicatorType::Kana => self.kana(),
        }
    }
}
