//! Button events from the keymap's output and BLE profile keys

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    Press,
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Select a BLE profile
    BleSelect(u8),
    /// Toggle output between USB and BLE
    OutputToggle,
    /// Force BLE output
    OutputBle,
    /// Force USB output
    OutputUsb,
}

/// Output or profile button event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub id: ButtonId,
    pub action: ButtonAction,
}

impl ButtonEvent {
    pub fn press(id: ButtonId) -> Self {
        Self {
            id,
            action: ButtonAction::Press,
        }
    }

    pub fn release(id: ButtonId) -> Self {
        Self {
            id,
            action: ButtonAction::Release,
        }
    }

    pub fn is_press(&self) -> bool {
        self.action == ButtonAction::Press
    }
}
