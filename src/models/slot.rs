use crate::models::color::{Channel, Color, HslOffsets};
use crate::models::error::{PaletteError, Result};

/// One color position in a palette.
///
/// `base` is only replaced by generation or a snapshot load. Channel
/// adjustments edit `offsets` and recompute `current` from them.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSlot {
    base: Color,
    offsets: HslOffsets,
    current: Color,
    locked: bool,
}

impl PaletteSlot {
    pub fn new(base: Color) -> Self {
        Self {
            base,
            offsets: base.to_hsl(),
            current: base,
            locked: false,
        }
    }

    /// Adopts a new base color and resets the offsets to its decomposition.
    pub fn reset(&mut self, base: Color) {
        self.base = base;
        self.offsets = base.to_hsl();
        self.current = base;
    }

    pub fn base(&self) -> Color {
        self.base
    }

    /// The displayed color
    pub fn current(&self) -> Color {
        self.current
    }

    pub fn offsets(&self) -> HslOffsets {
        self.offsets
    }

    pub fn channel(&self, channel: Channel) -> f32 {
        self.offsets.get(channel)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }

    /// Overrides one channel and returns the recomputed displayed color.
    pub fn adjust(&mut self, channel: Channel, value: f32) -> Result<Color> {
        if !channel.contains(value) {
            return Err(PaletteError::ValueOutOfRange { channel, value });
        }

        self.offsets.set(channel, value);
        self.current = Color::from_hsl(self.offsets);
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_matches_base() {
        let base: Color = "#336699".parse().unwrap();
        let slot = PaletteSlot::new(base);
        assert_eq!(slot.base(), base);
        assert_eq!(slot.current(), base);
        assert_eq!(slot.offsets(), base.to_hsl());
        assert!(!slot.is_locked());
    }

    #[test]
    fn test_adjust_keeps_base() {
        let base: Color = "#336699".parse().unwrap();
        let mut slot = PaletteSlot::new(base);

        let shifted = slot.adjust(Channel::Hue, 30.0).unwrap();
        assert_ne!(shifted, base);
        assert_eq!(slot.base(), base);
        assert_eq!(slot.current(), shifted);
        assert_eq!(slot.channel(Channel::Hue), 30.0);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut slot = PaletteSlot::new("#336699".parse().unwrap());
        slot.adjust(Channel::Saturation, 0.2).unwrap();
        slot.adjust(Channel::Lightness, 0.8).unwrap();
        slot.adjust(Channel::Hue, 120.0).unwrap();

        assert_eq!(slot.channel(Channel::Saturation), 0.2);
        assert_eq!(slot.channel(Channel::Lightness), 0.8);
        assert_eq!(slot.channel(Channel::Hue), 120.0);
    }

    #[test]
    fn test_adjust_rejects_out_of_range() {
        let mut slot = PaletteSlot::new(Color::WHITE);
        let before = slot.clone();

        assert!(matches!(
            slot.adjust(Channel::Hue, 361.0),
            Err(PaletteError::ValueOutOfRange {
                channel: Channel::Hue,
                ..
            })
        ));
        assert!(slot.adjust(Channel::Lightness, -0.5).is_err());
        assert_eq!(slot, before);
    }

    #[test]
    fn test_toggle_lock_twice_is_identity() {
        let mut slot = PaletteSlot::new(Color::BLACK);
        assert!(slot.toggle_lock());
        assert!(!slot.toggle_lock());
    }

    #[test]
    fn test_reset_discards_adjustments() {
        let mut slot = PaletteSlot::new("#336699".parse().unwrap());
        slot.adjust(Channel::Hue, 10.0).unwrap();

        let adjusted = slot.current();
        slot.reset(adjusted);
        assert_eq!(slot.base(), adjusted);
        assert_eq!(slot.current(), adjusted);
        assert_eq!(slot.offsets(), adjusted.to_hsl());
    }
}
