use crate::models::color::{Channel, Color, random_color};
use crate::models::error::{PaletteError, Result};
use crate::models::slot::PaletteSlot;
use rand::Rng;
use tracing::debug;

/// The working palette: a fixed number of slots.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteState {
    slots: Vec<PaletteSlot>,
}

impl PaletteState {
    /// Creates a palette of `size` random colors.
    pub fn random(size: usize) -> Self {
        Self::random_with(size, &mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let slots = (0..size)
            .map(|_| PaletteSlot::new(random_color(rng)))
            .collect();
        Self { slots }
    }

    #[cfg(test)]
    pub fn from_colors(colors: &[Color]) -> Self {
        Self {
            slots: colors.iter().copied().map(PaletteSlot::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[PaletteSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Result<&PaletteSlot> {
        let len = self.slots.len();
        self.slots
            .get(index)
            .ok_or(PaletteError::IndexOutOfRange { index, len })
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut PaletteSlot> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(PaletteError::IndexOutOfRange { index, len })
    }

    /// Rerolls every unlocked slot.
    pub fn generate(&mut self) -> &Self {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Rerolls every unlocked slot using `rng`.
    ///
    /// Locked slots adopt their displayed color as the new base, so they look
    /// the same but lose any pending channel adjustments.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Self {
        for slot in &mut self.slots {
            let base = if slot.is_locked() {
                slot.current()
            } else {
                random_color(rng)
            };
            slot.reset(base);
        }

        debug!(
            locked = self.slots.iter().filter(|s| s.is_locked()).count(),
            "Generated palette"
        );
        self
    }

    pub fn adjust(&mut self, index: usize, channel: Channel, value: f32) -> Result<Color> {
        let color = self.slot_mut(index)?.adjust(channel, value)?;
        debug!(index, %channel, value, color = %color, "Adjusted slot");
        Ok(color)
    }

    /// Flips a slot's lock and returns the new state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool> {
        let locked = self.slot_mut(index)?.toggle_lock();
        debug!(index, locked, "Toggled lock");
        Ok(locked)
    }

    /// Replaces every slot with the given colors and clears all locks.
    pub fn load_snapshot(&mut self, colors: &[Color]) -> Result<()> {
        if colors.len() != self.slots.len() {
            return Err(PaletteError::ShapeMismatch {
                expected: self.slots.len(),
                actual: colors.len(),
            });
        }

        for (slot, color) in self.slots.iter_mut().zip(colors) {
            slot.reset(*color);
            slot.set_locked(false);
        }
        Ok(())
    }

    /// The displayed colors, in slot order.
    pub fn snapshot(&self) -> Vec<Color> {
        self.slots.iter().map(PaletteSlot::current).collect()
    }
}
