//! Registry of calibrated sticker colors
//!
//! Holds exactly one [`ColorRange`] per sticker color, in a fixed
//! registration order. Classification walks that order and returns the
//! first range that matches, so where two calibrated ranges overlap the
//! earlier one wins. Default order: Orange, Red, Green, Blue, Yellow, White.

use tracing::{info, warn};

use crate::calibration::{ColorSnapshot, ProfileStore};
use crate::color::{ColorRange, ColorTag, Hsv};
use crate::error::{Result, ScanError};

/// Built-in ranges as (tag, lower, upper), in registration order
const DEFAULT_RANGES: [(ColorTag, [u8; 3], [u8; 3]); 6] = [
    (ColorTag::Orange, [10, 100, 20], [25, 255, 255]),
    (ColorTag::Red, [0, 100, 100], [10, 255, 255]),
    (ColorTag::Green, [40, 50, 50], [90, 255, 255]),
    (ColorTag::Blue, [100, 150, 0], [140, 255, 255]),
    (ColorTag::Yellow, [20, 100, 100], [30, 255, 255]),
    (ColorTag::White, [0, 0, 50], [180, 50, 255]),
];

/// The six calibrated color ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRegistry {
    ranges: [ColorRange; 6],
}

impl Default for ColorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ColorRegistry {
    /// Registry holding the built-in ranges
    pub fn with_defaults() -> Self {
        Self {
            ranges: DEFAULT_RANGES.map(|(tag, lower, upper)| {
                ColorRange::with_bounds(
                    tag,
                    Hsv::new(lower[0], lower[1], lower[2]),
                    Hsv::new(upper[0], upper[1], upper[2]),
                )
            }),
        }
    }

    /// Restore the built-in ranges
    pub fn reset_defaults(&mut self) {
        *self = Self::with_defaults();
        info!("color ranges reset to defaults");
    }

    /// Tag of the first range (in registration order) matching `hsv`,
    /// or `ColorTag::Unknown`
    pub fn classify(&self, hsv: Hsv) -> ColorTag {
        self.ranges
            .iter()
            .find(|range| range.matches(hsv))
            .map_or(ColorTag::Unknown, ColorRange::tag)
    }

    /// Ranges in registration order
    pub fn ranges(&self) -> &[ColorRange] {
        &self.ranges
    }

    /// Range for `tag`; `None` only for `ColorTag::Unknown`
    pub fn range(&self, tag: ColorTag) -> Option<&ColorRange> {
        self.ranges.iter().find(|range| range.tag() == tag)
    }

    fn range_mut(&mut self, tag: ColorTag) -> Result<&mut ColorRange> {
        self.ranges
            .iter_mut()
            .find(|range| range.tag() == tag)
            .ok_or_else(|| ScanError::invalid_parameter("color", tag.long_name()))
    }

    /// Recenter one color, deriving its bounds from the tolerances
    ///
    /// Used both for "set center from sampled pixel" and manual HSV edits.
    pub fn set_center(&mut self, tag: ColorTag, center: Hsv) -> Result<()> {
        self.range_mut(tag)?.update(center);
        info!(color = tag.long_name(), %center, "color center updated");
        Ok(())
    }

    /// Replace one color's bounds directly
    pub fn set_bounds(&mut self, tag: ColorTag, lower: Hsv, upper: Hsv) -> Result<()> {
        self.range_mut(tag)?.set_bounds(lower, upper);
        Ok(())
    }

    /// Current center of every color
    pub fn snapshot(&self) -> ColorSnapshot {
        self.ranges
            .iter()
            .map(|range| (range.tag(), range.center()))
            .collect()
    }

    /// Recenter every color present in `snapshot`; others are left as they are
    pub fn apply_snapshot(&mut self, snapshot: &ColorSnapshot) {
        for range in self.ranges.iter_mut() {
            if let Some(center) = snapshot.get(&range.tag()) {
                range.update(*center);
            }
        }
    }

    /// Save current centers under `name`, replacing any profile of that name
    pub fn save_profile<P>(&self, store: &mut P, name: &str) -> Result<()>
    where
        P: ProfileStore + ?Sized,
    {
        store.save(name, &self.snapshot())?;
        info!(profile = name, "color profile saved");
        Ok(())
    }

    /// Apply the profile saved under `name`
    ///
    /// # Errors
    ///
    /// `ProfileNotFound` if the store has no such profile; the registry is
    /// left unchanged. Store read failures propagate as hard errors.
    pub fn load_profile<P>(&mut self, store: &P, name: &str) -> Result<()>
    where
        P: ProfileStore + ?Sized,
    {
        match store.load(name)? {
            Some(snapshot) => {
                self.apply_snapshot(&snapshot);
                info!(profile = name, colors = snapshot.len(), "color profile loaded");
                Ok(())
            }
            None => {
                warn!(profile = name, "color profile not found");
                Err(ScanError::ProfileNotFound {
                    name: name.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::MemoryProfileStore;

    #[test]
    fn test_defaults_cover_every_known_color_once() {
        let registry = ColorRegistry::with_defaults();
        for tag in ColorTag::KNOWN {
            assert_eq!(
                registry.ranges().iter().filter(|r| r.tag() == tag).count(),
                1
            );
        }
        assert!(registry.range(ColorTag::Unknown).is_none());
    }

    #[test]
    fn test_classify_single_matches() {
        let registry = ColorRegistry::with_defaults();
        assert_eq!(registry.classify(Hsv::new(60, 200, 200)), ColorTag::Green);
        assert_eq!(registry.classify(Hsv::new(120, 200, 200)), ColorTag::Blue);
        assert_eq!(registry.classify(Hsv::new(5, 200, 200)), ColorTag::Red);
        assert_eq!(registry.classify(Hsv::new(0, 10, 200)), ColorTag::White);
        assert_eq!(registry.classify(Hsv::new(28, 200, 200)), ColorTag::Yellow);
    }

    #[test]
    fn test_classify_unknown() {
        let registry = ColorRegistry::with_defaults();
        assert_eq!(registry.classify(Hsv::new(160, 200, 200)), ColorTag::Unknown);
        assert_eq!(registry.classify(Hsv::new(60, 20, 20)), ColorTag::Unknown);
    }

    #[test]
    fn test_classify_overlap_uses_registration_order() {
        let registry = ColorRegistry::with_defaults();
        // Orange (10-25) and Yellow (20-30) overlap on hue 20-25
        assert_eq!(registry.classify(Hsv::new(22, 200, 200)), ColorTag::Orange);
        // Orange and Red share hue 10
        assert_eq!(registry.classify(Hsv::new(10, 200, 200)), ColorTag::Orange);
    }

    #[test]
    fn test_classify_is_pure() {
        let registry = ColorRegistry::with_defaults();
        let sample = Hsv::new(60, 200, 200);
        let first = registry.classify(sample);
        let _ = registry.classify(Hsv::new(120, 200, 200));
        assert_eq!(registry.classify(sample), first);
    }

    #[test]
    fn test_set_center_changes_classification() {
        let mut registry = ColorRegistry::with_defaults();
        let magenta = Hsv::new(160, 200, 200);
        assert_eq!(registry.classify(magenta), ColorTag::Unknown);

        registry.set_center(ColorTag::Red, magenta).unwrap();
        assert_eq!(registry.classify(magenta), ColorTag::Red);
        assert_eq!(registry.range(ColorTag::Red).unwrap().center(), magenta);
    }

    #[test]
    fn test_set_center_rejects_unknown_tag() {
        let mut registry = ColorRegistry::with_defaults();
        let err = registry
            .set_center(ColorTag::Unknown, Hsv::new(1, 2, 3))
            .unwrap_err();
        assert!(matches!(err, ScanError::InvalidParameter { .. }));
        assert_eq!(registry, ColorRegistry::with_defaults());
    }

    #[test]
    fn test_reset_defaults() {
        let mut registry = ColorRegistry::with_defaults();
        registry.set_center(ColorTag::Blue, Hsv::new(90, 90, 90)).unwrap();
        registry.reset_defaults();
        assert_eq!(registry, ColorRegistry::with_defaults());
    }

    #[test]
    fn test_profile_round_trip_restores_centers() {
        let mut store = MemoryProfileStore::new();
        let mut registry = ColorRegistry::with_defaults();
        registry.set_center(ColorTag::Green, Hsv::new(70, 180, 160)).unwrap();
        registry.save_profile(&mut store, "p").unwrap();
        let saved = registry.snapshot();

        registry.set_center(ColorTag::Green, Hsv::new(50, 100, 100)).unwrap();
        registry.set_center(ColorTag::White, Hsv::new(0, 20, 240)).unwrap();
        registry.load_profile(&store, "p").unwrap();

        assert_eq!(registry.snapshot(), saved);
    }

    #[test]
    fn test_load_missing_profile_keeps_registry() {
        let store = MemoryProfileStore::new();
        let mut registry = ColorRegistry::with_defaults();
        registry.set_center(ColorTag::Blue, Hsv::new(115, 220, 140)).unwrap();
        let before = registry.clone();

        let err = registry.load_profile(&store, "missing").unwrap_err();
        assert!(matches!(err, ScanError::ProfileNotFound { ref name } if name == "missing"));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_partial_snapshot_leaves_other_colors() {
        let mut store = MemoryProfileStore::new();
        let mut partial = ColorSnapshot::new();
        partial.insert(ColorTag::Yellow, Hsv::new(27, 210, 220));
        store.save("old", &partial).unwrap();

        let mut registry = ColorRegistry::with_defaults();
        let red_before = registry.range(ColorTag::Red).unwrap().clone();
        registry.load_profile(&store, "old").unwrap();

        assert_eq!(
            registry.range(ColorTag::Yellow).unwrap().center(),
            Hsv::new(27, 210, 220)
        );
        assert_eq!(registry.range(ColorTag::Red).unwrap(), &red_before);
    }
}
