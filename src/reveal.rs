//! One-shot reveal on first visibility.
//!
//! A [`RevealTrigger`] is fed visibility observations by whatever watches the
//! viewport (an `IntersectionObserver` in the browser) and reports each
//! watched key at most once, the first time it is visible enough. Fired keys
//! are dropped from the watch set and can never be observed again.

use std::collections::HashSet;
use std::hash::Hash;

/// A single visibility observation for a watched element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealTrigger<K: Eq + Hash> {
    threshold: u32,
    watched: HashSet<K>,
    fired: HashSet<K>,
}

impl<K: Eq + Hash + Clone> RevealTrigger<K> {
    /// `threshold` is the visible fraction in `[0, 1]` that counts as seen.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: (threshold.clamp(0.0, 1.0) * 1_000.0).round() as u32,
            watched: HashSet::new(),
            fired: HashSet::new(),
        }
    }

    /// Starts watching `key`. Returns false when the key already fired or is
    /// already watched.
    pub fn observe(&mut self, key: K) -> bool {
        if self.fired.contains(&key) {
            return false;
        }
        self.watched.insert(key)
    }

    /// Stops watching without firing, e.g. when the element left the page.
    #[cfg(test)]
    pub fn forget(&mut self, key: &K) {
        self.watched.remove(key);
    }

    /// Feeds one observation. Returns true exactly once per key: the first
    /// time it is intersecting at or above the threshold.
    pub fn notify(&mut self, key: &K, visibility: Visibility) -> bool {
        if !self.watched.contains(key) || !self.is_visible_enough(visibility) {
            return false;
        }

        self.watched.remove(key);
        self.fired.insert(key.clone());
        true
    }

    #[cfg(test)]
    pub fn is_watching(&self, key: &K) -> bool {
        self.watched.contains(key)
    }

    #[cfg(test)]
    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }

    fn is_visible_enough(&self, visibility: Visibility) -> bool {
        // Browsers report ratios like 0.4999 for a 50% crossing.
        let ratio = (visibility.ratio.clamp(0.0, 1.0) * 1_000.0).round() as u32;
        visibility.intersecting && ratio >= self.threshold
    }
}

/// Identifies an element whose first appearance starts an animation or load.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RevealKey {
    Counter(usize),
    SkillBar(usize),
    LazyImage(usize),
}

impl RevealKey {
    /// Attribute value form, e.g. `counter-2`.
    pub fn to_attr(&self) -> String {
        match self {
            Self::Counter(index) => format!("counter-{index}"),
            Self::SkillBar(index) => format!("skill-{index}"),
            Self::LazyImage(index) => format!("image-{index}"),
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        let (kind, index) = value.rsplit_once('-')?;
        let index = index.parse::<usize>().ok()?;

        match kind {
            "counter" => Some(Self::Counter(index)),
            "skill" => Some(Self::SkillBar(index)),
            "image" => Some(Self::LazyImage(index)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seen(ratio: f64) -> Visibility {
        Visibility {
            intersecting: true,
            ratio,
        }
    }

    const HIDDEN: Visibility = Visibility {
        intersecting: false,
        ratio: 0.0,
    };

    #[test]
    fn fires_once_at_threshold() {
        let mut trigger = RevealTrigger::new(0.5);
        trigger.observe("stat");

        assert!(!trigger.notify(&"stat", seen(0.3)));
        assert!(trigger.notify(&"stat", seen(0.5)));
        assert!(!trigger.notify(&"stat", seen(1.0)));
        assert!(!trigger.is_watching(&"stat"));
        assert!(trigger.has_fired(&"stat"));
    }

    #[test]
    fn ratio_just_below_half_rounds_to_threshold() {
        let mut trigger = RevealTrigger::new(0.5);
        trigger.observe(1);
        assert!(trigger.notify(&1, seen(0.4999)));
    }

    #[test]
    fn fired_key_cannot_be_observed_again() {
        let mut trigger = RevealTrigger::new(0.5);
        trigger.observe(7);
        assert!(trigger.notify(&7, seen(0.9)));

        assert!(!trigger.observe(7));
        assert!(!trigger.notify(&7, seen(0.9)));
    }

    #[test]
    fn forgotten_key_never_fires() {
        let mut trigger = RevealTrigger::new(0.5);
        trigger.observe(3);
        trigger.forget(&3);
        assert!(!trigger.notify(&3, seen(1.0)));
    }

    #[test]
    fn zero_threshold_needs_intersection() {
        let mut trigger = RevealTrigger::new(0.0);
        trigger.observe(RevealKey::LazyImage(0));

        assert!(!trigger.notify(&RevealKey::LazyImage(0), HIDDEN));
        assert!(trigger.notify(&RevealKey::LazyImage(0), seen(0.0)));
    }

    #[test]
    fn reveal_key_attribute_parses_back() {
        assert_eq!(RevealKey::from_attr("counter-2"), Some(RevealKey::Counter(2)));
        assert_eq!(RevealKey::from_attr(&RevealKey::SkillBar(11).to_attr()), Some(RevealKey::SkillBar(11)));
        assert_eq!(RevealKey::from_attr("banner-1"), None);
        assert_eq!(RevealKey::from_attr("counter"), None);
    }

    proptest! {
        /// Any sequence of visibility toggles fires the callback at most once.
        #[test]
        fn prop_fires_at_most_once(
            observations in prop::collection::vec((any::<bool>(), 0.0f64..=1.0), 0..64),
        ) {
            let mut trigger = RevealTrigger::new(0.5);
            trigger.observe(0u8);

            let fired = observations
                .into_iter()
                .filter(|(intersecting, ratio)| {
                    trigger.notify(&0, Visibility { intersecting: *intersecting, ratio: *ratio })
                })
                .count();

            prop_assert!(fired <= 1);
        }
    }
}
