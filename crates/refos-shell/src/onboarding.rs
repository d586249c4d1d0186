//! Onboarding completion flags and the OOBE step order.
//!
//! First-run flow: boot animation, installer, then the out-of-box-experience
//! wizard. Only the completion booleans persist between sessions, as a JSON
//! snapshot in a key-value flag store. Window geometry is never persisted.

use serde::{Deserialize, Serialize};

use refos_types::error::Result;

/// Storage key for the onboarding snapshot.
pub const ONBOARDING_KEY: &str = "refos.onboarding";

/// Which onboarding stages have completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OnboardingFlags {
    #[serde(default)]
    pub boot_complete: bool,
    #[serde(default)]
    pub install_complete: bool,
    #[serde(default)]
    pub oobe_complete: bool,
}

impl OnboardingFlags {
    /// Whether the desktop should come up directly, skipping onboarding.
    pub fn finished(self) -> bool {
        self.boot_complete && self.install_complete && self.oobe_complete
    }

    /// Load from the store, defaulting to all-false when absent.
    pub fn load(store: &dyn FlagStore) -> Result<Self> {
        match store.get(ONBOARDING_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Self::default()),
        }
    }

    pub fn save(self, store: &mut dyn FlagStore) -> Result<()> {
        store.set(ONBOARDING_KEY, &serde_json::to_string(&self)?)
    }
}

/// The OOBE wizard's steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OobeStep {
    Welcome,
    Personalization,
    Partition,
    Privacy,
    Final,
}

impl OobeStep {
    pub const FIRST: OobeStep = OobeStep::Welcome;

    /// The step after this one, or `None` past `Final`.
    pub fn next(self) -> Option<OobeStep> {
        match self {
            OobeStep::Welcome => Some(OobeStep::Personalization),
            OobeStep::Personalization => Some(OobeStep::Partition),
            OobeStep::Partition => Some(OobeStep::Privacy),
            OobeStep::Privacy => Some(OobeStep::Final),
            OobeStep::Final => None,
        }
    }

    /// The step before this one, for the wizard's back button.
    pub fn previous(self) -> Option<OobeStep> {
        match self {
            OobeStep::Welcome => None,
            OobeStep::Personalization => Some(OobeStep::Welcome),
            OobeStep::Partition => Some(OobeStep::Personalization),
            OobeStep::Privacy => Some(OobeStep::Partition),
            OobeStep::Final => Some(OobeStep::Privacy),
        }
    }
}

/// Minimal key-value persistence for shell flags.
pub trait FlagStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, also the test double.
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_default_to_unfinished() {
        let flags = OnboardingFlags::default();
        assert!(!flags.finished());
    }

    #[test]
    fn finished_requires_all_three_stages() {
        let mut flags = OnboardingFlags::default();
        flags.boot_complete = true;
        flags.install_complete = true;
        assert!(!flags.finished());
        flags.oobe_complete = true;
        assert!(flags.finished());
    }

    #[test]
    fn load_from_empty_store_defaults() {
        let store = MemoryFlagStore::new();
        let flags = OnboardingFlags::load(&store).unwrap();
        assert_eq!(flags, OnboardingFlags::default());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let mut store = MemoryFlagStore::new();
        let flags = OnboardingFlags {
            boot_complete: true,
            install_complete: true,
            oobe_complete: false,
        };
        flags.save(&mut store).unwrap();
        assert_eq!(OnboardingFlags::load(&store).unwrap(), flags);
    }

    #[test]
    fn load_tolerates_missing_fields() {
        let mut store = MemoryFlagStore::new();
        store.set(ONBOARDING_KEY, r#"{"boot_complete":true}"#).unwrap();
        let flags = OnboardingFlags::load(&store).unwrap();
        assert!(flags.boot_complete);
        assert!(!flags.oobe_complete);
    }

    #[test]
    fn load_rejects_corrupt_snapshot() {
        let mut store = MemoryFlagStore::new();
        store.set(ONBOARDING_KEY, "not json").unwrap();
        assert!(OnboardingFlags::load(&store).is_err());
    }

    #[test]
    fn oobe_steps_walk_forward_in_order() {
        let mut steps = vec![OobeStep::FIRST];
        while let Some(next) = steps.last().unwrap().next() {
            steps.push(next);
        }
        assert_eq!(
            steps,
            vec![
                OobeStep::Welcome,
                OobeStep::Personalization,
                OobeStep::Partition,
                OobeStep::Privacy,
                OobeStep::Final,
            ]
        );
    }

    #[test]
    fn oobe_previous_inverts_next() {
        let mut step = OobeStep::FIRST;
        while let Some(next) = step.next() {
            assert_eq!(next.previous(), Some(step));
            step = next;
        }
        assert_eq!(OobeStep::FIRST.previous(), None);
    }
}
