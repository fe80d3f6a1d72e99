//! Selection reconciliation and save-time resolution
//!
//! Single-select mode listens to node "select" events, multi-select mode to
//! checkbox "check" events. Only the handler matching the configured mode
//! changes anything; the other one is a no-op.

use tracing::debug;

use crate::error::{PickerError, Result};
use crate::hierarchy::{find_by_fqn, DomainRecord, EntityReference, EntityType, SelectionMode};

/// Payload of a checkbox event from the render surface
///
/// In strict check mode the surface reports checked and half-checked keys
/// separately; only the checked ones count as selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckEvent {
    Keys(Vec<String>),
    Strict {
        checked: Vec<String>,
        half_checked: Vec<String>,
    },
}

impl CheckEvent {
    pub fn into_checked(self) -> Vec<String> {
        match self {
            Self::Keys(keys) => keys,
            Self::Strict { checked, .. } => checked,
        }
    }
}

/// Ordered set of currently chosen node keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedKeys {
    mode: SelectionMode,
    keys: Vec<String>,
}

impl SelectedKeys {
    /// Seed from the caller's initial value; single mode keeps the first key
    pub fn seeded(mode: SelectionMode, value: &[String]) -> Self {
        let keys = match mode {
            SelectionMode::Multiple => value.to_vec(),
            SelectionMode::Single => value.iter().take(1).cloned().collect(),
        };
        Self { mode, keys }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Handle a node select event. Returns false in multi-select mode.
    pub fn apply_select(&mut self, selected: Vec<String>) -> bool {
        if self.mode.is_multiple() {
            debug!("Ignoring select event in multi-select mode");
            return false;
        }
        self.keys = selected.into_iter().take(1).collect();
        true
    }

    /// Handle a checkbox event. Returns false in single-select mode.
    pub fn apply_check(&mut self, event: CheckEvent) -> bool {
        if !self.mode.is_multiple() {
            debug!("Ignoring check event in single-select mode");
            return false;
        }
        self.keys = event.into_checked();
        true
    }

    pub fn reset(&mut self, value: &[String]) {
        *self = Self::seeded(self.mode, value);
    }

    /// Resolve the selected keys into entity references
    ///
    /// Each key is looked up, at any depth, in `snapshots` in order; the
    /// first snapshot containing it wins. Single-select mode only resolves
    /// the first key.
    ///
    /// # Errors
    ///
    /// Returns `PickerError::UnresolvedSelection` listing every key found in
    /// none of the snapshots.
    pub fn resolve(&self, snapshots: &[&[DomainRecord]]) -> Result<Vec<EntityReference>> {
        let keys: &[String] = match self.mode {
            SelectionMode::Multiple => &self.keys,
            SelectionMode::Single => &self.keys[..self.keys.len().min(1)],
        };

        let mut resolved = Vec::with_capacity(keys.len());
        let mut missing = Vec::new();

        for key in keys {
            match snapshots.iter().find_map(|records| find_by_fqn(records, key)) {
                Some(record) => resolved.push(record.to_reference(EntityType::Domain)),
                None => missing.push(key.clone()),
            }
        }

        if missing.is_empty() {
            Ok(resolved)
        } else {
            Err(PickerError::unresolved(missing))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn records() -> Vec<DomainRecord> {
        vec![DomainRecord::new("a", "a")
            .with_child(DomainRecord::new("b", "a.b"))
            .with_child(DomainRecord::new("c", "a.c"))]
    }

    #[test]
    fn test_single_mode_seed_keeps_one_key() {
        let selection = SelectedKeys::seeded(SelectionMode::Single, &keys(&["a", "a.b"]));
        assert_eq!(selection.keys(), keys(&["a"]).as_slice());
    }

    #[test]
    fn test_single_mode_never_exceeds_one_key() {
        let mut selection = SelectedKeys::seeded(SelectionMode::Single, &[]);

        for event in [keys(&["a"]), keys(&["a.b", "a.c"]), vec![], keys(&["a.c"])] {
            assert!(selection.apply_select(event));
            assert!(selection.keys().len() <= 1);
        }
        assert_eq!(selection.keys(), keys(&["a.c"]).as_slice());
    }

    #[test]
    fn test_single_mode_ignores_check_events() {
        let mut selection = SelectedKeys::seeded(SelectionMode::Single, &keys(&["a"]));

        assert!(!selection.apply_check(CheckEvent::Keys(keys(&["a.b", "a.c"]))));
        assert_eq!(selection.keys(), keys(&["a"]).as_slice());
    }

    #[test]
    fn test_multiple_mode_takes_checked_and_drops_half_checked() {
        let mut selection = SelectedKeys::seeded(SelectionMode::Multiple, &[]);

        assert!(selection.apply_check(CheckEvent::Strict {
            checked: keys(&["a.b", "a.c"]),
            half_checked: keys(&["a"]),
        }));
        assert_eq!(selection.keys(), keys(&["a.b", "a.c"]).as_slice());
    }

    #[test]
    fn test_multiple_mode_ignores_select_events() {
        let mut selection = SelectedKeys::seeded(SelectionMode::Multiple, &keys(&["a.b"]));

        assert!(!selection.apply_select(keys(&["a"])));
        assert_eq!(selection.keys(), keys(&["a.b"]).as_slice());
    }

    #[test]
    fn test_resolve_preserves_selection_order() {
        let records = records();
        let mut selection = SelectedKeys::seeded(SelectionMode::Multiple, &[]);
        selection.apply_check(CheckEvent::Keys(keys(&["a.c", "a.b"])));

        let refs = selection.resolve(&[&records]).unwrap();

        let names: Vec<_> = refs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["c", "b"]);
    }

    #[test]
    fn test_resolve_empty_selection() {
        let records = records();
        let selection = SelectedKeys::seeded(SelectionMode::Single, &[]);
        assert!(selection.resolve(&[&records]).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_falls_back_to_later_snapshot() {
        let current = vec![DomainRecord::new("fin", "fin")];
        let hierarchy = records();
        let selection = SelectedKeys::seeded(SelectionMode::Multiple, &keys(&["fin", "a.b"]));

        let refs = selection.resolve(&[&current, &hierarchy]).unwrap();
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn test_resolve_reports_missing_keys() {
        let records = records();
        let selection = SelectedKeys::seeded(SelectionMode::Multiple, &keys(&["a.b", "x", "y"]));

        let err = selection.resolve(&[&records]).unwrap_err();
        assert_eq!(err, PickerError::unresolved(keys(&["x", "y"])));
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut selection = SelectedKeys::seeded(SelectionMode::Multiple, &keys(&["a"]));
        selection.apply_check(CheckEvent::Keys(keys(&["a.b"])));

        selection.reset(&keys(&["a"]));
        assert_eq!(selection.keys(), keys(&["a"]).as_slice());
    }
}
