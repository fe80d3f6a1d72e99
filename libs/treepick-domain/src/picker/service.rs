//! Domain picker - loading, search and selection orchestration
//!
//! The picker coordinates the hierarchy source, the caller's callbacks and
//! the notifier around one piece of in-memory state:
//! - loads the full hierarchy whenever it becomes visible
//! - debounces typed queries into searches (or a reload for empty input)
//! - reconciles select/check events into the selected key set
//! - resolves the selection into entity references on save
//!
//! ## Stale responses
//!
//! Every load and search takes the next value of a generation counter when
//! it is dispatched. A response is applied only if no newer request was
//! dispatched in the meantime, so the latest user intent always wins no
//! matter in which order the backend answers.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, warn};

use super::debounce::Debouncer;
use super::selection::{CheckEvent, SelectedKeys};
use super::view::PickerView;
use super::{PickerConfig, PickerProps};
use crate::error::{PickerError, Result};
use crate::hierarchy::{build_tree, DomainRecord, EntityReference, SelectionMode, TreeNode};
use crate::ports::{HierarchySource, Notifier, SelectionHandler};
use crate::query::encode_search_query;

/// What happened to the response of one load or search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Response applied; `count` top-level nodes are now shown
    Applied { count: usize },
    /// A newer request was dispatched meanwhile; response dropped
    Discarded,
    /// The collaborator failed and the user was notified
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestKind {
    Hierarchy,
    Search,
}

#[derive(Debug)]
struct PickerState {
    visible: bool,
    /// Records behind the current tree
    domains: Vec<DomainRecord>,
    /// Last full hierarchy, kept for resolving keys picked before a search
    hierarchy: Vec<DomainRecord>,
    tree: Vec<TreeNode>,
    selection: SelectedKeys,
    search_term: String,
    generation: u64,
    in_flight: usize,
    submitting: bool,
}

struct Inner<S, H, N> {
    source: S,
    handler: H,
    notifier: N,
    config: PickerConfig,
    mode: SelectionMode,
    seed: Vec<String>,
    state: Mutex<PickerState>,
    debouncer: Debouncer,
}

impl<S, H, N> Inner<S, H, N> {
    fn state(&self) -> MutexGuard<'_, PickerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps the loading indicator up while a request is outstanding
///
/// Released through [`InFlight::settle`] when the response is processed, or
/// on drop if the request future is abandoned.
struct InFlight<'a> {
    state: &'a Mutex<PickerState>,
    armed: bool,
}

impl<'a> InFlight<'a> {
    fn enter(state: &'a Mutex<PickerState>, guard: &mut PickerState) -> Self {
        guard.in_flight += 1;
        Self { state, armed: true }
    }

    fn settle(mut self, guard: &mut PickerState) {
        guard.in_flight = guard.in_flight.saturating_sub(1);
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.in_flight = state.in_flight.saturating_sub(1);
        }
    }
}

/// Keeps the submit busy flag set for the duration of a save
struct Submitting<'a> {
    state: &'a Mutex<PickerState>,
}

impl<'a> Submitting<'a> {
    fn enter(state: &'a Mutex<PickerState>) -> Option<Self> {
        let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.submitting {
            return None;
        }
        guard.submitting = true;
        Some(Self { state })
    }
}

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .submitting = false;
    }
}

/// Hierarchical selectable picker for domains
///
/// Cheap to clone: clones share the same state, which is how the debounced
/// search reaches back into the picker once its quiet period elapses.
///
/// ## Static Dispatch
///
/// The picker is generic over its three ports, so each combination of
/// adapters is compiled into its own specialized picker.
pub struct DomainPicker<S, H, N> {
    inner: Arc<Inner<S, H, N>>,
}

impl<S, H, N> Clone for DomainPicker<S, H, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, H, N> DomainPicker<S, H, N>
where
    S: HierarchySource + 'static,
    H: SelectionHandler + 'static,
    N: Notifier + 'static,
{
    /// Create a hidden picker; nothing is loaded until it becomes visible
    pub fn new(
        source: S,
        handler: H,
        notifier: N,
        props: PickerProps,
        config: PickerConfig,
    ) -> Self {
        let mode = SelectionMode::from_multiple(props.is_multiple);
        let state = PickerState {
            visible: false,
            domains: Vec::new(),
            hierarchy: Vec::new(),
            tree: Vec::new(),
            selection: SelectedKeys::seeded(mode, &props.value),
            search_term: String::new(),
            generation: 0,
            in_flight: 0,
            submitting: false,
        };

        Self {
            inner: Arc::new(Inner {
                source,
                handler,
                notifier,
                debouncer: Debouncer::new(config.search_debounce),
                config,
                mode,
                seed: props.value,
                state: Mutex::new(state),
            }),
        }
    }

    /// Create a picker with default configuration
    pub fn with_ports(source: S, handler: H, notifier: N, props: PickerProps) -> Self {
        Self::new(source, handler, notifier, props, PickerConfig::default())
    }

    /// Update the visibility flag
    ///
    /// Becoming visible clears the search term, drops any search still
    /// waiting for its quiet period and reloads the hierarchy. Returns the
    /// outcome of that reload, or `None` when visibility did not turn on.
    pub async fn set_visible(&self, visible: bool) -> Option<LoadOutcome> {
        let activated = {
            let mut state = self.inner.state();
            let activated = visible && !state.visible;
            state.visible = visible;
            if activated {
                state.search_term.clear();
            }
            activated
        };

        if !activated {
            return None;
        }

        self.inner.debouncer.cancel();
        Some(self.load_hierarchy().await)
    }

    /// Fetch the full hierarchy and replace the tree with it
    pub async fn load_hierarchy(&self) -> LoadOutcome {
        let limit = self.inner.config.page_limit;
        debug!(limit, "Loading domain hierarchy");
        self.dispatch(RequestKind::Hierarchy, self.inner.source.fetch_hierarchy(limit))
            .await
    }

    /// Feed one keystroke's worth of search input
    ///
    /// The search runs once input has been quiet for the configured
    /// debounce window, with the last value typed.
    ///
    /// # Panics
    ///
    /// Must be called from within a Tokio runtime.
    pub fn on_search_input(&self, text: impl Into<String>) {
        let picker = self.clone();
        let text = text.into();
        self.inner.debouncer.schedule(async move {
            picker.search(&text).await;
        });
    }

    /// Search immediately, bypassing the debounce window
    ///
    /// An empty query reloads the full hierarchy instead.
    pub async fn search(&self, text: &str) -> LoadOutcome {
        self.inner.state().search_term = text.to_string();

        if text.is_empty() {
            return self.load_hierarchy().await;
        }

        let encoded = encode_search_query(text);
        debug!(query = %text, encoded = %encoded, "Searching domains");
        self.dispatch(RequestKind::Search, self.inner.source.search_hierarchy(&encoded))
            .await
    }

    /// Node select event from the render surface (single-select mode only)
    pub fn on_select(&self, selected_keys: Vec<String>) -> bool {
        self.inner.state().selection.apply_select(selected_keys)
    }

    /// Checkbox event from the render surface (multi-select mode only)
    pub fn on_check(&self, event: CheckEvent) -> bool {
        self.inner.state().selection.apply_check(event)
    }

    /// Resolve the selection and hand it to the caller's submit callback
    ///
    /// The picker reports busy until the callback completes. The resolved
    /// references are returned on success.
    ///
    /// # Errors
    ///
    /// - `PickerError::UnresolvedSelection` if a selected key matches no
    ///   loaded record; the callback is not invoked
    /// - `PickerError::Submit` (or the callback's own error) if it fails
    /// - `PickerError::SubmitInProgress` if a save is already running
    pub async fn save(&self) -> Result<Vec<EntityReference>> {
        let Some(_busy) = Submitting::enter(&self.inner.state) else {
            debug!("Save requested while a submission is in progress");
            return Err(PickerError::SubmitInProgress);
        };

        let resolved = {
            let state = self.inner.state();
            let snapshots = [state.domains.as_slice(), state.hierarchy.as_slice()];
            state.selection.resolve(&snapshots)
        };

        let selection = match resolved {
            Ok(selection) => selection,
            Err(err) => {
                warn!(error = %err, "Refusing to submit unresolved selection");
                self.inner.notifier.notify_error(&err);
                return Err(err);
            }
        };

        info!(count = selection.len(), "Submitting domain selection");
        if let Err(err) = self.inner.handler.submit(selection.clone()).await {
            error!(error = %err, "Submit callback failed");
            self.inner.notifier.notify_error(&err);
            return Err(err);
        }

        Ok(selection)
    }

    /// Dismiss the picker, discarding local edits
    ///
    /// The caller's cancel callback runs first. The selection then returns
    /// to the initial value, any search still waiting is dropped and the
    /// responses of requests already dispatched are discarded.
    pub fn cancel(&self) {
        self.inner.handler.cancel();
        self.inner.debouncer.cancel();

        let mut state = self.inner.state();
        state.selection.reset(&self.inner.seed);
        state.search_term.clear();
        state.generation += 1;
        debug!(generation = state.generation, "Picker cancelled");
    }

    /// Current render state
    pub fn view(&self) -> PickerView {
        let state = self.inner.state();
        PickerView::compose(
            state.in_flight > 0,
            &state.tree,
            &state.search_term,
            self.inner.mode,
            &self.inner.seed,
        )
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state().in_flight > 0
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.state().submitting
    }

    pub fn is_visible(&self) -> bool {
        self.inner.state().visible
    }

    /// True while the last typed query is waiting out the debounce window
    /// or its search has not finished yet
    pub fn has_pending_search(&self) -> bool {
        self.inner.debouncer.is_pending()
    }

    pub fn mode(&self) -> SelectionMode {
        self.inner.mode
    }

    pub fn selected_keys(&self) -> Vec<String> {
        self.inner.state().selection.keys().to_vec()
    }

    pub fn search_term(&self) -> String {
        self.inner.state().search_term.clone()
    }

    /// Records behind the current tree
    pub fn domains(&self) -> Vec<DomainRecord> {
        self.inner.state().domains.clone()
    }

    pub fn tree(&self) -> Vec<TreeNode> {
        self.inner.state().tree.clone()
    }

    pub fn config(&self) -> &PickerConfig {
        &self.inner.config
    }

    /// Run one request under the generation guard and apply its response
    async fn dispatch<F>(&self, kind: RequestKind, request: F) -> LoadOutcome
    where
        F: Future<Output = Result<Vec<DomainRecord>>> + Send,
    {
        let (generation, in_flight) = {
            let mut state = self.inner.state();
            state.generation += 1;
            let in_flight = InFlight::enter(&self.inner.state, &mut state);
            (state.generation, in_flight)
        };

        let response = request.await;

        let outcome = {
            let mut state = self.inner.state();
            in_flight.settle(&mut state);

            if state.generation != generation {
                debug!(
                    ?kind,
                    generation,
                    latest = state.generation,
                    "Discarding stale response"
                );
                return LoadOutcome::Discarded;
            }

            match response {
                Ok(records) => {
                    state.tree = build_tree(&records, 0, self.inner.mode);
                    if kind == RequestKind::Hierarchy {
                        state.hierarchy = records.clone();
                    }
                    state.domains = records;
                    Ok(state.tree.len())
                }
                Err(err) => Err(err),
            }
        };

        match outcome {
            Ok(count) => {
                info!(?kind, count, "Domain tree updated");
                LoadOutcome::Applied { count }
            }
            Err(err) => {
                error!(?kind, error = %err, "Domain request failed");
                self.inner.notifier.notify_error(&err);
                LoadOutcome::Failed
            }
        }
    }
}
