//! Hand-written fakes for the picker's ports

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use treepick_domain::{
    DomainId, DomainRecord, EntityReference, HierarchySource, Notifier, PickerError,
    SelectionHandler,
};

/// Fixed id so assertions can compare against a known value
pub fn id(n: u128) -> DomainId {
    DomainId::from_uuid(uuid::Uuid::from_u128(n))
}

pub fn record(n: u128, name: &str, fqn: &str) -> DomainRecord {
    DomainRecord {
        id: id(n),
        ..DomainRecord::new(name, fqn)
    }
}

/// a { a.b, a.c { a.c.d } }, finance
pub fn sample_hierarchy() -> Vec<DomainRecord> {
    vec![
        record(1, "a", "a")
            .with_child(record(2, "b", "a.b"))
            .with_child(record(3, "c", "a.c").with_child(record(4, "d", "a.c.d"))),
        record(5, "finance", "finance").with_display_name("Finance"),
    ]
}

pub fn keys(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[derive(Clone, Default)]
pub struct FakeSource {
    hierarchy: Arc<Mutex<Vec<DomainRecord>>>,
    search_results: Arc<Mutex<HashMap<String, Vec<DomainRecord>>>>,
    fail_fetch: Arc<Mutex<bool>>,
    fail_search: Arc<Mutex<bool>>,
    delays: Arc<Mutex<VecDeque<Duration>>>,
    pub fetch_calls: Arc<Mutex<Vec<usize>>>,
    pub search_calls: Arc<Mutex<Vec<String>>>,
}

impl FakeSource {
    pub fn with_hierarchy(records: Vec<DomainRecord>) -> Self {
        let source = Self::default();
        *source.hierarchy.lock().unwrap() = records;
        source
    }

    pub fn set_hierarchy(&self, records: Vec<DomainRecord>) {
        *self.hierarchy.lock().unwrap() = records;
    }

    /// Results for an encoded query
    pub fn add_search_result(&self, encoded: &str, records: Vec<DomainRecord>) {
        self.search_results
            .lock()
            .unwrap()
            .insert(encoded.to_string(), records);
    }

    pub fn fail_fetch(&self, fail: bool) {
        *self.fail_fetch.lock().unwrap() = fail;
    }

    pub fn fail_search(&self, fail: bool) {
        *self.fail_search.lock().unwrap() = fail;
    }

    /// Delay applied to the next request (fetch or search), in call order
    pub fn push_delay(&self, delay: Duration) {
        self.delays.lock().unwrap().push_back(delay);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.lock().unwrap().len()
    }

    pub fn searches(&self) -> Vec<String> {
        self.search_calls.lock().unwrap().clone()
    }

    fn next_delay(&self) -> Duration {
        self.delays.lock().unwrap().pop_front().unwrap_or_default()
    }
}

impl HierarchySource for FakeSource {
    fn fetch_hierarchy(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<DomainRecord>, PickerError>> + Send {
        self.fetch_calls.lock().unwrap().push(limit);
        let delay = self.next_delay();
        let fail = *self.fail_fetch.lock().unwrap();
        let records = self.hierarchy.lock().unwrap().clone();

        async move {
            tokio::time::sleep(delay).await;
            if fail {
                Err(PickerError::hierarchy_load("backend unavailable"))
            } else {
                Ok(records)
            }
        }
    }

    fn search_hierarchy(
        &self,
        encoded_query: &str,
    ) -> impl Future<Output = Result<Vec<DomainRecord>, PickerError>> + Send {
        self.search_calls
            .lock()
            .unwrap()
            .push(encoded_query.to_string());
        let delay = self.next_delay();
        let fail = *self.fail_search.lock().unwrap();
        let records = self
            .search_results
            .lock()
            .unwrap()
            .get(encoded_query)
            .cloned()
            .unwrap_or_default();

        async move {
            tokio::time::sleep(delay).await;
            if fail {
                Err(PickerError::search_failure("search backend unavailable"))
            } else {
                Ok(records)
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingHandler {
    pub submissions: Arc<Mutex<Vec<Vec<EntityReference>>>>,
    pub cancels: Arc<AtomicUsize>,
    fail: Arc<Mutex<bool>>,
    delay: Arc<Mutex<Duration>>,
}

impl RecordingHandler {
    pub fn fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn submitted(&self) -> Vec<Vec<EntityReference>> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

impl SelectionHandler for RecordingHandler {
    fn submit(
        &self,
        selection: Vec<EntityReference>,
    ) -> impl Future<Output = Result<(), PickerError>> + Send {
        let submissions = self.submissions.clone();
        let fail = *self.fail.lock().unwrap();
        let delay = *self.delay.lock().unwrap();

        async move {
            tokio::time::sleep(delay).await;
            submissions.lock().unwrap().push(selection);
            if fail {
                Err(PickerError::submit_failure("caller rejected selection"))
            } else {
                Ok(())
            }
        }
    }

    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub errors: Arc<Mutex<Vec<PickerError>>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<PickerError> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, error: &PickerError) {
        self.errors.lock().unwrap().push(error.clone());
    }
}
