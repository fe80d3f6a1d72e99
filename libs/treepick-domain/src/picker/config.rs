use std::time::Duration;

/// Configuration for the domain picker
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Page size requested from the hierarchy endpoint (default: 100)
    pub page_limit: usize,
    /// Quiet period before a typed query is sent (default: 300ms)
    pub search_debounce: Duration,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            page_limit: 100,
            search_debounce: Duration::from_millis(300),
        }
    }
}

/// Caller-supplied properties of one picker instance
#[derive(Debug, Clone, Default)]
pub struct PickerProps {
    /// Initially selected keys (fully-qualified names)
    pub value: Vec<String>,
    /// Checkbox multi-select when true, single node selection otherwise
    pub is_multiple: bool,
}

impl PickerProps {
    pub fn single(value: Vec<String>) -> Self {
        Self {
            value,
            is_multiple: false,
        }
    }

    pub fn multiple(value: Vec<String>) -> Self {
        Self {
            value,
            is_multiple: true,
        }
    }
}
