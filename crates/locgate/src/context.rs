//! The host-facing seam.
//!
//! Hosts raise a filter activation carrying a filter name and a parameter
//! bag. A [`DataFilterListener`] inspects the name, optionally writes
//! parameters, and answers with a [`FilterVerdict`].

use std::collections::HashMap;

use locgate_core::AccessSet;

/// Whether the host should enable the filter it is preparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterVerdict {
    /// Enable the filter and keep evaluating other listeners.
    Engage,
    /// Do not enable the filter.
    Skip,
}

impl FilterVerdict {
    pub fn engages(self) -> bool {
        matches!(self, FilterVerdict::Engage)
    }
}

impl From<FilterVerdict> for bool {
    fn from(verdict: FilterVerdict) -> Self {
        verdict.engages()
    }
}

/// A filter activation, owned by the host.
pub trait FilterContext {
    /// Name of the filter being prepared.
    fn filter_name(&self) -> &str;

    /// Bind a filter parameter.
    fn set_parameter(&mut self, key: &str, value: AccessSet);
}

/// A listener the host consults before enabling a data filter.
pub trait DataFilterListener {
    /// Prepare `context` and decide whether its filter is enabled.
    fn on_enable_filter(&self, context: &mut dyn FilterContext) -> FilterVerdict;

    /// Whether this listener owns filters with this name.
    fn supports(&self, filter_name: &str) -> bool;
}

/// A plain [`FilterContext`]: a filter name and the parameters bound to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterBag {
    filter_name: String,
    parameters: HashMap<String, AccessSet>,
}

impl ParameterBag {
    pub fn new(filter_name: impl Into<String>) -> Self {
        Self {
            filter_name: filter_name.into(),
            parameters: HashMap::new(),
        }
    }

    pub fn parameter(&self, key: &str) -> Option<&AccessSet> {
        self.parameters.get(key)
    }

    pub fn parameters(&self) -> &HashMap<String, AccessSet> {
        &self.parameters
    }

    /// True if nothing has been bound.
    pub fn is_untouched(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl FilterContext for ParameterBag {
    fn filter_name(&self) -> &str {
        &self.filter_name
    }

    fn set_parameter(&mut self, key: &str, value: AccessSet) {
        self.parameters.insert(key.to_string(), value);
    }
}
