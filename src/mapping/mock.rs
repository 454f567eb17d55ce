//! # Mock RelProvider
//!
//! [`MockRelProvider`] stands in for a real [`RelProvider`] in tests. Stub the
//! values it should return, hand [`MockRelProvider::provider`] to the code
//! under test, then check what was asked for.
//!
//! Any call without a stub panics, so a test that never stubs
//! `collection_resource_rel_for` also proves it is never invoked.
//!
//! ```rust
//! use resource_mapping::mapping::mock::MockRelProvider;
//! use resource_mapping::mapping::{CollectionResourceMapping, TypeMapping};
//! use resource_mapping::model::TypeDescriptor;
//!
//! let mock = MockRelProvider::new();
//! mock.expect_collection_rel().return_value("widgets");
//! mock.expect_single_rel().return_value("widget");
//!
//! let ty = TypeDescriptor::public("Gadget").unwrap();
//! let mapping = TypeMapping::with_rel_provider(&ty, mock.provider()).unwrap();
//!
//! assert_eq!(mapping.rel(), "widgets");
//! assert_eq!(mapping.single_resource_rel(), "widget");
//! mock.verify();
//! ```

use crate::model::TypeDescriptor;
use crate::rel::RelProvider;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MockState {
    collection_rel: Option<String>,
    single_rel: Option<String>,
    collection_calls: Vec<String>,
    single_calls: Vec<String>,
}

/// A stub [`RelProvider`] that records every call.
///
/// Clones share state, so the test can keep one handle and give another to
/// the code under test.
#[derive(Debug, Clone, Default)]
pub struct MockRelProvider {
    state: Arc<Mutex<MockState>>,
}

impl MockRelProvider {
    /// Creates a mock with nothing stubbed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a shared handle usable wherever a provider is expected.
    pub fn provider(&self) -> Arc<dyn RelProvider> {
        Arc::new(self.clone())
    }

    /// Expects `collection_resource_rel_for` calls.
    pub fn expect_collection_rel(&self) -> RelExpectationBuilder {
        RelExpectationBuilder {
            kind: RelKind::Collection,
            state: self.state.clone(),
        }
    }

    /// Expects `single_resource_rel_for` calls.
    pub fn expect_single_rel(&self) -> RelExpectationBuilder {
        RelExpectationBuilder {
            kind: RelKind::Single,
            state: self.state.clone(),
        }
    }

    /// Simple names of the types passed to `collection_resource_rel_for`.
    pub fn collection_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().collection_calls.clone()
    }

    /// Simple names of the types passed to `single_resource_rel_for`.
    pub fn single_calls(&self) -> Vec<String> {
        self.state.lock().unwrap().single_calls.clone()
    }

    /// Verifies that every stubbed method was called at least once.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if state.collection_rel.is_some() && state.collection_calls.is_empty() {
            panic!("Expected collection_resource_rel_for to be called");
        }
        if state.single_rel.is_some() && state.single_calls.is_empty() {
            panic!("Expected single_resource_rel_for to be called");
        }
    }
}

impl RelProvider for MockRelProvider {
    fn collection_resource_rel_for(&self, ty: &TypeDescriptor) -> String {
        let mut state = self.state.lock().unwrap();
        state.collection_calls.push(ty.simple_name().to_string());
        let value = state.collection_rel.clone();
        drop(state); // Release before a possible panic

        match value {
            Some(value) => value,
            None => panic!("Unexpected collection_resource_rel_for call for {}", ty.simple_name()),
        }
    }

    fn single_resource_rel_for(&self, ty: &TypeDescriptor) -> String {
        let mut state = self.state.lock().unwrap();
        state.single_calls.push(ty.simple_name().to_string());
        let value = state.single_rel.clone();
        drop(state);

        match value {
            Some(value) => value,
            None => panic!("Unexpected single_resource_rel_for call for {}", ty.simple_name()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum RelKind {
    Collection,
    Single,
}

/// Builder for rel expectations.
pub struct RelExpectationBuilder {
    kind: RelKind,
    state: Arc<Mutex<MockState>>,
}

impl RelExpectationBuilder {
    /// Sets the value returned by every matching call.
    pub fn return_value(self, value: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        match self.kind {
            RelKind::Collection => state.collection_rel = Some(value.into()),
            RelKind::Single => state.single_rel = Some(value.into()),
        }
    }
}
