//! Callback plumbing for component events
//!
//! The hosted components invoke these callbacks; the host registers them.
//! Change and submit handlers receive classified component state: the
//! dispatch helpers on [`ComponentEvents`] accept the component's raw JSON
//! payload and run the shape probe once before anything reaches the host.

use crate::action::AdditionalActionState;
use crate::component::Component;
use crate::error::ComponentError;
use crate::state::ComponentState;
use crate::types::{CardState, ValidationState};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Callback invoked with classified component state
pub type StateCallback = dyn Fn(&ComponentState, &dyn Component) + Send + Sync;

/// `StateCallback` wrapped in Arc
pub type StateCallbackArc = Arc<StateCallback>;

/// Callback invoked with a field validation report
pub type ValidationCallback = dyn Fn(&ValidationState, &dyn Component) + Send + Sync;

/// `ValidationCallback` wrapped in Arc
pub type ValidationCallbackArc = Arc<ValidationCallback>;

/// Checkout level callback invoked with card state
pub type CardStateCallback = dyn Fn(&CardState, Option<&dyn Component>) + Send + Sync;

/// `CardStateCallback` wrapped in Arc
pub type CardStateCallbackArc = Arc<CardStateCallback>;

/// Callback invoked while an additional action component collects details
pub type AdditionalDetailsCallback =
    dyn Fn(&AdditionalActionState, Option<&dyn Component>) + Send + Sync;

/// `AdditionalDetailsCallback` wrapped in Arc
pub type AdditionalDetailsCallbackArc = Arc<AdditionalDetailsCallback>;

/// Callback invoked when a component reports an error payload
pub type ComponentErrorCallback = dyn Fn(&ComponentError) + Send + Sync;

/// `ComponentErrorCallback` wrapped in Arc
pub type ComponentErrorCallbackArc = Arc<ComponentErrorCallback>;

/// Handle that cancels a running additional action flow
pub type CancelFn = Arc<dyn Fn() + Send + Sync>;

/// Callback invoked before an additional action component loads
pub type BeforeLoadCallback = dyn Fn(bool) + Send + Sync;

/// Callback invoked when an additional action component has loaded
pub type LoadCallback = dyn Fn(CancelFn) + Send + Sync;

/// Callback invoked when additional action verification completes
pub type CompleteCallback = dyn Fn() + Send + Sync;

/// Event callbacks a host registers on a checkout component
#[derive(Clone, Default)]
pub struct ComponentEvents {
    /// Called when the shopper enters data in the card input fields
    pub on_change: Option<StateCallbackArc>,
    /// Called when the shopper selects the pay button and payment details
    /// are valid
    pub on_submit: Option<StateCallbackArc>,
    /// Called for an invalid card number, invalid expiry date, or an
    /// incomplete field, and again when the error clears
    pub on_error: Option<ValidationCallbackArc>,
    /// Called when a field becomes valid
    pub on_field_valid: Option<ValidationCallbackArc>,
}

impl fmt::Debug for ComponentEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentEvents")
            .field("on_change", &self.on_change.as_ref().map(|_| "<function>"))
            .field("on_submit", &self.on_submit.as_ref().map(|_| "<function>"))
            .field("on_error", &self.on_error.as_ref().map(|_| "<function>"))
            .field(
                "on_field_valid",
                &self.on_field_valid.as_ref().map(|_| "<function>"),
            )
            .finish()
    }
}

impl ComponentEvents {
    /// Create an empty set of callbacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the change handler
    pub fn with_on_change(
        mut self,
        callback: impl Fn(&ComponentState, &dyn Component) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// Set the submit handler
    pub fn with_on_submit(
        mut self,
        callback: impl Fn(&ComponentState, &dyn Component) + Send + Sync + 'static,
    ) -> Self {
        self.on_submit = Some(Arc::new(callback));
        self
    }

    /// Set the error handler
    pub fn with_on_error(
        mut self,
        callback: impl Fn(&ValidationState, &dyn Component) + Send + Sync + 'static,
    ) -> Self {
        self.on_error = Some(Arc::new(callback));
        self
    }

    /// Set the field valid handler
    pub fn with_on_field_valid(
        mut self,
        callback: impl Fn(&ValidationState, &dyn Component) + Send + Sync + 'static,
    ) -> Self {
        self.on_field_valid = Some(Arc::new(callback));
        self
    }

    /// Classify a raw change payload and invoke the change handler on a
    /// match. Unrecognized payloads are dropped after a debug log; nothing
    /// ever propagates back into the component.
    pub fn emit_change(&self, state: &Value, component: &dyn Component) {
        self.emit_state(self.on_change.as_ref(), state, component);
    }

    /// Classify a raw submit payload and invoke the submit handler on a
    /// match
    pub fn emit_submit(&self, state: &Value, component: &dyn Component) {
        self.emit_state(self.on_submit.as_ref(), state, component);
    }

    fn emit_state(
        &self,
        callback: Option<&StateCallbackArc>,
        state: &Value,
        component: &dyn Component,
    ) {
        if let Some(callback) = callback {
            match ComponentState::from_value(state) {
                Some(classified) => callback(&classified, component),
                None => debug!("dropping component state payload that matched no known variant"),
            }
        }
    }

    /// Forward a validation report to the error handler
    pub fn emit_error(&self, state: &ValidationState, component: &dyn Component) {
        if let Some(callback) = &self.on_error {
            callback(state, component);
        }
    }

    /// Forward a validation report to the field valid handler
    pub fn emit_field_valid(&self, state: &ValidationState, component: &dyn Component) {
        if let Some(callback) = &self.on_field_valid {
            callback(state, component);
        }
    }
}

/// Lifecycle callbacks around an additional action component
#[derive(Clone, Default)]
pub struct AdditionalActionCallbacks {
    /// Called before the component is loaded
    pub on_before_load: Option<Arc<BeforeLoadCallback>>,
    /// Called when the component has loaded, with a handle that cancels the
    /// flow
    pub on_load: Option<Arc<LoadCallback>>,
    /// Called when the component verification completes
    pub on_complete: Option<Arc<CompleteCallback>>,
}

impl fmt::Debug for AdditionalActionCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdditionalActionCallbacks")
            .field(
                "on_before_load",
                &self.on_before_load.as_ref().map(|_| "<function>"),
            )
            .field("on_load", &self.on_load.as_ref().map(|_| "<function>"))
            .field(
                "on_complete",
                &self.on_complete.as_ref().map(|_| "<function>"),
            )
            .finish()
    }
}

impl AdditionalActionCallbacks {
    /// Create an empty set of callbacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the before load handler
    pub fn with_on_before_load(mut self, callback: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_before_load = Some(Arc::new(callback));
        self
    }

    /// Set the load handler
    pub fn with_on_load(mut self, callback: impl Fn(CancelFn) + Send + Sync + 'static) -> Self {
        self.on_load = Some(Arc::new(callback));
        self
    }

    /// Set the completion handler
    pub fn with_on_complete(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_complete = Some(Arc::new(callback));
        self
    }
}
