//! Trait seams for the hosted checkout and its components
//!
//! The vendor script owns the implementations. These traits describe the
//! operations it exposes, so host code can be written and tested against
//! the boundary without the script present.

use crate::action::Action;
use crate::error::Result;
use crate::options::{ActionComponentOptions, ComponentOptions};
use crate::types::CardState;

/// Handle to a checkout component
pub trait Component {
    /// Mount the component into the container with the given element id
    fn mount(&mut self, container_id: &str) -> Result<()>;

    /// Remove the component from the page
    fn unmount(&mut self);

    /// Trigger the component's submit flow
    fn submit(&mut self);

    /// Surface validation errors on the rendered fields.
    ///
    /// Not every component renders its own validation UI; the default
    /// implementation does nothing.
    fn show_validation(&mut self) {}

    /// Component type the instance was created with, when known
    fn component_type(&self) -> Option<&str> {
        None
    }

    /// Last card state the component retained, when it retains one
    fn state(&self) -> Option<&CardState> {
        None
    }
}

/// Factory the hosted checkout exposes once initialized
pub trait Checkout {
    /// Component handle type produced by this checkout
    type Component: Component;

    /// Create a component for a payment method or component type code
    fn create(
        &self,
        component_type: &str,
        options: Option<ComponentOptions>,
    ) -> Result<Self::Component>;

    /// Create a component that performs the additional action returned by a
    /// payment request
    fn create_from_action(
        &self,
        action: Action,
        options: Option<ActionComponentOptions>,
    ) -> Result<Self::Component>;
}
