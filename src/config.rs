//! Checkout configuration
//!
//! Configuration is a plain value built once by the host and passed
//! explicitly wherever the checkout is constructed. Nothing here is global.

use crate::component::Component;
use crate::error::{CheckoutError, Result};
use crate::events::CardStateCallbackArc;
use crate::methods::PaymentMethodsResponse;
use crate::types::CardState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Environment the hosted checkout runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Use while integrating
    Test,
    /// Switch to this when ready to accept live payments
    Live,
}

impl Environment {
    /// Get the environment identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Live => "live",
        }
    }

    /// Get an environment by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "test" => Some(Environment::Test),
            "live" => Some(Environment::Live),
            _ => None,
        }
    }
}

/// Widget toggle for one of the Klarna payment methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KlarnaConfiguration {
    pub use_klarna_widget: bool,
}

/// Configuration for specific payment methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentMethodsConfiguration {
    pub klarna: KlarnaConfiguration,
    pub klarna_account: KlarnaConfiguration,
    pub klarna_paynow: KlarnaConfiguration,
}

/// Configuration for a hosted checkout instance
#[derive(Clone, Default)]
pub struct CheckoutConfiguration {
    /// Environment to run against
    pub environment: Option<Environment>,
    /// Shopper locale, used to pick the language rendered in the components
    pub locale: Option<String>,
    /// Origin key of the host website
    pub origin_key: Option<String>,
    /// Client key of the merchant account
    pub client_key: Option<String>,
    /// Full payment methods response, passed once at checkout level so the
    /// individual components do not need their own copies
    pub payment_methods_response: Option<PaymentMethodsResponse>,
    /// Configuration for specific payment methods
    pub payment_methods_configuration: PaymentMethodsConfiguration,
    pub show_pay_button: bool,
    /// Custom localizations, locale to field key to text, for shopper
    /// languages the components do not ship translations for
    pub translations: Option<HashMap<String, HashMap<String, String>>>,
    /// Checkout level change handler. Components may override it with their
    /// own change callback.
    pub on_change: Option<CardStateCallbackArc>,
    /// Checkout level additional details handler
    pub on_additional_details: Option<CardStateCallbackArc>,
}

impl fmt::Debug for CheckoutConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutConfiguration")
            .field("environment", &self.environment)
            .field("locale", &self.locale)
            .field("origin_key", &self.origin_key)
            .field("client_key", &self.client_key)
            .field("payment_methods_response", &self.payment_methods_response)
            .field(
                "payment_methods_configuration",
                &self.payment_methods_configuration,
            )
            .field("show_pay_button", &self.show_pay_button)
            .field("translations", &self.translations)
            .field("on_change", &self.on_change.as_ref().map(|_| "<function>"))
            .field(
                "on_additional_details",
                &self.on_additional_details.as_ref().map(|_| "<function>"),
            )
            .finish()
    }
}

impl CheckoutConfiguration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the environment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set the shopper locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the origin key
    pub fn with_origin_key(mut self, origin_key: impl Into<String>) -> Self {
        self.origin_key = Some(origin_key.into());
        self
    }

    /// Set the client key
    pub fn with_client_key(mut self, client_key: impl Into<String>) -> Self {
        self.client_key = Some(client_key.into());
        self
    }

    /// Set the payment methods response
    pub fn with_payment_methods_response(mut self, response: PaymentMethodsResponse) -> Self {
        self.payment_methods_response = Some(response);
        self
    }

    /// Set the per payment method configuration
    pub fn with_payment_methods_configuration(
        mut self,
        configuration: PaymentMethodsConfiguration,
    ) -> Self {
        self.payment_methods_configuration = configuration;
        self
    }

    /// Show or hide the pay button rendered by the components
    pub fn with_show_pay_button(mut self, show: bool) -> Self {
        self.show_pay_button = show;
        self
    }

    /// Set the custom localizations
    pub fn with_translations(
        mut self,
        translations: HashMap<String, HashMap<String, String>>,
    ) -> Self {
        self.translations = Some(translations);
        self
    }

    /// Set the checkout level change handler
    pub fn with_on_change(
        mut self,
        callback: impl Fn(&CardState, Option<&dyn Component>) + Send + Sync + 'static,
    ) -> Self {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// Set the checkout level additional details handler
    pub fn with_on_additional_details(
        mut self,
        callback: impl Fn(&CardState, Option<&dyn Component>) + Send + Sync + 'static,
    ) -> Self {
        self.on_additional_details = Some(Arc::new(callback));
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let key = self.client_key.as_deref().or(self.origin_key.as_deref());
        match key {
            None => Err(CheckoutError::config(
                "Either a client key or an origin key is required",
            )),
            Some(key) if key.is_empty() => {
                Err(CheckoutError::config("Account key cannot be empty"))
            }
            Some(_) => Ok(()),
        }
    }
}

/// Initialization data a host backend hands to the payment page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods_response: Option<PaymentMethodsResponse>,
}
