//! Component option variants accepted at component creation time

use crate::action::AdditionalActionState;
use crate::component::Component;
use crate::error::ComponentError;
use crate::events::{
    AdditionalActionCallbacks, AdditionalDetailsCallbackArc, ComponentErrorCallbackArc,
    ComponentEvents,
};
use crate::methods::InputDetail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Styling for the secured input fields. All styling extends from `base`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleOptions {
    /// Base styling applied to the iframe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<CssProperties>,
    /// Styling applied when a field fails validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CssProperties>,
    /// Styling applied to the field's placeholder values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<CssProperties>,
    /// Styling applied once a field passes validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated: Option<CssProperties>,
}

/// Opacity accepts either a number or a string value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpacityValue {
    Number(f64),
    Text(String),
}

/// The subset of CSS properties the secured fields accept
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caret_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size_adjust: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_smoothing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_stretch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_variant_alternates: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_variant_caps: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_variant_east_asian: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_variant_ligatures: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_variant_numeric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moz_osx_font_smoothing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moz_transition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<OpacityValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webkit_font_smoothing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webkit_transition: Option<String>,
}

/// Aria attributes for one secured input field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCardAriaLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iframe_title: Option<String>,
}

/// Aria attributes for the custom card input fields, for web accessibility
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCardAriaLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_card_number: Option<CustomCardAriaLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_expiry_date: Option<CustomCardAriaLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_security_code: Option<CustomCardAriaLabel>,
}

/// Sample values shown in the card detail input fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardPlaceholder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_expiry_date: Option<String>,
    pub encrypted_security_code: String,
}

/// Sample values shown in the SEPA input fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SepaPlaceholder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban_number: Option<String>,
}

/// Placeholder sets per component family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Placeholders {
    CreditCard(CreditCardPlaceholder),
    Sepa(SepaPlaceholder),
}

/// Information used to prefill fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<BillingAddress>,
}

/// Billing address used to prefill fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    pub street: String,
    pub house_number_or_name: String,
    pub postal_code: String,
    pub city: String,
    pub state_or_province: String,
    pub country: String,
}

/// Options for the credit card component
#[derive(Debug, Clone, Default)]
pub struct CreditCardComponentOptions {
    /// Card brands the component will recognize
    pub brands: Option<Vec<String>>,
    /// Styling for the secured input fields
    pub styles: Option<StyleOptions>,
    pub show_brands_under_card_number: Option<bool>,
    /// Details array for the scheme type from the payment methods response
    pub details: Option<Vec<InputDetail>>,
    /// Show the checkbox to save card details for the next payment
    pub enable_store_details: Option<bool>,
    /// Request the name of the card holder
    pub has_holder_name: Option<bool>,
    /// Require the card holder name
    pub holder_name_required: Option<bool>,
    /// Information to prefill fields
    pub data: Option<PlaceholderData>,
    /// Card types used for brand recognition in the secured fields.
    /// Defaults to mc, visa, and amex on the component side.
    pub group_types: Option<Vec<String>>,
    /// Sample values shown in the card detail input fields
    pub placeholders: Option<Placeholders>,
    /// Event callbacks registered on the component
    pub events: ComponentEvents,
}

impl CreditCardComponentOptions {
    /// Create empty credit card options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recognized card brands
    pub fn with_brands(mut self, brands: Vec<String>) -> Self {
        self.brands = Some(brands);
        self
    }

    /// Set the secured field styling
    pub fn with_styles(mut self, styles: StyleOptions) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Show brand icons under the card number field
    pub fn with_show_brands_under_card_number(mut self, show: bool) -> Self {
        self.show_brands_under_card_number = Some(show);
        self
    }

    /// Set the input details for the scheme type
    pub fn with_details(mut self, details: Vec<InputDetail>) -> Self {
        self.details = Some(details);
        self
    }

    /// Show the checkbox to save card details
    pub fn with_enable_store_details(mut self, enable: bool) -> Self {
        self.enable_store_details = Some(enable);
        self
    }

    /// Request the name of the card holder
    pub fn with_has_holder_name(mut self, has: bool) -> Self {
        self.has_holder_name = Some(has);
        self
    }

    /// Require the card holder name
    pub fn with_holder_name_required(mut self, required: bool) -> Self {
        self.holder_name_required = Some(required);
        self
    }

    /// Set the prefill data
    pub fn with_data(mut self, data: PlaceholderData) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the card types used for brand recognition
    pub fn with_group_types(mut self, group_types: Vec<String>) -> Self {
        self.group_types = Some(group_types);
        self
    }

    /// Set the input field placeholders
    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = Some(placeholders);
        self
    }

    /// Set the event callbacks
    pub fn with_events(mut self, events: ComponentEvents) -> Self {
        self.events = events;
        self
    }
}

/// Options for the custom card component
#[derive(Debug, Clone, Default)]
pub struct CustomCardComponentOptions {
    /// Card brands the component will recognize
    pub brands: Option<Vec<String>>,
    /// Styling for the secured input fields
    pub styles: Option<StyleOptions>,
    pub show_brands_under_card_number: Option<bool>,
    /// Aria attributes for the input fields
    pub aria_labels: Option<CustomCardAriaLabels>,
    /// Automatically shift focus from the date field to the CVC field
    pub autofocus: Option<bool>,
    /// Event callbacks registered on the component
    pub events: ComponentEvents,
}

impl CustomCardComponentOptions {
    /// Create empty custom card options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recognized card brands
    pub fn with_brands(mut self, brands: Vec<String>) -> Self {
        self.brands = Some(brands);
        self
    }

    /// Set the secured field styling
    pub fn with_styles(mut self, styles: StyleOptions) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Set the aria attributes
    pub fn with_aria_labels(mut self, aria_labels: CustomCardAriaLabels) -> Self {
        self.aria_labels = Some(aria_labels);
        self
    }

    /// Automatically shift focus from the date field to the CVC field
    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = Some(autofocus);
        self
    }

    /// Set the event callbacks
    pub fn with_events(mut self, events: ComponentEvents) -> Self {
        self.events = events;
        self
    }
}

/// Options for the iDEAL issuer list component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdealComponentOptions {
    /// Set to false to remove the bank logos from the iDEAL form
    pub show_image: Option<bool>,
}

impl IdealComponentOptions {
    /// Create empty iDEAL options
    pub fn new() -> Self {
        Self::default()
    }

    /// Show or hide the bank logos
    pub fn with_show_image(mut self, show: bool) -> Self {
        self.show_image = Some(show);
        self
    }
}

/// Options accepted by [`crate::component::Checkout::create`]
#[derive(Debug, Clone)]
pub enum ComponentOptions {
    CreditCard(CreditCardComponentOptions),
    Ideal(IdealComponentOptions),
    CustomCard(CustomCardComponentOptions),
}

/// Options for the 3D Secure 2 device fingerprint component
#[derive(Clone)]
pub struct ThreeDs2FingerprintOptions {
    /// Called while the component collects device details
    pub on_additional_details: Option<AdditionalDetailsCallbackArc>,
    /// Called when the component reports an error
    pub on_error: ComponentErrorCallbackArc,
}

impl fmt::Debug for ThreeDs2FingerprintOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreeDs2FingerprintOptions")
            .field(
                "on_additional_details",
                &self.on_additional_details.as_ref().map(|_| "<function>"),
            )
            .field("on_error", &"<function>")
            .finish()
    }
}

impl ThreeDs2FingerprintOptions {
    /// Create fingerprint options. The error handler is required; the
    /// component has no other way to report a failed fingerprint.
    pub fn new(on_error: impl Fn(&ComponentError) + Send + Sync + 'static) -> Self {
        Self {
            on_additional_details: None,
            on_error: Arc::new(on_error),
        }
    }

    /// Set the additional details handler
    pub fn with_on_additional_details(
        mut self,
        callback: impl Fn(&AdditionalActionState, Option<&dyn Component>) + Send + Sync + 'static,
    ) -> Self {
        self.on_additional_details = Some(Arc::new(callback));
        self
    }
}

/// Options for the 3D Secure 2 challenge component
#[derive(Clone)]
pub struct ThreeDs2ChallengeOptions {
    /// Challenge window size code, 01 through 05:
    /// 01 = 250x400, 02 = 390x400, 03 = 500x600, 04 = 600x400,
    /// 05 = 100% x 100%
    pub challenge_window_size: Option<String>,
    /// Called while the component collects challenge details
    pub on_additional_details: Option<AdditionalDetailsCallbackArc>,
    /// Called when the component reports an error
    pub on_error: ComponentErrorCallbackArc,
}

impl fmt::Debug for ThreeDs2ChallengeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreeDs2ChallengeOptions")
            .field("challenge_window_size", &self.challenge_window_size)
            .field(
                "on_additional_details",
                &self.on_additional_details.as_ref().map(|_| "<function>"),
            )
            .field("on_error", &"<function>")
            .finish()
    }
}

impl ThreeDs2ChallengeOptions {
    /// Create challenge options. The error handler is required.
    pub fn new(on_error: impl Fn(&ComponentError) + Send + Sync + 'static) -> Self {
        Self {
            challenge_window_size: None,
            on_additional_details: None,
            on_error: Arc::new(on_error),
        }
    }

    /// Set the challenge window size code
    pub fn with_challenge_window_size(mut self, size: impl Into<String>) -> Self {
        self.challenge_window_size = Some(size.into());
        self
    }

    /// Set the additional details handler
    pub fn with_on_additional_details(
        mut self,
        callback: impl Fn(&AdditionalActionState, Option<&dyn Component>) + Send + Sync + 'static,
    ) -> Self {
        self.on_additional_details = Some(Arc::new(callback));
        self
    }
}

/// Options accepted by [`crate::component::Checkout::create_from_action`]
#[derive(Debug, Clone)]
pub enum ActionComponentOptions {
    Fingerprint(ThreeDs2FingerprintOptions),
    Challenge(ThreeDs2ChallengeOptions),
}

/// Options controlling where and how an additional action component renders
#[derive(Debug, Clone)]
pub struct AdditionalActionOptions {
    /// Element id of the container to insert the component into
    pub container_id: String,
    /// Challenge widget size code, 01 through 05:
    /// 01 = 250x400, 02 = 390x400, 03 = 500x600, 04 = 600x400,
    /// 05 = 100% x 100%
    pub widget_size: Option<String>,
    /// Lifecycle callbacks around the component
    pub callbacks: AdditionalActionCallbacks,
}

impl AdditionalActionOptions {
    /// Create options targeting the given container
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            widget_size: None,
            callbacks: AdditionalActionCallbacks::default(),
        }
    }

    /// Set the widget size code
    pub fn with_widget_size(mut self, size: impl Into<String>) -> Self {
        self.widget_size = Some(size.into());
        self
    }

    /// Set the lifecycle callbacks
    pub fn with_callbacks(mut self, callbacks: AdditionalActionCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }
}
