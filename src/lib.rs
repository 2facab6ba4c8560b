//! # adyen-checkout - typed surface for the Adyen web checkout components
//!
//! The hosted checkout widget is loaded and run by the vendor; a host page
//! configures it, registers callbacks, and receives loosely typed state
//! payloads back. This library provides the configuration values, option
//! variants, payload types, and callback signatures for that boundary,
//! plus runtime classification of the untyped component state the widget
//! reports.

pub mod action;
pub mod component;
pub mod config;
pub mod error;
pub mod events;
pub mod methods;
pub mod options;
pub mod state;
pub mod types;

// Re-exports for convenience
pub use component::{Checkout, Component};
pub use config::{CheckoutConfiguration, Environment};
pub use error::{CheckoutError, ComponentError, Result};
pub use events::ComponentEvents;
pub use state::{is_card_state, ComponentState};
pub use types::*;

/// Current version of the adyen-checkout library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation of the vendor checkout components this surface tracks
pub const COMPONENTS_VERSION: u32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert_eq!(COMPONENTS_VERSION, 3);
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_payment_method_type_names() {
        assert_eq!(PaymentMethodType::CreditCard.as_str(), "scheme");
        assert_eq!(PaymentMethodType::GooglePay.as_str(), "paywithgoogle");
        assert_eq!(PaymentMethodType::Sofort.as_str(), "directEbanking");
        assert_eq!(PaymentMethodType::WeChatPayQr.as_str(), "wechatpayQR");

        assert_eq!(
            PaymentMethodType::from_name("scheme"),
            Some(PaymentMethodType::CreditCard)
        );
        assert_eq!(
            PaymentMethodType::from_name("klarna_paynow"),
            Some(PaymentMethodType::KlarnaPayNow)
        );
        assert_eq!(PaymentMethodType::from_name("unknown-method"), None);
    }

    #[test]
    fn test_payment_method_type_name_roundtrip() {
        let all = [
            PaymentMethodType::Ach,
            PaymentMethodType::AliPay,
            PaymentMethodType::Bancontact,
            PaymentMethodType::CreditCard,
            PaymentMethodType::Klarna,
            PaymentMethodType::KlarnaPayNow,
            PaymentMethodType::KlarnaAccount,
            PaymentMethodType::Ideal,
            PaymentMethodType::GiroPay,
            PaymentMethodType::GooglePay,
            PaymentMethodType::Sepa,
            PaymentMethodType::Sofort,
            PaymentMethodType::Vipps,
            PaymentMethodType::WeChatPayQr,
        ];

        for method in all {
            assert_eq!(
                PaymentMethodType::from_name(method.as_str()),
                Some(method),
                "wire name {} must resolve back to its payment method",
                method.as_str()
            );
        }
    }

    #[test]
    fn test_environment_names() {
        assert_eq!(Environment::Test.as_str(), "test");
        assert_eq!(Environment::Live.as_str(), "live");

        assert_eq!(Environment::from_name("test"), Some(Environment::Test));
        assert_eq!(Environment::from_name("live"), Some(Environment::Live));
        assert_eq!(Environment::from_name("staging"), None);
    }

    #[test]
    fn test_card_field_names() {
        assert_eq!(CardField::CardNumber.as_str(), "encryptedCardNumber");
        assert_eq!(CardField::SecurityCode.as_str(), "encryptedSecurityCode");
        assert_eq!(CardField::ExpiryDate.as_str(), "encryptedExpiryDate");
    }

    #[test]
    fn test_configuration_builder() {
        let config = CheckoutConfiguration::new()
            .with_environment(Environment::Test)
            .with_locale("nl-NL")
            .with_client_key("test_client_key")
            .with_show_pay_button(true);

        assert_eq!(config.environment, Some(Environment::Test));
        assert_eq!(config.locale.as_deref(), Some("nl-NL"));
        assert_eq!(config.client_key.as_deref(), Some("test_client_key"));
        assert!(config.show_pay_button);
        assert!(config.origin_key.is_none());

        config.validate().unwrap();
    }

    #[test]
    fn test_configuration_requires_an_account_key() {
        let config = CheckoutConfiguration::new().with_environment(Environment::Test);

        let error = config.validate().unwrap_err();
        assert!(
            error.to_string().contains("client key"),
            "validation error must mention the missing key - actual: {}",
            error
        );
    }

    #[test]
    fn test_configuration_rejects_empty_key() {
        let config = CheckoutConfiguration::new().with_client_key("");

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_configuration_accepts_origin_key_alone() {
        let config = CheckoutConfiguration::new().with_origin_key("pub.v2.origin");

        config.validate().unwrap();
    }

    #[test]
    fn test_component_events_debug_hides_callbacks() {
        let events = ComponentEvents::new()
            .with_on_change(|_, _| {})
            .with_on_error(|_, _| {});

        let printed = format!("{:?}", events);
        assert!(
            printed.contains("<function>"),
            "registered callbacks must print as <function> - actual: {}",
            printed
        );
        assert!(printed.contains("on_field_valid: None"));
    }

    #[test]
    fn test_credit_card_options_builder() {
        let options = options::CreditCardComponentOptions::new()
            .with_brands(vec!["visa".to_string(), "mc".to_string()])
            .with_has_holder_name(true)
            .with_holder_name_required(true)
            .with_enable_store_details(false);

        assert_eq!(
            options.brands.as_deref(),
            Some(&["visa".to_string(), "mc".to_string()][..])
        );
        assert_eq!(options.has_holder_name, Some(true));
        assert_eq!(options.holder_name_required, Some(true));
        assert_eq!(options.enable_store_details, Some(false));
        assert!(options.styles.is_none());
        assert!(options.events.on_change.is_none());
    }

    #[test]
    fn test_additional_action_options_builder() {
        let options = options::AdditionalActionOptions::new("challenge-container")
            .with_widget_size("02");

        assert_eq!(options.container_id, "challenge-container");
        assert_eq!(options.widget_size.as_deref(), Some("02"));
        assert!(options.callbacks.on_complete.is_none());
    }

    #[test]
    fn test_checkout_error_helpers() {
        let error = CheckoutError::unsupported_payment_method("sofort_legacy");
        assert!(error.to_string().contains("sofort_legacy"));

        let error = CheckoutError::config("missing key");
        assert!(error.to_string().contains("Configuration error"));

        let component_error = ComponentError {
            error_code: "error.va.sf-cc-num.01".to_string(),
            message: "Unsupported card entered".to_string(),
        };
        let wrapped: CheckoutError = component_error.into();
        assert!(wrapped.to_string().contains("error.va.sf-cc-num.01"));
    }
}
