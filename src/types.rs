//! Core payload types exchanged with the hosted checkout components

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Payment method codes recognized by the checkout components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethodType {
    #[serde(rename = "ach")]
    Ach,
    #[serde(rename = "alipay")]
    AliPay,
    #[serde(rename = "bcmc")]
    Bancontact,
    #[serde(rename = "scheme")]
    CreditCard,
    #[serde(rename = "klarna")]
    Klarna,
    #[serde(rename = "klarna_paynow")]
    KlarnaPayNow,
    #[serde(rename = "klarna_account")]
    KlarnaAccount,
    #[serde(rename = "ideal")]
    Ideal,
    #[serde(rename = "giropay")]
    GiroPay,
    #[serde(rename = "paywithgoogle")]
    GooglePay,
    #[serde(rename = "sepadirectdebit")]
    Sepa,
    #[serde(rename = "directEbanking")]
    Sofort,
    #[serde(rename = "vipps")]
    Vipps,
    #[serde(rename = "wechatpayQR")]
    WeChatPayQr,
}

impl PaymentMethodType {
    /// Get the wire identifier for this payment method
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodType::Ach => "ach",
            PaymentMethodType::AliPay => "alipay",
            PaymentMethodType::Bancontact => "bcmc",
            PaymentMethodType::CreditCard => "scheme",
            PaymentMethodType::Klarna => "klarna",
            PaymentMethodType::KlarnaPayNow => "klarna_paynow",
            PaymentMethodType::KlarnaAccount => "klarna_account",
            PaymentMethodType::Ideal => "ideal",
            PaymentMethodType::GiroPay => "giropay",
            PaymentMethodType::GooglePay => "paywithgoogle",
            PaymentMethodType::Sepa => "sepadirectdebit",
            PaymentMethodType::Sofort => "directEbanking",
            PaymentMethodType::Vipps => "vipps",
            PaymentMethodType::WeChatPayQr => "wechatpayQR",
        }
    }

    /// Look up a payment method by its wire identifier
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ach" => Some(PaymentMethodType::Ach),
            "alipay" => Some(PaymentMethodType::AliPay),
            "bcmc" => Some(PaymentMethodType::Bancontact),
            "scheme" => Some(PaymentMethodType::CreditCard),
            "klarna" => Some(PaymentMethodType::Klarna),
            "klarna_paynow" => Some(PaymentMethodType::KlarnaPayNow),
            "klarna_account" => Some(PaymentMethodType::KlarnaAccount),
            "ideal" => Some(PaymentMethodType::Ideal),
            "giropay" => Some(PaymentMethodType::GiroPay),
            "paywithgoogle" => Some(PaymentMethodType::GooglePay),
            "sepadirectdebit" => Some(PaymentMethodType::Sepa),
            "directEbanking" => Some(PaymentMethodType::Sofort),
            "vipps" => Some(PaymentMethodType::Vipps),
            "wechatpayQR" => Some(PaymentMethodType::WeChatPayQr),
            _ => None,
        }
    }
}

/// Component families exposed by the hosted checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentType {
    #[serde(rename = "securedfields")]
    SecuredFields,
}

impl ComponentType {
    /// Get the wire identifier for this component family
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::SecuredFields => "securedfields",
        }
    }
}

/// Secured input fields rendered by the card components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardField {
    #[serde(rename = "encryptedCardNumber")]
    CardNumber,
    #[serde(rename = "encryptedSecurityCode")]
    SecurityCode,
    #[serde(rename = "encryptedExpiryDate")]
    ExpiryDate,
}

impl CardField {
    /// Get the wire identifier for this field
    pub fn as_str(&self) -> &'static str {
        match self {
            CardField::CardNumber => "encryptedCardNumber",
            CardField::SecurityCode => "encryptedSecurityCode",
            CardField::ExpiryDate => "encryptedExpiryDate",
        }
    }
}

/// Payment method state reported by a card component.
///
/// The component reports state on every keystroke, so any of these fields
/// may still be absent while the shopper is mid-entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPaymentMethodState {
    /// Encrypted card number blob
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_card_number: Option<String>,
    /// Encrypted expiry month blob
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_expiry_month: Option<String>,
    /// Encrypted expiry year blob
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_expiry_year: Option<String>,
    /// Encrypted security code blob
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_security_code: Option<String>,
    /// Name of the cardholder as entered by the shopper
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
}

/// Envelope around the card payment method state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStateData {
    pub payment_method: CardPaymentMethodState,
}

/// State reported by a card component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardState {
    pub data: CardStateData,
    /// Whether the component considers all fields valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
    /// Per-field validity as reported by the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<HashMap<String, bool>>,
    /// Per-field error keys
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, String>>,
}

/// Payment method state reported by wallet and redirect style components
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodState {
    /// The unique payment method code
    pub r#type: String,
}

/// Envelope around a wallet payment method state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStateData {
    pub payment_method: PaymentMethodState,
}

/// State reported by a wallet or redirect style component
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletState {
    pub data: WalletStateData,
}

/// Field-level validation report delivered through the error and field valid
/// callbacks. Already unambiguous by call site, so it is never classified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationState {
    pub valid: bool,
    /// Which secured field the report concerns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_type: Option<CardField>,
    /// Last digits of the entered card number, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_digits: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted_field_name: Option<String>,
    /// Localized error text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,
}

impl ValidationState {
    /// Create a validation report with the given outcome
    pub fn new(valid: bool) -> Self {
        Self {
            valid,
            ..Self::default()
        }
    }
}
