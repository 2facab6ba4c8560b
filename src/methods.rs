//! Payment method catalog payloads
//!
//! The full response of the payment methods endpoint, which the host backend
//! fetches and passes into the checkout configuration to generate payment
//! forms.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payment methods response passed into checkout configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsResponse {
    /// Groups of payment methods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<PaymentMethodGroup>>,
    /// Detailed list of one-click payment methods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_click_payment_methods: Option<RecurringDetail>,
    /// Payment methods required to generate payment forms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_methods: Option<Vec<PaymentMethod>>,
    /// Stored payment methods of the shopper
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_payment_methods: Option<Vec<StoredPaymentMethod>>,
}

/// A payment method available to the shopper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    /// Possible brands, for example visa or mc
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<String>>,
    /// Payment method specific configuration blob
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
    /// Input details to collect to complete a payment with this method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<InputDetail>>,
    /// The group this payment method belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    /// Displayable name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Echo data required in later calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<String>,
    /// Whether this payment method supports tokenization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_recurring: Option<bool>,
    /// The unique payment method code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// A payment method the shopper stored earlier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPaymentMethod {
    /// Brand of the card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Month the card expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
    /// Year the card expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    /// Unique identifier of this stored payment method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Last four digits of the PAN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_four: Option<String>,
    /// Display name of the stored payment method
    pub name: String,
    /// Shopper's email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_email: Option<String>,
    /// Shopper interactions supported by this stored payment method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_shopper_interactions: Option<Vec<String>>,
    /// The type of payment method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// One-click payment method carrying previously stored details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDetail {
    #[serde(flatten)]
    pub payment_method: PaymentMethod,
    /// Reference that uniquely identifies the recurring detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_detail_reference: Option<String>,
    /// Previously stored payment details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_details: Option<StoredDetails>,
}

/// Previously stored payment details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDetails {
    /// Stored bank account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,
    /// Stored card information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Email associated with the stored payment details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

/// A stored bank account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    /// Bank account number, without separators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_city: Option<String>,
    /// Location id of the bank, nil in most cases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_location_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    /// SWIFT address assigned to the bank, nil in most cases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic: Option<String>,
    /// ISO two-character country code where the bank is located
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// International Bank Account Number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// Name of the bank account holder. Non-Latin characters are replaced
    /// with corresponding Latin ones before the account is stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    /// Tax id of the bank account holder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

/// A stored card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card verification code. Known as CVV2/CVC2 (3 digits) or CID
    /// (4 digits) depending on the brand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    /// Card expiry month, two digits, zero padded
    pub expiry_month: String,
    /// Card expiry year, four digits
    pub expiry_year: String,
    /// Name of the cardholder as printed on the card
    pub holder_name: String,
    /// Issue number of the card, for some UK debit cards only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<String>,
    /// Card number without separators. Responses only carry the last four
    /// digits.
    pub number: String,
    /// Month component of the start date, for some UK debit cards only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_number: Option<String>,
    /// Year component of the start date, for some UK debit cards only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<String>,
}

/// Group membership of a payment method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Name of the group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Echo data to use when the payment method is displayed as part of
    /// this group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<String>,
    /// Unique code of the group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// A group of payment methods
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodGroup {
    /// Type to submit for any payment method in this group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    /// Human readable name of this group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Payment method types that belong to this group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

/// An input to collect from the shopper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDetail {
    /// Configuration parameters for the required input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
    /// Nested input details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<SubInputDetail>>,
    /// For selects, the URL from which to query the items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_search_url: Option<String>,
    /// For selects, the items to choose from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    /// Value to provide in the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// True when this input value is optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    /// Type of the required input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Pre-filled value, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A nested input to collect from the shopper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubInputDetail {
    /// Configuration parameters for the required input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<Value>,
    /// For selects, the items to choose from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    /// Value to provide in the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// True when this input is optional to provide
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    /// Type of the required input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Pre-filled value, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A selectable item of a select input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Value to provide in the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
