//! Additional action payloads for 3-D Secure, QR code, and redirect flows

use crate::types::PaymentMethodType;
use serde::{Deserialize, Serialize};

/// Front-end action the component performs after the initial payment call.
/// The host's next steps depend on which action the component performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    /// The payment qualifies for 3D Secure 2 and will go through either the
    /// frictionless or the challenge flow.
    #[serde(rename = "threeDS2Fingerprint")]
    ThreeDs2Fingerprint,

    /// The payment qualifies for 3D Secure 2 and the issuer is initiating a
    /// challenge flow.
    #[serde(rename = "threeDS2")]
    ThreeDs2,

    /// 3D Secure 1 fallback, used when the issuer does not support
    /// 3D Secure 2.
    #[serde(rename = "redirect")]
    Redirect,

    /// The component presents a QR code and reports additional details once
    /// the shopper scans it.
    #[serde(rename = "qrCode")]
    QrCode,

    /// The component displays the voucher the shopper uses to complete the
    /// payment.
    #[serde(rename = "voucher")]
    Voucher,

    /// The component displays the widget the shopper uses to complete the
    /// payment.
    #[serde(rename = "sdk")]
    Sdk,
}

impl ActionType {
    /// Get the wire identifier for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::ThreeDs2Fingerprint => "threeDS2Fingerprint",
            ActionType::ThreeDs2 => "threeDS2",
            ActionType::Redirect => "redirect",
            ActionType::QrCode => "qrCode",
            ActionType::Voucher => "voucher",
            ActionType::Sdk => "sdk",
        }
    }
}

/// HTTP method the host should use when handling a redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    #[serde(rename = "POST")]
    Post,
}

/// Result codes that require an additional shopper action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultCode {
    ChallengeShopper,
    Error,
    IdentifyShopper,
}

impl ResultCode {
    /// Get the wire identifier for this result code
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultCode::ChallengeShopper => "ChallengeShopper",
            ResultCode::Error => "Error",
            ResultCode::IdentifyShopper => "IdentifyShopper",
        }
    }
}

/// Action returned by a payment request, to be replayed into the checkout
/// through `create_from_action`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub method: HttpMethod,

    /// Value to submit in the payment details request when handling the
    /// redirect
    pub payment_data: String,

    pub payment_method_type: PaymentMethodType,

    /// Determines which additional front-end action the component performs
    pub r#type: ActionType,

    /// After the shopper completes the payment they are redirected back to
    /// the return URL using the same method
    pub url: String,
}

/// Additional action from the payment provider response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalAction {
    pub result_code: ResultCode,
    /// Opaque action blob to replay into the component
    pub action: String,
}

/// State reported while an additional action component is running
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalActionState {
    pub data: AdditionalAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
}

/// Error body returned when a payment requires an additional action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalActionErrorResponse {
    pub provider_data: AdditionalAction,
    pub errors: Vec<ErrorCode>,
}

/// Machine readable error code entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCode {
    pub code: String,
}
