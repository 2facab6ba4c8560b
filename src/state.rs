//! Runtime discrimination of component state payloads
//!
//! The hosted components report state as untyped JSON through their change
//! and submit callbacks. The payload carries no explicit tag; card state is
//! recognized by the shape of `data.paymentMethod`. The helpers here run
//! that shape probe without assuming anything about the input, so a null,
//! a primitive, or a half-built object is simply not a match.

use crate::types::{
    CardPaymentMethodState, CardState, CardStateData, PaymentMethodState, WalletState,
    WalletStateData,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::trace;

/// Component state after classification.
///
/// Built by [`ComponentState::from_value`], the single place the shape probe
/// runs. Everything downstream can match exhaustively on the variants
/// instead of re-probing raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentState {
    /// State reported by a card component
    Card(CardState),
    /// State reported by a wallet or redirect style component
    Wallet(WalletState),
}

impl ComponentState {
    /// Classify an untyped component state payload.
    ///
    /// Card state wins when the probe in [`is_card_state`] matches, and its
    /// payload is then extracted leniently: leaves that are absent or not
    /// strings become `None` rather than a failure. A payload carrying a
    /// string `data.paymentMethod.type` classifies as wallet state.
    /// Anything else is no match, reported as `None` rather than an error;
    /// the caller decides whether an unrecognized payload matters.
    pub fn from_value(value: &Value) -> Option<Self> {
        if is_card_state(value) {
            return Some(ComponentState::Card(extract_card_state(value)));
        }
        if str_at(value, "/data/paymentMethod/type").is_some() {
            return Some(ComponentState::Wallet(extract_wallet_state(value)));
        }
        trace!("component state payload matched no known variant");
        None
    }

    /// True when this is card state
    pub fn is_card(&self) -> bool {
        matches!(self, ComponentState::Card(_))
    }

    /// Get the card state, if that is what this is
    pub fn as_card(&self) -> Option<&CardState> {
        match self {
            ComponentState::Card(state) => Some(state),
            ComponentState::Wallet(_) => None,
        }
    }

    /// Get the wallet state, if that is what this is
    pub fn as_wallet(&self) -> Option<&WalletState> {
        match self {
            ComponentState::Card(_) => None,
            ComponentState::Wallet(state) => Some(state),
        }
    }
}

/// Check whether an untyped component state payload has the shape of card
/// state.
///
/// Card state is recognized by a string `encryptedSecurityCode` or a string
/// `encryptedExpiryMonth` under `data.paymentMethod`; either field alone is
/// enough. The probe is total: null, primitives, and objects missing any
/// step of the path yield `false`, never a fault.
pub fn is_card_state(value: &Value) -> bool {
    str_at(value, "/data/paymentMethod/encryptedSecurityCode").is_some()
        || str_at(value, "/data/paymentMethod/encryptedExpiryMonth").is_some()
}

fn extract_card_state(value: &Value) -> CardState {
    let payment_method = CardPaymentMethodState {
        encrypted_card_number: owned_str_at(value, "/data/paymentMethod/encryptedCardNumber"),
        encrypted_expiry_month: owned_str_at(value, "/data/paymentMethod/encryptedExpiryMonth"),
        encrypted_expiry_year: owned_str_at(value, "/data/paymentMethod/encryptedExpiryYear"),
        encrypted_security_code: owned_str_at(value, "/data/paymentMethod/encryptedSecurityCode"),
        holder_name: owned_str_at(value, "/data/paymentMethod/holderName"),
    };

    CardState {
        data: CardStateData { payment_method },
        is_valid: value.get("isValid").and_then(Value::as_bool),
        valid: bool_map_at(value, "valid"),
        errors: string_map_at(value, "errors"),
    }
}

fn extract_wallet_state(value: &Value) -> WalletState {
    WalletState {
        data: WalletStateData {
            payment_method: PaymentMethodState {
                r#type: owned_str_at(value, "/data/paymentMethod/type").unwrap_or_default(),
            },
        },
    }
}

fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

fn owned_str_at(value: &Value, pointer: &str) -> Option<String> {
    str_at(value, pointer).map(str::to_owned)
}

fn bool_map_at(value: &Value, key: &str) -> Option<HashMap<String, bool>> {
    let entries = value.get(key)?.as_object()?;
    Some(
        entries
            .iter()
            .filter_map(|(field, flag)| flag.as_bool().map(|flag| (field.clone(), flag)))
            .collect(),
    )
}

fn string_map_at(value: &Value, key: &str) -> Option<HashMap<String, String>> {
    let entries = value.get(key)?.as_object()?;
    Some(
        entries
            .iter()
            .filter_map(|(field, text)| text.as_str().map(|text| (field.clone(), text.to_owned())))
            .collect(),
    )
}
