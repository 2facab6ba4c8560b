//! Wire format tests for the payload types

use adyen_checkout::action::{
    Action, ActionType, AdditionalAction, AdditionalActionErrorResponse, AdditionalActionState,
    HttpMethod, ResultCode,
};
use adyen_checkout::config::InitializationData;
use adyen_checkout::methods::{PaymentMethodsResponse, RecurringDetail};
use adyen_checkout::options::{
    CreditCardPlaceholder, CssProperties, OpacityValue, Placeholders, StyleOptions,
};
use adyen_checkout::{
    CardField, CardPaymentMethodState, CardState, CardStateData, ComponentType, PaymentMethodType,
    ValidationState,
};
use serde_json::json;

#[test]
fn test_payment_method_type_wire_codes() {
    assert_eq!(
        serde_json::to_value(PaymentMethodType::GooglePay).unwrap(),
        json!("paywithgoogle")
    );
    assert_eq!(
        serde_json::to_value(PaymentMethodType::Sofort).unwrap(),
        json!("directEbanking")
    );
    assert_eq!(
        serde_json::to_value(PaymentMethodType::WeChatPayQr).unwrap(),
        json!("wechatpayQR")
    );
    assert_eq!(
        serde_json::to_value(PaymentMethodType::Bancontact).unwrap(),
        json!("bcmc")
    );

    let parsed: PaymentMethodType = serde_json::from_value(json!("sepadirectdebit")).unwrap();
    assert_eq!(parsed, PaymentMethodType::Sepa);
}

#[test]
fn test_unknown_payment_method_code_fails_to_parse() {
    let result: Result<PaymentMethodType, _> = serde_json::from_value(json!("carte-bancaire"));
    assert!(result.is_err());
}

#[test]
fn test_component_type_wire_code() {
    assert_eq!(
        serde_json::to_value(ComponentType::SecuredFields).unwrap(),
        json!("securedfields")
    );
}

#[test]
fn test_action_type_wire_codes() {
    assert_eq!(
        serde_json::to_value(ActionType::ThreeDs2Fingerprint).unwrap(),
        json!("threeDS2Fingerprint")
    );
    assert_eq!(
        serde_json::to_value(ActionType::ThreeDs2).unwrap(),
        json!("threeDS2")
    );
    assert_eq!(
        serde_json::to_value(ActionType::QrCode).unwrap(),
        json!("qrCode")
    );
    assert_eq!(ActionType::Redirect.as_str(), "redirect");
}

#[test]
fn test_card_field_wire_codes() {
    assert_eq!(
        serde_json::to_value(CardField::CardNumber).unwrap(),
        json!("encryptedCardNumber")
    );
    assert_eq!(
        serde_json::to_value(CardField::ExpiryDate).unwrap(),
        json!("encryptedExpiryDate")
    );
}

#[test]
fn test_card_state_serializes_with_wire_names() {
    let state = CardState {
        data: CardStateData {
            payment_method: CardPaymentMethodState {
                encrypted_card_number: Some("enc1".to_string()),
                encrypted_expiry_month: Some("enc2".to_string()),
                encrypted_expiry_year: Some("enc3".to_string()),
                encrypted_security_code: Some("enc4".to_string()),
                holder_name: Some("Jane Doe".to_string()),
            },
        },
        is_valid: Some(true),
        valid: None,
        errors: None,
    };

    let serialized = serde_json::to_value(&state).unwrap();
    assert_eq!(
        serialized,
        json!({
            "data": {
                "paymentMethod": {
                    "encryptedCardNumber": "enc1",
                    "encryptedExpiryMonth": "enc2",
                    "encryptedExpiryYear": "enc3",
                    "encryptedSecurityCode": "enc4",
                    "holderName": "Jane Doe"
                }
            },
            "isValid": true
        })
    );
}

#[test]
fn test_validation_state_uses_camel_case_and_omits_absent_fields() {
    let state = ValidationState {
        valid: false,
        field_type: Some(CardField::SecurityCode),
        end_digits: None,
        encrypted_field_name: Some("encryptedSecurityCode".to_string()),
        i18n: Some("Incomplete field".to_string()),
        error: Some("error.va.sf-cc-cvc.01".to_string()),
        error_key: Some("invalid.cvc".to_string()),
    };

    let serialized = serde_json::to_value(&state).unwrap();
    assert_eq!(serialized["fieldType"], json!("encryptedSecurityCode"));
    assert_eq!(serialized["encryptedFieldName"], json!("encryptedSecurityCode"));
    assert_eq!(serialized["errorKey"], json!("invalid.cvc"));
    assert!(serialized.get("endDigits").is_none());

    let parsed: ValidationState = serde_json::from_value(json!({
        "valid": true,
        "fieldType": "encryptedCardNumber",
        "endDigits": "1111"
    }))
    .unwrap();
    assert!(parsed.valid);
    assert_eq!(parsed.field_type, Some(CardField::CardNumber));
    assert_eq!(parsed.end_digits.as_deref(), Some("1111"));
}

#[test]
fn test_action_parses_from_wire_payload() {
    let action: Action = serde_json::from_value(json!({
        "method": "POST",
        "paymentData": "Ab02b4c0...",
        "paymentMethodType": "scheme",
        "type": "threeDS2Fingerprint",
        "url": "https://checkoutshopper-test.example.com/3ds2"
    }))
    .unwrap();

    assert_eq!(action.method, HttpMethod::Post);
    assert_eq!(action.payment_method_type, PaymentMethodType::CreditCard);
    assert_eq!(action.r#type, ActionType::ThreeDs2Fingerprint);
    assert_eq!(action.payment_data, "Ab02b4c0...");
}

#[test]
fn test_additional_action_state_roundtrip() {
    let state = AdditionalActionState {
        data: AdditionalAction {
            result_code: ResultCode::ChallengeShopper,
            action: "eyJ0eXBlIjoi...".to_string(),
        },
        is_valid: Some(true),
    };

    let serialized = serde_json::to_value(&state).unwrap();
    assert_eq!(serialized["data"]["resultCode"], json!("ChallengeShopper"));
    assert_eq!(serialized["isValid"], json!(true));

    let parsed: AdditionalActionState = serde_json::from_value(serialized).unwrap();
    assert_eq!(parsed, state);
}

#[test]
fn test_additional_action_error_response_keeps_provider_data_name() {
    let response: AdditionalActionErrorResponse = serde_json::from_value(json!({
        "provider_data": {
            "resultCode": "IdentifyShopper",
            "action": "eyJ0eXBlIjoi..."
        },
        "errors": [{ "code": "additional_action_required" }]
    }))
    .unwrap();

    assert_eq!(
        response.provider_data.result_code,
        ResultCode::IdentifyShopper
    );
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].code, "additional_action_required");

    let serialized = serde_json::to_value(&response).unwrap();
    assert!(
        serialized.get("provider_data").is_some(),
        "this payload keeps its snake_case field on the wire"
    );
}

#[test]
fn test_payment_methods_response_parses_realistic_payload() {
    let response: PaymentMethodsResponse = serde_json::from_value(json!({
        "groups": [
            { "groupType": "card", "name": "Credit Card", "types": ["mc", "visa", "amex"] }
        ],
        "paymentMethods": [
            {
                "brands": ["mc", "visa"],
                "details": [
                    { "key": "encryptedCardNumber", "type": "cardToken" },
                    { "key": "encryptedSecurityCode", "type": "cardToken" }
                ],
                "name": "Credit Card",
                "supportsRecurring": true,
                "type": "scheme"
            },
            { "name": "iDEAL", "type": "ideal" }
        ],
        "storedPaymentMethods": [
            {
                "brand": "visa",
                "expiryMonth": "03",
                "expiryYear": "2030",
                "holderName": "Jane Doe",
                "id": "8415",
                "lastFour": "1111",
                "name": "VISA",
                "supportedShopperInteractions": ["Ecommerce", "ContAuth"],
                "type": "scheme"
            }
        ]
    }))
    .unwrap();

    let methods = response.payment_methods.as_ref().unwrap();
    assert_eq!(methods.len(), 2);
    assert_eq!(methods[0].r#type.as_deref(), Some("scheme"));
    assert_eq!(methods[0].details.as_ref().unwrap().len(), 2);
    assert_eq!(methods[0].supports_recurring, Some(true));

    let stored = &response.stored_payment_methods.as_ref().unwrap()[0];
    assert_eq!(stored.last_four.as_deref(), Some("1111"));
    assert_eq!(stored.name, "VISA");

    let group = &response.groups.as_ref().unwrap()[0];
    assert_eq!(group.group_type.as_deref(), Some("card"));
}

#[test]
fn test_recurring_detail_flattens_its_payment_method() {
    let detail: RecurringDetail = serde_json::from_value(json!({
        "name": "VISA",
        "type": "scheme",
        "recurringDetailReference": "8415995487234100",
        "storedDetails": {
            "card": {
                "expiryMonth": "03",
                "expiryYear": "2030",
                "holderName": "Jane Doe",
                "number": "1111"
            }
        }
    }))
    .unwrap();

    assert_eq!(detail.payment_method.name.as_deref(), Some("VISA"));
    assert_eq!(
        detail.recurring_detail_reference.as_deref(),
        Some("8415995487234100")
    );
    let card = detail.stored_details.as_ref().unwrap().card.as_ref().unwrap();
    assert_eq!(card.number, "1111");

    let serialized = serde_json::to_value(&detail).unwrap();
    assert_eq!(serialized["name"], json!("VISA"));
    assert!(
        serialized.get("paymentMethod").is_none(),
        "the base payment method fields must flatten into the top level"
    );
}

#[test]
fn test_css_properties_use_vendor_prefixed_names() {
    let css = CssProperties {
        color: Some("#00112c".to_string()),
        font_family: Some("Helvetica, sans-serif".to_string()),
        moz_osx_font_smoothing: Some("grayscale".to_string()),
        webkit_font_smoothing: Some("antialiased".to_string()),
        opacity: Some(OpacityValue::Number(0.9)),
        ..CssProperties::default()
    };

    let serialized = serde_json::to_value(&css).unwrap();
    assert_eq!(serialized["mozOsxFontSmoothing"], json!("grayscale"));
    assert_eq!(serialized["webkitFontSmoothing"], json!("antialiased"));
    assert_eq!(serialized["fontFamily"], json!("Helvetica, sans-serif"));
    assert_eq!(serialized["opacity"], json!(0.9));
    assert!(
        serialized.get("background").is_none(),
        "unset properties must not appear on the wire"
    );
}

#[test]
fn test_style_options_roundtrip() {
    let styles = StyleOptions {
        base: Some(CssProperties {
            color: Some("#00112c".to_string()),
            font_size: Some("16px".to_string()),
            ..CssProperties::default()
        }),
        error: Some(CssProperties {
            color: Some("#d10244".to_string()),
            ..CssProperties::default()
        }),
        placeholder: None,
        validated: None,
    };

    let serialized = serde_json::to_value(&styles).unwrap();
    assert_eq!(serialized["base"]["fontSize"], json!("16px"));
    assert!(serialized.get("placeholder").is_none());

    let parsed: StyleOptions = serde_json::from_value(serialized).unwrap();
    assert_eq!(parsed, styles);
}

#[test]
fn test_credit_card_placeholder_requires_security_code() {
    let placeholders = Placeholders::CreditCard(CreditCardPlaceholder {
        encrypted_card_number: Some("1234 5678 9012 3456".to_string()),
        encrypted_expiry_date: None,
        encrypted_security_code: "123".to_string(),
    });

    let serialized = serde_json::to_value(&placeholders).unwrap();
    assert_eq!(serialized["encryptedSecurityCode"], json!("123"));
    assert!(serialized.get("encryptedExpiryDate").is_none());

    let missing_code: Result<CreditCardPlaceholder, _> =
        serde_json::from_value(json!({ "encryptedCardNumber": "1234" }));
    assert!(missing_code.is_err());
}

#[test]
fn test_initialization_data_roundtrip() {
    let data: InitializationData = serde_json::from_value(json!({
        "clientKey": "test_870be2...",
        "environment": "test",
        "paymentMethodsResponse": {
            "paymentMethods": [{ "name": "iDEAL", "type": "ideal" }]
        }
    }))
    .unwrap();

    assert_eq!(data.client_key.as_deref(), Some("test_870be2..."));
    assert_eq!(data.environment.as_deref(), Some("test"));
    assert!(data.payment_methods_response.is_some());

    let serialized = serde_json::to_value(&data).unwrap();
    assert_eq!(serialized["clientKey"], json!("test_870be2..."));
}
