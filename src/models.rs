use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Transactional email
// ---------------------------------------------------------------------------

/// Envelope fields of a single-send email. Only `to` is required; every
/// other field is left out of the JSON when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub to: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub from: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub send_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reply_to: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reply_to_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,
}

impl Message {
    pub fn to(address: impl Into<String>) -> Self {
        Self {
            to: address.into(),
            ..Default::default()
        }
    }
}

/// A name/value pair substituted into an email template at send time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeField {
    pub name: String,
    pub value: String,
}

impl MergeField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Body of `POST /email/public/v1/singleEmail/send`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    pub email_id: u64,
    pub message: Message,
    /// Values for contact properties, used for personalization and stored
    /// on the contact record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact_properties: Vec<MergeField>,
    /// Values available to the template only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_properties: Vec<MergeField>,
}

impl SendEmailRequest {
    /// Minimal request: template `email_id` sent to `to`.
    pub fn new(email_id: u64, to: impl Into<String>) -> Self {
        Self {
            email_id,
            message: Message::to(to),
            contact_properties: Vec::new(),
            custom_properties: Vec::new(),
        }
    }
}

/// Response body of a single send.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResult {
    pub send_result: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub event_id: Option<EmailEventId>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmailEventId {
    pub id: String,
    pub created: i64,
}

// ---------------------------------------------------------------------------
// Contacts
// ---------------------------------------------------------------------------

/// A contact property update. `value` is free-form JSON since HubSpot
/// accepts strings, numbers and booleans depending on the property type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub property: String,
    pub value: serde_json::Value,
}

impl Property {
    pub fn new(property: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactBody {
    pub properties: Vec<Property>,
}

/// Response body of a contact upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpsertResult {
    pub vid: u64,
    pub is_new: bool,
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBody {
    pub emails: Vec<String>,
}

/// Per-address breakdown returned by list add/remove.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUpdateResult {
    #[serde(default)]
    pub updated: Vec<u64>,
    #[serde(default)]
    pub discarded: Vec<u64>,
    #[serde(default)]
    pub invalid_vids: Vec<u64>,
    #[serde(default)]
    pub invalid_emails: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_email_omits_empty_fields() {
        let req = SendEmailRequest::new(12345678, "tyler.durden@gmail.com");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({"emailId": 12345678, "message": {"to": "tyler.durden@gmail.com"}})
        );
    }

    #[test]
    fn full_email_uses_hubspot_field_names() {
        let req = SendEmailRequest {
            email_id: 2853049635,
            message: Message {
                send_id: "foobar".into(),
                cc: vec!["cc@example.com".into()],
                ..Message::to("example@hubspot.com")
            },
            contact_properties: vec![MergeField::new("first_name", "John")],
            custom_properties: vec![MergeField::new("item_1", "something they bought")],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "emailId": 2853049635u64,
                "message": {
                    "to": "example@hubspot.com",
                    "sendId": "foobar",
                    "cc": ["cc@example.com"]
                },
                "contactProperties": [{"name": "first_name", "value": "John"}],
                "customProperties": [{"name": "item_1", "value": "something they bought"}]
            })
        );

        let back: SendEmailRequest = serde_json::from_value(value).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn empty_optional_strings_are_omitted() {
        let req = SendEmailRequest {
            email_id: 1,
            message: Message {
                from: String::new(),
                send_id: String::new(),
                reply_to: String::new(),
                ..Message::to("a@b.com")
            },
            contact_properties: Vec::new(),
            custom_properties: Vec::new(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"emailId":1,"message":{"to":"a@b.com"}}"#
        );

        let back: SendEmailRequest =
            serde_json::from_str(r#"{"emailId":1,"message":{"to":"a@b.com"}}"#).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn contact_body_keeps_property_value_types() {
        let body = ContactBody {
            properties: vec![
                Property::new("firstname", "Gord"),
                Property::new("age", 42),
                Property::new("subscribed", true),
            ],
        };
        let text = serde_json::to_string(&body).unwrap();
        assert_eq!(
            text,
            r#"{"properties":[{"property":"firstname","value":"Gord"},{"property":"age","value":42},{"property":"subscribed","value":true}]}"#
        );
        let back: ContactBody = serde_json::from_str(&text).unwrap();
        assert_eq!(back, body);
    }

    #[test]
    fn list_update_result_decodes_hubspot_breakdown() {
        let result: ListUpdateResult = serde_json::from_str(
            r#"{"updated":[751],"discarded":[],"invalidVids":[],"invalidEmails":["nope"]}"#,
        )
        .unwrap();
        assert_eq!(result.updated, vec![751]);
        assert_eq!(result.invalid_emails, vec!["nope".to_string()]);
    }

    #[test]
    fn send_result_decodes_event_id() {
        let result: SendEmailResult = serde_json::from_str(
            r#"{"sendResult":"SENT","id":"62a4","eventId":{"id":"62a4","created":1513626117453}}"#,
        )
        .unwrap();
        assert_eq!(result.send_result, "SENT");
        assert_eq!(result.event_id.unwrap().created, 1513626117453);
    }
}
