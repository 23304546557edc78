use near_sdk::serde_json::{Map, Value, json};
use near_sdk::{AccountId, env};

use super::{PREFIX, STANDARD, VERSION};

pub(crate) trait IntoEventValue {
    fn into_event_value(self) -> Value;
}

impl IntoEventValue for &str {
    fn into_event_value(self) -> Value {
        Value::String(self.to_owned())
    }
}

impl IntoEventValue for &String {
    fn into_event_value(self) -> Value {
        Value::String(self.clone())
    }
}

impl IntoEventValue for &AccountId {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoEventValue for u32 {
    fn into_event_value(self) -> Value {
        Value::Number(self.into())
    }
}

// u64/u128 go out as strings; JSON consumers lose precision above 2^53.
impl IntoEventValue for u64 {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoEventValue for u128 {
    fn into_event_value(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoEventValue for bool {
    fn into_event_value(self) -> Value {
        Value::Bool(self)
    }
}

/// NEP-297 event: `EVENT_JSON:{"standard","version","event","data":[{operation, author, ..fields}]}`.
pub(crate) struct EventBuilder {
    event_type: &'static str,
    operation: &'static str,
    author: String,
    fields: Map<String, Value>,
}

impl EventBuilder {
    pub(crate) fn new(event_type: &'static str, operation: &'static str, author: &AccountId) -> Self {
        Self {
            event_type,
            operation,
            author: author.to_string(),
            fields: Map::new(),
        }
    }

    pub(crate) fn field(mut self, key: &str, value: impl IntoEventValue) -> Self {
        self.fields.insert(key.into(), value.into_event_value());
        self
    }

    pub(crate) fn field_opt(mut self, key: &str, value: Option<impl IntoEventValue>) -> Self {
        if let Some(v) = value {
            self.fields.insert(key.into(), v.into_event_value());
        }
        self
    }

    pub(crate) fn emit(self) {
        let mut data = self.fields;
        data.insert("operation".into(), Value::String(self.operation.into()));
        data.insert("author".into(), Value::String(self.author));
        let event = json!({
            "standard": STANDARD,
            "version": VERSION,
            "event": self.event_type,
            "data": [data],
        });
        env::log_str(&format!("{PREFIX}{event}"));
    }
}
