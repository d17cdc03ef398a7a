use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Synchronization state for one REST resource.
///
/// `loading` is true only while a load or save is in flight. `data` and
/// `error_message` are mutually exclusive: a successful fetch clears the
/// error, a failed one clears the data. While a view is editing, `data` is
/// owned by that view and resynchronized from the server response on save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error_message: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error_message: None,
        }
    }
}

impl<T> ResourceState<T> {
    /// A load begins: stale data and errors are dropped immediately
    pub fn start_load(&mut self) {
        self.loading = true;
        self.data = None;
        self.error_message = None;
    }

    /// A save begins: `data` stays, it is the request body
    pub fn start_save(&mut self) {
        self.loading = true;
    }

    /// A response body becomes the authoritative representation
    pub fn commit(&mut self, data: T) {
        self.data = Some(data);
        self.error_message = None;
        self.loading = false;
    }

    /// A load or save failed; attempted edits are discarded
    pub fn fail(&mut self, message: String) {
        self.data = None;
        self.error_message = Some(message);
        self.loading = false;
    }

    /// Local-only replacement of the edited representation
    pub fn set_data(&mut self, data: T) {
        self.data = Some(data);
        self.error_message = None;
        self.loading = false;
    }
}

/// A single form value, typed by the input's declared kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum FieldValue {
    Number(f64),
    Boolean(bool),
    Text(String),
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            // A cleared number input reports NaN, which has no JSON form
            FieldValue::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Boolean(b) => serde_json::Value::Bool(b),
            FieldValue::Text(s) => serde_json::Value::String(s),
        }
    }
}

/// Fold one changed form field into a resource, preserving all other
/// fields, by round-tripping through the JSON object representation.
pub fn apply_field_change<T>(data: &T, name: &str, value: FieldValue) -> Result<T, String>
where
    T: Serialize + DeserializeOwned,
{
    let mut json = serde_json::to_value(data).map_err(|e| e.to_string())?;
    match &mut json {
        serde_json::Value::Object(fields) => {
            fields.insert(name.to_string(), value.into());
        }
        _ => return Err(format!("cannot set field \"{name}\" on a non-object resource")),
    }
    serde_json::from_value(json).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        port: u16,
        enabled: bool,
    }

    fn sample() -> Sample {
        Sample {
            name: "ntp.pool.org".to_string(),
            port: 8266,
            enabled: false,
        }
    }

    #[test]
    fn text_change_preserves_other_fields() {
        let updated =
            apply_field_change(&sample(), "name", FieldValue::Text("time.nist.gov".into()))
                .unwrap();

        assert_eq!(updated.name, "time.nist.gov");
        assert_eq!(updated.port, 8266);
        assert!(!updated.enabled);
    }

    #[test]
    fn checkbox_change_flips_the_flag() {
        let updated = apply_field_change(&sample(), "enabled", FieldValue::Boolean(true)).unwrap();

        assert!(updated.enabled);
    }

    #[test]
    fn number_change_updates_numeric_field() {
        let updated = apply_field_change(&sample(), "port", FieldValue::Number(8080.0)).unwrap();

        assert_eq!(updated.port, 8080);
    }

    #[test]
    fn nan_number_does_not_deserialize_into_required_field() {
        // NaN becomes JSON null, which a required u16 field rejects
        assert!(apply_field_change(&sample(), "port", FieldValue::Number(f64::NAN)).is_err());
    }

    #[test]
    fn state_transitions_keep_data_and_error_exclusive() {
        let mut state = ResourceState::<Sample>::default();

        state.start_load();
        assert!(state.loading);
        assert!(state.data.is_none());

        state.commit(sample());
        assert!(!state.loading);
        assert!(state.error_message.is_none());
        assert!(state.data.is_some());

        state.fail("Invalid status code: 500".to_string());
        assert!(!state.loading);
        assert!(state.data.is_none());
        assert_eq!(
            state.error_message.as_deref(),
            Some("Invalid status code: 500")
        );
    }
}
