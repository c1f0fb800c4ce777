use super::ApiClient;
use crate::error::PlutoraError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Identifies a component by where it lives: `/environmentName/hostName/layerType/componentName`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentPath {
    pub environment_name: String,
    pub host_name: String,
    /// As named in Settings > Customizations > Environments > Stack Layer.
    pub layer_type: String,
    pub component_name: String,
}

impl std::fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "/{}/{}/{}/{}",
            self.environment_name, self.host_name, self.layer_type, self.component_name
        )
    }
}

/// Transforms a list of records into a map of `record[key]` to `record[value]`.
///
/// Given `[{"a":"x","b":"y","c":"z"},{"a":"xx","b":"yy","c":"zz"}]`, a key of `b`
/// and a value of `c` produce `{"y":"z","yy":"zz"}`. Later records win on duplicate keys.
pub fn list_to_dict(
    records: &[Value],
    key: &str,
    value: &str,
) -> Result<HashMap<String, Value>, PlutoraError> {
    let mut key_value_pairs = HashMap::with_capacity(records.len());
    for record in records {
        let record_key = field(record, key)?;
        let record_value = field(record, value)?;
        key_value_pairs.insert(key_text(record_key), record_value.clone());
    }
    Ok(key_value_pairs)
}

/// Returns the GUID of the object at an API path with the given `field` value (usually its name).
pub async fn guid_by_path_and_name(
    client: &ApiClient,
    path: &str,
    name: &str,
    field: &str,
) -> Result<String, PlutoraError> {
    let objects = client.get(path).await?;
    let objects = as_list(&objects, path)?;

    let guids = list_to_dict(objects, field, "id")?;
    guids
        .get(name)
        .map(key_text)
        .ok_or_else(|| PlutoraError::LookupNotFound(format!("{field} {name:?} at {path}")))
}

/// Returns the GUID of the component at the given environment, host and stack layer.
pub async fn get_component_id(
    client: &ApiClient,
    path: &ComponentPath,
) -> Result<String, PlutoraError> {
    let environment_guid =
        guid_by_path_and_name(client, "environments", &path.environment_name, "name").await?;
    let environment = client
        .get(&format!("environments/{environment_guid}"))
        .await?;
    let hosts = as_list(field(&environment, "hosts")?, "hosts")?;

    // Only the first host with a matching name is considered.
    let mut layers: &[Value] = &[];
    for host in hosts {
        if field(host, "name")? == path.host_name.as_str() {
            layers = as_list(field(host, "layers")?, "layers")?;
            break;
        }
    }

    for layer in layers {
        if field(layer, "stackLayer")? == path.layer_type.as_str()
            && field(layer, "componentName")? == path.component_name.as_str()
        {
            return Ok(key_text(field(layer, "id")?));
        }
    }
    Err(PlutoraError::LookupNotFound(format!("component {path}")))
}

fn field<'a>(record: &'a Value, name: &str) -> Result<&'a Value, PlutoraError> {
    record
        .get(name)
        .ok_or_else(|| PlutoraError::LookupNotFound(format!("field {name:?}")))
}

fn as_list<'a>(value: &'a Value, what: &str) -> Result<&'a [Value], PlutoraError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| PlutoraError::UnexpectedShape(format!("{what} is not a list")))
}

/// Strings are used verbatim; anything else is keyed by its JSON text.
fn key_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
