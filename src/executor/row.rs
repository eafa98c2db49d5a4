use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One stored or projected row. Column order is part of the contract, which
/// is why this wraps an `IndexMap` instead of a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row(pub IndexMap<String, Value>);

impl Row {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    pub fn contains_column(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn columns(&self) -> Vec<&str> {
        self.0.keys().map(|key| key.as_str()).collect()
    }

    pub fn into_value(self) -> Value {
        let mut object = Map::new();
        for (key, value) in self.0 {
            object.insert(key, value);
        }
        Value::Object(object)
    }
}

impl From<&Map<String, Value>> for Row {
    fn from(object: &Map<String, Value>) -> Self {
        Row(object
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}
