//! Plain data types shared by the editor form and the host screen.
//!
//! Field names on the serialized form follow the JSON layout used by form
//! files (`paramValues`, `paramId`, `colors`).

use serde::{Deserialize, Serialize};

pub type ParamId = u32;

/// What kind of control a parameter is edited with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParamKind {
    #[serde(alias = "string")]
    Text,
    Number,
    Select {
        #[serde(default)]
        options: Vec<String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDefinition {
    pub id: ParamId,
    pub name: String,
    #[serde(flatten)]
    pub kind: ParamKind,
}

impl ParamDefinition {
    pub fn text(id: ParamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ParamKind::Text,
        }
    }

    pub fn number(id: ParamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ParamKind::Number,
        }
    }

    pub fn select<I, S>(id: ParamId, name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            kind: ParamKind::Select {
                options: options.into_iter().map(Into::into).collect(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamValue {
    pub param_id: ParamId,
    pub value: String,
}

impl ParamValue {
    pub fn new(param_id: ParamId, value: impl Into<String>) -> Self {
        Self {
            param_id,
            value: value.into(),
        }
    }
}

/// Opaque entity carried through a model untouched (a color tag).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedEntity {
    pub id: u32,
    pub name: String,
}

/// One committed snapshot of parameter values.
///
/// A model is never patched in place: saving produces a new one which
/// replaces the previous model wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "paramValues")]
    pub values: Vec<ParamValue>,
    #[serde(rename = "colors", default)]
    pub associated: Vec<AssociatedEntity>,
}

impl Model {
    #[cfg(test)]
    pub fn value_of(&self, param_id: ParamId) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.param_id == param_id)
            .map(|v| v.value.as_str())
    }
}
