// In-progress parameter edits, kept apart from the committed `Model`.
// Every edit produces a fresh snapshot instead of touching the previous one,
// so the form can tell whether anything changed by comparing snapshot
// identity rather than contents.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::param_model::{Model, ParamId, ParamValue};

#[derive(Debug, Clone, Default)]
pub struct DraftState {
    /// Parameter id -> raw string value, in first-seen order.
    values: Arc<IndexMap<ParamId, String>>,
}

impl DraftState {
    /// Build a draft from the values of a committed model. A repeated
    /// parameter id keeps its first position and its last value.
    pub fn seed(model: &Model) -> Self {
        let values = model
            .values
            .iter()
            .map(|pv| (pv.param_id, pv.value.clone()))
            .collect::<IndexMap<_, _>>();
        Self {
            values: Arc::new(values),
        }
    }

    /// Return a new snapshot with `param_id` set to `value`. `self` is left
    /// as it was. Ids already present keep their position; new ids go last.
    #[must_use]
    pub fn update(&self, param_id: ParamId, value: impl Into<String>) -> Self {
        let mut next = IndexMap::clone(&self.values);
        next.insert(param_id, value.into());
        Self {
            values: Arc::new(next),
        }
    }

    pub fn get(&self, param_id: ParamId) -> Option<&str> {
        self.values.get(&param_id).map(String::as_str)
    }

    /// True when both drafts are the very same snapshot.
    pub fn ptr_eq(&self, other: &DraftState) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }

    /// Turn the draft into a complete model. Values come from the draft in
    /// draft order; associated entities are copied from `base` untouched.
    /// Nothing is validated: empty strings and non-numeric text in number
    /// fields are kept as they are.
    pub fn materialize(&self, base: &Model) -> Model {
        Model {
            values: self
                .values
                .iter()
                .map(|(id, value)| ParamValue::new(*id, value.clone()))
                .collect(),
            associated: base.associated.clone(),
        }
    }
}
