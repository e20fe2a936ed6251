//! Form configuration: which parameters to edit, the starting model, and
//! the labels/window size used by the editor screen.
//!
//! Without a form file the built-in demo form is used. A form file is plain
//! JSON; every field is optional and falls back to the demo value.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::param_model::{Model, ParamDefinition, ParamValue};

/// Environment variable consulted when no path is given on the command line.
pub const FORM_ENV_VAR: &str = "PARAM_EDITOR_FORM";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub save: String,
    pub select_placeholder: String,
    pub saved_heading: String,
    pub nothing_saved: String,
    pub unsaved_changes: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Parameter editor".to_string(),
            save: "Save".to_string(),
            select_placeholder: "Select a value".to_string(),
            saved_heading: "Saved parameters".to_string(),
            nothing_saved: "Nothing saved yet".to_string(),
            unsaved_changes: "Unsaved changes".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub params: Vec<ParamDefinition>,
    pub model: Model,
    pub labels: Labels,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            window_title: "Param Editor".to_string(),
            window_size: [900.0, 520.0],
            params: vec![
                ParamDefinition::text(1, "Purpose"),
                ParamDefinition::text(2, "Length"),
                ParamDefinition::number(3, "Sleeve length, cm"),
                ParamDefinition::select(4, "Fit", ["Slim", "Regular", "Loose"]),
            ],
            model: Model {
                values: vec![ParamValue::new(1, "Everyday"), ParamValue::new(2, "Maxi")],
                associated: Vec::new(),
            },
            labels: Labels::default(),
        }
    }
}

impl FormConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: FormConfig = serde_json::from_str(text).context("invalid form JSON")?;
        config.check_unique_ids()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading form file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading form file {}", path.display()))
    }

    /// Resolve the form for this run: an explicit path wins, then
    /// `PARAM_EDITOR_FORM`, then the built-in demo form.
    pub fn resolve(cli_path: Option<PathBuf>) -> Result<Self> {
        let path = cli_path.or_else(|| std::env::var_os(FORM_ENV_VAR).map(PathBuf::from));
        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading form file");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for def in &self.params {
            if !seen.insert(def.id) {
                bail!("duplicate parameter id {} ({:?})", def.id, def.name);
            }
        }
        Ok(())
    }
}
