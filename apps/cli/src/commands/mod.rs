pub mod check;
pub mod fields;
pub mod submit;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use forma_form::FormField;
use forma_validator::{FieldValue, FormValues};

use crate::contact::ContactField;

/// Where field values come from.
#[derive(Args, Debug)]
pub struct ValuesArgs {
    /// JSON file holding an object of field values.
    #[arg(long, value_name = "FILE")]
    pub values: Option<PathBuf>,

    /// Set one field as text. Repeatable; applied after `--values`.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,
}

impl ValuesArgs {
    /// Reads `--values` and applies every `--set` on top.
    pub fn load(&self) -> anyhow::Result<FormValues> {
        let mut values = match &self.values {
            Some(path) => FormValues::from_json_str(&read(path)?)
                .with_context(|| format!("parsing {}", path.display()))?,
            None => FormValues::new(),
        };
        for (name, value) in &self.set {
            values.set(name.as_str(), value.as_str());
        }
        Ok(values)
    }

    /// Loaded values paired with the contact field they belong to.
    /// Names the form does not know are skipped.
    pub fn assignments(&self) -> anyhow::Result<Vec<(ContactField, FieldValue)>> {
        let values = self.load()?;
        Ok(values
            .iter()
            .filter_map(|(name, value)| {
                let Some(field) = ContactField::from_name(name) else {
                    tracing::warn!(field = name, "ignoring unknown field");
                    return None;
                };
                Some((field, value.clone()))
            })
            .collect())
    }
}

pub fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in `{s}`"));
    }
    Ok((name.to_owned(), value.to_owned()))
}
