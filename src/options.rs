//! Product Options
//!
//! A product declares an [`OptionSchema`]: an ordered list of option names, each with an
//! ordered, non-empty list of allowed values. A cart addition carries [`SelectedOptions`],
//! which must name exactly one allowed value for every declared option.

use std::collections::BTreeMap;

use serde::Serialize;
use smallvec::SmallVec;
use thiserror::Error;

/// Errors raised while building an option schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionSchemaError {
    /// An option was declared without any allowed values.
    #[error("option {0} has no allowed values")]
    EmptyOptionValues(String),

    /// The same option name was declared twice.
    #[error("option {0} is declared more than once")]
    DuplicateOption(String),
}

/// Reasons an option selection does not fit a product's schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionSelectionError {
    /// A declared option has no selected value.
    #[error("missing selection for option {0}")]
    MissingOption(String),

    /// The selection names an option the product does not declare.
    #[error("unknown option {0}")]
    UnknownOption(String),

    /// The selected value is not one of the option's allowed values.
    #[error("{value} is not an allowed value for option {option}")]
    DisallowedValue {
        /// Option name
        option: String,
        /// Rejected value
        value: String,
    },
}

/// A single named option and its allowed values, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductOption {
    name: String,
    values: SmallVec<[String; 5]>,
}

impl ProductOption {
    /// Create an option from a name and its allowed values.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Option name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Allowed values, in display order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Whether `value` is one of the allowed values.
    pub fn allows(&self, value: &str) -> bool {
        self.values.iter().any(|allowed| allowed == value)
    }

    /// The value a fresh selector starts on.
    pub fn default_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// Ordered option declarations for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSchema {
    options: SmallVec<[ProductOption; 4]>,
}

impl OptionSchema {
    /// A schema with no options.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a schema, rejecting empty value lists and duplicate option names.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionSchemaError`] describing the first invalid declaration.
    pub fn new(options: impl IntoIterator<Item = ProductOption>) -> Result<Self, OptionSchemaError> {
        let mut schema = Self::empty();

        for option in options {
            if option.values.is_empty() {
                return Err(OptionSchemaError::EmptyOptionValues(option.name));
            }

            if schema.get(&option.name).is_some() {
                return Err(OptionSchemaError::DuplicateOption(option.name));
            }

            schema.options.push(option);
        }

        Ok(schema)
    }

    /// Look up an option by name.
    pub fn get(&self, name: &str) -> Option<&ProductOption> {
        self.options.iter().find(|option| option.name == name)
    }

    /// Iterate over the options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductOption> {
        self.options.iter()
    }

    /// Number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the product declares no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Selection of the first allowed value for every option.
    pub fn default_selection(&self) -> SelectedOptions {
        self.options
            .iter()
            .filter_map(|option| option.default_value().map(|value| (option.name(), value)))
            .collect()
    }

    /// Check that `selection` names exactly the declared options, each with an allowed value.
    ///
    /// # Errors
    ///
    /// Unknown keys are reported first, then missing options and disallowed values in
    /// declaration order.
    pub fn validate(&self, selection: &SelectedOptions) -> Result<(), OptionSelectionError> {
        if let Some(unknown) = selection.keys().find(|name| self.get(name).is_none()) {
            return Err(OptionSelectionError::UnknownOption(unknown.to_string()));
        }

        for option in &self.options {
            let Some(value) = selection.get(option.name()) else {
                return Err(OptionSelectionError::MissingOption(option.name.clone()));
            };

            if !option.allows(value) {
                return Err(OptionSelectionError::DisallowedValue {
                    option: option.name.clone(),
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Option values chosen for a cart line.
///
/// Keys are kept sorted, so equality ignores the order selections were made in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SelectedOptions {
    values: BTreeMap<String, String>,
}

impl SelectedOptions {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the value for `name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace the value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Selected value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Selected option names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Name/value pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of selected options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SelectedOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
