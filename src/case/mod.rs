//! Case-transform library
//!
//! This module contains the nine canonical case modifiers and the lookup
//! table that maps a modifier name, as written in a placeholder token
//! (`{{name.pascalCase}}`), to its transform function.

mod transforms;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use transforms::{
    camel_case, kebab_case, lower_case, lower_case_all, pascal_case, screaming_snake_case,
    snake_case, upper_case, upper_case_all,
};

/// Signature shared by every case transform
pub type CaseTransform = fn(&str) -> String;

/// The built-in case modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CaseModifier {
    PascalCase,
    CamelCase,
    SnakeCase,
    KebabCase,
    ScreamingSnakeCase,
    /// Uppercases the first character only
    UpperCase,
    LowerCase,
    UpperCaseAll,
    LowerCaseAll,
}

impl CaseModifier {
    /// Every built-in modifier, in registration order
    pub const ALL: [CaseModifier; 9] = [
        CaseModifier::PascalCase,
        CaseModifier::CamelCase,
        CaseModifier::SnakeCase,
        CaseModifier::KebabCase,
        CaseModifier::ScreamingSnakeCase,
        CaseModifier::UpperCase,
        CaseModifier::LowerCase,
        CaseModifier::UpperCaseAll,
        CaseModifier::LowerCaseAll,
    ];

    /// Name of the modifier as it appears in placeholder tokens
    pub fn name(&self) -> &'static str {
        match self {
            CaseModifier::PascalCase => "pascalCase",
            CaseModifier::CamelCase => "camelCase",
            CaseModifier::SnakeCase => "snakeCase",
            CaseModifier::KebabCase => "kebabCase",
            CaseModifier::ScreamingSnakeCase => "screamingSnakeCase",
            CaseModifier::UpperCase => "upperCase",
            CaseModifier::LowerCase => "lowerCase",
            CaseModifier::UpperCaseAll => "upperCaseAll",
            CaseModifier::LowerCaseAll => "lowerCaseAll",
        }
    }

    /// The function implementing this modifier
    pub fn function(&self) -> CaseTransform {
        match self {
            CaseModifier::PascalCase => pascal_case,
            CaseModifier::CamelCase => camel_case,
            CaseModifier::SnakeCase => snake_case,
            CaseModifier::KebabCase => kebab_case,
            CaseModifier::ScreamingSnakeCase => screaming_snake_case,
            CaseModifier::UpperCase => upper_case,
            CaseModifier::LowerCase => lower_case,
            CaseModifier::UpperCaseAll => upper_case_all,
            CaseModifier::LowerCaseAll => lower_case_all,
        }
    }

    pub fn apply(&self, input: &str) -> String {
        (self.function())(input)
    }
}

impl fmt::Display for CaseModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseModifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseModifier::ALL
            .into_iter()
            .find(|modifier| modifier.name() == s)
            .ok_or_else(|| format!("Unknown case modifier: {s}"))
    }
}

/// Applies a built-in modifier to `input`
pub fn transform(modifier: CaseModifier, input: &str) -> String {
    modifier.apply(input)
}

/// Immutable name -> transform lookup table
///
/// Built once and handed to the expander; callers only ever look modifiers
/// up by name, so registering an extra modifier never touches a call site.
///
/// # Examples
/// ```
/// use template_scaffold::case::ModifierRegistry;
///
/// fn reversed(input: &str) -> String {
///     input.chars().rev().collect()
/// }
///
/// let registry = ModifierRegistry::standard().with_modifier("reversed", reversed);
/// assert_eq!(registry.transform("reversed", "abc").as_deref(), Some("cba"));
/// assert_eq!(registry.transform("pascalCase", "ada lovelace").as_deref(), Some("AdaLovelace"));
/// assert_eq!(registry.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct ModifierRegistry {
    modifiers: BTreeMap<String, CaseTransform>,
}

impl ModifierRegistry {
    /// A table without any modifiers
    pub fn empty() -> Self {
        ModifierRegistry {
            modifiers: BTreeMap::new(),
        }
    }

    /// The table holding the nine built-in modifiers
    pub fn standard() -> Self {
        CaseModifier::ALL
            .into_iter()
            .fold(Self::empty(), |registry, modifier| {
                registry.with_modifier(modifier.name(), modifier.function())
            })
    }

    /// Returns the table extended with `name`; an existing entry is replaced
    pub fn with_modifier(mut self, name: impl Into<String>, function: CaseTransform) -> Self {
        self.modifiers.insert(name.into(), function);
        self
    }

    pub fn get(&self, name: &str) -> Option<CaseTransform> {
        self.modifiers.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modifiers.contains_key(name)
    }

    /// Applies the modifier called `name`, or `None` when it is not registered
    pub fn transform(&self, name: &str, input: &str) -> Option<String> {
        self.get(name).map(|function| function(input))
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modifiers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CaseTransform)> {
        self.modifiers
            .iter()
            .map(|(name, function)| (name.as_str(), *function))
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
