//! Variable expansion
//!
//! Turns the raw values supplied by the user into the flat lookup map the
//! renderer resolves tokens against.

use std::collections::BTreeMap;

use log::debug;

use crate::case::ModifierRegistry;
use crate::discovery::Token;

/// Raw user-supplied values, keyed by base variable name
pub type UserVariables = BTreeMap<String, String>;

/// Lookup map holding `base` and `base.modifier` entries
///
/// Built once per generation request and only read while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedVariables {
    values: BTreeMap<String, String>,
}

impl ExpandedVariables {
    /// Value stored under the exact key, `base` or `base.modifier`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value for a placeholder token; missing keys resolve to an empty string
    pub fn resolve(&self, token: &Token<'_>) -> String {
        self.get(&token.key()).unwrap_or_default().to_string()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// Expands user values with one entry per registered modifier
///
/// For every `(base, value)` the result holds `base -> value` and
/// `base.modifier -> transform(value)` for each modifier in `registry`.
/// Names absent from `user_vars` get no entries.
///
/// # Examples
/// ```
/// use template_scaffold::case::ModifierRegistry;
/// use template_scaffold::expansion::{expand_variables, UserVariables};
///
/// let mut user_vars = UserVariables::new();
/// user_vars.insert("name".to_string(), "ada lovelace".to_string());
///
/// let expanded = expand_variables(&user_vars, &ModifierRegistry::standard());
/// assert_eq!(expanded.get("name"), Some("ada lovelace"));
/// assert_eq!(expanded.get("name.pascalCase"), Some("AdaLovelace"));
/// assert_eq!(expanded.len(), 10);
/// ```
pub fn expand_variables(user_vars: &UserVariables, registry: &ModifierRegistry) -> ExpandedVariables {
    let mut values = BTreeMap::new();

    for (base, value) in user_vars {
        values.insert(base.clone(), value.clone());
        for (modifier, function) in registry.iter() {
            values.insert(format!("{base}.{modifier}"), function(value));
        }
    }

    debug!(
        "Expanded {} variable(s) into {} entries",
        user_vars.len(),
        values.len()
    );

    ExpandedVariables { values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::CaseModifier;
    use crate::discovery::find_tokens;

    fn user_vars(pairs: &[(&str, &str)]) -> UserVariables {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_expand_single_variable() {
        let registry = ModifierRegistry::standard();
        let expanded = expand_variables(&user_vars(&[("name", "my super-name")]), &registry);

        assert_eq!(expanded.len(), 1 + registry.len());
        assert_eq!(expanded.get("name"), Some("my super-name"));
        for modifier in CaseModifier::ALL {
            let key = format!("name.{}", modifier.name());
            assert_eq!(
                expanded.get(&key),
                Some(modifier.apply("my super-name").as_str())
            );
        }
    }

    #[test]
    fn test_expand_size_scales_with_inputs() {
        let registry = ModifierRegistry::standard();
        let expanded = expand_variables(
            &user_vars(&[("name", "a"), ("module", "b"), ("other", "c")]),
            &registry,
        );
        assert_eq!(expanded.len(), 3 * (1 + registry.len()));
    }

    #[test]
    fn test_expand_empty_input() {
        let expanded = expand_variables(&UserVariables::new(), &ModifierRegistry::standard());
        assert!(expanded.is_empty());
    }

    #[test]
    fn test_expand_uses_given_registry_only() {
        fn reversed(input: &str) -> String {
            input.chars().rev().collect()
        }

        let registry = ModifierRegistry::empty().with_modifier("reversed", reversed);
        let expanded = expand_variables(&user_vars(&[("name", "abc")]), &registry);

        let keys: Vec<&str> = expanded.keys().collect();
        assert_eq!(keys, vec!["name", "name.reversed"]);
        assert_eq!(expanded.get("name.reversed"), Some("cba"));
    }

    #[test]
    fn test_resolve_missing_keys_to_empty_string() {
        let expanded = expand_variables(&user_vars(&[("name", "x")]), &ModifierRegistry::standard());
        let tokens: Vec<_> = find_tokens("{{name}} {{name.bogus}} {{missing}}").collect();

        assert_eq!(expanded.resolve(&tokens[0]), "x");
        assert_eq!(expanded.resolve(&tokens[1]), "");
        assert_eq!(expanded.resolve(&tokens[2]), "");
    }
}
