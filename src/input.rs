//! Variable value collection
//!
//! The collector is the seam between the rendering core and whatever asks
//! the user for values. Collection is strict: a variable left without a
//! value aborts the request before anything touches the filesystem.

use std::io::{BufRead, Write};

use log::debug;

use crate::discovery::VariableSet;
use crate::errors::{Result, generic_error, no_variables_collected_error};
use crate::expansion::UserVariables;

/// Supplies a value for every required variable, or fails
pub trait VariableCollector {
    /// Returns a map holding exactly the names in `required`
    ///
    /// # Errors
    /// `NoVariablesCollected` naming the first variable without a value
    fn collect(&mut self, required: &VariableSet) -> Result<UserVariables>;
}

/// Collector backed by values known up front, such as `--var` arguments
#[derive(Debug, Clone, Default)]
pub struct PresetCollector {
    values: UserVariables,
}

impl PresetCollector {
    pub fn new(values: UserVariables) -> Self {
        PresetCollector { values }
    }
}

impl VariableCollector for PresetCollector {
    fn collect(&mut self, required: &VariableSet) -> Result<UserVariables> {
        required
            .iter()
            .map(|name| match self.values.get(name) {
                Some(value) if !value.is_empty() => Ok((name.clone(), value.clone())),
                _ => Err(no_variables_collected_error(name)),
            })
            .collect()
    }
}

/// Collector that asks for each value on a line-based prompt
///
/// Names with a preset value are not asked for. An empty answer or the end
/// of input cancels the whole collection.
pub struct PromptCollector<R, W> {
    input: R,
    output: W,
    presets: UserVariables,
}

impl<R: BufRead, W: Write> PromptCollector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptCollector {
            input,
            output,
            presets: UserVariables::new(),
        }
    }

    pub fn with_presets(mut self, presets: UserVariables) -> Self {
        self.presets = presets;
        self
    }

    fn ask(&mut self, name: &str) -> Result<String> {
        write!(self.output, "Enter value for {name} ({{{{{name}}}}}): ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed while asking for {name}");
            return Err(no_variables_collected_error(name));
        }

        let value = line.trim_end_matches(['\r', '\n']);
        if value.is_empty() {
            return Err(no_variables_collected_error(name));
        }
        Ok(value.to_string())
    }
}

impl<R: BufRead, W: Write> VariableCollector for PromptCollector<R, W> {
    fn collect(&mut self, required: &VariableSet) -> Result<UserVariables> {
        let mut values = UserVariables::new();
        for name in required {
            let value = match self.presets.get(name) {
                Some(value) if !value.is_empty() => value.clone(),
                _ => self.ask(name)?,
            };
            values.insert(name.clone(), value);
        }
        Ok(values)
    }
}

/// Parses a `name=value` assignment given on the command line
///
/// The value may contain further `=` characters and may be empty; the name
/// must be a valid placeholder identifier.
pub fn parse_assignment(assignment: &str) -> Result<(String, String)> {
    let (name, value) = assignment.split_once('=').ok_or_else(|| {
        generic_error(&format!(
            "Invalid variable assignment '{assignment}': expected name=value"
        ))
    })?;

    let name = name.trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(generic_error(&format!(
            "Invalid variable name '{name}': use letters, digits and underscores"
        )));
    }

    Ok((name.to_string(), value.to_string()))
}

/// Parses every assignment, later ones replacing earlier ones
pub fn parse_assignments<'a, I>(assignments: I) -> Result<UserVariables>
where
    I: IntoIterator<Item = &'a str>,
{
    assignments.into_iter().map(parse_assignment).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::io::Cursor;

    fn required(names: &[&str]) -> VariableSet {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn presets(pairs: &[(&str, &str)]) -> UserVariables {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_preset_collector_returns_required_only() {
        let mut collector = PresetCollector::new(presets(&[("name", "Ada"), ("extra", "x")]));
        let values = collector.collect(&required(&["name"])).unwrap();

        assert_eq!(values, presets(&[("name", "Ada")]));
    }

    #[test]
    fn test_preset_collector_fails_on_missing_or_empty() {
        let mut collector = PresetCollector::new(presets(&[("name", "")]));
        let result = collector.collect(&required(&["name"]));
        assert!(matches!(result, Err(Error::NoVariablesCollected { name }) if name == "name"));

        let result = collector.collect(&required(&["other"]));
        assert!(matches!(result, Err(Error::NoVariablesCollected { name }) if name == "other"));
    }

    #[test]
    fn test_prompt_collector_asks_in_order() {
        let mut output = Vec::new();
        let values = PromptCollector::new(Cursor::new("Ada Lovelace\r\ncore\n"), &mut output)
            .collect(&required(&["name", "module"]))
            .unwrap();

        // Sorted set: module is asked first.
        assert_eq!(values, presets(&[("module", "Ada Lovelace"), ("name", "core")]));
        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Enter value for module ({{module}}): "));
        assert!(prompts.contains("Enter value for name ({{name}}): "));
    }

    #[test]
    fn test_prompt_collector_skips_presets() {
        let mut output = Vec::new();
        let values = PromptCollector::new(Cursor::new("core\n"), &mut output)
            .with_presets(presets(&[("name", "Ada")]))
            .collect(&required(&["module", "name"]))
            .unwrap();

        assert_eq!(values, presets(&[("module", "core"), ("name", "Ada")]));
        assert!(!String::from_utf8(output).unwrap().contains("{{name}}"));
    }

    #[test]
    fn test_prompt_collector_cancels_on_empty_answer_or_eof() {
        let result = PromptCollector::new(Cursor::new("\n"), Vec::new())
            .collect(&required(&["name"]));
        assert!(matches!(result, Err(Error::NoVariablesCollected { .. })));

        let result = PromptCollector::new(Cursor::new(""), Vec::new())
            .collect(&required(&["name"]));
        assert!(matches!(result, Err(Error::NoVariablesCollected { .. })));
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("name=Ada Lovelace").unwrap(),
            ("name".to_string(), "Ada Lovelace".to_string())
        );
        assert_eq!(
            parse_assignment("query=a=b").unwrap(),
            ("query".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_assignment("empty=").unwrap(),
            ("empty".to_string(), String::new())
        );
        assert!(parse_assignment("no-equals").is_err());
        assert!(parse_assignment("=value").is_err());
        assert!(parse_assignment("bad-name=value").is_err());
    }

    #[test]
    fn test_parse_assignments_last_wins() {
        let values = parse_assignments(["name=a", "name=b", "other=c"]).unwrap();
        assert_eq!(values, presets(&[("name", "b"), ("other", "c")]));
    }
}
