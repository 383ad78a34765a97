//! Candidate provider for completion suggestions
//!
//! This module provides the trait the completion engine queries for
//! candidates, and its implementation for [`Registry`].

use crate::registry::{CommandSpec, Registry};

/// Trait for providing completion candidates
///
/// Every method returns candidates in a stable order. Implementations must
/// not change between calls made for the same line.
pub trait CandidateProvider: Send + Sync {
    /// Whether `command` is a known command
    fn has_command(&self, command: &str) -> bool;

    /// Whether `parameter` is a known named parameter of `command`
    fn has_parameter(&self, command: &str, parameter: &str) -> bool;

    /// Command names starting with the prefix
    fn commands(&self, prefix: &str) -> Vec<String>;

    /// Flags of `command` starting with, but not equal to, the prefix
    fn flags(&self, command: &str, prefix: &str) -> Vec<String>;

    /// Named parameters of `command` starting with, but not equal to, the prefix
    fn named_parameters(&self, command: &str, prefix: &str) -> Vec<String>;

    /// Suggested values of `parameter` starting with the prefix
    fn parameter_values(&self, command: &str, parameter: &str, prefix: &str) -> Vec<String>;

    /// Positional suggestions of `command` starting with, but not equal to, the prefix
    fn positionals(&self, command: &str, prefix: &str) -> Vec<String>;
}

/// Keep the items starting with `prefix`.
///
/// With `skip_exact`, an item equal to a non-empty prefix is dropped: it is
/// already fully typed.
fn filter_by_prefix<'i, I>(items: I, prefix: &str, skip_exact: bool) -> Vec<String>
where
    I: IntoIterator<Item = &'i String>,
{
    items
        .into_iter()
        .filter(|item| item.starts_with(prefix))
        .filter(|item| !(skip_exact && !prefix.is_empty() && item.as_str() == prefix))
        .cloned()
        .collect()
}

impl Registry {
    fn spec_candidates<F>(&self, command: &str, select: F) -> Vec<String>
    where
        F: FnOnce(&CommandSpec) -> Vec<String>,
    {
        self.get(command).map(select).unwrap_or_default()
    }
}

impl CandidateProvider for Registry {
    fn has_command(&self, command: &str) -> bool {
        self.contains(command)
    }

    fn has_parameter(&self, command: &str, parameter: &str) -> bool {
        self.get(command)
            .is_some_and(|spec| spec.named_parameters.contains_key(parameter))
    }

    fn commands(&self, prefix: &str) -> Vec<String> {
        self.command_names()
            .filter(|name| name.starts_with(prefix))
            .map(str::to_string)
            .collect()
    }

    fn flags(&self, command: &str, prefix: &str) -> Vec<String> {
        self.spec_candidates(command, |spec| {
            filter_by_prefix(&spec.flags, prefix, true)
        })
    }

    fn named_parameters(&self, command: &str, prefix: &str) -> Vec<String> {
        self.spec_candidates(command, |spec| {
            filter_by_prefix(spec.named_parameters.keys(), prefix, true)
        })
    }

    fn parameter_values(&self, command: &str, parameter: &str, prefix: &str) -> Vec<String> {
        self.spec_candidates(command, |spec| {
            spec.parameter_values(parameter)
                .map(|values| filter_by_prefix(values, prefix, false))
                .unwrap_or_default()
        })
    }

    fn positionals(&self, command: &str, prefix: &str) -> Vec<String> {
        self.spec_candidates(command, |spec| {
            filter_by_prefix(&spec.ordered_params, prefix, true)
        })
    }
}
