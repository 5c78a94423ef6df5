//! Ordered argument list for an external command invocation.
//!
//! Index 0 holds the resolved executable path; the remaining entries are
//! passed to the process as individual tokens, never split on whitespace.
//!
//! Argument sets have value semantics. The `add_*` helpers consume the set and
//! return the extended one, and [`ProcessArguments::with_arg`] derives a new
//! set from a borrowed one, so a set that has been handed out is never changed
//! behind its holder's back.
//!
//! Format strings accepted by the helpers use a single `%s` placeholder for
//! the value (e.g. `"--config=%s"`). A format without a placeholder is added
//! verbatim.

use std::fmt::Display;
use std::ops::Index;
use std::path::Path;

use crate::core::error::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProcessArguments {
    values: Vec<String>,
}

impl ProcessArguments {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// One-element set holding only the executable path.
    pub fn for_executable(executable: impl Into<String>) -> Self {
        Self {
            values: vec![executable.into()],
        }
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checked read of the argument at `index`.
    pub fn at(&self, index: usize) -> Result<&str, Error> {
        self.get(index).ok_or(Error::IndexOutOfRange {
            index,
            count: self.values.len(),
        })
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// The executable path, if any.
    pub fn executable(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.values
    }

    /// Derive a new set with `arg` appended; `self` is left untouched.
    pub fn with_arg(&self, arg: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.push(arg.into());
        Self { values }
    }

    /// Derive a new set with every item of `args` appended.
    pub fn with_args<I, S>(&self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = self.values.clone();
        values.extend(args.into_iter().map(Into::into));
        Self { values }
    }

    /// Concatenate two sets into a new one.
    pub fn concat(&self, other: &ProcessArguments) -> Self {
        self.with_args(other.values.iter().cloned())
    }

    pub fn add(mut self, arg: impl Into<String>) -> Self {
        self.values.push(arg.into());
        self
    }

    /// Add `format` with the value substituted when the value is present and non-empty.
    pub fn add_optional_argument<S: AsRef<str>>(self, format: &str, value: Option<S>) -> Self {
        match value {
            Some(value) if !value.as_ref().is_empty() => {
                let arg = format_argument(format, value.as_ref());
                self.add(arg)
            }
            _ => self,
        }
    }

    /// Add a bare flag when `enabled` is set.
    pub fn add_optional_flag(self, flag: &str, enabled: bool) -> Self {
        if enabled { self.add(flag) } else { self }
    }

    /// Add `flag` and `value` as two separate tokens when the value is present and non-empty.
    pub fn add_optional_argument_with_separated_value<S: AsRef<str>>(
        self,
        flag: &str,
        value: Option<S>,
    ) -> Self {
        match value {
            Some(value) if !value.as_ref().is_empty() => {
                let value = value.as_ref().to_string();
                self.add(flag).add(value)
            }
            _ => self,
        }
    }

    /// Add `format` with all values joined by `delimiter`; skipped when there are no values.
    pub fn add_optional_comma_separated_argument<I, S>(
        self,
        format: &str,
        values: I,
        delimiter: &str,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(|value| value.as_ref().to_string())
            .collect();
        if values.is_empty() {
            return self;
        }
        let arg = format_argument(format, &values.join(delimiter));
        self.add(arg)
    }

    /// Add one formatted token per value.
    pub fn add_argument_array<I, S>(mut self, format: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.values.push(format_argument(format, value.as_ref()));
        }
        self
    }

    /// Add `format value` pairs, one pair per value; `format` may use `%s`.
    pub fn add_argument_array_with_separated_value<I, S>(mut self, flag: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            let value = value.as_ref();
            self.values.push(format_argument(flag, value));
            self.values.push(value.to_string());
        }
        self
    }

    /// Add `flag` once followed by every value; skipped when there are no values.
    pub fn add_separated_argument_array<I, S>(mut self, flag: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = values.into_iter().peekable();
        if values.peek().is_none() {
            return self;
        }
        self.values.push(flag.to_string());
        self.values
            .extend(values.map(|value| value.as_ref().to_string()));
        self
    }

    pub fn add_required_argument(self, format: &str, value: &str) -> Result<Self, Error> {
        if value.is_empty() {
            return Err(Error::MissingArgument(format.to_string()));
        }
        let arg = format_argument(format, value);
        Ok(self.add(arg))
    }

    /// Add one token per file path.
    pub fn add_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for file in files {
            self.values
                .push(file.as_ref().to_string_lossy().into_owned());
        }
        self
    }

    /// Add a single token listing every file path separated by `,`.
    pub fn add_comma_separated_files<I, P>(self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths: Vec<String> = files
            .into_iter()
            .map(|file| file.as_ref().to_string_lossy().into_owned())
            .collect();
        if paths.is_empty() {
            return self;
        }
        self.add(paths.join(","))
    }

    pub fn add_optional_integer_argument(self, format: &str, value: Option<i64>) -> Self {
        match value {
            Some(value) => {
                let arg = format_argument(format, &value.to_string());
                self.add(arg)
            }
            None => self,
        }
    }

    /// Add `format` filled with `true_value` or `false_value`; skipped when unset.
    pub fn add_optional_boolean_argument(
        self,
        format: &str,
        value: Option<bool>,
        true_value: &str,
        false_value: &str,
    ) -> Self {
        match value {
            Some(value) => {
                let arg = format_argument(format, if value { true_value } else { false_value });
                self.add(arg)
            }
            None => self,
        }
    }

    /// Add `format` filled with any displayable value; skipped when unset.
    pub fn add_optional_mixed_argument<T: Display>(self, format: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => {
                let arg = format_argument(format, &value.to_string());
                self.add(arg)
            }
            None => self,
        }
    }
}

fn format_argument(format: &str, value: &str) -> String {
    format.replacen("%s", value, 1)
}

impl Index<usize> for ProcessArguments {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.values[index]
    }
}

impl From<Vec<String>> for ProcessArguments {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl<S: Into<String>> FromIterator<S> for ProcessArguments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for ProcessArguments {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProcessArguments {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
