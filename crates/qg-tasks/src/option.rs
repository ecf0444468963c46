// option.rs — Option declarations and the resolved options mapping.
//
// A task declares its options up front: name, default value, whether the
// option is required, and which value types/literal values it accepts.
// Resolution (see resolver.rs) turns these declarations into an
// OptionsMapping that is written verbatim under parameters.tasks.<task>.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// The YAML value types an option can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
}

impl OptionType {
    /// The type of a concrete value. Tagged values report their inner type.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => OptionType::Null,
            Value::Bool(_) => OptionType::Bool,
            Value::Number(n) if n.is_f64() => OptionType::Float,
            Value::Number(_) => OptionType::Int,
            Value::String(_) => OptionType::String,
            Value::Sequence(_) => OptionType::List,
            Value::Mapping(_) => OptionType::Map,
            Value::Tagged(tagged) => OptionType::of(&tagged.value),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Null => write!(f, "null"),
            OptionType::Bool => write!(f, "bool"),
            OptionType::Int => write!(f, "int"),
            OptionType::Float => write!(f, "float"),
            OptionType::String => write!(f, "string"),
            OptionType::List => write!(f, "list"),
            OptionType::Map => write!(f, "map"),
        }
    }
}

/// One declared option of a task.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDecl {
    pub name: String,
    /// Value used when nothing else is supplied. `None` means "defined but unset".
    pub default: Option<Value>,
    pub required: bool,
    /// Accepted value types. Empty accepts any type.
    pub allowed_types: Vec<OptionType>,
    /// Accepted literal values. Empty accepts any value.
    pub allowed_values: Vec<Value>,
    pub description: Option<String>,
}

impl OptionDecl {
    /// Declare an optional option with no default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            required: false,
            allowed_types: Vec::new(),
            allowed_values: Vec::new(),
            description: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Shorthand for a `null` default.
    pub fn with_null_default(mut self) -> Self {
        self.default = Some(Value::Null);
        self
    }

    /// Shorthand for an empty list default.
    pub fn with_empty_list_default(mut self) -> Self {
        self.default = Some(Value::Sequence(Vec::new()));
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn allow_types(mut self, types: impl IntoIterator<Item = OptionType>) -> Self {
        self.allowed_types.extend(types);
        self
    }

    pub fn allow_values<V: Into<Value>>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.allowed_values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check a value against the declared type and value restrictions.
    ///
    /// Returns a human-readable reason on mismatch.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        if !self.allowed_types.is_empty() {
            let actual = OptionType::of(value);
            if !self.allowed_types.contains(&actual) {
                let expected: Vec<String> =
                    self.allowed_types.iter().map(|t| t.to_string()).collect();
                return Err(format!(
                    "option `{}` expects {} but its value is of type {}",
                    self.name,
                    expected.join(" or "),
                    actual
                ));
            }
        }

        if !self.allowed_values.is_empty() && !self.allowed_values.contains(value) {
            return Err(format!(
                "option `{}` has value {} which is not one of the allowed values",
                self.name,
                render_inline(value)
            ));
        }

        Ok(())
    }
}

/// The ordered set of options a task declares.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSchema {
    options: Vec<OptionDecl>,
}

impl OptionSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn option(mut self, decl: OptionDecl) -> Self {
        self.options.push(decl);
        self
    }

    pub fn options(&self) -> &[OptionDecl] {
        &self.options
    }

    pub fn get(&self, name: &str) -> Option<&OptionDecl> {
        self.options.iter().find(|decl| decl.name == name)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl FromIterator<OptionDecl> for OptionSchema {
    fn from_iter<I: IntoIterator<Item = OptionDecl>>(iter: I) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

/// Resolved option values for one task, in declaration order.
///
/// Produced fresh by every resolution; serializes as a plain YAML mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionsMapping(Mapping);

impl OptionsMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(Value::String(name.into()), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Option names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().filter_map(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Mapping(self.0.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.0)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for OptionsMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = OptionsMapping::new();
        for (name, value) in iter {
            options.insert(name, value);
        }
        options
    }
}

fn render_inline(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| "<unprintable>".to_string()),
    }
}
