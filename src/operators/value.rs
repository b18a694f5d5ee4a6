//! Operator argument and result values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::WidgetInstance;

use super::fault::Fault;
use super::text::render_float;

/// Type tag used in operator signatures
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// 64-bit float (`float` / `number`)
    Number,
    /// UTF-8 string (`str` / `string`)
    Text,
    /// An instance of the named widget schema
    Schema(String),
}

impl TypeTag {
    /// Parses a tag as written in signatures. Unknown words name schemas.
    pub fn from_word(word: &str) -> Self {
        match word {
            "float" | "number" => TypeTag::Number,
            "str" | "string" => TypeTag::Text,
            other => TypeTag::Schema(other.to_string()),
        }
    }

    /// Canonical spelling
    pub fn name(&self) -> &str {
        match self {
            TypeTag::Number => "float",
            TypeTag::Text => "str",
            TypeTag::Schema(name) => name,
        }
    }

    /// Whether a value carries this tag
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (TypeTag::Number, Value::Number(_)) => true,
            (TypeTag::Text, Value::Text(_)) => true,
            (TypeTag::Schema(name), Value::Widget(widget)) => widget.schema == *name,
            _ => false,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value flowing into or out of an operator.
///
/// JSON form is untagged: numbers, strings, and widget objects carrying a
/// `type` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
    Widget(WidgetInstance),
}

impl Value {
    /// Short description of the value's kind for error messages
    pub fn type_name(&self) -> &str {
        match self {
            Value::Number(_) => "float",
            Value::Text(_) => "str",
            Value::Widget(widget) => &widget.schema,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_widget(&self) -> Option<&WidgetInstance> {
        match self {
            Value::Widget(w) => Some(w),
            _ => None,
        }
    }
}

/// Numbers render as `FloatToStr` would, falling back to Rust's own
/// spelling for non-finite values. Widgets render as their schema name.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => match render_float(*n) {
                Ok(s) => f.write_str(&s),
                Err(_) => write!(f, "{}", n),
            },
            Value::Text(s) => f.write_str(s),
            Value::Widget(widget) => f.write_str(&widget.schema),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<WidgetInstance> for Value {
    fn from(w: WidgetInstance) -> Self {
        Value::Widget(w)
    }
}

/// Number argument at `index`
pub(crate) fn number_arg(args: &[Value], index: usize) -> Result<f64, Fault> {
    args.get(index)
        .and_then(Value::as_number)
        .ok_or(Fault::ArgumentType)
}

/// Text argument at `index`
pub(crate) fn text_arg(args: &[Value], index: usize) -> Result<&str, Fault> {
    args.get(index)
        .and_then(Value::as_text)
        .ok_or(Fault::ArgumentType)
}

/// Widget argument at `index`
pub(crate) fn widget_arg(args: &[Value], index: usize) -> Result<&WidgetInstance, Fault> {
    args.get(index)
        .and_then(Value::as_widget)
        .ok_or(Fault::ArgumentType)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_words() {
        assert_eq!(TypeTag::from_word("float"), TypeTag::Number);
        assert_eq!(TypeTag::from_word("number"), TypeTag::Number);
        assert_eq!(TypeTag::from_word("string"), TypeTag::Text);
        assert_eq!(TypeTag::from_word("str"), TypeTag::Text);
        assert_eq!(
            TypeTag::from_word("TextField"),
            TypeTag::Schema("TextField".into())
        );
    }

    #[test]
    fn test_accepts_widget_by_schema_name() {
        let tag = TypeTag::Schema("TextField".into());
        assert!(tag.accepts(&Value::Widget(WidgetInstance::new("TextField"))));
        assert!(!tag.accepts(&Value::Widget(WidgetInstance::new("Button"))));
        assert!(!tag.accepts(&Value::Text("TextField".into())));
    }

    #[test]
    fn test_untagged_json() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[3, "3.5", {"type": "TextField", "value": "7"}]"#).unwrap();
        assert_eq!(values[0], Value::Number(3.0));
        assert_eq!(values[1], Value::Text("3.5".into()));
        assert_eq!(values[2].type_name(), "TextField");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(4.0).to_string(), "4");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::from("3x+2").to_string(), "3x+2");
        assert_eq!(Value::from(WidgetInstance::new("Symbol")).to_string(), "Symbol");
    }

    #[test]
    fn test_arg_accessors() {
        let args = vec![Value::Number(1.0), Value::from("a")];
        assert_eq!(number_arg(&args, 0), Ok(1.0));
        assert_eq!(text_arg(&args, 1), Ok("a"));
        assert_eq!(number_arg(&args, 1), Err(Fault::ArgumentType));
        assert_eq!(text_arg(&args, 5), Err(Fault::ArgumentType));
    }
}
