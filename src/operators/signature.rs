//! Operator type signatures.
//!
//! Written as `out(in1,in2,...)`, e.g. `float(float,float)` or
//! `string(TextField)`. Whitespace around tags is ignored.

use std::fmt;

use super::errors::{OperatorError, OperatorResult};
use super::value::{TypeTag, Value};

/// Ordered input tags and one output tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    inputs: Vec<TypeTag>,
    output: TypeTag,
}

impl Signature {
    pub fn new(inputs: Vec<TypeTag>, output: TypeTag) -> Self {
        Self { inputs, output }
    }

    /// Parses the textual form
    pub fn parse(text: &str) -> OperatorResult<Self> {
        let invalid = |reason: &str| OperatorError::InvalidSignature {
            signature: text.to_string(),
            reason: reason.to_string(),
        };

        let open = text.find('(').ok_or_else(|| invalid("missing '('"))?;
        let body = text[open + 1..]
            .trim_end()
            .strip_suffix(')')
            .ok_or_else(|| invalid("missing closing ')'"))?;

        let output = text[..open].trim();
        if !is_tag_word(output) {
            return Err(invalid("output type must be a single word"));
        }

        let mut inputs = Vec::new();
        if !body.trim().is_empty() {
            for word in body.split(',') {
                let word = word.trim();
                if !is_tag_word(word) {
                    return Err(invalid("input types must be comma separated words"));
                }
                inputs.push(TypeTag::from_word(word));
            }
        }

        Ok(Self::new(inputs, TypeTag::from_word(output)))
    }

    pub fn inputs(&self) -> &[TypeTag] {
        &self.inputs
    }

    pub fn output(&self) -> &TypeTag {
        &self.output
    }

    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    /// Checks arity and argument tags, naming `operator` in any error
    pub fn check_args(&self, operator: &str, args: &[Value]) -> OperatorResult<()> {
        if args.len() != self.arity() {
            return Err(OperatorError::ArityMismatch {
                operator: operator.to_string(),
                expected: self.arity(),
                actual: args.len(),
            });
        }

        for (index, (tag, arg)) in self.inputs.iter().zip(args).enumerate() {
            if !tag.accepts(arg) {
                return Err(OperatorError::ArgumentType {
                    operator: operator.to_string(),
                    index,
                    expected: tag.to_string(),
                    actual: arg.type_name().to_string(),
                });
            }
        }

        Ok(())
    }
}

fn is_tag_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_alphanumeric() || c == '_')
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.output)?;
        for (i, tag) in self.inputs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", tag)?;
        }
        f.write_str(")")
    }
}
