use std::fmt;

/// Runtime values produced by the evaluator. Booleans, null, functions and
/// errors join this enum as the evaluator grows to cover them.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Object {
    Integer(i64),
}

impl Object {
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Integer(_) => "INTEGER",
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{}", value),
        }
    }
}
