use std::{fmt::Display, str::FromStr};

/// Primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Int,
    String,
    Boolean,
    Float,
    Char,
    Void,
    Null,
}

impl DataType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Int | DataType::Float)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::String => "string",
            DataType::Boolean => "boolean",
            DataType::Float => "float",
            DataType::Char => "char",
            DataType::Void => "void",
            DataType::Null => "null",
        }
    }
}

impl FromStr for DataType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(DataType::Int),
            "string" => Ok(DataType::String),
            "boolean" => Ok(DataType::Boolean),
            "float" => Ok(DataType::Float),
            "char" => Ok(DataType::Char),
            "void" => Ok(DataType::Void),
            "null" => Ok(DataType::Null),
            _ => Err(()),
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operator categories used by the binary expression typing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorCategory {
    Comparison,
    Logical,
    Arithmetic,
}

impl OperatorCategory {
    pub fn of(operator: &str) -> Option<Self> {
        match operator {
            "==" | "!=" | "<" | "<=" | ">" | ">=" => Some(OperatorCategory::Comparison),
            "&&" | "||" => Some(OperatorCategory::Logical),
            "+" | "-" | "*" | "/" | "^" | "%" => Some(OperatorCategory::Arithmetic),
            _ => None,
        }
    }
}
