// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::*;
use std::fmt;
use std::num::IntErrorKind;

/// ValueType denotes the type a value-carrying argument's tokens are
/// converted to. This is a small closed set of primitive semantic types;
/// callers which need richer types should declare a Str argument and
/// interpret the string themselves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueType {
    /// An unsigned 64-bit integer.
    UnsignedInt,
    /// A double-precision floating point number.
    Double,
    /// A freeform string, taken from the token verbatim.
    Str,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::UnsignedInt => "unsigned integer",
            ValueType::Double => "floating-point",
            ValueType::Str => "string",
        })
    }
}

/// A Value is a single typed value bound to an argument, either converted
/// from a command-line token or taken from the argument's default.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean value, for switch arguments (presence / absence).
    Bool(bool),
    /// An unsigned integer value.
    UnsignedInt(u64),
    /// A floating point value.
    Double(f64),
    /// A string value.
    Str(String),
}

impl Value {
    /// Returns the contained boolean, if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the contained unsigned integer, if this is an UnsignedInt
    /// value.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UnsignedInt(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the contained floating point number, if this is a Double
    /// value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the contained string, if this is a Str value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }

    pub(crate) fn value_type(&self) -> Option<ValueType> {
        match self {
            Value::Bool(_) => None,
            Value::UnsignedInt(_) => Some(ValueType::UnsignedInt),
            Value::Double(_) => Some(ValueType::Double),
            Value::Str(_) => Some(ValueType::Str),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::UnsignedInt(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Str(v) => f.write_str(v),
        }
    }
}

/// Returns true if the given token spells a negative integer - that is, a
/// token which is numeric but unrepresentable as an unsigned integer, as
/// opposed to one which is not numeric at all.
fn is_negative_integer(raw: &str) -> bool {
    raw.len() > 1 && raw.starts_with('-') && raw[1..].chars().all(|c| c.is_ascii_digit())
}

/// Convert a single raw command-line token into a typed Value. This is a
/// pure function; the given argument name is used only for error context.
///
/// Tokens which cannot be parsed as the target type at all produce
/// InvalidValueFormat; tokens which parse but fall outside the type's
/// representable range (negative or overflowing unsigned integers,
/// floating point literals which overflow to infinity) produce
/// ValueOutOfRange.
pub(crate) fn convert(name: &str, raw: &str, value_type: ValueType) -> Result<Value> {
    match value_type {
        ValueType::Str => Ok(Value::Str(raw.to_owned())),
        ValueType::UnsignedInt => match raw.parse::<u64>() {
            Ok(v) => Ok(Value::UnsignedInt(v)),
            Err(e) => {
                if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow)
                    || is_negative_integer(raw)
                {
                    Err(Error::ValueOutOfRange {
                        name: name.to_owned(),
                        value: raw.to_owned(),
                    })
                } else {
                    Err(Error::InvalidValueFormat {
                        name: name.to_owned(),
                        value: raw.to_owned(),
                        expected: value_type,
                    })
                }
            }
        },
        ValueType::Double => match raw.parse::<f64>() {
            // A finite-looking literal which parses to infinity overflowed
            // the representable range. Explicit "inf" / "nan" spellings are
            // accepted as-is.
            Ok(v) if v.is_infinite()
                && !raw
                    .trim()
                    .trim_start_matches(|c| c == '-' || c == '+')
                    .starts_with(|c| c == 'i' || c == 'I') =>
            {
                Err(Error::ValueOutOfRange {
                    name: name.to_owned(),
                    value: raw.to_owned(),
                })
            }
            Ok(v) => Ok(Value::Double(v)),
            Err(_) => Err(Error::InvalidValueFormat {
                name: name.to_owned(),
                value: raw.to_owned(),
                expected: value_type,
            }),
        },
    }
}
