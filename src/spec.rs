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
use crate::value::{Value, ValueType};

/// Kind denotes the particular kind of argument a Spec structure describes.
/// It also carries the extra metadata specific to that kind, such as the
/// value type, arity, and default value.
#[derive(Clone, Debug)]
pub(crate) enum Kind {
    /// A switch, whose value is simply whether or not it was present on
    /// the command line. Switches consume no value tokens (arity 0).
    Switch,
    /// A named option which consumes exactly one value token per
    /// occurrence.
    Scalar {
        /// The type the value token is converted to.
        value_type: ValueType,
        /// The value to fall back to when the option is absent.
        default_value: Option<Value>,
    },
    /// A named option which consumes a fixed number of value tokens
    /// (greater than one is the typical case) per occurrence.
    Multi {
        /// The type each value token is converted to.
        value_type: ValueType,
        /// The number of value tokens consumed per occurrence.
        arity: usize,
    },
    /// A positional argument, which, unlike the other kinds, is never
    /// identified by name on the command line, but purely by its position
    /// among the non-option tokens. Each positional binds one token.
    Positional {
        /// The type the bound token is converted to.
        value_type: ValueType,
        /// The value to fall back to when no token is bound.
        default_value: Option<Value>,
    },
}

/// Spec describes a single argument, in such a way that the parser can
/// correctly identify it in the set of tokens given on the command line.
/// A Spec carries only declarative data; the values bound during parsing
/// live on the registry's Arg structures instead.
#[derive(Clone, Debug)]
pub struct Spec {
    /// The long name of this argument, matched on the command line as
    /// "--name". Positional arguments use it only for error and help text.
    name: String,
    /// The help string to print out for this argument when applicable.
    help: String,
    /// The optional single-character short name, matched as "-n".
    short_name: Option<char>,
    /// Whether this argument must be bound (or have a default) after
    /// parsing completes.
    required: bool,
    /// Whether this argument may legally appear more than once on the
    /// command line. When it does, the most recent occurrence wins.
    repeatable: bool,
    /// An optional placeholder describing the value tokens in usage text,
    /// e.g. "<rx> <ry> <rz>". When absent, a placeholder is derived from
    /// the argument's name.
    value_desc: Option<String>,
    kind: Kind,
}

fn check_default_type(name: &str, value_type: ValueType, default_value: &Option<Value>) -> Result<()> {
    if let Some(dv) = default_value {
        if dv.value_type() != Some(value_type) {
            return Err(Error::InvalidArgument(format!(
                "Default value for argument '{}' does not match its declared {} type",
                name, value_type
            )));
        }
    }
    Ok(())
}

impl Spec {
    /// Constructs a Spec which describes a switch. Switches consume no
    /// value tokens; their value is boolean presence, false by default.
    pub fn switch(name: &str, help: &str, short_name: Option<char>) -> Spec {
        Spec {
            name: name.to_owned(),
            help: help.to_owned(),
            short_name,
            required: false,
            repeatable: false,
            value_desc: None,
            kind: Kind::Switch,
        }
    }

    /// Constructs a Spec which describes a named option consuming exactly
    /// one value token of the given type per occurrence. The default
    /// value, if any, must be of the declared type.
    pub fn scalar(
        name: &str,
        help: &str,
        short_name: Option<char>,
        value_type: ValueType,
        required: bool,
        default_value: Option<Value>,
        value_desc: Option<&str>,
    ) -> Result<Spec> {
        check_default_type(name, value_type, &default_value)?;
        Ok(Spec {
            name: name.to_owned(),
            help: help.to_owned(),
            short_name,
            required,
            repeatable: false,
            value_desc: value_desc.map(|vd| vd.to_owned()),
            kind: Kind::Scalar {
                value_type,
                default_value,
            },
        })
    }

    /// Constructs a Spec which describes a named option consuming a fixed
    /// number of value tokens per occurrence, producing an ordered
    /// sequence of typed values. The arity must be at least one; an
    /// argument which consumes no values is a switch, not a multi-value
    /// option.
    pub fn multi(
        name: &str,
        help: &str,
        short_name: Option<char>,
        value_type: ValueType,
        arity: usize,
        required: bool,
        repeatable: bool,
        value_desc: Option<&str>,
    ) -> Result<Spec> {
        if arity == 0 {
            return Err(Error::InvalidArgument(format!(
                "Multi-value argument '{}' must have an arity of at least one",
                name
            )));
        }
        Ok(Spec {
            name: name.to_owned(),
            help: help.to_owned(),
            short_name,
            required,
            repeatable,
            value_desc: value_desc.map(|vd| vd.to_owned()),
            kind: Kind::Multi { value_type, arity },
        })
    }

    /// Constructs a Spec which describes a positional argument. Arguments
    /// of this kind are not looked up by name after a "-" or "--"
    /// character, but instead are bound purely by their position in the
    /// list of non-option tokens.
    ///
    /// This also means that the order in which positional Specs are added
    /// to a registry matters for parsing.
    pub fn positional(
        name: &str,
        help: &str,
        value_type: ValueType,
        required: bool,
        default_value: Option<Value>,
        value_desc: Option<&str>,
    ) -> Result<Spec> {
        check_default_type(name, value_type, &default_value)?;
        Ok(Spec {
            name: name.to_owned(),
            help: help.to_owned(),
            short_name: None,
            required,
            repeatable: false,
            value_desc: value_desc.map(|vd| vd.to_owned()),
            kind: Kind::Positional {
                value_type,
                default_value,
            },
        })
    }

    /// Returns true if the given token identifies this argument on the
    /// command line. Matching is exact-string and case-sensitive: the
    /// token must be exactly "--name" or "-n". Positional Specs never
    /// match by token text.
    pub(crate) fn matches(&self, token: &str) -> bool {
        if self.is_positional() {
            return false;
        }
        if let Some(long) = token.strip_prefix("--") {
            return long == self.name;
        }
        if let Some(short) = token.strip_prefix('-') {
            if let Some(sn) = self.short_name {
                return short.chars().eq(std::iter::once(sn));
            }
        }
        false
    }

    /// Returns the number of value tokens this argument consumes per
    /// occurrence. Zero denotes a switch.
    pub(crate) fn arity(&self) -> usize {
        match self.kind {
            Kind::Switch => 0,
            Kind::Scalar { .. } => 1,
            Kind::Multi { arity, .. } => arity,
            Kind::Positional { .. } => 1,
        }
    }

    /// Returns the type this argument's value tokens are converted to, or
    /// None for switches, which carry no value tokens.
    pub(crate) fn value_type(&self) -> Option<ValueType> {
        match self.kind {
            Kind::Switch => None,
            Kind::Scalar { value_type, .. } => Some(value_type),
            Kind::Multi { value_type, .. } => Some(value_type),
            Kind::Positional { value_type, .. } => Some(value_type),
        }
    }

    /// Returns this argument's default values, if it has any. Switches
    /// implicitly default to false.
    pub(crate) fn default_values(&self) -> Option<Vec<Value>> {
        match &self.kind {
            Kind::Switch => Some(vec![Value::Bool(false)]),
            Kind::Scalar { default_value, .. } => default_value.clone().map(|dv| vec![dv]),
            Kind::Multi { .. } => None,
            Kind::Positional { default_value, .. } => default_value.clone().map(|dv| vec![dv]),
        }
    }

    /// Returns true if this Spec describes a switch.
    pub(crate) fn is_switch(&self) -> bool {
        matches!(self.kind, Kind::Switch)
    }

    /// Returns true if this Spec describes a positional argument.
    pub(crate) fn is_positional(&self) -> bool {
        matches!(self.kind, Kind::Positional { .. })
    }

    /// Returns true if this Spec describes a named argument. This is
    /// equivalent to !is_positional().
    pub(crate) fn is_named(&self) -> bool {
        !self.is_positional()
    }

    /// Returns this argument's long name.
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the human-readable help text for this argument.
    pub fn get_help(&self) -> &str {
        self.help.as_str()
    }

    /// Returns this argument's short name, if it has one.
    pub fn get_short_name(&self) -> Option<char> {
        self.short_name
    }

    /// Returns whether this argument must be bound (or have a default)
    /// after parsing completes.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns whether this argument may appear more than once on the
    /// command line.
    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    /// Returns the usage placeholder for this argument's value tokens: the
    /// caller-supplied description if one was given, or one derived from
    /// the argument's name.
    pub(crate) fn value_placeholder(&self) -> String {
        match &self.value_desc {
            Some(vd) => vd.clone(),
            None => {
                let one = format!("<{}>", self.name);
                vec![one; self.arity()].join(" ")
            }
        }
    }
}
