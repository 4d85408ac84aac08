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
use crate::parse::parse_into;
use crate::spec::Spec;
use crate::value::{Value, ValueType};
use log::debug;

/// Program metadata, consumed at construction time and used only for
/// rendering help, usage, and version text - never for parsing logic.
#[derive(Clone, Debug, Default)]
pub struct Metadata {
    /// The name of the program, e.g. "smoothimage".
    pub name: String,
    /// The name of the project the program belongs to.
    pub project: String,
    /// A human-readable description of what the program does.
    pub description: String,
    /// Ordered usage examples. Each is a literal command line in which the
    /// placeholder "EXECNAME" stands for the program name, optionally
    /// followed (after a newline) by an explanation.
    pub examples: Vec<String>,
    /// The program's version string.
    pub version: String,
    /// The program's copyright notice.
    pub copyright: String,
}

impl Metadata {
    /// A convenience constructor for the common case where only the
    /// program name and version are interesting; the remaining fields can
    /// be filled in with struct update syntax.
    pub fn new(name: &str, version: &str) -> Metadata {
        Metadata {
            name: name.to_owned(),
            version: version.to_owned(),
            ..Metadata::default()
        }
    }
}

/// ArgId is a stable, copyable handle to an argument registered with a
/// CmdLine. Constraint groups store these handles (not references to the
/// arguments themselves), so an argument must be registered before it can
/// be placed in a group.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArgId(pub(crate) usize);

/// An Arg is a registered argument: its declarative Spec, plus the state
/// bound to it during parsing. The bound state is mutated only by the
/// parser; after a successful parse it is read-only to callers. After a
/// *failed* parse the bound state is unspecified and must not be read.
#[derive(Debug)]
pub struct Arg {
    spec: Spec,
    occurrences: usize,
    /// The values bound by the most recent occurrence, in the order the
    /// tokens were supplied.
    values: Vec<Value>,
}

impl Arg {
    fn new(spec: Spec) -> Arg {
        Arg {
            spec,
            occurrences: 0,
            values: Vec::new(),
        }
    }

    /// Returns this argument's declarative Spec.
    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    /// Returns true if this argument appeared on the command line at least
    /// once.
    pub fn is_set(&self) -> bool {
        self.occurrences > 0
    }

    /// Returns the number of times this argument appeared on the command
    /// line.
    pub fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Returns the values bound by this argument's most recent occurrence,
    /// in the order they were supplied - or the argument's default values,
    /// if it never appeared. The returned vector is empty for an argument
    /// which is unset and has no default.
    pub fn values(&self) -> Vec<Value> {
        if self.is_set() {
            if self.spec.is_switch() {
                return vec![Value::Bool(true)];
            }
            return self.values.clone();
        }
        self.spec.default_values().unwrap_or_default()
    }

    /// Returns this argument's single value (bound or default), if it has
    /// exactly one. This is the common accessor for switches, scalars and
    /// positionals.
    pub fn value(&self) -> Option<Value> {
        let mut vs = self.values();
        match vs.len() {
            1 => Some(vs.remove(0)),
            _ => None,
        }
    }

    /// Returns this switch's boolean value: true if it was supplied, false
    /// otherwise. For non-switch arguments this degenerates to is_set.
    pub fn bool_value(&self) -> bool {
        self.value().and_then(|v| v.as_bool()).unwrap_or(self.is_set())
    }

    /// Returns this argument's single unsigned integer value, if it has
    /// one.
    pub fn uint_value(&self) -> Option<u64> {
        self.value().and_then(|v| v.as_u64())
    }

    /// Returns this argument's unsigned integer values, in the order they
    /// were supplied. Non-integer values are skipped, so for an argument
    /// declared with an unsigned integer type this is lossless.
    pub fn uint_values(&self) -> Vec<u64> {
        self.values().iter().filter_map(|v| v.as_u64()).collect()
    }

    /// Returns this argument's single floating point value, if it has one.
    pub fn double_value(&self) -> Option<f64> {
        self.value().and_then(|v| v.as_f64())
    }

    /// Returns this argument's single string value, if it has one.
    pub fn str_value(&self) -> Option<String> {
        self.value().and_then(|v| v.as_str().map(|s| s.to_owned()))
    }

    /// Count one more occurrence of this argument on the command line.
    /// Arguments which are not repeatable may only occur once, regardless
    /// of whether the repeated occurrences carry identical values.
    pub(crate) fn record_occurrence(&mut self) -> Result<()> {
        self.occurrences += 1;
        if self.occurrences > 1 && !self.spec.is_repeatable() {
            return Err(Error::TooManyOccurrences(self.spec.get_name().to_owned()));
        }
        Ok(())
    }

    /// Replace this argument's bound values with those of a new occurrence.
    pub(crate) fn bind(&mut self, values: Vec<Value>) {
        self.values = values;
    }
}

/// A Group is a set of registered arguments which are mutually exclusive:
/// at most one member may be supplied on the command line. A required
/// group must have exactly one member supplied.
#[derive(Debug)]
pub(crate) struct Group {
    pub(crate) members: Vec<ArgId>,
    pub(crate) required: bool,
}

/// CmdLine is the registry for one program invocation. It exclusively owns
/// every registered argument and constraint group, along with the program
/// metadata, and is the single entry point for parsing.
///
/// The expected lifecycle is: construct, register arguments and groups,
/// call parse exactly once, then read typed values back off the arguments.
#[derive(Debug)]
pub struct CmdLine {
    metadata: Metadata,
    args: Vec<Arg>,
    groups: Vec<Group>,
}

impl CmdLine {
    /// Constructs a new, empty CmdLine with the given program metadata.
    pub fn new(metadata: Metadata) -> CmdLine {
        CmdLine {
            metadata,
            args: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Returns the program metadata this CmdLine was constructed with.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Registers an argument, returning a stable handle to it. The long
    /// and short name namespaces are flat and case-sensitive: registering
    /// a second argument with an already-used long or short name fails
    /// immediately, before any parsing occurs.
    pub fn add(&mut self, spec: Spec) -> Result<ArgId> {
        for existing in &self.args {
            if existing.spec.get_name() == spec.get_name() {
                return Err(Error::DuplicateArgumentName(spec.get_name().to_owned()));
            }
            if let (Some(a), Some(b)) = (existing.spec.get_short_name(), spec.get_short_name()) {
                if a == b {
                    return Err(Error::DuplicateArgumentName(a.to_string()));
                }
            }
        }
        debug!("registered argument '{}'", spec.get_name());
        self.args.push(Arg::new(spec));
        Ok(ArgId(self.args.len() - 1))
    }

    /// Registers a switch. See Spec::switch.
    pub fn add_switch(&mut self, name: &str, help: &str, short_name: Option<char>) -> Result<ArgId> {
        self.add(Spec::switch(name, help, short_name))
    }

    /// Registers a scalar value argument. See Spec::scalar.
    pub fn add_scalar(
        &mut self,
        name: &str,
        help: &str,
        short_name: Option<char>,
        value_type: ValueType,
        required: bool,
        default_value: Option<Value>,
        value_desc: Option<&str>,
    ) -> Result<ArgId> {
        self.add(Spec::scalar(
            name,
            help,
            short_name,
            value_type,
            required,
            default_value,
            value_desc,
        )?)
    }

    /// Registers a multi-value argument. See Spec::multi.
    pub fn add_multi_value(
        &mut self,
        name: &str,
        help: &str,
        short_name: Option<char>,
        value_type: ValueType,
        arity: usize,
        required: bool,
        repeatable: bool,
        value_desc: Option<&str>,
    ) -> Result<ArgId> {
        self.add(Spec::multi(
            name,
            help,
            short_name,
            value_type,
            arity,
            required,
            repeatable,
            value_desc,
        )?)
    }

    /// Registers a positional argument. Positional tokens are bound in
    /// registration order. See Spec::positional.
    pub fn add_positional(
        &mut self,
        name: &str,
        help: &str,
        value_type: ValueType,
        required: bool,
        default_value: Option<Value>,
        value_desc: Option<&str>,
    ) -> Result<ArgId> {
        self.add(Spec::positional(
            name,
            help,
            value_type,
            required,
            default_value,
            value_desc,
        )?)
    }

    fn add_group(&mut self, members: &[ArgId], required: bool) -> Result<()> {
        if members.len() < 2 {
            return Err(Error::InvalidArgument(format!(
                "An exclusive group must have at least two members, got {}",
                members.len()
            )));
        }
        for id in members {
            if id.0 >= self.args.len() {
                return Err(Error::InvalidArgument(
                    "Group members must be registered before joining a group".to_owned(),
                ));
            }
        }
        self.groups.push(Group {
            members: members.to_vec(),
            required,
        });
        Ok(())
    }

    /// Registers a mutually-exclusive group: at most one of the given
    /// arguments may be supplied on the command line. Supplying none of
    /// them is legal.
    pub fn add_exclusive_group(&mut self, members: &[ArgId]) -> Result<()> {
        self.add_group(members, false)
    }

    /// Registers a required mutually-exclusive group: exactly one of the
    /// given arguments must be supplied on the command line.
    pub fn add_required_exclusive_group(&mut self, members: &[ArgId]) -> Result<()> {
        self.add_group(members, true)
    }

    /// Returns the registered argument the given handle refers to.
    pub fn arg(&self, id: ArgId) -> &Arg {
        &self.args[id.0]
    }

    pub(crate) fn arg_mut(&mut self, id: ArgId) -> &mut Arg {
        &mut self.args[id.0]
    }

    pub(crate) fn args(&self) -> impl Iterator<Item = (ArgId, &Arg)> {
        self.args.iter().enumerate().map(|(i, a)| (ArgId(i), a))
    }

    pub(crate) fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Parses the given command-line tokens (argv without the leading
    /// executable name) against the registered arguments and groups.
    ///
    /// On success, every argument is bound and every constraint is
    /// satisfied, and values can be read back off the arguments. On
    /// failure, the first structural error (or the full set of constraint
    /// group violations) is returned, and the bound state is unspecified.
    pub fn parse(&mut self, args: &[String]) -> Result<()> {
        parse_into(self, args)
    }
}
