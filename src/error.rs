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

use crate::value::ValueType;
use thiserror::Error;

fn format_violations(violations: &[Error]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>()
        .join("\n")
}

/// Error represents the various errors which can come up while registering
/// or parsing command-line arguments. Each variant renders as a single
/// human-readable line naming the offending argument(s) and the rule which
/// was violated.
#[derive(Debug, Error)]
pub enum Error {
    /// Two registered arguments share a short or long name. This is a
    /// registration-time error; it can never come up during parsing.
    #[error("Duplicate argument name '{0}'")]
    DuplicateArgumentName(String),
    /// Errors akin to EINVAL - an argument passed into a registration
    /// function was invalid in some way (a bad arity, a default value of
    /// the wrong type, a group with too few members, and so on).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A token which looks like an option matched no registered argument.
    #[error("Unrecognized option '{0}'")]
    UnknownOption(String),
    /// An option's declared arity exceeds the number of remaining tokens.
    #[error("Missing value for option '{name}': expected {expected} value(s), found {found}")]
    MissingArgumentValue {
        /// The long name of the under-supplied option.
        name: String,
        /// The number of value tokens the option's arity calls for.
        expected: usize,
        /// The number of value tokens which were actually present.
        found: usize,
    },
    /// A value token could not be parsed as the argument's declared type.
    #[error("Invalid {expected} value '{value}' for argument '{name}'")]
    InvalidValueFormat {
        /// The long name of the argument the token was bound to.
        name: String,
        /// The offending raw token.
        value: String,
        /// The type the token was expected to parse as.
        expected: ValueType,
    },
    /// A value token parsed as the argument's declared type, but lies
    /// outside that type's representable range (e.g. a negative token for
    /// an unsigned integer argument).
    #[error("Value '{value}' for argument '{name}' is out of range")]
    ValueOutOfRange {
        /// The long name of the argument the token was bound to.
        name: String,
        /// The offending raw token.
        value: String,
    },
    /// An argument which does not allow multiple occurrences appeared more
    /// than once on the command line.
    #[error("Option '{0}' may only be given once")]
    TooManyOccurrences(String),
    /// A required argument (named or positional) was never bound to a
    /// value, and it has no default.
    #[error("No value provided for required argument '{0}'")]
    MissingRequiredArgument(String),
    /// More positional tokens were supplied than there are registered
    /// positional arguments to bind them to.
    #[error("Unexpected positional argument '{0}'")]
    UnexpectedPositionalArgument(String),
    /// More than one member of a mutually-exclusive group was set. The
    /// names are those of the members which were actually supplied.
    #[error("Conflicting options: {}", .0.join(", "))]
    ConflictingArguments(Vec<String>),
    /// No member of a required mutually-exclusive group was set. The names
    /// are those of all of the group's members.
    #[error("Exactly one of {} must be given", .0.join(", "))]
    MissingRequiredGroup(Vec<String>),
    /// Several independent constraint group violations, reported together
    /// (one line each). Unlike structural parse errors, group checks run
    /// over already-bound state, so there is no reason to stop at the
    /// first failure.
    #[error("{}", format_violations(.0))]
    ConstraintViolations(Vec<Error>),
}

/// A Result type which uses clargs' internal Error type.
pub type Result<T> = std::result::Result<T, Error>;
