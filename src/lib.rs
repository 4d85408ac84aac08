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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! clargs is a library for parsing typed command-line arguments: switches,
//! scalar and multi-valued options, and positional arguments, with
//! per-argument arity, required/optional semantics, mutually-exclusive
//! argument groups, default values, and structured error reporting, plus
//! generated usage / help / version text.
//!
//! The expected usage pattern is to construct a `CmdLine` registry with the
//! program's metadata, register each argument (receiving a stable `ArgId`
//! handle back), optionally place arguments into exclusive groups, call
//! `parse` once, and then read the typed values back through the handles.

/// error defines the taxonomy of registration and parse failures.
pub mod error;
/// help renders usage, help, and version text from a registry's data.
pub mod help;
/// main_impl provides process-level conveniences around parsing: argv
/// access, help/version servicing, and error-printing exit behavior.
pub mod main_impl;
mod parse;
/// registry defines the CmdLine registry which owns all registered
/// arguments and groups for one program invocation.
pub mod registry;
/// spec defines the declarative description of a single argument.
pub mod spec;
/// value defines typed argument values and the token conversion rules.
pub mod value;

// Re-export the most commonly used symbols, to allow using this library
// with just one "use".

pub use crate::error::{Error, Result};
pub use crate::registry::{Arg, ArgId, CmdLine, Metadata};
pub use crate::spec::Spec;
pub use crate::value::{Value, ValueType};

#[cfg(test)]
mod tests;
