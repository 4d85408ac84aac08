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
use crate::registry::{ArgId, CmdLine, Group};
use crate::value::{convert, Value};
use log::debug;

/// Returns true if the given token is an option token. Any token starting
/// with "-" is treated as one; everything else is a candidate positional
/// token.
fn is_option_token(token: &str) -> bool {
    token.starts_with('-')
}

/// Strip the leading "-" or "--" off an option token, for error messages.
fn option_name(token: &str) -> &str {
    match token.strip_prefix("--") {
        Some(name) => name,
        None => token.strip_prefix('-').unwrap_or(token),
    }
}

/// Locate the registered argument the given option token identifies.
/// Matching is exact-string over the flat, case-sensitive long / short
/// name spaces.
fn find_named(cmd: &CmdLine, token: &str) -> Result<ArgId> {
    for (id, arg) in cmd.args() {
        if arg.spec().matches(token) {
            return Ok(id);
        }
    }
    Err(Error::UnknownOption(option_name(token).to_owned()))
}

/// Consume exactly the given argument's arity in following tokens,
/// converting each to the argument's declared value type. Fails if the
/// token stream runs out before the arity is satisfied.
fn consume_values<'a, I: Iterator<Item = &'a String>>(
    cmd: &CmdLine,
    id: ArgId,
    tokens: &mut I,
) -> Result<Vec<Value>> {
    let spec = cmd.arg(id).spec();
    let arity = spec.arity();
    let mut values = Vec::with_capacity(arity);
    for found in 0..arity {
        let raw = match tokens.next() {
            Some(t) => t,
            None => {
                return Err(Error::MissingArgumentValue {
                    name: spec.get_name().to_owned(),
                    expected: arity,
                    found,
                });
            }
        };
        // The value type is present for every value-carrying kind; arity 0
        // (switches) never reaches this loop.
        if let Some(vt) = spec.value_type() {
            values.push(convert(spec.get_name(), raw, vt)?);
        }
    }
    Ok(values)
}

/// Bind the positional tokens collected during the scan to the registered
/// positional arguments, in registration order. Each positional argument
/// binds exactly one token; a required positional left without a token is
/// an error, as is any token left over once all positional slots are
/// filled.
fn bind_positionals(cmd: &mut CmdLine, tokens: Vec<String>) -> Result<()> {
    let positionals: Vec<ArgId> = cmd
        .args()
        .filter(|(_, a)| a.spec().is_positional())
        .map(|(id, _)| id)
        .collect();

    let mut tokens = tokens.into_iter();
    for id in positionals {
        match tokens.next() {
            Some(raw) => {
                let spec = cmd.arg(id).spec();
                // Positional value types are always present.
                let value = match spec.value_type() {
                    Some(vt) => convert(spec.get_name(), raw.as_str(), vt)?,
                    None => Value::Str(raw),
                };
                let arg = cmd.arg_mut(id);
                arg.record_occurrence()?;
                arg.bind(vec![value]);
            }
            None => {
                let spec = cmd.arg(id).spec();
                if spec.is_required() && spec.default_values().is_none() {
                    return Err(Error::MissingRequiredArgument(spec.get_name().to_owned()));
                }
            }
        }
    }
    if let Some(extra) = tokens.next() {
        return Err(Error::UnexpectedPositionalArgument(extra));
    }
    Ok(())
}

/// Evaluate a single constraint group over the bound state: at most one
/// member may be set, and exactly one must be if the group is required.
fn evaluate_group(cmd: &CmdLine, group: &Group) -> Result<()> {
    let set_names: Vec<String> = group
        .members
        .iter()
        .filter(|id| cmd.arg(**id).is_set())
        .map(|id| cmd.arg(*id).spec().get_name().to_owned())
        .collect();

    if set_names.len() > 1 {
        return Err(Error::ConflictingArguments(set_names));
    }
    if set_names.is_empty() && group.required {
        return Err(Error::MissingRequiredGroup(
            group
                .members
                .iter()
                .map(|id| cmd.arg(*id).spec().get_name().to_owned())
                .collect(),
        ));
    }
    Ok(())
}

/// The global validation pass: it runs only once every argument has been
/// tokenized and bound, because its checks span the full registry state.
/// Required-argument checks fail fast; constraint group violations are
/// independent of one another and are accumulated and reported together.
fn validate(cmd: &CmdLine) -> Result<()> {
    for (_, arg) in cmd.args() {
        let spec = arg.spec();
        if spec.is_required() && !arg.is_set() && spec.default_values().is_none() {
            return Err(Error::MissingRequiredArgument(spec.get_name().to_owned()));
        }
    }

    let mut violations: Vec<Error> = Vec::new();
    for group in cmd.groups() {
        if let Err(e) = evaluate_group(cmd, group) {
            violations.push(e);
        }
    }
    match violations.len() {
        0 => Ok(()),
        1 => Err(violations.remove(0)),
        _ => Err(Error::ConstraintViolations(violations)),
    }
}

/// Parse the given tokens against the registry: scan left to right,
/// routing option tokens (and their arity in following value tokens) to
/// the matching named arguments and collecting everything else as
/// positional tokens, then bind positionals and run the global validation
/// pass. The first structural error encountered wins; there is no error
/// recovery.
pub(crate) fn parse_into(cmd: &mut CmdLine, args: &[String]) -> Result<()> {
    let mut tokens = args.iter();
    let mut positional_tokens: Vec<String> = Vec::new();

    while let Some(token) = tokens.next() {
        if !is_option_token(token) {
            positional_tokens.push(token.clone());
            continue;
        }

        let id = find_named(cmd, token)?;
        cmd.arg_mut(id).record_occurrence()?;
        let values = consume_values(cmd, id, &mut tokens)?;
        debug!(
            "bound {} value(s) to option '{}'",
            values.len(),
            cmd.arg(id).spec().get_name()
        );
        cmd.arg_mut(id).bind(values);
    }

    bind_positionals(cmd, positional_tokens)?;
    validate(cmd)
}
