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

//! Rendering of usage, help, and version text. Everything here is a pure
//! function of the registry's metadata and registered arguments; rendering
//! has no parsing side effects, and can be tested without ever exercising
//! the parser.

use crate::registry::{Arg, ArgId, CmdLine};

/// The placeholder which usage examples use in place of the program name.
const EXECNAME_PLACEHOLDER: &str = "EXECNAME";

/// Format the option part of a usage clause, e.g. "-s|--std" or "--kernel".
fn option_names(arg: &Arg) -> String {
    let spec = arg.spec();
    match spec.get_short_name() {
        Some(sn) => format!("-{}|--{}", sn, spec.get_name()),
        None => format!("--{}", spec.get_name()),
    }
}

/// Format a full usage clause for one named argument: its names plus the
/// placeholder for however many value tokens it consumes.
fn option_clause(arg: &Arg) -> String {
    let spec = arg.spec();
    match spec.arity() {
        0 => option_names(arg),
        _ => format!("{} {}", option_names(arg), spec.value_placeholder()),
    }
}

/// Renders the single-line usage synopsis for the given registry: the
/// program name, each mutually-exclusive group as an alternative clause,
/// the remaining named arguments, and the positional arguments, in
/// registration order. Optional pieces are bracketed.
pub fn render_usage(cmd: &CmdLine) -> String {
    let mut clauses: Vec<String> = vec![format!("Usage: {}", cmd.metadata().name)];

    // Arguments which belong to a group are rendered once, as part of that
    // group's alternative clause, at the position of their first member.
    let grouped: Vec<&[ArgId]> = cmd.groups().iter().map(|g| g.members.as_slice()).collect();
    let mut rendered_groups: Vec<bool> = vec![false; grouped.len()];

    for (id, arg) in cmd.args() {
        if arg.spec().is_positional() {
            continue;
        }
        match grouped.iter().position(|members| members.contains(&id)) {
            Some(gi) => {
                if !rendered_groups[gi] {
                    rendered_groups[gi] = true;
                    let alternatives: Vec<String> = grouped[gi]
                        .iter()
                        .map(|mid| option_clause(cmd.arg(*mid)))
                        .collect();
                    let joined = alternatives.join(" | ");
                    clauses.push(match cmd.groups()[gi].required {
                        true => format!("({})", joined),
                        false => format!("[{}]", joined),
                    });
                }
            }
            None => {
                clauses.push(match arg.spec().is_required() {
                    true => option_clause(arg),
                    false => format!("[{}]", option_clause(arg)),
                });
            }
        }
    }

    for (_, arg) in cmd.args() {
        let spec = arg.spec();
        if !spec.is_positional() {
            continue;
        }
        clauses.push(match spec.is_required() {
            true => spec.value_placeholder(),
            false => format!("[{}]", spec.value_placeholder()),
        });
    }

    clauses.join(" ")
}

/// Renders the full help text for the given registry: the usage synopsis,
/// the program description, one line per named argument and per positional
/// argument, and the usage examples with the EXECNAME placeholder replaced
/// by the program name.
pub fn render_help(cmd: &CmdLine) -> String {
    let mut out = render_usage(cmd);
    out.push('\n');

    if !cmd.metadata().description.is_empty() {
        out.push('\n');
        out.push_str(&cmd.metadata().description);
        out.push('\n');
    }

    if cmd.args().any(|(_, a)| a.spec().is_named()) {
        out.push_str("\nOptions:\n");
        for (_, arg) in cmd.args() {
            let spec = arg.spec();
            if !spec.is_named() {
                continue;
            }
            out.push_str(&format!("\t--{}", spec.get_name()));
            if let Some(short_name) = spec.get_short_name() {
                out.push_str(&format!(", -{}", short_name));
            }
            if spec.arity() > 0 {
                out.push_str(&format!(" {}", spec.value_placeholder()));
            }
            if !spec.get_help().is_empty() {
                out.push_str(&format!(" - {}", spec.get_help()));
            }
            if spec.is_switch() {
                out.push_str(" [Boolean, default: false]");
            } else if let Some(dvs) = spec.default_values() {
                let rendered: Vec<String> = dvs.iter().map(|dv| dv.to_string()).collect();
                out.push_str(&format!(" [Default: {}]", rendered.join(" ")));
            }
            out.push('\n');
        }
    }

    if cmd.args().any(|(_, a)| a.spec().is_positional()) {
        out.push_str("\nPositional arguments:\n");
        for (_, arg) in cmd.args() {
            let spec = arg.spec();
            if !spec.is_positional() {
                continue;
            }
            out.push_str(&format!("\t{}", spec.value_placeholder()));
            if !spec.get_help().is_empty() {
                out.push_str(&format!(" - {}", spec.get_help()));
            }
            if !spec.is_required() {
                out.push_str(" [Optional]");
            }
            out.push('\n');
        }
    }

    if !cmd.metadata().examples.is_empty() {
        out.push_str("\nExamples:\n");
        for example in &cmd.metadata().examples {
            let example = example.replace(EXECNAME_PLACEHOLDER, cmd.metadata().name.as_str());
            for line in example.lines() {
                out.push_str(&format!("\t{}\n", line));
            }
        }
    }

    out
}

/// Renders the program's version text: name, project, version, and
/// copyright notice.
pub fn render_version(cmd: &CmdLine) -> String {
    let metadata = cmd.metadata();
    let mut out = match metadata.project.is_empty() {
        true => format!("{} {}\n", metadata.name, metadata.version),
        false => format!("{} ({}) {}\n", metadata.name, metadata.project, metadata.version),
    };
    if !metadata.copyright.is_empty() {
        out.push_str(&format!("{}\n", metadata.copyright));
    }
    out
}
