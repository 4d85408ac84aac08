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

use crate::help;
use crate::registry::CmdLine;
use std::env;
use std::process;

/// The integer which is returned from main() if the program exits
/// successfully.
pub const EXIT_SUCCESS: i32 = 0;
/// The integer which is returned from main() if the program exits with any
/// error.
pub const EXIT_FAILURE: i32 = 1;

/// Returns the current program's parameters (accessed essentialy via
/// `std::env::args`) collected into a Vec. The 0'th parameter (the
/// executable) is omitted.
pub fn get_program_parameters() -> Vec<String> {
    env::args()
        .skip(1) // Skip the first argument, which is our executable.
        .collect()
}

/// Returns the rendered help or version text if the given tokens ask for
/// either. These two requests are serviced here, in the convenience layer,
/// before parsing; the parser proper knows nothing about them.
fn handle_special_requests(cmd: &CmdLine, args: &[String]) -> Option<String> {
    for token in args {
        if token == "--help" || token == "-h" {
            return Some(help::render_help(cmd));
        }
        if token == "--version" {
            return Some(help::render_version(cmd));
        }
    }
    None
}

/// Parses the given tokens against the given registry, implementing the
/// full process-level contract: help and version requests print their
/// rendered text to standard output and exit successfully; a parse failure
/// prints the error to standard error and exits with a non-zero status;
/// a successful parse returns control to the caller, which can then read
/// the bound values off the registry.
///
/// Like `std::process::exit`, when this function terminates the process no
/// destructors on the current stack or any other thread's stack will be
/// run.
pub fn parse_or_exit(cmd: &mut CmdLine, args: &[String]) {
    if let Some(text) = handle_special_requests(cmd, args) {
        print!("{}", text);
        process::exit(EXIT_SUCCESS);
    }

    if let Err(e) = cmd.parse(args) {
        eprintln!(
            "{}",
            match cfg!(debug_assertions) {
                false => e.to_string(),
                true => format!("{:?}", e),
            }
        );
        process::exit(EXIT_FAILURE);
    }
}

/// As `parse_or_exit`, but taking the tokens from the program's own
/// command line.
pub fn parse_from_env_or_exit(cmd: &mut CmdLine) {
    let args = get_program_parameters();
    parse_or_exit(cmd, &args)
}
