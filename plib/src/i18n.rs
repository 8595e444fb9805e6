// SPDX-License-Identifier: MIT

use clap::{
    error::{ContextKind, ContextValue, ErrorKind},
    Parser,
};
use gettextrs::gettext;
use std::process::exit;

/// Exit status for command line usage errors.
pub const USAGE_EXIT_CODE: i32 = 1;

pub trait ClapLocale: Parser {
    /// Parse the command line, printing translated diagnostics.
    ///
    /// Help and version requests exit with status 0, every other parse
    /// failure with [`USAGE_EXIT_CODE`].
    fn parse_with_locale() -> Self {
        Self::try_parse().unwrap_or_else(|err| {
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    print!("{}", err);
                    exit(0);
                }
                ErrorKind::UnknownArgument => {
                    for (k, v) in err.context() {
                        if let (ContextKind::InvalidArg, ContextValue::String(v)) = (k, v) {
                            eprintln!("{} '{}'", gettext("error: unexpected argument"), v);
                        }
                    }
                }
                _ => {
                    eprint!("{}", err);
                    exit(USAGE_EXIT_CODE);
                }
            };
            eprintln!();
            eprintln!("{}", gettext("For more information, try '--help'."));
            exit(USAGE_EXIT_CODE);
        })
    }
}
