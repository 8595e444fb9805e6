//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use gettextrs::gettext;
use plib::terminal::TerminalInjector;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Reasons a text could not be fed to the terminal.
#[derive(Debug)]
pub enum InjectError {
    /// No text operand was given.
    MissingArgument,
    /// The terminal device could not be opened.
    HandleUnavailable { path: PathBuf, source: io::Error },
    /// The driver rejected a byte; `injected` bytes had already been queued.
    InjectionFailed { injected: usize, source: io::Error },
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectError::MissingArgument => write!(f, "{}", gettext("missing text operand")),
            InjectError::HandleUnavailable { path, source } => write!(
                f,
                "{} {}: {}",
                gettext("cannot open terminal"),
                path.display(),
                source
            ),
            InjectError::InjectionFailed { injected, source } => write!(
                f,
                "{} {} {}: {}",
                gettext("terminal input injection failed after"),
                injected,
                gettext("byte(s)"),
                source
            ),
        }
    }
}

impl Error for InjectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InjectError::MissingArgument => None,
            InjectError::HandleUnavailable { source, .. }
            | InjectError::InjectionFailed { source, .. } => Some(source),
        }
    }
}

/// Feed `text` into the terminal at `path`, one byte at a time, in order.
///
/// Stops at the first byte the driver rejects.  The terminal handle lives
/// only for the duration of this call.
pub fn inject<T: TerminalInjector>(
    term: &mut T,
    path: &Path,
    text: Option<&[u8]>,
) -> Result<(), InjectError> {
    let text = text.ok_or(InjectError::MissingArgument)?;

    let handle = term
        .open(path)
        .map_err(|source| InjectError::HandleUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    for (injected, byte) in text.iter().enumerate() {
        term.inject_char(&handle, *byte)
            .map_err(|source| InjectError::InjectionFailed { injected, source })?;
    }

    Ok(())
}
