//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

mod injector;

use std::ffi::OsString;
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::i18n::ClapLocale;
use plib::terminal::{Tiocsti, DEFAULT_TTY_PATH};
use plib::PROJECT_NAME;

#[derive(Parser)]
#[command(
    version,
    about = gettext("ttyinject - push text into a terminal's input queue as if typed")
)]
struct Args {
    #[arg(
        short,
        long,
        default_value = DEFAULT_TTY_PATH,
        help = gettext("Terminal device to inject into")
    )]
    tty: PathBuf,

    #[arg(help = gettext("Text to inject, one byte at a time"))]
    text: Option<OsString>,
}

impl ClapLocale for Args {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse_with_locale();

    let mut exit_code = 0;

    let text = args.text.as_ref().map(|s| s.as_bytes());
    if let Err(e) = injector::inject(&mut Tiocsti, &args.tty, text) {
        eprintln!("ttyinject: {}", e);
        exit_code = 1;
    }

    std::process::exit(exit_code)
}
