//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Terminal input simulation.
//!
//! A terminal driver keeps a queue of input bytes that have not yet been
//! read by the foreground program.  The TIOCSTI request appends one byte
//! to that queue exactly as if it had been typed at the keyboard.

use crate::platform::P_TIOCSTI_REQUEST_CODE;
use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::{Path, PathBuf};

/// The calling process's standard error stream, resolved through procfs.
pub const DEFAULT_TTY_PATH: &str = "/proc/self/fd/2";

/// An open, read-only handle on a terminal device.
///
/// The descriptor is closed when the handle is dropped.
#[derive(Debug)]
pub struct TtyHandle {
    file: File,
    path: PathBuf,
}

impl TtyHandle {
    pub fn open(path: &Path) -> io::Result<TtyHandle> {
        let file = OpenOptions::new().read(true).open(path)?;
        Ok(TtyHandle {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRawFd for TtyHandle {
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}

/// Push a single byte into the input queue of the terminal behind `fd`.
pub fn simulate_input(fd: RawFd, byte: u8) -> io::Result<()> {
    let ch = byte as libc::c_char;
    let ret = unsafe { libc::ioctl(fd, P_TIOCSTI_REQUEST_CODE, &ch as *const libc::c_char) };
    if ret < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(())
    }
}

/// Capability to open a terminal and feed it simulated keystrokes.
pub trait TerminalInjector {
    type Handle;

    fn open(&mut self, path: &Path) -> io::Result<Self::Handle>;

    fn inject_char(&mut self, handle: &Self::Handle, byte: u8) -> io::Result<()>;
}

/// The platform implementation, backed by the TIOCSTI ioctl.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tiocsti;

impl TerminalInjector for Tiocsti {
    type Handle = TtyHandle;

    fn open(&mut self, path: &Path) -> io::Result<TtyHandle> {
        TtyHandle::open(path)
    }

    fn inject_char(&mut self, handle: &TtyHandle, byte: u8) -> io::Result<()> {
        simulate_input(handle.as_raw_fd(), byte)
    }
}
