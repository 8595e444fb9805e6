//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

cfg_if::cfg_if! {
    if #[cfg(any(target_env = "musl", target_os = "android"))] {
        type LocalPIoctlOp = libc::c_int;
    } else {
        type LocalPIoctlOp = libc::c_ulong;
    }
}

// TIOCSTI: push one byte into the terminal's input queue.
pub(crate) const P_TIOCSTI_REQUEST_CODE: LocalPIoctlOp = ({
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        0x5412
    }

    #[cfg(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd"
    ))]
    {
        0x80017472_u32
    }

    #[cfg(target_os = "solaris")]
    {
        0x7472
    }
}) as LocalPIoctlOp;
