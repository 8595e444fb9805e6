//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

pub mod i18n;
mod platform;
pub mod terminal;
pub mod testing;

pub const PROJECT_NAME: &'static str = "ttyinject-rs";

pub use testing::*;
