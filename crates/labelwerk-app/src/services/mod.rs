// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — filesystem locations and persisted configuration for the
// command-line front end.

pub mod config;
pub mod data_dir;
