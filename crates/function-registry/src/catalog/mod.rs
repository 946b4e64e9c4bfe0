// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builtin SOQL catalogs
//!
//! This module contains the function, operator and date literal tables.

pub mod date_literals;
pub mod functions;
pub mod operators;
