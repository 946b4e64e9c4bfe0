// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SOQL Function Registry
//!
//! Static catalogs the completion engine consults when it narrows a
//! suggestion to a field type:
//!
//! - builtin functions with their accepted argument types
//! - comparison operators with their accepted operand types
//! - fixed and parametric date-range literals
//!
//! ## Usage
//!
//! ```rust
//! use soql_lsp_function_registry::{FieldType, FunctionRegistry};
//!
//! let registry = FunctionRegistry::new();
//! let avg = registry.get_function("avg").unwrap();
//! assert!(avg.is_aggregate);
//! assert!(avg.accepts(FieldType::Currency));
//! ```

pub mod catalog;
pub mod field_type;
pub mod registry;

pub use catalog::date_literals::{DATE_RANGE_LITERALS, PARAMETRIC_DATE_RANGE_LITERALS};
pub use catalog::functions::SoqlFunction;
pub use catalog::operators::SoqlOperator;
pub use field_type::FieldType;
pub use registry::FunctionRegistry;
