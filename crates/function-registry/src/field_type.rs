// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Field data types as reported by the object catalog

use serde::{Deserialize, Serialize};

/// Declared type of an object field
///
/// Serialized with the lowercase names the client's schema uses, so the
/// values can be sent as type filters without translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Id,
    Reference,
    Boolean,
    Int,
    Long,
    Double,
    Currency,
    Percent,
    String,
    TextArea,
    Picklist,
    MultiPicklist,
    Combobox,
    Email,
    Phone,
    Url,
    Date,
    DateTime,
    Time,
    Address,
    Location,
    EncryptedString,
    Base64,
}

impl FieldType {
    pub const NUMERIC: &'static [FieldType] = &[
        FieldType::Int,
        FieldType::Long,
        FieldType::Double,
        FieldType::Currency,
        FieldType::Percent,
    ];

    pub const TEXT: &'static [FieldType] = &[
        FieldType::String,
        FieldType::TextArea,
        FieldType::Picklist,
        FieldType::Combobox,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Url,
    ];

    pub const TEMPORAL: &'static [FieldType] =
        &[FieldType::Date, FieldType::DateTime, FieldType::Time];

    /// Serialized name of this type
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Id => "id",
            FieldType::Reference => "reference",
            FieldType::Boolean => "boolean",
            FieldType::Int => "int",
            FieldType::Long => "long",
            FieldType::Double => "double",
            FieldType::Currency => "currency",
            FieldType::Percent => "percent",
            FieldType::String => "string",
            FieldType::TextArea => "textarea",
            FieldType::Picklist => "picklist",
            FieldType::MultiPicklist => "multipicklist",
            FieldType::Combobox => "combobox",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Url => "url",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Time => "time",
            FieldType::Address => "address",
            FieldType::Location => "location",
            FieldType::EncryptedString => "encryptedstring",
            FieldType::Base64 => "base64",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
