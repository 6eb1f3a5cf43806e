use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::coercion::parse_leading_integer;

// ── Field ─────────────────────────────────────────────────────────────────────

/// Column names the dashboard knows about.
///
/// The record schema is header-driven, so these are only conveniences: any
/// other header name is just as valid a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Customer,
    DeviceName,
    DeviceCategory,
    LotNumber,
    DeliverDate,
    LicenseId,
    Numbers,
}

impl Field {
    /// Every well-known field, in the column order of the reference table.
    pub const ALL: [Field; 7] = [
        Field::Customer,
        Field::DeviceName,
        Field::DeviceCategory,
        Field::LotNumber,
        Field::DeliverDate,
        Field::LicenseId,
        Field::Numbers,
    ];

    /// The exact (case-sensitive) header name for this field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Customer => "customer",
            Field::DeviceName => "DeviceName",
            Field::DeviceCategory => "DeviceCategory",
            Field::LotNumber => "LotNumber",
            Field::DeliverDate => "deliverdate",
            Field::LicenseId => "licenseID",
            Field::Numbers => "Numbers",
        }
    }
}

impl AsRef<str> for Field {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── PackingListItem ───────────────────────────────────────────────────────────

/// One row of a packing-list table.
///
/// Values are stored positionally against a header list shared by every
/// record produced from the same input. A record always holds exactly one
/// value per header; short rows are padded with empty strings and long rows
/// are truncated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingListItem {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl PackingListItem {
    /// Build a record from a shared header list and the row's values.
    pub fn new(headers: Arc<[String]>, mut values: Vec<String>) -> Self {
        values.resize(headers.len(), String::new());
        Self { headers, values }
    }

    /// Build a standalone record from `(header, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let (headers, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self::new(headers.into(), values)
    }

    /// Value of `field`, or `""` when the header is absent.
    ///
    /// When a header name appears more than once the last such column wins.
    pub fn get(&self, field: &str) -> &str {
        self.headers
            .iter()
            .rposition(|h| h == field)
            .map(|idx| self.values[idx].as_str())
            .unwrap_or("")
    }

    /// `true` when the record's header list contains `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.headers.iter().any(|h| h == field)
    }

    /// Header names in source column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Values in source column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Resolved `(header, value)` pairs, one per distinct header name.
    ///
    /// Each name is yielded at the position of its last occurrence, matching
    /// the lookup rule of [`get`](Self::get).
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.headers
            .iter()
            .enumerate()
            .filter(|(idx, name)| !self.headers[idx + 1..].contains(*name))
            .map(|(idx, name)| (name.as_str(), self.values[idx].as_str()))
    }

    pub fn customer(&self) -> &str {
        self.get(Field::Customer.as_str())
    }

    pub fn device_name(&self) -> &str {
        self.get(Field::DeviceName.as_str())
    }

    pub fn device_category(&self) -> &str {
        self.get(Field::DeviceCategory.as_str())
    }

    pub fn lot_number(&self) -> &str {
        self.get(Field::LotNumber.as_str())
    }

    /// Delivery date, kept verbatim. No date parsing is attempted.
    pub fn deliver_date(&self) -> &str {
        self.get(Field::DeliverDate.as_str())
    }

    pub fn license_id(&self) -> &str {
        self.get(Field::LicenseId.as_str())
    }

    /// Raw quantity text from the `Numbers` column.
    pub fn numbers(&self) -> &str {
        self.get(Field::Numbers.as_str())
    }

    /// Quantity shipped, with the lenient zero fallback for unparsable text.
    pub fn quantity(&self) -> i64 {
        parse_leading_integer(self.numbers())
    }
}

impl Serialize for PackingListItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields: Vec<(&str, &str)> = self.fields().collect();
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (name, value) in fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
