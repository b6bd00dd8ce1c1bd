//! INFO field schema
//!
//! VCF headers declare the shape of each INFO key (`##INFO=<ID=...,
//! Number=...>`). Instead of threading a schema-aware parser's global state
//! around, the header block is distilled once per file into an explicit
//! [`InfoSchema`] that the line parser takes as an argument: a mapping from
//! INFO key to whether its value is a scalar or a comma-separated list.

use std::collections::HashMap;

/// How values of an INFO key are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    /// A single value (or a flag with no value at all)
    #[default]
    Scalar,
    /// A comma-separated list of values
    List,
}

/// Per-file schema for INFO keys, built from the `##INFO` header lines.
///
/// Keys not declared in the header default to [`ValueKind::Scalar`].
#[derive(Debug, Clone, Default)]
pub struct InfoSchema {
    kinds: HashMap<String, ValueKind>,
}

impl InfoSchema {
    /// Build a schema from the concatenated `#`-prefixed header lines of a
    /// VCF file.
    ///
    /// Only `##INFO=<...>` lines contribute. `Number=0` (flags) and
    /// `Number=1` declare scalars; every other declared arity (`2`, `A`,
    /// `R`, `G`, `.`) declares a list.
    pub fn from_header(header: &str) -> Self {
        let mut kinds = HashMap::new();
        for line in header.lines() {
            let Some(body) = line
                .strip_prefix("##INFO=<")
                .and_then(|rest| rest.strip_suffix('>'))
            else {
                continue;
            };

            let mut id = None;
            let mut number = None;
            // Quoted Description values may contain commas; fields before it
            // (ID, Number, Type) never do, so a plain comma split is enough
            // to reach them.
            for part in body.split(',') {
                if let Some(value) = part.strip_prefix("ID=") {
                    id = Some(value.to_string());
                } else if let Some(value) = part.strip_prefix("Number=") {
                    number = Some(value.to_string());
                }
            }

            if let Some(id) = id {
                let kind = match number.as_deref() {
                    Some("0") | Some("1") | None => ValueKind::Scalar,
                    Some(_) => ValueKind::List,
                };
                kinds.insert(id, kind);
            }
        }
        Self { kinds }
    }

    /// Look up the declared kind of a key, defaulting to scalar.
    pub fn kind(&self, key: &str) -> ValueKind {
        self.kinds.get(key).copied().unwrap_or_default()
    }

    /// Number of declared INFO keys.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the header declared any INFO keys at all.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
