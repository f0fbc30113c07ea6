//! Deduplicating string pool backing the generated byte-array literals.

use std::collections::HashMap;

use crate::error::Error;

/// Append-only pool of null-terminated strings, stored as 16-bit units.
///
/// Strings referenced from several tables share one pool entry; the tables
/// store a `u16` start index into the pool, which caps the pool size at
/// 65535 units.
#[derive(Debug, Default)]
pub struct StringPool {
    data: Vec<u16>,
    index: HashMap<String, u16>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` plus a null terminator and returns its start index.
    ///
    /// A value already present in the pool is not stored again; the index of
    /// its first occurrence is returned instead. Each Unicode scalar value
    /// takes one 16-bit unit.
    pub fn append(&mut self, value: &str) -> Result<u16, Error> {
        if let Some(&start) = self.index.get(value) {
            return Ok(start);
        }

        let start = self.data.len();
        if start > usize::from(u16::MAX) {
            return Err(Error::Range(format!("index ({}) outside the uint16 range", start)));
        }
        if let Some(c) = value.chars().find(|&c| u32::from(c) > u32::from(u16::MAX)) {
            return Err(Error::Range(format!(
                "'{}' (U+{:04X}) does not fit in one 16-bit unit",
                c,
                u32::from(c)
            )));
        }

        self.data.extend(value.chars().map(|c| c as u16));
        self.data.push(0);
        let start = start as u16;
        self.index.insert(value.to_owned(), start);
        Ok(start)
    }

    /// Emits the pool as a wrapped C array literal named `name`.
    pub fn serialize(&self, out: &mut String, name: &str) {
        out.push_str(&format!("\nstatic const char {}[] = {{\n", name));
        let lines: Vec<String> = self
            .data
            .chunks(16)
            .map(|chunk| {
                chunk.iter().map(|v| format!("{:#x}", v)).collect::<Vec<_>>().join(", ")
            })
            .collect();
        out.push_str(&lines.join(",\n"));
        out.push_str("\n};\n");
    }
}
