//! Registry of generator descriptors.
//!
//! The built-in catalog is a static, ordered table. Lookups never normalize
//! case: `find_by_name` resolves to the first exact match in list order, and
//! `list_by_group` filters on exact group equality.

use crate::catalog_gen::DESCRIPTORS;
use crate::descriptor::GeneratorDescriptor;
use crate::error::{Error, Result};

/// Read-only view over an ordered descriptor table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [GeneratorDescriptor],
}

impl Catalog {
    /// Catalog compiled into the crate.
    pub const fn builtin() -> Self {
        Self {
            entries: DESCRIPTORS,
        }
    }

    /// Wrap an arbitrary static table.
    pub const fn from_entries(entries: &'static [GeneratorDescriptor]) -> Self {
        Self { entries }
    }

    pub fn list_all(&self) -> &'static [GeneratorDescriptor] {
        self.entries
    }

    pub fn list_by_group(&self, group: &str) -> Vec<&'static GeneratorDescriptor> {
        self.entries
            .iter()
            .filter(|descriptor| descriptor.group == group)
            .collect()
    }

    /// First descriptor whose name equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Result<&'static GeneratorDescriptor> {
        self.entries
            .iter()
            .find(|descriptor| descriptor.name == name)
            .ok_or_else(|| Error::LookupMiss(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|descriptor| descriptor.name == name)
    }

    /// Distinct group tags in first-seen order.
    pub fn groups(&self) -> Vec<&'static str> {
        let mut groups: Vec<&'static str> = Vec::new();
        for descriptor in self.entries {
            if !groups.contains(&descriptor.group) {
                groups.push(descriptor.group);
            }
        }
        groups
    }

    /// Case-insensitive substring match on names, for selection lists.
    pub fn search(&self, query: &str) -> Vec<&'static GeneratorDescriptor> {
        let needle = query.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|descriptor| {
                needle.is_empty() || descriptor.name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn list_all() -> &'static [GeneratorDescriptor] {
    Catalog::builtin().list_all()
}

pub fn list_by_group(group: &str) -> Vec<&'static GeneratorDescriptor> {
    Catalog::builtin().list_by_group(group)
}

pub fn find_by_name(name: &str) -> Result<&'static GeneratorDescriptor> {
    Catalog::builtin().find_by_name(name)
}
