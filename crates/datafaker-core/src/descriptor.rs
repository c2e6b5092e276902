use serde::Serialize;

/// A catalog entry identifying one kind of fake data.
///
/// Strings are kept exactly as they appear in the source data, including the
/// mixed-case group tags ("Base" and "base" are different groups).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GeneratorDescriptor {
    /// Display identifier, unique by convention only.
    pub name: &'static str,
    /// Localized free text; empty when no description was provided.
    pub description: &'static str,
    /// Category tag used for grouping, compared case-sensitively.
    pub group: &'static str,
}

impl GeneratorDescriptor {
    pub const fn new(name: &'static str, description: &'static str, group: &'static str) -> Self {
        Self {
            name,
            description,
            group,
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}
