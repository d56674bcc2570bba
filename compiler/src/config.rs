//! Configuration for C++ emission.

/// How fields of equal size are ordered when a table asks for size-sorted
/// construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeTieBreak {
    /// Equal-sized fields keep their declaration order.
    #[default]
    DeclarationOrder,
    /// Equal-sized fields are visited last-declared first.
    ReverseDeclarationOrder,
}

/// Configuration for C++ emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Enums at or above this sparseness get no name table
    pub(crate) max_sparseness: i128,
    /// Ordering of equal-sized fields in size-sorted constructors
    pub(crate) size_tie_break: SizeTieBreak,
    /// Header providing the runtime API
    pub(crate) runtime_include: String,
    /// C++ namespace of the runtime API, aliased as `fb`
    pub(crate) runtime_namespace: String,
    /// Appended to the output name to form the header file name
    pub(crate) file_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_sparseness: 5,
            size_tie_break: SizeTieBreak::default(),
            runtime_include: "flatbuffers/flatbuffers.h".to_string(),
            runtime_namespace: "flatbuffers".to_string(),
            file_suffix: ".fb.h".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sparseness at which enum name tables are dropped.
    pub fn max_sparseness(mut self, value: i128) -> Self {
        self.max_sparseness = value;
        self
    }

    /// Set the ordering of equal-sized fields in size-sorted constructors.
    pub fn size_tie_break(mut self, value: SizeTieBreak) -> Self {
        self.size_tie_break = value;
        self
    }

    /// Set the header included for the runtime API.
    pub fn runtime_include(mut self, value: impl Into<String>) -> Self {
        self.runtime_include = value.into();
        self
    }

    /// Set the C++ namespace of the runtime API.
    pub fn runtime_namespace(mut self, value: impl Into<String>) -> Self {
        self.runtime_namespace = value.into();
        self
    }

    /// Set the suffix appended to generated header names.
    pub fn file_suffix(mut self, value: impl Into<String>) -> Self {
        self.file_suffix = value.into();
        self
    }

    /// Header file name for `name`, with the configured suffix.
    pub fn file_name(&self, name: &str) -> String {
        format!("{}{}", name, self.file_suffix)
    }
}
