//! Built-in syllabus catalog
//!
//! The season plans ship inside the binary as TOML documents and are parsed
//! once into a read-only lookup table keyed by class level.

use crate::core::models::SyllabusStructure;
use std::error::Error;
use std::fmt;

/// Compiled-in season plans, in the order they are offered to the user
const BUILTIN_SYLLABI: [(&str, &str); 4] = [
    ("9", include_str!("../../assets/syllabus/class_9.toml")),
    ("10", include_str!("../../assets/syllabus/class_10.toml")),
    ("11", include_str!("../../assets/syllabus/class_11.toml")),
    ("12", include_str!("../../assets/syllabus/class_12.toml")),
];

/// Errors raised while building a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A syllabus document is not valid TOML or does not match the schema
    Parse {
        /// Class level the document was registered under
        class_level: String,
        /// Parser message
        message: String,
    },
    /// A document declares a different class level than it was registered under
    ClassMismatch {
        /// Class level the document was registered under
        expected: String,
        /// Class level found inside the document
        found: String,
    },
    /// Two structures claim the same class level
    DuplicateClass(String),
    /// A structure breaks a model invariant (see [`SyllabusStructure::validate`])
    Invalid(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse {
                class_level,
                message,
            } => write!(f, "Failed to parse syllabus for class {class_level}: {message}"),
            Self::ClassMismatch { expected, found } => write!(
                f,
                "Syllabus registered for class {expected} declares class {found}"
            ),
            Self::DuplicateClass(level) => {
                write!(f, "Class {level} appears more than once in the catalog")
            }
            Self::Invalid(message) => write!(f, "Invalid syllabus: {message}"),
        }
    }
}

impl Error for CatalogError {}

/// Read-only lookup table of season plans keyed by class level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllabusCatalog {
    structures: Vec<SyllabusStructure>,
}

impl SyllabusCatalog {
    /// Build the catalog from the compiled-in season plans
    ///
    /// # Errors
    /// Returns an error if any compiled-in document is malformed
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut structures = Vec::with_capacity(BUILTIN_SYLLABI.len());
        for (class_level, document) in BUILTIN_SYLLABI {
            structures.push(Self::parse_document(class_level, document)?);
        }
        Self::from_structures(structures)
    }

    /// Build a catalog from already constructed structures
    ///
    /// # Errors
    /// Returns an error on duplicate class levels or invalid month numbering
    pub fn from_structures(structures: Vec<SyllabusStructure>) -> Result<Self, CatalogError> {
        for (i, structure) in structures.iter().enumerate() {
            structure.validate().map_err(CatalogError::Invalid)?;
            if structures[..i]
                .iter()
                .any(|s| s.class_level == structure.class_level)
            {
                return Err(CatalogError::DuplicateClass(structure.class_level.clone()));
            }
        }
        Ok(Self { structures })
    }

    /// Parse one TOML syllabus document registered under `class_level`
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or declares another class level
    pub fn parse_document(
        class_level: &str,
        document: &str,
    ) -> Result<SyllabusStructure, CatalogError> {
        let structure: SyllabusStructure =
            toml::from_str(document).map_err(|e| CatalogError::Parse {
                class_level: class_level.to_string(),
                message: e.to_string(),
            })?;

        if structure.class_level != class_level {
            return Err(CatalogError::ClassMismatch {
                expected: class_level.to_string(),
                found: structure.class_level,
            });
        }
        Ok(structure)
    }

    /// Look up the season plan for a class level
    #[must_use]
    pub fn get(&self, class_level: &str) -> Option<&SyllabusStructure> {
        let wanted = class_level.trim();
        self.structures.iter().find(|s| s.class_level == wanted)
    }

    /// All known class levels, in catalog order
    #[must_use]
    pub fn class_levels(&self) -> Vec<&str> {
        self.structures
            .iter()
            .map(|s| s.class_level.as_str())
            .collect()
    }

    /// Iterate over all structures in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &SyllabusStructure> {
        self.structures.iter()
    }

    /// Hint naming the valid class levels, e.g. "Select Class 9, 10, 11, or 12"
    #[must_use]
    pub fn selection_hint(&self) -> String {
        let levels = self.class_levels();
        let listed = match levels.as_slice() {
            [] => return "No class levels are available".to_string(),
            [only] => (*only).to_string(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        };
        format!("Select Class {listed}")
    }
}
