use serde::{Deserialize, Serialize};

use crate::models::Language;

/// The static catalog document loaded from `guides.json`.
///
/// Read-only for the whole session: nothing in the application mutates
/// the catalog, and guide ids are assumed globally unique across classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub classes: Vec<ClassEntry>,

    #[serde(default)]
    pub quotes: Vec<Quote>,
}

/// One class (grade) with its subject guides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassEntry {
    pub id: String,
    pub name: String,
    pub name_bn: String,
    pub subjects: Vec<Subject>,
}

/// One subject guide inside a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub name_bn: String,

    /// Edition of the guide, `Bangla` or `English`. Class pages group
    /// their subject listings by this field.
    pub version: String,

    pub file_path: String,
    pub description: String,
    pub description_bn: String,
}

/// A rotating motivational quote shown on the home view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub text_bn: String,
    pub author: String,
}

impl ClassEntry {
    pub fn localized_name(&self, language: Language) -> &str {
        language.pick(&self.name, &self.name_bn)
    }

    /// Search filter used on class pages: lowercased substring match on
    /// the English name, raw substring match on the Bengali name.
    pub fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase()) || self.name_bn.contains(term)
    }
}

impl Subject {
    pub fn localized_name(&self, language: Language) -> &str {
        language.pick(&self.name, &self.name_bn)
    }

    pub fn localized_description(&self, language: Language) -> &str {
        language.pick(&self.description, &self.description_bn)
    }

    pub fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase()) || self.name_bn.contains(term)
    }
}

impl Quote {
    pub fn localized_text(&self, language: Language) -> &str {
        language.pick(&self.text, &self.text_bn)
    }
}
