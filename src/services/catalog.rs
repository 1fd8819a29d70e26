use anyhow::{Context, Result};
use camino::Utf8Path;
use indexmap::IndexSet;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

use crate::models::{Catalog, ClassEntry, Quote, Subject};

/// Seconds each quote stays on the home view before rotating.
const QUOTE_ROTATION_SECS: u64 = 10;

/// Errors for catalog lookups.
///
/// A lookup miss is the only failure the catalog can produce after
/// loading; the view layer renders it as the not-found page.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Class {0} not found")]
    UnknownClass(String),

    #[error("Guide {0} not found")]
    UnknownGuide(String),
}

/// A bookmarked subject resolved against the catalog, carrying its
/// enclosing class for display.
#[derive(Debug, Clone)]
pub struct ResolvedSubject<'a> {
    pub class: &'a ClassEntry,
    pub subject: &'a Subject,
}

/// Read-only access to the static catalog document.
///
/// Loaded once at startup and never mutated. Lookups are linear scans;
/// the catalog holds tens of entries, so no index is kept.
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: Catalog,
}

impl CatalogService {
    /// Load the catalog from a JSON file.
    pub fn load<P: AsRef<Utf8Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog: {}", path))?;

        let catalog: Catalog = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog: {}", path))?;

        tracing::info!(
            "Loaded catalog from {}: {} classes, {} quotes",
            path,
            catalog.classes.len(),
            catalog.quotes.len()
        );

        Ok(Self { catalog })
    }

    /// Build a service around an already-parsed catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Direct class lookup by id.
    pub fn class_by_id(&self, id: &str) -> Result<&ClassEntry, CatalogError> {
        self.catalog
            .classes
            .iter()
            .find(|class| class.id == id)
            .ok_or_else(|| CatalogError::UnknownClass(id.to_string()))
    }

    /// Find a guide by id, scanning every class's subject list. Returns
    /// the enclosing class alongside the subject.
    pub fn find_guide(&self, id: &str) -> Result<ResolvedSubject<'_>, CatalogError> {
        for class in &self.catalog.classes {
            if let Some(subject) = class.subjects.iter().find(|subject| subject.id == id) {
                return Ok(ResolvedSubject { class, subject });
            }
        }

        Err(CatalogError::UnknownGuide(id.to_string()))
    }

    /// Classes matching a search term; an empty term matches everything.
    pub fn filter_classes(&self, term: &str) -> Vec<&ClassEntry> {
        self.catalog
            .classes
            .iter()
            .filter(|class| term.is_empty() || class.matches_search(term))
            .collect()
    }

    /// Subjects of one class matching a search term.
    pub fn filter_subjects<'a>(&self, class: &'a ClassEntry, term: &str) -> Vec<&'a Subject> {
        class
            .subjects
            .iter()
            .filter(|subject| term.is_empty() || subject.matches_search(term))
            .collect()
    }

    /// Split subjects into (Bangla, English) version groups, preserving
    /// catalog order. Class pages render the two groups as sections.
    pub fn group_by_version<'a>(subjects: &[&'a Subject]) -> (Vec<&'a Subject>, Vec<&'a Subject>) {
        let bangla = subjects
            .iter()
            .copied()
            .filter(|subject| subject.version == "Bangla")
            .collect();
        let english = subjects
            .iter()
            .copied()
            .filter(|subject| subject.version == "English")
            .collect();
        (bangla, english)
    }

    /// Resolve a bookmark id set against the catalog, in catalog order.
    /// Ids that no longer resolve are skipped. A search term additionally
    /// matches the enclosing class names, as on the bookmarks page.
    pub fn bookmarked_subjects(
        &self,
        bookmarks: &IndexSet<String>,
        term: &str,
    ) -> Vec<ResolvedSubject<'_>> {
        let mut resolved = Vec::new();

        for class in &self.catalog.classes {
            for subject in &class.subjects {
                if !bookmarks.contains(&subject.id) {
                    continue;
                }
                if !term.is_empty()
                    && !subject.matches_search(term)
                    && !class.matches_search(term)
                {
                    continue;
                }
                resolved.push(ResolvedSubject { class, subject });
            }
        }

        resolved
    }

    /// The quote currently on rotation, advancing every ten seconds of
    /// wall-clock time. `None` when the catalog carries no quotes.
    pub fn current_quote(&self) -> Option<&Quote> {
        if self.catalog.quotes.is_empty() {
            return None;
        }

        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let index = (elapsed / QUOTE_ROTATION_SECS) as usize % self.catalog.quotes.len();

        self.catalog.quotes.get(index)
    }
}
