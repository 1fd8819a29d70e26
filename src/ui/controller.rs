use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::sync::Arc;

use crate::models::{Language, ProgressStatus, Subject};
use crate::services::{CatalogError, CatalogService, ResolvedSubject};
use crate::state::{StateChange, StateManager};
use crate::ui::cli::Command;

/// Exit code for lookup misses, the CLI's fallback route.
const EXIT_NOT_FOUND: i32 = 1;

/// View layer: renders the catalog decorated with store-derived flags
/// and forwards user interactions to the store.
///
/// Each command runs one read-render or one mutation. Mutations go
/// through [`StateManager`]; the resulting [`StateChange`] events are
/// drained and printed as the user-visible notifications.
pub struct CliController {
    state: Arc<StateManager>,
    catalog: CatalogService,
}

impl CliController {
    pub fn new(state: Arc<StateManager>, catalog: CatalogService) -> Self {
        Self { state, catalog }
    }

    /// Dispatch one command. Returns the process exit code; unknown
    /// class/guide ids render the not-found view and exit non-zero.
    pub fn run(&self, command: &Command) -> Result<i32> {
        let result = match command {
            Command::Classes { search } => {
                self.show_home(search);
                Ok(())
            }
            Command::Class { id, search } => self.show_class(id, search),
            Command::Guide { id } => self.show_guide(id),
            Command::Bookmarks { search } => {
                self.show_bookmarks(search);
                Ok(())
            }
            Command::Recent => {
                self.show_recent();
                Ok(())
            }
            Command::Bookmark { id } => self.bookmark(id, true),
            Command::Unbookmark { id } => self.bookmark(id, false),
            Command::Progress { id, status } => {
                self.set_progress(id, (*status).map(Into::into))
            }
            Command::Lang => {
                self.notify(self.state.toggle_language());
                Ok(())
            }
            Command::Theme => {
                self.notify(self.state.toggle_theme());
                Ok(())
            }
        };

        match result {
            Ok(()) => Ok(0),
            Err(error) => {
                self.show_not_found(&error);
                Ok(EXIT_NOT_FOUND)
            }
        }
    }

    /// Home view: quote, class listing filtered by search, recent ids.
    fn show_home(&self, search: &str) {
        let language = self.language();

        println!(
            "{}",
            language.pick("Guide of Every Class", "প্রতি শ্রেণীর গাইড")
        );

        if let Some(quote) = self.catalog.current_quote() {
            println!();
            println!("  \"{}\"", quote.localized_text(language));
            println!("    — {}", quote.author);
        }

        let classes = self.catalog.filter_classes(search);
        println!();
        if classes.is_empty() {
            println!(
                "{}",
                language.pick(
                    "No classes found matching your search.",
                    "আপনার অনুসন্ধান অনুযায়ী কোন শ্রেণী পাওয়া যায়নি।"
                )
            );
        } else {
            let mut table = new_table();
            table.set_header(vec![
                "ID",
                language.pick("Class", "শ্রেণী"),
                language.pick("Subjects", "বিষয়"),
            ]);
            for class in &classes {
                table.add_row(vec![
                    class.id.clone(),
                    class.localized_name(language).to_string(),
                    class.subjects.len().to_string(),
                ]);
            }
            println!("{table}");
        }

        let recent = self.state.read(|s| s.recently_viewed.clone());
        if !recent.is_empty() {
            println!();
            println!(
                "{}",
                language.pick("Recently viewed:", "সম্প্রতি দেখা হয়েছে:")
            );
            for id in &recent {
                match self.catalog.find_guide(id) {
                    Ok(found) => {
                        println!("  {} ({})", found.subject.localized_name(language), id)
                    }
                    Err(_) => println!("  {id}"),
                }
            }
        }
    }

    /// Class view: subjects grouped into Bangla and English versions.
    fn show_class(&self, id: &str, search: &str) -> Result<(), CatalogError> {
        let language = self.language();
        let class = self.catalog.class_by_id(id)?;

        println!("{}", class.localized_name(language));
        println!();

        let subjects = self.catalog.filter_subjects(class, search);
        if subjects.is_empty() {
            println!(
                "{}",
                language.pick(
                    "No subjects found matching your search.",
                    "আপনার অনুসন্ধান অনুযায়ী কোন বিষয় পাওয়া যায়নি।"
                )
            );
            return Ok(());
        }

        let (bangla, english) = CatalogService::group_by_version(&subjects);

        if !bangla.is_empty() {
            println!("{}", language.pick("Bangla Version", "বাংলা ভার্সন"));
            println!("{}", self.subject_table(&bangla));
        }
        if !english.is_empty() {
            println!("{}", language.pick("English Version", "ইংরেজি ভার্সন"));
            println!("{}", self.subject_table(&english));
        }

        Ok(())
    }

    /// Guide detail. Records the visit in the recently-viewed list.
    fn show_guide(&self, id: &str) -> Result<(), CatalogError> {
        let language = self.language();
        let found = self.catalog.find_guide(id)?;

        self.state.add_to_recently_viewed(id);

        // Breadcrumb: Home / Class / Guide
        println!(
            "{} / {} / {}",
            language.pick("Home", "হোম"),
            found.class.localized_name(language),
            found.subject.localized_name(language)
        );
        println!();
        println!("{}", found.subject.localized_name(language));
        println!(
            "{}",
            match language {
                Language::English => format!(
                    "{} - {} Version",
                    found.class.name, found.subject.version
                ),
                Language::Bengali => format!(
                    "{} - {} ভার্সন",
                    found.class.name_bn, found.subject.version
                ),
            }
        );
        println!();

        let status = self.state.progress_for(id);
        println!(
            "{} {}",
            language.pick("Status:", "স্ট্যাটাস:"),
            status.label(language)
        );
        if self.state.is_bookmarked(id) {
            println!("{}", language.pick("★ Bookmarked", "★ বুকমার্ক করা"));
        }

        println!();
        println!("{}", language.pick("About this Guide", "এই গাইড সম্পর্কে"));
        println!("{}", found.subject.localized_description(language));
        println!();
        println!("{} {}", language.pick("File:", "ফাইল:"), found.subject.file_path);

        Ok(())
    }

    /// Bookmarks view: bookmarked subjects with class context.
    fn show_bookmarks(&self, search: &str) {
        let language = self.language();
        let bookmarks = self.state.read(|s| s.bookmarks.clone());
        let resolved = self.catalog.bookmarked_subjects(&bookmarks, search);

        println!("{}", language.pick("Bookmarks", "বুকমার্ক"));
        println!();

        if resolved.is_empty() {
            println!(
                "{}",
                language.pick("No bookmarks yet.", "এখনও কোন বুকমার্ক নেই।")
            );
            return;
        }

        let mut table = new_table();
        table.set_header(vec![
            "ID",
            language.pick("Subject", "বিষয়"),
            language.pick("Class", "শ্রেণী"),
            language.pick("Version", "ভার্সন"),
            language.pick("Progress", "অগ্রগতি"),
        ]);
        for ResolvedSubject { class, subject } in &resolved {
            table.add_row(vec![
                subject.id.clone(),
                subject.localized_name(language).to_string(),
                class.localized_name(language).to_string(),
                subject.version.clone(),
                self.state.progress_for(&subject.id).label(language).to_string(),
            ]);
        }
        println!("{table}");
    }

    /// Recently-viewed view, most recent first.
    fn show_recent(&self) {
        let language = self.language();
        let recent = self.state.read(|s| s.recently_viewed.clone());

        println!(
            "{}",
            language.pick("Recently viewed", "সম্প্রতি দেখা হয়েছে")
        );
        println!();

        if recent.is_empty() {
            println!(
                "{}",
                language.pick("Nothing viewed yet.", "এখনও কিছু দেখা হয়নি।")
            );
            return;
        }

        for (position, id) in recent.iter().enumerate() {
            match self.catalog.find_guide(id) {
                Ok(found) => println!(
                    "{}. {} ({})",
                    position + 1,
                    found.subject.localized_name(language),
                    id
                ),
                // Stale id: the catalog no longer carries this guide
                Err(_) => println!("{}. {}", position + 1, id),
            }
        }
    }

    fn bookmark(&self, id: &str, add: bool) -> Result<(), CatalogError> {
        // Bookmarks key off the catalog's identifier space
        self.catalog.find_guide(id)?;

        let changes = if add {
            self.state.add_bookmark(id)
        } else {
            self.state.remove_bookmark(id)
        };
        self.notify(changes);
        Ok(())
    }

    fn set_progress(
        &self,
        id: &str,
        status: Option<ProgressStatus>,
    ) -> Result<(), CatalogError> {
        self.catalog.find_guide(id)?;

        // No explicit status cycles to the next one, as a click does
        let status = status.unwrap_or_else(|| self.state.progress_for(id).cycled());
        self.notify(self.state.update_progress(id, status));
        Ok(())
    }

    /// Print the user-visible notification for each change, in the
    /// post-mutation language.
    fn notify(&self, changes: Vec<StateChange>) {
        let language = self.language();
        for change in &changes {
            if let Some(message) = notification(change, language) {
                println!("{message}");
            }
        }
    }

    fn show_not_found(&self, error: &CatalogError) {
        let language = self.language();
        println!(
            "{}",
            language.pick("Oops! Page not found.", "দুঃখিত! পৃষ্ঠা পাওয়া যায়নি।")
        );
        println!("{error}");
    }

    fn language(&self) -> Language {
        self.state.read(|s| s.language)
    }

    fn subject_table(&self, subjects: &[&Subject]) -> Table {
        let language = self.language();
        let mut table = new_table();
        table.set_header(vec![
            "ID",
            language.pick("Subject", "বিষয়"),
            language.pick("Progress", "অগ্রগতি"),
            language.pick("Bookmarked", "বুকমার্ক"),
        ]);
        for subject in subjects {
            table.add_row(vec![
                subject.id.clone(),
                subject.localized_name(language).to_string(),
                self.state.progress_for(&subject.id).label(language).to_string(),
                if self.state.is_bookmarked(&subject.id) {
                    "★".to_string()
                } else {
                    String::new()
                },
            ]);
        }
        table
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// The toast message for a state change, or `None` for silent changes.
///
/// The language-changed message always renders in the *new* language;
/// everything else follows the active language at call time.
fn notification(change: &StateChange, language: Language) -> Option<String> {
    match change {
        StateChange::LanguageChanged { language: new } => Some(
            match new {
                Language::English => "Changed to English",
                Language::Bengali => "বাংলায় পরিবর্তন করা হয়েছে",
            }
            .to_string(),
        ),
        StateChange::ThemeChanged { .. } => {
            Some(language.pick("Theme changed", "থিম পরিবর্তিত").to_string())
        }
        StateChange::BookmarkAdded { .. } => Some(
            language
                .pick("Bookmark added", "বুকমার্ক যোগ করা হয়েছে")
                .to_string(),
        ),
        StateChange::BookmarkRemoved { .. } => Some(
            language
                .pick("Bookmark removed", "বুকমার্ক সরানো হয়েছে")
                .to_string(),
        ),
        StateChange::ProgressChanged { status, .. } => Some(format!(
            "{}{}",
            language.pick("Status updated: ", "স্ট্যাটাস আপডেট: "),
            status.label(language)
        )),
        StateChange::RecentlyViewedChanged { .. } => None,
    }
}
