//! The content catalog: every record the UI can show.
//!
//! The catalog is a TOML document parsed once at startup and read-only
//! afterwards. A copy ships inside the binary; an external document can be
//! supplied for previewing edits. Loading validates the two invariants the
//! rest of the code relies on: project ids are unique and learning
//! progress values stay within 0..=100.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Certificate, ContactLink, LearningTopic, Profile, Project, ProjectId, StudySample,
};
use crate::error::{Error, Result};

/// TOML document embedded at build time
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Immutable content catalog, owned by the application and handed down to
/// views by shared reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    #[serde(default)]
    pub contacts: Vec<ContactLink>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub learning: Vec<LearningTopic>,
    #[serde(default)]
    pub study_hours: Vec<StudySample>,
    /// Closing blurb on the contact view
    #[serde(default)]
    pub outro: String,
}

impl Catalog {
    /// Parse the catalog embedded in the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse a catalog from a TOML string
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(document)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and parse a catalog document from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let document = std::fs::read_to_string(path)?;
        Self::from_toml_str(&document)
    }

    /// Look up a project by id
    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(Error::DuplicateProjectId(project.id.to_string()));
            }
        }

        for topic in &self.learning {
            if topic.progress > 100 {
                return Err(Error::ProgressOutOfRange {
                    topic: topic.topic.clone(),
                    progress: topic.progress,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().expect("builtin catalog is valid");
        assert_eq!(catalog.projects.len(), 5);
        assert_eq!(catalog.learning.len(), 5);
        assert!(!catalog.certificates.is_empty());
        assert!(!catalog.contacts.is_empty());
        assert!(!catalog.study_hours.is_empty());
    }

    #[test]
    fn builtin_project_ids_are_unique_and_known() {
        let catalog = Catalog::builtin().unwrap();
        let ids: HashSet<&str> = catalog.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.projects.len());
        assert!(ids.contains("world-layoffs"));
    }

    #[test]
    fn builtin_progress_values_stay_in_range() {
        let catalog = Catalog::builtin().unwrap();
        for topic in &catalog.learning {
            assert!(
                topic.progress <= 100,
                "topic {} out of range",
                topic.topic
            );
        }
    }

    #[test]
    fn builtin_study_series_is_chronological_weeks() {
        let catalog = Catalog::builtin().unwrap();
        let labels: Vec<&str> = catalog
            .study_hours
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels.first(), Some(&"Week 1"));
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn project_lookup_by_id() {
        let catalog = Catalog::builtin().unwrap();
        let project = catalog.project(&ProjectId::from("bike-sales")).unwrap();
        assert_eq!(project.title, "Bike Sales Analysis");
        assert!(!project.preview_images.is_empty());

        assert!(catalog.project(&ProjectId::from("no-such-project")).is_none());
    }

    #[test]
    fn duplicate_project_ids_are_rejected() {
        let document = r#"
            [profile]
            name = "Test"
            about = "About"
            avatar = "/images/a.jpg"

            [[projects]]
            id = "dup"
            title = "One"
            description = "d"
            repo_url = "r"
            live_url = "l"

            [[projects]]
            id = "dup"
            title = "Two"
            description = "d"
            repo_url = "r"
            live_url = "l"
        "#;
        let err = Catalog::from_toml_str(document).unwrap_err();
        assert!(matches!(err, Error::DuplicateProjectId(id) if id == "dup"));
    }

    #[test]
    fn out_of_range_progress_is_rejected() {
        let document = r#"
            [profile]
            name = "Test"
            about = "About"
            avatar = "/images/a.jpg"

            [[learning]]
            topic = "SQL"
            progress = 101
        "#;
        let err = Catalog::from_toml_str(document).unwrap_err();
        assert!(matches!(
            err,
            Error::ProgressOutOfRange { progress: 101, .. }
        ));
    }

    #[test]
    fn project_without_previews_is_tolerated() {
        let document = r#"
            [profile]
            name = "Test"
            about = "About"
            avatar = "/images/a.jpg"

            [[projects]]
            id = "bare"
            title = "Bare"
            description = "No previews yet"
            repo_url = "r"
            live_url = "l"
        "#;
        let catalog = Catalog::from_toml_str(document).unwrap();
        let project = catalog.project(&ProjectId::from("bare")).unwrap();
        assert!(project.preview_images.is_empty());
        assert!(project.tags.is_empty());
    }

    #[test]
    fn progress_boundaries_are_accepted() {
        let document = r#"
            [profile]
            name = "Test"
            about = "About"
            avatar = "/images/a.jpg"

            [[learning]]
            topic = "Zero"
            progress = 0

            [[learning]]
            topic = "Full"
            progress = 100
        "#;
        let catalog = Catalog::from_toml_str(document).unwrap();
        assert_eq!(catalog.learning[0].progress, 0);
        assert_eq!(catalog.learning[1].progress, 100);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_CATALOG.as_bytes()).unwrap();
        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.profile.name, "Irsyad Faruq Ardiansyah");
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = Catalog::from_path(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
