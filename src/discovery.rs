//! Skill discovery
//!
//! Skills live one directory deep under a collection root:
//!
//! ```text
//! ~/.config/opencode/skill/<name>/SKILL.md   (global)
//! <project>/.opencode/skill/<name>/SKILL.md  (project)
//! ```

use crate::models::{Location, SkillKey};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of a skill document inside its directory
pub const SKILL_FILE: &str = "SKILL.md";

/// Project collection, relative to the audit root
pub const PROJECT_SKILLS_DIR: &str = ".opencode/skill";

/// One discovered skill document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDocument {
    pub key: SkillKey,
    pub path: PathBuf,
}

/// Where to look, and which collections to include
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    pub global_dir: Option<PathBuf>,
    pub project_dir: PathBuf,
    pub include_global: bool,
    pub include_project: bool,
}

impl DiscoveryOptions {
    /// Default locations for an audit rooted at `root`
    pub fn for_root(root: &Path) -> Self {
        Self {
            global_dir: default_global_dir(),
            project_dir: root.join(PROJECT_SKILLS_DIR),
            include_global: true,
            include_project: true,
        }
    }
}

/// `$HOME/.config/opencode/skill`
pub fn default_global_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("opencode").join("skill"))
}

/// Discover skills: global first, then project, each sorted by name
pub fn discover_skills(options: &DiscoveryOptions) -> Vec<SkillDocument> {
    let mut skills = Vec::new();

    if options.include_global {
        match &options.global_dir {
            Some(dir) => skills.extend(scan_collection(dir, Location::Global)),
            None => debug!("No home directory; skipping global skills"),
        }
    }
    if options.include_project {
        skills.extend(scan_collection(&options.project_dir, Location::Project));
    }

    skills
}

/// Every `<dir>/<name>/SKILL.md` directly under `root`
fn scan_collection(root: &Path, location: Location) -> Vec<SkillDocument> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Skipping {} skills at {}: {}", location, root.display(), e);
            return Vec::new();
        }
    };

    let mut skills: Vec<SkillDocument> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("Failed to read entry in {}: {}", root.display(), e);
                None
            }
        })
        .filter(|dir| dir.is_dir())
        .filter_map(|dir| {
            let skill_file = dir.join(SKILL_FILE);
            if !skill_file.is_file() {
                return None;
            }
            let name = dir.file_name()?.to_string_lossy().into_owned();
            debug!("Found {} skill: {}", location, name);
            Some(SkillDocument {
                key: SkillKey::new(location, name),
                path: skill_file,
            })
        })
        .collect();

    skills.sort_by(|a, b| a.key.name.cmp(&b.key.name));
    skills
}

/// Read a skill document, degrading to empty text when unreadable
pub fn read_skill_text(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}
