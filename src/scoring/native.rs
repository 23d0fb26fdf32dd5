//! Reference table of built-in platform features
//!
//! Skills that re-implement a slash command, CLI subcommand or git workflow
//! the host already ships are flagged by the necessity scorer. The table is
//! built once (built-ins plus any project overrides) and only read afterwards.

use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Built-in categories, in lookup order
const BUILTIN_FEATURES: &[(&str, &[&str])] = &[
    (
        "tui_slash",
        &[
            "/compact", "/connect", "/details", "/editor", "/exit", "/export", "/help", "/init",
            "/models", "/new", "/quit", "/redo", "/resume", "/sessions", "/share", "/summarize",
            "/themes", "/thinking", "/undo", "/unshare",
        ],
    ),
    (
        "cli_commands",
        &[
            "opencode",
            "opencode agent",
            "opencode attach",
            "opencode auth",
            "opencode github",
            "opencode mcp",
            "opencode models",
            "opencode run",
            "opencode serve",
            "opencode session",
            "opencode stats",
            "opencode export",
            "opencode import",
            "opencode web",
            "opencode acp",
            "opencode uninstall",
            "opencode upgrade",
        ],
    ),
    (
        "git_workflows",
        &["commit", "branch", "push", "create-pr", "undo", "redo"],
    ),
];

static BUILTIN: OnceLock<NativeFeatures> = OnceLock::new();

/// One category of native features
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCategory {
    pub name: String,
    pub tokens: Vec<String>,
}

/// How a skill collided with a native feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The skill name is the feature
    Name,
    /// The description mentions the feature as a whole word
    Description,
}

/// A detected native-feature duplication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeMatch {
    pub category: String,
    pub token: String,
    pub kind: MatchKind,
}

impl NativeMatch {
    pub fn message(&self) -> String {
        match self.kind {
            MatchKind::Name => format!(
                "Duplicates native {} command: {}",
                self.category, self.token
            ),
            MatchKind::Description => format!(
                "Likely duplicates native {} command: {}",
                self.category, self.token
            ),
        }
    }
}

/// Immutable lookup table of native features, keyed by category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeFeatures {
    categories: Vec<NativeCategory>,
}

impl NativeFeatures {
    /// The built-in table, shared process-wide
    pub fn builtin() -> &'static NativeFeatures {
        BUILTIN.get_or_init(|| NativeFeatures {
            categories: BUILTIN_FEATURES
                .iter()
                .map(|(name, tokens)| NativeCategory {
                    name: name.to_string(),
                    tokens: tokens.iter().map(|t| t.to_string()).collect(),
                })
                .collect(),
        })
    }

    /// Built-ins extended with extra tokens and minus ignored ones.
    ///
    /// Extra tokens for a known category are appended to it; unknown
    /// categories are appended after the built-ins.
    pub fn with_overrides(extra: &BTreeMap<String, Vec<String>>, ignore: &[String]) -> Self {
        let mut categories = Self::builtin().categories.clone();

        for (category, tokens) in extra {
            match categories.iter_mut().find(|c| &c.name == category) {
                Some(existing) => existing.tokens.extend(tokens.iter().cloned()),
                None => categories.push(NativeCategory {
                    name: category.clone(),
                    tokens: tokens.clone(),
                }),
            }
        }

        if !ignore.is_empty() {
            let ignored: Vec<String> = ignore.iter().map(|t| normalize_token(t)).collect();
            for category in &mut categories {
                category
                    .tokens
                    .retain(|t| !ignored.contains(&normalize_token(t)));
            }
        }

        Self { categories }
    }

    pub fn categories(&self) -> &[NativeCategory] {
        &self.categories
    }

    fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .flat_map(|c| c.tokens.iter().map(move |t| (c.name.as_str(), t.as_str())))
    }

    /// First native feature this skill duplicates, if any.
    ///
    /// Exact name matches are checked across the whole table before any
    /// description match is considered.
    pub fn find_duplication(&self, name: &str, description: Option<&str>) -> Option<NativeMatch> {
        let name = normalize_token(name);
        if let Some((category, token)) = self
            .entries()
            .find(|(_, token)| normalize_token(token) == name)
        {
            return Some(NativeMatch {
                category: category.to_string(),
                token: token.to_string(),
                kind: MatchKind::Name,
            });
        }

        let description = description?.to_lowercase();
        self.entries()
            .find(|(_, token)| contains_whole_word(&description, &normalize_token(token)))
            .map(|(category, token)| NativeMatch {
                category: category.to_string(),
                token: token.to_string(),
                kind: MatchKind::Description,
            })
    }
}

/// Lowercase and drop a leading slash
fn normalize_token(token: &str) -> String {
    token.trim().trim_start_matches('/').to_lowercase()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Whether `needle` occurs in `haystack` with no word character on either side
pub(crate) fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before_ok = haystack[..start].chars().next_back().map_or(true, |c| !is_word_char(c));
        let after_ok = haystack[end..].chars().next().map_or(true, |c| !is_word_char(c));
        before_ok && after_ok
    })
}
