//! Replacement table: an ordered mapping from UI string literals to
//! localization keys.
//!
//! Rules are applied in table order. A table built from pairs follows map
//! semantics: a repeated source keeps its first position and takes the last
//! target.

use std::{fmt, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default rules: action labels, titles, help text, placeholders and statuses.
///
/// `"Delete"` appears twice; the help-text entry wins.
const BUILTIN_RULES: &[(&str, &str)] = &[
    // Dialog actions
    ("OK", "actions.ok"),
    ("Cancel", "actions.cancel"),
    ("Stop", "actions.stop"),
    ("Delete", "actions.delete"),
    ("Move to Trash", "actions.moveToTrash"),
    ("Save", "actions.save"),
    ("Edit", "actions.edit"),
    ("Refresh", "actions.refresh"),
    ("New", "actions.new"),
    ("Resume", "actions.resume"),
    ("Open in Terminal", "actions.openInTerminal"),
    ("Open in iTerm2", "actions.openInIterm2"),
    ("Open in Warp", "actions.openInWarp"),
    ("Open Embedded Terminal", "actions.openEmbeddedTerminal"),
    ("Use Preferred Launch", "actions.usePreferredLaunch"),
    ("Change…", "actions.change"),
    ("Restore Defaults", "actions.restoreDefaults"),
    ("View…", "actions.view"),
    ("Select", "actions.select"),
    ("Add", "actions.add"),
    ("Remove", "actions.remove"),
    ("Test", "actions.test"),
    ("Close", "actions.close"),
    // Titles
    ("Settings", "title.settings"),
    ("General Settings", "settings.general.title"),
    ("Terminal Settings", "settings.terminal.title"),
    ("Command Settings", "settings.command.title"),
    ("About CodMate", "about.title"),
    // Help text
    ("Refresh session index", "help.refreshSessionIndex"),
    ("Reveal in Finder", "help.revealInFinder"),
    ("Delete", "help.delete"),
    // Placeholders and statuses
    ("Select a session", "placeholder.selectSession"),
    ("Search", "placeholder.search"),
    ("Loading...", "status.loading"),
    ("No sessions", "status.noSessions"),
];

/// A single quoted-literal substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    /// Exact UI text expected between double quotes.
    pub source: String,
    /// Localization key written back between double quotes.
    pub target: String,
}

impl ReplacementRule {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// The source literal as it appears in a file, quotes included.
    pub fn quoted_source(&self) -> String {
        format!("\"{}\"", self.source)
    }

    /// The target literal as it is written back, quotes included.
    pub fn quoted_target(&self) -> String {
        format!("\"{}\"", self.target)
    }
}

/// A pair of rules whose combined result depends on application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleConflict {
    /// The quoted `inner` source occurs inside the quoted `outer` source.
    Contains { outer: String, inner: String },
    /// `first` writes a target that `second`, applied later, rewrites again.
    Chained { first: String, second: String },
}

impl fmt::Display for RuleConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleConflict::Contains { outer, inner } => write!(
                f,
                "\"{}\" contains the quoted literal of \"{}\"; result depends on rule order",
                outer, inner
            ),
            RuleConflict::Chained { first, second } => write!(
                f,
                "target of \"{}\" is rewritten again by rule \"{}\"",
                first, second
            ),
        }
    }
}

/// Ordered, immutable set of replacement rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ReplacementTable {
    rules: Vec<ReplacementRule>,
}

impl ReplacementTable {
    /// The built-in table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_RULES.iter().copied())
    }

    /// Build a table from `(source, target)` pairs.
    ///
    /// A source seen twice keeps its first position; the later target wins.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut rules: Vec<ReplacementRule> = Vec::new();
        for (source, target) in pairs {
            let source = source.into();
            let target = target.into();
            match rules.iter_mut().find(|rule| rule.source == source) {
                Some(existing) => existing.target = target,
                None => rules.push(ReplacementRule { source, target }),
            }
        }
        Self { rules }
    }

    /// Parse a JSON object of `"source": "target"` entries, keeping key order.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Failed to parse rules JSON")?;
        match value {
            Value::Object(map) => Self::try_from(map),
            _ => bail!("Root of rules JSON must be an object"),
        }
    }

    /// Load a rules file written as a JSON object.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid rules file: {}", path.display()))
    }

    /// A copy ordered by descending source length (in chars).
    ///
    /// The sort is stable, so equal lengths keep table order.
    pub fn sorted_by_length(&self) -> Self {
        let mut rules = self.rules.clone();
        rules.sort_by(|a, b| b.source.chars().count().cmp(&a.source.chars().count()));
        Self { rules }
    }

    /// Reject rules that cannot be applied meaningfully.
    pub fn validate(&self) -> Result<()> {
        for rule in &self.rules {
            if rule.source.is_empty() {
                bail!(
                    "Replacement rule with target \"{}\" has an empty source literal",
                    rule.target
                );
            }
        }
        Ok(())
    }

    /// Rule pairs whose output depends on the order they are applied in.
    pub fn conflicts(&self) -> Vec<RuleConflict> {
        let mut conflicts = Vec::new();

        for (i, outer) in self.rules.iter().enumerate() {
            let outer_quoted = outer.quoted_source();
            for (j, inner) in self.rules.iter().enumerate() {
                if i == j {
                    continue;
                }
                if outer_quoted.contains(&inner.quoted_source()) {
                    conflicts.push(RuleConflict::Contains {
                        outer: outer.source.clone(),
                        inner: inner.source.clone(),
                    });
                }
            }
        }

        for (i, first) in self.rules.iter().enumerate() {
            if first.source == first.target {
                continue;
            }
            let produced = first.quoted_target();
            for second in &self.rules[i + 1..] {
                if literals_overlap(&produced, &second.quoted_source()) {
                    conflicts.push(RuleConflict::Chained {
                        first: first.source.clone(),
                        second: second.source.clone(),
                    });
                }
            }
        }

        conflicts
    }

    /// Exact-match lookup of a source literal.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.source == source)
            .map(|rule| rule.target.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReplacementRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// True if a match of `pattern` can include some of `produced`.
///
/// Both are quoted literals, so a shared `"` alone is not enough: one must
/// contain the other, or they must share at least two chars at the seam.
fn literals_overlap(produced: &str, pattern: &str) -> bool {
    produced.contains(pattern)
        || pattern.contains(produced)
        || suffix_is_prefix(produced, pattern)
        || suffix_is_prefix(pattern, produced)
}

fn suffix_is_prefix(left: &str, right: &str) -> bool {
    left.char_indices()
        .skip(1)
        .map(|(i, _)| &left[i..])
        .any(|suffix| suffix.chars().count() >= 2 && right.starts_with(suffix))
}

impl TryFrom<Map<String, Value>> for ReplacementTable {
    type Error = anyhow::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self> {
        let mut pairs = Vec::with_capacity(map.len());
        for (source, value) in map {
            match value {
                Value::String(target) => pairs.push((source, target)),
                other => bail!(
                    "Replacement target for \"{}\" must be a string, got: {}",
                    source,
                    other
                ),
            }
        }
        Ok(Self::from_pairs(pairs))
    }
}

impl From<ReplacementTable> for Map<String, Value> {
    fn from(table: ReplacementTable) -> Self {
        table
            .rules
            .into_iter()
            .map(|rule| (rule.source, Value::String(rule.target)))
            .collect()
    }
}
