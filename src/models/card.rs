// src/models/card.rs

//! Card record data structures.
//!
//! Field names match the JSON consumed by the web app (`leader_skill`,
//! `stat_icons`, `max_lv`).

use serde::{Deserialize, Serialize};

/// One scraped card page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardRecord {
    /// Source page URL (identity)
    pub url: String,

    /// Page title, or "Unknown"
    pub name: String,

    /// Artwork per variant
    #[serde(default)]
    pub images: ImageSet,

    /// Regular skill
    #[serde(default)]
    pub skill: SkillEntry,

    /// Leader skill
    #[serde(default)]
    pub leader_skill: SkillEntry,

    /// Stat table values
    #[serde(default)]
    pub stats: StatBlock,

    /// Attribute icons found in the stat table
    #[serde(default)]
    pub stat_icons: StatIcons,
}

impl CardRecord {
    /// Create an empty record for a page.
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            images: ImageSet::default(),
            skill: SkillEntry::default(),
            leader_skill: SkillEntry::default(),
            stats: StatBlock::default(),
            stat_icons: StatIcons::default(),
        }
    }
}

/// Artwork URLs keyed by variant. Missing variants are not serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unidolized: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idolized: Option<String>,

    /// Infobox image, only used when no tab yielded an image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
}

impl ImageSet {
    pub fn is_empty(&self) -> bool {
        self.unidolized.is_none() && self.idolized.is_none() && self.main.is_none()
    }
}

/// A skill or leader skill block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl SkillEntry {
    /// Leader skills are recognised by their description text.
    pub fn is_leader(&self) -> bool {
        self.description
            .as_deref()
            .is_some_and(|d| d.contains("Leader") || d.contains("Activates when"))
    }
}

/// Wild/Pop/Cool values for one (state, level) slot.
///
/// An unpopulated slot serializes as `{}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wild: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pop: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cool: Option<String>,
}

impl StatLine {
    pub fn new(wild: impl Into<String>, pop: impl Into<String>, cool: impl Into<String>) -> Self {
        Self {
            wild: Some(wild.into()),
            pop: Some(pop.into()),
            cool: Some(cool.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.wild.is_none() && self.pop.is_none() && self.cool.is_none()
    }
}

/// Stats for the un-idolized card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnidolizedStats {
    #[serde(default)]
    pub initial: StatLine,

    #[serde(default)]
    pub max_lv: StatLine,
}

/// Stats for the idolized card, including the etoile tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdolizedStats {
    #[serde(default)]
    pub initial: StatLine,

    #[serde(default)]
    pub max_lv: StatLine,

    #[serde(default)]
    pub etoile: StatLine,
}

/// Full stat table of a card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatBlock {
    #[serde(default)]
    pub unidolized: UnidolizedStats,

    #[serde(default)]
    pub idolized: IdolizedStats,
}

/// Idolization state a stat row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Unidolized,
    Idolized,
}

/// Progression label of a stat row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatLabel {
    Initial,
    MaxLevel,
    Etoile,
}

impl StatBlock {
    /// Mutable slot for a (section, label) pair.
    ///
    /// Returns `None` for `(Unidolized, Etoile)`, which has no slot.
    pub fn slot_mut(&mut self, section: Section, label: StatLabel) -> Option<&mut StatLine> {
        match (section, label) {
            (Section::Unidolized, StatLabel::Initial) => Some(&mut self.unidolized.initial),
            (Section::Unidolized, StatLabel::MaxLevel) => Some(&mut self.unidolized.max_lv),
            (Section::Unidolized, StatLabel::Etoile) => None,
            (Section::Idolized, StatLabel::Initial) => Some(&mut self.idolized.initial),
            (Section::Idolized, StatLabel::MaxLevel) => Some(&mut self.idolized.max_lv),
            (Section::Idolized, StatLabel::Etoile) => Some(&mut self.idolized.etoile),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.unidolized.initial.is_empty()
            && self.unidolized.max_lv.is_empty()
            && self.idolized.initial.is_empty()
            && self.idolized.max_lv.is_empty()
            && self.idolized.etoile.is_empty()
    }
}

/// Attribute icon URLs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatIcons {
    pub wild: Option<String>,
    pub pop: Option<String>,
    pub cool: Option<String>,
}
