//! Catalog of complex gesture templates.
//!
//! A template is an ordered list of symbol pairs, oldest first, matched
//! against the newest end of the recognition history. The library keeps its
//! templates in priority order: when several templates match the same tick,
//! the one registered first wins.

use crate::{
    constants::NO_GESTURE_NAME,
    sequence::SequenceBuffer,
    symbols::{Symbol, SymbolPair},
    Error, Result,
};
use std::collections::HashSet;
use std::fmt;

/// Gestures reported to the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    SwipeRight,
    SwipeLeft,
    SwipeUp,
    Punch,
    Run,
    PraiseTheSun,
}

impl GestureKind {
    /// All gesture kinds
    pub const ALL: [GestureKind; 6] = [
        GestureKind::SwipeRight,
        GestureKind::SwipeLeft,
        GestureKind::SwipeUp,
        GestureKind::Punch,
        GestureKind::Run,
        GestureKind::PraiseTheSun,
    ];

    /// Name reported to the application
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GestureKind::SwipeRight => "SwipeRight",
            GestureKind::SwipeLeft => "SwipeLeft",
            GestureKind::SwipeUp => "SwipeUp",
            GestureKind::Punch => "Punch",
            GestureKind::Run => "Run",
            GestureKind::PraiseTheSun => "PraiseTheSun",
        }
    }

    /// Name of an optional recognition, `"none"` when nothing was recognized
    #[must_use]
    pub fn name_or_none(recognized: Option<GestureKind>) -> &'static str {
        recognized.map_or(NO_GESTURE_NAME, GestureKind::as_str)
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named sequence of symbol pairs describing one way to perform a gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureTemplate {
    name: String,
    kind: GestureKind,
    pairs: Vec<SymbolPair>,
}

impl GestureTemplate {
    /// Create a template
    ///
    /// # Errors
    ///
    /// Returns an error if `pairs` is empty or contains a pair whose two sides
    /// are both wildcards
    pub fn new(name: impl Into<String>, kind: GestureKind, pairs: Vec<SymbolPair>) -> Result<Self> {
        let name = name.into();
        if pairs.is_empty() {
            return Err(Error::EmptyTemplate(name));
        }
        if let Some(index) = pairs.iter().position(SymbolPair::is_degenerate) {
            return Err(Error::DegenerateTemplate { name, index });
        }
        Ok(Self { name, kind, pairs })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    /// Pairs, oldest first
    #[must_use]
    pub fn pairs(&self) -> &[SymbolPair] {
        &self.pairs
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the newest pairs of `history` complete this template.
    ///
    /// Both sequences are anchored at their newest end and compared pair by
    /// pair going back in time.
    #[must_use]
    pub fn matches_tail(&self, history: &SequenceBuffer) -> bool {
        if history.is_empty() || history.len() < self.size() {
            return false;
        }

        self.pairs
            .iter()
            .rev()
            .enumerate()
            .all(|(offset, expected)| history.nth_from_end(offset).is_some_and(|observed| expected.accepts(observed)))
    }
}

/// Ordered, immutable set of gesture templates
#[derive(Debug, Clone)]
pub struct GestureLibrary {
    templates: Vec<GestureTemplate>,
}

impl GestureLibrary {
    /// Library with the built-in templates
    #[must_use]
    pub fn standard() -> Self {
        use Symbol::{None as NONE, LHDU, LHSP, RHDU, RHSP, RLHB, RLHF, RRHB, RRHF, TLHU, TRHF, TRHL, TRHR, TRHU};

        let p = SymbolPair::new;
        let entries: Vec<(&str, GestureKind, Vec<SymbolPair>)> = vec![
            ("SwipeRight", GestureKind::SwipeRight, vec![p(NONE, RHSP), p(NONE, TRHR), p(NONE, RHSP)]),
            ("SwipeLeft", GestureKind::SwipeLeft, vec![p(NONE, RHSP), p(NONE, TRHL), p(NONE, RHSP)]),
            ("SwipeUp", GestureKind::SwipeUp, vec![p(NONE, RHSP), p(TLHU, TRHU), p(NONE, RHSP)]),
            // Same swipe, anchored on the left hand coming back to rest
            ("SwipeUp2", GestureKind::SwipeUp, vec![p(LHSP, NONE), p(TLHU, TRHU), p(LHSP, NONE)]),
            ("Punch", GestureKind::Punch, vec![p(NONE, TRHF)]),
            (
                "Run",
                GestureKind::Run,
                vec![p(RLHB, RRHF), p(RLHF, RRHB), p(RLHB, RRHF), p(RLHF, RRHB)],
            ),
            ("PraiseTheSun", GestureKind::PraiseTheSun, vec![p(LHDU, RHDU)]),
        ];

        let templates = entries
            .into_iter()
            .map(|(name, kind, pairs)| GestureTemplate { name: name.to_string(), kind, pairs })
            .collect();

        Self { templates }
    }

    /// Library from caller-supplied templates, in priority order
    ///
    /// # Errors
    ///
    /// Returns an error if two templates share a name
    pub fn from_templates(templates: Vec<GestureTemplate>) -> Result<Self> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.name()) {
                return Err(Error::DuplicateTemplateName(template.name().to_string()));
            }
        }
        Ok(Self { templates })
    }

    /// Templates in priority order
    #[must_use]
    pub fn templates(&self) -> &[GestureTemplate] {
        &self.templates
    }

    /// Length of the longest template
    #[must_use]
    pub fn longest_template(&self) -> usize {
        self.templates.iter().map(GestureTemplate::size).max().unwrap_or(0)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GestureTemplate> {
        self.templates.iter().find(|t| t.name() == name)
    }

    /// First template, in priority order, completed by the tail of `history`
    #[must_use]
    pub fn find_match(&self, history: &SequenceBuffer) -> Option<&GestureTemplate> {
        self.templates.iter().find(|template| template.matches_tail(history))
    }
}

impl Default for GestureLibrary {
    fn default() -> Self {
        Self::standard()
    }
}
