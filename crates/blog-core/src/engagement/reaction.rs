//! Reaction toggle decision

use crate::entities::{Reaction, ReactionKind};

/// What a toggle request does to the stored (post, author) reaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionChange {
    /// No reaction existed; one is created
    Create(ReactionKind),
    /// A reaction of another kind existed; it is overwritten
    Replace(ReactionKind),
    /// The same kind was requested again; the reaction is deleted
    Remove,
}

impl ReactionChange {
    pub fn decide(existing: Option<&ReactionKind>, requested: &ReactionKind) -> Self {
        match existing {
            None => Self::Create(requested.clone()),
            Some(current) if current == requested => Self::Remove,
            Some(_) => Self::Replace(requested.clone()),
        }
    }

    /// Kind stored after the change is applied
    pub fn current_kind(&self) -> Option<&ReactionKind> {
        match self {
            Self::Create(kind) | Self::Replace(kind) => Some(kind),
            Self::Remove => None,
        }
    }

    pub fn liked(&self) -> bool {
        self.current_kind().is_some_and(ReactionKind::counts_as_like)
    }
}

/// Reaction state of one author on one post
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReactionState {
    pub liked: bool,
    pub current_kind: Option<ReactionKind>,
}

impl ReactionState {
    pub fn from_existing(reaction: Option<&Reaction>) -> Self {
        let current_kind = reaction.map(|r| r.kind.clone());
        Self {
            liked: current_kind.as_ref().is_some_and(ReactionKind::counts_as_like),
            current_kind,
        }
    }
}

impl From<&ReactionChange> for ReactionState {
    fn from(change: &ReactionChange) -> Self {
        Self {
            liked: change.liked(),
            current_kind: change.current_kind().cloned(),
        }
    }
}
