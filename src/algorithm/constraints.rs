//! Adjacency and separation constraints with partial and full validation
//!
//! Two checks run at different points of the search. The partial check runs
//! right after a tentative placement and only looks at separation constraints
//! touching the entity just seated: a separation violation is final as soon as
//! both cells are known, whereas "not adjacent yet" says nothing while one
//! party is still unseated. The full check runs once every entity is seated
//! and is the authoritative test for a candidate arrangement.

use std::fmt;

use crate::algorithm::roster::{EntityId, Roster};
use crate::io::error::{Result, SeatError};
use crate::spatial::{Cell, SeatGrid};

/// Which relation a constraint requires between its two parties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Parties must share an edge (Manhattan distance exactly 1)
    SitWith,
    /// Parties must not share a cell or an edge (Manhattan distance at least 2)
    Separate,
}

impl ConstraintKind {
    /// Check whether two seated cells satisfy this relation
    pub const fn is_satisfied_by(self, a: Cell, b: Cell) -> bool {
        let distance = a.manhattan_distance(b);
        match self {
            Self::SitWith => distance == 1,
            Self::Separate => distance > 1,
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SitWith => write!(f, "sit-with"),
            Self::Separate => write!(f, "separate"),
        }
    }
}

/// Unordered pair of entities bound by a relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    /// Relation the pair must satisfy
    pub kind: ConstraintKind,
    /// First party
    pub a: EntityId,
    /// Second party
    pub b: EntityId,
}

impl Constraint {
    /// Check whether an entity is one of the two parties
    pub fn involves(&self, entity: EntityId) -> bool {
        self.a == entity || self.b == entity
    }

    /// The party that is not `entity`, if `entity` is a party at all
    pub fn other(&self, entity: EntityId) -> Option<EntityId> {
        if self.a == entity {
            Some(self.b)
        } else if self.b == entity {
            Some(self.a)
        } else {
            None
        }
    }

    /// Evaluate against a grid; unseated parties count as unsatisfied
    pub fn is_satisfied(&self, grid: &SeatGrid) -> bool {
        match (grid.locate(self.a), grid.locate(self.b)) {
            (Some(a), Some(b)) => self.kind.is_satisfied_by(a, b),
            _ => false,
        }
    }
}

/// Static constraint lists fixed for the lifetime of a plan
#[derive(Debug, Clone, Default)]
pub struct ConstraintSet {
    sit_with: Vec<Constraint>,
    separate: Vec<Constraint>,
}

impl ConstraintSet {
    /// Resolve named pairs against a roster
    ///
    /// # Errors
    ///
    /// Returns an error if a pair names an entity outside the roster or pairs
    /// an entity with itself
    pub fn from_names<S: AsRef<str>>(
        roster: &Roster,
        must_sit_with: &[(S, S)],
        must_separate: &[(S, S)],
    ) -> Result<Self> {
        let sit_with = Self::resolve_all(roster, ConstraintKind::SitWith, must_sit_with)?;
        let separate = Self::resolve_all(roster, ConstraintKind::Separate, must_separate)?;

        Ok(Self { sit_with, separate })
    }

    fn resolve_all<S: AsRef<str>>(
        roster: &Roster,
        kind: ConstraintKind,
        pairs: &[(S, S)],
    ) -> Result<Vec<Constraint>> {
        pairs
            .iter()
            .map(|(a, b)| Self::resolve(roster, kind, a.as_ref(), b.as_ref()))
            .collect()
    }

    fn resolve(roster: &Roster, kind: ConstraintKind, a: &str, b: &str) -> Result<Constraint> {
        let first = roster.require(a)?;
        let second = roster.require(b)?;
        if first == second {
            return Err(SeatError::SelfConstraint {
                kind,
                name: a.to_string(),
            });
        }
        Ok(Constraint {
            kind,
            a: first,
            b: second,
        })
    }

    /// Adjacency constraints in input order
    pub fn sit_with(&self) -> &[Constraint] {
        &self.sit_with
    }

    /// Separation constraints in input order
    pub fn separate(&self) -> &[Constraint] {
        &self.separate
    }

    /// Total number of constraints
    pub const fn len(&self) -> usize {
        self.sit_with.len() + self.separate.len()
    }

    /// Check whether there are no constraints
    pub const fn is_empty(&self) -> bool {
        self.sit_with.is_empty() && self.separate.is_empty()
    }

    /// Pruning test for an entity just placed at `cell`
    ///
    /// Only separation constraints involving `entity` are consulted. A partner
    /// that is not seated yet cannot violate anything and is skipped.
    pub fn partial_check(&self, grid: &SeatGrid, entity: EntityId, cell: Cell) -> bool {
        self.separate
            .iter()
            .filter_map(|constraint| constraint.other(entity))
            .filter_map(|other| grid.locate(other))
            .all(|other_cell| ConstraintKind::Separate.is_satisfied_by(cell, other_cell))
    }

    /// Validate every constraint on a complete arrangement
    pub fn full_check(&self, grid: &SeatGrid) -> bool {
        self.sit_with
            .iter()
            .chain(&self.separate)
            .all(|constraint| constraint.is_satisfied(grid))
    }

    /// Constraints the grid does not satisfy, adjacency first
    pub fn violations(&self, grid: &SeatGrid) -> Vec<Constraint> {
        self.sit_with
            .iter()
            .chain(&self.separate)
            .filter(|constraint| !constraint.is_satisfied(grid))
            .copied()
            .collect()
    }
}
