//! Face-frequency tally and the counting primitives the scoring rules are built on.

use crate::dice::NUM_DICE;

/// Which straight to test for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StraightKind {
    /// 1-2-3-4-5: no duplicates and no six.
    Small,
    /// 2-3-4-5-6: no duplicates and no one.
    Large,
}

impl StraightKind {
    /// The face whose presence disqualifies this straight.
    fn excluded_face(self) -> u8 {
        match self {
            StraightKind::Small => 6,
            StraightKind::Large => 1,
        }
    }
}

/// Occurrence count per face, indexed by `face - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally([u8; 6]);

impl Tally {
    /// Count faces. Values outside 1..=6 are ignored; counts saturate at 255.
    pub fn from_faces(faces: &[u8]) -> Self {
        let mut counts = [0u8; 6];
        for &f in faces {
            if (1..=6).contains(&f) {
                let c = &mut counts[(f - 1) as usize];
                *c = c.saturating_add(1);
            }
        }
        Tally(counts)
    }

    /// Occurrences of `face`; 0 for anything outside 1..=6.
    pub fn count(&self, face: u8) -> u8 {
        match face {
            1..=6 => self.0[(face - 1) as usize],
            _ => 0,
        }
    }

    pub fn counts(&self) -> [u8; 6] {
        self.0
    }

    /// Total number of dice counted (5 for any validated roll set).
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| c as u32).sum()
    }

    /// Faces from 6 down to 1 that occur at least `multiple` times.
    fn qualifying(&self, multiple: u8) -> impl Iterator<Item = u8> + '_ {
        (1..=6u8).rev().filter(move |&f| self.count(f) >= multiple)
    }

    /// Largest face occurring at least `multiple` times, or 0 if none does.
    pub fn select_best(&self, multiple: u8) -> u8 {
        self.qualifying(multiple).next().unwrap_or(0)
    }

    /// Best score from two *distinct* faces, one with count >= `m1` (weighted by `m1`)
    /// and another with count >= `m2` (weighted by `m2`).
    ///
    /// Returns `v1 * m1 + v2 * m2` maximized over all disjoint assignments, or 0 when
    /// either role cannot be filled by a face not already used by the other. A single
    /// face never fills both roles. Ties go to the larger role-1 face.
    pub fn select_best_pair(&self, m1: u8, m2: u8) -> u32 {
        let mut best = 0u32;
        for v1 in self.qualifying(m1) {
            for v2 in self.qualifying(m2).filter(|&v2| v2 != v1) {
                let s = v1 as u32 * m1 as u32 + v2 as u32 * m2 as u32;
                if s > best {
                    best = s;
                }
            }
        }
        best
    }

    /// True if no face repeats and the straight's excluded endpoint is absent.
    ///
    /// This does not check that exactly the right five faces are present; with five
    /// distinct faces out of six, excluding one endpoint pins down the rest.
    pub fn is_straight(&self, kind: StraightKind) -> bool {
        self.0.iter().all(|&c| c <= 1)
            && self.total() == NUM_DICE as u32
            && self.count(kind.excluded_face()) == 0
    }
}
