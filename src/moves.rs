//! The six face moves and their geometric rules.
//!
//! Every rule is plain data: the axis, which layer along that axis is turned,
//! a position permutation and the 4-cycle applied to sticker slots. The
//! permutations are stored as `fn` pointers in a static table indexed by
//! [`MoveKind`].

use strum::{Display, EnumString};

use crate::cube::{Coord, CubeState, Cubie, Face, Faces};
use crate::error::{CubeError, Result};

/// Identifier of a quarter-turn face move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString)]
pub enum MoveKind {
    R,
    L,
    U,
    D,
    F,
    B,
}

impl MoveKind {
    /// All moves in table order.
    pub const ALL: [MoveKind; 6] = [
        MoveKind::R,
        MoveKind::L,
        MoveKind::U,
        MoveKind::D,
        MoveKind::F,
        MoveKind::B,
    ];

    /// Index of this move in [`MOVE_TABLE`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the rule for this move.
    pub fn rule(self) -> &'static MoveRule {
        &MOVE_TABLE[self.index()]
    }
}

/// A 3-dimensional axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// X axis (right).
    X,
    /// Y axis (up).
    Y,
    /// Z axis (towards the front).
    Z,
}

impl Axis {
    /// Returns the component of `position` along this axis.
    #[inline]
    pub const fn component(self, (x, y, z): Coord) -> i32 {
        match self {
            Axis::X => x,
            Axis::Y => y,
            Axis::Z => z,
        }
    }

    /// Unit vector along the positive direction of this axis.
    pub const fn unit(self) -> (f32, f32, f32) {
        match self {
            Axis::X => (1.0, 0.0, 0.0),
            Axis::Y => (0.0, 1.0, 0.0),
            Axis::Z => (0.0, 0.0, 1.0),
        }
    }
}

/// Geometric rule for one move.
#[derive(Debug, Clone, Copy)]
pub struct MoveRule {
    pub kind: MoveKind,
    /// Axis the slice turns around.
    pub axis: Axis,
    /// Coordinate along `axis` selecting the 9 turned cubies.
    pub layer: i32,
    /// Direction (+1 or -1) of the axis the turn is drawn around.
    ///
    /// Only affects rendering; the committed permutation is `permutation`.
    pub axis_sign: i32,
    /// Where a cubie in the slice ends up.
    pub permutation: fn(Coord) -> Coord,
    /// Sticker slots whose colors rotate; see [`Faces::cycled`].
    pub color_cycle: [Face; 4],
}

impl MoveRule {
    /// Returns whether the cubie at `position` is turned by this move.
    #[inline]
    pub const fn in_slice(&self, position: Coord) -> bool {
        self.axis.component(position) == self.layer
    }

    /// Destination of the cubie at `position`. Only meaningful inside the slice.
    #[inline]
    pub fn permute(&self, position: Coord) -> Coord {
        (self.permutation)(position)
    }

    /// Sticker colors after the turn. The same cycle applies to every cubie in
    /// the slice.
    #[inline]
    pub fn rotate_faces(&self, faces: &Faces) -> Faces {
        faces.cycled(self.color_cycle)
    }

    /// Returns `cubie` moved and recolored by this turn.
    pub fn apply(&self, cubie: &Cubie) -> Cubie {
        Cubie {
            position: self.permute(cubie.position),
            faces: self.rotate_faces(&cubie.faces),
        }
    }

    /// Splits `state` into the turned slice and the remaining 18 cubies.
    pub fn slice(&self, state: &CubeState) -> (Vec<Cubie>, Vec<Cubie>) {
        state
            .cubies()
            .iter()
            .copied()
            .partition(|cubie| self.in_slice(cubie.position))
    }

    /// Axis the turn is drawn around, including its direction.
    pub fn render_axis(&self) -> (f32, f32, f32) {
        let (x, y, z) = self.axis.unit();
        let sign = self.axis_sign as f32;
        (x * sign, y * sign, z * sign)
    }
}

/// Sticker cycle shared by R and L.
const X_CYCLE: [Face; 4] = [Face::Top, Face::Back, Face::Bottom, Face::Front];
/// Sticker cycle shared by U and D.
const Y_CYCLE: [Face; 4] = [Face::Front, Face::Left, Face::Back, Face::Right];
/// Sticker cycle shared by F and B.
const Z_CYCLE: [Face; 4] = [Face::Top, Face::Left, Face::Bottom, Face::Right];

/// Rules for all six moves, indexed by [`MoveKind::index`].
///
/// L reuses R's permutation and sticker cycle on the opposite layer; only its
/// drawn axis is reversed.
pub static MOVE_TABLE: [MoveRule; 6] = [
    MoveRule {
        kind: MoveKind::R,
        axis: Axis::X,
        layer: 2,
        axis_sign: 1,
        permutation: |(x, y, z)| (x, 2 - z, y),
        color_cycle: X_CYCLE,
    },
    MoveRule {
        kind: MoveKind::L,
        axis: Axis::X,
        layer: 0,
        axis_sign: -1,
        permutation: |(x, y, z)| (x, 2 - z, y),
        color_cycle: X_CYCLE,
    },
    MoveRule {
        kind: MoveKind::U,
        axis: Axis::Y,
        layer: 2,
        axis_sign: 1,
        permutation: |(x, y, z)| (2 - z, y, x),
        color_cycle: Y_CYCLE,
    },
    MoveRule {
        kind: MoveKind::D,
        axis: Axis::Y,
        layer: 0,
        axis_sign: 1,
        permutation: |(x, y, z)| (z, y, 2 - x),
        color_cycle: Y_CYCLE,
    },
    MoveRule {
        kind: MoveKind::F,
        axis: Axis::Z,
        layer: 2,
        axis_sign: 1,
        permutation: |(x, y, z)| (y, 2 - x, z),
        color_cycle: Z_CYCLE,
    },
    MoveRule {
        kind: MoveKind::B,
        axis: Axis::Z,
        layer: 0,
        axis_sign: 1,
        permutation: |(x, y, z)| (2 - y, x, z),
        color_cycle: Z_CYCLE,
    },
];

/// Returns the rule for a move identifier such as `"R"`.
pub fn lookup(key: &str) -> Result<&'static MoveRule> {
    let kind: MoveKind = key
        .parse()
        .map_err(|_| CubeError::InvalidMoveKind(key.to_owned()))?;
    Ok(kind.rule())
}
