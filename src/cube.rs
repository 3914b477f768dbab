//! Cube state model: 27 cubies, each with a position and six sticker slots.
//!
//! Positions use integer coordinates in `0..=2` on every axis:
//! - x grows towards the right face
//! - y grows towards the top face
//! - z grows towards the front face
//!
//! A cubie's sticker slots are named after the face they point at. Slots never
//! appear or disappear; moves only change which color sits in which slot.

use rustc_hash::FxHashMap;
use strum::{EnumIter, IntoEnumIterator};

/// A 3D coordinate identifying one cubie position.
pub type Coord = (i32, i32, i32);

/// Grid dimension per axis.
pub const DIM: usize = 3;

/// Number of cubies in the cube (must equal `DIM^3`).
pub const GRID_SIZE: usize = 27;

/// Bitmask with all 27 cells occupied (lowest 27 bits set).
const ALL_CELLS_FILLED: u32 = (1 << GRID_SIZE) - 1;

/// The hidden core cubie.
pub const CENTER: Coord = (1, 1, 1);

/// Converts (x, y, z) coordinates to a linear cell index.
///
/// Index order is x-major: `idx = x * DIM * DIM + y * DIM + z`.
#[inline(always)]
pub const fn coord_to_idx((x, y, z): Coord) -> usize {
    (x as usize) * DIM * DIM + (y as usize) * DIM + (z as usize)
}

/// Converts a linear cell index to (x, y, z) coordinates.
#[inline(always)]
pub const fn idx_to_coord(cell_index: usize) -> Coord {
    (
        (cell_index / (DIM * DIM)) as i32,
        ((cell_index / DIM) % DIM) as i32,
        (cell_index % DIM) as i32,
    )
}

/// Returns whether every component of `position` lies in `0..=2`.
#[inline]
pub fn in_bounds((x, y, z): Coord) -> bool {
    let range = 0..DIM as i32;
    range.contains(&x) && range.contains(&y) && range.contains(&z)
}

/// Sticker color.
///
/// `Black` is the "no sticker" color carried by slots that face the inside
/// of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Orange,
    Blue,
    Green,
    Yellow,
    White,
    Black,
}

impl Color {
    /// Single-letter code used by the text net.
    pub const fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Black => '.',
        }
    }

    /// Linear RGB components in `0.0..=1.0`.
    pub const fn rgb(self) -> (f32, f32, f32) {
        match self {
            Color::Red => (0.85, 0.1, 0.1),
            Color::Orange => (1.0, 0.5, 0.0),
            Color::Blue => (0.1, 0.3, 0.9),
            Color::Green => (0.1, 0.75, 0.2),
            Color::Yellow => (1.0, 0.9, 0.1),
            Color::White => (0.95, 0.95, 0.95),
            Color::Black => (0.05, 0.05, 0.05),
        }
    }

    /// Returns whether this is a visible sticker rather than the inner color.
    pub const fn is_sticker(self) -> bool {
        !matches!(self, Color::Black)
    }
}

/// One of the six sticker slots of a cubie, named by the direction it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Face {
    /// Color of this face on a freshly created cube.
    pub const fn canonical_color(self) -> Color {
        match self {
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
            Face::Left => Color::Blue,
            Face::Right => Color::Green,
            Face::Top => Color::Yellow,
            Face::Bottom => Color::White,
        }
    }

    /// Returns whether `position` lies on this face's outer layer.
    pub const fn contains(self, (x, y, z): Coord) -> bool {
        match self {
            Face::Front => z == 2,
            Face::Back => z == 0,
            Face::Left => x == 0,
            Face::Right => x == 2,
            Face::Top => y == 2,
            Face::Bottom => y == 0,
        }
    }

    /// Outward unit normal in world coordinates.
    pub const fn normal(self) -> Coord {
        match self {
            Face::Front => (0, 0, 1),
            Face::Back => (0, 0, -1),
            Face::Left => (-1, 0, 0),
            Face::Right => (1, 0, 0),
            Face::Top => (0, 1, 0),
            Face::Bottom => (0, -1, 0),
        }
    }
}

/// Colors of the six sticker slots of one cubie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Faces {
    pub front: Color,
    pub back: Color,
    pub left: Color,
    pub right: Color,
    pub top: Color,
    pub bottom: Color,
}

impl Faces {
    /// All six slots carry the inner color.
    pub const BLANK: Self = Self {
        front: Color::Black,
        back: Color::Black,
        left: Color::Black,
        right: Color::Black,
        top: Color::Black,
        bottom: Color::Black,
    };

    /// Sticker colors for a cubie at `position` on a freshly created cube.
    ///
    /// Each slot is tested independently: corners and edges lie on several
    /// outer layers at once.
    pub fn initial(position: Coord) -> Self {
        let mut faces = Self::BLANK;
        for face in Face::iter() {
            if face.contains(position) {
                faces.set(face, face.canonical_color());
            }
        }
        faces
    }

    /// Returns the color in `face`'s slot.
    #[inline]
    pub const fn get(&self, face: Face) -> Color {
        match face {
            Face::Front => self.front,
            Face::Back => self.back,
            Face::Left => self.left,
            Face::Right => self.right,
            Face::Top => self.top,
            Face::Bottom => self.bottom,
        }
    }

    /// Overwrites the color in `face`'s slot.
    #[inline]
    pub fn set(&mut self, face: Face, color: Color) {
        let slot = match face {
            Face::Front => &mut self.front,
            Face::Back => &mut self.back,
            Face::Left => &mut self.left,
            Face::Right => &mut self.right,
            Face::Top => &mut self.top,
            Face::Bottom => &mut self.bottom,
        };
        *slot = color;
    }

    /// Iterates over `(slot, color)` pairs in `Face` order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        Face::iter().map(move |face| (face, self.get(face)))
    }

    /// Number of slots holding a visible sticker.
    pub fn sticker_count(&self) -> usize {
        self.iter().filter(|(_, color)| color.is_sticker()).count()
    }

    /// Moves colors around the 4-cycle `[a, b, c, d]`.
    ///
    /// The color in `a` moves to `b`, `b` to `c`, `c` to `d` and `d` back to
    /// `a`. The two slots outside the cycle keep their colors.
    pub fn cycled(&self, [a, b, c, d]: [Face; 4]) -> Self {
        let mut out = *self;
        out.set(b, self.get(a));
        out.set(c, self.get(b));
        out.set(d, self.get(c));
        out.set(a, self.get(d));
        out
    }
}

/// One of the 27 unit sub-cubes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cubie {
    pub position: Coord,
    pub faces: Faces,
}

impl Cubie {
    /// Creates a cubie at `position` with its initial sticker colors.
    pub fn initial(position: Coord) -> Self {
        Self {
            position,
            faces: Faces::initial(position),
        }
    }

    /// Returns whether this is the hidden core cubie.
    pub fn is_center(&self) -> bool {
        self.position == CENTER
    }
}

/// The authoritative state of all 27 cubies.
///
/// Cubie order carries no meaning; equality compares the cubies as a set.
#[derive(Debug, Clone)]
pub struct CubeState {
    cubies: Vec<Cubie>,
}

impl CubeState {
    /// Creates the solved cube, cubies enumerated in x-major index order.
    pub fn create_initial() -> Self {
        let cubies = (0..GRID_SIZE)
            .map(|cell| Cubie::initial(idx_to_coord(cell)))
            .collect();
        Self { cubies }
    }

    /// Returns all cubies.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Returns the cubie currently at `position`.
    pub fn get(&self, position: Coord) -> Option<&Cubie> {
        self.cubies.iter().find(|cubie| cubie.position == position)
    }

    /// Returns a new state with some cubies swapped out.
    ///
    /// Each update is `(old_position, new_cubie)`: the cubie found at
    /// `old_position` is replaced by `new_cubie`. Lookups use positions from
    /// `self`, so a whole slice can be rewritten in one call even when the new
    /// positions overlap the old ones. Updates naming a position that is not in
    /// the state are ignored.
    pub fn replace(&self, updates: &[(Coord, Cubie)]) -> Self {
        let updates: FxHashMap<Coord, Cubie> = updates.iter().copied().collect();
        let cubies = self
            .cubies
            .iter()
            .map(|cubie| updates.get(&cubie.position).copied().unwrap_or(*cubie))
            .collect();
        Self { cubies }
    }

    /// Returns whether the positions are exactly `{0,1,2}^3`, each once.
    pub fn is_complete(&self) -> bool {
        if self.cubies.len() != GRID_SIZE {
            return false;
        }
        let mut occupied = 0u32;
        for cubie in &self.cubies {
            if !in_bounds(cubie.position) {
                return false;
            }
            let bit = 1 << coord_to_idx(cubie.position);
            if occupied & bit != 0 {
                return false;
            }
            occupied |= bit;
        }
        occupied == ALL_CELLS_FILLED
    }

    /// Counts every sticker slot's color across all cubies.
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for cubie in &self.cubies {
            for (_, color) in cubie.faces.iter() {
                *counts.entry(color).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Cubies sorted by position, for order-insensitive comparison.
    pub fn sorted_cubies(&self) -> Vec<Cubie> {
        let mut cubies = self.cubies.clone();
        cubies.sort();
        cubies
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::create_initial()
    }
}

impl PartialEq for CubeState {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_cubies() == other.sorted_cubies()
    }
}

impl Eq for CubeState {}
