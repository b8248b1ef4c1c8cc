use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;
/// Facelets per face on a 3x3 cube.
pub const FACELETS_PER_FACE: usize = 9;
/// Facelets in a complete cube state.
pub const FACELET_COUNT: usize = FACE_COUNT * FACELETS_PER_FACE;
/// Distinct facelet values (one per face color in the solved state).
pub const COLOR_COUNT: usize = 6;

/// Errors raised when cube data does not match the 54-facelet contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CubeError {
    #[error("cube state must have {expected} facelets, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("facelet {index} has value {value}, expected 0..6")]
    InvalidFacelet { index: usize, value: u8 },
    #[error("unknown move token: {0:?}")]
    InvalidMove(String),
    #[error("cannot parse facelet list: {0}")]
    ParseFacelets(String),
}

/// One of the six cube faces, in service index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    Left,
    Right,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; FACE_COUNT] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// Position of this face in a [`CubeState`] and in the layout table.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.letter() == letter)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Direction of a quarter turn, as seen looking at the face from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

impl Turn {
    pub fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }
}

/// A single quarter turn of one face, e.g. `R` or `R'`.
///
/// Serialized as its token string so it can travel over the wire unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub const COUNT: usize = FACE_COUNT * 2;

    /// Every move in service action order: `U U' D D' L L' R R' F F' B B'`.
    pub const ALL: [Move; Move::COUNT] = [
        Move::cw(Face::Up),
        Move::ccw(Face::Up),
        Move::cw(Face::Down),
        Move::ccw(Face::Down),
        Move::cw(Face::Left),
        Move::ccw(Face::Left),
        Move::cw(Face::Right),
        Move::ccw(Face::Right),
        Move::cw(Face::Front),
        Move::ccw(Face::Front),
        Move::cw(Face::Back),
        Move::ccw(Face::Back),
    ];

    pub const fn cw(face: Face) -> Self {
        Self {
            face,
            turn: Turn::Clockwise,
        }
    }

    pub const fn ccw(face: Face) -> Self {
        Self {
            face,
            turn: Turn::CounterClockwise,
        }
    }

    /// Action index: even for clockwise, odd for counter-clockwise.
    pub fn index(self) -> usize {
        self.face.index() * 2 + usize::from(self.turn == Turn::CounterClockwise)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The move that undoes this one.
    pub fn inverse(self) -> Self {
        Self {
            face: self.face,
            turn: self.turn.inverse(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.turn {
            Turn::Clockwise => write!(f, "{}", self.face.letter()),
            Turn::CounterClockwise => write!(f, "{}'", self.face.letter()),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(|| CubeError::InvalidMove(s.to_string()))?;
        match chars.as_str() {
            "" => Ok(Move::cw(face)),
            "'" => Ok(Move::ccw(face)),
            _ => Err(CubeError::InvalidMove(s.to_string())),
        }
    }
}

impl TryFrom<String> for Move {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}

/// Flat facelet array: faces in [`Face`] order, 9 facelets each, row-major.
///
/// The type accepts any length so partial data can still be displayed;
/// [`CubeState::validate`] applies the strict 54-facelet contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubeState(Vec<u8>);

impl CubeState {
    /// Face `f` filled entirely with value `f`.
    pub fn solved() -> Self {
        Self(
            (0..FACE_COUNT as u8)
                .flat_map(|f| std::iter::repeat_n(f, FACELETS_PER_FACE))
                .collect(),
        )
    }

    pub fn from_facelets(facelets: Vec<u8>) -> Self {
        Self(facelets)
    }

    pub fn facelets(&self) -> &[u8] {
        &self.0
    }

    pub fn into_facelets(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of whole faces present (trailing partial faces are ignored).
    pub fn complete_faces(&self) -> usize {
        self.0.len() / FACELETS_PER_FACE
    }

    /// The nine facelets of `face`, if that face is fully present.
    pub fn face(&self, face: Face) -> Option<&[u8]> {
        let start = face.index() * FACELETS_PER_FACE;
        self.0.get(start..start + FACELETS_PER_FACE)
    }

    /// Check the strict contract: exactly 54 facelets, each in `0..6`.
    pub fn validate(&self) -> Result<(), CubeError> {
        if self.0.len() != FACELET_COUNT {
            return Err(CubeError::InvalidLength {
                expected: FACELET_COUNT,
                actual: self.0.len(),
            });
        }
        match self
            .0
            .iter()
            .enumerate()
            .find(|&(_, &v)| usize::from(v) >= COLOR_COUNT)
        {
            Some((index, &value)) => Err(CubeError::InvalidFacelet { index, value }),
            None => Ok(()),
        }
    }

    /// True when every face is uniformly its own index.
    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl FromStr for CubeState {
    type Err = CubeError;

    /// Parse a comma or whitespace separated facelet list, e.g. `0,0,0,1,...`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<u8>()
                    .map_err(|e| CubeError::ParseFacelets(format!("{tok:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}
