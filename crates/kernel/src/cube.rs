use cubeview_common::{
    CubeError, CubeState, FACELET_COUNT, FACELETS_PER_FACE, Face, Move, Turn, facelet_position,
};
use glam::{IVec3, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;
use std::sync::OnceLock;

/// An event record produced by every mutation to the cube.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CubeEvent {
    /// A single face turn was applied.
    Rotated { mv: Move },
    /// A scramble applied `moves` and left the RNG at `seed`.
    Scrambled { moves: Vec<Move>, seed: u64 },
    /// The cube was put back in the solved configuration.
    Reset,
}

/// Local cube with face turns derived from the face layout geometry.
///
/// Up and Down turns match the remote service facelet for facelet. On the
/// four side faces the service reverses some edge strips, so its side turns
/// are not undone by their inverses. Local turns always have order 4 and
/// invert cleanly, and differ from the service on those strips.
///
/// Scrambles draw from a seeded splitmix64 stream: given the same seed and
/// sequence of operations, the cube produces identical states.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cube {
    state: CubeState,
    seed: u64,
    /// Append-only event log of all mutations.
    #[serde(skip)]
    event_log: Vec<CubeEvent>,
}

impl Default for Cube {
    fn default() -> Self {
        Self {
            state: CubeState::solved(),
            seed: 0,
            event_log: Vec::new(),
        }
    }
}

impl Cube {
    /// A solved cube with seed 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// A solved cube with a specific scramble seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Wrap an existing state after checking the 54-facelet contract.
    pub fn from_state(state: CubeState) -> Result<Self, CubeError> {
        state.validate()?;
        Ok(Self {
            state,
            ..Default::default()
        })
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn into_state(self) -> CubeState {
        self.state
    }

    /// Current RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    pub fn events(&self) -> &[CubeEvent] {
        &self.event_log
    }

    pub fn drain_events(&mut self) -> Vec<CubeEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Apply one face turn and log it.
    pub fn apply(&mut self, mv: Move) {
        self.turn(mv);
        self.event_log.push(CubeEvent::Rotated { mv });
    }

    /// Apply `count` pseudo-random turns. Returns the moves in order.
    pub fn scramble(&mut self, count: u32) -> Vec<Move> {
        let mut moves = Vec::with_capacity(count as usize);
        for _ in 0..count {
            self.seed = splitmix64(self.seed);
            let mv = Move::ALL[(self.seed % Move::COUNT as u64) as usize];
            self.turn(mv);
            moves.push(mv);
        }
        tracing::debug!(count, seed = self.seed, "scrambled cube");
        self.event_log.push(CubeEvent::Scrambled {
            moves: moves.clone(),
            seed: self.seed,
        });
        moves
    }

    pub fn reset(&mut self) {
        self.state = CubeState::solved();
        self.event_log.push(CubeEvent::Reset);
    }

    /// Reconstruct a cube from a sequence of events, starting solved.
    pub fn replay(events: &[CubeEvent]) -> Self {
        let mut cube = Self::new();
        for event in events {
            match event {
                CubeEvent::Rotated { mv } => cube.turn(*mv),
                CubeEvent::Scrambled { moves, seed } => {
                    for mv in moves {
                        cube.turn(*mv);
                    }
                    cube.seed = *seed;
                }
                CubeEvent::Reset => cube.state = CubeState::solved(),
            }
        }
        cube
    }

    /// FNV-1a hash over the facelets and seed.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, self.state.facelets());
        mix(&mut h, &self.seed.to_le_bytes());
        h
    }

    fn turn(&mut self, mv: Move) {
        let table = &move_tables()[mv.index()];
        let old = self.state.facelets();
        let mut next = old.to_vec();
        for (src, &dst) in table.iter().enumerate() {
            next[dst] = old[src];
        }
        self.state = CubeState::from_facelets(next);
    }
}

type MoveTable = [usize; FACELET_COUNT];

/// Destination index of every facelet, per move, in [`Move::ALL`] order.
fn move_tables() -> &'static [MoveTable; Move::COUNT] {
    static TABLES: OnceLock<[MoveTable; Move::COUNT]> = OnceLock::new();
    TABLES.get_or_init(build_move_tables)
}

/// Facelet positions sit on a half-unit grid, so doubling makes them integral.
fn grid_key(p: Vec3) -> IVec3 {
    (p * 2.0).round().as_ivec3()
}

fn build_move_tables() -> [MoveTable; Move::COUNT] {
    let positions: Vec<Vec3> = (0..FACELET_COUNT)
        .map(|i| facelet_position(Face::ALL[i / FACELETS_PER_FACE], i % FACELETS_PER_FACE, 1.0))
        .collect();
    let index_of: HashMap<IVec3, usize> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| (grid_key(*p), i))
        .collect();

    let mut tables = [[0usize; FACELET_COUNT]; Move::COUNT];
    for mv in Move::ALL {
        let normal = mv.face.layout().normal().normalize();
        // Clockwise seen from outside is a negative turn about the outward normal.
        let angle = match mv.turn {
            Turn::Clockwise => -FRAC_PI_2,
            Turn::CounterClockwise => FRAC_PI_2,
        };
        let rotation = Quat::from_axis_angle(normal, angle);
        let table = &mut tables[mv.index()];
        for (i, p) in positions.iter().enumerate() {
            table[i] = if p.dot(normal) > 0.5 {
                // A quarter turn maps the surface grid onto itself.
                index_of[&grid_key(rotation * *p)]
            } else {
                i
            };
        }
    }
    tables
}

/// Splitmix64 step, used to advance the scramble seed reproducibly.
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
