//! Fixed round catalog for the King game.
//!
//! The catalog is ordered; order drives auto-advance and the "next round"
//! display. Six standard penalty rounds are followed by four festa rounds,
//! each targeting the seat dealt into that round by rotation.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::state::Seat;
use crate::errors::domain::{DomainError, ValidationKind};

pub const PLAYERS: usize = 4;
pub const ROUND_COUNT: usize = 10;

/// Symbolic round keys, declared in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoundId {
    Vazas,
    Copas,
    Damas,
    Reis,
    ReiCopas,
    Ultimas,
    F1,
    F2,
    F3,
    F4,
}

impl RoundId {
    pub const ALL: [RoundId; ROUND_COUNT] = [
        RoundId::Vazas,
        RoundId::Copas,
        RoundId::Damas,
        RoundId::Reis,
        RoundId::ReiCopas,
        RoundId::Ultimas,
        RoundId::F1,
        RoundId::F2,
        RoundId::F3,
        RoundId::F4,
    ];

    /// Position in the catalog (0-based).
    pub fn index(self) -> usize {
        match self {
            RoundId::Vazas => 0,
            RoundId::Copas => 1,
            RoundId::Damas => 2,
            RoundId::Reis => 3,
            RoundId::ReiCopas => 4,
            RoundId::Ultimas => 5,
            RoundId::F1 => 6,
            RoundId::F2 => 7,
            RoundId::F3 => 8,
            RoundId::F4 => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoundId::Vazas => "vazas",
            RoundId::Copas => "copas",
            RoundId::Damas => "damas",
            RoundId::Reis => "reis",
            RoundId::ReiCopas => "rei_copas",
            RoundId::Ultimas => "ultimas",
            RoundId::F1 => "f1",
            RoundId::F2 => "f2",
            RoundId::F3 => "f3",
            RoundId::F4 => "f4",
        }
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoundId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::ParseRound, format!("Parse round: {s}"))
            })
    }
}

/// Scoring rule attached to a round, dispatched by `scoring::score_round`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundKind {
    /// Penalty round: `points = units * unit_value`, `units` capped per row.
    Standard { max_units: u8, unit_value: i16 },
    /// Festa round: points depend on the round's positive/negative mode.
    Festa { target_seat: Seat },
}

/// One entry of the fixed catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundDef {
    pub id: RoundId,
    pub display_name: &'static str,
    pub kind: RoundKind,
}

impl RoundDef {
    pub fn is_festa(&self) -> bool {
        matches!(self.kind, RoundKind::Festa { .. })
    }

    pub fn max_units(&self) -> Option<u8> {
        match self.kind {
            RoundKind::Standard { max_units, .. } => Some(max_units),
            RoundKind::Festa { .. } => None,
        }
    }

    /// Display label; festa rounds carry the targeted player's name.
    pub fn label(&self, players: &[String; PLAYERS]) -> String {
        match self.kind {
            RoundKind::Standard { .. } => self.display_name.to_string(),
            RoundKind::Festa { target_seat } => {
                format!("Festa {}", players[target_seat as usize])
            }
        }
    }
}

// Festa targets follow deal rotation: each festa round concerns a seat
// different from the round's own position (f1 -> seat 2, f2 -> 3, f3 -> 0,
// f4 -> 1).
static CATALOG: Lazy<[RoundDef; ROUND_COUNT]> = Lazy::new(|| {
    [
        RoundDef {
            id: RoundId::Vazas,
            display_name: "Vazas",
            kind: RoundKind::Standard {
                max_units: 13,
                unit_value: -20,
            },
        },
        RoundDef {
            id: RoundId::Copas,
            display_name: "Copas",
            kind: RoundKind::Standard {
                max_units: 13,
                unit_value: -20,
            },
        },
        RoundDef {
            id: RoundId::Damas,
            display_name: "Damas",
            kind: RoundKind::Standard {
                max_units: 4,
                unit_value: -50,
            },
        },
        RoundDef {
            id: RoundId::Reis,
            display_name: "Reis / Valetes",
            kind: RoundKind::Standard {
                max_units: 8,
                unit_value: -30,
            },
        },
        RoundDef {
            id: RoundId::ReiCopas,
            display_name: "Rei de Copas",
            kind: RoundKind::Standard {
                max_units: 1,
                unit_value: -160,
            },
        },
        RoundDef {
            id: RoundId::Ultimas,
            display_name: "Últimas Vaz.",
            kind: RoundKind::Standard {
                max_units: 2,
                unit_value: -90,
            },
        },
        RoundDef {
            id: RoundId::F1,
            display_name: "Festa",
            kind: RoundKind::Festa { target_seat: 2 },
        },
        RoundDef {
            id: RoundId::F2,
            display_name: "Festa",
            kind: RoundKind::Festa { target_seat: 3 },
        },
        RoundDef {
            id: RoundId::F3,
            display_name: "Festa",
            kind: RoundKind::Festa { target_seat: 0 },
        },
        RoundDef {
            id: RoundId::F4,
            display_name: "Festa",
            kind: RoundKind::Festa { target_seat: 1 },
        },
    ]
});

pub fn catalog() -> &'static [RoundDef; ROUND_COUNT] {
    &CATALOG
}

pub fn round_def(id: RoundId) -> &'static RoundDef {
    &CATALOG[id.index()]
}

/// Next cell in catalog + seat order.
///
/// Seats advance within the row; past seat 3 the target wraps to seat 0 of
/// the following round. The round index clamps at the last round, so from the
/// last round's seat 3 the target is that round's seat 0.
pub fn next_cell(round: RoundId, seat: Seat) -> (RoundId, Seat) {
    if seat < (PLAYERS as Seat) - 1 {
        (round, seat + 1)
    } else {
        let idx = (round.index() + 1).min(ROUND_COUNT - 1);
        (RoundId::ALL[idx], 0)
    }
}

/// Per-festa-round scoring toggle. Persists until explicitly flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FestaMode {
    #[default]
    Positive,
    Negative,
}

impl FestaMode {
    pub fn toggled(self) -> Self {
        match self {
            FestaMode::Positive => FestaMode::Negative,
            FestaMode::Negative => FestaMode::Positive,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FestaMode::Positive => "positive",
            FestaMode::Negative => "negative",
        }
    }
}

impl fmt::Display for FestaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FestaMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FestaMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "positive" => Ok(FestaMode::Positive),
            "negative" => Ok(FestaMode::Negative),
            _ => Err(serde::de::Error::custom(format!("Invalid festa mode: {s}"))),
        }
    }
}

/// Mode per festa round id (f1..f4). Standard rounds have no entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FestaModeMapWire", into = "FestaModeMapWire")]
pub struct FestaModeMap {
    modes: [FestaMode; 4],
}

impl Default for FestaModeMap {
    fn default() -> Self {
        Self {
            modes: [FestaMode::Positive; 4],
        }
    }
}

impl FestaModeMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(id: RoundId) -> Option<usize> {
        match id {
            RoundId::F1 => Some(0),
            RoundId::F2 => Some(1),
            RoundId::F3 => Some(2),
            RoundId::F4 => Some(3),
            _ => None,
        }
    }

    /// Mode for a festa round; `None` for standard rounds.
    pub fn get(&self, id: RoundId) -> Option<FestaMode> {
        Self::slot(id).map(|i| self.modes[i])
    }

    pub fn set(&mut self, id: RoundId, mode: FestaMode) -> Result<(), DomainError> {
        let slot = Self::slot(id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::NotAFestaRound,
                format!("{id} is not a festa round"),
            )
        })?;
        self.modes[slot] = mode;
        Ok(())
    }

    /// Flip a festa round's mode, returning the new mode.
    pub fn toggle(&mut self, id: RoundId) -> Result<FestaMode, DomainError> {
        let slot = Self::slot(id).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::NotAFestaRound,
                format!("{id} is not a festa round"),
            )
        })?;
        self.modes[slot] = self.modes[slot].toggled();
        Ok(self.modes[slot])
    }
}

/// Wire shape: `{"f1": "positive", ...}`, matching the persisted format.
#[derive(Serialize, Deserialize)]
struct FestaModeMapWire {
    #[serde(default)]
    f1: FestaMode,
    #[serde(default)]
    f2: FestaMode,
    #[serde(default)]
    f3: FestaMode,
    #[serde(default)]
    f4: FestaMode,
}

impl From<FestaModeMapWire> for FestaModeMap {
    fn from(wire: FestaModeMapWire) -> Self {
        Self {
            modes: [wire.f1, wire.f2, wire.f3, wire.f4],
        }
    }
}

impl From<FestaModeMap> for FestaModeMapWire {
    fn from(map: FestaModeMap) -> Self {
        Self {
            f1: map.modes[0],
            f2: map.modes[1],
            f3: map.modes[2],
            f4: map.modes[3],
        }
    }
}
