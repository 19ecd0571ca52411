//! Score table: raw per-round, per-seat cell values.
//!
//! Cells hold exactly what was accepted at entry time: nothing, the explicit
//! dash placeholder ("intentionally blank, not zero"), or an integer. Only
//! numeric cells count towards row completion and scoring.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::rounds::{RoundId, PLAYERS, ROUND_COUNT};
use crate::domain::state::Seat;

/// One raw cell of the score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Explicitly entered placeholder: not advancing, not yet valid.
    Dash,
    Value(i16),
}

impl Cell {
    /// Numeric content, if any. Empty and dash cells carry none.
    pub fn numeric(self) -> Option<i16> {
        match self {
            Cell::Value(v) => Some(v),
            Cell::Empty | Cell::Dash => None,
        }
    }

    /// A filled cell is non-empty and non-dash; rows complete on 4 of these.
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Value(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Dash => f.write_str("-"),
            Cell::Value(v) => write!(f, "{v}"),
        }
    }
}

// Wire format matches the persisted table: "" for empty, "-" for dash,
// a JSON number for values. Numeric strings are tolerated on input.
impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Cell::Empty => serializer.serialize_str(""),
            Cell::Dash => serializer.serialize_str("-"),
            Cell::Value(v) => serializer.serialize_i16(*v),
        }
    }
}

struct CellVisitor;

impl Visitor<'_> for CellVisitor {
    type Value = Cell;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, \"\", or \"-\"")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Cell, E> {
        i16::try_from(v)
            .map(Cell::Value)
            .map_err(|_| E::custom(format!("cell value out of range: {v}")))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Cell, E> {
        i16::try_from(v)
            .map(Cell::Value)
            .map_err(|_| E::custom(format!("cell value out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Cell, E> {
        match s {
            "" => Ok(Cell::Empty),
            "-" => Ok(Cell::Dash),
            other => other
                .parse::<i16>()
                .map(Cell::Value)
                .map_err(|_| E::custom(format!("invalid cell value: {other}"))),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(CellVisitor)
    }
}

/// Raw cell values for all rounds, indexed by catalog position and seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ScoreTableWire", into = "ScoreTableWire")]
pub struct ScoreTable {
    rows: [[Cell; PLAYERS]; ROUND_COUNT],
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl ScoreTable {
    /// Freshly zeroed table: every cell empty.
    pub fn empty() -> Self {
        Self {
            rows: [[Cell::Empty; PLAYERS]; ROUND_COUNT],
        }
    }

    pub fn cell(&self, id: RoundId, seat: Seat) -> Cell {
        self.rows[id.index()][seat as usize]
    }

    pub fn row(&self, id: RoundId) -> &[Cell; PLAYERS] {
        &self.rows[id.index()]
    }

    pub fn set_cell(&mut self, id: RoundId, seat: Seat, cell: Cell) {
        self.rows[id.index()][seat as usize] = cell;
    }

    pub fn clear_row(&mut self, id: RoundId) {
        self.rows[id.index()] = [Cell::Empty; PLAYERS];
    }

    /// A round is full once all 4 seats hold a numeric value.
    pub fn is_row_full(&self, id: RoundId) -> bool {
        self.rows[id.index()].iter().all(|c| c.is_filled())
    }

    /// Sum of the row's numeric cells; empty and dash cells count as 0.
    pub fn row_units_sum(&self, id: RoundId) -> i32 {
        self.rows[id.index()]
            .iter()
            .filter_map(|c| c.numeric())
            .map(i32::from)
            .sum()
    }

    pub fn completed_count(&self) -> usize {
        RoundId::ALL.iter().filter(|id| self.is_row_full(**id)).count()
    }

    /// First not-yet-full round in catalog order.
    pub fn next_incomplete_round(&self) -> Option<RoundId> {
        RoundId::ALL.iter().copied().find(|id| !self.is_row_full(*id))
    }
}

/// Wire row shape: `{"p0": .., "p1": .., "p2": .., "p3": ..}`.
#[derive(Serialize, Deserialize, Default)]
struct RowWire {
    #[serde(default)]
    p0: Cell,
    #[serde(default)]
    p1: Cell,
    #[serde(default)]
    p2: Cell,
    #[serde(default)]
    p3: Cell,
}

/// Wire table shape: round id string to row. Unknown ids are ignored and
/// missing rounds decode as empty rows.
#[derive(Serialize, Deserialize)]
struct ScoreTableWire(std::collections::BTreeMap<String, RowWire>);

impl From<ScoreTableWire> for ScoreTable {
    fn from(wire: ScoreTableWire) -> Self {
        let mut table = ScoreTable::empty();
        for (key, row) in wire.0 {
            if let Ok(id) = key.parse::<RoundId>() {
                table.rows[id.index()] = [row.p0, row.p1, row.p2, row.p3];
            }
        }
        table
    }
}

impl From<ScoreTable> for ScoreTableWire {
    fn from(table: ScoreTable) -> Self {
        let map = RoundId::ALL
            .iter()
            .map(|id| {
                let [p0, p1, p2, p3] = table.rows[id.index()];
                (id.as_str().to_string(), RowWire { p0, p1, p2, p3 })
            })
            .collect();
        ScoreTableWire(map)
    }
}
