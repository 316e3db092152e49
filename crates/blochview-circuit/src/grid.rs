//! Wires × time-steps circuit grid.
//!
//! Each `(wire, time)` cell holds at most one gate. A CNOT occupies two
//! cells in the same column: its control cell carries the gate and its
//! target cell points back at the control.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use tracing::debug;

use crate::error::{CircuitError, CircuitResult};
use crate::gate::GateKind;
use crate::request::{CircuitRequest, GateOp};

/// Simulator qubit limit.
pub const MAX_QUBITS: u32 = 10;

/// Widest grid accepted, in time steps.
pub const MAX_STEPS: u32 = 256;

/// Default number of wires on a fresh grid.
pub const DEFAULT_QUBITS: u32 = 3;

/// Default number of time steps on a fresh grid.
pub const DEFAULT_STEPS: u32 = 5;

/// Address of one grid cell.
///
/// Ordered time-major so iterating the grid yields placements in the order
/// the simulator applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Wire (qubit) index.
    pub wire: u32,
    /// Time step (column) index.
    pub time: u32,
}

impl Cell {
    /// Create a cell address.
    pub const fn new(wire: u32, time: u32) -> Self {
        Self { wire, time }
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.time, self.wire).cmp(&(other.time, other.wire))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// What occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The anchor of a gate. `target` is set for controlled gates.
    Gate {
        /// The gate.
        gate: GateKind,
        /// Target wire of a controlled gate.
        target: Option<u32>,
    },
    /// Target cell of the controlled gate anchored on `control`.
    Target {
        /// Control wire in the same column.
        control: u32,
    },
}

/// A circuit laid out on a fixed-size grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitGrid {
    num_qubits: u32,
    num_steps: u32,
    cells: BTreeMap<Cell, Slot>,
}

impl Default for CircuitGrid {
    fn default() -> Self {
        Self {
            num_qubits: DEFAULT_QUBITS,
            num_steps: DEFAULT_STEPS,
            cells: BTreeMap::new(),
        }
    }
}

impl CircuitGrid {
    /// Create an empty `num_qubits × num_steps` grid.
    ///
    /// Both dimensions must be nonzero and at most [`MAX_QUBITS`] and
    /// [`MAX_STEPS`] respectively.
    pub fn new(num_qubits: u32, num_steps: u32) -> CircuitResult<Self> {
        if num_qubits == 0 || num_steps == 0 {
            return Err(CircuitError::EmptyGrid {
                num_qubits,
                num_steps,
            });
        }
        if num_qubits > MAX_QUBITS {
            return Err(CircuitError::TooManyQubits {
                num_qubits,
                max: MAX_QUBITS,
            });
        }
        if num_steps > MAX_STEPS {
            return Err(CircuitError::TooManySteps {
                num_steps,
                max: MAX_STEPS,
            });
        }
        Ok(Self {
            num_qubits,
            num_steps,
            cells: BTreeMap::new(),
        })
    }

    /// Number of wires.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of time steps.
    pub fn num_steps(&self) -> u32 {
        self.num_steps
    }

    /// Number of placed gates (a CNOT counts once).
    pub fn len(&self) -> usize {
        self.cells
            .values()
            .filter(|slot| matches!(slot, Slot::Gate { .. }))
            .count()
    }

    /// Whether no gate has been placed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw contents of a cell.
    pub fn slot(&self, wire: u32, time: u32) -> Option<Slot> {
        self.cells.get(&Cell::new(wire, time)).copied()
    }

    /// The placement covering a cell, if any.
    pub fn get(&self, wire: u32, time: u32) -> Option<GateOp> {
        let anchor = self.anchor_of(Cell::new(wire, time))?;
        self.op_at(anchor)
    }

    /// Place a single-wire gate. Fails if the cell is taken.
    pub fn place(&mut self, gate: GateKind, wire: u32, time: u32) -> CircuitResult<()> {
        self.add(&GateOp::single(gate, wire, time))
    }

    /// Place a controlled gate. Fails if either cell is taken.
    pub fn place_controlled(
        &mut self,
        gate: GateKind,
        control: u32,
        target: u32,
        time: u32,
    ) -> CircuitResult<()> {
        self.add(&GateOp::controlled(gate, control, target, time))
    }

    /// Place `op`, rejecting it if any cell it covers is occupied.
    pub fn add(&mut self, op: &GateOp) -> CircuitResult<()> {
        let cells = self.validate(op)?;
        if let Some(taken) = cells.iter().find(|c| self.cells.contains_key(c)) {
            return Err(CircuitError::CellOccupied {
                wire: taken.wire,
                time: taken.time,
            });
        }
        self.insert(op, &cells);
        Ok(())
    }

    /// Place `op`, first removing whatever it would overlap.
    ///
    /// Returns the displaced placements.
    pub fn replace(&mut self, op: &GateOp) -> CircuitResult<Vec<GateOp>> {
        let cells = self.validate(op)?;
        let mut displaced = Vec::new();
        for cell in &cells {
            if let Some(old) = self.remove(cell.wire, cell.time) {
                displaced.push(old);
            }
        }
        self.insert(op, &cells);
        Ok(displaced)
    }

    /// Clear the placement covering a cell. A CNOT is removed from both of
    /// its cells.
    pub fn remove(&mut self, wire: u32, time: u32) -> Option<GateOp> {
        let anchor = self.anchor_of(Cell::new(wire, time))?;
        let op = self.op_at(anchor)?;
        for w in &op.wires {
            self.cells.remove(&Cell::new(*w, time));
        }
        debug!(gate = %op.gate, wires = ?op.wires, time, "removed gate");
        Some(op)
    }

    /// Remove every placement.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Every placement, ordered by time step then wire.
    pub fn placements(&self) -> Vec<GateOp> {
        self.cells
            .iter()
            .filter_map(|(cell, slot)| match slot {
                Slot::Gate { .. } => self.op_at(*cell),
                Slot::Target { .. } => None,
            })
            .collect()
    }

    /// Build the simulator request for this grid.
    pub fn to_request(&self) -> CircuitRequest {
        CircuitRequest {
            circuit: self.placements(),
            n_qubits: self.num_qubits,
        }
    }

    /// Rebuild a grid from a simulator request.
    ///
    /// The grid is wide enough for the latest time step and never narrower
    /// than [`DEFAULT_STEPS`]. Overlapping placements are rejected, as is a
    /// time step at or beyond [`MAX_STEPS`].
    pub fn from_request(request: &CircuitRequest) -> CircuitResult<Self> {
        let last = request.circuit.iter().map(|op| op.time).max();
        let num_steps =
            last.map_or(DEFAULT_STEPS, |t| DEFAULT_STEPS.max(t.saturating_add(1)));
        let mut grid = Self::new(request.n_qubits, num_steps)?;
        for op in &request.circuit {
            grid.add(op)?;
        }
        Ok(grid)
    }

    /// Render the grid as text, one row per wire.
    ///
    /// ```text
    /// q0: ─H──●──────
    /// q1: ────⊕──X───
    /// ```
    pub fn render_text(&self) -> String {
        let label_width = format!("q{}", self.num_qubits.saturating_sub(1)).len();
        let mut out = String::new();
        for wire in 0..self.num_qubits {
            let _ = write!(out, "{:>label_width$}: ", format!("q{wire}"));
            for time in 0..self.num_steps {
                let glyph = match self.slot(wire, time) {
                    None => "─",
                    Some(Slot::Gate { target: Some(_), .. }) => "●",
                    Some(Slot::Gate { gate, .. }) => gate.label(),
                    Some(Slot::Target { .. }) => "⊕",
                };
                let _ = write!(out, "─{glyph}─");
            }
            out.push('\n');
        }
        out
    }

    fn validate(&self, op: &GateOp) -> CircuitResult<Vec<Cell>> {
        let expected = op.gate.arity();
        if op.wires.len() != expected {
            return Err(CircuitError::ArityMismatch {
                gate: op.gate,
                expected,
                got: op.wires.len(),
            });
        }
        if op.time >= self.num_steps {
            return Err(CircuitError::TimeOutOfRange {
                time: op.time,
                num_steps: self.num_steps,
            });
        }
        for (i, &wire) in op.wires.iter().enumerate() {
            if wire >= self.num_qubits {
                return Err(CircuitError::WireOutOfRange {
                    wire,
                    num_qubits: self.num_qubits,
                });
            }
            if op.wires[..i].contains(&wire) {
                return Err(CircuitError::DuplicateWire(wire));
            }
        }
        Ok(op.wires.iter().map(|&w| Cell::new(w, op.time)).collect())
    }

    fn insert(&mut self, op: &GateOp, cells: &[Cell]) {
        match cells {
            [single] => {
                self.cells.insert(
                    *single,
                    Slot::Gate {
                        gate: op.gate,
                        target: None,
                    },
                );
            }
            [control, target] => {
                self.cells.insert(
                    *control,
                    Slot::Gate {
                        gate: op.gate,
                        target: Some(target.wire),
                    },
                );
                self.cells.insert(
                    *target,
                    Slot::Target {
                        control: control.wire,
                    },
                );
            }
            _ => unreachable!("gate arity is validated before insertion"),
        }
        debug!(gate = %op.gate, wires = ?op.wires, time = op.time, "placed gate");
    }

    fn anchor_of(&self, cell: Cell) -> Option<Cell> {
        match self.cells.get(&cell)? {
            Slot::Gate { .. } => Some(cell),
            Slot::Target { control } => Some(Cell::new(*control, cell.time)),
        }
    }

    fn op_at(&self, anchor: Cell) -> Option<GateOp> {
        match self.cells.get(&anchor)? {
            Slot::Gate { gate, target: None } => {
                Some(GateOp::single(*gate, anchor.wire, anchor.time))
            }
            Slot::Gate {
                gate,
                target: Some(target),
            } => Some(GateOp::controlled(*gate, anchor.wire, *target, anchor.time)),
            Slot::Target { .. } => None,
        }
    }
}
