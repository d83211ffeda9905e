//! Board geometry: a fixed-length cyclic sequence of fields.
//!
//! The board answers two questions about a move: where does it land
//! (`destination`), and which fields does it pass on the way
//! (`passed_positions`). Applying the effects is the engine's job; keeping
//! the board pure keeps the traversal laws testable without any player
//! state.
//!
//! ## Full laps
//!
//! A move with `steps % len == 0` passes nothing and lands on the start
//! field, firing its step-on effect. The alternative reading (a full lap
//! as a true no-op) was rejected so that every roll has exactly one
//! landing field.

use smallvec::SmallVec;

use super::field::{Field, FieldKind};
use crate::economy::{Property, PropertyId, PropertyRegistry};

/// Positions passed during one move. Almost always at most a die roll
/// long, hence the inline capacity.
pub type PassedPositions = SmallVec<[usize; 8]>;

/// A cyclic, fixed-length field sequence. Length is always ≥ 1.
#[derive(Debug)]
pub struct Board {
    fields: Vec<Field>,
}

impl Board {
    fn new(fields: Vec<Field>) -> Self {
        assert!(!fields.is_empty(), "a board needs at least one field");
        Self { fields }
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Boards are never empty; kept for iterator-style call sites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The field at `position`.
    #[must_use]
    pub fn field(&self, position: usize) -> &Field {
        &self.fields[position]
    }

    /// Landing position of a `steps`-long move from `from`.
    #[must_use]
    pub fn destination(&self, from: usize, steps: usize) -> usize {
        debug_assert!(from < self.len(), "from must be a valid position");
        (from + steps) % self.len()
    }

    /// Every position strictly between `from` and the landing field, in
    /// forward cyclic order. Empty for full laps and zero-step moves.
    #[must_use]
    pub fn passed_positions(&self, from: usize, steps: usize) -> PassedPositions {
        let len = self.len();
        let to = (from + steps) % len;

        let mut passed = PassedPositions::new();
        if steps % len == 0 {
            return passed;
        }
        let mut pos = (from + 1) % len;
        while pos != to {
            passed.push(pos);
            pos = (pos + 1) % len;
        }
        passed
    }

    /// Add `amount` to the deposit pool at `position`. Ignored for
    /// non-deposit fields; only the engine calls this and only for
    /// positions it has just matched as deposits.
    pub fn deposit_into(&mut self, position: usize, amount: i64) {
        if let FieldKind::Deposit { pool, .. } = self.fields[position].kind_mut() {
            *pool += amount;
        } else {
            debug_assert!(false, "deposit_into on a non-deposit field");
        }
    }

    /// Take the whole deposit pool at `position`, resetting it to zero.
    pub fn drain_pool(&mut self, position: usize) -> i64 {
        if let FieldKind::Deposit { pool, .. } = self.fields[position].kind_mut() {
            std::mem::take(pool)
        } else {
            debug_assert!(false, "drain_pool on a non-deposit field");
            0
        }
    }
}

/// Builds a board and its property registry together, so property fields
/// and property definitions cannot drift apart.
#[derive(Debug, Default)]
pub struct BoardBuilder {
    fields: Vec<Field>,
    registry: PropertyRegistry,
}

impl BoardBuilder {
    /// Start an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A field with no effect.
    #[must_use]
    pub fn no_op(mut self, name: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, FieldKind::NoOp));
        self
    }

    /// A field crediting `reward` to each lander.
    #[must_use]
    pub fn reward(mut self, name: impl Into<String>, reward: i64) -> Self {
        self.fields.push(Field::new(name, FieldKind::Reward(reward)));
        self
    }

    /// A field debiting `fee` from each lander.
    #[must_use]
    pub fn punishment(mut self, name: impl Into<String>, fee: i64) -> Self {
        self.fields.push(Field::new(name, FieldKind::Punishment(fee)));
        self
    }

    /// A deposit field: pass-by pays `fee` into the pool, landing drains
    /// it.
    #[must_use]
    pub fn deposit(mut self, name: impl Into<String>, fee: i64) -> Self {
        self.fields
            .push(Field::new(name, FieldKind::Deposit { fee, pool: 0 }));
        self
    }

    /// A real-estate property field. The field shares the property's name.
    #[must_use]
    pub fn real_estate(mut self, name: impl Into<String>, price: i64, percent: u32) -> Self {
        let name = name.into();
        let id = self
            .registry
            .register(Property::real_estate(name.clone(), price, percent));
        self.fields.push(Field::new(name, FieldKind::Property(id)));
        self
    }

    /// A public-property field with a flat commission.
    #[must_use]
    pub fn public_property(
        mut self,
        name: impl Into<String>,
        price: i64,
        commission: i64,
    ) -> Self {
        let name = name.into();
        let id = self
            .registry
            .register(Property::public_property(name.clone(), price, commission));
        self.fields.push(Field::new(name, FieldKind::Property(id)));
        self
    }

    /// Number of fields added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Finish the layout. Panics if no field was added.
    #[must_use]
    pub fn build(self) -> (Board, PropertyRegistry) {
        (Board::new(self.fields), self.registry)
    }
}

/// Look up the property id behind a field, if it is a property field.
#[must_use]
pub fn property_at(board: &Board, position: usize) -> Option<PropertyId> {
    match board.field(position).kind() {
        FieldKind::Property(id) => Some(id),
        _ => None,
    }
}
