//! Ownable properties and their commission policies.
//!
//! ## PropertyKind
//!
//! Two variants differing only in how the commission (the fee a
//! non-owner pays the owner for landing on the field) is computed. Both
//! policies are construction parameters; nothing outside this module
//! branches on the concrete kind.
//!
//! - `RealEstate`: commission is a percentage of the purchase price.
//! - `PublicProperty`: commission is a flat amount, independent of price.
//!
//! ## PropertyRegistry
//!
//! The single store of property definitions and ownership. Names are
//! unique per board; the owner field is a lookup key into the engine's
//! player list, never a reference (the player's holdings list is the
//! authoritative side of the relation).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, PlayerId};

/// Property identifier, stable for the lifetime of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub u16);

impl PropertyId {
    /// Create a new property ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

/// Commission policy, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    /// Commission is `price * percent / 100`, rounded down.
    RealEstate {
        /// Commission percentage of the purchase price.
        percent: u32,
    },
    /// Commission is a flat fee.
    PublicProperty {
        /// The flat commission amount.
        commission: i64,
    },
}

/// An ownable economic entity sitting behind a property field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Property {
    name: String,
    price: i64,
    kind: PropertyKind,
    owner: Option<PlayerId>,
}

impl Property {
    /// Real estate with a price-relative commission.
    #[must_use]
    pub fn real_estate(name: impl Into<String>, price: i64, percent: u32) -> Self {
        Self {
            name: name.into(),
            price,
            kind: PropertyKind::RealEstate { percent },
            owner: None,
        }
    }

    /// Public property with a flat commission.
    #[must_use]
    pub fn public_property(name: impl Into<String>, price: i64, commission: i64) -> Self {
        Self {
            name: name.into(),
            price,
            kind: PropertyKind::PublicProperty { commission },
            owner: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn price(&self) -> i64 {
        self.price
    }

    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Fee a non-owner landing here owes the owner.
    #[must_use]
    pub fn commission(&self) -> i64 {
        match self.kind {
            PropertyKind::RealEstate { percent } => self.price * i64::from(percent) / 100,
            PropertyKind::PublicProperty { commission } => commission,
        }
    }

    /// Current owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }
}

/// Store of all properties on a board, indexed by id and by unique name.
#[derive(Debug, Default)]
pub struct PropertyRegistry {
    properties: Vec<Property>,
    by_name: FxHashMap<String, PropertyId>,
}

impl PropertyRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a property. Panics on a duplicate name; board wiring is
    /// static and a name collision is a defect in it.
    pub fn register(&mut self, property: Property) -> PropertyId {
        assert!(
            !self.by_name.contains_key(property.name()),
            "duplicate property name {:?}",
            property.name()
        );
        let id = PropertyId::new(self.properties.len() as u16);
        self.by_name.insert(property.name().to_owned(), id);
        self.properties.push(property);
        id
    }

    /// Number of registered properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Look up by id.
    #[must_use]
    pub fn get(&self, id: PropertyId) -> &Property {
        &self.properties[id.raw() as usize]
    }

    /// Look up by unique name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PropertyId> {
        self.by_name.get(name).copied()
    }

    /// Transfer ownership to `player`. Fails if someone else already owns
    /// it; taking over one's own property is a no-op.
    pub fn take_over(&mut self, id: PropertyId, player: PlayerId) -> Result<(), GameError> {
        let property = &mut self.properties[id.raw() as usize];
        match property.owner {
            Some(current) if current != player => Err(GameError::AlreadyOwned {
                property: property.name.clone(),
            }),
            _ => {
                property.owner = Some(player);
                Ok(())
            }
        }
    }

    /// Clear ownership unconditionally (sale or bankruptcy liquidation).
    pub fn release(&mut self, id: PropertyId) {
        self.properties[id.raw() as usize].owner = None;
    }

    /// Iterate `(id, property)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &Property)> {
        self.properties
            .iter()
            .enumerate()
            .map(|(i, p)| (PropertyId::new(i as u16), p))
    }
}
