//! The game engine: roster, shared die, and the round/turn loop.
//!
//! ## Lifecycle
//!
//! `Configuring → Running → Finished`, one match per engine. The die and
//! players can be added in any order while configuring; `play` validates
//! eagerly (no die, too few players) before any round runs, so a failed
//! call leaves the engine untouched and prints nothing.
//!
//! ## A turn
//!
//! Roll the shared die, walk the board (pass-by effects in traversal
//! order, then the landing field's step-on effect), then check whether
//! fewer than two players remain solvent. All field effects dispatch on
//! [`FieldKind`] in one place here; the board itself is pure geometry.
//!
//! ## Money protocols
//!
//! Whenever a player owes more than they have — a commission, a fee, or a
//! voluntary purchase — the liquidity-shortfall protocol offers *every*
//! held property for sale, in holding order, without short-circuiting.
//! Sales return half the purchase price. An unresolved obligation
//! bankrupts the debtor (the creditor keeps whatever could be paid); an
//! unresolved purchase is simply abandoned.

use std::io::{self, Write};

use crate::board::{Board, FieldKind};
use crate::core::{Die, GameError, Player, PlayerId};
use crate::economy::{PropertyId, PropertyRegistry};
use crate::strategy::{ComputerLevel, ComputerPolicy, DecisionProvider};

use super::config::EngineConfig;
use super::summary::PlayerSummary;

/// Engine lifecycle phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Accepting die and players.
    Configuring,
    /// Mid-match.
    Running,
    /// Match over; the engine is inert.
    Finished,
}

/// Who an owed amount goes to.
#[derive(Clone, Copy, Debug)]
enum Creditor {
    /// The bank: the money leaves the game.
    Bank,
    /// Another player, by roster index.
    Owner(usize),
    /// A deposit field's pool, by board position.
    Pool(usize),
}

/// Drives one match over a board.
pub struct GameEngine {
    config: EngineConfig,
    phase: GamePhase,
    board: Board,
    registry: PropertyRegistry,
    players: Vec<Player>,
    die: Option<Box<dyn Die>>,
    sink: Box<dyn Write>,
}

impl GameEngine {
    /// An engine over a built board, default configuration, printing to
    /// stdout.
    #[must_use]
    pub fn new(board: Board, registry: PropertyRegistry) -> Self {
        Self::with_config(board, registry, EngineConfig::default())
    }

    /// An engine with explicit configuration.
    #[must_use]
    pub fn with_config(board: Board, registry: PropertyRegistry, config: EngineConfig) -> Self {
        Self {
            config,
            phase: GamePhase::Configuring,
            board,
            registry,
            players: Vec::new(),
            die: None,
            sink: Box::new(io::stdout()),
        }
    }

    /// Redirect the round markers and summaries (tests capture them
    /// here).
    #[must_use]
    pub fn with_output(mut self, sink: impl Write + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    // === Roster ===

    /// Install the shared die. `None` is an accepted no-op.
    pub fn set_die(&mut self, die: Option<Box<dyn Die>>) {
        if let Some(die) = die {
            self.die = Some(die);
        }
    }

    /// Seat a computer player named `Player<N>` by its 1-based join
    /// number.
    pub fn add_computer_player(&mut self, level: ComputerLevel) -> Result<PlayerId, GameError> {
        self.ensure_configuring()?;
        self.ensure_free_seat()?;

        let id = PlayerId::new(self.players.len() as u8);
        let policy = ComputerPolicy::new(level, id.join_number());
        let name = policy.name().to_owned();
        self.players
            .push(Player::new(id, name, self.config.starting_cash, Box::new(policy)));
        Ok(id)
    }

    /// Seat a human player. `None` is an accepted no-op and returns
    /// `Ok(None)`.
    pub fn add_human_player(
        &mut self,
        human: Option<Box<dyn DecisionProvider>>,
    ) -> Result<Option<PlayerId>, GameError> {
        let Some(human) = human else {
            return Ok(None);
        };
        self.ensure_configuring()?;
        self.ensure_free_seat()?;

        let id = PlayerId::new(self.players.len() as u8);
        let name = human.name().to_owned();
        self.players
            .push(Player::new(id, name, self.config.starting_cash, human));
        Ok(Some(id))
    }

    fn ensure_configuring(&self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Configuring => Ok(()),
            _ => Err(GameError::MatchOver),
        }
    }

    fn ensure_free_seat(&self) -> Result<(), GameError> {
        if self.players.len() >= self.config.max_players {
            return Err(GameError::TooManyPlayers {
                max: self.config.max_players,
            });
        }
        Ok(())
    }

    // === Observation ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn registry(&self) -> &PropertyRegistry {
        &self.registry
    }

    /// All seated players, in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// One player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Count of players still taking turns.
    #[must_use]
    pub fn active_players(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Final standings, in join order.
    #[must_use]
    pub fn summaries(&self) -> Vec<PlayerSummary> {
        self.players
            .iter()
            .map(|p| PlayerSummary {
                name: p.name().to_owned(),
                cash: p.cash(),
                bankrupt: !p.is_active(),
                properties: p
                    .holdings()
                    .iter()
                    .map(|&id| self.registry.get(id).name().to_owned())
                    .collect(),
            })
            .collect()
    }

    // === The match ===

    /// Run at most `max_rounds` rounds; a round is one move per solvent
    /// player, in join order. Ends early once fewer than two players
    /// remain solvent. Prints a `Round <n>` marker at each round start
    /// and one summary line per player at the end.
    pub fn play(&mut self, max_rounds: u32) -> Result<(), GameError> {
        self.ensure_configuring()?;
        if self.die.is_none() {
            return Err(GameError::NoDie);
        }
        if self.players.len() < self.config.min_players {
            return Err(GameError::TooFewPlayers {
                min: self.config.min_players,
            });
        }
        self.phase = GamePhase::Running;

        'rounds: for round in 1..=max_rounds {
            if self.active_players() < 2 {
                break;
            }
            writeln!(self.sink, "Round {round}")?;

            for idx in 0..self.players.len() {
                if self.active_players() < 2 {
                    break 'rounds;
                }
                if !self.players[idx].is_active() {
                    continue;
                }
                self.take_turn(idx)?;
            }
        }

        self.phase = GamePhase::Finished;
        self.write_summaries()
    }

    fn take_turn(&mut self, idx: usize) -> Result<(), GameError> {
        let steps = match self.die.as_mut() {
            Some(die) => die.roll() as usize,
            None => return Err(GameError::NoDie),
        };
        let from = self.players[idx].position();
        let to = self.board.destination(from, steps);
        log::debug!(
            "{} rolls {}, moving {} -> {}",
            self.players[idx].name(),
            steps,
            from,
            to
        );

        for pos in self.board.passed_positions(from, steps) {
            self.pass_by(idx, pos);
            if !self.players[idx].is_active() {
                // Bankrupted mid-move; the landing effect never fires.
                return Ok(());
            }
        }

        self.players[idx].set_position(to);
        self.step_on(idx, to)
    }

    /// Pass-by effects. Only deposit fields react: the passer owes the
    /// field's toll into its pool.
    fn pass_by(&mut self, idx: usize, pos: usize) {
        if let FieldKind::Deposit { fee, .. } = self.board.field(pos).kind() {
            self.settle_obligation(idx, fee, Creditor::Pool(pos));
        }
    }

    /// Step-on effects: the single dispatch point over field kinds.
    fn step_on(&mut self, idx: usize, pos: usize) -> Result<(), GameError> {
        match self.board.field(pos).kind() {
            FieldKind::NoOp => {}
            FieldKind::Reward(amount) => {
                self.players[idx].earn(amount);
            }
            FieldKind::Punishment(fee) => {
                self.settle_obligation(idx, fee, Creditor::Bank);
            }
            FieldKind::Deposit { .. } => {
                let pool = self.board.drain_pool(pos);
                self.players[idx].earn(pool);
            }
            FieldKind::Property(id) => self.property_protocol(idx, id)?,
        }
        Ok(())
    }

    /// The purchase/commission protocol for a player landing on a
    /// property field.
    fn property_protocol(&mut self, idx: usize, id: PropertyId) -> Result<(), GameError> {
        let me = self.players[idx].id();
        let (name, price, commission, owner) = {
            let property = self.registry.get(id);
            (
                property.name().to_owned(),
                property.price(),
                property.commission(),
                property.owner(),
            )
        };

        match owner {
            None => {
                if !self.players[idx].decider_mut().want_buy(&name) {
                    return Ok(());
                }
                if self.players[idx].cash() < price {
                    self.raise_funds(idx, price);
                }
                if self.players[idx].cash() >= price {
                    self.players[idx].pay(price);
                    self.registry.take_over(id, me)?;
                    self.players[idx].acquire(id);
                    log::info!("{} buys {} for {}", self.players[idx].name(), name, price);
                } else {
                    // Nothing was owed to anyone; the purchase just
                    // doesn't happen.
                    log::debug!("{} abandons buying {}", self.players[idx].name(), name);
                }
            }
            Some(owner) if owner == me => {}
            Some(owner) => {
                self.settle_obligation(idx, commission, Creditor::Owner(owner.index()));
            }
        }
        Ok(())
    }

    /// Pay `amount` to `creditor`, running the shortfall protocol first
    /// if cash does not cover it. An obligation still uncovered after the
    /// protocol bankrupts the debtor; the creditor keeps the partial
    /// payment.
    fn settle_obligation(&mut self, idx: usize, amount: i64, creditor: Creditor) {
        if amount <= 0 {
            return;
        }
        if self.players[idx].cash() < amount {
            self.raise_funds(idx, amount);
        }

        if self.players[idx].cash() >= amount {
            self.players[idx].pay(amount);
            self.credit(creditor, amount);
        } else {
            let paid = self.players[idx].pay_up_to(amount);
            self.credit(creditor, paid);
            self.declare_bankrupt(idx);
        }
    }

    fn credit(&mut self, creditor: Creditor, amount: i64) {
        if amount == 0 {
            return;
        }
        match creditor {
            Creditor::Bank => {}
            Creditor::Owner(owner_idx) => self.players[owner_idx].earn(amount),
            Creditor::Pool(pos) => self.board.deposit_into(pos, amount),
        }
    }

    /// The liquidity-shortfall protocol: offer every held property for
    /// sale, in holding order, a full pass with no short-circuit. Agreed
    /// sales release ownership and credit half the purchase price.
    fn raise_funds(&mut self, idx: usize, needed: i64) {
        let gap = needed - self.players[idx].cash();
        log::debug!(
            "{} is short {} of the {} owed",
            self.players[idx].name(),
            gap,
            needed
        );

        let offers: Vec<PropertyId> = self.players[idx].holdings().to_vec();
        for id in offers {
            let name = self.registry.get(id).name().to_owned();
            if self.players[idx].decider_mut().want_sell(&name) {
                let proceeds = self.registry.get(id).price() / 2;
                self.registry.release(id);
                self.players[idx].drop_holding(id);
                self.players[idx].earn(proceeds);
                log::info!("{} sells {} for {}", self.players[idx].name(), name, proceeds);
            }
        }
    }

    /// One-way exit: release every held property and stop taking turns.
    fn declare_bankrupt(&mut self, idx: usize) {
        for id in self.players[idx].go_bankrupt() {
            self.registry.release(id);
        }
        log::info!("{} goes bankrupt", self.players[idx].name());
    }

    fn write_summaries(&mut self) -> Result<(), GameError> {
        let lines: Vec<String> = self.summaries().iter().map(ToString::to_string).collect();
        for line in lines {
            writeln!(self.sink, "{line}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("players", &self.players)
            .field("has_die", &self.die.is_some())
            .finish_non_exhaustive()
    }
}
