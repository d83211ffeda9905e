//! Money-protocol tests: purchases, commissions, shortfalls, deposits and
//! bankruptcies, driven through full engine turns with scripted players
//! and sequenced dice.

use board_tycoon::board::{BoardBuilder, FieldKind};
use board_tycoon::core::{PlayerId, SequenceDie};
use board_tycoon::engine::{EngineConfig, GameEngine};
use board_tycoon::strategy::ScriptedProvider;

fn engine_with(
    builder: BoardBuilder,
    config: EngineConfig,
    rolls: Vec<u32>,
    players: Vec<ScriptedProvider>,
) -> GameEngine {
    let (board, registry) = builder.build();
    let mut engine = GameEngine::with_config(board, registry, config).with_output(Vec::new());
    engine.set_die(Some(Box::new(SequenceDie::new(rolls))));
    for player in players {
        engine.add_human_player(Some(Box::new(player))).unwrap();
    }
    engine
}

/// Unowned real estate priced 200, buyer cash 500, `want_buy` true: cash
/// drops to 300 and ownership transfers.
#[test]
fn test_purchase_transfers_ownership_and_cash() {
    let board = BoardBuilder::new()
        .no_op("Start")
        .real_estate("Mill", 200, 25)
        .no_op("Meadow");
    let mut engine = engine_with(
        board,
        EngineConfig::default().with_starting_cash(500),
        vec![1, 2],
        vec![
            ScriptedProvider::new("Alice").with_buys([true]),
            ScriptedProvider::new("Bob"),
        ],
    );

    engine.play(1).unwrap();

    let alice = engine.player(PlayerId::new(0));
    assert_eq!(alice.cash(), 300);
    assert_eq!(alice.holdings().len(), 1);

    let mill = engine.registry().find("Mill").unwrap();
    assert_eq!(engine.registry().get(mill).owner(), Some(PlayerId::new(0)));
}

/// A non-owner landing on an owned property pays the owner the
/// commission.
#[test]
fn test_commission_flows_to_owner() {
    let board = BoardBuilder::new()
        .no_op("Start")
        .real_estate("Mill", 200, 25)
        .no_op("Meadow")
        .no_op("Shore");
    let mut engine = engine_with(
        board,
        EngineConfig::default().with_starting_cash(500),
        // Round 1: Alice lands Mill (buys), Bob lands Meadow.
        // Round 2: Alice lands Shore, Bob lands Mill (owes 50).
        vec![1, 2, 2, 3],
        vec![
            ScriptedProvider::new("Alice").with_buys([true]),
            ScriptedProvider::new("Bob"),
        ],
    );

    engine.play(2).unwrap();

    assert_eq!(engine.player(PlayerId::new(0)).cash(), 350);
    assert_eq!(engine.player(PlayerId::new(1)).cash(), 450);
}

/// Landing on one's own property changes nothing.
#[test]
fn test_self_landing_is_idempotent() {
    let board = BoardBuilder::new().no_op("Start").real_estate("Mill", 100, 25);
    let mut engine = engine_with(
        board,
        EngineConfig::default().with_starting_cash(500),
        // Round 1: Alice buys Mill, Bob laps back to Start.
        // Round 2: Alice laps back onto her own Mill, Bob laps again.
        vec![1, 2, 2, 2],
        vec![
            ScriptedProvider::new("Alice").with_buys([true]),
            ScriptedProvider::new("Bob"),
        ],
    );

    engine.play(2).unwrap();

    let alice = engine.player(PlayerId::new(0));
    assert_eq!(alice.cash(), 400);
    assert_eq!(alice.holdings().len(), 1);
    assert_eq!(engine.player(PlayerId::new(1)).cash(), 500);
}

/// Shortfall with no consenting sale: the debtor pays what they can, goes
/// bankrupt, and every held property returns to the unowned pool.
#[test]
fn test_unresolved_commission_bankrupts_the_debtor() {
    let board = BoardBuilder::new()
        .no_op("Start")
        .real_estate("Mill", 200, 25)
        .public_property("Pond", 60, 10)
        .no_op("Meadow")
        .punishment("Swamp", 170)
        .no_op("Shore");
    let mut engine = engine_with(
        board,
        EngineConfig::default().with_starting_cash(260),
        // Round 1: Alice buys Mill (cash 60), Bob buys Pond (cash 200).
        // Round 2: Alice to Shore, Bob hits Swamp (cash 30).
        // Round 3: Alice laps to Start, Bob lands Mill owing 50 with 30.
        vec![1, 2, 4, 2, 1, 3],
        vec![
            ScriptedProvider::new("Alice").with_buys([true]),
            ScriptedProvider::new("Bob").with_buys([true]).with_sells([false]),
        ],
    );

    engine.play(10).unwrap();

    let bob = engine.player(PlayerId::new(1));
    assert!(!bob.is_active());
    assert_eq!(bob.cash(), 0);
    assert!(bob.holdings().is_empty());

    // The partial payment went to the owner; Bob's Pond is unowned again.
    assert_eq!(engine.player(PlayerId::new(0)).cash(), 90);
    let pond = engine.registry().find("Pond").unwrap();
    assert_eq!(engine.registry().get(pond).owner(), None);
}

/// Same shortfall, but the debtor consents to sell: the sale releases
/// ownership at half price and the commission is then paid in full.
#[test]
fn test_sale_resolves_the_shortfall() {
    let board = BoardBuilder::new()
        .no_op("Start")
        .real_estate("Mill", 200, 25)
        .public_property("Pond", 60, 10)
        .no_op("Meadow")
        .punishment("Swamp", 170)
        .no_op("Shore");
    let mut engine = engine_with(
        board,
        EngineConfig::default().with_starting_cash(260),
        vec![1, 2, 4, 2, 1, 3],
        vec![
            ScriptedProvider::new("Alice").with_buys([true]),
            ScriptedProvider::new("Bob").with_buys([true]).with_sells([true]),
        ],
    );

    engine.play(3).unwrap();

    // Pond sold for 30: cash 30 + 30 = 60, commission 50 paid in full.
    let bob = engine.player(PlayerId::new(1));
    assert!(bob.is_active());
    assert_eq!(bob.cash(), 10);
    assert!(bob.holdings().is_empty());

    assert_eq!(engine.player(PlayerId::new(0)).cash(), 110);
    let pond = engine.registry().find("Pond").unwrap();
    assert_eq!(engine.registry().get(pond).owner(), None);
}

/// The shortfall pass offers every held property, in holding order, even
/// after an early sale has already covered the obligation — no
/// short-circuit.
#[test]
fn test_shortfall_pass_offers_every_property() {
    let board = BoardBuilder::new()
        .no_op("Start")
        .real_estate("Mill", 200, 80)
        .public_property("Pond", 100, 10)
        .public_property("Grove", 80, 10)
        .no_op("Shore")
        .no_op("Dune");
    let mut engine = engine_with(
        board,
        EngineConfig::default().with_starting_cash(300),
        // Round 1: Alice buys Mill (cash 100), Bob buys Pond (cash 200).
        // Round 2: Alice to Shore, Bob buys Grove (cash 120).
        // Round 3: Alice to Dune, Bob lands Mill owing 160 with 120.
        vec![1, 2, 3, 1, 1, 4],
        vec![
            ScriptedProvider::new("Alice").with_buys([true]),
            ScriptedProvider::new("Bob")
                .with_buys([true, true])
                .with_sells([true, true]),
        ],
    );

    engine.play(3).unwrap();

    // Selling Pond alone (100 / 2 = 50) already covers the 160: cash 170.
    // Grove is still offered and sold (80 / 2 = 40), then the commission
    // is paid: 120 + 50 + 40 - 160 = 50.
    let bob = engine.player(PlayerId::new(1));
    assert!(bob.is_active());
    assert!(bob.holdings().is_empty());
    assert_eq!(bob.cash(), 50);

    for name in ["Pond", "Grove"] {
        let id = engine.registry().find(name).unwrap();
        assert_eq!(engine.registry().get(id).owner(), None);
    }
    assert_eq!(engine.player(PlayerId::new(0)).cash(), 260);
}

/// A purchase the shortfall pass cannot fund is abandoned, not an error
/// and not a bankruptcy.
#[test]
fn test_unfunded_purchase_is_abandoned() {
    let board = BoardBuilder::new().no_op("Start").real_estate("Mill", 200, 25).no_op("Meadow");
    let mut engine = engine_with(
        board,
        EngineConfig::default().with_starting_cash(100),
        vec![1, 2],
        vec![
            ScriptedProvider::new("Alice").with_buys([true]),
            ScriptedProvider::new("Bob"),
        ],
    );

    engine.play(1).unwrap();

    let alice = engine.player(PlayerId::new(0));
    assert!(alice.is_active());
    assert_eq!(alice.cash(), 100);
    assert!(alice.holdings().is_empty());

    let mill = engine.registry().find("Mill").unwrap();
    assert_eq!(engine.registry().get(mill).owner(), None);
}

/// Reward fields credit the lander; punishment fees go to the bank.
#[test]
fn test_reward_and_punishment() {
    let board = BoardBuilder::new()
        .no_op("Start")
        .reward("Spring", 120)
        .punishment("Swamp", 80);
    let mut engine = engine_with(
        board,
        EngineConfig::default().with_starting_cash(500),
        vec![1, 2],
        vec![ScriptedProvider::new("Alice"), ScriptedProvider::new("Bob")],
    );

    engine.play(1).unwrap();

    assert_eq!(engine.player(PlayerId::new(0)).cash(), 620);
    assert_eq!(engine.player(PlayerId::new(1)).cash(), 420);
}

/// Passing a deposit field pays the toll into its pool; landing on it
/// collects the whole pool and resets it.
#[test]
fn test_deposit_pool_roundtrip() {
    let board = BoardBuilder::new().no_op("Start").deposit("Well", 15).no_op("Meadow");
    let mut engine = engine_with(
        board,
        EngineConfig::default().with_starting_cash(500),
        // Alice passes the Well (pays 15 in), Bob lands on it (takes 15).
        vec![2, 1],
        vec![ScriptedProvider::new("Alice"), ScriptedProvider::new("Bob")],
    );

    engine.play(1).unwrap();

    assert_eq!(engine.player(PlayerId::new(0)).cash(), 485);
    assert_eq!(engine.player(PlayerId::new(1)).cash(), 515);
    assert_eq!(
        engine.board().field(1).kind(),
        FieldKind::Deposit { fee: 15, pool: 0 }
    );
}

/// Every owned property appears in exactly its owner's holdings, and each
/// has at most one owner.
#[test]
fn test_ownership_bookkeeping_consistent() {
    let board = BoardBuilder::new()
        .no_op("Start")
        .real_estate("Mill", 100, 25)
        .public_property("Pond", 80, 10)
        .real_estate("Grove", 120, 20);
    let mut engine = engine_with(
        board,
        EngineConfig::default().with_starting_cash(500),
        vec![1, 2, 2, 1],
        vec![
            ScriptedProvider::new("Alice").with_buys([true, true]),
            ScriptedProvider::new("Bob").with_buys([true, true]),
        ],
    );

    engine.play(2).unwrap();

    for (id, property) in engine.registry().iter() {
        match property.owner() {
            Some(owner) => {
                let holder = engine.player(owner);
                assert!(holder.holdings().contains(&id));
                // Nobody else lists it.
                for other in engine.players().iter().filter(|p| p.id() != owner) {
                    assert!(!other.holdings().contains(&id));
                }
            }
            None => {
                for player in engine.players() {
                    assert!(!player.holdings().contains(&id));
                }
            }
        }
    }
}
