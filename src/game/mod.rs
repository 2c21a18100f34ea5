//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, PACK_SIZE};
use crate::deck;
use crate::event::GameEvent;
use crate::hand::{Hand, Pair};
use crate::options::GameOptions;
use crate::result::GameOutcome;

mod draw;
pub mod state;

pub use state::{GameState, Side};

/// An Old Maid game session between the human player and the AI.
///
/// Constructing a [`Game`] builds and shuffles the pack, deals, resolves the
/// initial pairs in both hands, and hands the first turn to the player. From
/// there, [`player_draw`](Game::player_draw) and [`ai_draw`](Game::ai_draw)
/// are the only ways the state changes.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// The human player's hand.
    pub player_hand: Mutex<Hand>,
    /// The AI's hand. Its contents are hidden information: presentation
    /// layers must observe only its size (via [`Game::ai_card_count`]); the
    /// field is exposed for tests and trusted embedders.
    pub ai_hand: Mutex<Hand>,
    /// Pairs the player has discarded, flattened in formation order.
    pub player_discard: Mutex<Vec<Card>>,
    /// Pairs the AI has discarded, flattened in formation order.
    pub ai_discard: Mutex<Vec<Card>>,
    /// Events not yet drained by the presentation layer.
    events: Mutex<Vec<GameEvent>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new session with the given seed: builds and shuffles the
    /// pack, deals 27 cards to each side, resolves the initial pairs in the
    /// player's hand and then the AI's, and sets the player to draw first.
    ///
    /// The same options and seed always produce the same session.
    ///
    /// # Example
    ///
    /// ```
    /// use oldmaid::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = deck::shuffled(&deck::build_pack(), &mut rng);
        let (player_hand, ai_hand) = Hand::deal(cards);

        let game = Self {
            options,
            state: Mutex::new(GameState::PlayerTurn),
            player_hand: Mutex::new(player_hand),
            ai_hand: Mutex::new(ai_hand),
            player_discard: Mutex::new(Vec::new()),
            ai_discard: Mutex::new(Vec::new()),
            events: Mutex::new(Vec::new()),
            rng: Mutex::new(rng),
        };

        game.resolve_initial_pairs();
        game.assert_card_conservation();
        game
    }

    /// Starts a fresh game in place: rebuilds and reshuffles the pack from
    /// the session's RNG stream, re-deals, clears both discard piles and the
    /// event feed, and gives the first turn back to the player.
    pub fn reset(&self) {
        let mut rng = self.rng.lock();
        let cards = deck::shuffled(&deck::build_pack(), &mut *rng);
        drop(rng);
        let (player_hand, ai_hand) = Hand::deal(cards);

        *self.player_hand.lock() = player_hand;
        *self.ai_hand.lock() = ai_hand;
        self.player_discard.lock().clear();
        self.ai_discard.lock().clear();
        self.events.lock().clear();
        *self.state.lock() = GameState::PlayerTurn;

        self.resolve_initial_pairs();
        self.assert_card_conservation();
    }

    /// Runs pair resolution on both freshly dealt hands, player first.
    fn resolve_initial_pairs(&self) {
        for side in [Side::Player, Side::Ai] {
            let hand = match side {
                Side::Player => &self.player_hand,
                Side::Ai => &self.ai_hand,
            };
            let pairs = hand.lock().discard_pairs();
            self.bank_pairs(side, &pairs);
        }
    }

    /// Appends discarded pairs to `side`'s pile and emits one event per pair.
    fn bank_pairs(&self, side: Side, pairs: &[Pair]) {
        let pile = match side {
            Side::Player => &self.player_discard,
            Side::Ai => &self.ai_discard,
        };
        let mut pile = pile.lock();
        for pair in pairs {
            pile.extend_from_slice(&pair.cards);
            self.push_event(GameEvent::PairDiscarded { side, pair: *pair });
        }
    }

    fn push_event(&self, event: GameEvent) {
        self.events.lock().push(event);
    }

    /// Checks that every card of the pack is still accounted for across the
    /// two hands and two discard piles. Drift means an engine bug; the
    /// session must not continue with cards unaccounted for.
    fn assert_card_conservation(&self) {
        let tracked = self.player_hand.lock().len()
            + self.ai_hand.lock().len()
            + self.player_discard.lock().len()
            + self.ai_discard.lock().len();
        assert_eq!(
            tracked, PACK_SIZE,
            "card accounting drifted: {tracked} of {PACK_SIZE} cards tracked"
        );
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// The side whose turn it is, or `None` once the game is over.
    pub fn turn(&self) -> Option<Side> {
        self.state().turn()
    }

    /// Returns whether the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.state(), GameState::Over(_))
    }

    /// The final outcome, once the game has ended.
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.state() {
            GameState::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The player's cards, in hand order.
    pub fn player_cards(&self) -> Vec<Card> {
        self.player_hand.lock().cards().to_vec()
    }

    /// Number of cards in the player's hand.
    pub fn player_card_count(&self) -> usize {
        self.player_hand.lock().len()
    }

    /// Number of cards in the AI's hand. This is all a presentation layer
    /// may know about the AI's hand.
    pub fn ai_card_count(&self) -> usize {
        self.ai_hand.lock().len()
    }

    /// The player's discard pile, in the order pairs were formed.
    pub fn player_discard_cards(&self) -> Vec<Card> {
        self.player_discard.lock().clone()
    }

    /// The AI's discard pile, in the order pairs were formed.
    pub fn ai_discard_cards(&self) -> Vec<Card> {
        self.ai_discard.lock().clone()
    }

    /// Drains and returns every event emitted since the last drain, in
    /// emission order.
    pub fn drain_events(&self) -> Vec<GameEvent> {
        core::mem::take(&mut *self.events.lock())
    }
}
