use crate::error::DrawError;
use crate::event::GameEvent;
use crate::result::{DrawResult, GameOutcome};
use crate::strategy;

use super::{Game, GameState, Side};

impl Game {
    fn ensure_turn(&self, side: Side) -> Result<(), DrawError> {
        match (*self.state.lock(), side) {
            (GameState::Over(_), _) => Err(DrawError::GameOver),
            (GameState::PlayerTurn, Side::Player) | (GameState::AiTurn, Side::Ai) => Ok(()),
            _ => Err(DrawError::NotYourTurn),
        }
    }

    /// Player action: draw the card at `index` from the AI's hand.
    ///
    /// The drawn card joins the player's hand, any pairs it completes are
    /// discarded, the terminal condition is checked, and the turn passes to
    /// the AI.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is the AI's turn, the AI's
    /// hand is empty, or `index` is out of range. A rejected draw changes
    /// nothing.
    ///
    /// # Panics
    ///
    /// Panics if the internal card accounting drifts, which indicates an
    /// engine bug.
    pub fn player_draw(&self, index: usize) -> Result<DrawResult, DrawError> {
        self.ensure_turn(Side::Player)?;
        self.apply_draw(Side::Player, index)
    }

    /// AI action: pick a card from the player's hand via the difficulty's
    /// strategy mix and draw it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is the player's turn, or the
    /// player's hand is empty. A rejected draw changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if the internal card accounting drifts, which indicates an
    /// engine bug.
    pub fn ai_draw(&self) -> Result<DrawResult, DrawError> {
        self.ensure_turn(Side::Ai)?;

        let index = {
            let player = self.player_hand.lock();
            if player.is_empty() {
                return Err(DrawError::EmptyOpponentHand);
            }
            let ai = self.ai_hand.lock();
            let mut rng = self.rng.lock();
            strategy::choose_draw_index(self.options.difficulty, &mut *rng, &ai, &player)
        };

        self.apply_draw(Side::Ai, index)
    }

    /// The draw transition shared by both sides. The caller has already
    /// checked that it is `side`'s turn.
    fn apply_draw(&self, side: Side, index: usize) -> Result<DrawResult, DrawError> {
        let (acting, opposing) = match side {
            Side::Player => (&self.player_hand, &self.ai_hand),
            Side::Ai => (&self.ai_hand, &self.player_hand),
        };

        let mut opponent = opposing.lock();
        if opponent.is_empty() {
            return Err(DrawError::EmptyOpponentHand);
        }
        let card = opponent.take_card(index).ok_or(DrawError::IndexOutOfRange)?;
        drop(opponent);

        let mut hand = acting.lock();
        hand.add_card(card);
        self.push_event(GameEvent::CardDrawn { side, card });

        let pairs = hand.discard_pairs();
        drop(hand);
        self.bank_pairs(side, &pairs);

        let outcome = self.check_terminal();
        if let Some(outcome) = outcome {
            *self.state.lock() = GameState::Over(outcome);
            self.push_event(GameEvent::GameEnded {
                winner: outcome.winner,
                loser_held_both_jokers: outcome.loser_held_both_jokers,
            });
        } else {
            *self.state.lock() = GameState::turn_of(side.opponent());
        }

        self.assert_card_conservation();

        Ok(DrawResult { card, pairs, outcome })
    }

    /// Whoever empties their hand wins; the loser's joker count is recorded
    /// as narrative flavor. The player-side check runs first, so in the
    /// (unreachable in normal play) case of both hands emptying at once the
    /// player takes the win.
    fn check_terminal(&self) -> Option<GameOutcome> {
        let player = self.player_hand.lock();
        let ai = self.ai_hand.lock();

        if player.is_empty() {
            Some(GameOutcome {
                winner: Side::Player,
                loser_held_both_jokers: ai.joker_count() == 2,
            })
        } else if ai.is_empty() {
            Some(GameOutcome {
                winner: Side::Ai,
                loser_held_both_jokers: player.joker_count() == 2,
            })
        } else {
            None
        }
    }
}
