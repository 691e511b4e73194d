use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, event};

use crate::core::{Card, Deck, Rankable, Ranking, Suit, Value};
use crate::table::action::{Action, ActionOutcome, IllegalAction};

/// Heads-up tables always seat exactly two.
const NUM_PLAYERS: usize = 2;

/// Marker in the round bets for a seat that has folded.
pub const FOLDED: i32 = -1;

/// The dealing stages of a hand.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Which street a board with this many cards is on.
    pub fn of_board(cards_dealt: usize) -> Self {
        match cards_dealt {
            0..=2 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }
}

/// Table stakes and the policy knobs for a match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameConfig {
    pub starting_stack: i32,
    pub small_blind: i32,
    pub big_blind: i32,
    /// Where the odd chip of a split pot goes. True sends
    /// it to the small blind, false to the first winner in
    /// seat order.
    pub odd_chip_to_small_blind: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            starting_stack: 7500,
            small_blind: 50,
            big_blind: 100,
            odd_chip_to_small_blind: true,
        }
    }
}

/// Chips swept in from completed betting rounds along with
/// the seats still eligible to win them. Heads-up play only
/// ever needs the one main pot.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Pot {
    pub value: i32,
    pub eligible: Vec<usize>,
}

impl Pot {
    fn new(eligible: Vec<usize>) -> Self {
        Pot { value: 0, eligible }
    }

    fn remove(&mut self, seat: usize) {
        self.eligible.retain(|s| *s != seat);
    }

    /// Can this seat still win the pot?
    pub fn is_eligible(&self, seat: usize) -> bool {
        self.eligible.contains(&seat)
    }
}

/// The slice of the table a bot is allowed to see when it
/// acts. It carries the viewer's own hole cards and nothing
/// of the opponent's.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerView {
    /// The seat this view was built for.
    pub seat: usize,
    pub to_act_idx: usize,
    pub small_blind_idx: usize,
    pub names: [String; 2],
    pub hole_cards: [Card; 2],
    pub stacks: [i32; 2],
    /// Chips each seat has in front of it this round, with
    /// [`FOLDED`] marking a folded seat.
    pub round_bets: [i32; 2],
    pub board: Vec<Card>,
    pub pots: Vec<Pot>,
    pub small_blind: i32,
    pub big_blind: i32,
}

impl PlayerView {
    /// Chips the viewer has behind.
    pub fn my_stack(&self) -> i32 {
        self.stacks[self.seat]
    }

    /// Chips the viewer has in front of it this round.
    pub fn my_bet(&self) -> i32 {
        self.round_bets[self.seat]
    }

    /// The largest live bet of the current round.
    pub fn max_bet(&self) -> i32 {
        self.round_bets
            .iter()
            .copied()
            .filter(|b| *b != FOLDED)
            .max()
            .unwrap_or(0)
    }

    /// Extra chips the viewer needs to match the max bet.
    pub fn to_call(&self) -> i32 {
        self.max_bet() - self.my_bet()
    }

    /// Is a bet of zero a legal check here?
    pub fn can_check(&self) -> bool {
        self.to_call() == 0
    }

    /// Every chip in play for this hand: swept pots plus the
    /// live bets of the current round.
    pub fn pot_total(&self) -> i32 {
        let swept: i32 = self.pots.iter().map(|p| p.value).sum();
        let live: i32 = self.round_bets.iter().copied().filter(|b| *b > 0).sum();
        swept + live
    }

    /// Which street the hand is on.
    pub fn street(&self) -> Street {
        Street::of_board(self.board.len())
    }
}

/// The authoritative state of one heads-up match. It deals,
/// posts blinds, prompts the seat in turn, referees every
/// action, and plays hand after hand until one stack is
/// gone. Illegal actions never wedge it: they are folds.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    names: [String; 2],
    rng: StdRng,
    deck: Deck,
    hole_cards: [[Card; 2]; 2],
    board: Vec<Card>,
    stacks: [i32; 2],
    settled_stacks: [i32; 2],
    round_bets: [i32; 2],
    pots: Vec<Pot>,
    small_blind_idx: usize,
    to_act_idx: usize,
    actions_this_round: u32,
    hands_played: u32,
    game_over: bool,
    winner: Option<usize>,
}

impl Game {
    /// Start a match dealt from an OS seeded shuffle.
    pub fn new(names: [String; 2], config: GameConfig) -> Self {
        Self::with_rng(names, config, StdRng::from_os_rng())
    }

    /// Start a match dealt from the given rng so the whole
    /// match can be replayed.
    pub fn with_rng(names: [String; 2], config: GameConfig, rng: StdRng) -> Self {
        let mut game = Game {
            stacks: [config.starting_stack; 2],
            settled_stacks: [config.starting_stack; 2],
            config,
            names,
            rng,
            deck: Deck::default(),
            // Placeholders, replaced by the first deal below.
            hole_cards: [[Card::new(Value::Two, Suit::Spade); 2]; 2],
            board: Vec::with_capacity(5),
            round_bets: [0; 2],
            pots: Vec::new(),
            small_blind_idx: 0,
            to_act_idx: 0,
            actions_this_round: 0,
            hands_played: 0,
            game_over: false,
            winner: None,
        };
        game.start_new_hand();
        game
    }

    /// The seat that must act next.
    pub fn to_act(&self) -> usize {
        self.to_act_idx
    }

    /// The seat posting the small blind this hand. Heads-up
    /// that seat is also the button and opens every street.
    pub fn small_blind_idx(&self) -> usize {
        self.small_blind_idx
    }

    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stacks(&self) -> [i32; 2] {
        self.stacks
    }

    /// Stacks as the last completed hand left them. The live
    /// [`stacks`](Self::stacks) are already short the next
    /// hand's blinds, so match results read from here.
    pub fn settled_stacks(&self) -> [i32; 2] {
        self.settled_stacks
    }

    pub fn round_bets(&self) -> [i32; 2] {
        self.round_bets
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn street(&self) -> Street {
        Street::of_board(self.board.len())
    }

    pub fn hole_cards(&self, seat: usize) -> [Card; 2] {
        self.hole_cards[seat]
    }

    /// Hands fully resolved so far.
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The winning seat once the match is over.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Every chip the table knows about: stacks, live bets,
    /// and swept pots. Stays at twice the starting stack for
    /// the whole match.
    pub fn total_chips(&self) -> i32 {
        let stacks: i32 = self.stacks.iter().sum();
        let bets: i32 = self.round_bets.iter().copied().filter(|b| *b > 0).sum();
        let pots: i32 = self.pots.iter().map(|p| p.value).sum();
        stacks + bets + pots
    }

    /// Build the view the given seat is allowed to see.
    pub fn player_view(&self, seat: usize) -> PlayerView {
        PlayerView {
            seat,
            to_act_idx: self.to_act_idx,
            small_blind_idx: self.small_blind_idx,
            names: self.names.clone(),
            hole_cards: self.hole_cards[seat],
            stacks: self.stacks,
            round_bets: self.round_bets,
            board: self.board.clone(),
            pots: self.pots.clone(),
            small_blind: self.config.small_blind,
            big_blind: self.config.big_blind,
        }
    }

    /// Apply the integer form of an action for the seat in
    /// turn: -1 folds, anything else bets that many chips.
    pub fn apply_raise_size(&mut self, raise_size: i32) -> ActionOutcome {
        self.apply_action(Action::from_raise_size(raise_size))
    }

    /// Apply an action for the seat in turn. An illegal
    /// action folds the seat and says so in the outcome, so
    /// this can never fail and never stalls the match.
    pub fn apply_action(&mut self, action: Action) -> ActionOutcome {
        debug_assert!(!self.game_over, "action applied to a finished match");
        if self.game_over {
            return ActionOutcome::Folded;
        }

        let idx = self.to_act_idx;
        let (action, outcome) = match self.validate(action) {
            Ok(outcome) => (action, outcome),
            Err(reason) => {
                event!(Level::DEBUG, seat = idx, %reason, "auto_fold");
                (Action::Fold, ActionOutcome::AutoFolded(reason))
            }
        };

        // Folds count towards the round's action tally too.
        self.actions_this_round += 1;
        event!(Level::DEBUG, seat = idx, %outcome, "action");

        match action {
            Action::Fold => self.fold(idx),
            Action::Bet(amount) => self.bet(idx, amount),
        }
        outcome
    }

    /// Check an action for the seat in turn against the
    /// betting rules without applying it.
    fn validate(&self, action: Action) -> Result<ActionOutcome, IllegalAction> {
        let amount = match action {
            Action::Fold => return Ok(ActionOutcome::Folded),
            Action::Bet(amount) => amount,
        };
        if amount < 0 {
            return Err(IllegalAction::NegativeBet);
        }
        let available = self.stacks[self.to_act_idx];
        if amount > available {
            return Err(IllegalAction::NotEnoughChips { amount, available });
        }

        let max_bet = self.max_bet();
        let current = self.round_bets[self.to_act_idx];
        let total = current + amount;
        if total == max_bet {
            return Ok(if amount == 0 {
                ActionOutcome::Checked
            } else if amount == available {
                ActionOutcome::AllIn(amount)
            } else {
                ActionOutcome::Called(amount)
            });
        }
        if amount == 0 {
            return Err(IllegalAction::CannotCheck {
                to_call: max_bet - current,
            });
        }
        // The whole stack is always a legal bet, even when it
        // cannot cover the call.
        if amount == available {
            return Ok(ActionOutcome::AllIn(amount));
        }
        let min_total = max_bet * 2;
        if total >= min_total {
            return Ok(ActionOutcome::Raised { to: total });
        }
        Err(IllegalAction::RaiseTooSmall {
            total,
            max_bet,
            min_total,
        })
    }

    fn max_bet(&self) -> i32 {
        self.round_bets
            .iter()
            .copied()
            .filter(|b| *b != FOLDED)
            .max()
            .unwrap_or(0)
    }

    fn fold(&mut self, idx: usize) {
        // The folded seat's pending chips stay in play. Sweep
        // them now so the pot keeps every chip of the hand.
        let pending = self.round_bets[idx];
        if pending > 0 {
            self.pots[0].value += pending;
        }
        self.round_bets[idx] = FOLDED;
        for pot in &mut self.pots {
            pot.remove(idx);
        }
        if !self.resolve_fold_win() {
            self.advance_action();
        }
    }

    fn bet(&mut self, idx: usize, amount: i32) {
        self.stacks[idx] -= amount;
        self.round_bets[idx] += amount;
        self.advance_action();
        if self.round_complete() {
            self.complete_round();
        }
    }

    /// When only one seat is left in the hand it takes the
    /// pot at once, no showdown. Answers whether that fired.
    fn resolve_fold_win(&mut self) -> bool {
        let survivors: Vec<usize> = (0..NUM_PLAYERS)
            .filter(|i| self.round_bets[*i] != FOLDED)
            .collect();
        if survivors.len() != 1 {
            return false;
        }
        let winner = survivors[0];
        self.sweep_bets();
        self.award_pots(winner);
        event!(Level::DEBUG, winner, "fold_win");
        self.finish_hand();
        true
    }

    fn seat_can_act(&self, seat: usize) -> bool {
        self.round_bets[seat] != FOLDED && self.stacks[seat] > 0
    }

    fn advance_action(&mut self) {
        self.move_action_to(1 - self.to_act_idx);
    }

    /// Postflop the small blind opens the betting.
    fn set_postflop_action(&mut self) {
        self.move_action_to(self.small_blind_idx);
    }

    fn move_action_to(&mut self, start: usize) {
        self.to_act_idx = start;
        // Skip seats that folded or are all-in, but never
        // spin when nobody is left to act.
        let mut skipped = 0;
        while !self.seat_can_act(self.to_act_idx) && skipped < NUM_PLAYERS {
            self.to_act_idx = 1 - self.to_act_idx;
            skipped += 1;
        }
    }

    /// Has the current betting round settled? Everyone still
    /// in must have matched the max bet or be all-in, at
    /// least two actions must be in, and preflop the big
    /// blind keeps its option even when the opener just
    /// calls.
    fn round_complete(&self) -> bool {
        let active = (0..NUM_PLAYERS)
            .filter(|i| self.round_bets[*i] != FOLDED)
            .count();
        if active <= 1 {
            return true;
        }

        // After one preflop action with the big blind still
        // sitting on exactly the blind, the opener has only
        // called and the big blind still gets to act.
        if self.board.is_empty() && self.actions_this_round == 1 {
            let bb = 1 - self.small_blind_idx;
            if self.round_bets[bb] == self.config.big_blind {
                return false;
            }
        }
        if self.actions_this_round < 2 {
            return false;
        }

        let max_bet = self.max_bet();
        (0..NUM_PLAYERS).all(|i| {
            let bet = self.round_bets[i];
            bet == FOLDED || bet == max_bet || self.stacks[i] == 0
        })
    }

    /// Move every live bet into the pot. Folded markers stay.
    fn sweep_bets(&mut self) {
        for i in 0..NUM_PLAYERS {
            if self.round_bets[i] > 0 {
                self.pots[0].value += self.round_bets[i];
                self.round_bets[i] = 0;
            }
        }
    }

    fn complete_round(&mut self) {
        self.actions_this_round = 0;
        self.sweep_bets();
        event!(
            Level::DEBUG,
            pot = self.pots[0].value,
            street = ?self.street(),
            "round_complete"
        );

        // With a seat all-in there are no decisions left, so
        // run the board out and show the hands down.
        let any_all_in =
            (0..NUM_PLAYERS).any(|i| self.round_bets[i] != FOLDED && self.stacks[i] == 0);
        if any_all_in {
            while self.board.len() < 5 {
                let card = self.next_card();
                self.board.push(card);
            }
            self.log_board();
            self.showdown();
            return;
        }

        match self.board.len() {
            0 => {
                self.deal_board(3);
                self.set_postflop_action();
            }
            3 | 4 => {
                self.deal_board(1);
                self.set_postflop_action();
            }
            _ => self.showdown(),
        }
    }

    fn deal_board(&mut self, n: usize) {
        for _ in 0..n {
            let card = self.next_card();
            self.board.push(card);
        }
        self.log_board();
    }

    fn log_board(&self) {
        let board: String = self.board.iter().map(|c| c.to_string()).collect();
        event!(Level::DEBUG, street = ?self.street(), %board, "board_dealt");
    }

    fn next_card(&mut self) -> Card {
        // Nine cards at most leave the deck in one hand.
        self.deck.deal().expect("a fresh deck covers a full hand")
    }

    /// Rank both live hands over the board and split the pot
    /// between the best of them.
    fn showdown(&mut self) {
        let eligible = self.pots[0].eligible.clone();
        if let [only] = eligible[..] {
            self.award_pots(only);
            self.finish_hand();
            return;
        }

        let mut winners: Vec<usize> = Vec::new();
        let mut best: Option<Ranking> = None;
        for seat in eligible {
            let mut cards = self.board.clone();
            cards.extend(self.hole_cards[seat]);
            let ranking = cards.rank().expect("dealt cards never repeat");
            event!(Level::DEBUG, seat, rank = %ranking.rank, "showdown");
            match best {
                Some(current) if ranking > current => {
                    winners.clear();
                    winners.push(seat);
                    best = Some(ranking);
                }
                Some(current) if ranking == current => winners.push(seat),
                None => {
                    winners.push(seat);
                    best = Some(ranking);
                }
                Some(_) => {}
            }
        }
        self.award_split(&winners);
        self.finish_hand();
    }

    /// Drain every pot and answer the total.
    fn take_pots(&mut self) -> i32 {
        let mut total = 0;
        for pot in &mut self.pots {
            total += pot.value;
            pot.value = 0;
        }
        total
    }

    fn award_pots(&mut self, winner: usize) {
        let total = self.take_pots();
        self.stacks[winner] += total;
        event!(Level::DEBUG, winner, pot = total, "pot_awarded");
    }

    fn award_split(&mut self, winners: &[usize]) {
        let pot = self.take_pots();
        let share = pot / winners.len() as i32;
        for &seat in winners {
            self.stacks[seat] += share;
        }
        let remainder = pot % winners.len() as i32;
        if remainder > 0 {
            let lucky = if self.config.odd_chip_to_small_blind
                && winners.contains(&self.small_blind_idx)
            {
                self.small_blind_idx
            } else {
                winners[0]
            };
            self.stacks[lucky] += remainder;
        }
        event!(Level::DEBUG, pot, ?winners, "pot_split");
    }

    /// Close out a resolved hand: bank the settled stacks,
    /// then either end the match on an empty stack or rotate
    /// the button and deal.
    fn finish_hand(&mut self) {
        // Every pot is awarded and every bet swept here, so
        // the stacks hold the whole bankroll.
        self.settled_stacks = self.stacks;
        self.hands_played += 1;
        if let Some(loser) = (0..NUM_PLAYERS).find(|i| self.stacks[*i] <= 0) {
            self.game_over = true;
            self.winner = Some(1 - loser);
            event!(
                Level::INFO,
                winner = 1 - loser,
                hands = self.hands_played,
                "match_over"
            );
            return;
        }
        self.small_blind_idx = 1 - self.small_blind_idx;
        self.start_new_hand();
    }

    fn start_new_hand(&mut self) {
        self.deck = Deck::default();
        self.deck.shuffle(&mut self.rng);
        self.hole_cards = [
            [self.next_card(), self.next_card()],
            [self.next_card(), self.next_card()],
        ];
        self.board.clear();
        self.round_bets = [0; 2];
        self.pots = vec![Pot::new(vec![0, 1])];
        self.actions_this_round = 0;
        self.post_blinds();
    }

    /// Blinds cap at the stack, so a short seat can be
    /// all-in before any card is looked at.
    fn post_blinds(&mut self) {
        let sb = self.small_blind_idx;
        let bb = 1 - sb;
        let sb_amount = self.config.small_blind.min(self.stacks[sb]);
        self.stacks[sb] -= sb_amount;
        self.round_bets[sb] = sb_amount;
        let bb_amount = self.config.big_blind.min(self.stacks[bb]);
        self.stacks[bb] -= bb_amount;
        self.round_bets[bb] = bb_amount;
        // Heads-up the small blind opens preflop as well.
        self.to_act_idx = sb;
        event!(
            Level::DEBUG,
            hand = self.hands_played + 1,
            sb,
            sb_amount,
            bb_amount,
            "blinds_posted"
        );
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn test_game(config: GameConfig, seed: u64) -> Game {
        Game::with_rng(
            ["one".to_string(), "two".to_string()],
            config,
            StdRng::seed_from_u64(seed),
        )
    }

    fn small_stakes() -> GameConfig {
        GameConfig {
            starting_stack: 1000,
            small_blind: 5,
            big_blind: 10,
            odd_chip_to_small_blind: true,
        }
    }

    #[test_log::test]
    fn test_new_hand_posts_blinds() {
        let game = test_game(GameConfig::default(), 42);
        assert_eq!(0, game.small_blind_idx());
        assert_eq!(0, game.to_act());
        assert_eq!([50, 100], game.round_bets());
        assert_eq!([7450, 7400], game.stacks());
        assert!(game.board().is_empty());
        assert_eq!(Street::Preflop, game.street());
        assert_eq!(15_000, game.total_chips());
    }

    #[test_log::test]
    fn test_view_hides_opponent_cards() {
        let game = test_game(GameConfig::default(), 7);
        let view = game.player_view(1);
        assert_eq!(1, view.seat);
        assert_eq!(game.hole_cards(1), view.hole_cards);
        assert_eq!(150, view.pot_total());
        assert_eq!(0, view.to_call());
        assert!(view.can_check());
        let opener = game.player_view(0);
        assert_eq!(50, opener.to_call());
        assert!(!opener.can_check());
    }

    #[test_log::test]
    fn test_big_blind_gets_its_option() {
        let mut game = test_game(small_stakes(), 11);
        let outcome = game.apply_action(Action::Bet(5));
        assert_eq!(ActionOutcome::Called(5), outcome);
        // The opener only called, so the hand must still be
        // preflop with the big blind to act.
        assert!(game.board().is_empty());
        assert_eq!(1, game.to_act());

        let outcome = game.apply_action(Action::Bet(0));
        assert_eq!(ActionOutcome::Checked, outcome);
        assert_eq!(3, game.board().len());
        assert_eq!(0, game.to_act());
        assert_eq!(20, game.player_view(0).pot_total());
    }

    #[test_log::test]
    fn test_big_blind_can_raise_its_option() {
        let mut game = test_game(small_stakes(), 11);
        game.apply_action(Action::Bet(5));
        let outcome = game.apply_action(Action::Bet(15));
        assert_eq!(ActionOutcome::Raised { to: 25 }, outcome);
        assert!(game.board().is_empty());
        assert_eq!(0, game.to_act());
        assert_eq!(15, game.player_view(0).to_call());
    }

    #[test_log::test]
    fn test_fold_ends_hand_and_rotates_button() {
        let mut game = test_game(GameConfig::default(), 3);
        game.apply_action(Action::Bet(50));
        let outcome = game.apply_action(Action::Bet(300));
        assert_eq!(ActionOutcome::Raised { to: 400 }, outcome);
        let outcome = game.apply_action(Action::Fold);
        assert_eq!(ActionOutcome::Folded, outcome);

        assert_eq!(1, game.hands_played());
        assert!(!game.is_over());
        // Seat one won 500 and now posts the small blind of
        // the next hand.
        assert_eq!(1, game.small_blind_idx());
        assert_eq!([7400, 7600], game.settled_stacks());
        assert_eq!([7300, 7550], game.stacks());
        assert_eq!([100, 50], game.round_bets());
        assert_eq!(15_000, game.total_chips());
    }

    #[test_log::test]
    fn test_under_raise_is_auto_folded() {
        let mut game = test_game(small_stakes(), 9);
        // Total of 15 neither calls 10 nor reaches 20.
        let outcome = game.apply_action(Action::Bet(10));
        assert_eq!(
            ActionOutcome::AutoFolded(IllegalAction::RaiseTooSmall {
                total: 15,
                max_bet: 10,
                min_total: 20,
            }),
            outcome
        );
        // Seat one took the 15 in blinds and now posts the
        // small blind of the next hand.
        assert_eq!(1, game.hands_played());
        assert_eq!([985, 1000], game.stacks());
        assert_eq!([10, 5], game.round_bets());
    }

    #[test_log::test]
    fn test_overbet_of_stack_is_auto_folded() {
        let mut game = test_game(small_stakes(), 9);
        let outcome = game.apply_action(Action::Bet(2000));
        assert_eq!(
            ActionOutcome::AutoFolded(IllegalAction::NotEnoughChips {
                amount: 2000,
                available: 995,
            }),
            outcome
        );
        assert_eq!([985, 1000], game.stacks());
        assert_eq!([10, 5], game.round_bets());
    }

    #[test_log::test]
    fn test_negative_bet_is_auto_folded() {
        let mut game = test_game(small_stakes(), 9);
        let outcome = game.apply_action(Action::Bet(-5));
        assert_eq!(
            ActionOutcome::AutoFolded(IllegalAction::NegativeBet),
            outcome
        );
    }

    #[test_log::test]
    fn test_check_with_bet_pending_is_auto_folded() {
        let mut game = test_game(small_stakes(), 9);
        let outcome = game.apply_action(Action::Bet(0));
        assert_eq!(
            ActionOutcome::AutoFolded(IllegalAction::CannotCheck { to_call: 5 }),
            outcome
        );
    }

    #[test_log::test]
    fn test_all_in_for_less_is_legal() {
        let config = GameConfig {
            starting_stack: 1000,
            ..small_stakes()
        };
        let mut game = test_game(config, 21);
        game.apply_action(Action::Bet(5));
        game.apply_action(Action::Bet(490));
        // The opener cannot cover a raise to 1000 but the
        // whole stack is always legal.
        let outcome = game.apply_action(Action::Bet(990));
        assert_eq!(ActionOutcome::AllIn(990), outcome);
        // The shove reopens the action for the other seat.
        assert_eq!(1, game.to_act());
        assert_eq!(500, game.player_view(1).to_call());
        assert_eq!(2000, game.total_chips());
    }

    #[test_log::test]
    fn test_all_in_runs_out_the_board() {
        let mut game = test_game(GameConfig::default(), 5);
        let outcome = game.apply_action(Action::Bet(7450));
        assert_eq!(ActionOutcome::AllIn(7450), outcome);
        let outcome = game.apply_action(Action::Bet(7400));
        assert_eq!(ActionOutcome::AllIn(7400), outcome);

        // No further input: the board ran out and the hand
        // was shown down.
        assert_eq!(1, game.hands_played());
        assert_eq!(15_000, game.total_chips());
        if !game.is_over() {
            // Split pot, next hand already dealt.
            assert!(game.board().is_empty());
            assert_eq!([100, 50], game.round_bets());
        } else {
            assert!(game.winner().is_some());
        }
    }

    #[test_log::test]
    fn test_chips_conserved_through_streets() {
        let mut game = test_game(GameConfig::default(), 13);
        game.apply_action(Action::Bet(50));
        assert_eq!(15_000, game.total_chips());
        game.apply_action(Action::Bet(0));
        assert_eq!(15_000, game.total_chips());
        assert_eq!(Street::Flop, game.street());

        // Small blind opens postflop.
        assert_eq!(0, game.to_act());
        game.apply_action(Action::Bet(100));
        assert_eq!(15_000, game.total_chips());
        game.apply_action(Action::Bet(100));
        assert_eq!(15_000, game.total_chips());
        assert_eq!(Street::Turn, game.street());

        game.apply_action(Action::Bet(0));
        game.apply_action(Action::Bet(0));
        assert_eq!(Street::River, game.street());
        game.apply_action(Action::Bet(0));
        game.apply_action(Action::Bet(0));

        // Showdown resolved the hand one way or the other.
        assert_eq!(1, game.hands_played());
        assert_eq!(15_000, game.total_chips());
    }

    #[test_log::test]
    fn test_blinds_cap_at_short_stacks() {
        let config = GameConfig {
            starting_stack: 30,
            small_blind: 50,
            big_blind: 100,
            odd_chip_to_small_blind: true,
        };
        let mut game = test_game(config, 17);
        assert_eq!([30, 30], game.round_bets());
        assert_eq!([0, 0], game.stacks());

        // Both seats are all-in from the blinds. Each check
        // settles the round and the board runs out.
        game.apply_action(Action::Bet(0));
        game.apply_action(Action::Bet(0));
        assert_eq!(1, game.hands_played());
        assert_eq!(60, game.total_chips());
    }

    #[test_log::test]
    fn test_odd_chip_goes_to_small_blind() {
        let mut game = test_game(GameConfig::default(), 1);
        game.pots[0].value = 101;
        game.award_split(&[0, 1]);
        let stacks = game.stacks();
        assert_eq!(51, stacks[0] - 7450);
        assert_eq!(50, stacks[1] - 7400);
    }

    #[test_log::test]
    fn test_odd_chip_to_first_winner_when_disabled() {
        let config = GameConfig {
            odd_chip_to_small_blind: false,
            ..GameConfig::default()
        };
        let mut game = test_game(config, 1);
        // Make seat one the small blind so the flag is what
        // decides, not the seat order.
        game.small_blind_idx = 1;
        game.pots[0].value = 101;
        game.award_split(&[0, 1]);
        let stacks = game.stacks();
        assert_eq!(51, stacks[0] - 7450);
        assert_eq!(50, stacks[1] - 7400);
    }

    #[test_log::test]
    fn test_folded_seat_loses_pending_bet() {
        let mut game = test_game(GameConfig::default(), 19);
        game.apply_action(Action::Bet(250));
        game.apply_action(Action::Fold);
        // The big blind folded away its 100, the raiser took
        // the 500 pot, and the next hand's blinds are down.
        assert_eq!(1, game.hands_played());
        assert_eq!([7500, 7350], game.stacks());
        assert_eq!([100, 50], game.round_bets());
        assert_eq!(15_000, game.total_chips());
    }

    #[test_log::test]
    fn test_wire_form_drives_the_game() {
        let mut game = test_game(small_stakes(), 23);
        assert_eq!(ActionOutcome::Called(5), game.apply_raise_size(5));
        assert_eq!(ActionOutcome::Checked, game.apply_raise_size(0));
        assert_eq!(3, game.board().len());
        assert!(game.apply_raise_size(-1).is_fold());
        assert_eq!(1, game.hands_played());
    }

    #[test_log::test]
    fn test_settled_stacks_exclude_the_next_blinds() {
        let mut game = test_game(small_stakes(), 9);
        assert_eq!([1000, 1000], game.settled_stacks());
        game.apply_action(Action::Fold);
        // The fold settled the hand at [995, 1005]; the live
        // stacks are already short the next hand's blinds.
        assert_eq!([995, 1005], game.settled_stacks());
        assert_eq!([985, 1000], game.stacks());
        assert_eq!(2000, game.settled_stacks().iter().sum::<i32>());
    }

    #[test_log::test]
    fn test_short_blind_all_in_cannot_check() {
        let config = GameConfig {
            starting_stack: 20,
            ..small_stakes()
        };
        let mut game = test_game(config, 25);
        // Hand one: seat zero folds its small blind away.
        game.apply_action(Action::Fold);
        // Hand two: seat one raises, seat zero folds its big
        // blind away too, dropping to five chips.
        game.apply_action(Action::Bet(15));
        game.apply_action(Action::Fold);
        // Hand three: those five chips went in as the small
        // blind, short of the big blind across the table.
        assert_eq!([0, 25], game.stacks());
        assert_eq!([5, 10], game.round_bets());
        assert_eq!(0, game.to_act());

        // Zero is not a check while a call is owed, even for
        // a seat with nothing behind.
        let outcome = game.apply_action(Action::Bet(0));
        assert_eq!(
            ActionOutcome::AutoFolded(IllegalAction::CannotCheck { to_call: 5 }),
            outcome
        );
        assert!(game.is_over());
        assert_eq!(Some(1), game.winner());
        assert_eq!([0, 40], game.stacks());
    }
}
