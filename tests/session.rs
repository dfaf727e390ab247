//! Session loop tests driven by a scripted presenter.

use std::collections::VecDeque;

use bjconsole::{
    Announcement, BetError, Card, Deck, Game, GameError, GameOptions, GameState, HandOutcome,
    Presenter, Question, Rank, Seat, Suit, play_round, run_session,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Hand(Seat, Vec<Card>),
    Value(Seat, u8),
    Bet { min: usize, max: usize },
    Asked(Question),
    Said(Announcement),
}

/// Answers prompts from fixed scripts and records everything shown.
#[derive(Default)]
struct ScriptedPresenter {
    bets: VecDeque<Option<usize>>,
    /// Bet the whole stack once `bets` runs out.
    all_in: bool,
    hits: VecDeque<bool>,
    rounds: VecDeque<bool>,
    events: Vec<Event>,
}

impl ScriptedPresenter {
    fn said(&self, announcement: Announcement) -> bool {
        self.events.contains(&Event::Said(announcement))
    }

    fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

impl Presenter for ScriptedPresenter {
    fn display_hand(&mut self, seat: Seat, cards: &[Card]) {
        self.events.push(Event::Hand(seat, cards.to_vec()));
    }

    fn display_hand_value(&mut self, seat: Seat, value: u8) {
        self.events.push(Event::Value(seat, value));
    }

    fn prompt_bet(&mut self, min: usize, max: usize) -> Option<usize> {
        self.events.push(Event::Bet { min, max });
        match self.bets.pop_front() {
            Some(bet) => bet,
            None if self.all_in => Some(max),
            None => None,
        }
    }

    fn prompt_yes_no(&mut self, question: Question) -> Option<bool> {
        self.events.push(Event::Asked(question));
        match question {
            Question::AnotherCard => self.hits.pop_front(),
            Question::AnotherRound => self.rounds.pop_front(),
        }
    }

    fn announce(&mut self, event: Announcement) {
        self.events.push(Event::Said(event));
    }
}

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn stacked_game(draws: &[Card]) -> Game {
    let mut game = Game::new(GameOptions::default(), 11);
    game.start_round().unwrap();
    *game.deck_mut() = Deck::stacked(draws, 11);
    game
}

#[test]
fn round_win_shows_hole_card_after_player_turn() {
    let mut game = stacked_game(&[
        card(Rank::King, Suit::Hearts),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Seven, Suit::Spades),
    ]);
    let mut presenter = ScriptedPresenter {
        bets: VecDeque::from([Some(10)]),
        hits: VecDeque::from([false]),
        ..ScriptedPresenter::default()
    };

    let result = play_round(&mut game, &mut presenter).unwrap().unwrap();
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(game.player().chips_available(), 110);
    assert_eq!(game.state(), GameState::Idle);

    let hidden = presenter
        .events
        .iter()
        .position(|e| *e == Event::Said(Announcement::HoleCardHidden))
        .unwrap();
    // Only the up card is shown before the player acts.
    assert!(presenter.events[..hidden].contains(&Event::Hand(
        Seat::Dealer,
        vec![card(Rank::Ten, Suit::Diamonds)]
    )));
    assert!(presenter.events[hidden..].contains(&Event::Hand(
        Seat::Dealer,
        vec![
            card(Rank::Ten, Suit::Diamonds),
            card(Rank::Seven, Suit::Spades)
        ]
    )));
    assert!(presenter.said(Announcement::BetPlaced(10)));
    assert!(presenter.said(Announcement::PlayerWins));
    assert!(presenter.said(Announcement::ChipBalance(110)));
    assert_eq!(
        presenter.events.last(),
        Some(&Event::Said(Announcement::RoundEnd))
    );
}

#[test]
fn bust_round_never_reveals_the_dealer() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Six, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Five, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
    ]);
    let mut presenter = ScriptedPresenter {
        bets: VecDeque::from([Some(5)]),
        hits: VecDeque::from([true]),
        ..ScriptedPresenter::default()
    };

    let result = play_round(&mut game, &mut presenter).unwrap().unwrap();
    assert_eq!(result.outcome, HandOutcome::Lose);
    assert_eq!(result.player_value, 23);
    assert_eq!(game.player().chips_available(), 95);

    // The dealer is shown exactly once, with the up card only.
    assert_eq!(
        presenter.count(|e| matches!(e, Event::Hand(Seat::Dealer, _))),
        1
    );
    assert!(presenter.said(Announcement::PlayerLoses));
    assert!(presenter.said(Announcement::ChipBalance(95)));
}

#[test]
fn twenty_one_stops_the_hit_prompt() {
    let mut game = stacked_game(&[
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Queen, Suit::Clubs),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Queen, Suit::Spades),
    ]);
    let mut presenter = ScriptedPresenter {
        bets: VecDeque::from([Some(10)]),
        ..ScriptedPresenter::default()
    };

    let result = play_round(&mut game, &mut presenter).unwrap().unwrap();
    assert_eq!(
        presenter.count(|e| *e == Event::Asked(Question::AnotherCard)),
        0
    );
    // 21 against 19 is an ordinary 1:1 win.
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(result.payout, 20);
}

#[test]
fn push_keeps_the_chip_count() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Nine, Suit::Spades),
    ]);
    let mut presenter = ScriptedPresenter {
        bets: VecDeque::from([Some(40)]),
        hits: VecDeque::from([false]),
        ..ScriptedPresenter::default()
    };

    let result = play_round(&mut game, &mut presenter).unwrap().unwrap();
    assert_eq!(result.outcome, HandOutcome::Push);
    assert!(presenter.said(Announcement::PlayerPushes));
    assert_eq!(game.player().chips_available(), 100);
}

#[test]
fn dealer_is_redisplayed_after_each_draw() {
    let mut game = stacked_game(&[
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Eight, Suit::Clubs),
        card(Rank::Two, Suit::Diamonds),
        card(Rank::Three, Suit::Spades),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Two, Suit::Clubs),
        card(Rank::Six, Suit::Hearts),
    ]);
    let mut presenter = ScriptedPresenter {
        bets: VecDeque::from([Some(10)]),
        hits: VecDeque::from([false]),
        ..ScriptedPresenter::default()
    };

    let result = play_round(&mut game, &mut presenter).unwrap().unwrap();
    assert_eq!(result.dealer_value, 17);
    assert_eq!(result.outcome, HandOutcome::Win);
    // Up card, revealed hand, then one display per drawn card.
    assert_eq!(
        presenter.count(|e| matches!(e, Event::Hand(Seat::Dealer, _))),
        5
    );
    assert!(
        presenter
            .events
            .contains(&Event::Value(Seat::Dealer, 17))
    );
}

#[test]
fn closed_bet_prompt_ends_the_session() {
    let mut game = Game::new(GameOptions::default(), 3);
    let mut presenter = ScriptedPresenter::default();

    let summary = run_session(&mut game, &mut presenter).unwrap();
    assert_eq!(summary.rounds_played, 0);
    assert_eq!(summary.final_chips, 100);
    assert_eq!(game.state(), GameState::Idle);
    assert_eq!(
        presenter.events.first(),
        Some(&Event::Said(Announcement::Welcome))
    );
    assert_eq!(
        presenter.events.last(),
        Some(&Event::Said(Announcement::Goodbye))
    );
    assert!(presenter.events.contains(&Event::Bet { min: 1, max: 100 }));
}

#[test]
fn declining_another_round_ends_the_session() {
    let mut game = Game::new(GameOptions::default(), 3);
    let mut presenter = ScriptedPresenter {
        bets: VecDeque::from([Some(1)]),
        hits: VecDeque::from([false]),
        rounds: VecDeque::from([false]),
        ..ScriptedPresenter::default()
    };

    let summary = run_session(&mut game, &mut presenter).unwrap();
    assert_eq!(summary.rounds_played, 1);
    assert_eq!(summary.wins + summary.pushes + summary.losses, 1);
    assert_eq!(summary.final_chips, game.player().chips_available());
    assert_eq!(presenter.count(|e| matches!(e, Event::Bet { .. })), 1);
    assert_eq!(
        presenter.count(|e| *e == Event::Asked(Question::AnotherRound)),
        1
    );
}

#[test]
fn session_without_chips_never_asks_for_a_bet() {
    let mut game = Game::new(GameOptions::default().with_starting_chips(0), 3);
    let mut presenter = ScriptedPresenter::default();

    let summary = run_session(&mut game, &mut presenter).unwrap();
    assert_eq!(summary.rounds_played, 0);
    assert_eq!(
        presenter.events,
        vec![
            Event::Said(Announcement::Welcome),
            Event::Said(Announcement::OutOfChips),
            Event::Said(Announcement::Goodbye),
        ]
    );
}

#[test]
fn session_ends_when_chips_run_out() {
    let mut game = Game::new(GameOptions::default(), 2024);
    let mut presenter = ScriptedPresenter {
        all_in: true,
        // Stand on every hand and always ask for another round.
        rounds: std::iter::repeat_n(true, 10_000).collect(),
        ..ScriptedPresenter::default()
    };

    let summary = run_session(&mut game, &mut presenter).unwrap();
    assert_eq!(summary.final_chips, 0);
    assert_eq!(summary.losses, 1);
    assert_eq!(
        presenter.count(|e| matches!(e, Event::Bet { .. })),
        summary.rounds_played
    );

    // After running dry: no more prompts, just the farewell.
    let tail = &presenter.events[presenter.events.len() - 2..];
    assert_eq!(
        tail,
        &[
            Event::Said(Announcement::OutOfChips),
            Event::Said(Announcement::Goodbye)
        ]
    );
    assert_eq!(
        presenter.count(|e| *e == Event::Asked(Question::AnotherRound)),
        summary.rounds_played - 1
    );
}

#[test]
fn engine_error_stops_the_session() {
    let mut game = Game::new(GameOptions::default(), 5);
    // A bet beyond the offered range breaks the presenter contract.
    let mut presenter = ScriptedPresenter {
        bets: VecDeque::from([Some(101)]),
        rounds: VecDeque::from([true]),
        ..ScriptedPresenter::default()
    };

    let err = run_session(&mut game, &mut presenter).unwrap_err();
    assert_eq!(
        err,
        GameError::Bet(BetError::InsufficientChips {
            amount: 101,
            available: 100
        })
    );
    assert!(!presenter.said(Announcement::Goodbye));
    assert_eq!(game.player().chips_available(), 100);
    assert_eq!(game.player().chips_wagered(), 0);
    assert!(game.player().hand().is_empty());

    // Nothing ran after the rejected bet.
    assert_eq!(
        presenter.events.last(),
        Some(&Event::Bet { min: 1, max: 100 })
    );
    assert_eq!(presenter.count(|e| matches!(e, Event::Hand(..))), 0);
}
