//! The session loop: rounds played through a [`Presenter`].

use tracing::info;

use crate::error::GameError;
use crate::presenter::{Announcement, Presenter, Question, Seat};
use crate::result::{HandOutcome, RoundResult, SessionSummary};

use super::Game;

fn show_player<P: Presenter + ?Sized>(game: &Game, presenter: &mut P) {
    let player = game.player();
    presenter.display_hand(Seat::Player, player.hand().cards());
    presenter.display_hand_value(Seat::Player, player.hand_value());
}

fn show_dealer<P: Presenter + ?Sized>(game: &Game, presenter: &mut P) {
    let dealer = game.dealer();
    presenter.display_hand(Seat::Dealer, dealer.visible_cards());
    presenter.display_hand_value(Seat::Dealer, dealer.visible_value());
}

/// Plays rounds until the player runs out of chips or declines another round.
///
/// The player's chips carry over between rounds; hands and the shoe do not.
/// Closed input counts as declining.
///
/// # Errors
///
/// Returns the first engine error. Every [`GameError`] is an internal
/// consistency failure, so the session stops rather than retrying.
pub fn run_session<P: Presenter + ?Sized>(
    game: &mut Game,
    presenter: &mut P,
) -> Result<SessionSummary, GameError> {
    let mut summary = SessionSummary {
        final_chips: game.player().chips_available(),
        ..SessionSummary::default()
    };

    presenter.announce(Announcement::Welcome);

    loop {
        if !game.player_can_bet() {
            presenter.announce(Announcement::OutOfChips);
            break;
        }

        if summary.rounds_played > 0
            && presenter.prompt_yes_no(Question::AnotherRound) != Some(true)
        {
            break;
        }

        game.start_round()?;
        let Some(result) = play_round(game, presenter)? else {
            break;
        };
        summary.record(&result);
    }

    presenter.announce(Announcement::Goodbye);
    info!(
        rounds = summary.rounds_played,
        wins = summary.wins,
        pushes = summary.pushes,
        losses = summary.losses,
        chips = summary.final_chips,
        "session over"
    );

    Ok(summary)
}

/// Plays one round on a game that is awaiting a bet, then clears the table.
///
/// Returns `None`, with the table cleared, if the bet prompt is closed.
///
/// # Errors
///
/// Returns an error if the game is not awaiting a bet or an engine step
/// fails.
pub fn play_round<P: Presenter + ?Sized>(
    game: &mut Game,
    presenter: &mut P,
) -> Result<Option<RoundResult>, GameError> {
    presenter.announce(Announcement::RoundStart);

    let available = game.player().chips_available();
    presenter.announce(Announcement::AvailableChips(available));
    let Some(bet) = presenter.prompt_bet(game.options().minimum_bet, available) else {
        game.clear_round();
        return Ok(None);
    };
    game.place_bet(bet)?;
    presenter.announce(Announcement::BetPlaced(bet));

    game.deal()?;
    show_player(game, presenter);
    show_dealer(game, presenter);
    presenter.announce(Announcement::HoleCardHidden);

    while game.player_can_hit() {
        if presenter.prompt_yes_no(Question::AnotherCard) != Some(true) {
            break;
        }
        game.player_hit()?;
        show_player(game, presenter);
    }

    let result = if let Some(result) = game.finish_player_turn()? {
        result
    } else {
        show_dealer(game, presenter);
        while game.dealer_hit()?.is_some() {
            show_dealer(game, presenter);
        }
        game.settle()?
    };

    presenter.announce(match result.outcome {
        HandOutcome::Win => Announcement::PlayerWins,
        HandOutcome::Push => Announcement::PlayerPushes,
        HandOutcome::Lose => Announcement::PlayerLoses,
    });
    presenter.announce(Announcement::ChipBalance(result.chips_available));
    presenter.announce(Announcement::RoundEnd);

    game.clear_round();

    Ok(Some(result))
}
