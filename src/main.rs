//! Console blackjack: one player against the house.

use core::fmt;
use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjconsole::{
    Announcement, Card, Game, GameError, GameOptions, MAX_STARTING_CHIPS, Presenter, Question,
    Seat, run_session,
};
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blackjack", about = "Play single-deck blackjack against the house")]
struct Args {
    /// Seed for the deck shuffle (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Chips the player starts with
    #[arg(
        long,
        default_value_t = 100,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_STARTING_CHIPS as u64)
    )]
    chips: usize,

    /// Smallest accepted bet
    #[arg(long, default_value_t = 1)]
    min_bet: usize,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the table.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_starting_chips(args.chips)
        .with_minimum_bet(args.min_bet);
    info!(seed, chips = options.starting_chips, min_bet = options.minimum_bet, "starting session");

    let mut game = Game::new(options, seed);
    let stdin = io::stdin();
    let mut presenter = ConsolePresenter::new(stdin.lock(), io::stdout());

    if let Err(err) = run_session(&mut game, &mut presenter) {
        presenter.report_error(&err);
    }
}

/// Text presenter over a line reader and a writer.
struct ConsolePresenter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePresenter<R, W> {
    const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        // Nothing sensible can be done if the terminal is gone.
        let _ = self.output.write_fmt(args);
        let _ = self.output.flush();
    }

    /// Reads one trimmed, lowercased line. `None` on end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_lowercase()),
        }
    }

    /// Tells the player the session stopped on an engine error.
    fn report_error(&mut self, err: &GameError) {
        self.say(format_args!("\nError: {err}.\nQuitting Blackjack... Goodbye!\n\n"));
    }

    fn ask_yes_no(&mut self, prompt: &str) -> Option<bool> {
        self.say(format_args!("{prompt}  "));
        loop {
            match parse_yes_no(&self.read_line()?) {
                Some(answer) => return Some(answer),
                None => self.say(format_args!(
                    "{prompt} Please type 'y' or 'n' (without the quotes):  "
                )),
            }
        }
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

const fn plural(quantity: usize) -> &'static str {
    if quantity == 1 { "" } else { "s" }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(|card| format!("{card} | ")).collect()
}

impl<R: BufRead, W: Write> Presenter for ConsolePresenter<R, W> {
    fn display_hand(&mut self, seat: Seat, cards: &[Card]) {
        let cards = format_cards(cards);
        match seat {
            Seat::Player => self.say(format_args!("Your hand contains:  {cards}\n")),
            Seat::Dealer => self.say(format_args!("Dealer's hand contains:  {cards}\n")),
        }
    }

    fn display_hand_value(&mut self, seat: Seat, value: u8) {
        match seat {
            Seat::Player => self.say(format_args!("Your hand value is:  {value}\n")),
            Seat::Dealer => self.say(format_args!("Dealer's hand value is:  {value}\n")),
        }
    }

    fn prompt_bet(&mut self, min: usize, max: usize) -> Option<usize> {
        self.say(format_args!("Place your bet please (minimum bet is {min}):  "));
        loop {
            match self.read_line()?.parse::<usize>() {
                Ok(bet) if (min..=max).contains(&bet) => return Some(bet),
                _ => self.say(format_args!(
                    "Please try to bet again. Your bet should be a number between {min} and up to your available chips:  "
                )),
            }
        }
    }

    fn prompt_yes_no(&mut self, question: Question) -> Option<bool> {
        match question {
            Question::AnotherCard => self.ask_yes_no("Would you like 1 more card (y/n)?"),
            Question::AnotherRound => {
                self.ask_yes_no("Would you like to play another round (y/n)?")
            }
        }
    }

    fn announce(&mut self, event: Announcement) {
        match event {
            Announcement::Welcome => {
                self.say(format_args!("\nWelcome to Blackjack! Enjoy your play.\n\n"));
            }
            Announcement::Goodbye => self.say(format_args!(
                "\nWe hope you had a great time and to see you again soon!\n\n"
            )),
            Announcement::RoundStart => {
                self.say(format_args!("\nA new Blackjack round begins.\n\n"));
            }
            Announcement::RoundEnd => self.say(format_args!("Current Blackjack round is over.\n\n")),
            Announcement::HoleCardHidden => {
                self.say(format_args!("Dealer's second card remains hidden.\n"));
            }
            Announcement::AvailableChips(chips) => self.say(format_args!(
                "You have {chips} chip{} to bet with.\n",
                plural(chips)
            )),
            Announcement::BetPlaced(bet) => {
                self.say(format_args!("Your bet is {bet} chip{}.\n", plural(bet)));
            }
            Announcement::PlayerWins => self.say(format_args!("You win.\n")),
            Announcement::PlayerPushes => self.say(format_args!("You push.\n")),
            Announcement::PlayerLoses => self.say(format_args!("You lose.\n")),
            Announcement::ChipBalance(chips) => {
                self.say(format_args!("Your current number of chips is {chips}.\n"));
            }
            Announcement::OutOfChips => self.say(format_args!(
                "Sorry but you have no more chips to bet with.\n"
            )),
        }
    }
}
