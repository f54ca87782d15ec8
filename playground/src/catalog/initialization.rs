//! Constructors, delegating constructors, and cleanup on drop.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use harness::{Registry, say};

use super::example;

const TOPIC: &str = "initialization";

pub fn register(registry: &mut Registry) -> harness::Result<()> {
    registry.insert(example(
        TOPIC,
        "fahrenheit",
        || {
            let f = Fahrenheit::new();
            say!("The default temperature is {:?}° Fahrenheit", f.temperature);
            Ok(())
        },
        &["The default temperature is 32.0° Fahrenheit"],
    ))?;
    registry.insert(example(
        TOPIC,
        "celsius",
        || {
            let boiling_point_of_water = Celsius::from_fahrenheit(212.0);
            let freezing_point_of_water = Celsius::from_kelvin(273.15);
            say!("boiling point is {:?}", boiling_point_of_water.temperature_in_celsius);
            say!("freezing point is {:?}", freezing_point_of_water.temperature_in_celsius);
            Ok(())
        },
        &["boiling point is 100.0", "freezing point is 0.0"],
    ))?;
    registry.insert(example(
        TOPIC,
        "color",
        || {
            let magenta = Color::new(1.0, 0.0, 1.0);
            let half_gray = Color::white(0.5);
            say!("magenta is {magenta}");
            say!("half gray is {half_gray}");
            Ok(())
        },
        &["magenta is (1.0, 0.0, 1.0)", "half gray is (0.5, 0.5, 0.5)"],
    ))?;
    registry.insert(example(
        TOPIC,
        "survey",
        || {
            let cheese_question = SurveyQuestion::new("Do you like cheese?");
            cheese_question.ask();
            let mut beets_question = SurveyQuestion::new("How about beets?");
            beets_question.ask();
            beets_question.response = Some("I also like beets. (But not with cheese.)".to_string());
            if let Some(response) = &beets_question.response {
                say!("{response}");
            }
            Ok(())
        },
        &[
            "Do you like cheese?",
            "How about beets?",
            "I also like beets. (But not with cheese.)",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "delegating-rect",
        || {
            let basic_rect = Rect::default();
            let origin_rect = Rect::new(Point { x: 2.0, y: 2.0 }, Size::new(5.0, 5.0));
            let center_rect = Rect::with_center(Point { x: 4.0, y: 4.0 }, Size::new(3.0, 3.0));
            for (label, rect) in [
                ("basic", basic_rect),
                ("origin", origin_rect),
                ("center", center_rect),
            ] {
                say!(
                    "{label} rect origin is ({:?}, {:?}), size is {:?} x {:?}",
                    rect.origin.x,
                    rect.origin.y,
                    rect.size.width,
                    rect.size.height
                );
            }
            Ok(())
        },
        &[
            "basic rect origin is (0.0, 0.0), size is 0.0 x 0.0",
            "origin rect origin is (2.0, 2.0), size is 5.0 x 5.0",
            "center rect origin is (2.5, 2.5), size is 3.0 x 3.0",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "bank-player",
        play_game,
        &[
            "A new player has joined the game with 100 coins",
            "There are now 9900 coins left in the bank",
            "PlayerOne won 2000 coins & now has 2100 coins",
            "The bank now only has 7900 coins left",
            "PlayerOne has left the game",
            "The bank now has 10000 coins",
        ],
    ))?;
    Ok(())
}

struct Fahrenheit {
    temperature: f64,
}

impl Fahrenheit {
    fn new() -> Self {
        Self { temperature: 32.0 }
    }
}

struct Celsius {
    temperature_in_celsius: f64,
}

impl Celsius {
    fn from_fahrenheit(fahrenheit: f64) -> Self {
        Self {
            temperature_in_celsius: (fahrenheit - 32.0) / 1.8,
        }
    }

    fn from_kelvin(kelvin: f64) -> Self {
        Self {
            temperature_in_celsius: kelvin - 273.15,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Color {
    red: f64,
    green: f64,
    blue: f64,
}

impl Color {
    fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    fn white(white: f64) -> Self {
        Self::new(white, white, white)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.red, self.green, self.blue)
    }
}

struct SurveyQuestion {
    text: String,
    response: Option<String>,
}

impl SurveyQuestion {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            response: None,
        }
    }

    fn ask(&self) {
        say!("{}", self.text);
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Point {
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Size {
    width: f64,
    height: f64,
}

impl Size {
    fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Delegates to [`Rect::new`] after converting the center to an origin.
    fn with_center(center: Point, size: Size) -> Self {
        let origin_x = center.x - size.width / 2.0;
        let origin_y = center.y - size.height / 2.0;
        Self::new(Point { x: origin_x, y: origin_y }, size)
    }
}

/// Coin supply shared by every player of one game.
#[derive(Debug)]
struct Bank {
    coins_in_bank: u32,
}

impl Bank {
    fn new(coins: u32) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            coins_in_bank: coins,
        }))
    }

    fn distribute(&mut self, number_of_coins_requested: u32) -> u32 {
        let number_of_coins_to_vend = number_of_coins_requested.min(self.coins_in_bank);
        self.coins_in_bank -= number_of_coins_to_vend;
        number_of_coins_to_vend
    }

    fn receive(&mut self, coins: u32) {
        self.coins_in_bank += coins;
    }
}

/// Returns its purse to the bank when dropped.
struct Player {
    name: &'static str,
    coins_in_purse: u32,
    bank: Rc<RefCell<Bank>>,
}

impl Player {
    fn new(name: &'static str, coins: u32, bank: &Rc<RefCell<Bank>>) -> Self {
        let coins_in_purse = bank.borrow_mut().distribute(coins);
        Self {
            name,
            coins_in_purse,
            bank: Rc::clone(bank),
        }
    }

    fn win(&mut self, coins: u32) {
        self.coins_in_purse += self.bank.borrow_mut().distribute(coins);
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.bank.borrow_mut().receive(self.coins_in_purse);
    }
}

fn play_game() -> Result<()> {
    let bank = Bank::new(10_000);
    let mut player_one = Some(Player::new("PlayerOne", 100, &bank));
    if let Some(player) = &player_one {
        say!(
            "A new player has joined the game with {} coins",
            player.coins_in_purse
        );
    }
    say!(
        "There are now {} coins left in the bank",
        bank.borrow().coins_in_bank
    );

    if let Some(player) = player_one.as_mut() {
        player.win(2000);
        say!(
            "{} won 2000 coins & now has {} coins",
            player.name,
            player.coins_in_purse
        );
    }
    say!(
        "The bank now only has {} coins left",
        bank.borrow().coins_in_bank
    );

    if let Some(player) = player_one.take() {
        say!("{} has left the game", player.name);
    }
    say!("The bank now has {} coins", bank.borrow().coins_in_bank);
    Ok(())
}
