//! Typed errors, propagation with `?`, conversion to `Option`, and cleanup
//! that runs however a scope is left.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use harness::{Registry, say};
use thiserror::Error;

use super::example;

const TOPIC: &str = "errors";

pub fn register(registry: &mut Registry) -> harness::Result<()> {
    registry.insert(example(
        TOPIC,
        "vending-machine",
        buy_snacks,
        &[
            "Insufficient funds. Please insert an additional 2 coins.",
            "Invalid Selection.",
            "Dispensing Pretzels",
            "1 coins left",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "out-of-stock",
        || {
            let mut machine = VendingMachine::new();
            machine.coins_deposited = 100;
            for _ in 0..5 {
                if let Err(err) = machine.vend("Chips") {
                    say!("{err}");
                }
            }
            Ok(())
        },
        &[
            "Dispensing Chips",
            "Dispensing Chips",
            "Dispensing Chips",
            "Dispensing Chips",
            "Out of Stock.",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "try-optional",
        || {
            let x = some_throwing_function().ok();
            say!("x is {x:?}");
            match fetch_data() {
                Some(data) => say!("fetched {data}"),
                None => say!("no data available"),
            }
            Ok(())
        },
        &["x is Some(1)", "no data available"],
    ))?;
    registry.insert(example(
        TOPIC,
        "cleanup-on-exit",
        || {
            match process_file("notes.txt", &["alpha", "beta"]) {
                Ok(count) => say!("processed {count} lines"),
                Err(err) => say!("processing failed: {err}"),
            }
            match process_file("draft.txt", &["alpha", "", "gamma"]) {
                Ok(count) => say!("processed {count} lines"),
                Err(err) => say!("processing failed: {err}"),
            }
            Ok(())
        },
        &[
            "open notes.txt",
            "read alpha",
            "read beta",
            "close notes.txt",
            "processed 2 lines",
            "open draft.txt",
            "read alpha",
            "close draft.txt",
            "processing failed: blank line 2 in draft.txt",
        ],
    ))?;
    Ok(())
}

#[derive(Debug, Error, PartialEq, Eq)]
enum VendingMachineError {
    #[error("Invalid Selection.")]
    InvalidSelection,
    #[error("Insufficient funds. Please insert an additional {coins_needed} coins.")]
    InsufficientFunds { coins_needed: u32 },
    #[error("Out of Stock.")]
    OutOfStock,
}

#[derive(Debug, Clone, Copy)]
struct Item {
    price: u32,
    count: u32,
}

#[derive(Debug)]
struct VendingMachine {
    inventory: BTreeMap<&'static str, Item>,
    coins_deposited: u32,
}

impl VendingMachine {
    fn new() -> Self {
        Self {
            inventory: BTreeMap::from([
                ("Candy Bar", Item { price: 12, count: 7 }),
                ("Chips", Item { price: 10, count: 4 }),
                ("Pretzels", Item { price: 7, count: 11 }),
            ]),
            coins_deposited: 0,
        }
    }

    fn vend(&mut self, name: &str) -> std::result::Result<(), VendingMachineError> {
        let item = self
            .inventory
            .get_mut(name)
            .ok_or(VendingMachineError::InvalidSelection)?;
        if item.count == 0 {
            return Err(VendingMachineError::OutOfStock);
        }
        if item.price > self.coins_deposited {
            return Err(VendingMachineError::InsufficientFunds {
                coins_needed: item.price - self.coins_deposited,
            });
        }
        self.coins_deposited -= item.price;
        item.count -= 1;
        say!("Dispensing {name}");
        Ok(())
    }
}

fn buy_favorite_snack(
    person: &str,
    machine: &mut VendingMachine,
) -> std::result::Result<(), VendingMachineError> {
    let favorite_snacks = BTreeMap::from([
        ("Alice", "Chips"),
        ("Bob", "Licorice"),
        ("Eve", "Pretzels"),
    ]);
    let snack_name = favorite_snacks.get(person).copied().unwrap_or("Candy Bar");
    machine.vend(snack_name)
}

fn buy_snacks() -> Result<()> {
    let mut machine = VendingMachine::new();
    machine.coins_deposited = 8;
    for person in ["Alice", "Bob", "Eve"] {
        match buy_favorite_snack(person, &mut machine) {
            Ok(()) => {}
            Err(VendingMachineError::InvalidSelection) => say!("Invalid Selection."),
            Err(VendingMachineError::OutOfStock) => say!("Out of Stock."),
            Err(VendingMachineError::InsufficientFunds { coins_needed }) => say!(
                "Insufficient funds. Please insert an additional {coins_needed} coins."
            ),
        }
    }
    say!("{} coins left", machine.coins_deposited);
    Ok(())
}

fn some_throwing_function() -> Result<i32> {
    Ok(1)
}

fn fetch_data_from_disk() -> Result<Option<String>> {
    Ok(None)
}

fn fetch_data_from_server() -> Result<Option<String>> {
    bail!("server unreachable")
}

fn fetch_data() -> Option<String> {
    if let Some(data) = fetch_data_from_disk().ok().flatten() {
        return Some(data);
    }
    fetch_data_from_server().ok().flatten()
}

/// Open handle that announces when it is closed.
struct OpenFile<'a> {
    name: &'a str,
}

impl<'a> OpenFile<'a> {
    fn open(name: &'a str) -> Self {
        say!("open {name}");
        Self { name }
    }
}

impl Drop for OpenFile<'_> {
    fn drop(&mut self) {
        say!("close {}", self.name);
    }
}

fn process_file(filename: &str, lines: &[&str]) -> Result<usize> {
    let file = OpenFile::open(filename);
    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() {
            bail!("blank line {} in {}", index + 1, file.name);
        }
        say!("read {line}");
    }
    Ok(lines.len())
}
