//! Enumerations: matching, associated values and raw values.

use anyhow::Result;
use harness::{Registry, say};

use super::example;

const TOPIC: &str = "enums";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompassPoint {
    North,
    South,
    East,
    West,
}

impl CompassPoint {
    fn raw_value(self) -> &'static str {
        match self {
            CompassPoint::North => "north",
            CompassPoint::South => "south",
            CompassPoint::East => "east",
            CompassPoint::West => "west",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Planet {
    Mercury = 1,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Barcode {
    Upc(u32, u32, u32, u32),
    QrCode(String),
}

pub fn register(registry: &mut Registry) -> harness::Result<()> {
    registry.insert(example(
        TOPIC,
        "compass",
        || {
            let mut direction_to_head = CompassPoint::West;
            say!("{}", heading(direction_to_head));
            direction_to_head = CompassPoint::East;
            say!("{}", heading(direction_to_head));
            for direction in [CompassPoint::South, CompassPoint::North] {
                say!("{}", heading(direction));
            }
            Ok(())
        },
        &[
            "Where the skies are blue",
            "Where the sun rises",
            "Watch out for penguins",
            "Lots of planets have a north",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "planet",
        || {
            say!("{}", safety(Planet::Earth));
            say!("{}", safety(Planet::Neptune));
            Ok(())
        },
        &["Mostly harmless", "Not a safe place for humans"],
    ))?;
    registry.insert(example(
        TOPIC,
        "planet-order",
        || {
            for planet in Planet::ALL {
                say!("{planet:?} is planet {}", planet as i32);
            }
            Ok(())
        },
        &[
            "Mercury is planet 1",
            "Venus is planet 2",
            "Earth is planet 3",
            "Mars is planet 4",
            "Jupiter is planet 5",
            "Saturn is planet 6",
            "Uranus is planet 7",
            "Neptune is planet 8",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "barcode",
        scan_barcodes,
        &["UPC: 8, 85909, 51226, 3.", "QR code: ABCDEFGHIJKLMNOP."],
    ))?;
    registry.insert(example(
        TOPIC,
        "raw-values",
        raw_values,
        &[
            "earth's order is 3",
            "neptune's order is 8",
            "sunset direction is west",
        ],
    ))?;
    Ok(())
}

fn heading(direction: CompassPoint) -> &'static str {
    match direction {
        CompassPoint::North => "Lots of planets have a north",
        CompassPoint::South => "Watch out for penguins",
        CompassPoint::East => "Where the sun rises",
        CompassPoint::West => "Where the skies are blue",
    }
}

fn safety(planet: Planet) -> &'static str {
    match planet {
        Planet::Earth => "Mostly harmless",
        _ => "Not a safe place for humans",
    }
}

fn describe(barcode: &Barcode) -> String {
    match barcode {
        Barcode::Upc(number_system, manufacturer, product, check) => {
            format!("UPC: {number_system}, {manufacturer}, {product}, {check}.")
        }
        Barcode::QrCode(product_code) => format!("QR code: {product_code}."),
    }
}

fn scan_barcodes() -> Result<()> {
    let mut product_barcode = Barcode::Upc(8, 85909, 51226, 3);
    say!("{}", describe(&product_barcode));
    // Replaces the UPC value and its integers entirely.
    product_barcode = Barcode::QrCode("ABCDEFGHIJKLMNOP".to_string());
    say!("{}", describe(&product_barcode));
    Ok(())
}

fn raw_values() -> Result<()> {
    say!("earth's order is {}", Planet::Earth as i32);
    say!("neptune's order is {}", Planet::Neptune as i32);
    say!("sunset direction is {}", CompassPoint::West.raw_value());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implicit_raw_values_count_up_from_one() {
        assert_eq!(Planet::Mercury as i32, 1);
        assert_eq!(Planet::Venus as i32, 2);
        assert_eq!(Planet::Mars as i32, 4);
        assert_eq!(Planet::Jupiter as i32, 5);
        assert_eq!(Planet::Saturn as i32, 6);
        assert_eq!(Planet::Uranus as i32, 7);
    }

    #[test]
    fn every_direction_has_a_heading() {
        let directions = [
            CompassPoint::North,
            CompassPoint::South,
            CompassPoint::East,
            CompassPoint::West,
        ];
        let raw: Vec<&str> = directions.iter().map(|d| d.raw_value()).collect();
        assert_eq!(raw, vec!["north", "south", "east", "west"]);
        assert_eq!(heading(CompassPoint::East), "Where the sun rises");
    }
}
