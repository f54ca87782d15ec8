//! Lazy, computed and observed properties, and type-level properties.

use std::cell::OnceCell;

use anyhow::Result;
use harness::{Registry, say};

use super::example;

const TOPIC: &str = "properties";

pub fn register(registry: &mut Registry) -> harness::Result<()> {
    registry.insert(example(
        TOPIC,
        "lazy-importer",
        lazy_importer,
        &["importer created: false", "data.txt", "importer created: true"],
    ))?;
    registry.insert(example(
        TOPIC,
        "computed-center",
        move_center,
        &[
            "initial center is (5.0, 5.0)",
            "square.origin is now at (10.0, 10.0)",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "read-only-volume",
        || {
            let four_by_five_by_two = Cuboid {
                width: 4.0,
                height: 5.0,
                depth: 2.0,
            };
            say!(
                "the volume of fourByFiveByTwo is {:?}",
                four_by_five_by_two.volume()
            );
            Ok(())
        },
        &["the volume of fourByFiveByTwo is 40.0"],
    ))?;
    registry.insert(example(
        TOPIC,
        "step-observer",
        count_steps,
        &[
            "About to set totalSteps to 200",
            "Added 200 steps",
            "About to set totalSteps to 360",
            "Added 160 steps",
            "About to set totalSteps to 896",
            "Added 536 steps",
            "About to set totalSteps to 896",
            "Added 0 steps",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "type-properties",
        type_properties,
        &["Some value.", "Another value.", "1", "6", "27", "107"],
    ))?;
    Ok(())
}

#[derive(Debug)]
struct DataImporter {
    filename: String,
}

impl DataImporter {
    fn new() -> Self {
        Self {
            filename: "data.txt".to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct DataManager {
    importer: OnceCell<DataImporter>,
    data: Vec<String>,
}

impl DataManager {
    fn importer(&self) -> &DataImporter {
        self.importer.get_or_init(DataImporter::new)
    }
}

fn lazy_importer() -> Result<()> {
    let mut manager = DataManager::default();
    manager.data.push("Some data".to_string());
    manager.data.push("Some more data".to_string());
    say!("importer created: {}", manager.importer.get().is_some());
    say!("{}", manager.importer().filename);
    say!("importer created: {}", manager.importer.get().is_some());
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Point {
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Size {
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    fn center(&self) -> Point {
        Point {
            x: self.origin.x + self.size.width / 2.0,
            y: self.origin.y + self.size.height / 2.0,
        }
    }

    fn set_center(&mut self, new_center: Point) {
        self.origin.x = new_center.x - self.size.width / 2.0;
        self.origin.y = new_center.y - self.size.height / 2.0;
    }
}

fn move_center() -> Result<()> {
    let mut square = Rect {
        origin: Point { x: 0.0, y: 0.0 },
        size: Size {
            width: 10.0,
            height: 10.0,
        },
    };
    let initial_square_center = square.center();
    say!(
        "initial center is ({:?}, {:?})",
        initial_square_center.x,
        initial_square_center.y
    );
    square.set_center(Point { x: 15.0, y: 15.0 });
    say!(
        "square.origin is now at ({:?}, {:?})",
        square.origin.x,
        square.origin.y
    );
    Ok(())
}

struct Cuboid {
    width: f64,
    height: f64,
    depth: f64,
}

impl Cuboid {
    fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }
}

/// Step total with hooks around every assignment, even an unchanged one.
#[derive(Debug, Default)]
struct StepCounter {
    total_steps: i64,
}

impl StepCounter {
    fn set_total_steps(&mut self, new_total_steps: i64) {
        say!("About to set totalSteps to {new_total_steps}");
        let old_value = self.total_steps;
        self.total_steps = new_total_steps;
        say!("Added {} steps", self.total_steps - old_value);
    }
}

fn count_steps() -> Result<()> {
    let mut step_counter = StepCounter::default();
    for total in [200, 360, 896, 896] {
        step_counter.set_total_steps(total);
    }
    Ok(())
}

struct SomeStructure {
    stored_type_property: &'static str,
}

impl SomeStructure {
    const STORED_TYPE_PROPERTY: &'static str = "Some value.";

    fn computed_type_property() -> i32 {
        1
    }
}

struct SomeEnumeration;

impl SomeEnumeration {
    fn computed_type_property() -> i32 {
        6
    }
}

trait OverrideableTypeProperty {
    fn overrideable_computed_type_property() -> i32 {
        107
    }
}

struct SomeClass;

impl SomeClass {
    fn computed_type_property() -> i32 {
        27
    }
}

impl OverrideableTypeProperty for SomeClass {}

fn type_properties() -> Result<()> {
    // A mutable "stored type property" is scoped to this run so repeated runs agree.
    let mut shared = SomeStructure {
        stored_type_property: SomeStructure::STORED_TYPE_PROPERTY,
    };
    say!("{}", shared.stored_type_property);
    shared.stored_type_property = "Another value.";
    say!("{}", shared.stored_type_property);
    say!("{}", SomeStructure::computed_type_property());
    say!("{}", SomeEnumeration::computed_type_property());
    say!("{}", SomeClass::computed_type_property());
    say!("{}", SomeClass::overrideable_computed_type_property());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_round_trips_through_setter() {
        let mut rect = Rect {
            origin: Point { x: 1.0, y: 2.0 },
            size: Size {
                width: 4.0,
                height: 6.0,
            },
        };
        let center = rect.center();
        rect.set_center(center);
        assert_eq!(rect.origin, Point { x: 1.0, y: 2.0 });
        assert_eq!(center, Point { x: 3.0, y: 5.0 });
    }

    #[test]
    fn importer_is_created_once() {
        let manager = DataManager::default();
        let first: *const DataImporter = manager.importer();
        let second: *const DataImporter = manager.importer();
        assert_eq!(first, second);
    }
}
