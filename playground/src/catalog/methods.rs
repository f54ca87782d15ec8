//! Instance methods, `&mut self` on value types, and type methods.

use anyhow::Result;
use harness::{Registry, say};

use super::example;

const TOPIC: &str = "methods";

pub fn register(registry: &mut Registry) -> harness::Result<()> {
    registry.insert(example(
        TOPIC,
        "counter",
        count_up,
        &["count is 1", "count is 6", "count is 0"],
    ))?;
    registry.insert(example(
        TOPIC,
        "move-point",
        || {
            let mut some_point = Point { x: 1.0, y: 1.0 };
            some_point.move_by(2.0, 3.0);
            say!(
                "The point is now at ({:?}, {:?})",
                some_point.x,
                some_point.y
            );
            Ok(())
        },
        &["The point is now at (3.0, 4.0)"],
    ))?;
    registry.insert(example(
        TOPIC,
        "type-method",
        || {
            say!("{}", SomeType::some_type_method());
            let instance = SomeType;
            say!("{}", instance.an_instance_method());
            Ok(())
        },
        &["called on the type", "called on an instance"],
    ))?;
    Ok(())
}

#[derive(Debug, Default)]
struct Counter {
    count: i32,
}

impl Counter {
    fn increment(&mut self) {
        self.count += 1;
    }

    fn increment_by(&mut self, amount: i32) {
        self.count += amount;
    }

    fn reset(&mut self) {
        self.count = 0;
    }
}

fn count_up() -> Result<()> {
    let mut counter = Counter::default();
    counter.increment();
    say!("count is {}", counter.count);
    counter.increment_by(5);
    say!("count is {}", counter.count);
    counter.reset();
    say!("count is {}", counter.count);
    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Point {
    x: f64,
    y: f64,
}

impl Point {
    fn move_by(&mut self, delta_x: f64, delta_y: f64) {
        self.x += delta_x;
        self.y += delta_y;
    }
}

struct SomeType;

impl SomeType {
    fn some_type_method() -> &'static str {
        "called on the type"
    }

    fn an_instance_method(&self) -> &'static str {
        "called on an instance"
    }
}
