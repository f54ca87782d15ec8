//! Structs copied by value versus shared, mutable references.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use harness::{Registry, say};

use super::example;

const TOPIC: &str = "classes";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Resolution {
    width: u32,
    height: u32,
}

#[derive(Debug, Clone, Default)]
struct VideoMode {
    resolution: Resolution,
    interlaced: bool,
    frame_rate: f64,
    name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompassPoint {
    West,
    East,
}

pub fn register(registry: &mut Registry) -> harness::Result<()> {
    registry.insert(example(
        TOPIC,
        "properties",
        access_properties,
        &[
            "The width of someResolution is 0",
            "The width of someVideoMode is 0",
            "The width of someVideoMode is now 1280",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "value-copy",
        copy_values,
        &[
            "cinema is now 2048 pixels wide",
            "hd is still 1920 pixels wide",
            "The remembered direction is still West",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "shared-reference",
        share_reference,
        &[
            "The frameRate property of tenEighty is now 30.0",
            "tenEighty and alsoTenEighty refer to the same VideoMode instance.",
            "tenEighty is 1080i at 1920x1080, interlaced: true",
        ],
    ))?;
    Ok(())
}

fn access_properties() -> Result<()> {
    let some_resolution = Resolution::default();
    let mut some_video_mode = VideoMode::default();
    say!("The width of someResolution is {}", some_resolution.width);
    say!(
        "The width of someVideoMode is {}",
        some_video_mode.resolution.width
    );
    some_video_mode.resolution.width = 1280;
    say!(
        "The width of someVideoMode is now {}",
        some_video_mode.resolution.width
    );
    Ok(())
}

fn copy_values() -> Result<()> {
    let hd = Resolution {
        width: 1920,
        height: 1080,
    };
    let mut cinema = hd;
    cinema.width = 2048;
    say!("cinema is now {} pixels wide", cinema.width);
    say!("hd is still {} pixels wide", hd.width);

    let mut current_direction = CompassPoint::West;
    let remembered_direction = current_direction;
    current_direction = CompassPoint::East;
    if remembered_direction == CompassPoint::West && current_direction != remembered_direction {
        say!("The remembered direction is still {remembered_direction:?}");
    }
    Ok(())
}

fn share_reference() -> Result<()> {
    let hd = Resolution {
        width: 1920,
        height: 1080,
    };
    let ten_eighty = Rc::new(RefCell::new(VideoMode {
        resolution: hd,
        interlaced: true,
        frame_rate: 25.0,
        name: Some("1080i".to_string()),
    }));

    let also_ten_eighty = Rc::clone(&ten_eighty);
    also_ten_eighty.borrow_mut().frame_rate = 30.0;

    say!(
        "The frameRate property of tenEighty is now {:?}",
        ten_eighty.borrow().frame_rate
    );
    if Rc::ptr_eq(&ten_eighty, &also_ten_eighty) {
        say!("tenEighty and alsoTenEighty refer to the same VideoMode instance.");
    }
    let mode = ten_eighty.borrow();
    say!(
        "tenEighty is {} at {}x{}, interlaced: {}",
        mode.name.as_deref().unwrap_or("unnamed"),
        mode.resolution.width,
        mode.resolution.height,
        mode.interlaced
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_copies_are_independent() {
        let vga = Resolution {
            width: 640,
            height: 480,
        };
        let mut copy = vga;
        copy.height = 600;
        assert_eq!(vga.height, 480);
        assert_eq!(copy.width, 640);
    }

    #[test]
    fn remembered_direction_prints_variant_name() {
        let (lines, outcome) = harness::sink::capture(copy_values);
        assert!(outcome.is_ok());
        assert_eq!(
            lines.last().map(String::as_str),
            Some("The remembered direction is still West")
        );
    }
}
