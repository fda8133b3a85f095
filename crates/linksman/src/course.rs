// ABOUTME: Course-relative geometry and hole metadata for a simulated round.
// ABOUTME: Positions are normalized 0-100; yardage is derived per hole for display.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Lateral damping applied when converting normalized lateral offset to
/// yardage; the course abstraction is much narrower than it is long.
pub const LATERAL_SCALE: f64 = 0.3;

/// A normalized course-relative coordinate. `y` runs 0 (tee) to 100 (pin),
/// `x` runs 0-100 with 50 as the centerline. Not real yardage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The tee box, centered at the start of the hole.
    pub const TEE: Position = Position { x: 50.0, y: 0.0 };

    /// The pin, centered at the far end.
    pub const PIN: Position = Position { x: 50.0, y: 100.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates into the 0-100 playing field.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 100.0),
            y: self.y.clamp(0.0, 100.0),
        }
    }

    /// Distance to the pin in yards for a hole of the given length. Forward
    /// progress maps proportionally; lateral offset is damped.
    pub fn distance_to_pin(&self, hole_yardage: f64) -> f64 {
        let forward = (100.0 - self.y) / 100.0 * hole_yardage;
        let lateral = (self.x - 50.0) / 100.0 * hole_yardage * LATERAL_SCALE;
        forward.hypot(lateral)
    }

    /// Straight-line distance to the pin in normalized units.
    pub fn normalized_distance_to_pin(&self) -> f64 {
        (self.x - 50.0).hypot(100.0 - self.y)
    }
}

/// A hole's water hazard geometry, checked during lie classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WaterHazard {
    /// No water on this hole.
    None,
    /// A creek or pond crossing the hole between two y lines.
    Band {
        y_min: f64,
        y_max: f64,
        x_min: f64,
        x_max: f64,
    },
    /// Water surrounds the green: anything past `approach_y` that is not
    /// within `safe_radius` normalized units of the pin is wet.
    IslandGreen { approach_y: f64, safe_radius: f64 },
}

impl WaterHazard {
    /// Whether the position is inside this hazard region.
    pub fn contains(&self, position: Position) -> bool {
        match *self {
            WaterHazard::None => false,
            WaterHazard::Band {
                y_min,
                y_max,
                x_min,
                x_max,
            } => {
                position.y > y_min
                    && position.y < y_max
                    && position.x >= x_min
                    && position.x <= x_max
            }
            WaterHazard::IslandGreen {
                approach_y,
                safe_radius,
            } => position.y > approach_y && position.normalized_distance_to_pin() > safe_radius,
        }
    }

    fn none() -> Self {
        WaterHazard::None
    }
}

/// Static metadata for one hole. Supplied to the engine, never computed by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleMetadata {
    /// Hole number, 1-18.
    pub number: u8,
    pub par: u8,
    /// Championship-tee yardage, used only to convert normalized distance.
    pub yardage: f64,
    #[serde(default = "WaterHazard::none")]
    pub water: WaterHazard,
    /// Marks the course's signature hole.
    #[serde(default)]
    pub signature: bool,
}

impl HoleMetadata {
    pub fn has_water(&self) -> bool {
        !matches!(self.water, WaterHazard::None)
    }
}

/// An 18-hole course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    holes: Vec<HoleMetadata>,
}

impl Course {
    /// Build a course, validating the 18-hole count and 1-18 numbering.
    pub fn new(name: impl Into<String>, holes: Vec<HoleMetadata>) -> Result<Self> {
        if holes.len() != 18 {
            return Err(Error::InvalidCourse(holes.len()));
        }
        for (i, hole) in holes.iter().enumerate() {
            if hole.number as usize != i + 1 {
                return Err(Error::InvalidHoleIndex(hole.number as usize));
            }
        }
        Ok(Self {
            name: name.into(),
            holes,
        })
    }

    /// Hole metadata by zero-based index.
    pub fn hole(&self, index: usize) -> Result<&HoleMetadata> {
        self.holes.get(index).ok_or(Error::InvalidHoleIndex(index + 1))
    }

    pub fn holes(&self) -> &[HoleMetadata] {
        &self.holes
    }

    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| h.par as u32).sum()
    }

    /// The built-in fictionalized championship course: par 72, 6,805 yards,
    /// with the island-green signature 17th.
    pub fn championship() -> Self {
        fn hole(number: u8, par: u8, yardage: f64, water: WaterHazard) -> HoleMetadata {
            HoleMetadata {
                number,
                par,
                yardage,
                water,
                signature: false,
            }
        }

        let none = WaterHazard::None;
        let mut holes = vec![
            hole(1, 4, 410.0, none),
            hole(2, 5, 540.0, none),
            hole(3, 3, 175.0, none),
            hole(4, 4, 385.0, none),
            hole(
                5,
                4,
                430.0,
                WaterHazard::Band {
                    y_min: 55.0,
                    y_max: 65.0,
                    x_min: 0.0,
                    x_max: 100.0,
                },
            ),
            hole(6, 3, 200.0, none),
            hole(7, 5, 555.0, none),
            hole(
                8,
                4,
                395.0,
                WaterHazard::Band {
                    y_min: 30.0,
                    y_max: 40.0,
                    x_min: 25.0,
                    x_max: 100.0,
                },
            ),
            hole(9, 4, 420.0, none),
            hole(10, 4, 445.0, none),
            hole(
                11,
                5,
                575.0,
                WaterHazard::Band {
                    y_min: 70.0,
                    y_max: 80.0,
                    x_min: 0.0,
                    x_max: 60.0,
                },
            ),
            hole(12, 3, 155.0, none),
            hole(13, 4, 400.0, none),
            hole(14, 4, 465.0, none),
            hole(15, 5, 530.0, none),
            hole(16, 4, 375.0, none),
            hole(
                17,
                3,
                140.0,
                WaterHazard::IslandGreen {
                    approach_y: 70.0,
                    safe_radius: 14.0,
                },
            ),
            hole(18, 4, 455.0, none),
        ];
        holes[16].signature = true;

        Course::new("Pursuit National", holes).expect("built-in course is valid")
    }
}
