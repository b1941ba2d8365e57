//! Rink drawing core - pure, deterministic, and testable
//!
//! This crate turns a requested terminal size into a character grid showing
//! a schematic hockey rink. It performs no I/O; printing lives in
//! `rink-term`.
//!
//! # Module Structure
//!
//! - [`canvas`]: rectangular character grid with clipped writes
//! - [`layout`]: marking coordinates derived from fractions of the size
//! - [`stamp`]: diamond-approximated circles with border clipping
//! - [`builder`]: assembles boards, lines, goals and faceoff circles
//!
//! # Drawing order
//!
//! 1. Boards on the first and last row
//! 2. Vertical lines on every interior row, then the goal markers
//! 3. Nine faceoff dots
//! 4. The enlarged center-ice circle, centered on the bottom board
//!
//! Each step overwrites whatever an earlier step left in a cell.
//!
//! # Example
//!
//! ```
//! use rink_core::{create, stamp, Canvas};
//! use rink_types::Point;
//!
//! let rink = create(101, 25);
//! assert_eq!(rink.width(), 101);
//! assert_eq!(rink.height(), 25);
//! assert_eq!(rink.get(Point::new(5, 12)), Some('#'));
//!
//! let mut blank = Canvas::new(7, 5);
//! stamp(&mut blank, Point::new(3, 2), 1, 'o').unwrap();
//! assert_eq!(blank.get(Point::new(2, 1)), Some('/'));
//! ```

pub mod builder;
pub mod canvas;
pub mod error;
pub mod layout;
pub mod stamp;

pub use builder::{create, create_from_layout};
pub use canvas::Canvas;
pub use error::{CanvasError, Result};
pub use layout::{RinkLayout, FACEOFF_DOT_COUNT};
pub use stamp::{stamp, Circle};
