//! Complex gesture recognition from streamed skeletal joint positions.
//!
//! This library turns the joint positions reported by a body-tracking sensor
//! into discrete gestures such as swipes, punches or a two-armed "praise the
//! sun" pose. All classification is done with fixed geometric rules.
//!
//! The recognition pipeline runs once per tick:
//! 1. Sample the joint positions of the primary user
//! 2. Classify each hand's pose with a battery of distance and direction tests
//! 3. Fold the resulting symbols into a rolling left/right history
//! 4. Match the newest end of that history against the gesture templates
//!
//! # Examples
//!
//! ## Recognizing from a sensor
//!
//! ```no_run
//! use body_gesture_recognition::{
//!     recognizer::GestureRecognizer,
//!     replay::Recording,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let recording = Recording::from_file("session.yaml")?;
//! let mut recognizer = GestureRecognizer::default();
//!
//! for frame in &recording.frames {
//!     if let Some(gesture) = recognizer.tick(frame) {
//!         println!("Recognized {}", gesture);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom templates
//!
//! ```
//! use body_gesture_recognition::{
//!     config::RecognitionConfig,
//!     library::{GestureKind, GestureLibrary, GestureTemplate},
//!     pose_classifier::Observation,
//!     recognizer::GestureRecognizer,
//!     symbols::{Hand, Symbol, SymbolPair},
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let jab = GestureTemplate::new(
//!     "Jab",
//!     GestureKind::Punch,
//!     vec![
//!         SymbolPair::new(Symbol::None, Symbol::RHSP),
//!         SymbolPair::new(Symbol::None, Symbol::TRHF),
//!     ],
//! )?;
//! let library = GestureLibrary::from_templates(vec![jab])?;
//! let mut recognizer = GestureRecognizer::new(library, &RecognitionConfig::default())?;
//!
//! recognizer.process_observations(&[Observation::new(Hand::Right, Symbol::RHSP)]);
//! let gesture = recognizer.process_observations(&[Observation::new(Hand::Right, Symbol::TRHF)]);
//! assert_eq!(gesture, Some(GestureKind::Punch));
//! # Ok(())
//! # }
//! ```

/// Joint set, sensor interface and per-tick sampling
pub mod skeleton;

/// Dominant axis of a translation
pub mod direction;

/// Hand symbols and left/right pairs
pub mod symbols;

/// Geometric pose tests
pub mod pose_classifier;

/// Symbol history and the per-tick merge rule
pub mod sequence;

/// Gesture templates
pub mod library;

/// Tick-driven recognizer
pub mod recognizer;

/// Recorded skeleton streams
pub mod replay;

/// Error types and result handling
pub mod error;

/// Constants used throughout the library
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
pub use library::GestureKind;
pub use recognizer::GestureRecognizer;
