//! SMPTE-style Timecode Value Library
//!
//! This crate provides a timecode value type in the standard HH:MM:SS:FF
//! format with:
//!
//! - **Frame-accurate arithmetic**: add and subtract durations given as
//!   frame counts, `HH:MM:SS:FF` strings, or explicit field values
//! - **Configurable frame rate**: standard rates plus custom rationals,
//!   defaulting to 29.97 fps (NTSC)
//! - **Start offsets**: broadcast masters where a reel starts at
//!   `01:00:00:00` and that timecode is the logical zero point
//! - **String parsing and formatting**: the colon-delimited form only
//!
//! # Quick Start
//!
//! ```rust
//! use smpte_timecode::{Timecode, FrameRate, TimecodeOptions};
//!
//! // Parse a timecode (default options: 29.97 fps, no start offset)
//! let tc: Timecode = "01:30:45:12".parse().unwrap();
//! println!("Timecode: {}", tc); // Output: 01:30:45:12
//!
//! // Arithmetic returns new values; the receiver is unchanged
//! let opts = TimecodeOptions::default().with_framerate(FrameRate::Fps25);
//! let tc = Timecode::with_options("00:00:01:00", opts).unwrap();
//! let later = tc.add(25).unwrap();
//! assert_eq!(later.to_string(), "00:00:02:00");
//! ```
//!
//! # Start Offsets
//!
//! Broadcast reels are commonly mastered to start at `01:00:00:00`. With
//! a start offset configured, frame counts and durations are measured
//! from that point, and positions before it read as zero:
//!
//! ```rust
//! use smpte_timecode::{Timecode, FrameRate, TimecodeOptions};
//!
//! let opts = TimecodeOptions::broadcast().with_framerate(FrameRate::Fps30);
//! let tc = Timecode::with_options("01:00:01:00", opts).unwrap();
//! assert_eq!(tc.frame_count(), 30.0);
//! ```
//!
//! # Clamping
//!
//! Subtracting more than is present clamps silently to zero rather than
//! failing; [`Timecode::checked_subtract`] reports the underflow instead.
//!
//! Drop-frame compensation (and the `HH:MM:SS;FF` notation) is out of
//! scope: fractional rates run on their true fractional value.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod smpte;

// Re-export main types
pub use error::{Result, TimecodeError};
pub use smpte::{
    parse_timecode, FrameRate, Timecode, TimecodeFields, TimecodeInput, TimecodeOptions,
};

/// Create a timecode from hours, minutes, seconds, and frames.
///
/// This is a convenience function using default options (29.97 fps, no
/// start offset). The fields are stored verbatim; no range validation is
/// performed.
///
/// # Example
/// ```rust
/// use smpte_timecode::timecode;
///
/// let tc = timecode(1.0, 30.0, 45.0, 12.0);
/// assert_eq!(tc.to_string(), "01:30:45:12");
/// ```
#[must_use]
pub fn timecode(hours: f64, minutes: f64, seconds: f64, frames: f64) -> Timecode {
    Timecode::from_fields(
        TimecodeFields::new(hours, minutes, seconds, frames),
        TimecodeOptions::default(),
    )
}

/// Calculate the duration between two timecodes in seconds.
///
/// Measured on each side's own offset-relative position; negative if
/// `end` is before `start`.
#[must_use]
pub fn duration_seconds(start: &Timecode, end: &Timecode) -> f64 {
    end.to_seconds() - start.to_seconds()
}

/// Calculate the duration between two timecodes in frames.
///
/// Note: this only makes sense if both timecodes have the same frame
/// rate.
#[must_use]
pub fn duration_frames(start: &Timecode, end: &Timecode) -> f64 {
    end.frame_count() - start.frame_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_timecode_convenience() {
        let tc = timecode(1.0, 30.0, 45.0, 12.0);
        assert_eq!(tc.to_string(), "01:30:45:12");
        assert_eq!(tc.framerate(), FrameRate::Fps29_97);
    }

    #[test]
    fn test_duration_seconds() {
        let opts = TimecodeOptions::default().with_framerate(FrameRate::Fps24);
        let start = Timecode::with_options("00:00:00:00", opts).unwrap();
        let end = Timecode::with_options("00:01:00:00", opts).unwrap();

        let duration = duration_seconds(&start, &end);
        assert!((duration - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_duration_frames() {
        let opts = TimecodeOptions::default().with_framerate(FrameRate::Fps24);
        let start = Timecode::with_options("00:00:00:00", opts).unwrap();
        let end = Timecode::with_options("00:00:01:00", opts).unwrap();

        assert_eq!(duration_frames(&start, &end), 24.0);
    }

    #[test]
    fn test_negative_duration() {
        let opts = TimecodeOptions::default().with_framerate(FrameRate::Fps24);
        let start = Timecode::with_options("00:01:00:00", opts).unwrap();
        let end = Timecode::with_options("00:00:00:00", opts).unwrap();

        let duration = duration_seconds(&start, &end);
        assert!((duration + 60.0).abs() < 0.001);

        assert_eq!(duration_frames(&start, &end), -1440.0); // -60 seconds * 24 fps
    }

    #[test]
    fn test_frame_rate_conversions() {
        // One minute should be about 60 wall-clock seconds at every rate.
        let frame_rates = [
            FrameRate::Fps24,
            FrameRate::Fps23_976,
            FrameRate::Fps25,
            FrameRate::Fps29_97,
            FrameRate::Fps30,
            FrameRate::Fps48,
            FrameRate::Fps50,
            FrameRate::Fps59_94,
            FrameRate::Fps60,
        ];

        for fps in frame_rates {
            let opts = TimecodeOptions::default().with_framerate(fps);
            let tc = Timecode::with_options("00:01:00:00", opts).unwrap();
            let seconds = tc.to_seconds();
            assert!(
                (seconds - 60.0).abs() < 0.1,
                "Frame rate {} gave {} seconds",
                fps,
                seconds
            );
        }
    }
}
