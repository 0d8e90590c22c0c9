//! SMPTE-style timecode implementation.
//!
//! This module provides the timecode value type (HH:MM:SS:FF) with:
//! - Standard frame rates (24, 25, 30 fps and fractional variants)
//! - Frame-count conversion and frame-accurate arithmetic
//! - String parsing and formatting
//! - Optional start offset (broadcast reels mastered at 01:00:00:00)

use crate::error::{Result, TimecodeError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Common frame rates used in video production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameRate {
    /// 24 fps (film)
    Fps24,
    /// 23.976 fps (24000/1001, NTSC film)
    Fps23_976,
    /// 25 fps (PAL)
    Fps25,
    /// 29.97 fps (30000/1001, NTSC)
    Fps29_97,
    /// 30 fps
    Fps30,
    /// 48 fps (HFR film)
    Fps48,
    /// 50 fps (PAL)
    Fps50,
    /// 59.94 fps (60000/1001, NTSC)
    Fps59_94,
    /// 60 fps
    Fps60,
    /// Custom frame rate (numerator, denominator)
    Custom {
        /// Frame rate numerator.
        numerator: u32,
        /// Frame rate denominator.
        denominator: u32,
    },
}

impl FrameRate {
    /// Get the frame rate as a rational number (numerator, denominator).
    #[must_use]
    pub fn as_rational(&self) -> (u32, u32) {
        match self {
            Self::Fps24 => (24, 1),
            Self::Fps23_976 => (24000, 1001),
            Self::Fps25 => (25, 1),
            Self::Fps29_97 => (30000, 1001),
            Self::Fps30 => (30, 1),
            Self::Fps48 => (48, 1),
            Self::Fps50 => (50, 1),
            Self::Fps59_94 => (60000, 1001),
            Self::Fps60 => (60, 1),
            Self::Custom {
                numerator,
                denominator,
            } => (*numerator, *denominator),
        }
    }

    /// Get the frame rate as a floating point value.
    ///
    /// All timecode arithmetic runs on this value; fractional rates such
    /// as 29.97 produce fractional intermediate frame counts (no
    /// drop-frame compensation is applied).
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        let (num, den) = self.as_rational();
        num as f64 / den as f64
    }

    /// Create a custom frame rate.
    pub fn custom(numerator: u32, denominator: u32) -> Result<Self> {
        if denominator == 0 {
            return Err(TimecodeError::invalid_frame_rate(numerator, denominator));
        }
        Ok(Self::Custom {
            numerator,
            denominator,
        })
    }

    /// Try to match a rational frame rate to a standard one.
    #[must_use]
    pub fn from_rational(numerator: u32, denominator: u32) -> Self {
        match (numerator, denominator) {
            (24, 1) => Self::Fps24,
            (24000, 1001) => Self::Fps23_976,
            (25, 1) => Self::Fps25,
            (30000, 1001) => Self::Fps29_97,
            (30, 1) => Self::Fps30,
            (48, 1) => Self::Fps48,
            (50, 1) => Self::Fps50,
            (60000, 1001) => Self::Fps59_94,
            (60, 1) => Self::Fps60,
            _ => Self::Custom {
                numerator,
                denominator,
            },
        }
    }
}

impl Default for FrameRate {
    /// The library default is 29.97 fps (NTSC).
    fn default() -> Self {
        Self::Fps29_97
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fps24 => write!(f, "24"),
            Self::Fps23_976 => write!(f, "23.976"),
            Self::Fps25 => write!(f, "25"),
            Self::Fps29_97 => write!(f, "29.97"),
            Self::Fps30 => write!(f, "30"),
            Self::Fps48 => write!(f, "48"),
            Self::Fps50 => write!(f, "50"),
            Self::Fps59_94 => write!(f, "59.94"),
            Self::Fps60 => write!(f, "60"),
            Self::Custom {
                numerator,
                denominator,
            } => {
                write!(f, "{}/{}", numerator, denominator)
            }
        }
    }
}

/// The structural shape of a timecode: hours, minutes, seconds, frames.
///
/// Fields are real-valued. Arithmetic at fractional frame rates produces
/// fractional frames, and a fields value built directly by the caller may
/// hold out-of-range components; normalization happens only when a value
/// is derived from a frame count.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimecodeFields {
    /// Hours component.
    pub hours: f64,
    /// Minutes component.
    pub minutes: f64,
    /// Seconds component.
    pub seconds: f64,
    /// Frames component.
    pub frames: f64,
}

impl TimecodeFields {
    /// Create a fields value. No range validation is performed.
    #[must_use]
    pub fn new(hours: f64, minutes: f64, seconds: f64, frames: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frames,
        }
    }

    /// Express these fields as a linear frame count at the given rate.
    ///
    /// `hours * 3600 * fps + minutes * 60 * fps + seconds * fps + frames`,
    /// with no rounding. Out-of-range fields contribute their literal
    /// value.
    #[must_use]
    pub fn to_frame_count(&self, framerate: FrameRate) -> f64 {
        let fps = framerate.as_f64();
        self.hours * 3600.0 * fps + self.minutes * 60.0 * fps + self.seconds * fps + self.frames
    }

    /// Normalize a linear frame count into fields at the given rate.
    ///
    /// Hours wrap modulo 24, matching the daily wrap of broadcast
    /// timecode; round-trip fidelity with [`to_frame_count`] holds for
    /// counts under 24 hours of elapsed time.
    ///
    /// [`to_frame_count`]: Self::to_frame_count
    #[must_use]
    pub fn from_frame_count(count: f64, framerate: FrameRate) -> Self {
        let fps = framerate.as_f64();
        Self {
            hours: (count / (fps * 3600.0)).floor() % 24.0,
            minutes: (count / (fps * 60.0)).floor() % 60.0,
            seconds: (count / fps).floor() % 60.0,
            frames: count % fps,
        }
    }
}

fn parse_segment(part: &str, component: &str) -> Result<f64> {
    let value: f64 = part.trim().parse().map_err(|_| {
        TimecodeError::invalid_format(format!("Invalid {}: {}", component, part))
    })?;

    if !value.is_finite() {
        return Err(TimecodeError::invalid_format(format!(
            "Invalid {}: {}",
            component, part
        )));
    }

    Ok(value)
}

impl FromStr for TimecodeFields {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        // Parse timecode string: HH:MM:SS:FF
        let s = s.trim();

        let parts: Vec<&str> = s.split(':').collect();

        if parts.len() != 4 {
            return Err(TimecodeError::invalid_format("Expected format HH:MM:SS:FF"));
        }

        Ok(Self {
            hours: parse_segment(parts[0], "hours")?,
            minutes: parse_segment(parts[1], "minutes")?,
            seconds: parse_segment(parts[2], "seconds")?,
            frames: parse_segment(parts[3], "frames")?,
        })
    }
}

/// Anything that can stand in for "a duration or point in time".
///
/// Constructors and arithmetic accept `impl Into<TimecodeInput>`, so
/// frame counts, `HH:MM:SS:FF` strings, and [`TimecodeFields`] values can
/// all be passed directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TimecodeInput {
    /// A raw frame count, already in frame units.
    FrameCount(f64),
    /// An explicit hours/minutes/seconds/frames value.
    Fields(TimecodeFields),
    /// A `HH:MM:SS:FF` string, parsed on use.
    Text(String),
}

impl TimecodeInput {
    /// Resolve this input to a frame count at the given rate.
    ///
    /// A raw frame count passes through unchanged; fields and text are
    /// converted via [`TimecodeFields::to_frame_count`]. Only text can
    /// fail.
    pub fn to_frame_count(&self, framerate: FrameRate) -> Result<f64> {
        match self {
            Self::FrameCount(count) => Ok(*count),
            Self::Fields(fields) => Ok(fields.to_frame_count(framerate)),
            Self::Text(text) => Ok(text.parse::<TimecodeFields>()?.to_frame_count(framerate)),
        }
    }
}

impl From<f64> for TimecodeInput {
    fn from(value: f64) -> Self {
        Self::FrameCount(value)
    }
}

impl From<f32> for TimecodeInput {
    fn from(value: f32) -> Self {
        Self::FrameCount(value as f64)
    }
}

impl From<i32> for TimecodeInput {
    fn from(value: i32) -> Self {
        Self::FrameCount(value as f64)
    }
}

impl From<i64> for TimecodeInput {
    fn from(value: i64) -> Self {
        Self::FrameCount(value as f64)
    }
}

impl From<u32> for TimecodeInput {
    fn from(value: u32) -> Self {
        Self::FrameCount(value as f64)
    }
}

impl From<u64> for TimecodeInput {
    fn from(value: u64) -> Self {
        Self::FrameCount(value as f64)
    }
}

impl From<&str> for TimecodeInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for TimecodeInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<TimecodeFields> for TimecodeInput {
    fn from(value: TimecodeFields) -> Self {
        Self::Fields(value)
    }
}

impl From<Timecode> for TimecodeInput {
    fn from(value: Timecode) -> Self {
        Self::Fields(value.fields())
    }
}

impl From<&Timecode> for TimecodeInput {
    fn from(value: &Timecode) -> Self {
        Self::Fields(value.fields())
    }
}

/// Configuration bound to a [`Timecode`] at construction.
///
/// # Example
///
/// ```rust
/// use smpte_timecode::{FrameRate, TimecodeOptions};
///
/// let opts = TimecodeOptions::default().with_framerate(FrameRate::Fps25);
/// assert_eq!(opts.framerate, FrameRate::Fps25);
/// assert!(opts.start_offset.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimecodeOptions {
    /// Frame rate the timecode is bound to. Defaults to 29.97 fps.
    pub framerate: FrameRate,
    /// Timecode treated as the zero point, if any. Defaults to `None`
    /// (frame counts are absolute). Values before the offset read as
    /// zero, never negative.
    pub start_offset: Option<TimecodeFields>,
}

impl TimecodeOptions {
    /// Options for broadcast masters: reels start at `01:00:00:00`, so
    /// that timecode is the zero point for frame counts and durations.
    #[must_use]
    pub fn broadcast() -> Self {
        Self {
            start_offset: Some(TimecodeFields::new(1.0, 0.0, 0.0, 0.0)),
            ..Self::default()
        }
    }

    /// Replace the frame rate.
    #[must_use]
    pub fn with_framerate(mut self, framerate: FrameRate) -> Self {
        self.framerate = framerate;
        self
    }

    /// Replace the start offset.
    #[must_use]
    pub fn with_start_offset(mut self, start_offset: TimecodeFields) -> Self {
        self.start_offset = Some(start_offset);
        self
    }
}

impl Default for TimecodeOptions {
    fn default() -> Self {
        Self {
            framerate: FrameRate::default(),
            start_offset: None,
        }
    }
}

/// SMPTE-style timecode: an immutable value bound to a frame rate and an
/// optional start offset.
///
/// Arithmetic always returns a new `Timecode` carrying the same options;
/// results that would go below zero clamp silently to zero. Out-of-range
/// fields supplied by the caller are stored verbatim and only normalize
/// when a value is derived from a frame count.
///
/// # Example
///
/// ```rust
/// use smpte_timecode::{FrameRate, Timecode, TimecodeOptions};
///
/// let opts = TimecodeOptions::default().with_framerate(FrameRate::Fps25);
/// let tc = Timecode::with_options("00:00:01:00", opts).unwrap();
/// let later = tc.add(25).unwrap();
/// assert_eq!(later.to_string(), "00:00:02:00");
/// assert_eq!(tc.to_string(), "00:00:01:00"); // unchanged
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timecode {
    /// Hours component.
    pub hours: f64,
    /// Minutes component.
    pub minutes: f64,
    /// Seconds component.
    pub seconds: f64,
    /// Frames component.
    pub frames: f64,
    framerate: FrameRate,
    start_offset_frames: f64,
}

impl Timecode {
    /// Create a timecode from a frame count, a `HH:MM:SS:FF` string, or a
    /// [`TimecodeFields`] value, with default options (29.97 fps, no
    /// start offset).
    ///
    /// Numeric input is an absolute frame count and is normalized into
    /// fields. Fields input is copied verbatim, even out of range. Text
    /// input must have exactly four colon-separated numeric segments.
    pub fn new(input: impl Into<TimecodeInput>) -> Result<Self> {
        Self::with_options(input, TimecodeOptions::default())
    }

    /// Create a timecode with explicit options.
    pub fn with_options(input: impl Into<TimecodeInput>, options: TimecodeOptions) -> Result<Self> {
        let fields = match input.into() {
            TimecodeInput::FrameCount(count) => {
                TimecodeFields::from_frame_count(count, options.framerate)
            }
            TimecodeInput::Fields(fields) => fields,
            TimecodeInput::Text(text) => text.parse()?,
        };
        Ok(Self::from_fields(fields, options))
    }

    /// Create a timecode directly from a fields value. Infallible; the
    /// fields are stored verbatim.
    #[must_use]
    pub fn from_fields(fields: TimecodeFields, options: TimecodeOptions) -> Self {
        // The offset is resolved to a frame count once and fixed for the
        // lifetime of the instance.
        let start_offset_frames = options
            .start_offset
            .map(|offset| offset.to_frame_count(options.framerate))
            .unwrap_or(0.0);

        Self {
            hours: fields.hours,
            minutes: fields.minutes,
            seconds: fields.seconds,
            frames: fields.frames,
            framerate: options.framerate,
            start_offset_frames,
        }
    }

    /// Create a timecode from an absolute frame count. Infallible.
    ///
    /// The count is normalized into fields at the options' rate; the
    /// start offset is not added here, it only applies when reading
    /// [`frame_count`].
    ///
    /// [`frame_count`]: Self::frame_count
    #[must_use]
    pub fn from_frame_count(count: f64, options: TimecodeOptions) -> Self {
        Self::from_fields(
            TimecodeFields::from_frame_count(count, options.framerate),
            options,
        )
    }

    /// Create a timecode from an absolute position in seconds.
    #[must_use]
    pub fn from_seconds(seconds: f64, options: TimecodeOptions) -> Self {
        Self::from_frame_count(seconds * options.framerate.as_f64(), options)
    }

    /// The frame rate this timecode is bound to.
    #[must_use]
    pub fn framerate(&self) -> FrameRate {
        self.framerate
    }

    /// The current fields as a plain [`TimecodeFields`] value.
    #[must_use]
    pub fn fields(&self) -> TimecodeFields {
        TimecodeFields {
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
            frames: self.frames,
        }
    }

    /// The options this timecode carries.
    ///
    /// The start offset is re-derived from its resolved frame count, so
    /// it comes back normalized; a zero offset reads as no offset.
    #[must_use]
    pub fn options(&self) -> TimecodeOptions {
        TimecodeOptions {
            framerate: self.framerate,
            start_offset: if self.start_offset_frames == 0.0 {
                None
            } else {
                Some(TimecodeFields::from_frame_count(
                    self.start_offset_frames,
                    self.framerate,
                ))
            },
        }
    }

    /// The current fields expressed as a frame count, relative to the
    /// start offset where one is configured.
    ///
    /// Positions before the start offset read as zero, never negative.
    ///
    /// # Example
    ///
    /// ```rust
    /// use smpte_timecode::{FrameRate, Timecode, TimecodeOptions};
    ///
    /// let opts = TimecodeOptions::broadcast().with_framerate(FrameRate::Fps30);
    /// let tc = Timecode::with_options("01:00:01:00", opts).unwrap();
    /// assert_eq!(tc.frame_count(), 30.0);
    /// ```
    #[must_use]
    pub fn frame_count(&self) -> f64 {
        let count = self.fields().to_frame_count(self.framerate) - self.start_offset_frames;
        if count < 0.0 {
            return 0.0;
        }
        count
    }

    /// Add a duration, returning a new timecode with the same options.
    ///
    /// A numeric input is the frame delta directly; a string or fields
    /// input is converted to its full frame count at this timecode's rate
    /// and that count is the delta (a duration written in timecode
    /// notation). Fails only if a string input does not parse.
    pub fn add(self, input: impl Into<TimecodeInput>) -> Result<Self> {
        let delta = input.into().to_frame_count(self.framerate)?;
        Ok(self.shifted(delta, false))
    }

    /// Subtract a duration, returning a new timecode with the same
    /// options.
    ///
    /// Subtracting more than is present clamps silently to zero (to the
    /// start offset, where one is configured); use [`checked_subtract`]
    /// to detect that case instead.
    ///
    /// [`checked_subtract`]: Self::checked_subtract
    pub fn subtract(self, input: impl Into<TimecodeInput>) -> Result<Self> {
        let delta = input.into().to_frame_count(self.framerate)?;
        Ok(self.shifted(delta, true))
    }

    /// Subtract a duration, failing with [`TimecodeError::Underflow`]
    /// where [`subtract`] would have clamped.
    ///
    /// [`subtract`]: Self::subtract
    pub fn checked_subtract(&self, input: impl Into<TimecodeInput>) -> Result<Self> {
        let delta = input.into().to_frame_count(self.framerate)?;
        if delta > self.frame_count() {
            return Err(TimecodeError::Underflow);
        }
        Ok(self.shifted(delta, true))
    }

    /// Apply a frame delta to the offset-relative count, clamp at zero,
    /// re-base on the start offset, and normalize.
    fn shifted(&self, delta: f64, subtract: bool) -> Self {
        let count = if subtract {
            self.frame_count() - delta
        } else {
            self.frame_count() + delta
        };
        let count = if count < 0.0 { 0.0 } else { count };

        let fields = TimecodeFields::from_frame_count(count + self.start_offset_frames, self.framerate);
        Self {
            hours: fields.hours,
            minutes: fields.minutes,
            seconds: fields.seconds,
            frames: fields.frames,
            ..*self
        }
    }

    /// The offset-relative position in milliseconds:
    /// `(1000 / framerate) * frame_count()`.
    #[must_use]
    pub fn to_milliseconds(&self) -> f64 {
        (1000.0 / self.framerate.as_f64()) * self.frame_count()
    }

    /// The offset-relative position in seconds:
    /// `frame_count() / framerate`.
    #[must_use]
    pub fn to_seconds(&self) -> f64 {
        self.frame_count() / self.framerate.as_f64()
    }

    /// Re-express this timecode at a different frame rate, preserving the
    /// wall-clock position of both the fields and the start offset.
    #[must_use]
    pub fn convert_to(&self, framerate: FrameRate) -> Self {
        let from_fps = self.framerate.as_f64();
        let to_fps = framerate.as_f64();

        let seconds = self.fields().to_frame_count(self.framerate) / from_fps;
        let offset_seconds = self.start_offset_frames / from_fps;

        let fields = TimecodeFields::from_frame_count(seconds * to_fps, framerate);
        Self {
            hours: fields.hours,
            minutes: fields.minutes,
            seconds: fields.seconds,
            frames: fields.frames,
            framerate,
            start_offset_frames: offset_seconds * to_fps,
        }
    }

    /// Absolute position in seconds, ignoring the start offset. Used for
    /// comparisons across frame rates.
    fn absolute_seconds(&self) -> f64 {
        self.fields().to_frame_count(self.framerate) / self.framerate.as_f64()
    }
}

impl Default for Timecode {
    fn default() -> Self {
        Self::from_fields(TimecodeFields::default(), TimecodeOptions::default())
    }
}

fn pad(value: f64) -> String {
    if (0.0..10.0).contains(&value) {
        return format!("0{}", value);
    }
    value.to_string()
}

impl fmt::Display for Timecode {
    /// Formats as `HH:MM:SS:FF`. Each field is zero-padded to a minimum
    /// of two digits; wider values print in full, never truncated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            pad(self.hours),
            pad(self.minutes),
            pad(self.seconds),
            pad(self.frames)
        )
    }
}

impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        if self.framerate == other.framerate {
            self.hours == other.hours
                && self.minutes == other.minutes
                && self.seconds == other.seconds
                && self.frames == other.frames
        } else {
            // Compare by absolute time value for different frame rates
            (self.absolute_seconds() - other.absolute_seconds()).abs() < 0.0001
        }
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.absolute_seconds().partial_cmp(&other.absolute_seconds())
    }
}

impl Add for Timecode {
    type Output = Timecode;

    /// Adds the right-hand timecode's full frame count as a duration,
    /// evaluated at the left-hand side's frame rate.
    fn add(self, other: Timecode) -> Timecode {
        self.shifted(other.fields().to_frame_count(self.framerate), false)
    }
}

impl Sub for Timecode {
    type Output = Timecode;

    /// Subtracts the right-hand timecode's full frame count, clamping at
    /// zero.
    fn sub(self, other: Timecode) -> Timecode {
        self.shifted(other.fields().to_frame_count(self.framerate), true)
    }
}

/// Parse a `HH:MM:SS:FF` string into a timecode with explicit options.
pub fn parse_timecode(s: &str, options: TimecodeOptions) -> Result<Timecode> {
    let fields: TimecodeFields = s.parse()?;
    Ok(Timecode::from_fields(fields, options))
}
