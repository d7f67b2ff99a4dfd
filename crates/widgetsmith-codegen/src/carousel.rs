//! Carousel model shared by the generated behavior scripts.
//!
//! The scripts run in the browser, but their state machine, depth stacking
//! and responsive metric are defined here so they can be exercised without a
//! DOM. The constants below are interpolated into the script templates.

/// Autoplay period.
pub const AUTOPLAY_PERIOD_MS: u64 = 5000;

/// Delay between successive words when a quote is revealed.
pub const WORD_STAGGER_MS: u64 = 20;

/// Piecewise-linear gap between stacked images, keyed by container width.
///
/// Below `min_width` the gap is `min_gap`; between the breakpoints it is
/// interpolated; above `max_width` it keeps growing from `max_gap` with
/// `slope` (never dropping below `min_gap`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveGap {
    pub min_width: f64,
    pub max_width: f64,
    pub min_gap: f64,
    pub max_gap: f64,
    pub slope: f64,
}

impl ResponsiveGap {
    pub const DEFAULT: Self = Self {
        min_width: 1024.0,
        max_width: 1456.0,
        min_gap: 60.0,
        max_gap: 86.0,
        slope: 0.06018,
    };

    pub fn gap(&self, width: f64) -> f64 {
        if width <= self.min_width {
            self.min_gap
        } else if width >= self.max_width {
            self.min_gap
                .max(self.max_gap + self.slope * (width - self.max_width))
        } else {
            self.min_gap
                + (self.max_gap - self.min_gap)
                    * ((width - self.min_width) / (self.max_width - self.min_width))
        }
    }
}

impl Default for ResponsiveGap {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One change of the active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    /// The move crossed the end of the list (last to first or first to last).
    pub wrapped: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Autoplay {
    Off,
    Running { period_ms: u64, elapsed_ms: u64 },
    /// Cancelled by manual navigation; never resumes.
    Cancelled,
}

/// Cyclic carousel over `len` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    autoplay: Autoplay,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            autoplay: Autoplay::Off,
        }
    }

    /// Carousel that advances by itself every `period_ms`.
    pub fn with_autoplay(len: usize, period_ms: u64) -> Self {
        Self {
            autoplay: Autoplay::Running {
                period_ms,
                elapsed_ms: 0,
            },
            ..Self::new(len)
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_autoplaying(&self) -> bool {
        matches!(self.autoplay, Autoplay::Running { .. })
    }

    /// Move by `step` items, wrapping modulo the length.
    pub fn advance(&mut self, step: isize) -> Transition {
        let from = self.active;
        if self.len == 0 {
            return Transition {
                from,
                to: from,
                wrapped: false,
            };
        }

        let len = self.len as isize;
        let raw = from as isize + step;
        let to = raw.rem_euclid(len) as usize;
        self.active = to;

        Transition {
            from,
            to,
            wrapped: from != to && !(0..len).contains(&raw),
        }
    }

    /// Button navigation: advance and cancel autoplay for good.
    pub fn navigate(&mut self, step: isize) -> Transition {
        let transition = self.advance(step);
        if self.autoplay != Autoplay::Off {
            self.autoplay = Autoplay::Cancelled;
        }
        transition
    }

    /// Let `elapsed_ms` pass, advancing once per completed autoplay period.
    pub fn tick(&mut self, elapsed_ms: u64) -> Vec<Transition> {
        let Autoplay::Running {
            period_ms,
            elapsed_ms: already,
        } = self.autoplay
        else {
            return Vec::new();
        };
        if period_ms == 0 {
            return Vec::new();
        }

        let total = already + elapsed_ms;
        let fired = total / period_ms;
        self.autoplay = Autoplay::Running {
            period_ms,
            elapsed_ms: total % period_ms,
        };
        (0..fired).map(|_| self.advance(1)).collect()
    }

    /// Signed distance of `index` from the active item, wrapped into
    /// `[0, len)`.
    pub fn cyclic_offset(&self, index: usize) -> usize {
        if self.len == 0 {
            return 0;
        }
        (index + self.len - self.active % self.len) % self.len
    }

    /// Linear signed distance of `index` from the active item.
    pub fn linear_offset(&self, index: usize) -> isize {
        index as isize - self.active as isize
    }
}

/// Visual placement of one image in the circular widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularPose {
    pub z_index: i32,
    pub scale: f64,
    /// Horizontal shift, percent of the image width.
    pub translate_x_percent: f64,
    /// Upward lift in pixels; the script converts it to percent of the
    /// rendered image height.
    pub lift_px: f64,
    pub rotate_y_deg: f64,
}

impl CircularPose {
    pub const ADJACENT_SCALE: f64 = 0.85;
    pub const BEHIND_SCALE: f64 = 0.7;
    pub const ADJACENT_SHIFT_PERCENT: f64 = 20.0;
    pub const ADJACENT_ROTATION_DEG: f64 = 15.0;
    /// Fraction of the gap an adjacent image is lifted by.
    pub const LIFT_FACTOR: f64 = 0.8;

    /// Pose of `index` with the carousel's current active item and `gap`.
    pub fn for_item(carousel: &Carousel, index: usize, gap: f64) -> Self {
        let len = carousel.len() as i32;
        let offset = carousel.cyclic_offset(index);
        let lift = gap * Self::LIFT_FACTOR;

        if offset == 0 {
            Self {
                z_index: len,
                scale: 1.0,
                translate_x_percent: 0.0,
                lift_px: 0.0,
                rotate_y_deg: 0.0,
            }
        } else if offset == 1 {
            Self {
                z_index: len - 1,
                scale: Self::ADJACENT_SCALE,
                translate_x_percent: Self::ADJACENT_SHIFT_PERCENT,
                lift_px: lift,
                rotate_y_deg: -Self::ADJACENT_ROTATION_DEG,
            }
        } else if offset == carousel.len() - 1 {
            Self {
                z_index: len - 1,
                scale: Self::ADJACENT_SCALE,
                translate_x_percent: -Self::ADJACENT_SHIFT_PERCENT,
                lift_px: lift,
                rotate_y_deg: Self::ADJACENT_ROTATION_DEG,
            }
        } else {
            Self {
                z_index: len - offset as i32,
                scale: Self::BEHIND_SCALE,
                translate_x_percent: 0.0,
                lift_px: 0.0,
                rotate_y_deg: 0.0,
            }
        }
    }
}

/// Visual placement of one image in the stacked widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackPose {
    pub z_index: i32,
    pub opacity: f64,
    pub scale: f64,
    pub translate_y_percent: f64,
    pub rotate_y_deg: f64,
}

impl StackPose {
    pub const SCALE_STEP: f64 = 0.15;
    pub const MIN_SCALE: f64 = 0.1;
    pub const INACTIVE_OPACITY: f64 = 0.7;
    pub const ADJACENT_SHIFT_PERCENT: f64 = 20.0;
    pub const ADJACENT_ROTATION_DEG: f64 = 15.0;

    pub fn for_item(carousel: &Carousel, index: usize) -> Self {
        let offset = carousel.linear_offset(index);
        let distance = offset.unsigned_abs();
        let (translate_y_percent, rotate_y_deg) = match offset {
            -1 => (-Self::ADJACENT_SHIFT_PERCENT, Self::ADJACENT_ROTATION_DEG),
            1 => (Self::ADJACENT_SHIFT_PERCENT, -Self::ADJACENT_ROTATION_DEG),
            _ => (0.0, 0.0),
        };

        Self {
            z_index: carousel.len() as i32 - distance as i32,
            opacity: if offset == 0 { 1.0 } else { Self::INACTIVE_OPACITY },
            scale: (1.0 - distance as f64 * Self::SCALE_STEP).max(Self::MIN_SCALE),
            translate_y_percent,
            rotate_y_deg,
        }
    }
}
