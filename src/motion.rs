/// Displacement under which a spring is considered at rest.
pub const REST_DELTA: f64 = 0.01;
/// Speed under which a spring is considered at rest.
pub const REST_SPEED: f64 = 0.05;

const CRITICAL_EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    pub const HERO: Self = Self::new(400.0, 50.0);
    pub const LANGUAGES: Self = Self::new(100.0, 30.0);
    pub const ABOUT: Self = Self::new(200.0, 80.0);
    pub const PROJECTS: Self = Self::new(200.0, 80.0);
    pub const CONTACT: Self = Self::new(300.0, 100.0);

    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// `1.0` is critical damping; anything at or above it never overshoots.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A damped harmonic oscillator chasing `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn jump(&mut self, value: f64) {
        if value.is_finite() {
            self.value = value;
            self.target = value;
            self.velocity = 0.0;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    pub fn step(&mut self, dt: f64) -> f64 {
        if dt.is_nan() || dt <= 0.0 || self.is_settled() {
            return self.value;
        }

        let (displacement, velocity) = self.evolve(self.value - self.target, self.velocity, dt);

        if displacement.abs() < REST_DELTA && velocity.abs() < REST_SPEED {
            self.value = self.target;
            self.velocity = 0.0;
        } else {
            self.value = self.target + displacement;
            self.velocity = velocity;
        }

        self.value
    }

    fn evolve(&self, x0: f64, v0: f64, t: f64) -> (f64, f64) {
        let omega = self.config.natural_frequency();
        let zeta = self.config.damping_ratio();

        if !omega.is_finite() || omega <= 0.0 {
            return (0.0, 0.0);
        }

        if (zeta - 1.0).abs() < CRITICAL_EPSILON {
            let c = v0 + omega * x0;
            let decay = (-omega * t).exp();
            return (decay * (x0 + c * t), decay * (v0 - omega * c * t));
        }

        if zeta < 1.0 {
            let decay_rate = zeta * omega;
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + decay_rate * x0) / damped;
            let decay = (-decay_rate * t).exp();
            let (sin, cos) = (damped * t).sin_cos();
            let x = decay * (x0 * cos + b * sin);
            let v = decay * (v0 * cos - (decay_rate * b + x0 * damped) * sin);
            return (x, v);
        }

        let spread = omega * (zeta * zeta - 1.0).sqrt();
        let r1 = -zeta * omega + spread;
        let r2 = -zeta * omega - spread;
        let c1 = (v0 - r2 * x0) / (r1 - r2);
        let c2 = x0 - c1;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerProfile {
    pub spring: SpringConfig,
    pub tilt_scale: f64,
    pub drift_scale: f64,
}

impl PointerProfile {
    pub const HERO: Self = Self {
        spring: SpringConfig::HERO,
        tilt_scale: 20.0,
        drift_scale: 10.0,
    };
    pub const ABOUT: Self = Self {
        spring: SpringConfig::ABOUT,
        tilt_scale: 10.0,
        drift_scale: 8.0,
    };
    pub const PROJECTS: Self = Self {
        spring: SpringConfig::PROJECTS,
        tilt_scale: 8.0,
        drift_scale: 6.0,
    };
    pub const CONTACT: Self = Self {
        spring: SpringConfig::CONTACT,
        tilt_scale: 5.0,
        drift_scale: 3.0,
    };

    /// Container rotation targets `(rotate_x, rotate_y)` in degrees for a
    /// normalised pointer offset.
    pub fn tilt(&self, (offset_x, offset_y): (f64, f64)) -> (f64, f64) {
        (offset_y * self.tilt_scale, offset_x * self.tilt_scale)
    }

    pub fn drift(&self, (offset_x, offset_y): (f64, f64)) -> (f64, f64) {
        (offset_x * self.drift_scale, offset_y * self.drift_scale)
    }
}

/// Rotation `(rotate_x, rotate_y)` in degrees of a backdrop word pushed behind
/// its section, leaning with the unsmoothed drift.
pub fn word_lean((drift_x, drift_y): (f64, f64), lean: f64) -> (f64, f64) {
    (drift_y * lean, drift_x * lean)
}

/// Pointer position relative to the centre of `container`, normalised by its
/// size. A collapsed container reports no offset.
pub fn normalized_offset(client_x: f64, client_y: f64, container: Rect) -> (f64, f64) {
    let collapsed = |extent: f64| extent.is_nan() || extent <= 0.0;
    if collapsed(container.width) || collapsed(container.height) {
        return (0.0, 0.0);
    }

    let (center_x, center_y) = container.center();
    (
        (client_x - center_x) / container.width,
        (client_y - center_y) / container.height,
    )
}

pub fn viewport_drift(client_x: f64, client_y: f64, viewport: (f64, f64), factor: f64) -> (f64, f64) {
    (
        (client_x - viewport.0 / 2.0) * factor,
        (client_y - viewport.1 / 2.0) * factor,
    )
}

/// Clamped piecewise-linear map from `inputs` to `outputs`.
///
/// `inputs` must be ascending. Mismatched or empty stops fall back to the
/// first output (or zero).
pub fn interpolate(inputs: &[f64], outputs: &[f64], value: f64) -> f64 {
    let fallback = outputs.first().copied().unwrap_or(0.0);
    if inputs.len() != outputs.len() || inputs.len() < 2 || !value.is_finite() {
        return fallback;
    }

    let last = inputs.len() - 1;
    if value <= inputs[0] {
        return outputs[0];
    }
    if value >= inputs[last] {
        return outputs[last];
    }

    for index in 0..last {
        let (start, end) = (inputs[index], inputs[index + 1]);
        if value <= end {
            let span = end - start;
            if span <= 0.0 {
                return outputs[index + 1];
            }
            let progress = (value - start) / span;
            return outputs[index] + (outputs[index + 1] - outputs[index]) * progress;
        }
    }

    outputs[last]
}

pub struct ScrollParallax {
    pub inputs: [f64; 2],
    pub outputs: [f64; 2],
}

impl ScrollParallax {
    pub const HERO_BACKGROUND: Self = Self::new([0.0, 500.0], [0.0, 150.0]);
    pub const HERO_TEXT: Self = Self::new([0.0, 500.0], [0.0, -100.0]);
    pub const HERO_IMAGE: Self = Self::new([0.0, 500.0], [0.0, -50.0]);
    pub const ABOUT_BACKGROUND: Self = Self::new([0.0, 1000.0], [0.0, 100.0]);
    pub const PROJECTS_BACKGROUND: Self = Self::new([0.0, 1000.0], [0.0, 150.0]);
    pub const CONTACT_BACKGROUND: Self = Self::new([0.0, 1000.0], [0.0, 150.0]);

    const fn new(inputs: [f64; 2], outputs: [f64; 2]) -> Self {
        Self { inputs, outputs }
    }

    pub fn offset(&self, scroll_y: f64) -> f64 {
        interpolate(&self.inputs, &self.outputs, scroll_y)
    }
}

/// How far a block has travelled through the viewport: `0.0` when its top
/// touches the bottom edge, `1.0` when its bottom leaves the top edge.
pub fn scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + rect_height;
    if travel.is_nan() || travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / travel).clamp(0.0, 1.0)
}

pub fn languages_tilt(progress: f64) -> f64 {
    interpolate(&[0.0, 0.5, 1.0], &[0.0, 10.0, 0.0], progress)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    once: bool,
    visible: bool,
}

impl Reveal {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Records an intersection change and returns whether the block should
    /// now be shown.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting {
            self.visible = true;
        } else if !self.once {
            self.visible = false;
        }
        self.visible
    }

    /// Used when the host cannot observe intersections at all.
    pub fn force_visible(&mut self) {
        self.visible = true;
    }
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

pub fn scatter_particle(index: usize) -> Particle {
    let mut state = (index as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut unit = || {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    };

    Particle {
        left_pct: unit() * 100.0,
        top_pct: unit() * 100.0,
        delay_s: unit() * 5.0,
        duration_s: 10.0 + unit() * 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    fn run_until_settled(spring: &mut Spring, max_frames: usize) -> Vec<f64> {
        let mut trace = Vec::new();
        for _ in 0..max_frames {
            trace.push(spring.step(FRAME));
            if spring.is_settled() {
                break;
            }
        }
        trace
    }

    #[test]
    fn section_presets_never_oscillate() {
        for config in [
            SpringConfig::HERO,
            SpringConfig::LANGUAGES,
            SpringConfig::ABOUT,
            SpringConfig::PROJECTS,
            SpringConfig::CONTACT,
        ] {
            assert!(config.damping_ratio() >= 1.0, "{config:?} is underdamped");
        }
    }

    #[test]
    fn spring_moves_monotonically_toward_new_target_and_settles_exactly() {
        for config in [SpringConfig::HERO, SpringConfig::ABOUT, SpringConfig::CONTACT] {
            let mut spring = Spring::new(config, 0.0);
            spring.set_target(20.0);

            let trace = run_until_settled(&mut spring, 1_200);

            assert!(spring.is_settled(), "{config:?} did not settle");
            assert_eq!(spring.value(), 20.0);
            let mut previous = 0.0;
            for value in trace {
                assert!(value + 1e-9 >= previous, "{config:?} moved backwards");
                assert!(value <= 20.0 + 1e-9, "{config:?} overshot to {value}");
                previous = value;
            }
        }
    }

    #[test]
    fn spring_returns_to_zero_when_pointer_recentres() {
        let mut spring = Spring::new(SpringConfig::HERO, 0.0);
        spring.set_target(-12.0);
        for _ in 0..10 {
            spring.step(FRAME);
        }
        assert!(spring.value() < 0.0);

        spring.set_target(0.0);
        run_until_settled(&mut spring, 1_200);

        assert!(spring.is_settled());
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn large_frame_gap_does_not_blow_up() {
        let mut spring = Spring::new(SpringConfig::CONTACT, 0.0);
        spring.set_target(5.0);

        let value = spring.step(2.5);

        assert!(value.is_finite());
        assert!((0.0..=5.0).contains(&value));
    }

    #[test]
    fn underdamped_spring_overshoots_but_still_settles() {
        let mut spring = Spring::new(SpringConfig::new(300.0, 5.0), 0.0);
        spring.set_target(1.0);

        let trace = run_until_settled(&mut spring, 5_000);

        assert!(trace.iter().any(|value| *value > 1.0));
        assert!(spring.is_settled());
    }

    #[test]
    fn zero_or_negative_step_is_ignored() {
        let mut spring = Spring::new(SpringConfig::HERO, 0.0);
        spring.set_target(3.0);

        assert_eq!(spring.step(0.0), 0.0);
        assert_eq!(spring.step(-1.0), 0.0);
        spring.set_target(f64::NAN);
        assert_eq!(spring.target(), 3.0);
    }

    #[test]
    fn jump_resets_momentum() {
        let mut spring = Spring::new(SpringConfig::HERO, 0.0);
        spring.set_target(10.0);
        spring.step(FRAME);

        spring.jump(4.0);

        assert!(spring.is_settled());
        assert_eq!(spring.value(), 4.0);
    }

    #[test]
    fn normalized_offset_is_relative_to_centre() {
        let container = Rect::new(0.0, 0.0, 200.0, 100.0);

        assert_eq!(normalized_offset(100.0, 50.0, container), (0.0, 0.0));
        assert_eq!(normalized_offset(200.0, 0.0, container), (0.5, -0.5));
        assert_eq!(normalized_offset(10.0, 10.0, Rect::default()), (0.0, 0.0));
    }

    #[test]
    fn viewport_drift_scales_distance_from_centre() {
        let (x, y) = viewport_drift(1_000.0, 200.0, (1_200.0, 800.0), 0.01);

        assert!((x - 4.0).abs() < 1e-9);
        assert!((y + 2.0).abs() < 1e-9);
    }

    #[test]
    fn interpolate_clamps_and_follows_stops() {
        let layer = ScrollParallax::HERO_TEXT;

        assert_eq!(layer.offset(-10.0), 0.0);
        assert_eq!(layer.offset(250.0), -50.0);
        assert_eq!(layer.offset(10_000.0), -100.0);
        assert_eq!(ScrollParallax::ABOUT_BACKGROUND.offset(500.0), 50.0);
        assert_eq!(interpolate(&[0.0], &[3.0], 1.0), 3.0);
        assert_eq!(interpolate(&[0.0, 1.0], &[], 1.0), 0.0);
    }

    #[test]
    fn languages_tilt_peaks_mid_viewport() {
        assert_eq!(languages_tilt(0.0), 0.0);
        assert_eq!(languages_tilt(0.25), 5.0);
        assert_eq!(languages_tilt(0.5), 10.0);
        assert_eq!(languages_tilt(1.0), 0.0);
    }

    #[test]
    fn scroll_progress_spans_enter_to_exit() {
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(200.0, 400.0, 800.0), 0.5);
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn one_shot_reveal_stays_visible() {
        let mut reveal = Reveal::new(true);

        assert!(!reveal.observe(false));
        assert!(reveal.observe(true));
        assert!(reveal.observe(false));
    }

    #[test]
    fn repeatable_reveal_hides_on_exit() {
        let mut reveal = Reveal::new(false);

        assert!(reveal.observe(true));
        assert!(!reveal.observe(false));
        assert!(reveal.observe(true));
    }

    #[test]
    fn forced_reveal_shows_without_any_intersection() {
        let mut reveal = Reveal::new(false);
        assert!(!reveal.is_visible());

        reveal.force_visible();
        assert!(reveal.is_visible());
    }

    #[test]
    fn pointer_below_centre_tips_every_section_the_same_way() {
        for profile in [
            PointerProfile::HERO,
            PointerProfile::ABOUT,
            PointerProfile::PROJECTS,
            PointerProfile::CONTACT,
        ] {
            let (rotate_x, rotate_y) = profile.tilt((0.0, 0.25));
            assert!(rotate_x > 0.0, "{profile:?}");
            assert_eq!(rotate_y, 0.0);

            let (rotate_x, rotate_y) = profile.tilt((-0.5, 0.0));
            assert_eq!(rotate_x, 0.0);
            assert!(rotate_y < 0.0, "{profile:?}");
        }
    }

    #[test]
    fn about_tilt_and_word_lean_follow_pointer_scales() {
        let profile = PointerProfile::ABOUT;

        assert_eq!(profile.tilt((0.5, -0.5)), (-5.0, 5.0));
        assert_eq!(profile.drift((0.5, -0.5)), (4.0, -4.0));
        assert_eq!(word_lean(profile.drift((0.5, -0.5)), 0.25), (-1.0, 1.0));
    }

    #[test]
    fn headline_index_wraps() {
        assert_eq!(next_index(0, 2), 1);
        assert_eq!(next_index(1, 2), 0);
        assert_eq!(next_index(4, 0), 0);
    }

    #[test]
    fn particles_are_stable_and_in_range() {
        for index in 0..50 {
            let particle = scatter_particle(index);
            assert_eq!(particle, scatter_particle(index));
            assert!((0.0..100.0).contains(&particle.left_pct));
            assert!((0.0..100.0).contains(&particle.top_pct));
            assert!((0.0..5.0).contains(&particle.delay_s));
            assert!((10.0..20.0).contains(&particle.duration_s));
        }
        assert_ne!(scatter_particle(0), scatter_particle(1));
    }

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 100.0, 64.0);

        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(110.0, 74.0));
        assert!(!rect.contains(111.0, 20.0));
        assert!(!rect.contains(50.0, 200.0));
    }
}
