use fastrand::Rng;

use crate::tank::TankBounds;

pub const MIN_SPEED: f32 = 1.5;
pub const MAX_SPEED: f32 = 4.0;
pub const DRIFT_PROBABILITY: f32 = 0.02;
pub const DRIFT_SPAN: f32 = 0.3;

/// Live kinematic state of one swimming sprite, in tank pixels with a
/// top-left origin. The rendering surface advances this once per animation
/// frame on its own copy of the snapshot data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishState {
    pub pos: [f32; 2],
    pub vel: [f32; 2],
    pub width: f32,
    pub height: f32,
}

impl FishState {
    pub fn new(pos: [f32; 2], vel: [f32; 2], width: f32, height: f32) -> Self {
        Self {
            pos,
            vel,
            width,
            height,
        }
    }

    /// One simulation tick: integrate, drift, reflect off the walls, then
    /// renormalize speed into `[MIN_SPEED, MAX_SPEED]`.
    pub fn step(&mut self, bounds: TankBounds, rng: &mut Rng) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];

        if rng.f32() < DRIFT_PROBABILITY {
            self.vel[0] += rng.f32() * (DRIFT_SPAN * 2.0) - DRIFT_SPAN;
            self.vel[1] += rng.f32() * (DRIFT_SPAN * 2.0) - DRIFT_SPAN;
        }

        self.reflect_axis(0, bounds.width as f32 - self.width);
        self.reflect_axis(1, bounds.height as f32 - self.height);
        self.clamp_speed();
    }

    /// Orientation is a pure function of the current horizontal velocity
    /// sign, re-evaluated every tick; there is no hysteresis.
    pub fn facing_left(&self) -> bool {
        self.vel[0] < 0.0
    }

    pub fn speed(&self) -> f32 {
        (self.vel[0] * self.vel[0] + self.vel[1] * self.vel[1]).sqrt()
    }

    // Elastic wall bounce: clamp back inside and flip the axis velocity.
    // The magnitude is untouched, only the direction changes.
    fn reflect_axis(&mut self, axis: usize, max: f32) {
        if self.pos[axis] < 0.0 {
            self.pos[axis] = 0.0;
            self.vel[axis] = -self.vel[axis];
        } else if self.pos[axis] > max {
            self.pos[axis] = max;
            self.vel[axis] = -self.vel[axis];
        }
    }

    fn clamp_speed(&mut self) {
        let speed = self.speed();
        if speed > MAX_SPEED {
            let scale = MAX_SPEED / speed;
            self.vel[0] *= scale;
            self.vel[1] *= scale;
        } else if speed < MIN_SPEED {
            if speed <= f32::EPSILON {
                // Drift can in principle cancel the velocity exactly; restart
                // rightward instead of dividing by zero.
                self.vel = [MIN_SPEED, 0.0];
            } else {
                let scale = MIN_SPEED / speed;
                self.vel[0] *= scale;
                self.vel[1] *= scale;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> TankBounds {
        TankBounds::new(560, 560)
    }

    fn state(pos: [f32; 2], vel: [f32; 2]) -> FishState {
        FishState::new(pos, vel, 100.0, 100.0)
    }

    fn assert_invariants(fish: &FishState, bounds: TankBounds) {
        let max_x = bounds.width as f32 - fish.width;
        let max_y = bounds.height as f32 - fish.height;
        assert!(fish.pos[0] >= 0.0 && fish.pos[0] <= max_x, "x = {}", fish.pos[0]);
        assert!(fish.pos[1] >= 0.0 && fish.pos[1] <= max_y, "y = {}", fish.pos[1]);
        let speed = fish.speed();
        assert!(
            speed >= MIN_SPEED - 1e-4 && speed <= MAX_SPEED + 1e-4,
            "speed = {speed}"
        );
    }

    #[test]
    fn step_keeps_position_and_speed_invariants() {
        for seed in 0..50 {
            let mut rng = Rng::with_seed(seed);
            let mut fish = state(
                [rng.f32() * 460.0, rng.f32() * 460.0],
                [rng.f32() * 4.0 - 2.0, rng.f32() * 2.0 - 1.0],
            );
            for _ in 0..500 {
                fish.step(bounds(), &mut rng);
                assert_invariants(&fish, bounds());
            }
        }
    }

    #[test]
    fn right_wall_reflection_clamps_and_flips() {
        let mut rng = Rng::with_seed(1);
        // One step past the wall: 459.5 + 2.0 overshoots max_x = 460.
        let mut fish = state([459.5, 200.0], [2.0, 0.0]);
        fish.step(bounds(), &mut rng);
        assert_eq!(fish.pos[0], 460.0);
        assert!(fish.vel[0] < 0.0);
    }

    #[test]
    fn left_wall_reflection_clamps_and_flips() {
        let mut rng = Rng::with_seed(1);
        let mut fish = state([0.5, 200.0], [-2.0, 0.0]);
        fish.step(bounds(), &mut rng);
        assert_eq!(fish.pos[0], 0.0);
        assert!(fish.vel[0] > 0.0);
    }

    #[test]
    fn bottom_wall_reflection_clamps_and_flips() {
        let mut rng = Rng::with_seed(1);
        let mut fish = state([200.0, 459.5], [0.0, 2.0]);
        fish.step(bounds(), &mut rng);
        assert_eq!(fish.pos[1], 460.0);
        assert!(fish.vel[1] < 0.0);
    }

    #[test]
    fn fast_fish_is_slowed_to_max_speed() {
        let mut rng = Rng::with_seed(7);
        let mut fish = state([200.0, 200.0], [9.0, 0.0]);
        fish.step(bounds(), &mut rng);
        assert!((fish.speed() - MAX_SPEED).abs() < 1e-4);
    }

    #[test]
    fn slow_fish_is_pushed_to_min_speed() {
        let mut rng = Rng::with_seed(7);
        let mut fish = state([200.0, 200.0], [0.1, 0.0]);
        fish.step(bounds(), &mut rng);
        assert!((fish.speed() - MIN_SPEED).abs() < 1e-4);
    }

    #[test]
    fn stalled_fish_restarts_rightward() {
        let mut fish = state([200.0, 200.0], [0.0, 0.0]);
        fish.clamp_speed();
        assert_eq!(fish.vel, [MIN_SPEED, 0.0]);
    }

    #[test]
    fn reflection_preserves_speed_magnitude() {
        let mut fish = state([461.0, 200.0], [1.5, 1.0]);
        let speed_before = fish.speed();
        fish.reflect_axis(0, 460.0);
        assert_eq!(fish.pos[0], 460.0);
        assert_eq!(fish.vel, [-1.5, 1.0]);
        assert!((fish.speed() - speed_before).abs() < 1e-6);
    }

    #[test]
    fn facing_follows_velocity_sign() {
        let mut fish = state([0.0, 0.0], [-1.0, 0.0]);
        assert!(fish.facing_left());
        fish.vel[0] = 1.0;
        assert!(!fish.facing_left());
        fish.vel[0] = 0.0;
        assert!(!fish.facing_left());
    }
}
