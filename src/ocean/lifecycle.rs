//! Wave population management.
//!
//! Keeps a bounded pool of waves alive. Each wave gets a random lifetime and
//! is replaced once it has faded out, so the surface never goes static.
//!
//! ```text
//! Spawning --(fade-in done)--> Active --(lifetime <= 0)--> FadingOut --(amplitude <= 0)--> Removed
//! ```

use glam::Vec2;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::arena::{WaveArena, WaveId};
use super::wave::WaveDescriptor;
use crate::params::SurfaceConfig;

/// A live wave and its remaining time before fading out
#[derive(Debug, Clone)]
pub struct ActiveWaveSlot {
    pub wave: WaveDescriptor,

    /// Seconds until fade-out starts (counts down, may go negative)
    pub remaining_lifetime: f32,

    pub is_fading_out: bool,
}

/// Linear ramp of one wave's amplitude and steepness toward a target
#[derive(Debug, Clone, Copy)]
struct FadeJob {
    target_amplitude: f32,
    amplitude_rate: f32,
    target_steepness: f32,
    steepness_rate: f32,
    wave: WaveId,
}

/// Owns the wave pool and its two fade queues
pub struct WaveLifecycleManager {
    config: SurfaceConfig,
    slots: WaveArena<ActiveWaveSlot>,
    fade_ins: Vec<FadeJob>,
    fade_outs: Vec<FadeJob>,
    rng: StdRng,
}

impl WaveLifecycleManager {
    /// Create an empty pool seeded from the OS
    pub fn new(config: SurfaceConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create an empty pool with a deterministic spawn sequence
    pub fn with_seed(config: SurfaceConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SurfaceConfig, rng: StdRng) -> Self {
        Self {
            config,
            slots: WaveArena::new(),
            fade_ins: Vec::new(),
            fade_outs: Vec::new(),
            rng,
        }
    }

    /// Advance the pool by `dt` seconds
    ///
    /// Order matters: fade-ins, then fade-outs (which may remove slots), then
    /// aging of the surviving slots, then one spawn per missing slot.
    pub fn update(&mut self, dt: f32) {
        self.advance_fade_ins(dt);
        self.advance_fade_outs(dt);
        self.age_slots(dt);

        while self.slots.len() < self.config.target_count {
            self.fade_in_wave();
        }
    }

    /// Drop every wave and pending fade; the pool refills on the next update
    pub fn reset(&mut self) {
        info!(
            "Resetting wave pool ({} waves, {} fading in, {} fading out)",
            self.slots.len(),
            self.fade_ins.len(),
            self.fade_outs.len()
        );
        self.fade_ins.clear();
        self.fade_outs.clear();
        self.slots.clear();
    }

    /// Snapshot of the waves currently in the pool (order unspecified)
    pub fn active_waves(&self) -> Vec<WaveDescriptor> {
        let mut waves = Vec::with_capacity(self.slots.len());
        self.active_waves_into(&mut waves);
        waves
    }

    /// Same as [`Self::active_waves`] but reuses the caller's allocation
    pub fn active_waves_into(&self, out: &mut Vec<WaveDescriptor>) {
        out.clear();
        out.extend(self.slots.iter().map(|(_, slot)| slot.wave));
    }

    pub fn active_count(&self) -> usize {
        self.slots.len()
    }

    pub fn pending_fade_ins(&self) -> usize {
        self.fade_ins.len()
    }

    pub fn pending_fade_outs(&self) -> usize {
        self.fade_outs.len()
    }

    pub fn slots(&self) -> impl Iterator<Item = (WaveId, &ActiveWaveSlot)> {
        self.slots.iter()
    }

    pub fn slot(&self, id: WaveId) -> Option<&ActiveWaveSlot> {
        self.slots.get(id)
    }

    fn advance_fade_ins(&mut self, dt: f32) {
        let slots = &mut self.slots;
        self.fade_ins.retain(|job| {
            let Some(slot) = slots.get_mut(job.wave) else {
                return false;
            };

            let wave = &mut slot.wave;
            wave.amplitude += job.amplitude_rate * dt;
            wave.steepness = (wave.steepness + job.steepness_rate * dt).min(job.target_steepness);

            if wave.amplitude >= job.target_amplitude {
                wave.amplitude = job.target_amplitude;
                wave.steepness = job.target_steepness;
                false
            } else {
                true
            }
        });
    }

    fn advance_fade_outs(&mut self, dt: f32) {
        let slots = &mut self.slots;
        self.fade_outs.retain(|job| {
            let Some(slot) = slots.get_mut(job.wave) else {
                return false;
            };

            let wave = &mut slot.wave;
            wave.amplitude -= job.amplitude_rate * dt;
            wave.steepness = (wave.steepness - job.steepness_rate * dt).max(job.target_steepness);

            if wave.amplitude <= job.target_amplitude {
                slots.remove(job.wave);
                debug!("Erased wave {:?}", job.wave);
                false
            } else {
                true
            }
        });
    }

    fn age_slots(&mut self, dt: f32) {
        let mut expired = Vec::new();
        for (id, slot) in self.slots.iter_mut() {
            slot.remaining_lifetime -= dt;
            if slot.remaining_lifetime <= 0.0 && !slot.is_fading_out {
                slot.is_fading_out = true;
                expired.push(id);
            }
        }

        for id in expired {
            self.fade_out_wave(id);
        }
    }

    fn fading(&self) -> bool {
        self.config.fading_enabled && self.config.fade_duration_s > 0.0
    }

    fn fade_in_wave(&mut self) {
        let mut wave = create_wave(&self.config, &mut self.rng);
        let lifetime = random_between(
            &mut self.rng,
            0.5 * self.config.lifetime_s,
            2.0 * self.config.lifetime_s,
        );

        let fading = self.fading();
        let (target_amplitude, target_steepness) = (wave.amplitude, wave.steepness);
        if fading {
            wave.amplitude = 0.0;
            wave.steepness = 0.0;
        }

        let id = self.slots.insert(ActiveWaveSlot {
            wave,
            remaining_lifetime: lifetime,
            is_fading_out: false,
        });

        if fading {
            let duration = self.config.fade_duration_s;
            self.fade_ins.push(FadeJob {
                target_amplitude,
                amplitude_rate: target_amplitude / duration,
                target_steepness,
                steepness_rate: target_steepness / duration,
                wave: id,
            });
        }

        debug!(
            "Spawned wave {:?}: length {:.2}, amplitude {:.3}, speed {:.2}, lifetime {:.1}s",
            id, wave.length, target_amplitude, wave.speed, lifetime
        );
    }

    fn fade_out_wave(&mut self, id: WaveId) {
        // A wave shorter-lived than its fade-in stops rising before it falls
        self.fade_ins.retain(|job| job.wave != id);

        let fading = self.fading();
        let duration = self.config.fade_duration_s;
        let Some(slot) = self.slots.get_mut(id) else {
            return;
        };
        let wave = &mut slot.wave;

        let job = if fading {
            FadeJob {
                target_amplitude: 0.0,
                amplitude_rate: wave.amplitude / duration,
                target_steepness: 0.0,
                steepness_rate: wave.steepness / duration,
                wave: id,
            }
        } else {
            wave.amplitude = 0.0;
            wave.steepness = 0.0;
            FadeJob {
                target_amplitude: 0.0,
                amplitude_rate: 0.0,
                target_steepness: 0.0,
                steepness_rate: 0.0,
                wave: id,
            }
        };

        debug!("Fading out wave {:?} from amplitude {:.3}", id, wave.amplitude);
        self.fade_outs.push(job);
    }
}

// Configuration accessors. None of these touch waves already in the pool.
impl WaveLifecycleManager {
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SurfaceConfig) {
        self.config = config;
    }

    pub fn set_target_count(&mut self, value: usize) {
        self.config.target_count = value;
    }

    pub fn target_count(&self) -> usize {
        self.config.target_count
    }

    pub fn set_lifetime(&mut self, value: f32) {
        self.config.lifetime_s = value;
    }

    pub fn lifetime(&self) -> f32 {
        self.config.lifetime_s
    }

    pub fn set_steepness(&mut self, value: f32) {
        self.config.steepness = value;
    }

    pub fn steepness(&self) -> f32 {
        self.config.steepness
    }

    pub fn set_speed(&mut self, value: f32) {
        self.config.speed = value;
    }

    pub fn speed(&self) -> f32 {
        self.config.speed
    }

    pub fn set_length(&mut self, value: f32) {
        self.config.length = value;
    }

    pub fn length(&self) -> f32 {
        self.config.length
    }

    pub fn set_amplitude(&mut self, value: f32) {
        self.config.amplitude = value;
    }

    pub fn amplitude(&self) -> f32 {
        self.config.amplitude
    }

    pub fn set_direction(&mut self, value: Vec2) {
        self.config.direction = value.to_array();
    }

    pub fn direction(&self) -> Vec2 {
        Vec2::from_array(self.config.direction)
    }

    /// Full width of the direction jitter in degrees
    pub fn set_angle(&mut self, value: f32) {
        self.config.angle_deg = value;
    }

    pub fn angle(&self) -> f32 {
        self.config.angle_deg
    }

    pub fn enable_fading(&mut self, value: bool) {
        self.config.fading_enabled = value;
    }

    pub fn fading_enabled(&self) -> bool {
        self.config.fading_enabled
    }

    pub fn enable_speed_variation(&mut self, value: bool) {
        self.config.speed_variation_enabled = value;
    }

    pub fn speed_variation_enabled(&self) -> bool {
        self.config.speed_variation_enabled
    }

    pub fn set_fade_duration(&mut self, value: f32) {
        self.config.fade_duration_s = value;
    }

    pub fn fade_duration(&self) -> f32 {
        self.config.fade_duration_s
    }
}

/// Draw a new wave around the configured basis
pub fn create_wave(config: &SurfaceConfig, rng: &mut impl Rng) -> WaveDescriptor {
    let amplitude_length_ratio = if config.length != 0.0 {
        config.amplitude / config.length
    } else {
        0.0
    };

    let length = random_between(rng, 0.5 * config.length, 2.0 * config.length);
    let amplitude = length * amplitude_length_ratio;

    let half_angle = 0.5 * config.angle_deg;
    let angle = random_between(rng, -half_angle, half_angle).to_radians();
    let base = Vec2::from_array(config.direction)
        .try_normalize()
        .unwrap_or(Vec2::X);
    let direction = Vec2::from_angle(angle).rotate(base);

    let speed = if config.speed_variation_enabled {
        random_between(rng, 0.7 * config.speed, 3.0 * config.speed)
    } else {
        config.speed
    };

    WaveDescriptor::new(config.steepness, speed, length, amplitude, direction)
}

/// Uniform draw between `lo` and `hi` in either order
///
/// A zero-width or non-finite range yields `lo`. Negative bases produce
/// reversed bounds, which still draw over the whole interval.
pub fn random_between(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if lo == hi || !(hi - lo).is_finite() {
        return lo;
    }
    rng.random_range(lo.min(hi)..=lo.max(hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn scenario_config() -> SurfaceConfig {
        SurfaceConfig {
            target_count: 1,
            lifetime_s: 10.0,
            steepness: 0.0,
            speed: 1.0,
            length: 10.0,
            amplitude: 1.0,
            direction: [1.0, 0.0],
            angle_deg: 0.0,
            fading_enabled: true,
            speed_variation_enabled: false,
            fade_duration_s: 2.0,
        }
    }

    fn first_id(manager: &WaveLifecycleManager) -> WaveId {
        manager.slots().next().map(|(id, _)| id).unwrap()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(6)]
    #[case(25)]
    fn test_pool_converges_to_target(#[case] target: usize) {
        let mut config = SurfaceConfig::default();
        config.target_count = target;
        config.lifetime_s = 0.5;
        config.fade_duration_s = 0.3;
        let mut manager = WaveLifecycleManager::with_seed(config, 7);

        manager.update(0.1);
        assert_eq!(manager.active_count(), target);

        // Waves keep dying and being replaced; the pool never overshoots
        for _ in 0..200 {
            manager.update(0.1);
            assert_eq!(manager.active_count(), target);
            assert!(manager.pending_fade_ins() <= target);
            assert!(manager.pending_fade_outs() <= target);
        }
    }

    #[test]
    fn test_lowering_target_drains_without_spawning() {
        let mut config = SurfaceConfig::default();
        config.target_count = 5;
        config.lifetime_s = 1.0;
        config.fade_duration_s = 0.5;
        let mut manager = WaveLifecycleManager::with_seed(config, 3);
        manager.update(0.0);
        assert_eq!(manager.active_count(), 5);

        manager.set_target_count(2);
        let mut previous = manager.active_count();
        for _ in 0..100 {
            manager.update(0.1);
            let count = manager.active_count();
            assert!(count <= previous.max(2));
            previous = count;
        }
        assert_eq!(manager.active_count(), 2);
    }

    #[test]
    fn test_spawn_preserves_amplitude_length_ratio() {
        let mut config = SurfaceConfig::default();
        config.amplitude = 1.5;
        config.length = 20.0;
        config.speed_variation_enabled = true;
        let ratio = config.amplitude / config.length;
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let wave = create_wave(&config, &mut rng);
            assert!(wave.length >= 10.0 && wave.length <= 40.0);
            assert!((wave.amplitude / wave.length - ratio).abs() < 1e-6);
        }
    }

    #[test]
    fn test_spawn_direction_stays_within_jitter() {
        let mut config = SurfaceConfig::default();
        config.direction = [0.0, 3.0];
        config.angle_deg = 90.0;
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..500 {
            let wave = create_wave(&config, &mut rng);
            assert!((wave.direction.length() - 1.0).abs() < 1e-5);
            let angle = wave.direction.dot(Vec2::Y).clamp(-1.0, 1.0).acos().to_degrees();
            assert!(angle <= 45.0 + 1e-3, "angle {angle} outside jitter");
        }
    }

    #[test]
    fn test_spawn_without_jitter_keeps_base_direction() {
        let mut config = SurfaceConfig::default();
        config.direction = [1.0, 1.0];
        config.angle_deg = 0.0;
        let mut rng = StdRng::seed_from_u64(1);

        let wave = create_wave(&config, &mut rng);
        let expected = Vec2::new(1.0, 1.0).normalize();
        assert!((wave.direction - expected).length() < 1e-6);
    }

    #[test]
    fn test_zero_direction_falls_back_to_x() {
        let mut config = SurfaceConfig::default();
        config.direction = [0.0, 0.0];
        config.angle_deg = 0.0;
        let wave = create_wave(&config, &mut StdRng::seed_from_u64(1));
        assert_eq!(wave.direction, Vec2::X);
    }

    #[test]
    fn test_speed_variation_draws_from_range() {
        let mut config = SurfaceConfig::default();
        config.speed = 2.0;
        config.speed_variation_enabled = true;
        let mut rng = StdRng::seed_from_u64(9);

        let speeds: Vec<f32> = (0..200).map(|_| create_wave(&config, &mut rng).speed).collect();
        assert!(speeds.iter().all(|&s| (1.4..=6.0).contains(&s)));
        assert!(speeds.iter().any(|&s| (s - 2.0).abs() > 0.1));

        config.speed_variation_enabled = false;
        assert_eq!(create_wave(&config, &mut rng).speed, 2.0);
    }

    #[test]
    fn test_degenerate_basis_spawns_flat_waves() {
        let mut config = SurfaceConfig::default();
        config.length = 0.0;
        config.amplitude = 0.0;
        config.target_count = 3;
        let mut manager = WaveLifecycleManager::with_seed(config, 2);

        for _ in 0..20 {
            manager.update(0.5);
        }
        assert_eq!(manager.active_count(), 3);
        for wave in manager.active_waves() {
            assert_eq!(wave.length, 0.0);
            assert_eq!(wave.amplitude, 0.0);
        }
    }

    #[test]
    fn test_fade_in_scenario() {
        let mut manager = WaveLifecycleManager::with_seed(scenario_config(), 42);

        manager.update(0.0);
        assert_eq!(manager.active_count(), 1);
        assert_eq!(manager.pending_fade_ins(), 1);
        let id = first_id(&manager);
        assert_eq!(manager.slot(id).unwrap().wave.amplitude, 0.0);

        let target = manager.slot(id).unwrap().wave.length * 0.1;

        manager.update(1.0);
        let amplitude = manager.slot(id).unwrap().wave.amplitude;
        assert!((amplitude - 0.5 * target).abs() < 1e-5);
        assert_eq!(manager.pending_fade_ins(), 1);

        manager.update(2.0);
        let amplitude = manager.slot(id).unwrap().wave.amplitude;
        assert!((amplitude - target).abs() < 1e-5);
        assert_eq!(manager.pending_fade_ins(), 0);
        assert!(!manager.slot(id).unwrap().is_fading_out);
    }

    #[test]
    fn test_fade_in_is_monotonic() {
        let mut config = SurfaceConfig::default();
        config.target_count = 4;
        config.fade_duration_s = 2.0;
        let mut manager = WaveLifecycleManager::with_seed(config, 13);

        manager.update(0.0);
        let ids: Vec<WaveId> = manager.slots().map(|(id, _)| id).collect();
        let mut previous: Vec<(f32, f32)> = ids
            .iter()
            .map(|&id| {
                let wave = manager.slot(id).unwrap().wave;
                (wave.amplitude, wave.steepness)
            })
            .collect();
        assert!(previous.iter().all(|&(a, q)| a == 0.0 && q == 0.0));

        for _ in 0..30 {
            manager.update(0.1);
            for (i, &id) in ids.iter().enumerate() {
                let wave = manager.slot(id).unwrap().wave;
                assert!(wave.amplitude >= previous[i].0);
                assert!(wave.steepness >= previous[i].1);
                previous[i] = (wave.amplitude, wave.steepness);
            }
        }
        assert_eq!(manager.pending_fade_ins(), 0);
    }

    #[test]
    fn test_fade_out_removes_on_ramp_end() {
        let mut config = scenario_config();
        config.fade_duration_s = 1.0;
        config.amplitude = 2.0;
        let mut manager = WaveLifecycleManager::with_seed(config, 99);

        manager.update(0.0);
        let id = first_id(&manager);

        // Run until the lifetime expires
        let mut guard = 0;
        while !manager.slot(id).unwrap().is_fading_out {
            manager.update(0.3);
            guard += 1;
            assert!(guard < 200, "wave never started fading out");
        }
        let start = manager.slot(id).unwrap().wave.amplitude;
        assert!(start > 0.0);
        assert_eq!(manager.pending_fade_outs(), 1);

        // Rate is start / 1s, so three 0.3s steps leave 10% of the amplitude
        let mut previous = start;
        for _ in 0..3 {
            manager.update(0.3);
            let slot = manager.slot(id).expect("removed before ramp ended");
            assert!(slot.is_fading_out);
            assert!(slot.wave.amplitude > 0.0);
            assert!(slot.wave.amplitude <= previous);
            previous = slot.wave.amplitude;
        }

        manager.update(0.3);
        assert!(manager.slot(id).is_none());
        // Replacement spawned in the same update
        assert_eq!(manager.active_count(), 1);
        assert_eq!(manager.pending_fade_outs(), 0);
    }

    #[test]
    fn test_fading_disabled_pops_waves() {
        let mut config = scenario_config();
        config.fading_enabled = false;
        config.lifetime_s = 1.0;
        let mut manager = WaveLifecycleManager::with_seed(config, 4);

        manager.update(0.0);
        let id = first_id(&manager);
        let wave = manager.slot(id).unwrap().wave;
        assert!(wave.amplitude > 0.0);
        assert!((wave.amplitude / wave.length - 0.1).abs() < 1e-6);
        assert_eq!(manager.pending_fade_ins(), 0);

        // Lifetime is at most 2s; it flattens instantly on expiry
        manager.update(2.0);
        let slot = manager.slot(id).unwrap();
        assert!(slot.is_fading_out);
        assert_eq!(slot.wave.amplitude, 0.0);

        // and leaves the pool on the next update
        manager.update(0.0);
        assert!(manager.slot(id).is_none());
        assert_eq!(manager.active_count(), 1);
    }

    #[test]
    fn test_expiry_during_fade_in_cancels_it() {
        let mut config = scenario_config();
        config.lifetime_s = 0.5;
        config.fade_duration_s = 10.0;
        let mut manager = WaveLifecycleManager::with_seed(config, 21);

        manager.update(0.0);
        let id = first_id(&manager);

        // Lifetime is at most 1s, far shorter than the 10s fade-in
        manager.update(1.0);
        let slot = manager.slot(id).unwrap();
        assert!(slot.is_fading_out);
        assert_eq!(manager.pending_fade_ins(), 0);

        let mut previous = slot.wave.amplitude;
        while let Some(slot) = manager.slot(id) {
            assert!(slot.wave.amplitude <= previous);
            previous = slot.wave.amplitude;
            manager.update(0.5);
        }
    }

    #[test]
    fn test_reset_empties_pool() {
        let mut config = SurfaceConfig::default();
        config.target_count = 5;
        let mut manager = WaveLifecycleManager::with_seed(config, 8);

        manager.update(0.0);
        manager.update(1.0);
        assert_eq!(manager.active_count(), 5);
        assert!(manager.pending_fade_ins() > 0);

        manager.reset();
        assert_eq!(manager.active_count(), 0);
        assert_eq!(manager.pending_fade_ins(), 0);
        assert_eq!(manager.pending_fade_outs(), 0);
        assert!(manager.active_waves().is_empty());

        manager.update(0.0);
        assert_eq!(manager.active_count(), 5);
        assert!(manager.active_waves().iter().all(|w| w.amplitude == 0.0));
    }

    #[test]
    fn test_setters_leave_live_waves_alone() {
        let mut manager = WaveLifecycleManager::with_seed(scenario_config(), 6);
        manager.enable_fading(false);
        manager.update(0.0);
        let before = manager.active_waves();

        manager.set_amplitude(50.0);
        manager.set_length(1.0);
        manager.set_speed(9.0);
        manager.set_steepness(1.0);
        manager.set_direction(Vec2::Y);
        manager.set_angle(30.0);
        manager.enable_speed_variation(true);
        manager.set_fade_duration(0.5);
        manager.set_lifetime(100.0);

        assert_eq!(manager.active_waves(), before);
        assert_eq!(manager.amplitude(), 50.0);
        assert_eq!(manager.length(), 1.0);
        assert_eq!(manager.speed(), 9.0);
        assert_eq!(manager.steepness(), 1.0);
        assert_eq!(manager.direction(), Vec2::Y);
        assert_eq!(manager.angle(), 30.0);
        assert!(manager.speed_variation_enabled());
        assert!(!manager.fading_enabled());
        assert_eq!(manager.fade_duration(), 0.5);
        assert_eq!(manager.lifetime(), 100.0);
        assert_eq!(manager.target_count(), 1);
    }

    #[test]
    fn test_seeded_managers_agree() {
        let mut a = WaveLifecycleManager::with_seed(SurfaceConfig::default(), 1234);
        let mut b = WaveLifecycleManager::with_seed(SurfaceConfig::default(), 1234);
        for _ in 0..50 {
            a.update(0.7);
            b.update(0.7);
        }
        assert_eq!(a.active_waves(), b.active_waves());
    }

    #[test]
    fn test_random_between_degenerate_ranges() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_between(&mut rng, 3.0, 3.0), 3.0);
        assert!(random_between(&mut rng, f32::NAN, 1.0).is_nan());
        assert_eq!(random_between(&mut rng, 2.0, f32::INFINITY), 2.0);
        let v = random_between(&mut rng, -1.0, 1.0);
        assert!((-1.0..=1.0).contains(&v));
    }

    #[rstest]
    #[case(-1.0, 1.0)]
    #[case(5.0, -5.0)]
    #[case(-1.4, -6.0)]
    fn test_random_between_covers_interval_in_either_order(#[case] lo: f32, #[case] hi: f32) {
        let mut rng = StdRng::seed_from_u64(21);
        let (min, max) = (lo.min(hi), lo.max(hi));
        let draws: Vec<f32> = (0..200).map(|_| random_between(&mut rng, lo, hi)).collect();

        assert!(draws.iter().all(|v| (min..=max).contains(v)));
        let mid = 0.5 * (min + max);
        assert!(draws.iter().any(|&v| v < mid));
        assert!(draws.iter().any(|&v| v > mid));
    }

    #[test]
    fn test_negative_speed_basis_still_varies() {
        let mut config = SurfaceConfig::default();
        config.speed = -2.0;
        config.speed_variation_enabled = true;
        let mut rng = StdRng::seed_from_u64(4);

        let speeds: Vec<f32> = (0..50).map(|_| create_wave(&config, &mut rng).speed).collect();
        assert!(speeds.iter().all(|&s| (-6.0..=-1.4).contains(&s)));
        assert!(speeds.iter().any(|&s| (s - speeds[0]).abs() > 0.1));
    }

    #[test]
    fn test_negative_jitter_angle_still_jitters() {
        let mut config = SurfaceConfig::default();
        config.direction = [0.0, 1.0];
        config.angle_deg = -90.0;
        let mut rng = StdRng::seed_from_u64(12);

        let angles: Vec<f32> = (0..50)
            .map(|_| {
                let d = create_wave(&config, &mut rng).direction;
                d.x.atan2(d.y).to_degrees()
            })
            .collect();
        assert!(angles.iter().all(|a| a.abs() <= 45.0 + 1e-3));
        assert!(angles.iter().any(|&a| a < -5.0));
        assert!(angles.iter().any(|&a| a > 5.0));
    }
}
