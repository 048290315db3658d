//! Unit tests for cr-scene.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use cr_core::{CritterId, CritterRng, Frame, FrameClock, Size, Vec2};
use cr_critter::critter::{DEFAULT_SIZE, MIN_WANDER_INTERVAL};
use cr_critter::{Critter, CritterError, Status, TraitOverrides, Traits, Velocity};
use cr_schedule::{ScheduleError, Scheduler};

use crate::{FrameObserver, NoopObserver, Scene, SceneBuilder, SceneConfig, SceneError, World};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A scene config with no implicit critters and fixed traits.
fn quiet_config() -> SceneConfig {
    SceneConfig {
        critter_count:       0,
        randomize_curiosity: false,
        ..SceneConfig::default()
    }
}

/// A critter at `position` heading for `destination` with default traits.
fn placed(id: CritterId, position: Vec2, destination: Vec2) -> Result<Critter, CritterError> {
    Critter::new(id, position, destination, DEFAULT_SIZE, Traits::default(), CritterRng::new(0, id))
}

/// Every wandering critter has exactly one live wander task, every resting
/// one has none, and the scheduler holds nothing else.
fn assert_task_invariants(scene: &Scene) {
    let mut expected = 0;
    for critter in scene.critters() {
        let tasks = scene.tasks_of(critter.id()).unwrap();
        assert_eq!(tasks.wander.is_some(), critter.status() == Status::Wandering, "{}", critter.id());
        for id in tasks.ids() {
            assert!(scene.scheduler().contains(id), "{} lost task {id}", critter.id());
            expected += 1;
        }
    }
    assert_eq!(scene.scheduler().len(), expected);
}

// ── Building ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod building {
    use super::*;

    #[test]
    fn spawns_implicit_then_explicit_critters() {
        let config = SceneConfig { critter_count: 3, ..SceneConfig::default() };
        let scene = SceneBuilder::new(config)
            .critter(TraitOverrides::new().top_speed(9.0))
            .build()
            .unwrap();

        assert_eq!(scene.world().len(), 4);
        assert_eq!(scene.critter(CritterId(3)).unwrap().traits().top_speed(), 9.0);
        // A wander and a status task per critter.
        assert_eq!(scene.scheduler().len(), 8);
        assert_task_invariants(&scene);
    }

    #[test]
    fn initial_tasks_use_configured_intervals() {
        let config = SceneConfig { status_interval: 3.0, initial_wander_interval: 0.5, ..quiet_config() };
        let scene = SceneBuilder::new(config).critter(TraitOverrides::new()).build().unwrap();
        let tasks = scene.tasks_of(CritterId(0)).unwrap();
        assert_eq!(scene.scheduler().interval(tasks.wander.unwrap()), Some(0.5));
        assert_eq!(scene.scheduler().interval(tasks.status.unwrap()), Some(3.0));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SceneConfig { canvas: Size::new(0.0, 10.0), ..SceneConfig::default() };
        assert!(matches!(SceneBuilder::new(config).build(), Err(SceneError::Config(_))));
    }

    #[test]
    fn trait_layers_resolve_in_precedence_order() {
        let config = SceneConfig {
            traits: TraitOverrides::new().top_speed(3.0),
            ..quiet_config()
        };
        let mut scene = Scene::new(config).unwrap();
        let own = scene.spawn(&TraitOverrides::new().top_speed(7.0)).unwrap();
        let inherited = scene.spawn(&TraitOverrides::new()).unwrap();

        assert_eq!(scene.critter(own).unwrap().traits().top_speed(), 7.0);
        let traits = scene.critter(inherited).unwrap().traits();
        assert_eq!(traits.top_speed(), 3.0);
        assert_eq!(traits.curiosity(), 0.0, "no randomization → built-in default");
    }

    #[test]
    fn curiosity_is_randomized_only_when_unset() {
        let config = SceneConfig { randomize_curiosity: true, ..quiet_config() };
        let mut scene = Scene::new(config).unwrap();
        let fixed = scene.spawn(&TraitOverrides::new().curiosity(0.5)).unwrap();
        assert_eq!(scene.critter(fixed).unwrap().traits().curiosity(), 0.5);

        let drawn: Vec<f64> = (0..8)
            .map(|_| {
                let id = scene.spawn(&TraitOverrides::new()).unwrap();
                scene.critter(id).unwrap().traits().curiosity()
            })
            .collect();
        assert!(drawn.iter().all(|c| (-1.0..=1.0).contains(c)));
        assert!(drawn.windows(2).any(|w| w[0] != w[1]), "curiosity was not drawn: {drawn:?}");
    }

    #[test]
    fn invalid_overrides_fail_spawn() {
        let mut scene = Scene::new(quiet_config()).unwrap();
        let err = scene.spawn(&TraitOverrides::new().curiosity(1.5)).unwrap_err();
        assert!(matches!(err, SceneError::Critter(CritterError::InvalidTrait { name: "curiosity", .. })));
        assert!(scene.world().is_empty());
        assert!(scene.scheduler().is_empty());
    }

    #[test]
    fn resting_critter_starts_without_wander_task() {
        let mut scene = Scene::new(quiet_config()).unwrap();
        let id = scene
            .insert_with(|id| {
                placed(id, Vec2::new(10.0, 10.0), Vec2::new(50.0, 50.0))
                    .map(|c| c.with_status(Status::Resting))
            })
            .unwrap();
        let tasks = scene.tasks_of(id).unwrap();
        assert_eq!(tasks.wander, None);
        assert!(tasks.status.is_some());
        assert_eq!(scene.scheduler().len(), 1);
    }

    #[test]
    fn insert_rejects_foreign_id() {
        let mut scene = Scene::new(quiet_config()).unwrap();
        let err = scene
            .insert_with(|_| placed(CritterId(5), Vec2::ZERO, Vec2::ZERO))
            .unwrap_err();
        assert!(matches!(err, SceneError::Config(_)));
        assert!(scene.scheduler().is_empty());
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame_loop {
    use super::*;

    #[test]
    fn kinematics_run_before_scheduled_tasks() {
        let mut scene = Scene::new(quiet_config()).unwrap();
        let id = scene
            .insert_with(|id| {
                placed(id, Vec2::new(100.0, 100.0), Vec2::new(700.0, 100.0))
                    .map(|c| c.with_velocity(Velocity::new(2.0, 0.0)))
            })
            .unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        scene
            .scheduler_mut()
            .register(
                move |world: &mut World, _: &mut Scheduler<World>| {
                    log.borrow_mut().push(world.critter(id).map(Critter::position));
                    Ok(())
                },
                0.001,
            )
            .unwrap();

        scene.frame(1.0 / 60.0).unwrap();
        // Far from the destination: speed 2 + 5/10, heading already on target.
        assert_eq!(*seen.borrow(), vec![Some(Vec2::new(102.5, 100.0))]);
    }

    #[test]
    fn host_tasks_share_the_scheduler() {
        let mut scene = Scene::new(quiet_config()).unwrap();
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);
        scene
            .scheduler_mut()
            .register(
                move |_: &mut World, _: &mut Scheduler<World>| {
                    counter.set(counter.get() + 1);
                    Ok(())
                },
                0.5,
            )
            .unwrap();

        // 0.125 is exact in binary; each firing needs five frames.
        for _ in 0..40 {
            scene.frame(0.125).unwrap();
        }
        assert_eq!(fired.get(), 8);
    }

    #[test]
    fn clock_tracks_frames_and_time() {
        let mut scene = Scene::new(quiet_config()).unwrap();
        for _ in 0..4 {
            scene.frame(0.25).unwrap();
        }
        assert_eq!(scene.clock().current_frame, Frame(4));
        assert_eq!(scene.clock().elapsed_secs, 1.0);
        assert_eq!(scene.clock().mean_fps(), Some(4.0));
    }

    #[test]
    fn invalid_delta_is_rejected_before_any_work() {
        let mut scene = SceneBuilder::new(SceneConfig { critter_count: 2, ..SceneConfig::default() })
            .build()
            .unwrap();
        let before: Vec<Vec2> = scene.critters().map(Critter::position).collect();

        for bad in [-0.5, f64::NAN] {
            let err = scene.frame(bad).unwrap_err();
            assert!(matches!(err, SceneError::Schedule(ScheduleError::InvalidElapsed(_))));
        }
        let after: Vec<Vec2> = scene.critters().map(Critter::position).collect();
        assert_eq!(before, after);
        assert_eq!(scene.clock().current_frame, Frame::ZERO);
    }

    #[test]
    fn task_fault_reaches_the_host() {
        let mut scene = Scene::new(quiet_config()).unwrap();
        scene
            .scheduler_mut()
            .register(|_: &mut World, _: &mut Scheduler<World>| Err("boom".into()), 0.1)
            .unwrap();

        let err = scene.frame(0.125).unwrap_err();
        assert!(matches!(err, SceneError::Schedule(ScheduleError::TaskFailed { .. })));
        assert!(err.to_string().ends_with("boom"), "{err}");
        assert_eq!(scene.clock().current_frame, Frame(1), "the frame still counts");
    }

    #[test]
    fn task_for_missing_critter_fails() {
        let mut scene = Scene::new(quiet_config()).unwrap();
        scene
            .scheduler_mut()
            .register(crate::tasks::wander_task(CritterId(99)), 0.1)
            .unwrap();
        let err = scene.frame(0.125).unwrap_err();
        assert!(err.to_string().contains("CritterId(99) not found"), "{err}");
    }

    #[test]
    fn resize_moves_the_wrap_bounds() {
        let mut scene = Scene::new(quiet_config()).unwrap();
        assert!(matches!(scene.resize(Size::new(-1.0, 5.0)), Err(SceneError::Config(_))));

        scene.resize(Size::new(50.0, 40.0)).unwrap();
        assert_eq!(scene.world().canvas(), Size::new(50.0, 40.0));
        assert_eq!(scene.config().canvas, Size::new(50.0, 40.0));

        let id = scene
            .insert_with(|id| placed(id, Vec2::new(200.0, 20.0), Vec2::new(200.0, 20.0)))
            .unwrap();
        scene.frame(1.0 / 60.0).unwrap();
        // x > W + w → −w/2
        assert_eq!(scene.critter(id).unwrap().position(), Vec2::new(-10.0, 20.0));
    }
}

// ── Status transitions through the scheduler ──────────────────────────────────

#[cfg(test)]
mod transitions {
    use super::*;

    fn restless_scene() -> (Scene, CritterId) {
        let config = SceneConfig { status_interval: 1.0, initial_wander_interval: 1.0, ..quiet_config() };
        let scene = SceneBuilder::new(config)
            .critter(TraitOverrides::new().curiosity(1.0))
            .build()
            .unwrap();
        (scene, CritterId(0))
    }

    #[test]
    fn fully_curious_critter_flips_on_every_status_firing() {
        let (mut scene, id) = restless_scene();

        for _ in 0..4 {
            scene.frame(0.25).unwrap();
        }
        assert_eq!(scene.critter(id).unwrap().status(), Status::Wandering);

        scene.frame(0.25).unwrap();
        assert_eq!(scene.critter(id).unwrap().status(), Status::Resting);
        assert_eq!(scene.tasks_of(id).unwrap().wander, None);
        assert_eq!(scene.scheduler().len(), 1);

        for _ in 0..5 {
            scene.frame(0.25).unwrap();
        }
        assert_eq!(scene.critter(id).unwrap().status(), Status::Wandering);
        let wander = scene.tasks_of(id).unwrap().wander.unwrap();
        // Curiosity 1 asks for a zero interval, floored to one frame.
        assert_eq!(scene.scheduler().interval(wander), Some(MIN_WANDER_INTERVAL));
        assert_eq!(scene.scheduler().countdown(wander), Some(MIN_WANDER_INTERVAL));
        assert_task_invariants(&scene);
    }

    #[test]
    fn replacement_wander_task_gets_a_fresh_id() {
        let (mut scene, id) = restless_scene();
        let first = scene.tasks_of(id).unwrap().wander.unwrap();
        for _ in 0..10 {
            scene.frame(0.25).unwrap();
        }
        let second = scene.tasks_of(id).unwrap().wander.unwrap();
        assert_ne!(first, second);
        assert!(!scene.scheduler().contains(first));
    }

    #[test]
    fn incurious_critters_never_rest() {
        let config = SceneConfig {
            critter_count: 5,
            status_interval: 0.5,
            traits: TraitOverrides::new().curiosity(-1.0),
            ..SceneConfig::default()
        };
        let mut scene = SceneBuilder::new(config).build().unwrap();
        scene.run_frames(600, 1.0 / 60.0, &mut NoopObserver).unwrap();
        assert_eq!(scene.world().status_counts(), (5, 0));
    }

    #[test]
    fn wander_task_invariant_holds_every_frame() {
        let config = SceneConfig { critter_count: 20, seed: 3, status_interval: 0.5, ..SceneConfig::default() };
        let mut scene = SceneBuilder::new(config).build().unwrap();
        let mut saw_rest = false;

        for _ in 0..600 {
            scene.frame(1.0 / 60.0).unwrap();
            assert_task_invariants(&scene);
            for critter in scene.critters() {
                let top = critter.traits().top_speed();
                assert!((0.0..=top).contains(&critter.speed()), "{}: {}", critter.id(), critter.speed());
            }
            saw_rest |= scene.world().status_counts().1 > 0;
        }
        assert!(saw_rest, "no critter ever rested");
    }
}

// ── Despawn ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod despawn {
    use super::*;

    #[test]
    fn despawn_unregisters_every_task() {
        let config = SceneConfig { critter_count: 3, ..SceneConfig::default() };
        let mut scene = SceneBuilder::new(config).build().unwrap();
        let tasks = scene.tasks_of(CritterId(1)).unwrap();

        let gone = scene.despawn(CritterId(1)).unwrap();
        assert_eq!(gone.id(), CritterId(1));
        assert_eq!(scene.world().len(), 2);
        assert_eq!(scene.scheduler().len(), 4);
        assert!(tasks.ids().all(|t| !scene.scheduler().contains(t)));
        assert_eq!(scene.tasks_of(CritterId(1)), None);

        // The rest of the scene keeps running.
        scene.run_frames(120, 1.0 / 60.0, &mut NoopObserver).unwrap();
        assert_task_invariants(&scene);
    }

    #[test]
    fn unknown_critter_is_reported() {
        let mut scene = SceneBuilder::new(SceneConfig { critter_count: 1, ..SceneConfig::default() })
            .build()
            .unwrap();
        scene.despawn(CritterId(0)).unwrap();
        assert!(matches!(
            scene.despawn(CritterId(0)),
            Err(SceneError::CritterNotFound(CritterId(0)))
        ));
        assert!(matches!(
            scene.despawn(CritterId(42)),
            Err(SceneError::CritterNotFound(_))
        ));
    }

    #[test]
    fn ids_are_not_reissued() {
        let mut scene = SceneBuilder::new(SceneConfig { critter_count: 2, ..SceneConfig::default() })
            .build()
            .unwrap();
        scene.despawn(CritterId(1)).unwrap();
        assert_eq!(scene.spawn(&TraitOverrides::new()).unwrap(), CritterId(2));
        assert!(scene.critter(CritterId(1)).is_none());
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use super::*;

    fn positions_after(seed: u64, frames: u64) -> Vec<Vec2> {
        let config = SceneConfig { critter_count: 8, seed, status_interval: 0.5, ..SceneConfig::default() };
        let mut scene = SceneBuilder::new(config).build().unwrap();
        scene.run_frames(frames, 1.0 / 60.0, &mut NoopObserver).unwrap();
        scene.critters().map(Critter::position).collect()
    }

    #[test]
    fn same_seed_same_scene() {
        assert_eq!(positions_after(42, 300), positions_after(42, 300));
    }

    #[test]
    fn different_seed_different_scene() {
        assert_ne!(positions_after(42, 300), positions_after(43, 300));
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        starts:  Vec<Frame>,
        ends:    Vec<(Frame, usize)>,
        run_end: Option<Frame>,
    }

    impl FrameObserver for Recorder {
        fn on_frame_start(&mut self, frame: Frame) {
            self.starts.push(frame);
        }

        fn on_frame_end(&mut self, frame: Frame, world: &World) {
            self.ends.push((frame, world.len()));
        }

        fn on_run_end(&mut self, clock: &FrameClock) {
            self.run_end = Some(clock.current_frame);
        }
    }

    #[test]
    fn hooks_fire_around_every_frame() {
        let mut scene = SceneBuilder::new(SceneConfig { critter_count: 2, ..SceneConfig::default() })
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        scene.run_frames(3, 1.0 / 60.0, &mut rec).unwrap();

        assert_eq!(rec.starts, vec![Frame(0), Frame(1), Frame(2)]);
        assert_eq!(rec.ends, vec![(Frame(0), 2), (Frame(1), 2), (Frame(2), 2)]);
        assert_eq!(rec.run_end, Some(Frame(3)));
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn parses_partial_json() {
        let json = r#"{
            "canvas": { "width": 1280, "height": 720 },
            "critter_count": 30,
            "seed": 7,
            "traits": { "top_speed": 4 }
        }"#;
        let config = SceneConfig::from_json_str(json).unwrap();
        assert_eq!(config.canvas, Size::new(1280.0, 720.0));
        assert_eq!(config.critter_count, 30);
        assert_eq!(config.seed, 7);
        assert_eq!(config.traits.top_speed, Some(4.0));
        assert_eq!(config.status_interval, 5.0);
        assert_eq!(config.critter_size, DEFAULT_SIZE);
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(SceneConfig::from_json_str("{}").unwrap(), SceneConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(SceneConfig::from_json_str(r#"{ "colour": "red" }"#), Err(SceneError::Json(_))));
        assert!(matches!(
            SceneConfig::from_json_str(r#"{ "traits": { "bravery": 1 } }"#),
            Err(SceneError::Json(_))
        ));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            SceneConfig::from_json_str(r#"{ "status_interval": 0 }"#),
            Err(SceneError::Config(_))
        ));
        assert!(matches!(
            SceneConfig::from_json_str(r#"{ "traits": { "curiosity": 2 } }"#),
            Err(SceneError::Critter(CritterError::InvalidTrait { .. }))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SceneConfig::from_json_file(std::path::Path::new("/nonexistent/meadow.json")).unwrap_err();
        assert!(matches!(err, SceneError::Io(_)));
    }

    #[test]
    fn round_trips_through_json() {
        let config = SceneConfig { seed: 9, traits: TraitOverrides::new().curiosity(0.25), ..SceneConfig::default() };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SceneConfig::from_json_str(&json).unwrap(), config);
    }
}
