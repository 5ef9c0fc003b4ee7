//! Game loop engine
//!
//! Owns the session state and drives three periodic ticks off one
//! scheduler:
//! - physics: advance items, resolve catches and misses
//! - spawn: drop one new item
//! - countdown: tick the clock down once a second
//!
//! Time is virtual. A front-end calls [`Engine::advance`] with the wall time
//! that passed and every tick that fell due runs, in order, to completion.

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::overlaps;
use super::entity::{GamePhase, GameState};
use super::event::{EventQueue, GameEvent, RemovalReason};
use super::player::{Direction, move_player};
use super::scheduler::Scheduler;
use super::scoring::resolve;
use super::spawner::spawn_one;
use crate::config::{COUNTDOWN_INTERVAL_MS, GameConfig};
use crate::error::ConfigError;
use crate::sound::{MusicCue, SoundEffect};

/// The three periodic processes, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Physics,
    Spawn,
    Countdown,
}

#[derive(Debug, Clone, Copy)]
enum EndReason {
    TimeUp,
    Hazard,
}

#[derive(Debug)]
pub struct Engine {
    config: GameConfig,
    state: GameState,
    scheduler: Scheduler<TickKind>,
    seed: u64,
    rng: Pcg32,
    events: EventQueue,
    /// Elapsed time below one millisecond, carried into the next advance
    sub_ms: Duration,
}

impl Engine {
    /// Build an Idle engine. Fails if the configuration is unusable.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(&config);
        Ok(Self {
            config,
            state,
            scheduler: Scheduler::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: EventQueue::new(),
            sub_ms: Duration::ZERO,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Virtual time since the engine was built
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.scheduler.now_ms())
    }

    /// How long until the next tick falls due, `None` when nothing runs
    pub fn next_tick_in(&self) -> Option<Duration> {
        self.scheduler.time_to_next().map(Duration::from_millis)
    }

    /// Take every event emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Idle → Playing
    pub fn start(&mut self) {
        if self.state.phase != GamePhase::Idle {
            log::debug!("start ignored in {:?}", self.state.phase);
            return;
        }

        self.state = GameState::new(&self.config);
        self.state.phase = GamePhase::Playing;

        self.events.push(GameEvent::SoundRequested(SoundEffect::ButtonClick));
        self.events.push(GameEvent::Music(MusicCue::Play));
        self.events.push(GameEvent::PhaseChanged(GamePhase::Playing));
        self.events.push(GameEvent::ScoreChanged(0));
        self.events.push(GameEvent::TimeChanged(self.state.time_remaining));
        self.events
            .push(GameEvent::PlayerMoved(self.state.player.position_percent));

        self.scheduler
            .schedule(TickKind::Physics, self.config.physics_interval_ms);
        self.scheduler
            .schedule(TickKind::Spawn, self.config.item_spawn_interval_ms);
        self.scheduler
            .schedule(TickKind::Countdown, COUNTDOWN_INTERVAL_MS);

        log::info!(
            "Game started: {}s round, seed {}",
            self.config.game_duration_seconds,
            self.seed
        );
    }

    /// Ended → Idle. The finished session is discarded.
    pub fn restart(&mut self) {
        if self.state.phase != GamePhase::Ended {
            log::debug!("restart ignored in {:?}", self.state.phase);
            return;
        }

        // Already empty after the end transition; keeps the generation fresh
        self.scheduler.cancel_all();
        self.state = GameState::new(&self.config);

        self.events.push(GameEvent::SoundRequested(SoundEffect::ButtonClick));
        self.events.push(GameEvent::Music(MusicCue::Stop));
        self.events.push(GameEvent::PhaseChanged(GamePhase::Idle));
        log::info!("Back to title");
    }

    pub fn move_left(&mut self) {
        self.move_player(Direction::Left);
    }

    pub fn move_right(&mut self) {
        self.move_player(Direction::Right);
    }

    pub fn move_player(&mut self, direction: Direction) {
        match move_player(&mut self.state, direction, self.config.player_move_speed) {
            Some(pos) => self.events.push(GameEvent::PlayerMoved(pos)),
            None => log::debug!("move ignored in {:?}", self.state.phase),
        }
    }

    /// Run every tick due within the next `elapsed` of virtual time
    ///
    /// The clock moves in whole milliseconds. Any remainder is carried over
    /// to the next call, so many short frames add up to real time.
    pub fn advance(&mut self, elapsed: Duration) {
        let carried = self.sub_ms.saturating_add(elapsed);
        let whole_ms = u64::try_from(carried.as_millis()).unwrap_or(u64::MAX);
        self.sub_ms = Duration::from_nanos(u64::from(carried.subsec_nanos() % 1_000_000));
        let until = self.scheduler.now_ms().saturating_add(whole_ms);
        while let Some(due) = self.scheduler.pop_due(until) {
            if !self.scheduler.is_live(due.handle) {
                continue;
            }
            match due.kind {
                TickKind::Physics => self.physics_tick(),
                TickKind::Spawn => self.spawn_tick(),
                TickKind::Countdown => self.countdown_tick(),
            }
        }
        self.scheduler.settle(until);
    }

    /// Advance items, then catch or drop them
    ///
    /// Removals are collected during the pass and compacted afterwards so
    /// every item is visited exactly once. A caught hazard stops the pass:
    /// items after it keep their positions.
    fn physics_tick(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }

        let field = self.config.field;
        let fall_speed = self.config.item_fall_speed;
        let paddle = self.state.player.rect(&field);

        let mut removed: Vec<usize> = Vec::new();
        let mut hazard_caught = false;

        for (idx, item) in self.state.active_items.iter_mut().enumerate() {
            item.pos.y += fall_speed;

            if overlaps(&item.rect(&field), &paddle) {
                removed.push(idx);
                let outcome = resolve(&item.kind);
                self.events.push(GameEvent::ItemRemoved {
                    id: item.id,
                    reason: RemovalReason::Caught,
                });
                self.events.push(GameEvent::SoundRequested(outcome.sound));

                if outcome.ends_game {
                    log::debug!("Caught hazard {:?}", item.kind.kind);
                    hazard_caught = true;
                    break;
                }

                self.state.score += outcome.score_delta;
                self.events.push(GameEvent::ScoreChanged(self.state.score));
                log::debug!(
                    "Caught {:?} (+{}), score {}",
                    item.kind.kind,
                    outcome.score_delta,
                    self.state.score
                );
            } else if item.pos.y > field.height {
                removed.push(idx);
                self.events.push(GameEvent::ItemRemoved {
                    id: item.id,
                    reason: RemovalReason::Missed,
                });
            }
        }

        if !removed.is_empty() {
            let mut idx = 0;
            self.state.active_items.retain(|_| {
                let keep = removed.binary_search(&idx).is_err();
                idx += 1;
                keep
            });
        }

        if hazard_caught {
            self.end_game(EndReason::Hazard);
            return;
        }

        debug_assert!(
            self.state.check_invariants(&field).is_ok(),
            "{:?}",
            self.state.check_invariants(&field)
        );
    }

    fn spawn_tick(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        let id = self.state.next_entity_id();
        let Some(item) = spawn_one(
            &self.config.item_catalog,
            &self.config.field,
            id,
            &mut self.rng,
        ) else {
            log::warn!("Item catalog is empty, nothing to spawn");
            return;
        };
        self.events.push(GameEvent::ItemSpawned(item.clone()));
        self.state.active_items.push(item);
    }

    /// The clock shows 0 for one full second before the round ends
    fn countdown_tick(&mut self) {
        if self.state.phase != GamePhase::Playing {
            return;
        }
        if self.state.time_remaining > 0 {
            self.state.time_remaining -= 1;
            self.events
                .push(GameEvent::TimeChanged(self.state.time_remaining));
        } else {
            self.end_game(EndReason::TimeUp);
        }
    }

    /// Playing → Ended. Cancels every tick before anything else happens.
    fn end_game(&mut self, reason: EndReason) {
        self.scheduler.cancel_all();
        self.state.phase = GamePhase::Ended;
        self.events.push(GameEvent::PhaseChanged(GamePhase::Ended));
        self.events.push(GameEvent::GameEnded(self.state.score));
        log::info!(
            "Game over ({:?}) at {}ms, final score {}",
            reason,
            self.scheduler.now_ms(),
            self.state.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FallingItem, ItemKind, ItemType};
    use glam::Vec2;

    const TICK: Duration = Duration::from_millis(16);

    fn treasure() -> ItemKind {
        ItemKind::treasure(ItemType::GoldIngot, 10, SoundEffect::Chime1)
    }

    fn bomb() -> ItemKind {
        ItemKind::hazard(ItemType::Bomb, SoundEffect::Explosion)
    }

    /// No spawns during a round, so tests place every item themselves
    fn quiet_config(duration: u32) -> GameConfig {
        GameConfig {
            game_duration_seconds: duration,
            item_spawn_interval_ms: 1_000_000,
            item_catalog: vec![treasure(), bomb()],
            ..Default::default()
        }
    }

    fn started(config: GameConfig) -> Engine {
        let mut engine = Engine::new(config, 1).unwrap();
        engine.start();
        engine.drain_events();
        engine
    }

    /// Place an item resting on top of the paddle; the next physics tick
    /// pushes it into the paddle.
    fn drop_on_paddle(engine: &mut Engine, kind: ItemKind) -> u32 {
        let field = engine.config.field;
        let paddle = engine.state.player.rect(&field);
        place(
            engine,
            kind,
            Vec2::new(paddle.min.x, paddle.min.y - field.item_height),
        )
    }

    fn place(engine: &mut Engine, kind: ItemKind, pos: Vec2) -> u32 {
        let id = engine.state.next_entity_id();
        engine.state.active_items.push(FallingItem { id, kind, pos });
        id
    }

    fn count(events: &[GameEvent], pred: impl Fn(&GameEvent) -> bool) -> usize {
        events.iter().filter(|e| pred(e)).count()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig {
            item_catalog: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            Engine::new(config, 0),
            Err(ConfigError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_idle_runs_nothing() {
        let mut engine = Engine::new(GameConfig::default(), 3).unwrap();
        assert_eq!(engine.phase(), GamePhase::Idle);
        assert_eq!(engine.next_tick_in(), None);
        engine.advance(Duration::from_secs(10));
        assert!(engine.drain_events().is_empty());
        assert!(engine.state().active_items.is_empty());
        assert_eq!(engine.now(), Duration::from_secs(10));
    }

    #[test]
    fn test_start_resets_defaults() {
        let mut engine = Engine::new(GameConfig::default(), 3).unwrap();
        engine.start();
        let state = engine.state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_remaining, 30);
        assert!(state.active_items.is_empty());
        assert_eq!(state.player.position_percent, 50.0);
        assert_eq!(engine.next_tick_in(), Some(TICK));

        let events = engine.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::SoundRequested(SoundEffect::ButtonClick),
                GameEvent::Music(MusicCue::Play),
                GameEvent::PhaseChanged(GamePhase::Playing),
                GameEvent::ScoreChanged(0),
                GameEvent::TimeChanged(30),
                GameEvent::PlayerMoved(50.0),
            ]
        );
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut engine = started(quiet_config(30));
        engine.move_right();
        engine.start();
        assert_eq!(engine.state().player.position_percent, 60.0);
        assert_eq!(engine.drain_events(), vec![GameEvent::PlayerMoved(60.0)]);
    }

    #[test]
    fn test_start_ignored_while_ended() {
        let mut engine = started(quiet_config(1));
        drop_on_paddle(&mut engine, treasure());
        engine.advance(Duration::from_secs(2));
        assert_eq!(engine.phase(), GamePhase::Ended);
        engine.drain_events();

        engine.start();
        assert_eq!(engine.phase(), GamePhase::Ended);
        assert_eq!(engine.state().score, 10);
        assert_eq!(engine.next_tick_in(), None);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_restart_ignored_while_idle() {
        let mut engine = Engine::new(quiet_config(30), 0).unwrap();
        engine.restart();
        assert_eq!(engine.phase(), GamePhase::Idle);
        assert_eq!(engine.next_tick_in(), None);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut engine = started(quiet_config(30));
        engine.advance(Duration::from_secs(1));
        engine.drain_events();

        engine.restart();
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(engine.state().time_remaining, 29);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_spawn_cadence() {
        let config = GameConfig {
            item_fall_speed: 0.1,
            ..Default::default()
        };
        let mut engine = started(config);
        engine.advance(Duration::from_millis(1000));
        let events = engine.drain_events();
        assert_eq!(count(&events, |e| matches!(e, GameEvent::ItemSpawned(_))), 5);
        assert_eq!(engine.state().active_items.len(), 5);

        let ids: Vec<u32> = engine.state().active_items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_catch_scores_exact_value() {
        let mut engine = started(quiet_config(30));
        let id = drop_on_paddle(&mut engine, treasure());
        engine.advance(TICK);

        assert_eq!(engine.state().score, 10);
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert!(engine.state().active_items.is_empty());
        assert_eq!(
            engine.drain_events(),
            vec![
                GameEvent::ItemRemoved {
                    id,
                    reason: RemovalReason::Caught
                },
                GameEvent::SoundRequested(SoundEffect::Chime1),
                GameEvent::ScoreChanged(10),
            ]
        );
    }

    #[test]
    fn test_missed_item_has_no_effect() {
        let mut engine = started(quiet_config(30));
        let height = engine.config.field.height;
        // Far left, clear of the centered paddle
        let id = place(&mut engine, treasure(), Vec2::new(0.0, height - 2.0));
        engine.advance(TICK);

        assert!(engine.state().active_items.is_empty());
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.phase(), GamePhase::Playing);
        assert_eq!(
            engine.drain_events(),
            vec![GameEvent::ItemRemoved {
                id,
                reason: RemovalReason::Missed
            }]
        );
    }

    #[test]
    fn test_removal_visits_each_item_once() {
        let mut engine = started(quiet_config(30));
        let height = engine.config.field.height;
        let fall = engine.config.item_fall_speed;

        let caught = drop_on_paddle(&mut engine, treasure());
        let missed = place(&mut engine, treasure(), Vec2::new(0.0, height - 1.0));
        let kept = place(&mut engine, treasure(), Vec2::new(0.0, 100.0));
        let caught_too = drop_on_paddle(&mut engine, treasure());
        engine.advance(TICK);

        let items = &engine.state().active_items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, kept);
        assert_eq!(items[0].pos.y, 100.0 + fall);
        assert_eq!(engine.state().score, 20);

        let removed: Vec<u32> = engine
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                GameEvent::ItemRemoved { id, .. } => Some(id),
                _ => None,
            })
            .collect();
        assert_eq!(removed, vec![caught, missed, caught_too]);
    }

    #[test]
    fn test_hazard_ends_immediately() {
        let mut engine = started(quiet_config(30));
        drop_on_paddle(&mut engine, treasure());
        drop_on_paddle(&mut engine, treasure());
        engine.advance(TICK);
        assert_eq!(engine.state().score, 20);

        engine.advance(Duration::from_millis(5000) - engine.now());
        assert_eq!(engine.state().time_remaining, 25);
        engine.drain_events();

        drop_on_paddle(&mut engine, bomb());
        engine.advance(TICK);

        assert_eq!(engine.phase(), GamePhase::Ended);
        assert_eq!(engine.state().score, 20);
        assert_eq!(engine.state().time_remaining, 25);
        assert_eq!(engine.next_tick_in(), None);
        let events = engine.drain_events();
        assert_eq!(events.last(), Some(&GameEvent::GameEnded(20)));
        assert!(events.contains(&GameEvent::SoundRequested(SoundEffect::Explosion)));

        engine.advance(Duration::from_secs(60));
        assert!(engine.drain_events().is_empty());
        assert_eq!(engine.state().time_remaining, 25);
    }

    #[test]
    fn test_hazard_freezes_rest_of_tick() {
        let mut engine = started(quiet_config(30));
        drop_on_paddle(&mut engine, bomb());
        let after = place(&mut engine, treasure(), Vec2::new(0.0, 100.0));
        engine.advance(TICK);

        assert_eq!(engine.phase(), GamePhase::Ended);
        let items = &engine.state().active_items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, after);
        assert_eq!(items[0].pos.y, 100.0);
    }

    #[test]
    fn test_countdown_ends_round() {
        let config = GameConfig {
            game_duration_seconds: 3,
            item_fall_speed: 0.1,
            ..Default::default()
        };
        let mut engine = started(config);

        engine.advance(Duration::from_millis(3000));
        assert_eq!(engine.state().time_remaining, 0);
        assert_eq!(engine.phase(), GamePhase::Playing);

        engine.advance(Duration::from_millis(1000));
        assert_eq!(engine.phase(), GamePhase::Ended);

        let frozen = engine.state().active_items.clone();
        engine.advance(Duration::from_secs(5));
        assert_eq!(engine.state().active_items, frozen);

        let events = engine.drain_events();
        let ended_at = events
            .iter()
            .position(|e| matches!(e, GameEvent::GameEnded(_)))
            .unwrap();
        assert_eq!(ended_at, events.len() - 1);
        let times: Vec<u32> = events
            .iter()
            .filter_map(|e| match e {
                GameEvent::TimeChanged(t) => Some(*t),
                _ => None,
            })
            .collect();
        assert_eq!(times, vec![2, 1, 0]);
    }

    #[test]
    fn test_fractional_frames_keep_real_time() {
        // 60 Hz frames are 16.667 ms; the fractions must add up
        let frame = Duration::from_micros(16_667);
        let mut engine = started(quiet_config(30));
        for _ in 0..1800 {
            engine.advance(frame);
        }
        assert_eq!(engine.now(), Duration::from_millis(30_000));
        assert_eq!(engine.state().time_remaining, 0);
        assert_eq!(engine.phase(), GamePhase::Playing);

        for _ in 0..60 {
            engine.advance(frame);
        }
        assert_eq!(engine.phase(), GamePhase::Ended);
    }

    #[test]
    fn test_sub_millisecond_frames_accumulate() {
        let mut engine = started(quiet_config(1));
        for _ in 0..5000 {
            engine.advance(Duration::from_micros(500));
        }
        assert_eq!(engine.now(), Duration::from_millis(2500));
        assert_eq!(engine.phase(), GamePhase::Ended);

        let events = engine.drain_events();
        assert_eq!(events.last(), Some(&GameEvent::GameEnded(0)));
    }

    #[test]
    fn test_huge_advance_saturates() {
        let mut engine = started(quiet_config(1));
        engine.advance(Duration::from_micros(1500));
        engine.advance(Duration::MAX);
        assert_eq!(engine.phase(), GamePhase::Ended);
        assert_eq!(engine.now(), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_round_with_single_catch() {
        let mut engine = started(quiet_config(30));
        drop_on_paddle(&mut engine, treasure());

        engine.advance(Duration::from_secs(30));
        assert_eq!(engine.state().time_remaining, 0);
        assert_eq!(engine.phase(), GamePhase::Playing);
        engine.advance(Duration::from_secs(1));
        assert_eq!(engine.phase(), GamePhase::Ended);

        let events = engine.drain_events();
        assert_eq!(count(&events, |e| *e == GameEvent::ScoreChanged(10)), 1);
        assert_eq!(count(&events, |e| matches!(e, GameEvent::ScoreChanged(_))), 1);
        assert_eq!(events.last(), Some(&GameEvent::GameEnded(10)));
    }

    #[test]
    fn test_moves_only_while_playing() {
        let mut engine = Engine::new(quiet_config(1), 0).unwrap();
        engine.move_left();
        assert_eq!(engine.state().player.position_percent, 50.0);
        assert!(engine.drain_events().is_empty());

        engine.start();
        engine.drain_events();
        engine.move_left();
        engine.move_left();
        assert_eq!(
            engine.drain_events(),
            vec![GameEvent::PlayerMoved(40.0), GameEvent::PlayerMoved(30.0)]
        );

        engine.advance(Duration::from_secs(2));
        assert_eq!(engine.phase(), GamePhase::Ended);
        engine.drain_events();
        engine.move_right();
        assert_eq!(engine.state().player.position_percent, 30.0);
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_restart_returns_to_idle_defaults() {
        let mut engine = started(quiet_config(30));
        engine.restart();
        assert_eq!(engine.phase(), GamePhase::Playing);

        drop_on_paddle(&mut engine, treasure());
        place(&mut engine, treasure(), Vec2::new(0.0, 0.0));
        engine.move_left();
        engine.advance(Duration::from_secs(3));
        drop_on_paddle(&mut engine, bomb());
        engine.advance(TICK);
        assert_eq!(engine.phase(), GamePhase::Ended);
        engine.drain_events();

        engine.restart();
        let state = engine.state();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_remaining, 30);
        assert!(state.active_items.is_empty());
        assert_eq!(state.player.position_percent, 50.0);
        assert_eq!(
            engine.drain_events(),
            vec![
                GameEvent::SoundRequested(SoundEffect::ButtonClick),
                GameEvent::Music(MusicCue::Stop),
                GameEvent::PhaseChanged(GamePhase::Idle),
            ]
        );

        engine.advance(Duration::from_secs(5));
        assert!(engine.drain_events().is_empty());

        engine.start();
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.state().time_remaining, 30);
        assert_eq!(engine.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_no_spawns_after_end() {
        // Fast fall so bombs actually land during the round
        let config = GameConfig {
            game_duration_seconds: 20,
            item_fall_speed: 40.0,
            ..Default::default()
        };
        let mut engine = Engine::new(config, 11).unwrap();
        engine.start();
        engine.advance(Duration::from_secs(60));
        assert_eq!(engine.phase(), GamePhase::Ended);

        let events = engine.drain_events();
        let ended_at = events
            .iter()
            .position(|e| matches!(e, GameEvent::GameEnded(_)))
            .unwrap();
        assert!(
            events[ended_at..]
                .iter()
                .all(|e| !matches!(e, GameEvent::ItemSpawned(_)))
        );
        assert_eq!(
            count(&events, |e| matches!(e, GameEvent::GameEnded(_))),
            1
        );
    }

    #[test]
    fn test_same_seed_same_session() {
        let run = |seed: u64| {
            let mut engine = Engine::new(GameConfig::default(), seed).unwrap();
            engine.start();
            let mut events = Vec::new();
            for step in 0..100u32 {
                if step % 3 == 0 {
                    engine.move_left();
                } else if step % 5 == 0 {
                    engine.move_right();
                }
                engine.advance(Duration::from_millis(100));
                events.extend(engine.drain_events());
            }
            events
        };
        assert_eq!(run(77), run(77));
        assert_ne!(run(77), run(78));
    }
}
