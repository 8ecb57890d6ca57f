//! Host session
//!
//! Owns the simulation state and its collaborators. Each call to
//! [`Session::advance`] runs one tick, then hands the queued events to the
//! audio sink and presenter.

use crate::audio::AudioSink;
use crate::hud::{HudSnapshot, Presenter};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};

pub struct Session<A: AudioSink, P: Presenter> {
    state: GameState,
    audio: A,
    presenter: P,
}

impl<A: AudioSink, P: Presenter> Session<A, P> {
    pub fn new(seed: u64, audio: A, presenter: P) -> Self {
        Self {
            state: GameState::new(seed),
            audio,
            presenter,
        }
    }

    pub fn from_settings(settings: &Settings, audio: A, presenter: P) -> Self {
        Self {
            state: GameState::from_settings(settings),
            audio,
            presenter,
        }
    }

    /// Reset and begin running (also used to restart after game over)
    pub fn start(&mut self) {
        self.state.start();
        self.dispatch();
    }

    /// Run one tick with the given input
    ///
    /// Returns whether the session is still running afterwards.
    pub fn advance(&mut self, input: &TickInput) -> bool {
        if !self.state.is_running() {
            return false;
        }
        tick(&mut self.state, input);
        self.dispatch();
        self.state.is_running()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot::from_state(&self.state)
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn dispatch(&mut self) {
        for event in self.state.drain_events() {
            if let Some(cue) = event.audio_cue() {
                self.audio.play(cue);
            }
            if let GameEvent::Notice(notification) = &event {
                self.presenter.notify(notification);
            }
        }
        let hud = HudSnapshot::from_state(&self.state);
        self.presenter.present(&hud, &self.state);
    }
}
