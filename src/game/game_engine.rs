use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

use super::game_state::{GameAction, GameState};
use super::leaderboard::{LeaderboardStore, LeaderboardTicket, LeaderboardView};
use super::settings::Settings;
use crate::destroyable::Destroyable;
use crate::error::{GameError, LeaderboardError};
use crate::events::{EventEmitter, EventObserver, Unsubscriber};
use crate::model::{
    FinalScore, GameEngineCommand, GameEngineEvent, GameSession, GameStateSnapshot, HintState,
    RoundState, ScheduledTimer, ScoreEntry, ScorePage, TimerHandle, TimerKind, TimerSchedule,
};

pub struct GameEngine {
    state: GameState,
    rng: StdRng,
    seed: u64,
    session_id: Uuid,
    timers: TimerSchedule,
    settings: Settings,
    leaderboard: LeaderboardView,
    next_request_id: u64,
    score_submitted: bool,
    subscription: Option<Unsubscriber<GameEngineCommand>>,
    game_engine_event_emitter: EventEmitter<GameEngineEvent>,
}

impl Destroyable for GameEngine {
    fn destroy(&mut self) {
        self.cancel_all_timers();
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl GameEngine {
    /// Creates an engine driven by commands arriving on `game_engine_command_observer`.
    pub fn new(
        game_engine_command_observer: EventObserver<GameEngineCommand>,
        game_engine_event_emitter: EventEmitter<GameEngineEvent>,
        settings: Settings,
    ) -> Rc<RefCell<Self>> {
        let engine = Rc::new(RefCell::new(Self::with_settings(
            game_engine_event_emitter,
            settings,
        )));
        GameEngine::wire_subscription(engine.clone(), game_engine_command_observer);
        engine
    }

    /// Creates an engine the caller drives through [`GameEngine::handle_command`].
    pub fn with_settings(
        game_engine_event_emitter: EventEmitter<GameEngineEvent>,
        settings: Settings,
    ) -> Self {
        let seed = settings.effective_seed().unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let state = GameState::new(settings.rules, &mut rng);
        let engine = Self {
            state,
            rng,
            seed,
            session_id: Uuid::new_v4(),
            timers: TimerSchedule::default(),
            settings,
            leaderboard: LeaderboardView::default(),
            next_request_id: 0,
            score_submitted: false,
            subscription: None,
            game_engine_event_emitter,
        };
        info!(
            target: "game_engine",
            "New game; seed: {}; session: {}",
            engine.seed, engine.session_id
        );
        engine.sync_display();
        engine
    }

    fn wire_subscription(
        engine: Rc<RefCell<Self>>,
        game_engine_command_observer: EventObserver<GameEngineCommand>,
    ) {
        let engine_handler = engine.clone();
        let subscription = game_engine_command_observer.subscribe(move |command| {
            let mut engine = engine_handler.borrow_mut();
            engine.handle_command(command.clone());
        });
        engine.borrow_mut().subscription = Some(subscription);
    }

    pub fn handle_command(&mut self, command: GameEngineCommand) {
        trace!(target: "game_engine", "Handling command: {:?}", command);
        match command {
            GameEngineCommand::SquareClick(index) => {
                self.dispatch(GameAction::SquareClicked(index))
            }
            GameEngineCommand::ShowHint => self.dispatch(GameAction::HintRequested),
            GameEngineCommand::TimerFired(handle) => self.timer_fired(handle),
            GameEngineCommand::Restart => self.restart(),
        }
    }

    fn timer_fired(&mut self, handle: TimerHandle) {
        if !self.timers.is_live(&handle) {
            debug!(target: "game_engine", "Ignoring stale timer {:?}", handle);
            return;
        }
        match handle.kind {
            TimerKind::GameTick => self.dispatch(GameAction::Tick),
            TimerKind::WrongSquareFlash => {
                // one-shot: spent once fired
                self.timers.cancel(TimerKind::WrongSquareFlash);
                self.dispatch(GameAction::WrongSquareExpired);
            }
        }
    }

    fn dispatch(&mut self, action: GameAction) {
        let next = self.state.clone().reduce(&action, &mut self.rng);
        let previous = std::mem::replace(&mut self.state, next);
        if previous == self.state {
            return;
        }
        self.emit_transition(&previous);
        self.sync_display();
    }

    /// Emits the events describing the move from `previous` to the current state and keeps the
    /// timers in step with the phase.
    fn emit_transition(&mut self, previous: &GameState) {
        let session = self.state.session.clone();

        if !previous.session.is_active() && session.is_active() {
            self.schedule_timer(TimerKind::GameTick);
        }

        if session.level > previous.session.level {
            if Settings::is_debug_mode() {
                debug!(
                    target: "game_engine",
                    "Level {} target square: {}",
                    session.level, self.state.round.different_square_index
                );
            }
            self.emit(GameEngineEvent::RoundAdvanced {
                level: session.level,
                points: session.score - previous.session.score,
                round: self.state.round.clone(),
            });
        }

        if session.lives < previous.session.lives {
            if session.is_over() {
                self.cancel_all_timers();
                info!(
                    target: "game_engine",
                    "Game over; score: {}; level: {}; time: {}s",
                    session.score, session.level, session.elapsed_seconds
                );
                self.emit(GameEngineEvent::GameOver(FinalScore {
                    score: session.score,
                    level: session.level,
                    time: session.elapsed_seconds,
                }));
            } else if let Some(index) = self.state.wrong_square {
                self.schedule_timer(TimerKind::WrongSquareFlash);
                self.emit(GameEngineEvent::WrongSquare {
                    index,
                    lives: session.lives,
                });
            }
        }

        if previous.wrong_square.is_some() && self.state.wrong_square.is_none() {
            self.cancel_timer(TimerKind::WrongSquareFlash);
            self.emit(GameEngineEvent::WrongSquareCleared);
        }

        if self.state.hint.is_active && self.state.hint != previous.hint {
            self.emit(GameEngineEvent::HintShown(
                self.state.hint.highlighted_indices.clone(),
            ));
        }
    }

    fn restart(&mut self) {
        self.cancel_all_timers();
        self.session_id = Uuid::new_v4();
        self.score_submitted = false;
        // results still in flight belong to the old session
        self.leaderboard.is_loading = false;
        self.state = self.state.clone().reduce(&GameAction::Restart, &mut self.rng);
        info!(target: "game_engine", "Restarted; session: {}", self.session_id);
        self.schedule_timer(TimerKind::GameTick);
        self.sync_display();
    }

    fn schedule_timer(&mut self, kind: TimerKind) {
        let (handle, replaced) = self.timers.schedule(kind, self.session_id);
        if let Some(replaced) = replaced {
            self.emit(GameEngineEvent::TimerCancelled(replaced));
        }
        let (delay, repeating) = match kind {
            TimerKind::GameTick => (self.settings.tick_interval, true),
            TimerKind::WrongSquareFlash => (self.settings.wrong_square_flash, false),
        };
        self.emit(GameEngineEvent::TimerScheduled(ScheduledTimer {
            handle,
            delay,
            repeating,
        }));
    }

    fn cancel_timer(&mut self, kind: TimerKind) {
        if let Some(handle) = self.timers.cancel(kind) {
            self.emit(GameEngineEvent::TimerCancelled(handle));
        }
    }

    fn cancel_all_timers(&mut self) {
        for handle in self.timers.cancel_all() {
            self.emit(GameEngineEvent::TimerCancelled(handle));
        }
    }

    fn emit(&self, event: GameEngineEvent) {
        self.game_engine_event_emitter.emit(event);
    }

    pub fn sync_display(&self) {
        self.emit(GameEngineEvent::StateChanged(self.snapshot()));
    }

    fn issue_ticket(&mut self) -> LeaderboardTicket {
        self.next_request_id += 1;
        LeaderboardTicket {
            session_id: self.session_id,
            request_id: self.next_request_id,
        }
    }

    fn is_stale(&self, ticket: &LeaderboardTicket) -> bool {
        if ticket.session_id != self.session_id {
            debug!(
                target: "game_engine",
                "Discarding leaderboard result {} from session {}",
                ticket.request_id, ticket.session_id
            );
            return true;
        }
        false
    }

    /// Starts a score submission for the finished game. The caller hands the entry to a
    /// [`LeaderboardStore`] and reports back through [`GameEngine::resolve_submission`].
    pub fn begin_submission(
        &mut self,
        name: &str,
    ) -> Result<(LeaderboardTicket, ScoreEntry), GameError> {
        let session = &self.state.session;
        if !session.is_over() {
            return Err(GameError::NotGameOver);
        }
        if self.score_submitted {
            return Err(GameError::AlreadySubmitted);
        }
        let entry = ScoreEntry::new(
            name,
            session.score,
            session.level,
            session.elapsed_seconds,
        )?;
        self.score_submitted = true;
        Ok((self.issue_ticket(), entry))
    }

    /// Applies the outcome of a submission. Returns `Ok(false)` when the result arrived after a
    /// restart and was dropped.
    pub fn resolve_submission(
        &mut self,
        ticket: LeaderboardTicket,
        entry: ScoreEntry,
        outcome: Result<(), LeaderboardError>,
    ) -> Result<bool, LeaderboardError> {
        if self.is_stale(&ticket) {
            return Ok(false);
        }
        match outcome {
            Ok(()) => {
                self.leaderboard.last_error = None;
                self.emit(GameEngineEvent::ScoreSubmitted(entry));
                Ok(true)
            }
            Err(err) => {
                warn!(target: "game_engine", "Score submission failed: {}", err);
                // let the player try again
                self.score_submitted = false;
                self.leaderboard.last_error = Some(err.to_string());
                self.emit(GameEngineEvent::LeaderboardFailed(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn begin_page_load(&mut self) -> LeaderboardTicket {
        self.leaderboard.is_loading = true;
        self.issue_ticket()
    }

    /// Applies a fetched leaderboard page. Returns `Ok(false)` for results from an old session.
    pub fn resolve_page(
        &mut self,
        ticket: LeaderboardTicket,
        result: Result<ScorePage, LeaderboardError>,
    ) -> Result<bool, LeaderboardError> {
        if self.is_stale(&ticket) {
            return Ok(false);
        }
        self.leaderboard.is_loading = false;
        match result {
            Ok(page) => {
                self.leaderboard.scores = page.entries.clone();
                self.leaderboard.current_page = page.page;
                self.leaderboard.total_pages = page.total_pages;
                self.leaderboard.last_error = None;
                self.emit(GameEngineEvent::LeaderboardUpdated(page));
                Ok(true)
            }
            Err(err) => {
                warn!(target: "game_engine", "Leaderboard fetch failed: {}", err);
                self.leaderboard.last_error = Some(err.to_string());
                self.emit(GameEngineEvent::LeaderboardFailed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Submits the finished game to `store` and reloads the first page. Once the store has
    /// accepted the entry the result is `Ok`; a failed reload only shows up in the leaderboard
    /// view.
    pub fn submit_score<S: LeaderboardStore + ?Sized>(
        &mut self,
        store: &mut S,
        name: &str,
    ) -> Result<ScoreEntry, GameError> {
        let (ticket, entry) = self.begin_submission(name)?;
        let outcome = store.submit(&entry);
        self.resolve_submission(ticket, entry.clone(), outcome)?;
        if let Err(err) = self.load_page(store, 1) {
            debug!(target: "game_engine", "Score saved but reload failed: {}", err);
        }
        Ok(entry)
    }

    pub fn load_page<S: LeaderboardStore + ?Sized>(
        &mut self,
        store: &S,
        page: usize,
    ) -> Result<(), GameError> {
        let ticket = self.begin_page_load();
        let result = store.fetch_page(page);
        self.resolve_page(ticket, result)?;
        Ok(())
    }

    pub fn snapshot(&self) -> GameStateSnapshot {
        GameStateSnapshot {
            session_id: self.session_id,
            seed: self.seed,
            round: self.state.round.clone(),
            session: self.state.session.clone(),
            hint: self.state.hint.clone(),
            wrong_square: self.state.wrong_square,
        }
    }

    pub fn round(&self) -> &RoundState {
        &self.state.round
    }

    pub fn session(&self) -> &GameSession {
        &self.state.session
    }

    pub fn hint(&self) -> &HintState {
        &self.state.hint
    }

    pub fn wrong_square(&self) -> Option<usize> {
        self.state.wrong_square
    }

    pub fn leaderboard(&self) -> &LeaderboardView {
        &self.leaderboard
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn live_timer(&self, kind: TimerKind) -> Option<TimerHandle> {
        self.timers.live(kind)
    }
}
