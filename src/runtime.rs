//! Native host for a [`PageController`].
//!
//! Timers live in a table keyed by deadline and are fired by sleeping on the
//! tokio clock, so a test running with a paused clock steps through a
//! submission or a filter transition instantly and deterministically.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use tokio::time::{Instant, sleep_until};

use crate::core::{Action, Command, Dom, PreferenceStore, TimerSlot};
use crate::ui::{Message, PageController};

type TimerKey = (Instant, u64);

pub struct Runtime<D: Dom, S> {
    controller: PageController<D, S>,
    timers: BTreeMap<TimerKey, (TimerSlot, Message)>,
    slots: HashMap<TimerSlot, TimerKey>,
    next_seq: u64,
}

impl<D: Dom, S: PreferenceStore> Runtime<D, S> {
    pub fn new(controller: PageController<D, S>) -> Self {
        Self {
            controller,
            timers: BTreeMap::new(),
            slots: HashMap::new(),
            next_seq: 0,
        }
    }

    pub fn controller(&self) -> &PageController<D, S> {
        &self.controller
    }

    pub fn dom(&self) -> &D {
        self.controller.dom()
    }

    /// Deliver a message now and queue whatever it schedules.
    pub fn dispatch(&mut self, message: Message) {
        let command = self.controller.update(message);
        self.apply(command);
    }

    fn apply(&mut self, command: Command<Message>) {
        for action in command.into_actions() {
            match action {
                Action::Schedule {
                    slot,
                    delay,
                    message,
                } => self.schedule(slot, delay, message),
                Action::Cancel(slot) => self.cancel(slot),
            }
        }
    }

    fn schedule(&mut self, slot: TimerSlot, delay: Duration, message: Message) {
        self.cancel(slot);
        let key = (Instant::now() + delay, self.next_seq);
        self.next_seq += 1;
        tracing::debug!(?slot, ?delay, "Timer scheduled");
        self.timers.insert(key, (slot, message));
        self.slots.insert(slot, key);
    }

    fn cancel(&mut self, slot: TimerSlot) {
        if let Some(key) = self.slots.remove(&slot) {
            self.timers.remove(&key);
            tracing::debug!(?slot, "Timer cancelled");
        }
    }

    pub fn is_scheduled(&self, slot: TimerSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Pending slots in firing order.
    pub fn pending_timers(&self) -> Vec<TimerSlot> {
        self.timers.values().map(|(slot, _)| *slot).collect()
    }

    /// Let `duration` elapse, firing every timer that comes due along the
    /// way (including ones scheduled by earlier timers in the same window).
    pub async fn advance(&mut self, duration: Duration) {
        let until = Instant::now() + duration;
        while self
            .timers
            .first_key_value()
            .is_some_and(|((deadline, _), _)| *deadline <= until)
        {
            self.fire_next().await;
        }
        sleep_until(until).await;
    }

    /// Fire timers until none remain.
    pub async fn settle(&mut self) {
        while !self.timers.is_empty() {
            self.fire_next().await;
        }
    }

    async fn fire_next(&mut self) {
        let Some(((deadline, _), (slot, message))) = self.timers.pop_first() else {
            return;
        };
        self.slots.remove(&slot);
        sleep_until(deadline).await;
        tracing::debug!(?slot, "Timer fired");
        self.dispatch(message);
    }
}
