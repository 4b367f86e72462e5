use std::time::Duration;

/// Named timer slot. At most one timer is pending per slot; scheduling onto
/// an occupied slot cancels whatever was there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerSlot {
    /// Fade-in or collapse of the portfolio card at this index.
    CardTransition(usize),
    /// Simulated contact form submission.
    FormSubmit,
    /// Auto-hide of the contact form success banner.
    SuccessBanner,
}

#[derive(Debug, PartialEq)]
pub enum Action<M> {
    Schedule {
        slot: TimerSlot,
        delay: Duration,
        message: M,
    },
    Cancel(TimerSlot),
}

impl<M> Action<M> {
    pub fn map<N>(self, f: impl Fn(M) -> N) -> Action<N> {
        match self {
            Action::Schedule {
                slot,
                delay,
                message,
            } => Action::Schedule {
                slot,
                delay,
                message: f(message),
            },
            Action::Cancel(slot) => Action::Cancel(slot),
        }
    }
}

/// Deferred work returned from an update, executed by the host runtime.
#[derive(Debug, PartialEq)]
#[must_use]
pub struct Command<M> {
    actions: Vec<Action<M>>,
}

impl<M> Command<M> {
    pub fn none() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Deliver `message` after `delay`, replacing anything pending on `slot`.
    pub fn after(slot: TimerSlot, delay: Duration, message: M) -> Self {
        Self {
            actions: vec![Action::Schedule {
                slot,
                delay,
                message,
            }],
        }
    }

    pub fn cancel(slot: TimerSlot) -> Self {
        Self {
            actions: vec![Action::Cancel(slot)],
        }
    }

    pub fn batch(commands: impl IntoIterator<Item = Command<M>>) -> Self {
        Self {
            actions: commands.into_iter().flat_map(|c| c.actions).collect(),
        }
    }

    pub fn map<N>(self, f: impl Fn(M) -> N) -> Command<N> {
        Command {
            actions: self.actions.into_iter().map(|a| a.map(&f)).collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn actions(&self) -> &[Action<M>] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action<M>> {
        self.actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_preserves_order_and_map_rewraps() {
        let cmd = Command::batch([
            Command::after(TimerSlot::FormSubmit, Duration::from_millis(5), 1),
            Command::none(),
            Command::cancel(TimerSlot::SuccessBanner),
        ])
        .map(|n| n * 10);
        assert_eq!(
            cmd.into_actions(),
            vec![
                Action::Schedule {
                    slot: TimerSlot::FormSubmit,
                    delay: Duration::from_millis(5),
                    message: 10,
                },
                Action::Cancel(TimerSlot::SuccessBanner),
            ]
        );
    }
}
