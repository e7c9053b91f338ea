use crate::scheduler::{ScheduledTask, Scheduler};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

type TaskKey = (u64, u64);

#[derive(Default)]
struct State {
    now: u64,
    next_id: u64,
    tasks: BTreeMap<TaskKey, Box<dyn FnOnce()>>,
}

/// Virtual-time scheduler. Tasks only run inside [`ManualScheduler::advance`].
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<State>>,
}

struct CancelOnDrop {
    key: TaskKey,
    state: Weak<RefCell<State>>,
}

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            let removed = state.borrow_mut().tasks.remove(&self.key);
            drop(removed);
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Moves the clock forward, running due tasks in deadline order. Tasks
    /// scheduled while advancing run too if they fall inside the window.
    pub fn advance(&self, ms: u64) {
        let deadline = self.now() + ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let due = state
                    .tasks
                    .keys()
                    .next()
                    .copied()
                    .filter(|(at, _)| *at <= deadline);
                due.and_then(|key| {
                    state.now = key.0;
                    state.tasks.remove(&key)
                })
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
        self.state.borrow_mut().now = deadline;
    }

    /// Runs everything that is pending, however far out.
    pub fn settle(&self) {
        loop {
            let next_at = self.state.borrow().tasks.keys().next().map(|key| key.0);
            let Some(at) = next_at else {
                break;
            };
            let now = self.now();
            self.advance(at.saturating_sub(now));
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ScheduledTask {
        let key = {
            let mut state = self.state.borrow_mut();
            state.next_id += 1;
            let key = (state.now + u64::from(delay_ms), state.next_id);
            state.tasks.insert(key, task);
            key
        };
        ScheduledTask::new(CancelOnDrop {
            key,
            state: Rc::downgrade(&self.state),
        })
    }
}
