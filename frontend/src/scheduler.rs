use gloo_timers::callback::Timeout;
use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

/// Guard for a delayed callback. Dropping it cancels the callback if it has
/// not fired yet.
pub struct ScheduledTask {
    _guard: Box<dyn Any>,
}

impl ScheduledTask {
    pub fn new(guard: impl Any) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ScheduledTask;
}

/// Browser timers backed by `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ScheduledTask {
        ScheduledTask::new(Timeout::new(delay_ms, task))
    }
}

/// At most one pending task for one element. Scheduling into a slot cancels
/// whatever it held before, so repeated interactions never interleave.
#[derive(Clone, Default)]
pub struct TaskSlot(Rc<RefCell<Option<ScheduledTask>>>);

impl TaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, scheduler: &dyn Scheduler, delay_ms: u32, task: impl FnOnce() + 'static) {
        let next = scheduler.schedule(delay_ms, Box::new(task));
        let previous = self.0.borrow_mut().replace(next);
        drop(previous);
    }

    pub fn cancel(&self) {
        let previous = self.0.borrow_mut().take();
        drop(previous);
    }
}
