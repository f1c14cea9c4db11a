//! Scripted window backend for tests
//!
//! Every call is appended to a thread-local journal so tests can assert on
//! the exact acquire/release order. Failures are injected per setup step.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::config::{ClearColor, ContextConfig, WindowConfig};
use super::backend::{WindowBackend, WindowEvent, WindowSurface};
use super::error::{WindowError, WindowResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Call {
    Init,
    CreateWindow,
    MakeCurrent,
    LoadFunctions,
    SetVsync(bool),
    Clear(ClearColor),
    SwapBuffers,
    PollEvents,
    DestroyWindow,
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailAt {
    Nothing,
    Init,
    CreateWindow,
    LoadFunctions,
}

thread_local! {
    static JOURNAL: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
    static PLAN: Cell<FailAt> = const { Cell::new(FailAt::Nothing) };
    static CLOSE_AFTER_POLLS: Cell<Option<u32>> = const { Cell::new(None) };
}

/// Clear the journal and arm the failure plan for the next setup
pub(crate) fn reset(plan: FailAt) {
    JOURNAL.with(|journal| journal.borrow_mut().clear());
    PLAN.with(|p| p.set(plan));
    CLOSE_AFTER_POLLS.with(|c| c.set(None));
}

/// Deliver a close request on the `polls`-th call to `poll_events`
pub(crate) fn close_after_polls(polls: u32) {
    CLOSE_AFTER_POLLS.with(|c| c.set(Some(polls)));
}

pub(crate) fn calls() -> Vec<Call> {
    JOURNAL.with(|journal| journal.borrow().clone())
}

pub(crate) fn count(call: Call) -> usize {
    calls().into_iter().filter(|c| *c == call).count()
}

fn record(call: Call) {
    JOURNAL.with(|journal| journal.borrow_mut().push(call));
}

fn fails_at(step: FailAt) -> bool {
    PLAN.with(Cell::get) == step
}

#[derive(Default)]
struct Shared {
    events: RefCell<Vec<WindowEvent>>,
    close_flag: Cell<bool>,
}

pub(crate) struct MockBackend {
    shared: Rc<Shared>,
    polls: u32,
}

impl WindowBackend for MockBackend {
    type Surface = MockSurface;

    fn init(_context: &ContextConfig) -> WindowResult<Self> {
        record(Call::Init);
        if fails_at(FailAt::Init) {
            return Err(WindowError::InitializationFailed("no display".to_string()));
        }
        Ok(Self {
            shared: Rc::new(Shared::default()),
            polls: 0,
        })
    }

    fn create_surface(&mut self, config: &WindowConfig) -> WindowResult<MockSurface> {
        record(Call::CreateWindow);
        if fails_at(FailAt::CreateWindow) {
            return Err(WindowError::CreationFailed);
        }
        Ok(MockSurface {
            shared: Rc::clone(&self.shared),
            size: (config.width, config.height),
        })
    }

    fn set_vsync(&mut self, enabled: bool) {
        record(Call::SetVsync(enabled));
    }

    fn poll_events(&mut self) {
        record(Call::PollEvents);
        self.polls += 1;
        if CLOSE_AFTER_POLLS.with(Cell::get) == Some(self.polls) {
            self.shared.close_flag.set(true);
            self.shared.events.borrow_mut().push(WindowEvent::CloseRequested);
        }
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        record(Call::Terminate);
    }
}

pub(crate) struct MockSurface {
    shared: Rc<Shared>,
    size: (u32, u32),
}

impl WindowSurface for MockSurface {
    fn make_current(&mut self) {
        record(Call::MakeCurrent);
    }

    fn load_functions(&mut self) -> WindowResult<()> {
        record(Call::LoadFunctions);
        if fails_at(FailAt::LoadFunctions) {
            return Err(WindowError::FunctionLoadingFailed("glClear".to_string()));
        }
        Ok(())
    }

    fn should_close(&self) -> bool {
        self.shared.close_flag.get()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.shared.close_flag.set(should_close);
    }

    fn swap_buffers(&mut self) {
        record(Call::SwapBuffers);
    }

    fn clear(&mut self, color: ClearColor) {
        record(Call::Clear(color));
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        (self.size.0 * 2, self.size.1 * 2)
    }

    fn drain_events(&mut self) -> Vec<WindowEvent> {
        self.shared.events.borrow_mut().drain(..).collect()
    }
}

impl Drop for MockSurface {
    fn drop(&mut self) {
        record(Call::DestroyWindow);
    }
}
