//! In-memory chart host, surface and resize source that record every call.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::options::{CandlestickStyle, ChartOptions};
use super::resize::{ListenerId, ResizeCallback, ResizeSource};
use super::series::OhlcRecord;
use super::surface::{ChartError, ChartHost, DrawingSurface, SeriesId};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear,
    Create { surface: usize, height: u32 },
    AddSeries { surface: usize },
    SetData { surface: usize, times: Vec<String> },
    Fit { surface: usize },
    Width { surface: usize, width: u32 },
    Remove { surface: usize },
    Listen,
    Unlisten,
}

pub type Journal = Rc<RefCell<Vec<Call>>>;

#[derive(Clone, Default)]
pub struct FakeHost {
    pub journal: Journal,
    pub width: Rc<Cell<u32>>,
    pub next_surface: Rc<Cell<usize>>,
    pub fail_create: bool,
    pub fail_load: bool,
    /// surface id -> (data, removed)
    pub surfaces: Rc<RefCell<BTreeMap<usize, (Vec<OhlcRecord>, bool)>>>,
}

impl FakeHost {
    pub fn calls(&self) -> Vec<Call> {
        self.journal.borrow().clone()
    }

    /// Data of every surface still alive
    pub fn live(&self) -> Vec<Vec<OhlcRecord>> {
        self.surfaces
            .borrow()
            .values()
            .filter(|(_, removed)| !removed)
            .map(|(data, _)| data.clone())
            .collect()
    }
}

pub struct FakeSurface {
    id: usize,
    host: FakeHost,
}

impl DrawingSurface for FakeSurface {
    fn add_candlestick_series(&mut self, _style: CandlestickStyle) -> SeriesId {
        self.host.journal.borrow_mut().push(Call::AddSeries { surface: self.id });
        SeriesId(0)
    }

    fn set_series_data(&mut self, series: SeriesId, data: &[OhlcRecord]) -> Result<(), ChartError> {
        if self.host.fail_load {
            return Err(ChartError::UnknownSeries(series));
        }
        self.host.journal.borrow_mut().push(Call::SetData {
            surface: self.id,
            times: data.iter().map(|r| r.time.clone()).collect(),
        });
        if let Some(entry) = self.host.surfaces.borrow_mut().get_mut(&self.id) {
            entry.0 = data.to_vec();
        }
        Ok(())
    }

    fn fit_content(&mut self) {
        self.host.journal.borrow_mut().push(Call::Fit { surface: self.id });
    }

    fn apply_width(&mut self, width: u32) {
        self.host.journal.borrow_mut().push(Call::Width { surface: self.id, width });
    }

    fn remove(&mut self) {
        self.host.journal.borrow_mut().push(Call::Remove { surface: self.id });
        if let Some(entry) = self.host.surfaces.borrow_mut().get_mut(&self.id) {
            entry.1 = true;
        }
    }
}

impl ChartHost for FakeHost {
    type Surface = FakeSurface;

    fn clear(&self) {
        self.journal.borrow_mut().push(Call::Clear);
    }

    fn client_width(&self) -> u32 {
        self.width.get()
    }

    fn create_surface(&self, options: &ChartOptions) -> Result<FakeSurface, ChartError> {
        if self.fail_create {
            return Err(ChartError::Surface("no 2d context".into()));
        }
        let id = self.next_surface.get();
        self.next_surface.set(id + 1);
        self.journal.borrow_mut().push(Call::Create {
            surface: id,
            height: options.height,
        });
        self.surfaces.borrow_mut().insert(id, (Vec::new(), false));
        Ok(FakeSurface {
            id,
            host: self.clone(),
        })
    }
}

#[derive(Clone)]
pub struct FakeResize {
    journal: Journal,
    next: Rc<Cell<u64>>,
    listeners: Rc<RefCell<HashMap<ListenerId, ResizeCallback>>>,
}

impl FakeResize {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            next: Rc::default(),
            listeners: Rc::default(),
        }
    }

    pub fn fire(&self) {
        for callback in self.listeners.borrow_mut().values_mut() {
            callback();
        }
    }

    pub fn count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ResizeSource for FakeResize {
    fn subscribe(&self, callback: ResizeCallback) -> Result<ListenerId, ChartError> {
        let id = ListenerId(self.next.get());
        self.next.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, callback);
        self.journal.borrow_mut().push(Call::Listen);
        Ok(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        if self.listeners.borrow_mut().remove(&id).is_some() {
            self.journal.borrow_mut().push(Call::Unlisten);
        }
    }
}
