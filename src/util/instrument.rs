#![cfg(test)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::construct::{ConstructError, TryClone, TryDefault};

thread_local! {
    static DEFAULT_LEDGER: RefCell<Option<Rc<Ledger>>> = const { RefCell::new(None) };
}

/// A shared tally of element-lifecycle events for [`Probe`], with arm-to-fail budgets for clone
/// and default construction.
#[derive(Debug, Default)]
pub struct Ledger {
    born: Cell<usize>,
    clones: Cell<usize>,
    defaults: Cell<usize>,
    drops: Cell<usize>,
    clone_budget: Cell<Option<usize>>,
    default_budget: Cell<Option<usize>>,
}

impl Ledger {
    pub fn new() -> Rc<Ledger> {
        Rc::new(Ledger::default())
    }

    /// Routes `Probe::try_default` on the current thread to this ledger. The test harness runs
    /// every test on its own thread, so adoption can't leak across tests.
    pub fn adopt_defaults(ledger: &Rc<Ledger>) {
        DEFAULT_LEDGER.with_borrow_mut(|current| *current = Some(Rc::clone(ledger)));
    }

    /// Allows `budget` more successful clones, after which every `try_clone` fails.
    pub fn fail_clones_after(&self, budget: usize) {
        self.clone_budget.set(Some(budget));
    }

    /// Allows `budget` more successful default constructions, after which every `try_default`
    /// fails.
    pub fn fail_defaults_after(&self, budget: usize) {
        self.default_budget.set(Some(budget));
    }

    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    pub fn defaults(&self) -> usize {
        self.defaults.get()
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }

    /// Values constructed and not yet destroyed. Zero once everything is torn down; anything
    /// else means a leak or a double drop.
    pub fn live(&self) -> usize {
        self.born.get() - self.drops.get()
    }

    fn register_birth(&self) {
        self.born.set(self.born.get() + 1);
    }

    fn spend(budget: &Cell<Option<usize>>) -> bool {
        match budget.get() {
            Some(0) => false,
            Some(left) => {
                budget.set(Some(left - 1));
                true
            }
            None => true,
        }
    }
}

/// An instrumented element: every construction, clone, default and drop is recorded on its
/// [`Ledger`], and the relocation policy is chosen by the const parameter so both transfer paths
/// can be exercised. The default `Probe` relocates by clone, which is the interesting case.
#[derive(Debug)]
pub struct Probe<const MOVE_RELOC: bool = false> {
    ledger: Rc<Ledger>,
    pub tag: usize,
}

impl<const MOVE_RELOC: bool> Probe<MOVE_RELOC> {
    pub fn new(ledger: &Rc<Ledger>, tag: usize) -> Probe<MOVE_RELOC> {
        ledger.register_birth();
        Probe {
            ledger: Rc::clone(ledger),
            tag,
        }
    }
}

impl<const MOVE_RELOC: bool> TryClone for Probe<MOVE_RELOC> {
    const MOVE_ON_RELOCATE: bool = MOVE_RELOC;

    fn try_clone(&self) -> Result<Self, ConstructError> {
        if !Ledger::spend(&self.ledger.clone_budget) {
            return Err(ConstructError::new("clone budget exhausted"));
        }

        self.ledger.clones.set(self.ledger.clones.get() + 1);
        Ok(Probe::new(&self.ledger, self.tag))
    }
}

impl<const MOVE_RELOC: bool> TryDefault for Probe<MOVE_RELOC> {
    fn try_default() -> Result<Self, ConstructError> {
        let ledger = DEFAULT_LEDGER
            .with_borrow(|current| current.clone())
            .expect("no ledger adopted for default construction");

        if !Ledger::spend(&ledger.default_budget) {
            return Err(ConstructError::new("default budget exhausted"));
        }

        ledger.defaults.set(ledger.defaults.get() + 1);
        Ok(Probe::new(&ledger, 0))
    }
}

impl<const MOVE_RELOC: bool> Drop for Probe<MOVE_RELOC> {
    fn drop(&mut self) {
        self.ledger.drops.set(self.ledger.drops.get() + 1);
    }
}

/// A zero-sized element for checking that the containers never allocate for one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSizedType;

impl TryClone for ZeroSizedType {
    fn try_clone(&self) -> Result<Self, ConstructError> {
        Ok(ZeroSizedType)
    }
}

impl TryDefault for ZeroSizedType {
    fn try_default() -> Result<Self, ConstructError> {
        Ok(ZeroSizedType)
    }
}
