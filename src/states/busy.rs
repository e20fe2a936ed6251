use std::cell::Cell;
use std::rc::Rc;

/// Shared "a save is running" flag. The save button reads it to decide
/// whether it is enabled; the save path holds a [`BusyGuard`] while it runs.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Rc<Cell<bool>>);

impl BusyFlag {
    pub fn get(&self) -> bool {
        self.0.get()
    }

    /// Mark busy until the returned guard is dropped. Returns `None` when the
    /// flag is already held, so a second save cannot start on top of one
    /// that is still in progress.
    #[must_use = "dropping the guard clears the busy flag"]
    pub fn acquire(&self) -> Option<BusyGuard> {
        if self.0.replace(true) {
            return None;
        }
        Some(BusyGuard {
            flag: Rc::clone(&self.0),
        })
    }
}

/// RAII guard for [`BusyFlag::acquire`].
#[must_use = "dropping the guard clears the busy flag"]
pub struct BusyGuard {
    flag: Rc<Cell<bool>>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
