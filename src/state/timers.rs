// Pending delays owned by a game panel
use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;

/// Holds the timeouts a panel has armed. Dropping or cancelling the bag
/// stops every callback that has not fired yet.
#[derive(Default)]
pub struct TimerBag {
    next_id: u64,
    pending: Vec<(u64, Timeout)>,
    /// Ids whose callback has returned; their handles are dropped on the
    /// next `schedule`.
    fired: Rc<RefCell<Vec<u64>>>,
}

impl TimerBag {
    pub fn schedule<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        prune(&mut self.pending, &mut self.fired.borrow_mut());
        let id = self.next_id;
        self.next_id += 1;
        let fired = self.fired.clone();
        // marked after the callback so a timer re-arming from inside its own
        // callback never drops the running handle
        let timeout = Timeout::new(delay_ms, move || {
            callback();
            fired.borrow_mut().push(id);
        });
        self.pending.push((id, timeout));
    }

    /// Handles still held, fired or not.
    pub fn armed(&self) -> usize {
        self.pending.len()
    }

    /// Dropping a `Timeout` clears it.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
        self.fired.borrow_mut().clear();
    }
}

fn prune<T>(pending: &mut Vec<(u64, T)>, fired: &mut Vec<u64>) {
    if fired.is_empty() {
        return;
    }
    pending.retain(|(id, _)| !fired.contains(id));
    fired.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fired_handles_are_pruned() {
        let mut pending: Vec<(u64, &str)> = vec![(0, "a"), (1, "b"), (2, "c")];
        let mut fired = vec![0, 2];
        prune(&mut pending, &mut fired);
        assert_eq!(pending, vec![(1, "b")]);
        assert!(fired.is_empty());
    }

    #[test]
    fn nothing_fired_keeps_everything() {
        let mut pending: Vec<(u64, ())> = vec![(4, ()), (5, ())];
        let mut fired = Vec::new();
        prune(&mut pending, &mut fired);
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn bounded_over_a_long_game() {
        // a 15-player game arms three settles and one pause per turn
        let mut pending: Vec<(u64, ())> = Vec::new();
        let mut fired = Vec::new();
        let mut next = 0u64;
        for _ in 0..15 {
            prune(&mut pending, &mut fired);
            for _ in 0..4 {
                pending.push((next, ()));
                fired.push(next);
                next += 1;
            }
        }
        prune(&mut pending, &mut fired);
        assert!(pending.is_empty());
    }
}
