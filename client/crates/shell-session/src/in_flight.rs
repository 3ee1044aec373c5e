use tokio::sync::watch;

/// State that tracks overlapping operations with a counter.
pub(crate) trait LoadTracking {
    fn in_flight_mut(&mut self) -> &mut u32;

    fn set_loading(&mut self, loading: bool);

    fn set_error(&mut self, error: Option<String>);
}

/// Marks one operation as running for as long as it is alive.
///
/// Starting clears the previous error and raises `is_loading`. Finishing (or
/// dropping the future that owns the guard) lowers the counter, and
/// `is_loading` falls back to false once no operation is left.
pub(crate) struct InFlight<'a, S: LoadTracking> {
    state: &'a watch::Sender<S>,
    settled: bool,
}

impl<'a, S: LoadTracking> InFlight<'a, S> {
    pub(crate) fn begin(state: &'a watch::Sender<S>) -> Self {
        state.send_modify(|s| {
            *s.in_flight_mut() += 1;
            s.set_loading(true);
            s.set_error(None);
        });

        Self {
            state,
            settled: false,
        }
    }

    /// Apply the operation's outcome and settle in a single commit.
    pub(crate) fn finish(mut self, commit: impl FnOnce(&mut S)) {
        self.settled = true;
        self.state.send_modify(|s| {
            commit(s);
            settle(s);
        });
    }
}

impl<S: LoadTracking> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        if !self.settled {
            self.state.send_modify(settle);
        }
    }
}

fn settle<S: LoadTracking>(s: &mut S) {
    let in_flight = s.in_flight_mut();
    *in_flight = in_flight.saturating_sub(1);
    let still_loading = *in_flight > 0;
    s.set_loading(still_loading);
}
