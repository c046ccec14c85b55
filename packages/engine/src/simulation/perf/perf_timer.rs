//! Millisecond stopwatch: `js_sys::Date` in the browser, `Instant` natively.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[inline]
fn now() -> Stamp {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::Instant::now()
    }
}

#[inline]
fn ms_since(stamp: &Stamp) -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() - *stamp
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        stamp.elapsed().as_secs_f64() * 1000.0
    }
}

/// Total time since `start`, plus split times between `lap` calls.
pub(crate) struct PerfTimer {
    start: Stamp,
    last_lap: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start: now(), last_lap: now() }
    }

    /// Time since the previous lap (or start), then begin a new lap.
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let ms = ms_since(&self.last_lap);
        self.last_lap = now();
        ms
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        ms_since(&self.start)
    }
}
