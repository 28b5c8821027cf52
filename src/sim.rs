//! Simulated delivery countdown + drone telemetry.
//!
//! One session per tracking screen. The whole session state is a pure
//! function of elapsed whole seconds since `start`: oscillating channels
//! are `base + swing * sin(t / period)` and monotone channels are
//! linear-clamped in the same `t`, so a delayed tick shifts everything
//! uniformly instead of letting channels drift apart. `tick()` becomes a
//! no-op once the session is delivered; the hosting screen drops its
//! `Interval` handle at that point.

/// Standard order flight time: 8 minutes.
pub const STANDARD_FLIGHT_SECS: u32 = 480;
/// Emergency (SOS) flight time: 7 minutes, priority routing.
pub const EMERGENCY_FLIGHT_SECS: u32 = 420;

const BATTERY_START_PCT: f64 = 95.0;
const BATTERY_FLOOR_PCT: f64 = 85.0;
const BATTERY_DRAIN_PCT_PER_SEC: f64 = 0.1;

const ALTITUDE_BASE_M: f64 = 120.0;
const ALTITUDE_SWING_M: f64 = 20.0;
const ALTITUDE_PERIOD_SECS: f64 = 1.0;

const SPEED_BASE_KPH: f64 = 45.0;
const SPEED_SWING_KPH: f64 = 5.0;
const SPEED_PERIOD_SECS: f64 = 0.5;

const ROUTE_DISTANCE_KM: f64 = 2.3;
const APPROACH_KM_PER_SEC: f64 = 0.005;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionKind {
    /// Regular order delivery; models the full telemetry set.
    Standard,
    /// SOS dispatch; shorter flight, battery is not modelled.
    Emergency,
}

impl SessionKind {
    pub fn flight_secs(self) -> u32 {
        match self {
            SessionKind::Standard => STANDARD_FLIGHT_SECS,
            SessionKind::Emergency => EMERGENCY_FLIGHT_SECS,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    InFlight,
    Delivered,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Telemetry {
    /// `None` for emergency sessions (battery not modelled there).
    pub battery_percent: Option<f64>,
    pub altitude_m: f64,
    pub speed_kph: f64,
    pub distance_km: f64,
}

impl Telemetry {
    fn sample(kind: SessionKind, elapsed_secs: u32) -> Self {
        let t = f64::from(elapsed_secs);
        let battery_percent = match kind {
            SessionKind::Standard => {
                Some((BATTERY_START_PCT - BATTERY_DRAIN_PCT_PER_SEC * t).max(BATTERY_FLOOR_PCT))
            }
            SessionKind::Emergency => None,
        };
        Self {
            battery_percent,
            altitude_m: ALTITUDE_BASE_M + ALTITUDE_SWING_M * (t / ALTITUDE_PERIOD_SECS).sin(),
            speed_kph: SPEED_BASE_KPH + SPEED_SWING_KPH * (t / SPEED_PERIOD_SECS).sin(),
            distance_km: (ROUTE_DISTANCE_KM - APPROACH_KM_PER_SEC * t).max(0.0),
        }
    }
}

/// One simulated delivery: a countdown from the kind's flight time to 0,
/// with telemetry derived from how long the drone has been flying.
#[derive(Clone, PartialEq, Debug)]
pub struct DeliverySession {
    kind: SessionKind,
    initial_secs: u32,
    elapsed_secs: u32,
    phase: Phase,
}

impl DeliverySession {
    pub fn start(kind: SessionKind) -> Self {
        Self::with_duration(kind, kind.flight_secs())
    }

    /// A zero-length session is born delivered; everything else starts
    /// in flight.
    pub fn with_duration(kind: SessionKind, initial_secs: u32) -> Self {
        Self {
            kind,
            initial_secs,
            elapsed_secs: 0,
            phase: if initial_secs == 0 { Phase::Delivered } else { Phase::InFlight },
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_delivered(&self) -> bool {
        self.phase == Phase::Delivered
    }

    pub fn remaining_secs(&self) -> u32 {
        self.initial_secs - self.elapsed_secs
    }

    /// Advance the session by one second. Ignored once delivered, so a
    /// straggler tick can never push the countdown negative or move the
    /// telemetry after arrival.
    pub fn tick(&mut self) {
        if self.phase == Phase::Delivered {
            return;
        }
        self.elapsed_secs += 1;
        if self.elapsed_secs >= self.initial_secs {
            self.elapsed_secs = self.initial_secs;
            self.phase = Phase::Delivered;
        }
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry::sample(self.kind, self.elapsed_secs)
    }
}

/// "m:ss" countdown display, e.g. 480 → "8:00".
pub fn fmt_mmss(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_session_delivers_after_480_ticks() {
        let mut s = DeliverySession::start(SessionKind::Standard);
        assert_eq!(s.remaining_secs(), 480);
        assert_eq!(s.phase(), Phase::InFlight);

        for _ in 0..479 {
            s.tick();
            assert_eq!(s.phase(), Phase::InFlight);
        }
        assert_eq!(s.remaining_secs(), 1);

        s.tick();
        assert_eq!(s.remaining_secs(), 0);
        assert_eq!(s.phase(), Phase::Delivered);
    }

    #[test]
    fn ticks_after_delivery_change_nothing() {
        let mut s = DeliverySession::with_duration(SessionKind::Standard, 3);
        for _ in 0..3 {
            s.tick();
        }
        let frozen = s.clone();
        for _ in 0..10 {
            s.tick();
        }
        assert_eq!(s, frozen);
        assert_eq!(s.remaining_secs(), 0);
    }

    #[test]
    fn remaining_never_negative() {
        let mut s = DeliverySession::with_duration(SessionKind::Emergency, 5);
        for _ in 0..20 {
            // u32 return type makes negative impossible; this checks the
            // subtraction can't underflow either.
            let _ = s.remaining_secs();
            s.tick();
        }
        assert_eq!(s.remaining_secs(), 0);
    }

    #[test]
    fn battery_floors_at_85_over_a_full_standard_flight() {
        let mut s = DeliverySession::start(SessionKind::Standard);
        let mut min_seen = f64::MAX;
        while !s.is_delivered() {
            s.tick();
            let battery = s.telemetry().battery_percent.expect("standard models battery");
            assert!(battery >= BATTERY_FLOOR_PCT);
            min_seen = min_seen.min(battery);
        }
        // 95 - 0.1/s hits the floor after 100 s of a 480 s flight.
        assert_eq!(min_seen, BATTERY_FLOOR_PCT);
    }

    #[test]
    fn distance_is_non_negative_and_non_increasing() {
        let mut s = DeliverySession::start(SessionKind::Standard);
        let mut prev = s.telemetry().distance_km;
        while !s.is_delivered() {
            s.tick();
            let d = s.telemetry().distance_km;
            assert!(d >= 0.0);
            assert!(d <= prev);
            prev = d;
        }
    }

    #[test]
    fn altitude_and_speed_stay_within_their_swings() {
        let mut s = DeliverySession::start(SessionKind::Emergency);
        while !s.is_delivered() {
            s.tick();
            let t = s.telemetry();
            assert!((ALTITUDE_BASE_M - ALTITUDE_SWING_M..=ALTITUDE_BASE_M + ALTITUDE_SWING_M)
                .contains(&t.altitude_m));
            assert!((SPEED_BASE_KPH - SPEED_SWING_KPH..=SPEED_BASE_KPH + SPEED_SWING_KPH)
                .contains(&t.speed_kph));
        }
    }

    #[test]
    fn emergency_session_has_no_battery_and_runs_420() {
        let mut s = DeliverySession::start(SessionKind::Emergency);
        assert_eq!(s.remaining_secs(), 420);
        assert_eq!(s.telemetry().battery_percent, None);
        for _ in 0..420 {
            s.tick();
        }
        assert!(s.is_delivered());
    }

    #[test]
    fn fresh_session_resets_telemetry() {
        let mut old = DeliverySession::start(SessionKind::Standard);
        for _ in 0..200 {
            old.tick();
        }
        assert!(old.telemetry().distance_km < ROUTE_DISTANCE_KM);

        // Discard-on-restart: a new session starts from the initial values
        // regardless of what the old one reached.
        let fresh = DeliverySession::start(SessionKind::Standard);
        assert_eq!(fresh.remaining_secs(), 480);
        let t = fresh.telemetry();
        assert_eq!(t.battery_percent, Some(BATTERY_START_PCT));
        assert_eq!(t.distance_km, ROUTE_DISTANCE_KM);
        assert_eq!(t.altitude_m, ALTITUDE_BASE_M);
    }

    #[test]
    fn zero_length_session_is_born_delivered() {
        let s = DeliverySession::with_duration(SessionKind::Standard, 0);
        assert!(s.is_delivered());
        assert_eq!(s.remaining_secs(), 0);
    }

    #[test]
    fn remaining_changes_on_every_in_flight_tick() {
        // The tracking screens publish remaining_secs as their per-tick
        // render marker, so it must take a fresh value on every in-flight
        // tick (an equality-gated setter would otherwise stop rendering).
        let mut s = DeliverySession::start(SessionKind::Standard);
        let mut prev = s.remaining_secs();
        while !s.is_delivered() {
            s.tick();
            let now = s.remaining_secs();
            assert_eq!(now, prev - 1);
            prev = now;
        }
    }

    #[test]
    fn mmss_formatting() {
        assert_eq!(fmt_mmss(480), "8:00");
        assert_eq!(fmt_mmss(419), "6:59");
        assert_eq!(fmt_mmss(61), "1:01");
        assert_eq!(fmt_mmss(9), "0:09");
        assert_eq!(fmt_mmss(0), "0:00");
    }
}
