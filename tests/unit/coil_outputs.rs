//! Exact coil writes, checked against embedded-hal pin mocks.

use coil_stepper::{Coils, Micros, MotorControl, TimerDispatcher, SEQUENCE};
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction as PinTransaction};

use super::sim::{SimClock, SimTimer};

fn level(high: bool) -> PinTransaction {
    PinTransaction::set(if high { State::High } else { State::Low })
}

/// Expected writes on coil input `pin` (0..4): low on attach, released while
/// idle, one full forward walk, released again.
fn expected_writes(pin: usize) -> Vec<PinTransaction> {
    let mut writes = vec![level(false), level(false)];
    writes.extend(SEQUENCE.iter().map(|p| level(p.levels()[pin])));
    writes.push(level(false));
    writes
}

#[test]
fn test_power_saver_step_then_release() {
    let clock = SimClock::starting_at(0);
    let control = MotorControl::new();
    let coils = Coils::new(
        PinMock::new(&expected_writes(0)),
        PinMock::new(&expected_writes(1)),
        PinMock::new(&expected_writes(2)),
        PinMock::new(&expected_writes(3)),
    );

    let mut dispatcher = TimerDispatcher::new(SimTimer::default(), &clock);
    control.power_saver_mode(true);
    control.set_speed(Micros(0));
    assert!(dispatcher.attach(&control, 200.0, coils).is_registered());

    // Idle: released
    dispatcher.on_tick();

    // Zero phase delay walks the whole table in one tick
    control.request_steps(1);
    dispatcher.on_tick();
    assert!(!control.is_moving());

    // Idle again: released
    dispatcher.on_tick();

    let coils = dispatcher.detach(&control).expect("motor was attached");
    let (mut in1, mut in2, mut in3, mut in4) = coils.into_pins();
    in1.done();
    in2.done();
    in3.done();
    in4.done();
}

#[test]
fn test_holding_mode_writes_only_on_attach() {
    let clock = SimClock::starting_at(0);
    let control = MotorControl::new();
    // Driven low once on attach, then left alone
    let attach = [level(false)];
    let coils = Coils::new(
        PinMock::new(&attach),
        PinMock::new(&attach),
        PinMock::new(&attach),
        PinMock::new(&attach),
    );

    let mut dispatcher = TimerDispatcher::new(SimTimer::default(), &clock);
    dispatcher.attach(&control, 200.0, coils);
    for _ in 0..10 {
        dispatcher.on_tick();
        clock.advance(1000);
    }

    let (mut in1, mut in2, mut in3, mut in4) = dispatcher
        .detach(&control)
        .expect("motor was attached")
        .into_pins();
    in1.done();
    in2.done();
    in3.done();
    in4.done();
}
