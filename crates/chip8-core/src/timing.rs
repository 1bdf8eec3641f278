//! Timer cadence: the fixed-rate countdown tick.

use crate::api::Machine;

/// Fixed rate at which the external pacing collaborator invokes [`tick`].
pub const TIMER_RATE_HZ: u32 = 60;

/// Default instruction steps per timer tick (600 Hz execution over a 60 Hz
/// tick), the historic pacing a driver can hand to the batched runner.
pub const DEFAULT_STEPS_PER_TICK: u32 = 10;

/// Decrements both countdown timers once, each floored at zero.
///
/// The engine never calls this itself; the pacing collaborator invokes it
/// once per fixed time quantum, independently of instruction rate. Whether
/// a tone is audible while the sound timer runs is the audio collaborator's
/// decision, read via [`Machine::sound_active`].
pub const fn tick(machine: &mut Machine) {
    let delay = machine.regs.delay();
    if delay > 0 {
        machine.regs.set_delay(delay - 1);
    }

    let sound = machine.regs.sound();
    if sound > 0 {
        machine.regs.set_sound(sound - 1);
    }
}
