#![no_std]
#![no_main]

use core::cell::Cell;

use cortex_m::interrupt::{self, Mutex};
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::{entry, exception};
use millis_timer::{Clock, Timer, TimerSettings};
use panic_halt as _;

// Core clock assumed by the SysTick reload value (8 MHz HSI)
const CORE_HZ: u32 = 8_000_000;

// Millisecond counter advanced by SysTick, wraps after ~49.7 days
static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

#[exception]
fn SysTick() {
    interrupt::free(|cs| {
        let millis = MILLIS.borrow(cs);
        millis.set(millis.get().wrapping_add(1));
    });
}

// Clock reading the SysTick counter
struct SysTickClock;

impl Clock for SysTickClock {
    fn millis(&self) -> u32 {
        interrupt::free(|cs| MILLIS.borrow(cs).get())
    }
}

// Timers are configured as data
const BLINK: TimerSettings = TimerSettings::hertz(2).started();
const SAMPLE: TimerSettings = TimerSettings::timeout(150).started();
const FADE: TimerSettings = TimerSettings::timeout(2_000);

// Entry point
#[entry]
fn main() -> ! {
    let mut core = cortex_m::Peripherals::take().unwrap();
    core.SYST.set_clock_source(SystClkSource::Core);
    core.SYST.set_reload(CORE_HZ / 1_000 - 1);
    core.SYST.clear_current();
    core.SYST.enable_counter();
    core.SYST.enable_interrupt();

    let clock = SysTickClock;
    let mut blink = Timer::from_settings(&clock, &BLINK);
    let mut sample = Timer::from_settings(&clock, &SAMPLE);
    let mut fade = Timer::from_settings(&clock, &FADE);

    // Control loop: every timer is polled, nothing blocks
    loop {
        if blink.on_restart() {
            fade.restart();
        }

        if sample.on_restart() {
            core::hint::black_box(sample.value());
        }

        if fade.is_active() {
            core::hint::black_box(fade.percent_value());
        }

        if fade.on_expired() {
            fade.stop();
        }

        core::hint::black_box(&blink);
        cortex_m::asm::nop();
    }
}

// Required: exception handler
#[exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
