//! ledpong firmware for the nRF52840.
//!
//! Task layout (single thread-mode executor):
//!
//! - `paddle_task` × 2 - GPIOTE rising edge → open that side's window,
//!   and raise the wake signal for standby
//! - `decay_task`      - fixed 1024 µs ticker → close windows; parked
//!   while the tracker is suspended
//! - `game_task`       - tempo ticker → advance ball, settle edges,
//!   then blink or sleep once the round is lost
//!
//! The LED board is shared behind an `embassy-sync` mutex; paddle
//! counters are atomics in the static [`PaddleTracker`].

#![no_std]
#![no_main]

use core::mem::MaybeUninit;
use core::ptr::{addr_of, addr_of_mut};

use defmt::{info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::{bind_interrupts, saadc};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Delay, Duration, Ticker, Timer};
use ledpong::config::{DECAY_PERIOD_US, DEFAULT_TEMPO_SAMPLE, SENSOR_TIMEOUT_MS};
use ledpong::hw::{blink, LedBoard, PinBuzzer, TempoSensor};
use ledpong::{
    derive_period, Error, Game, PaddleTracker, RoundEnd, SessionCounter, Side, TempoPeriod, Tick,
};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
});

type Board = LedBoard<Output<'static>>;
type SharedBoard = Mutex<CriticalSectionRawMutex, Board>;
type Buzzer = PinBuzzer<Output<'static>, Delay>;

static PADDLES: PaddleTracker = PaddleTracker::new();
static BOARD: StaticCell<SharedBoard> = StaticCell::new();

/// Raised by any paddle press; awaited while in standby.
static WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Raised once the game has resumed the paddle tracker.
static RESUMED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Round count kept across warm resets (not zeroed by the runtime).
#[link_section = ".uninit.ledpong"]
static mut RETAINED_ROUNDS: MaybeUninit<u32> = MaybeUninit::uninit();

fn load_session() -> SessionCounter {
    // SAFETY: read once from `main` before any task runs. Every bit
    // pattern is a valid u32 and `from_retained` rejects untagged words.
    let word = unsafe { core::ptr::read_volatile(addr_of!(RETAINED_ROUNDS).cast::<u32>()) };
    SessionCounter::from_retained(word)
}

fn store_session(session: SessionCounter) {
    // SAFETY: only the game task writes the word after startup.
    unsafe {
        core::ptr::write_volatile(
            addr_of_mut!(RETAINED_ROUNDS).cast::<u32>(),
            session.to_retained(),
        );
    }
}

/// Tempo potentiometer on the SAADC.
struct Knob {
    saadc: saadc::Saadc<'static, 1>,
}

impl TempoSensor for Knob {
    fn sample(&mut self) -> Result<u16, Error> {
        let mut buf = [0i16; 1];
        let conversion = embassy_futures::block_on(select(
            self.saadc.sample(&mut buf),
            Timer::after_millis(SENSOR_TIMEOUT_MS),
        ));
        match conversion {
            Either::First(()) => Ok(buf[0].clamp(0, 1023) as u16),
            Either::Second(()) => Err(Error::SensorTimeout),
        }
    }
}

#[embassy_executor::task(pool_size = 2)]
async fn paddle_task(mut button: Input<'static>, side: Side, board: &'static SharedBoard) -> ! {
    loop {
        button.wait_for_rising_edge().await;
        PADDLES.on_press_edge(side, &mut *board.lock().await);
        WAKE.signal(());
    }
}

#[embassy_executor::task]
async fn decay_task(board: &'static SharedBoard) -> ! {
    let mut ticker = Ticker::every(Duration::from_micros(DECAY_PERIOD_US));
    loop {
        ticker.next().await;
        if PADDLES.is_suspended() {
            // No timer wakeups while the round is over or in standby.
            RESUMED.wait().await;
            ticker.reset();
            continue;
        }
        PADDLES.decay(&mut *board.lock().await);
    }
}

#[embassy_executor::task]
async fn game_task(
    mut game: Game,
    mut buzzer: Buzzer,
    period: TempoPeriod,
    board: &'static SharedBoard,
) -> ! {
    game.start(&mut *board.lock().await);
    let mut ticker = Ticker::every(Duration::from_micros(period.as_micros()));

    loop {
        ticker.next().await;
        let tick = game.tick(&PADDLES, &mut *board.lock().await, &mut buzzer);

        match tick {
            Tick::RoundOver(RoundEnd::Blink(side)) => {
                store_session(game.session());
                info!("Winner {} - blinking until reset", side);
                let mut board = board.lock().await;
                loop {
                    blink(&mut *board, &mut Delay, side);
                }
            }
            Tick::RoundOver(RoundEnd::Standby) => {
                store_session(game.session());
                info!("Standby: waiting for any paddle");
                RESUMED.reset();
                WAKE.reset();
                WAKE.wait().await;
                game.wake(&PADDLES, &mut *board.lock().await);
                RESUMED.signal(());
                ticker.reset();
            }
            Tick::Advanced | Tick::Hit(_) | Tick::Halted => {}
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("ledpong starting");

    let led = |pin: AnyPin| Output::new(pin, Level::Low, OutputDrive::Standard);
    let track = [
        led(p.P0_13.into()),
        led(p.P0_14.into()),
        led(p.P0_15.into()),
        led(p.P0_16.into()),
        led(p.P0_03.into()),
        led(p.P0_04.into()),
        led(p.P0_28.into()),
        led(p.P0_29.into()),
    ];
    let board: &'static SharedBoard = BOARD.init(Mutex::new(LedBoard::new(
        track,
        led(p.P0_30.into()),
        led(p.P0_31.into()),
    )));
    let buzzer = PinBuzzer::new(led(p.P1_01.into()), Delay);

    let mut saadc_config = saadc::Config::default();
    saadc_config.resolution = saadc::Resolution::_10BIT;
    let saadc = saadc::Saadc::new(
        p.SAADC,
        Irqs,
        saadc_config,
        [saadc::ChannelConfig::single_ended(p.P0_02)],
    );
    saadc.calibrate().await;
    let mut knob = Knob { saadc };

    let period = match derive_period(&mut knob) {
        Ok(period) => period,
        Err(e) => {
            warn!("Tempo: {} - using default", e);
            TempoPeriod::from_sample(DEFAULT_TEMPO_SAMPLE)
        }
    };

    let session = load_session();
    info!("Session: {} rounds played", session.rounds());

    let left = Input::new(p.P0_11, Pull::Down);
    let right = Input::new(p.P0_12, Pull::Down);

    unwrap!(spawner.spawn(paddle_task(left, Side::Left, board)));
    unwrap!(spawner.spawn(paddle_task(right, Side::Right, board)));
    unwrap!(spawner.spawn(decay_task(board)));
    unwrap!(spawner.spawn(game_task(
        Game::new(session),
        buzzer,
        period,
        board
    )));
}
