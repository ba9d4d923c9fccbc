//! Four-mode LED panel firmware.
//!
//! CYCLE steps Off → All on → Blink → Fade; RESET returns to Off.
//! Three LEDs on LEDC PWM, mode name on the SSD1306.

#![no_std]
#![no_main]

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_time::Instant;
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;

use ledpanel::config::{
    BTN_CYCLE_PIN, BTN_RESET_PIN, I2C_FREQUENCY_KHZ, PWM_FREQUENCY_KHZ,
};
use ledpanel::control::BlinkPattern;
use ledpanel::error::{halt, Error};
use ledpanel::input::{InputSource, Level};
use ledpanel::output::LedBank;
use ledpanel::ui::buttons::ButtonPins;
use ledpanel::ui::display;
use ledpanel::ModePanel;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    info!("=== ledpanel: mode panel ===");

    // Display first: no display, no device.
    let i2c = match I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    ) {
        Ok(i2c) => i2c
            .with_sda(peripherals.GPIO21)
            .with_scl(peripherals.GPIO22),
        Err(_) => {
            error!("I2C config rejected");
            halt();
        }
    };
    let mut oled = match display::init(i2c) {
        Ok(oled) => oled,
        Err(e) => {
            error!("Display init failed: {}", e);
            halt();
        }
    };

    // LEDs: yellow GPIO18, green GPIO17, red GPIO16 on one 5 kHz / 8-bit timer.
    let mut ledc = Ledc::new(peripherals.LEDC);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let mut lstimer0 = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    if lstimer0
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty8Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(PWM_FREQUENCY_KHZ),
        })
        .is_err()
    {
        error!("LEDC timer config failed: {}", Error::Pwm);
        halt();
    }

    let mut yellow = ledc.channel(channel::Number::Channel0, peripherals.GPIO18);
    let mut green = ledc.channel(channel::Number::Channel1, peripherals.GPIO17);
    let mut red = ledc.channel(channel::Number::Channel2, peripherals.GPIO16);
    for ch in [&mut yellow, &mut green, &mut red] {
        if ch
            .configure(channel::config::Config {
                timer: &lstimer0,
                duty_pct: 0,
                pin_config: channel::config::PinConfig::PushPull,
            })
            .is_err()
        {
            error!("LEDC channel config failed: {}", Error::Pwm);
            halt();
        }
    }
    let mut leds = LedBank::new([yellow, green, red]);

    // Buttons: active-low with internal pull-up.
    let input_config = InputConfig::default().with_pull(Pull::Up);
    let mut buttons = ButtonPins::new([
        (BTN_CYCLE_PIN, Input::new(peripherals.GPIO25, input_config)),
        (BTN_RESET_PIN, Input::new(peripherals.GPIO26, input_config)),
    ]);

    let cycle_level = buttons.read_digital(BTN_CYCLE_PIN).unwrap_or(Level::High);
    let reset_level = buttons.read_digital(BTN_RESET_PIN).unwrap_or(Level::High);
    let mut panel = ModePanel::new(BlinkPattern::ALTERNATE, cycle_level, reset_level);

    info!("Buttons: CYCLE=GPIO25 RESET=GPIO26 (active-low)");

    loop {
        let now = Instant::now().as_millis();
        match panel.step(now, &mut buttons, &mut leds, &mut oled) {
            Ok(frame) if frame.mode_changed() => info!("Mode: {}", frame.mode),
            Ok(_) => {}
            Err(e) => warn!("Tick failed: {}", e),
        }
        yield_now().await;
    }
}
