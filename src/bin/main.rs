#![no_std]
#![no_main]

use embedded_hal::delay::DelayNs;
use esp_hal::{
    clock::CpuClock,
    delay::Delay,
    gpio::{Level, Output, OutputConfig},
};
use glyphwheel::{ACTIVE_FONT, TICK_MS};
use glyphwheel_core::GlyphSequencer;
use log::{LevelFilter, info, warn};
use max7219::{Config as MatrixConfig, Max7219};

const MATRIX_INTENSITY: u8 = 0x0A;

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger(LevelFilter::Info);
    esp_println::println!("boot: glyphwheel starting");

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Wiring used by this board:
    // DIN=GPIO14, CLK=GPIO13, CS=GPIO15
    let din = Output::new(peripherals.GPIO14, Level::Low, OutputConfig::default());
    let clk = Output::new(peripherals.GPIO13, Level::Low, OutputConfig::default());
    let cs = Output::new(peripherals.GPIO15, Level::High, OutputConfig::default());

    let mut delay = Delay::new();

    let mut matrix = Max7219::new(
        din,
        clk,
        cs,
        MatrixConfig {
            intensity: MATRIX_INTENSITY,
        },
    );
    if let Err(err) = matrix.initialize() {
        // The bus has no feedback channel; log and keep going.
        warn!("matrix initialize failed: {:?}", err);
    }
    info!("matrix: init done, cycling {} glyphs", ACTIVE_FONT.len());

    let mut sequencer = GlyphSequencer::new(ACTIVE_FONT);
    let mut render_fault_logged = false;

    loop {
        let glyph = sequencer.tick();
        if let Err(err) = matrix.render_rows(&glyph) {
            if !render_fault_logged {
                warn!("matrix render failed: {:?}", err);
                render_fault_logged = true;
            }
        }

        delay.delay_ms(TICK_MS);
    }
}
