//! Metron measurement instrument firmware
//!
//! Firmware for the STM32F051 board: measures the frequency of one of two
//! selectable input lines by edge timing, tracks the front-panel
//! potentiometer through the ADC and mirrors it on the DAC, and shows both
//! readings on the SPI OLED.
//!
//! Wiring:
//! - PA0: line-select button (EXTI0)
//! - PA1: 555 pulse input (EXTI1)
//! - PA2: function generator input (EXTI2)
//! - PA5: potentiometer wiper (ADC in), PA4: DAC out
//! - PB3/PB5: SPI1 SCK/MOSI, PB4: display reset, PB6: CS, PB7: D/C

#![no_std]
#![no_main]

mod hw;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::adc::{self, Adc, AdcChannel};
use embassy_stm32::bind_interrupts;
use embassy_stm32::dac::DacCh1;
use embassy_stm32::exti::{self, ExtiInput};
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::peripherals::ADC1;
use embassy_stm32::spi::{self, Spi};
use embassy_stm32::time::Hertz;
use {defmt_rtt as _, panic_probe as _};

use crate::hw::{ControlPin, OledBus};
use crate::tasks::{analog_task, button_task, capture_task, display_task};
use metron_display::{Renderer, Transport};

bind_interrupts!(struct Irqs {
    ADC1_COMP => adc::InterruptHandler<ADC1>;
    EXTI0_1 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI0_1>;
    EXTI2_3 => exti::InterruptHandler<embassy_stm32::interrupt::typelevel::EXTI2_3>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Metron firmware starting...");

    let p = embassy_stm32::init(Default::default());

    // Input lines and line-select button
    let button = ExtiInput::new(p.PA0, p.EXTI0, Pull::Down, Irqs);
    let pulse = ExtiInput::new(p.PA1, p.EXTI1, Pull::None, Irqs);
    let funcgen = ExtiInput::new(p.PA2, p.EXTI2, Pull::None, Irqs);

    // Potentiometer in, mirror out
    let adc = Adc::new(p.ADC1, Irqs);
    let pot = p.PA5.degrade_adc();
    let dac = DacCh1::new_blocking(p.DAC1, p.PA4);

    // OLED over bit-serial SPI, CS and D/C driven as plain outputs
    let mut spi_config = spi::Config::default();
    spi_config.frequency = Hertz(1_000_000);
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PB3, p.PB5, spi_config);

    let reset = Output::new(p.PB4, Level::High, Speed::Low);
    let cs = Output::new(p.PB6, Level::High, Speed::VeryHigh);
    let dc = Output::new(p.PB7, Level::Low, Speed::VeryHigh);

    let renderer = Renderer::new(Transport::new(
        OledBus::new(spi),
        ControlPin::new(cs),
        ControlPin::new(dc),
    ));

    // Spawn tasks
    spawner.spawn(capture_task(pulse, funcgen)).unwrap();
    spawner.spawn(button_task(button)).unwrap();
    spawner.spawn(analog_task(adc, pot, dac)).unwrap();
    spawner.spawn(display_task(reset, renderer)).unwrap();

    info!("All tasks spawned");
}
