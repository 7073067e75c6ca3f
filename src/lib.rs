//! NRZ ISI NIF for MinuteModem
//!
//! Teaching core for the RC channel demo: random bits are NRZ-modulated,
//! passed through a first-order RC low-pass (convolution with its impulse
//! response) and normalized for plotting. Raising the time constant smears
//! neighbouring bits together, which the eye metrics quantify.
//!
//! Bit Source → NRZ Modulator → Convolution ← Channel Model

pub mod bits;
pub mod channel;
pub mod config;
pub mod convolve;
pub mod error;
pub mod eye;
pub mod nrz;
pub mod scenario;
pub mod slab;
mod nif;

pub use bits::{generate_bits, generate_bits_seeded};
pub use channel::{impulse_response, ChannelResponse, ImpulseResponse, RcLowPass};
pub use config::{ScenarioParams, TAU_MAX, TAU_MIN};
pub use convolve::{convolution_times, convolve, convolve_and_normalize, extend_times, normalize_peak};
pub use error::{Error, Result};
pub use eye::{eye_opening, EyeOpening};
pub use nrz::{modulate_nrz, time_grid};
pub use scenario::{Render, Scenario};

rustler::init!("Elixir.NrzIsi.Native");
