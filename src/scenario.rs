//! ISI scenario
//!
//! Bits, time grid and NRZ signal are built once and never change.
//! Every slider move calls [`Scenario::render`] with a new τ, which
//! re-runs the channel and convolution stages against those inputs.
//! Impulse responses are memoized per τ since the slider often revisits
//! the same values.

use std::collections::VecDeque;

use rustler::NifStruct;
use tracing::debug;

use crate::bits::{generate_bits, generate_bits_seeded};
use crate::channel::{ChannelResponse, ImpulseResponse, RcLowPass};
use crate::config::ScenarioParams;
use crate::convolve::{convolve_and_normalize, extend_times};
use crate::error::Result;
use crate::eye::eye_opening;
use crate::nrz::{check_samples_per_bit, modulate_nrz, time_grid};

/// Number of impulse responses kept per scenario
pub const RESPONSE_CACHE_CAPACITY: usize = 32;

/// One frame for the plotter
#[derive(NifStruct, Debug, Clone, PartialEq)]
#[module = "NrzIsi.Types.Render"]
pub struct Render {
    pub tau: f64,
    /// X-axis of the NRZ signal and the impulse response
    pub times: Vec<f64>,
    pub nrz: Vec<f64>,
    pub response: Vec<f64>,
    /// Peak-normalized channel output
    pub filtered: Vec<f64>,
    /// X-axis of `filtered`
    pub filtered_times: Vec<f64>,
    pub eye_min_one: Option<f64>,
    pub eye_max_zero: Option<f64>,
    pub eye_opening: Option<f64>,
}

/// FIFO memo of impulse responses keyed by the bit pattern of τ
struct ResponseCache {
    entries: VecDeque<(u64, ImpulseResponse)>,
    capacity: usize,
}

impl ResponseCache {
    fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn get(&self, tau: f64) -> Option<&ImpulseResponse> {
        let key = tau.to_bits();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, ir)| ir)
    }

    fn insert(&mut self, tau: f64, response: ImpulseResponse) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back((tau.to_bits(), response));
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Read-only pipeline inputs plus the per-τ response memo
pub struct Scenario {
    bits: Vec<bool>,
    samples_per_bit: usize,
    grid: Vec<f64>,
    nrz: Vec<f64>,
    cache: ResponseCache,
}

impl Scenario {
    /// Draw bits per `params` and build the grid and NRZ signal
    pub fn new(params: &ScenarioParams) -> Result<Self> {
        let (bit_length, samples_per_bit) = params.dimensions()?;
        let bits = match params.seed {
            Some(seed) => generate_bits_seeded(bit_length, seed)?,
            None => generate_bits(bit_length)?,
        };

        debug!(bit_length, samples_per_bit, seed = ?params.seed, "scenario created");
        Self::from_bits(bits, samples_per_bit)
    }

    /// Build a scenario around a fixed bit sequence
    pub fn from_bits(bits: Vec<bool>, samples_per_bit: usize) -> Result<Self> {
        check_samples_per_bit(samples_per_bit)?;
        let grid = time_grid(bits.len(), samples_per_bit)?;
        let nrz = modulate_nrz(&bits, samples_per_bit)?;

        Ok(Self {
            bits,
            samples_per_bit,
            grid,
            nrz,
            cache: ResponseCache::new(RESPONSE_CACHE_CAPACITY),
        })
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn samples_per_bit(&self) -> usize {
        self.samples_per_bit
    }

    pub fn time_grid(&self) -> &[f64] {
        &self.grid
    }

    pub fn nrz(&self) -> &[f64] {
        &self.nrz
    }

    /// Number of memoized impulse responses
    pub fn cached_responses(&self) -> usize {
        self.cache.len()
    }

    /// Run the channel for time constant `tau`
    pub fn render(&mut self, tau: f64) -> Result<Render> {
        let response = self.response(tau)?;

        let filtered = convolve_and_normalize(&self.nrz, &response.amplitudes)?;
        let filtered_times = extend_times(&response.times, filtered.len(), self.samples_per_bit)?;
        let eye = eye_opening(&filtered, &self.bits, self.samples_per_bit)?;

        Ok(Render {
            tau,
            times: response.times,
            nrz: self.nrz.clone(),
            response: response.amplitudes,
            filtered,
            filtered_times,
            eye_min_one: eye.min_one,
            eye_max_zero: eye.max_zero,
            eye_opening: eye.opening(),
        })
    }

    fn response(&mut self, tau: f64) -> Result<ImpulseResponse> {
        if let Some(hit) = self.cache.get(tau) {
            return Ok(hit.clone());
        }

        let response = RcLowPass::new(tau)?.sample(&self.grid)?;
        debug!(tau, cached = self.cache.len(), "impulse response computed");
        self.cache.insert(tau, response.clone());
        Ok(response)
    }
}
