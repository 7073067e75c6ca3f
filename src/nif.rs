//! NIF interface for Elixir
//!
//! The four pipeline stages are exposed as stateless NIFs. The LiveView
//! slider uses the session NIFs instead: a session keeps the bits and NRZ
//! signal on the Rust side and only τ crosses the boundary per update.
//!
//! Each NIF is a thin wrapper; argument mapping and slab handling live in
//! plain functions so they can be tested without a BEAM.

use rustler::{Atom, NifResult};
use tracing::warn;

use crate::config::ScenarioParams;
use crate::error::{positive_len, Error, Result};
use crate::scenario::{Render, Scenario};
use crate::slab::SessionSlab;
use crate::{bits, channel, convolve, nrz};

/// Maximum number of live sessions
pub const SESSION_CAPACITY: usize = 256;

lazy_static::lazy_static! {
    static ref SESSIONS: SessionSlab<Scenario> = SessionSlab::new(SESSION_CAPACITY);
}

mod atoms {
    rustler::atoms! {
        ok,
    }
}

// ============================================================================
// Argument mapping
// ============================================================================

fn bits_for(bit_length: i64, seed: Option<u64>) -> Result<Vec<bool>> {
    let bit_length = positive_len("bit_length", bit_length)?;
    match seed {
        Some(seed) => bits::generate_bits_seeded(bit_length, seed),
        None => bits::generate_bits(bit_length),
    }
}

fn nrz_for(bits: &[bool], samples_per_bit: i64) -> Result<Vec<f64>> {
    let samples_per_bit = positive_len("samples_per_bit", samples_per_bit)?;
    nrz::modulate_nrz(bits, samples_per_bit)
}

fn grid_for(bit_length: i64, samples_per_bit: i64) -> Result<Vec<f64>> {
    let bit_length = positive_len("bit_length", bit_length)?;
    let samples_per_bit = positive_len("samples_per_bit", samples_per_bit)?;
    nrz::time_grid(bit_length, samples_per_bit)
}

fn open_session(sessions: &SessionSlab<Scenario>, params: &ScenarioParams) -> Result<u64> {
    let scenario = Scenario::new(params)?;
    sessions.insert(scenario).ok_or_else(|| {
        warn!(capacity = sessions.capacity(), "session slab full");
        Error::SlabFull
    })
}

fn render_session(sessions: &SessionSlab<Scenario>, session_id: u64, tau: f64) -> Result<Render> {
    sessions
        .with_session_mut(session_id, |scenario| scenario.render(tau))
        .ok_or(Error::SessionNotFound)?
}

fn close_session(sessions: &SessionSlab<Scenario>, session_id: u64) -> Result<()> {
    if sessions.remove(session_id) {
        Ok(())
    } else {
        Err(Error::SessionNotFound)
    }
}

// ============================================================================
// Pipeline stages
// ============================================================================

/// Random bits; pass a seed to replay a pattern
#[rustler::nif]
fn generate_bits(bit_length: i64, seed: Option<u64>) -> NifResult<Vec<bool>> {
    Ok(bits_for(bit_length, seed)?)
}

#[rustler::nif]
fn modulate_nrz(bits: Vec<bool>, samples_per_bit: i64) -> NifResult<Vec<f64>> {
    Ok(nrz_for(&bits, samples_per_bit)?)
}

#[rustler::nif]
fn time_grid(bit_length: i64, samples_per_bit: i64) -> NifResult<Vec<f64>> {
    Ok(grid_for(bit_length, samples_per_bit)?)
}

/// Returns `{times, amplitudes}`
#[rustler::nif]
fn impulse_response(tau: f64, grid: Vec<f64>) -> NifResult<(Vec<f64>, Vec<f64>)> {
    let response = channel::impulse_response(tau, &grid)?;
    Ok((response.times, response.amplitudes))
}

#[rustler::nif(schedule = "DirtyCpu")]
fn convolve_and_normalize(signal: Vec<f64>, response: Vec<f64>) -> NifResult<Vec<f64>> {
    Ok(convolve::convolve_and_normalize(&signal, &response)?)
}

// ============================================================================
// Sessions
// ============================================================================

/// Build a scenario and return its handle
#[rustler::nif]
fn session_create(params: ScenarioParams) -> NifResult<(Atom, u64)> {
    let id = open_session(&SESSIONS, &params)?;
    Ok((atoms::ok(), id))
}

/// Re-run the channel for a new time constant
#[rustler::nif(schedule = "DirtyCpu")]
fn session_render(session_id: u64, tau: f64) -> NifResult<(Atom, Render)> {
    let frame = render_session(&SESSIONS, session_id, tau)?;
    Ok((atoms::ok(), frame))
}

#[rustler::nif]
fn session_destroy(session_id: u64) -> NifResult<Atom> {
    close_session(&SESSIONS, session_id)?;
    Ok(atoms::ok())
}

#[rustler::nif]
fn session_count() -> NifResult<u64> {
    Ok(SESSIONS.len() as u64)
}
