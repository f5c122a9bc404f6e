//! The run loop: advance, present, and start over once the board has died
//! out, gone stale or grown old.

use algo::{Conway, Row, Topology};
use log::{info, trace};
use crate::error::Result;
use crate::present::{Frame, Presenter};
use crate::seed::Seeder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
  /// Reseed when fewer cells than this are alive.
  pub population_floor: u32,
  /// Reseed when the population has not changed for more generations.
  pub stale_limit: u32,
  /// Reseed after this many generations.
  pub generation_limit: Option<u32>,
  pub topology: Topology,
}

impl Default for DriverConfig {
  fn default() -> Self {
    Self {
      population_floor: 3,
      stale_limit: 10,
      generation_limit: Some(2000),
      topology: Topology::Wrapped,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
  Extinct,
  Stale,
  Aged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
  Advanced { population: u32 },
  Reseeded(ResetCause),
}

pub struct Driver<'a, T: Row, S> {
  conway: Conway<'a, T>,
  seeder: S,
  config: DriverConfig,
  reseeds: u32,
}

impl<'a, T: Row, S: Seeder<T>> Driver<'a, T, S> {
  pub fn new(buffer: &'a mut [T], seeder: S, config: DriverConfig) -> Result<Self> {
    let mut conway = Conway::from_slice(buffer)?;
    conway.set_topology(config.topology);
    Ok(Self { conway, seeder, config, reseeds: 0 })
  }

  pub fn conway(&self) -> &Conway<'a, T> {
    &self.conway
  }

  pub fn config(&self) -> &DriverConfig {
    &self.config
  }

  /// Number of times the board has been started over after `start`.
  pub fn reseeds(&self) -> u32 {
    self.reseeds
  }

  pub fn frame(&self) -> Frame<'_, T> {
    Frame::of(&self.conway)
  }

  /// Clears the board and counters and seeds a fresh pattern.
  pub fn start(&mut self) -> Result<()> {
    self.conway.reset();
    self.seeder.seed(self.conway.live_rows_mut())?;
    let population: u32 = self.conway.live_rows().iter().map(|row| row.count_ones()).sum();
    info!("seeded {} live cells", population);
    Ok(())
  }

  /// Advances one generation and hands it to `presenter`, then reseeds if the
  /// board is done.
  pub fn tick<P: Presenter<T>>(&mut self, presenter: &mut P) -> Result<(Tick, P::Output)> {
    let population = self.conway.advance();
    let output = presenter.present(&Frame::of(&self.conway));

    let cause = self.reset_cause();
    trace!("tick: generation {}, population {}, staleness {}, cause {:?}",
      self.conway.generation(), population, self.conway.staleness(), cause);

    match cause {
      Some(cause) => {
        info!("{:?} at generation {}, starting over", cause, self.conway.generation());
        self.reseeds += 1;
        self.start()?;
        Ok((Tick::Reseeded(cause), output))
      }
      None => {
        Ok((Tick::Advanced { population }, output))
      }
    }
  }

  fn reset_cause(&self) -> Option<ResetCause> {
    let conway = &self.conway;
    if conway.population() < self.config.population_floor {
      Some(ResetCause::Extinct)
    } else if conway.staleness() > self.config.stale_limit {
      Some(ResetCause::Stale)
    } else if self.config.generation_limit.map_or(false, |limit| conway.generation() > limit) {
      Some(ResetCause::Aged)
    } else {
      None
    }
  }
}
