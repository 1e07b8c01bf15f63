//! The cellular automaton engine.

use crate::{
    buffer::RotatingBuffer,
    cells::{State, ALIVE, DEAD},
    config::Config,
    error::Error,
    grid::{check_dimensions, Boundary, Grid, MOORE_CENTER},
    rules::Rule,
    view::View,
};
use log::{debug, info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A cellular automaton on a double-buffered grid.
///
/// The current generation is slot `0` of a two-slot
/// [`RotatingBuffer`]. Each [`tick`](Automaton::tick) reads slot `0`,
/// writes the next generation into slot `1`, and rotates the buffer.
///
/// `B` decides what the cells at the edges see outside of the grid.
pub struct Automaton<R: Rule, B: Boundary> {
    /// Automaton configuration.
    ///
    /// Its dimensions and seed follow [`resize`](Automaton::resize)
    /// and [`seed`](Automaton::seed).
    pub(crate) config: Config,

    /// The rule of the cellular automaton.
    pub(crate) rule: R,

    /// The current and the next generation.
    pub(crate) buffer: RotatingBuffer<Grid<State, B>, 2>,

    /// Generator for random fillings.
    rng: StdRng,

    /// Number of ticks since the last seeding, resize or restore.
    pub(crate) generation: u64,
}

impl<R: Rule, B: Boundary> Automaton<R, B> {
    /// Creates a new automaton from the configuration and the rule.
    ///
    /// The first generation is filled with a uniform random state per cell,
    /// drawn from a generator seeded with [`config.seed`](Config::seed).
    ///
    /// The boundary policy in the configuration is ignored, `B` is used
    /// instead.
    pub fn new(config: &Config, rule: R) -> Result<Self, Error> {
        let buffer = RotatingBuffer::try_new(|| Grid::new(config.width, config.height, DEAD))?;
        let mut config = config.clone();
        config.boundary = B::KIND;
        info!(
            "creating a {}x{} automaton with {} boundary, rule {}, seed {}",
            config.width, config.height, config.boundary, config.rule_string, config.seed
        );
        let mut automaton = Automaton {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            rule,
            buffer,
            generation: 0,
        };
        automaton.randomize();
        Ok(automaton)
    }

    /// Advances one generation.
    ///
    /// Cells at the edges see their neighbors according to the boundary
    /// policy: dead outside of a free boundary, wrapped around with a
    /// periodic one.
    pub fn tick(&mut self) {
        let rule = &self.rule;
        let (current, next) = self.buffer.get_pair_mut::<0, 1>();
        for (index, cell) in next.iter_mut().enumerate() {
            let (x, y) = current.coord_of(index);
            let nbhd = current.moore(x, y);
            let sum = nbhd
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != MOORE_CENTER)
                .map(|(_, state)| usize::from(state.is_alive()))
                .sum::<usize>();
            *cell = rule.transition(*nbhd[MOORE_CENTER], sum);
        }
        self.buffer.timestep();
        self.generation += 1;
        trace!("generation {}", self.generation);
    }

    /// Advances `n` generations.
    pub fn step(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// A read-only view of the current generation.
    #[inline]
    pub fn view(&self) -> View<'_> {
        View::new(self.current())
    }

    /// The grid holding the current generation.
    #[inline]
    pub fn current(&self) -> &Grid<State, B> {
        self.buffer.get::<0>()
    }

    /// Reallocates both generations to the new dimensions.
    ///
    /// All cells become dead and the generation count is reset.
    /// Returns an error if `width` or `height` is not positive,
    /// in which case nothing changes.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), Error> {
        check_dimensions(width, height)?;
        debug!("resizing automaton to {}x{}", width, height);
        for grid in self.buffer.slots_mut() {
            grid.resize(width, height)?;
        }
        self.config.width = width;
        self.config.height = height;
        self.generation = 0;
        Ok(())
    }

    /// Reseeds the random generator and refills the current generation
    /// from it.
    ///
    /// The generation count is reset.
    pub fn seed(&mut self, seed: u64) {
        debug!("reseeding with {}", seed);
        self.config.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
        self.randomize();
    }

    /// Refills the current generation with a uniform random state per cell,
    /// continuing the sequence of the random generator.
    ///
    /// The generation count is reset.
    pub fn randomize(&mut self) {
        let rng = &mut self.rng;
        for cell in self.buffer.get_mut::<0>().iter_mut() {
            *cell = State::from(rng.gen::<bool>());
        }
        self.generation = 0;
    }

    /// Kills every cell of the current generation.
    pub fn clear(&mut self) {
        debug!("clearing the grid");
        self.buffer.get_mut::<0>().clear();
    }

    /// Gets the state of a cell in the current generation.
    ///
    /// Positions outside of a free boundary are dead.
    #[inline]
    pub fn get_cell(&self, x: i32, y: i32) -> State {
        *self.current().get(x, y)
    }

    /// Sets the state of a cell in the current generation.
    ///
    /// Returns an error for positions outside of a free boundary,
    /// or for states other than [`DEAD`] and [`ALIVE`].
    pub fn set_cell(&mut self, x: i32, y: i32, state: State) -> Result<(), Error> {
        if !state.is_binary() {
            return Err(Error::InvalidState((x, y), state));
        }
        if self.buffer.get_mut::<0>().set(x, y, state) {
            Ok(())
        } else {
            Err(Error::SetCellError((x, y)))
        }
    }

    /// Number of ticks since the last seeding, resize or restore.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of living cells in the current generation.
    pub fn cell_count(&self) -> usize {
        self.current().iter().filter(|state| state.is_alive()).count()
    }

    /// Automaton configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The rule.
    #[inline]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Displays the current generation in a mix of
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) and
    /// [RLE](https://conwaylife.com/wiki/Rle) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `o`;
    /// * Each line is ended with `$`;
    /// * The whole pattern is ended with `!`.
    pub fn display(&self) -> String {
        let grid = self.current();
        let mut str = format!(
            "x = {}, y = {}, rule = {}\n",
            grid.width(),
            grid.height(),
            self.config.rule_string
        );
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                str.push(match *grid.get(x, y) {
                    ALIVE => 'o',
                    _ => '.',
                });
            }
            if y == grid.height() - 1 {
                str.push('!');
            } else {
                str.push('$');
            }
            str.push('\n');
        }
        str
    }
}
