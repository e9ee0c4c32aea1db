//! Generator combinators for seeded value generation.

use crate::{data::*, error::*, sample};
use std::rc::Rc;
use tracing::trace;

/// A generator for values of type `T`.
///
/// Generators are explicit, first-class values that can be composed
/// using combinator functions. A generator is a pure function from a
/// [`Seed`] to a value and the successor seed: running it twice with the
/// same seed gives the same result, and composing generators never draws.
///
/// Cloning is cheap and shares the underlying function.
pub struct Gen<T> {
    generator: Rc<dyn Fn(Seed) -> (T, Seed)>,
}

impl<T> Clone for Gen<T> {
    fn clone(&self) -> Self {
        Gen {
            generator: Rc::clone(&self.generator),
        }
    }
}

impl<T> Gen<T> {
    /// Create a new generator from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Seed) -> (T, Seed) + 'static,
    {
        Gen {
            generator: Rc::new(f),
        }
    }

    /// Produce a value and the successor seed.
    pub fn run(&self, seed: Seed) -> (T, Seed) {
        (self.generator)(seed)
    }

    /// Create a generator that always produces the same value.
    ///
    /// It still consumes one boolean draw, so the seed advances exactly as
    /// it would for a primitive generator.
    pub fn constant(value: T) -> Self
    where
        T: Clone + 'static,
    {
        Gen::new(move |seed| {
            let (_, next) = seed.draw_bool();
            (value.clone(), next)
        })
    }
}

impl<T> Gen<T>
where
    T: 'static,
{
    /// Map a function over the generated values.
    pub fn map<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> U + 'static,
        U: 'static,
    {
        Gen::new(move |seed| {
            let (value, seed) = self.run(seed);
            (f(value), seed)
        })
    }

    /// Bind for dependent generation.
    ///
    /// The generator returned by `f` runs with the seed left after this
    /// generator's draw, so earlier values can shape later generation.
    pub fn flat_map<U, F>(self, f: F) -> Gen<U>
    where
        F: Fn(T) -> Gen<U> + 'static,
        U: 'static,
    {
        Gen::new(move |seed| {
            let (value, seed) = self.run(seed);
            f(value).run(seed)
        })
    }

    /// Pair each drawn value with a derived view of it.
    pub fn map_constraint<U, F>(self, f: F) -> Gen<(T, U)>
    where
        F: Fn(&T) -> U + 'static,
        U: 'static,
    {
        Gen::new(move |seed| {
            let (value, seed) = self.run(seed);
            let derived = f(&value);
            ((value, derived), seed)
        })
    }

    /// Draw one value and combine it with `initial`.
    ///
    /// This is a single-draw projection: `f` sees exactly one generated
    /// value, not a sequence of them.
    pub fn reduce<B, U, F>(self, f: F, initial: B) -> Gen<U>
    where
        F: Fn(T, B) -> U + 'static,
        B: Clone + 'static,
        U: 'static,
    {
        self.map(move |value| f(value, initial.clone()))
    }

    /// Alias of [`Gen::reduce`].
    pub fn fold<B, U, F>(self, f: F, initial: B) -> Gen<U>
    where
        F: Fn(T, B) -> U + 'static,
        B: Clone + 'static,
        U: 'static,
    {
        self.reduce(f, initial)
    }

    /// Keep drawing until `predicate` holds.
    ///
    /// There is no retry bound. The predicate must be satisfiable over this
    /// generator's output, otherwise the generator never returns. Use
    /// [`sample::capped_generate_until`] when that cannot be guaranteed.
    pub fn keep_if<P>(self, predicate: P) -> Gen<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        Gen::new(move |seed| sample::generate_such_that(&predicate, &self, seed))
    }

    /// Keep drawing until `predicate` fails. Same hazard as [`Gen::keep_if`].
    pub fn drop_if<P>(self, predicate: P) -> Gen<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.keep_if(move |value| !predicate(value))
    }

    /// Defer building a generator until it runs.
    ///
    /// Needed for recursive generators, which would otherwise build
    /// themselves forever.
    pub fn lazy<F>(thunk: F) -> Self
    where
        F: Fn() -> Gen<T> + 'static,
    {
        Gen::new(move |seed| thunk().run(seed))
    }

    /// Choose among alternatives in proportion to their weights.
    ///
    /// A float is drawn from `[0, total]`, where `total` is the sum of the
    /// absolute weights, and the alternatives are walked in order. Ties at a
    /// boundary go to the earlier alternative. Zero-weight alternatives are
    /// never chosen, even for a draw of exactly zero.
    ///
    /// When the total weight is zero (including no alternatives) `default`
    /// runs directly on the seed. A non-finite total also falls back to
    /// `default`; a finite one always picks an alternative, the last
    /// weighted one absorbing any rounding left over from the walk.
    pub fn frequency(alternatives: Vec<WeightedChoice<T>>, default: Gen<T>) -> Self {
        let total: f64 = alternatives.iter().map(|choice| choice.weight.abs()).sum();

        Gen::new(move |seed| {
            if total == 0.0 {
                trace!("frequency weights sum to zero, running default generator");
                return default.run(seed);
            }

            let (mut point, seed) = seed.draw_float(0.0, total);
            let mut last_weighted = None;
            for choice in &alternatives {
                let weight = choice.weight.abs();
                if weight > 0.0 {
                    if point <= weight {
                        return choice.gen.run(seed);
                    }
                    last_weighted = Some(choice);
                }
                point -= weight;
            }

            match last_weighted {
                Some(choice) if total.is_finite() => choice.gen.run(seed),
                _ => {
                    trace!(total, "frequency total is not finite, running default generator");
                    default.run(seed)
                }
            }
        })
    }

    /// Like [`Gen::frequency`], but rejects NaN and infinite weights.
    pub fn try_frequency(alternatives: Vec<WeightedChoice<T>>, default: Gen<T>) -> Result<Self> {
        if let Some((index, choice)) = alternatives
            .iter()
            .enumerate()
            .find(|(_, choice)| !choice.weight.is_finite())
        {
            return Err(SeedgenError::InvalidWeight {
                index,
                weight: choice.weight,
            });
        }
        Ok(Gen::frequency(alternatives, default))
    }

    /// Uniform choice among generators, falling back to `default` when
    /// `gens` is empty.
    pub fn choices(gens: Vec<Gen<T>>, default: Gen<T>) -> Self {
        let alternatives = gens
            .into_iter()
            .map(|gen| WeightedChoice::new(1.0, gen))
            .collect();
        Gen::frequency(alternatives, default)
    }
}

impl<T> Gen<T>
where
    T: Clone + 'static,
{
    /// Pick an item uniformly, substituting `default` when `items` is empty.
    pub fn select_with_default(default: T, items: Vec<T>) -> Self {
        Gen::<Option<T>>::select(items).map(move |item| item.unwrap_or_else(|| default.clone()))
    }
}

impl<T> Gen<Option<T>>
where
    T: Clone + 'static,
{
    /// Pick an item uniformly.
    ///
    /// An empty collection yields `None` without drawing.
    pub fn select(items: Vec<T>) -> Self {
        Gen::new(move |seed| {
            if items.is_empty() {
                return (None, seed);
            }
            let (index, seed) = seed.draw_int(0, items.len() as i64 - 1);
            (items.get(index as usize).cloned(), seed)
        })
    }
}

impl<T> Gen<Vec<T>>
where
    T: 'static,
{
    /// Turn a list of generators into a generator of lists.
    ///
    /// Order is preserved and the seed is threaded left to right. An empty
    /// list produces an empty vector without drawing.
    pub fn sequence(gens: Vec<Gen<T>>) -> Self {
        Gen::new(move |seed| {
            let mut values = Vec::with_capacity(gens.len());
            let mut seed = seed;
            for gen in &gens {
                let (value, next) = gen.run(seed);
                values.push(value);
                seed = next;
            }
            (values, seed)
        })
    }

    /// Generate exactly `count` values from `gen`.
    pub fn list(count: usize, gen: Gen<T>) -> Self {
        Gen::new(move |seed| sample::generate_n(count, &gen, seed))
    }
}

/// A weighted alternative for [`Gen::frequency`].
pub struct WeightedChoice<T> {
    /// Relative weight; only its magnitude is used.
    pub weight: f64,
    pub gen: Gen<T>,
}

impl<T> WeightedChoice<T> {
    pub fn new(weight: f64, gen: Gen<T>) -> Self {
        WeightedChoice { weight, gen }
    }
}

impl<T> Clone for WeightedChoice<T> {
    fn clone(&self) -> Self {
        WeightedChoice {
            weight: self.weight,
            gen: self.gen.clone(),
        }
    }
}

impl<T> From<(f64, Gen<T>)> for WeightedChoice<T> {
    fn from((weight, gen): (f64, Gen<T>)) -> Self {
        WeightedChoice::new(weight, gen)
    }
}

/// Primitive generators.
impl Gen<bool> {
    /// Generate a random boolean.
    pub fn bool() -> Self {
        Gen::new(|seed| seed.draw_bool())
    }
}

impl Gen<i32> {
    /// Generate an integer in the inclusive range `[min, max]`.
    pub fn int_range(min: i32, max: i32) -> Self {
        Gen::new(move |seed| {
            let (value, seed) = seed.draw_int(min as i64, max as i64);
            (value as i32, seed)
        })
    }
}

impl Gen<f64> {
    /// Generate a float in `[min, max]`.
    pub fn float_range(min: f64, max: f64) -> Self {
        Gen::new(move |seed| seed.draw_float(min, max))
    }
}
