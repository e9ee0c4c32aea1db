//! Multi-generator combinators.
//!
//! Every combinator here draws its inputs strictly left to right: generator
//! `i` runs with the seed left after generator `i - 1`. The arity families
//! (`zip2..zip6`, `map2..map6`, `flat_map2..flat_map6`) are stamped out by a
//! single macro so they share that contract exactly.

use crate::gen::*;

/// Tuples of generators that can be run as one generator of tuples.
pub trait Zip {
    type Output;

    /// Draw each generator left to right and tuple the values.
    fn zip(self) -> Gen<Self::Output>;
}

macro_rules! arity {
    ($zip:ident, $map:ident, $flat_map:ident; $($gen:ident => $val:ident: $ty:ident),+) => {
        impl<$($ty: 'static),+> Zip for ($(Gen<$ty>,)+) {
            type Output = ($($ty,)+);

            fn zip(self) -> Gen<Self::Output> {
                let ($($gen,)+) = self;
                Gen::new(move |seed| {
                    $(let ($val, seed) = $gen.run(seed);)+
                    (($($val,)+), seed)
                })
            }
        }

        /// Draw the generators left to right and tuple the values.
        pub fn $zip<$($ty: 'static),+>($($gen: Gen<$ty>),+) -> Gen<($($ty,)+)> {
            ($($gen,)+).zip()
        }

        /// Draw the generators left to right and combine the values with `f`.
        pub fn $map<$($ty: 'static,)+ U, F>(f: F, $($gen: Gen<$ty>),+) -> Gen<U>
        where
            F: Fn($($ty),+) -> U + 'static,
            U: 'static,
        {
            Gen::new(move |seed| {
                $(let ($val, seed) = $gen.run(seed);)+
                (f($($val),+), seed)
            })
        }

        /// Draw the generators left to right, then run the generator `f`
        /// builds from the values with the remaining seed.
        pub fn $flat_map<$($ty: 'static,)+ U, F>(f: F, $($gen: Gen<$ty>),+) -> Gen<U>
        where
            F: Fn($($ty),+) -> Gen<U> + 'static,
            U: 'static,
        {
            Gen::new(move |seed| {
                $(let ($val, seed) = $gen.run(seed);)+
                f($($val),+).run(seed)
            })
        }
    };
}

arity!(zip2, map2, flat_map2; g1 => a: A, g2 => b: B);
arity!(zip3, map3, flat_map3; g1 => a: A, g2 => b: B, g3 => c: C);
arity!(zip4, map4, flat_map4; g1 => a: A, g2 => b: B, g3 => c: C, g4 => d: D);
arity!(zip5, map5, flat_map5; g1 => a: A, g2 => b: B, g3 => c: C, g4 => d: D, g5 => e: E);
arity!(zip6, map6, flat_map6; g1 => a: A, g2 => b: B, g3 => c: C, g4 => d: D, g5 => e: E, g6 => h: H);

/// Applicative application: draw a function from `gf`, then a value from
/// `ga`, and apply one to the other.
///
/// Chaining `and_map` builds maps of any arity.
pub fn and_map<A, B, F>(gf: Gen<F>, ga: Gen<A>) -> Gen<B>
where
    A: 'static,
    B: 'static,
    F: FnOnce(A) -> B + 'static,
{
    Gen::new(move |seed| {
        let (f, seed) = gf.run(seed);
        let (value, seed) = ga.run(seed);
        (f(value), seed)
    })
}

/// Choose `g1` or `g2` with equal probability.
pub fn merge<T: 'static>(g1: Gen<T>, g2: Gen<T>) -> Gen<T> {
    Gen::frequency(
        vec![
            WeightedChoice::new(1.0, g1.clone()),
            WeightedChoice::new(1.0, g2),
        ],
        g1,
    )
}
