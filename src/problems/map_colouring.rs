//! Colouring the seven regions of Australia so that no two adjacent regions
//! share a colour.

use std::sync::Arc;

use im::HashMap;
use serde::Serialize;

use crate::{
    csp::{constraints::not_equal::NotEqualConstraint, engine::Csp},
    error::Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Colour {
    Red,
    Green,
    Blue,
}

pub const REGIONS: [&str; 7] = [
    "Western Australia",
    "Northern Territory",
    "South Australia",
    "Queensland",
    "New South Wales",
    "Victoria",
    "Tasmania",
];

pub const ADJACENCIES: [(&str, &str); 9] = [
    ("Western Australia", "Northern Territory"),
    ("Western Australia", "South Australia"),
    ("South Australia", "Northern Territory"),
    ("Queensland", "Northern Territory"),
    ("Queensland", "South Australia"),
    ("Queensland", "New South Wales"),
    ("New South Wales", "South Australia"),
    ("Victoria", "South Australia"),
    ("Victoria", "New South Wales"),
];

/// Builds the Australia map colouring problem with the given palette as every
/// region's domain.
pub fn australia_csp(palette: &[Colour]) -> Result<Csp<&'static str, Colour>> {
    let mut domains = HashMap::new();
    for region in REGIONS {
        domains.insert(region, palette.to_vec());
    }
    let mut csp = Csp::new(REGIONS.to_vec(), domains)?;
    for (a, b) in ADJACENCIES {
        csp.add_constraint(Arc::new(NotEqualConstraint::new(a, b)))?;
    }
    Ok(csp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_colours_suffice() {
        let csp = australia_csp(&[Colour::Red, Colour::Green, Colour::Blue]).unwrap();
        let solution = csp.solve().unwrap();

        for region in REGIONS {
            assert!(solution.contains_key(&region));
        }
        for (a, b) in ADJACENCIES {
            assert_ne!(solution.get(&a), solution.get(&b), "{} and {}", a, b);
        }
    }

    #[test]
    fn one_colour_is_over_constrained() {
        let csp = australia_csp(&[Colour::Red]).unwrap();
        assert!(csp.solve().is_none());
    }

    mod prop_tests {
        use proptest::prelude::*;

        use super::*;

        fn arbitrary_edges() -> impl Strategy<Value = (u32, Vec<(u32, u32)>)> {
            (2..12u32).prop_flat_map(|regions| {
                let edges = proptest::collection::vec(
                    (0..regions, 0..regions)
                        .prop_filter("edges join distinct regions", |(a, b)| a != b),
                    0..20,
                );
                (Just(regions), edges)
            })
        }

        proptest! {
            /// Any solution to a random colouring instance obeys every edge
            /// constraint and only uses declared colours.
            #[test]
            fn solutions_satisfy_every_added_constraint(
                (regions, edges) in arbitrary_edges()
            ) {
                let palette = [Colour::Red, Colour::Green, Colour::Blue];
                let variables: Vec<u32> = (0..regions).collect();
                let mut domains = im::HashMap::new();
                for &v in &variables {
                    domains.insert(v, palette.to_vec());
                }
                let mut csp = Csp::new(variables.clone(), domains).unwrap();
                for &(a, b) in &edges {
                    csp.add_constraint(std::sync::Arc::new(NotEqualConstraint::new(a, b))).unwrap();
                }

                if let Some(solution) = csp.solve() {
                    for &v in &variables {
                        let colour = solution.get(&v).unwrap();
                        prop_assert!(palette.contains(colour));
                    }
                    for &(a, b) in &edges {
                        prop_assert_ne!(solution.get(&a), solution.get(&b));
                    }
                }
            }
        }
    }
}
