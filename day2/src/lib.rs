use std::{fmt, str::FromStr};

use anyhow::{anyhow, Result};
use nom::{
    character::complete::char,
    combinator::map,
    sequence::{preceded, tuple},
    IResult,
};
use nom_supreme::error::ErrorTree;
use thiserror::Error;
use util::{parse_line, parse_unsigned, BadInput, Span};

/// One box on the order list, `l`x`w`x`h`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Present {
    l: u64,
    w: u64,
    h: u64,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("present {0:?} doesn't fit in the order totals")]
pub struct OverflowError(pub Present);

fn parse_present(i: Span) -> IResult<Span, Present, ErrorTree<Span>> {
    map(
        tuple((
            parse_unsigned,
            preceded(char('x'), parse_unsigned),
            preceded(char('x'), parse_unsigned),
        )),
        |(l, w, h)| Present { l, w, h },
    )(i)
}

impl FromStr for Present {
    type Err = BadInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s, parse_present)
    }
}

impl Present {
    pub fn new(l: u64, w: u64, h: u64) -> Self {
        Self { l, w, h }
    }

    /// A line that doesn't describe a box counts as a box with no size at all.
    pub fn parse_lenient(line: &str) -> Self {
        line.parse().unwrap_or_else(|e: BadInput| {
            if log::log_enabled!(log::Level::Debug) {
                log::debug!("skipping {line:?}: {}\n{}", e.kind(), e.render());
            }
            Present::default()
        })
    }

    /// Face areas, smallest first.
    pub fn face_areas(&self) -> Option<[u64; 3]> {
        let Present { l, w, h } = *self;
        let mut areas = [l.checked_mul(w)?, w.checked_mul(h)?, h.checked_mul(l)?];
        areas.sort_unstable();
        Some(areas)
    }

    /// Face perimeters, smallest first.
    pub fn face_perimeters(&self) -> Option<[u64; 3]> {
        let Present { l, w, h } = *self;
        let perimeter = |a: u64, b: u64| a.checked_add(b)?.checked_mul(2);
        let mut perimeters = [perimeter(l, w)?, perimeter(w, h)?, perimeter(h, l)?];
        perimeters.sort_unstable();
        Some(perimeters)
    }

    pub fn volume(&self) -> Option<u64> {
        self.l.checked_mul(self.w)?.checked_mul(self.h)
    }

    /// Surface area plus the smallest face as slack.
    pub fn paper_needed(&self) -> Option<u64> {
        let [a, b, c] = self.face_areas()?;
        a.checked_add(b)?
            .checked_add(c)?
            .checked_mul(2)?
            .checked_add(a)
    }

    /// The two smallest face perimeters plus the volume for the bow.
    pub fn ribbon_needed(&self) -> Option<u64> {
        let [p, q, _] = self.face_perimeters()?;
        p.checked_add(q)?.checked_add(self.volume()?)
    }
}

/// Running paper and ribbon totals for a whole order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub paper: u64,
    pub ribbon: u64,
}

impl Totals {
    /// Adds one present; on overflow the totals are left untouched.
    pub fn add(&mut self, present: &Present) -> Result<(), OverflowError> {
        let overflow = || OverflowError(*present);
        let paper = present
            .paper_needed()
            .and_then(|p| self.paper.checked_add(p))
            .ok_or_else(overflow)?;
        let ribbon = present
            .ribbon_needed()
            .and_then(|r| self.ribbon.checked_add(r))
            .ok_or_else(overflow)?;

        self.paper = paper;
        self.ribbon = ribbon;
        Ok(())
    }

    pub fn merge(self, other: Totals) -> Option<Totals> {
        Some(Totals {
            paper: self.paper.checked_add(other.paper)?,
            ribbon: self.ribbon.checked_add(other.ribbon)?,
        })
    }
}

impl Extend<Present> for Totals {
    fn extend<T: IntoIterator<Item = Present>>(&mut self, iter: T) {
        for present in iter {
            if let Err(e) = self.add(&present) {
                log::debug!("skipping: {e}");
            }
        }
    }
}

impl FromIterator<Present> for Totals {
    fn from_iter<T: IntoIterator<Item = Present>>(iter: T) -> Self {
        let mut totals = Totals::default();
        totals.extend(iter);
        totals
    }
}

impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Part1 {}", self.paper)?;
        write!(f, "Part2 {}", self.ribbon)
    }
}

/// Totals for every line of the order; lines that don't parse or don't fit add nothing.
pub fn order_totals(input: impl Iterator<Item = impl Into<String>>) -> Totals {
    input
        .map(|line| {
            let line: String = line.into();
            Present::parse_lenient(&line)
        })
        .collect()
}

/// Like [`order_totals`], but the first bad line is an error.
pub fn order_totals_strict(input: impl Iterator<Item = impl Into<String>>) -> Result<Totals> {
    let mut totals = Totals::default();

    for (n, line) in input.enumerate() {
        let line: String = line.into();
        let present = line
            .parse::<Present>()
            .map_err(|e| anyhow!("line {}: {} ({})", n + 1, e, e.kind()))?;
        totals
            .add(&present)
            .map_err(|e| anyhow!("line {}: {}", n + 1, e))?;
    }

    Ok(totals)
}
