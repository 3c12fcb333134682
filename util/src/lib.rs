use std::{
    io::{self, BufRead},
    str::FromStr,
    time::Instant,
};

use miette::{GraphicalReportHandler, GraphicalTheme};
use nom::{
    character::complete::digit1,
    combinator::map_res,
    error::{FromExternalError, ParseError},
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};

pub type Span<'a> = LocatedSpan<&'a str>;

/// A line that a whole-line parser refused, pointing at where it gave up.
#[derive(thiserror::Error, Debug, miette::Diagnostic)]
#[error("bad input")]
pub struct BadInput {
    #[source_code]
    src: String,

    #[label("{kind}")]
    bad_bit: miette::SourceSpan,

    kind: String,
}

impl BadInput {
    pub fn offset(&self) -> usize {
        self.bad_bit.offset()
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Renders the report the way miette would print it, without colors.
    pub fn render(&self) -> String {
        let mut s = String::new();
        if GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
            .render_report(&mut s, self)
            .is_err()
        {
            return format!("{self}: {} at offset {}", self.kind, self.offset());
        }
        s
    }
}

pub fn parse_unsigned<'a, E>(i: Span<'a>) -> IResult<Span<'a>, u64, E>
where
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, std::num::ParseIntError>,
{
    map_res(digit1, |i: Span<'a>| u64::from_str(i.fragment()))(i)
}

// Alternatives report the branch that got furthest.
fn innermost_base(e: ErrorTree<Span<'_>>) -> Option<(usize, String)> {
    match e {
        GenericErrorTree::Base { location, kind } => {
            Some((location.location_offset(), kind.to_string()))
        }
        GenericErrorTree::Stack { base, .. } => innermost_base(*base),
        GenericErrorTree::Alt(alts) => alts
            .into_iter()
            .filter_map(innermost_base)
            .max_by_key(|(offset, _)| *offset),
    }
}

/// Runs `parse_fun` over the whole of `l`; anything left unconsumed is an error.
pub fn parse_line<'a, T, F>(l: &'a str, parse_fun: F) -> Result<T, BadInput>
where
    F: FnMut(Span<'a>) -> IResult<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    let line: Result<T, ErrorTree<Span>> = final_parser(parse_fun)(Span::new(l));

    line.map_err(|e| {
        let (offset, kind) =
            innermost_base(e).unwrap_or_else(|| (0, "unrecognized input".to_string()));
        BadInput {
            src: l.to_string(),
            bad_bit: (offset, 0).into(),
            kind,
        }
    })
}

/// Stdin line by line; lines that fail to read are dropped.
pub fn read_input_lines() -> impl Iterator<Item = String> {
    io::stdin().lock().lines().filter_map(|s| s.ok())
}

pub fn measure<T, F>(f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();

    let res = f();

    log::info!("It took: {}ms", start.elapsed().as_millis());
    res
}
