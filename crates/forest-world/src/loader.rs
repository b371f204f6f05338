//! Line-oriented world file format.
//!
//! One directive per line, fields separated by whitespace. Blank lines and
//! lines starting with `#` are ignored. Ranges are inclusive.
//!
//! ```text
//! WORLD 5 7          # rows cols, must come first
//! BEGIN 4 0          # start cell (default 0 0)
//! GOAL 0 6
//! WALL 2 3
//! HWALL 1 0 4        # row 1, cols 0..=4
//! VWATER 5 1 3       # col 5, rows 1..=3
//! GRASS 3 3
//! HFLOOR 4 1 6
//! PENALWATER 2.5     # raised to at least 1.0
//! PORTAL 0 0 4 6     # r1 c1 r2 c2
//! ```
//!
//! The same shapes (`X r c`, `HX row c1 c2`, `VX col r1 r2`) exist for
//! `WALL`, `WATER`, `GRASS` and `FLOOR`. Every category is exclusive in
//! world files: a cell may be re-declared with its own category but never
//! given a second one.

use crate::builder::GridBuilder;
use crate::cell::Category;
use crate::error::{GridError, LoadError};
use crate::grid::Grid;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read and parse a world file.
pub fn load(path: impl AsRef<Path>) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse(&text)?;
    info!(
        path = %path.display(),
        dims = %grid.dims(),
        goals = grid.goals().count(),
        portal_pairs = grid.portal_pairs(),
        "loaded world"
    );
    Ok(grid)
}

/// Parse world-file text.
pub fn parse(text: &str) -> Result<Grid, LoadError> {
    let mut builder: Option<GridBuilder> = None;

    for (k, raw) in text.lines().enumerate() {
        let line = k + 1;
        let content = raw.split('#').next().unwrap_or("");
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            continue;
        };
        let directive = Directive::parse(keyword).ok_or_else(|| LoadError::Syntax {
            line,
            reason: format!("unknown directive '{keyword}'"),
        })?;
        debug!(line, keyword, "directive");

        if let Directive::World = directive {
            expect_arity(line, keyword, args, 2)?;
            if builder.is_some() {
                return Err(LoadError::Syntax {
                    line,
                    reason: "WORLD declared more than once".into(),
                });
            }
            let rows = int(line, args[0])?;
            let cols = int(line, args[1])?;
            builder = Some(at_line(line, GridBuilder::new(rows, cols))?.strict());
            continue;
        }

        let current = builder.take().ok_or_else(|| LoadError::BeforeWorld {
            line,
            directive: keyword.to_string(),
        })?;
        builder = Some(apply(current, directive, keyword, args, line)?);
    }

    let builder = builder.ok_or(LoadError::MissingWorld)?;
    builder
        .build()
        .map_err(|source| LoadError::Grid { line: None, source })
}

/// Parsed directive keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Directive {
    World,
    Begin,
    Goal,
    PenalWater,
    Portal,
    /// `X r c`
    Point(Category),
    /// `HX row c1 c2`
    HRange(Category),
    /// `VX col r1 r2`
    VRange(Category),
}

impl Directive {
    fn parse(keyword: &str) -> Option<Self> {
        let d = match keyword {
            "WORLD" => Self::World,
            "BEGIN" => Self::Begin,
            "GOAL" => Self::Goal,
            "PENALWATER" => Self::PenalWater,
            "PORTAL" => Self::Portal,
            _ => {
                if let Some(c) = keyword.strip_prefix('H').and_then(terrain) {
                    Self::HRange(c)
                } else if let Some(c) = keyword.strip_prefix('V').and_then(terrain) {
                    Self::VRange(c)
                } else {
                    Self::Point(terrain(keyword)?)
                }
            }
        };
        Some(d)
    }
}

/// Categories that support point and range placement.
fn terrain(name: &str) -> Option<Category> {
    match name {
        "WALL" => Some(Category::Wall),
        "WATER" => Some(Category::Water),
        "GRASS" => Some(Category::Grass),
        "FLOOR" => Some(Category::Floor),
        _ => None,
    }
}

fn apply(
    b: GridBuilder,
    directive: Directive,
    keyword: &str,
    args: &[&str],
    line: usize,
) -> Result<GridBuilder, LoadError> {
    match directive {
        Directive::World => Ok(b),
        Directive::Begin => {
            expect_arity(line, keyword, args, 2)?;
            at_line(line, b.start(int(line, args[0])?, int(line, args[1])?))
        }
        Directive::Goal => {
            expect_arity(line, keyword, args, 2)?;
            at_line(line, b.goal(int(line, args[0])?, int(line, args[1])?))
        }
        Directive::PenalWater => {
            expect_arity(line, keyword, args, 1)?;
            let value: f64 = args[0].parse().map_err(|_| LoadError::Syntax {
                line,
                reason: format!("invalid number '{}'", args[0]),
            })?;
            at_line(line, b.water_penalty(value))
        }
        Directive::Portal => {
            expect_arity(line, keyword, args, 4)?;
            let a = (int(line, args[0])?, int(line, args[1])?);
            let z = (int(line, args[2])?, int(line, args[3])?);
            at_line(line, b.portal(a, z))
        }
        Directive::Point(category) => {
            expect_arity(line, keyword, args, 2)?;
            at_line(
                line,
                b.place(category, int(line, args[0])?, int(line, args[1])?),
            )
        }
        Directive::HRange(category) => {
            expect_arity(line, keyword, args, 3)?;
            let row = int(line, args[0])?;
            let (from, to) = (int(line, args[1])?, int(line, args[2])?);
            (from..=to).try_fold(b, |b, col| at_line(line, b.place(category, row, col)))
        }
        Directive::VRange(category) => {
            expect_arity(line, keyword, args, 3)?;
            let col = int(line, args[0])?;
            let (from, to) = (int(line, args[1])?, int(line, args[2])?);
            (from..=to).try_fold(b, |b, row| at_line(line, b.place(category, row, col)))
        }
    }
}

fn at_line<T>(line: usize, r: Result<T, GridError>) -> Result<T, LoadError> {
    r.map_err(|source| LoadError::Grid {
        line: Some(line),
        source,
    })
}

fn expect_arity(line: usize, keyword: &str, args: &[&str], n: usize) -> Result<(), LoadError> {
    if args.len() == n {
        Ok(())
    } else {
        Err(LoadError::Syntax {
            line,
            reason: format!("{keyword} takes {n} arguments, got {}", args.len()),
        })
    }
}

fn int(line: usize, token: &str) -> Result<u32, LoadError> {
    token.parse().map_err(|_| LoadError::Syntax {
        line,
        reason: format!("invalid coordinate '{token}'"),
    })
}
