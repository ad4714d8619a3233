//! Plain-text plan file parsing
//!
//! One directive per line; blank lines and `#` comments are ignored:
//!
//! ```text
//! grid 2 3
//! people Alice Bob Charlie Diana Eve
//! sit-with Alice Bob
//! separate Charlie Diana
//! ```
//!
//! `people` may appear on several lines and appends in order. `grid` must
//! appear exactly once. Name resolution and capacity checks happen when the
//! file is turned into a `SeatingPlan`.

use std::path::Path;

use crate::algorithm::planner::SeatingPlan;
use crate::io::configuration::{DEMO_COLS, DEMO_PEOPLE, DEMO_ROWS, DEMO_SEPARATE, DEMO_SIT_WITH};
use crate::io::error::{Result, SeatError, plan_file_error};

/// Parsed but unvalidated plan inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanFile {
    /// Grid rows
    pub rows: usize,
    /// Grid columns
    pub cols: usize,
    /// Roster in placement order
    pub people: Vec<String>,
    /// Pairs that must share an edge
    pub must_sit_with: Vec<(String, String)>,
    /// Pairs that must not share a cell or an edge
    pub must_separate: Vec<(String, String)>,
}

impl PlanFile {
    /// The built-in demonstration plan
    pub fn demo() -> Self {
        let pairs = |list: &[(&str, &str)]| -> Vec<(String, String)> {
            list.iter()
                .map(|&(a, b)| (a.to_string(), b.to_string()))
                .collect()
        };
        Self {
            rows: DEMO_ROWS,
            cols: DEMO_COLS,
            people: DEMO_PEOPLE.iter().map(ToString::to_string).collect(),
            must_sit_with: pairs(&DEMO_SIT_WITH),
            must_separate: pairs(&DEMO_SEPARATE),
        }
    }

    /// Read and parse a plan file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains a malformed directive
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SeatError::FileSystem {
            path: path.to_path_buf(),
            operation: "read plan file",
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse plan text; `origin` is used only in error messages
    ///
    /// # Errors
    ///
    /// Returns an error for unknown directives, wrong argument counts,
    /// non-numeric or repeated `grid` lines, or a missing `grid` line
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let mut grid: Option<(usize, usize)> = None;
        let mut people = Vec::new();
        let mut must_sit_with = Vec::new();
        let mut must_separate = Vec::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line
                .split_once('#')
                .map_or(raw_line, |(before, _)| before)
                .trim();
            if line.is_empty() {
                continue;
            }

            let mut words = line.split_whitespace();
            let Some(directive) = words.next() else {
                continue;
            };
            let args: Vec<&str> = words.collect();

            match directive {
                "grid" => {
                    if grid.is_some() {
                        return Err(plan_file_error(origin, line_number, &"grid declared twice"));
                    }
                    grid = Some(Self::parse_grid(&args, origin, line_number)?);
                }
                "people" => {
                    people.extend(args.iter().map(ToString::to_string));
                }
                "sit-with" => {
                    must_sit_with.push(Self::parse_pair(directive, &args, origin, line_number)?);
                }
                "separate" => {
                    must_separate.push(Self::parse_pair(directive, &args, origin, line_number)?);
                }
                other => {
                    return Err(plan_file_error(
                        origin,
                        line_number,
                        &format!("unknown directive '{other}'"),
                    ));
                }
            }
        }

        let (rows, cols) = grid.ok_or_else(|| SeatError::MissingDirective {
            path: origin.to_path_buf(),
            directive: "grid",
        })?;

        Ok(Self {
            rows,
            cols,
            people,
            must_sit_with,
            must_separate,
        })
    }

    /// Validate the inputs and build a plan
    ///
    /// # Errors
    ///
    /// Returns any construction error from `SeatingPlan::new`
    pub fn into_plan(self) -> Result<SeatingPlan> {
        SeatingPlan::new(
            self.rows,
            self.cols,
            &self.people,
            &self.must_sit_with,
            &self.must_separate,
        )
    }

    fn parse_grid(args: &[&str], origin: &Path, line: usize) -> Result<(usize, usize)> {
        let [rows, cols] = args else {
            return Err(plan_file_error(origin, line, &"expected 'grid <rows> <cols>'"));
        };
        let parse = |value: &str| {
            value.parse::<usize>().map_err(|e| {
                plan_file_error(origin, line, &format!("invalid grid size '{value}': {e}"))
            })
        };
        Ok((parse(rows)?, parse(cols)?))
    }

    fn parse_pair(
        directive: &str,
        args: &[&str],
        origin: &Path,
        line: usize,
    ) -> Result<(String, String)> {
        match args {
            [a, b] => Ok(((*a).to_string(), (*b).to_string())),
            _ => Err(plan_file_error(
                origin,
                line,
                &format!("expected '{directive} <name> <name>', got {} name(s)", args.len()),
            )),
        }
    }
}

impl Default for PlanFile {
    fn default() -> Self {
        Self::demo()
    }
}
