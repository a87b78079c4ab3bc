//! 输入行解析：三组以空格分隔、行间以逗号分隔的矩阵文本.
//!
//! ```text
//! 011,101,110 ABD,BAC,DCA ABD,BAC,DCA
//! ```
//!
//! 第一组为 `0/1` 道路矩阵，后两组为单字符代价（建造、拆除）.
use nom::IResult;
use nom::Parser;
use nom::bytes::complete::take_while1;
use nom::character::complete::{char, space0, space1};
use nom::multi::separated_list1;
use nom::sequence::delimited;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::ids::CityId;
use crate::network::index_vec::Idx;
use crate::network::matrix::{CityMatrix, Cost, CostMatrix};
use crate::network::{NetworkError, RoadNetwork};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unable to parse input: {0}")]
    Syntax(String),
    #[error("unable to parse whole input, remaining: {0:?}")]
    Trailing(String),
    #[error("expected 3 matrix groups, found {0}")]
    GroupCount(usize),
    #[error("{group} group has {found} rows, expected {expected}")]
    RowCount {
        group: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{group} row {row} has {found} cells, expected {expected}")]
    RowLength {
        group: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("road row {row} column {col}: expected '0' or '1', found {token:?}")]
    RoadDigit { row: usize, col: usize, token: char },
    #[error("{group} row {row} column {col}: unknown cost token {token:?}")]
    CostToken {
        group: &'static str,
        row: usize,
        col: usize,
        token: char,
    },
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Letter-to-cost decoding: `A..=Z` from `upper_base`, `a..=z` from `lower_base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostAlphabet {
    pub upper_base: Cost,
    pub lower_base: Cost,
}

impl CostAlphabet {
    /// `A = 0 … Z = 25`, `a = 26 … z = 51`.
    pub const ZERO_BASED: Self = Self {
        upper_base: 0,
        lower_base: 26,
    };
    /// `A = 1 … Z = 26`, `a = 27 … z = 52`.
    pub const ONE_BASED: Self = Self {
        upper_base: 1,
        lower_base: 27,
    };

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "zero-based" => Some(Self::ZERO_BASED),
            "one-based" => Some(Self::ONE_BASED),
            _ => None,
        }
    }

    pub fn decode(&self, token: char) -> Option<Cost> {
        match token {
            'A'..='Z' => Some(self.upper_base + (token as u8 - b'A') as Cost),
            'a'..='z' => Some(self.lower_base + (token as u8 - b'a') as Cost),
            _ => None,
        }
    }
}

impl Default for CostAlphabet {
    fn default() -> Self {
        Self::ZERO_BASED
    }
}

pub fn map_result<T>(result: IResult<&str, T>) -> Result<T, ParseError> {
    match result {
        IResult::Ok((remaining, val)) => {
            if remaining.is_empty() {
                Ok(val)
            } else {
                Err(ParseError::Trailing(remaining.to_string()))
            }
        }
        IResult::Err(err) => Err(ParseError::Syntax(format!("{:?}", err))),
    }
}

fn parse_row(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric()).parse(input)
}

fn parse_group(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char(','), parse_row).parse(input)
}

fn parse_groups(input: &str) -> IResult<&str, Vec<Vec<&str>>> {
    delimited(space0, separated_list1(space1, parse_group), space0).parse(input)
}

/// Parses one input line into a network. A blank line is the empty network.
pub fn parse_network(line: &str, alphabet: CostAlphabet) -> Result<RoadNetwork, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(RoadNetwork::empty());
    }

    let groups = map_result(parse_groups(line))?;
    let [roads, build, destroy] = groups.as_slice() else {
        return Err(ParseError::GroupCount(groups.len()));
    };

    let cities = roads.len();
    let roads = decode_group("road", roads, cities, |row, col, token| match token {
        '0' => Ok(false),
        '1' => Ok(true),
        _ => Err(ParseError::RoadDigit { row, col, token }),
    })?;
    let build = decode_costs("build", build, cities, alphabet)?;
    let destroy = decode_costs("destroy", destroy, cities, alphabet)?;

    Ok(RoadNetwork::new(roads, build, destroy)?)
}

fn decode_costs(
    group: &'static str,
    rows: &[&str],
    cities: usize,
    alphabet: CostAlphabet,
) -> Result<CostMatrix, ParseError> {
    decode_group(group, rows, cities, |row, col, token| {
        alphabet.decode(token).ok_or(ParseError::CostToken {
            group,
            row,
            col,
            token,
        })
    })
}

fn decode_group<T, F>(
    group: &'static str,
    rows: &[&str],
    cities: usize,
    mut decode: F,
) -> Result<CityMatrix<T>, ParseError>
where
    T: Clone + Default,
    F: FnMut(usize, usize, char) -> Result<T, ParseError>,
{
    if rows.len() != cities {
        return Err(ParseError::RowCount {
            group,
            expected: cities,
            found: rows.len(),
        });
    }

    let mut matrix = CityMatrix::new(cities, T::default());
    for (row, text) in rows.iter().enumerate() {
        let found = text.chars().count();
        if found != cities {
            return Err(ParseError::RowLength {
                group,
                row,
                expected: cities,
                found,
            });
        }
        for (col, token) in text.chars().enumerate() {
            let value = decode(row, col, token)?;
            matrix.set(CityId::from_usize(row), CityId::from_usize(col), value);
        }
    }
    Ok(matrix)
}
