use crate::utils::invalid_format;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, tags = ["2024", "two-pointer"])]
pub struct Solver;

/// Dense disk map: run lengths alternating file, free, file, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskMap {
    runs: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

impl DiskMap {
    /// One entry per block, `Some(file id)` or `None` when free
    fn blocks(&self) -> Vec<Option<usize>> {
        self.runs
            .iter()
            .enumerate()
            .flat_map(|(i, len)| {
                let owner = (i % 2 == 0).then_some(i / 2);
                std::iter::repeat_n(owner, *len)
            })
            .collect()
    }

    /// File spans indexed by id, and the free spans between them
    fn spans(&self) -> (Vec<Span>, Vec<Span>) {
        let mut files = Vec::with_capacity(self.runs.len() / 2 + 1);
        let mut free = Vec::with_capacity(self.runs.len() / 2);
        let mut start = 0;
        for (i, len) in self.runs.iter().copied().enumerate() {
            let span = Span { start, len };
            if i % 2 == 0 {
                files.push(span);
            } else {
                free.push(span);
            }
            start += len;
        }
        (files, free)
    }
}

/// Moves the last file block into the first free block until none is left
/// before a file block
fn compact_blocks(blocks: &mut [Option<usize>]) {
    let mut left = 0;
    let mut right = blocks.len();
    loop {
        while left < right && blocks[left].is_some() {
            left += 1;
        }
        while right > left && blocks[right - 1].is_none() {
            right -= 1;
        }
        if right - left < 2 {
            return;
        }
        blocks.swap(left, right - 1);
    }
}

/// Moves whole files, highest id first, into the leftmost free span before
/// them that fits
fn compact_files(files: &mut [Span], free: &mut [Span]) {
    for file in files.iter_mut().rev() {
        if file.len == 0 {
            continue;
        }
        let target = free
            .iter_mut()
            .take_while(|span| span.start < file.start)
            .find(|span| span.len >= file.len);
        if let Some(span) = target {
            file.start = span.start;
            span.start += file.len;
            span.len -= file.len;
        }
    }
}

fn checksum(blocks: &[Option<usize>]) -> usize {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(pos, id)| id.map(|id| pos * id))
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = DiskMap;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim_end()
            .chars()
            .enumerate()
            .map(|(pos, c)| {
                c.to_digit(10)
                    .map(|d| d as usize)
                    .ok_or_else(|| anyhow!("unexpected {c:?} at column {}", pos + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|runs| DiskMap { runs })
            .map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut blocks = shared.blocks();
        compact_blocks(&mut blocks);
        Ok(checksum(&blocks).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (mut files, mut free) = shared.spans();
        compact_files(&mut files, &mut free);

        let total: usize = files
            .iter()
            .enumerate()
            .map(|(id, span)| (span.start..span.start + span.len).sum::<usize>() * id)
            .sum();
        Ok(total.to_string())
    }
}
