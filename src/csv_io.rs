use std::fs::File;
use std::io::{Read, Write};
use std::ops::RangeInclusive;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SortError};

/// Reads every field of every record as a base-10 integer, in file order.
/// There is no header row, every record must have as many fields as the
/// first, and fields are parsed as-is: surrounding whitespace is an error.
pub fn read_numbers<R: Read>(reader: R) -> Result<Vec<i64>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut numbers = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());
        for (field, value) in record.iter().enumerate() {
            let number = value.parse::<i64>().map_err(|source| SortError::Parse {
                line,
                field,
                value: value.to_string(),
                source,
            })?;
            numbers.push(number);
        }
    }
    Ok(numbers)
}

pub fn read_numbers_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SortError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let numbers = read_numbers(file)?;
    debug!("Read {} numbers from {}", numbers.len(), path.display());
    Ok(numbers)
}

/// Writes one integer per record.
pub fn write_numbers<W: Write>(writer: W, numbers: &[i64]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for number in numbers {
        writer.write_record([number.to_string()])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_numbers_to_path<P: AsRef<Path>>(path: P, numbers: &[i64]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| SortError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_numbers(file, numbers)?;
    debug!("Wrote {} numbers to {}", numbers.len(), path.display());
    Ok(())
}

/// Uniformly random integers from a seeded generator, so the same seed
/// always produces the same input file.
pub fn generate_numbers(count: usize, seed: u64, range: RangeInclusive<i64>) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| rng.gen_range(range.clone()))
        .collect()
}
