//! Recorded pointer events.
//!
//! One event per line: the pointer's screen `x` and `y`, separated by
//! whitespace or a comma. Blank lines and `#` comments are skipped.

use anyhow::{Context, Result};
use kinarm_core::Point;
use std::io::BufRead;

pub fn parse_event(line: &str) -> Result<Option<Point>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty());

    let mut coordinate = |axis: &str| -> Result<f64> {
        let field = fields
            .next()
            .with_context(|| format!("missing {axis} coordinate"))?;
        field
            .parse()
            .with_context(|| format!("invalid {axis} coordinate {field:?}"))
    };

    let x = coordinate("x")?;
    let y = coordinate("y")?;

    if let Some(extra) = fields.next() {
        anyhow::bail!("unexpected trailing field {extra:?}");
    }

    Ok(Some(Point::new(x, y)))
}

pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read pointer events")?;
        let event = parse_event(&line).with_context(|| format!("line {}", index + 1))?;
        if let Some(point) = event {
            events.push(point);
        }
    }
    Ok(events)
}
