use crate::{Error, Grid, Result, Rule};

/// Returns the pattern of RLE data as a tight grid, and the rule from the
/// header line if it names one.
pub fn parse_rle(data: &[u8]) -> Result<(Grid, Option<Rule>)> {
    let invalid = |msg: &str| Error::InvalidRle(msg.to_string());

    let mut lines = data
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        // skipping comment lines
        .skip_while(|line| line.starts_with(b"#"));

    // next line must start with 'x'; parsing sizes and the optional rule
    let header = lines.next().ok_or_else(|| invalid("missing header"))?;
    let header = std::str::from_utf8(header).map_err(|_| invalid("header is not UTF-8"))?;
    let (mut width, mut height, mut rule) = (None, None, None);
    for field in header.split(',') {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| invalid("malformed header"))?;
        let value = value.trim();
        match key.trim() {
            "x" => width = value.parse::<usize>().ok(),
            "y" => height = value.parse::<usize>().ok(),
            "rule" => rule = Some(value.parse::<Rule>()?),
            _ => return Err(invalid("unknown header field")),
        }
    }
    let (width, height) = width
        .zip(height)
        .ok_or_else(|| invalid("header lacks sizes"))?;
    let mut grid = Grid::new(height, width)?;

    // run-length encoded pattern data
    let (mut x, mut y, mut cnt) = (0usize, 0usize, None::<usize>);
    'outer: for line in lines {
        for &b in line {
            if b.is_ascii_digit() {
                cnt = cnt
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|c| c.checked_add((b - b'0') as usize));
                if cnt.is_none() {
                    return Err(invalid("run count too large"));
                }
                continue;
            }
            if b.is_ascii_whitespace() {
                continue;
            }
            let n = cnt.take().unwrap_or(1);
            let too_large = || invalid("pattern exceeds declared size");
            match b {
                b'o' => {
                    let end = x.checked_add(n).ok_or_else(too_large)?;
                    if end > width || y >= height {
                        return Err(too_large());
                    }
                    for col in x..end {
                        grid.set(y, col, true);
                    }
                    x = end;
                }
                b'b' => {
                    x = x.checked_add(n).ok_or_else(too_large)?;
                    if x > width {
                        return Err(too_large());
                    }
                }
                b'$' => (x, y) = (0, y.checked_add(n).ok_or_else(too_large)?),
                b'!' => break 'outer,
                _ => return Err(invalid("unexpected symbol")),
            }
        }
    }
    Ok((grid, rule))
}
