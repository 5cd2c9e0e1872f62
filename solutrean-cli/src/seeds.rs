use anyhow::{Result, bail};

/// Default seed used when none are supplied.
pub const DEFAULT_SEED: u64 = 1337;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Resolve comma-separated seed tokens into unique seeds, keeping first-seen order.
///
/// Accepts decimal integers (negative values use their magnitude) and
/// `0x`-prefixed hexadecimal.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds: Vec<u64> = Vec::new();

    for token in tokens {
        if token.is_empty() {
            continue;
        }
        let seed = parse_seed(token)?;
        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    }

    if seeds.is_empty() {
        seeds.push(DEFAULT_SEED);
    }

    Ok(seeds)
}

fn parse_seed(token: &str) -> Result<u64> {
    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        && let Ok(value) = u64::from_str_radix(hex, 16)
    {
        return Ok(value);
    }

    if let Ok(value) = token.parse::<u64>() {
        return Ok(value);
    }

    if let Ok(value) = token.parse::<i64>() {
        return Ok(value.unsigned_abs());
    }

    bail!("Unrecognized seed token: {token}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_empties() {
        assert_eq!(split_csv(" 1, 2 ,,3 "), vec!["1", "2", "3"]);
    }

    #[test]
    fn resolves_numeric_hex_and_negative_tokens() {
        let tokens = split_csv("42,0xFF,-7,42");
        let seeds = resolve_seed_inputs(&tokens).unwrap();
        assert_eq!(seeds, vec![42, 255, 7]);
    }

    #[test]
    fn empty_input_falls_back_to_default() {
        assert_eq!(resolve_seed_inputs(&[]).unwrap(), vec![DEFAULT_SEED]);
    }

    #[test]
    fn rejects_garbage() {
        let err = resolve_seed_inputs(&["ORANGE42".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Unrecognized seed token"));
    }
}
