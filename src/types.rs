use std::str::FromStr;
use std::time::Duration;

/// Parse a simple duration string like `"3s"`, `"250ms"`, `"1m"`, `"2h"`.
///
/// Used for `--timeout` on the CLI and `[defaults].timeout` in the config.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    // Find the boundary between digits and suffix.
    let idx = s
        .chars()
        .position(|c| !c.is_ascii_digit())
        .ok_or_else(|| "duration missing unit suffix".to_string())?;

    let (num_part, unit_part) = s.split_at(idx);
    let value: u64 = num_part
        .parse()
        .map_err(|e| format!("invalid duration number '{}': {}", num_part, e))?;
    let unit = unit_part.trim().to_lowercase();

    let secs = |mul: u64| {
        value
            .checked_mul(mul)
            .map(Duration::from_secs)
            .ok_or_else(|| format!("duration '{}' is too large", s))
    };

    match unit.as_str() {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => secs(1),
        "m" => secs(60),
        "h" => secs(60 * 60),
        _ => Err(format!(
            "unsupported duration unit '{}'; expected ms, s, m, or h",
            unit
        )),
    }
}

/// Parse a timeout: a [`parse_duration`] string that must be non-zero.
///
/// Shared by `--timeout` and `[defaults].timeout` so both accept the same
/// values.
pub fn parse_timeout(s: &str) -> Result<Duration, String> {
    let dur = parse_duration(s)?;
    if dur.is_zero() {
        return Err("timeout must be greater than zero".to_string());
    }
    Ok(dur)
}

/// A `KEY=VALUE` environment override as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvAssignment {
    pub key: String,
    pub value: String,
}

impl FromStr for EnvAssignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("invalid environment override '{s}' (expected KEY=VALUE)"))?;
        validate_env_key(key)?;
        Ok(EnvAssignment {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Check that `key` can be used as an environment variable name.
///
/// The OS rejects (or silently mangles) names that are empty or contain `=`
/// or a NUL byte.
pub fn validate_env_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("environment variable name must not be empty".to_string());
    }
    if key.contains('=') || key.contains('\0') {
        return Err(format!(
            "environment variable name '{}' must not contain '=' or NUL",
            key.escape_debug()
        ));
    }
    Ok(())
}

/// Build a shell line from CLI words.
///
/// The first word is passed through verbatim so it can hold operators and
/// expansions (`"make && make test"`). Every later word is quoted so it
/// reaches the command as exactly one literal argument.
pub fn shell_line(words: &[String]) -> String {
    let mut line = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            line.push_str(word);
        } else {
            line.push(' ');
            line.push_str(&shell_quote(word));
        }
    }
    line
}

/// Quote `word` for the platform shell (`sh` or `cmd`).
pub fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./=:,@%+".contains(c));
    if plain {
        return word.to_string();
    }
    if cfg!(windows) {
        format!("\"{}\"", word.replace('"', "\"\""))
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_units() {
        assert_eq!(parse_duration("250ms"), Ok(Duration::from_millis(250)));
        assert_eq!(parse_duration("3s"), Ok(Duration::from_secs(3)));
        assert_eq!(parse_duration(" 1m "), Ok(Duration::from_secs(60)));
        assert_eq!(parse_duration("2h"), Ok(Duration::from_secs(7200)));
        assert_eq!(parse_duration("5S"), Ok(Duration::from_secs(5)));
    }

    #[test]
    fn rejects_malformed_durations() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("10").is_err());
        assert!(parse_duration("s").is_err());
        assert!(parse_duration("3d").is_err());
        assert!(parse_duration("18446744073709551615h").is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert_eq!(parse_timeout("2s"), Ok(Duration::from_secs(2)));
        assert!(parse_timeout("0s").unwrap_err().contains("greater than zero"));
        assert!(parse_timeout("0ms").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn shell_words_after_the_first_are_quoted() {
        let words: Vec<String> = ["printf", "%s\\n", "a b", "it's", ""]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(shell_line(&words), r"printf '%s\n' 'a b' 'it'\''s' ''");

        let single = vec!["echo a && echo b".to_string()];
        assert_eq!(shell_line(&single), "echo a && echo b");
    }

    #[test]
    fn env_assignment_splits_on_first_equals() {
        let a: EnvAssignment = "OPTS=a=b".parse().unwrap();
        assert_eq!(a.key, "OPTS");
        assert_eq!(a.value, "a=b");

        let empty: EnvAssignment = "EMPTY=".parse().unwrap();
        assert_eq!(empty.value, "");

        assert!("NOEQUALS".parse::<EnvAssignment>().is_err());
        assert!("=value".parse::<EnvAssignment>().is_err());
    }
}
