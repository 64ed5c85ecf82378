use std::ops::Deref;

use serde::Deserialize;

/// A duration written as whitespace separated parts like `"1h 30m"`.
///
/// Supported units are `ms`, `s`, `m`, `h` and `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::str::FromStr for Duration {
    type Err = InvalidDuration;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |acc, part| {
                let split = part
                    .find(|c: char| !c.is_ascii_digit())
                    .ok_or(InvalidDuration)?;
                let (value, unit) = part.split_at(split);
                let value = value.parse::<u64>().map_err(|_| InvalidDuration)?;
                let part = match unit {
                    "ms" => std::time::Duration::from_millis(value),
                    "s" => std::time::Duration::from_secs(value),
                    "m" => std::time::Duration::from_secs(value * 60),
                    "h" => std::time::Duration::from_secs(value * 60 * 60),
                    "d" => std::time::Duration::from_secs(value * 24 * 60 * 60),
                    _ => return Err(InvalidDuration),
                };
                Ok(acc + part)
            })
            .map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDuration;

impl std::fmt::Display for InvalidDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Invalid duration")
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13_000)),
            ("250ms", Some(250)),
            ("42m", Some(42 * 60 * 1000)),
            ("7h", Some(7 * 60 * 60 * 1000)),
            ("2d", Some(2 * 24 * 60 * 60 * 1000)),
            ("", Some(0)),
            ("1m 30s", Some(90_000)),
            ("1d 2h 3m 4s", Some((((24 + 2) * 60 + 3) * 60 + 4) * 1000)),
            ("xyz", None),
            ("7dd", None),
            ("12", None),
            ("s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input.clone())
                .ok()
                .map(|x| x.0.as_millis());
            assert_eq!(output, expected, "{input}");
        }
    }
}
