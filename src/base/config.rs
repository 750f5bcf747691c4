use crate::base;

/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub input: base::Layout,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: base::Layout::default(),
            use_colored_output: true,
            use_unicode_symbols: true,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_to_string() {
        assert_eq!(
            Config::default().to_string(),
            indoc!(
                r#"
                {
                  "input": {
                    "delimiter": ",",
                    "missingMarker": "-",
                    "stationColumn": 0,
                    "capacityColumn": 6,
                    "consumptionColumn": 7,
                    "skipHeader": false,
                    "lenientNumbers": false
                  },
                  "useColoredOutput": true,
                  "useUnicodeSymbols": true
                }
                "#
            )
        );
    }

    #[rstest]
    #[case("{}", Config::default())]
    #[case(
        r#"{"useColoredOutput": false}"#,
        Config {
            use_colored_output: false,
            ..Config::default()
        },
    )]
    #[case(
        r#"{"input": {"delimiter": ";", "skipHeader": true}}"#,
        Config {
            input: base::Layout {
                delimiter: ';',
                skip_header: true,
                ..base::Layout::default()
            },
            ..Config::default()
        },
    )]
    fn test_from_str(#[case] s: &str, #[case] want: Config) {
        assert_eq!(s.parse::<Config>().unwrap(), want);
    }

    #[rstest]
    #[case("")]
    #[case(r#"{"useColoredOutput": "yes"}"#)]
    #[case(r#"{"input": 5}"#)]
    #[case(r#"{"input": {"delimiter": ",,"}}"#)]
    #[case(r#"{"input": {"capacityColumn": -1}}"#)]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Config>().is_err());
    }
}
