use anyhow::Context;

use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Reads and aggregates station records from `input`, which is resolved
/// against the working directory. `-` reads from stdin.
pub fn read_stations(
    input: &std::path::Path,
    layout: &base::Layout,
    fs: &base::Fs,
) -> anyhow::Result<base::Stations> {
    if input == std::path::Path::new("-") {
        return read_stations_from(std::io::stdin().lock(), layout, "standard input");
    }
    let path = fs.resolve(input);
    let file = std::fs::File::open(&path)
        .with_context(|| format!("failed to open '{}'", input.display()))?;
    read_stations_from(
        std::io::BufReader::new(file),
        layout,
        &format!("'{}'", input.display()),
    )
}

fn read_stations_from<R>(
    reader: R,
    layout: &base::Layout,
    source: &str,
) -> anyhow::Result<base::Stations>
where
    R: std::io::BufRead,
{
    let stations = base::Stations::from_reader(reader, layout)
        .with_context(|| format!("failed to read {}", source))?;
    if stations.is_empty() {
        log::warn!("no records in {}", source);
    }
    Ok(stations)
}

/// If `fullmatch` is false, ensures all patterns starts with and ends with
/// `*`, except for empty patterns which are left alone. If `fullmatch` is
/// true, does not modify patterns.
pub fn preprocess_patterns(patterns: &[String], fullmatch: bool) -> std::borrow::Cow<'_, [String]> {
    if fullmatch {
        return patterns.into();
    }
    patterns
        .iter()
        .map(|s| {
            let mut s2 = s.clone();
            if s2.is_empty() {
                return s2;
            }
            if !s2.starts_with('*') {
                s2.insert(0, '*');
            }
            if !s2.ends_with('*') {
                s2.push('*');
            }
            s2
        })
        .collect::<Vec<_>>()
        .into()
}

/// Iterates over stations such that each station:
/// - Matches any wildcard pattern in 'stations'
/// - Does not match any wildcard pattern in 'not_stations'
pub fn filter_stations<'a, T, U>(
    stations: &'a base::Stations,
    patterns: &[T],
    not_patterns: &[U],
) -> impl Iterator<Item = (&'a str, base::Kwh, base::Kwh)>
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let incl = patterns
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    let excl = not_patterns
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    stations.iter().filter(move |(s, _, _)| {
        incl.iter().any(|p| p.matches(s)) && !excl.iter().any(|p| p.matches(s))
    })
}
