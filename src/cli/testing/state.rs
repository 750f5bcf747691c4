use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs`
/// must not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

/// The expected or actual contents of a working directory. The config file is
/// compared after deserializing; every other file is compared verbatim.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    files: std::collections::BTreeMap<String, String>,
}

impl State {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`].
    pub fn with_config<T>(mut self, config: T) -> Self
    where
        T: TryInto<base::Config> + std::fmt::Debug,
        <T as TryInto<base::Config>>::Error: std::fmt::Debug,
    {
        self.config = Some(config.try_into().unwrap());
        self
    }

    /// Sets the contents of a file other than the config file.
    pub fn with_file(mut self, name: &str, contents: &str) -> Self {
        self.files.insert(name.to_string(), contents.to_string());
        self
    }

    /// Reads the top level files of `fs`'s directory.
    pub fn from_fs(fs: &base::Fs) -> Self {
        let config_path = fs.path::<base::Config>();
        let mut state = Self::new();
        if config_path.exists() {
            state.config = Some(fs.read::<base::Config>().unwrap());
        }
        for entry in std::fs::read_dir(fs.dir()).unwrap() {
            let path = entry.unwrap().path();
            if path == config_path || !path.is_file() {
                continue;
            }
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            state
                .files
                .insert(name, std::fs::read_to_string(&path).unwrap());
        }
        state
    }
}

/// Representation of a working directory's file contents. Unset config
/// corresponds to a nonexistent config file.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    files: Vec<(&'a str, &'a str)>,
}

impl<'a> StrState<'a> {
    /// Constructs the representation of an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory's [`base::Config`] file contents.
    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    /// Adds a file other than the config file.
    pub fn with_file(mut self, name: &'a str, contents: &'a str) -> Self {
        self.files.push((name, contents));
        self
    }

    /// Writes string contents verbatim to `fs`. Panics if the config is not a
    /// valid serialization of [`base::Config`].
    pub fn to_fs(&self, fs: &base::Fs) {
        if let Some(s) = self.config {
            let config = s.parse::<base::Config>();
            assert!(config.is_ok(), "{:?}", config);
            std::fs::write(fs.path::<base::Config>(), s).unwrap()
        }
        for (name, contents) in self.files.iter() {
            std::fs::write(fs.resolve(name), contents).unwrap()
        }
    }

    pub fn to_state(&self) -> State {
        let mut state = State::new();
        if let Some(s) = self.config {
            state = state.with_config(s);
        }
        for (name, contents) in self.files.iter() {
            state = state.with_file(name, contents);
        }
        state
    }
}
